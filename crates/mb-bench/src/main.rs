//! mb-bench CLI: self-check, then time one matrix multiplication.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use mb_bench::{BenchConfig, CHECK_SIZE, DEFAULT_SIZE, EXPECTED_CENTER, TOLERANCE};
use mb_matrix::{MatmulBackend, NaiveBackend, TransposedBackend};

#[derive(Parser, Debug)]
#[command(name = "mb-bench")]
#[command(about = "Multiply two generated square matrices and time it")]
#[command(version)]
struct Cli {
    /// Matrix dimension (rounded down to an even number)
    #[arg(default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Multiplication kernel
    #[arg(long, value_enum, default_value_t = Backend::Transposed)]
    backend: Backend,

    /// Expected center value of the self-check
    #[arg(long, default_value_t = EXPECTED_CENTER, allow_negative_numbers = true)]
    expected: f64,

    /// Absolute tolerance of the self-check
    #[arg(long, default_value_t = TOLERANCE)]
    tolerance: f64,

    /// Requested size of the self-check run
    #[arg(long, default_value_t = CHECK_SIZE)]
    check_size: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Transpose the right operand, then take row-by-row dot products
    Transposed,
    /// Textbook triple loop
    Naive,
}

impl Backend {
    fn instance(self) -> Box<dyn MatmulBackend> {
        match self {
            Backend::Transposed => Box::new(TransposedBackend::new()),
            Backend::Naive => Box::new(NaiveBackend::new()),
        }
    }
}

fn main() -> ExitCode {
    mb_bench::logging::init();
    let cli = Cli::parse();

    let config = BenchConfig::default()
        .with_size(cli.size)
        .with_check_size(cli.check_size)
        .with_expected(cli.expected)
        .with_tolerance(cli.tolerance);
    let backend = cli.backend.instance();

    let stdout = std::io::stdout();
    match mb_bench::run(&config, backend.as_ref(), &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
