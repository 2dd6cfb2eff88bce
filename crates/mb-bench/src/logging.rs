use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr `fmt` subscriber.
///
/// Defaults to `warn`, which keeps stderr clear for the self-check diagnostic;
/// `RUST_LOG` (e.g. `mb_bench=debug,mb_matrix=trace`) raises it. Safe to call
/// more than once.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .ok();
}
