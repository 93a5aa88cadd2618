use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// stdout is reserved for the startup announcement, logs go to stderr
pub fn init() {

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

}
