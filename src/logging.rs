// src/logging.rs
use tracing::level_filters::LevelFilter;

/// Install the stderr subscriber. Later calls keep the first one.
pub fn init(level: LevelFilter) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(error = %err, "subscriber already installed");
    }
}
