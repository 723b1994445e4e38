// phishscore/src/logger.rs
//! Logger bootstrapping for the CLI.

use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit level overrides `RUST_LOG`; `None` defers to the
/// environment. Repeated initialization (as happens under the test
/// harness) is ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
