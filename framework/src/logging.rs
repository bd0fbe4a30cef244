use env_logger::Builder;
use log::LevelFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

/// Initializes the global logger.
///
/// The graphics stack is very chatty on debug level, so its targets are
/// capped; everything can still be overridden through `RUST_LOG`.
pub fn init_logger() {
    Builder::new()
        .filter_level(DEFAULT_LEVEL)
        .filter_module("wgpu_core", LevelFilter::Warn)
        .filter_module("wgpu_hal", LevelFilter::Warn)
        .filter_module("naga", LevelFilter::Info)
        .filter_module("calloop", LevelFilter::Info)
        .parse_default_env()
        .init();
}
