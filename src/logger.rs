//! Logging setup for Stencil.
//! All diagnostics go through the `log` facade; the substitution and
//! resolver modules emit per-entry details at debug level, enabled by
//! `--verbose`.

/// Initializes the global logger at info level, or debug when `verbose`
/// is set.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
