use env_logger::Builder;
use log::LevelFilter;

/// Installs the process logger for the game.
///
/// Our own records show at debug level with `verbose`, otherwise at info;
/// other crates stay at warn. A `RUST_LOG` setting is applied on top.
/// Calling this again once a logger exists does nothing.
pub fn init(verbose: bool) {
    let ours = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let installed = Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), ours)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init();
    if installed.is_ok() {
        log::debug!("logging at {ours} for {}", env!("CARGO_CRATE_NAME"));
    }
}
