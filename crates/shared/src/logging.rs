// Logging setup shared by the front-ends

/// Map a `LOG_LEVEL` string onto a filter. Unknown values fall back to `Info`.
pub fn level_filter(level: &str) -> log::LevelFilter {
    match level.trim().to_uppercase().as_str() {
        "OFF" => log::LevelFilter::Off,
        "ERROR" => log::LevelFilter::Error,
        "WARN" => log::LevelFilter::Warn,
        "INFO" => log::LevelFilter::Info,
        "DEBUG" => log::LevelFilter::Debug,
        "TRACE" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

/// Level for loggers that take a `log::Level` rather than a filter, such as
/// the browser console logger. `None` means logging is switched off.
pub fn console_level(level: &str) -> Option<log::Level> {
    level_filter(level).to_level()
}

/// Install `env_logger` at the given level. Calling it twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level_filter(level));

    // The HTTP stack is chatty at debug level
    builder.filter_module("hyper", log::LevelFilter::Warn);
    builder.filter_module("reqwest", log::LevelFilter::Warn);

    if builder.try_init().is_ok() {
        log::info!("Logging initialized with level: {}", level);
    }
}
