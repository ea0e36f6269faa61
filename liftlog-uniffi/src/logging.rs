use log::LevelFilter;

fn apply_level(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .format_timestamp_millis()
        .target(env_logger::Target::Stdout)
        .filter_level(level)
        .try_init();
    // Re-initialisation from the host just tightens or loosens the filter.
    if result.is_err() {
        log::set_max_level(level);
    }
}

/// Set the log filter from a level name. Returns false for names that
/// are not a level.
#[uniffi::export]
pub fn set_log_level(level: &str) -> bool {
    let parsed = match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return false,
    };
    apply_level(parsed);
    true
}

#[uniffi::export]
pub fn set_debug_log_level() {
    apply_level(LevelFilter::Debug);
}
