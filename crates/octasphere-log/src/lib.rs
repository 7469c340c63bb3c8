//! Structured logging for the octasphere generator.
//!
//! Console output with uptime timestamps and module paths, plus a JSON log
//! file in debug builds. `RUST_LOG` wins over the configured level.

use std::fs::File;
use std::path::Path;

use octasphere_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE: &str = "octasphere.log";

/// Filter directive for the given config, falling back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - enables the file layer
/// * `config` - supplies `debug.log_level`
///
/// ```no_run
/// use octasphere_config::Config;
/// use octasphere_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(log_file) = create_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create `log_dir` if needed and truncate [`LOG_FILE`] inside it.
///
/// Returns `None` when either step fails; logging then stays console-only.
pub fn create_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_dir.join(LOG_FILE)).ok()
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_directive_without_config() {
        assert_eq!(filter_directive(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_directive_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug,octasphere_planet=trace".to_string();
        let directive = filter_directive(Some(&config));
        assert_eq!(directive, "debug,octasphere_planet=trace");
        assert!(EnvFilter::try_new(&directive).is_ok());
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filters_parse() {
        for directive in [
            "info",
            "warn,octasphere_planet=debug",
            "info,octasphere_planet=trace,octasphere_config=warn",
            "error",
        ] {
            assert!(
                EnvFilter::try_new(directive).is_ok(),
                "failed to parse filter: {directive}"
            );
        }
    }

    #[test]
    fn test_create_log_file_makes_missing_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");
        assert!(create_log_file(&log_dir).is_some());
        assert!(log_dir.join(LOG_FILE).is_file(), "log file missing in {log_dir:?}");
    }

    #[test]
    fn test_create_log_file_truncates_previous_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(LOG_FILE), "stale").unwrap();
        create_log_file(temp_dir.path()).unwrap();
        let contents = std::fs::read_to_string(temp_dir.path().join(LOG_FILE)).unwrap();
        assert!(contents.is_empty(), "previous log survived: {contents:?}");
    }

    #[test]
    fn test_create_log_file_fails_when_dir_is_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("logs");
        std::fs::write(&blocker, "not a directory").unwrap();
        assert!(create_log_file(&blocker).is_none());
    }
}
