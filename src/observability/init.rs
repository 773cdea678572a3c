//! Subscriber installation.

use super::file_writer::RotatingFile;
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "trackside.log";

const DEFAULT_LEVEL: &str = "info";

/// Directive used when `RUST_LOG` is unset.
fn configured_directive(config: &Config) -> &str {
    config
        .trace_level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the global subscriber writing to `<data dir>/trackside.log`.
///
/// `RUST_LOG` wins over `config.trace_level`, which wins over `info`. An
/// unparseable configured level falls back to `info`.
///
/// # Returns
///
/// The log file path, or `None` when the data directory cannot be created
/// or a subscriber is already installed. Logging is optional; the console
/// runs the same either way.
///
/// # Example
///
/// ```rust,no_run
/// use trackside::observability::init_tracing;
/// use trackside::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(configured_directive(config)).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    });

    let data_dir = crate::infrastructure::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    let file_layer = fmt::layer()
        .with_writer(Arc::new(RotatingFile::new(log_path.clone())))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::debug!(log_path = %log_path.display(), "tracing initialized");
    Some(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_defaults_to_info() {
        let mut config = Config::default();
        assert_eq!(configured_directive(&config), "info");

        config.trace_level = Some("  ".to_string());
        assert_eq!(configured_directive(&config), "info");

        config.trace_level = Some("trackside=trace".to_string());
        assert_eq!(configured_directive(&config), "trackside=trace");
    }
}
