//! Trackside: a terminal administration console for track-and-field results.
//!
//! Trackside talks to a REST API holding athletes, clubs, disciplines, track
//! meets, items and competition results. It provides:
//! - Cached collections kept consistent with every create, edit and delete
//! - Client-side sorting on any column with ascending/descending toggle
//! - A results search combined with discipline and gender filters
//! - Details, edit, create and delete modals backed by typed forms
//! - An offline mode over in-memory demo data
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell / CLI (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/, forms/)                   │  ← State machine
//! │  - Command parsing and event handling               │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Runtime       │
//! │ (ui/)         │   │ (engine/)     │   │ (runtime/)    │
//! │ - Rendering   │   │ - Sort keys   │   │ - Executor    │
//! │ - Theming     │   │ - Comparator  │   │               │
//! │ - Components  │   │ - Filter      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Stores (store/) and Gateway (gateway/)             │
//! │  - Per-collection caches, catalog, notifications    │
//! │  - HTTP and in-memory backends                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Infrastructure, Observability    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Entities, measurements and errors
//! - [`engine`]: Sort and filter engines
//! - [`forms`]: Edit/create form state and validation
//! - [`gateway`]: Remote collection gateway
//! - [`store`]: Collection caches, catalog and notifications
//! - [`runtime`]: Action executor
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Logging to a rotating file
//!
//! # Configuration
//!
//! `<config dir>/trackside/config.toml`, every key optional:
//!
//! ```toml
//! api_url = "http://localhost:8080/api"
//! theme = "catppuccin-latte"
//! theme_file = "~/themes/dark.toml"
//! trace_level = "debug"
//! ```
//!
//! `TRACKSIDE_API_URL` overrides `api_url`; command line flags override both.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use trackside::{handle_event, initialize, Config, Event};
//! use trackside::app::modes::Page;
//! use trackside::gateway::MemoryGateway;
//! use trackside::runtime::Executor;
//!
//! let mut state = initialize(&Config::default());
//! let executor = Executor::new(Arc::new(MemoryGateway::with_demo_data()));
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let (_, actions) = handle_event(&mut state, &Event::Navigate(Page::Results))?;
//! executor.execute_all(&mut state, actions).await;
//! assert!(!state.visible_results().is_empty());
//! # Ok::<(), trackside::TracksideError>(())
//! # }).unwrap();
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod engine;
pub mod forms;
pub mod gateway;
pub mod infrastructure;
pub mod runtime;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Result, TracksideError};
pub use runtime::Executor;
pub use ui::Theme;

use gateway::{Gateway, HttpGateway, MemoryGateway};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// API root used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Environment variable overriding the configured API root.
pub const API_URL_ENV: &str = "TRACKSIDE_API_URL";

/// Console configuration.
///
/// Resolved in three layers: the TOML file, then [`API_URL_ENV`], then command
/// line flags (applied by the binary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the results API, without trailing slash.
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Serve in-memory demo data instead of calling the API.
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            offline: false,
        }
    }
}

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    theme: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
    #[serde(default)]
    offline: bool,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::Config`] for malformed TOML, unknown keys or
    /// an empty `api_url`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trackside::Config;
    ///
    /// let config = Config::from_toml_str("api_url = \"https://results.example.org/api/\"")?;
    /// assert_eq!(config.api_url, "https://results.example.org/api");
    /// assert_eq!(config.theme_name, None);
    /// # Ok::<(), trackside::TracksideError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| TracksideError::Config(format!("Failed to parse config: {e}")))?;

        let mut config = Self {
            theme_name: file.theme,
            theme_file: file.theme_file,
            trace_level: file.trace_level,
            offline: file.offline,
            ..Self::default()
        };
        if let Some(url) = file.api_url {
            config.set_api_url(&url)?;
        }
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// With `None`, the platform default path is used and a missing file
    /// yields [`Config::default`]. An explicitly given path must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::Config`] when an explicit file is missing or
    /// any file fails to parse, and [`TracksideError::Io`] on read failures.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path.is_some();
        let Some(path) = path.map(Path::to_path_buf).or_else(infrastructure::default_config_path) else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "config file loaded");
                Self::from_toml_str(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if explicit {
                    Err(TracksideError::Config(format!("Config file not found: {}", path.display())))
                } else {
                    Ok(Self::default())
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Applies [`API_URL_ENV`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::Config`] when the variable is set but empty.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::Config`] when the API URL override is empty.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(API_URL_ENV) {
            self.set_api_url(&url)?;
        }
        Ok(())
    }

    /// Sets the API root, dropping any trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::Config`] for blank URLs.
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(TracksideError::Config("api_url must not be empty".to_string()));
        }
        url.clone_into(&mut self.api_url);
        Ok(())
    }

    /// Loads the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }

    /// Builds the gateway the configuration points at.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn Gateway> {
        if self.offline {
            tracing::info!("offline mode, serving demo data");
            Arc::new(MemoryGateway::with_demo_data())
        } else {
            tracing::info!(api_url = %self.api_url, "using HTTP gateway");
            Arc::new(HttpGateway::new(self.api_url.clone()))
        }
    }
}

/// Initializes the console state with configuration.
///
/// Creates a new `AppState` on the info page with:
/// - Loaded theme (from file, name, or default)
/// - Empty collection caches (filled by the first navigation)
///
/// # Example
///
/// ```rust
/// use trackside::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("catppuccin-frappe".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-frappe");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, offline = config.offline, "initializing trackside");
    AppState::new(config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_keeps_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn file_keys_are_read() {
        let config = Config::from_toml_str(
            "api_url = \"http://results.local/api\"\ntheme = \"catppuccin-latte\"\ntrace_level = \"debug\"\noffline = true\n",
        )
        .unwrap();

        assert_eq!(config.api_url, "http://results.local/api");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.offline);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("scan_paths = []").unwrap_err();
        assert!(matches!(err, TracksideError::Config(_)));
    }

    #[test]
    fn blank_api_url_is_rejected() {
        assert!(Config::from_toml_str("api_url = \"  \"").is_err());
    }

    #[test]
    fn env_overrides_file() {
        let mut config = Config::from_toml_str("api_url = \"http://a/api\"").unwrap();
        config
            .apply_env_from(|key| (key == API_URL_ENV).then(|| "http://b/api/".to_string()))
            .unwrap();
        assert_eq!(config.api_url, "http://b/api");
    }

    #[test]
    fn unset_env_changes_nothing() {
        let mut config = Config::default();
        config.apply_env_from(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"catppuccin-frappe\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, Theme::default().name);
    }

    #[test]
    fn theme_file_wins_over_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(dir.path().join("missing.toml").display().to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().name, Theme::default().name);
    }

    #[test]
    fn initialize_starts_on_info_page() {
        let state = initialize(&Config::default());
        assert_eq!(state.page, app::Page::Info);
        assert!(state.data.athletes.is_empty());
    }
}
