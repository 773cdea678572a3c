//! Platform path resolution.
//!
//! Uses the `directories` crate so that configuration and logs land where the
//! platform expects them (`~/.config/trackside` and `~/.local/share/trackside`
//! on Linux, `~/Library/Application Support/trackside` on macOS, and so on).

use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Application name used for every platform directory.
const APP_NAME: &str = "trackside";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Returns the data directory holding `trackside.log`.
///
/// Falls back to `<tmp>/trackside` when no home directory can be determined.
///
/// # Examples
///
/// ```
/// use trackside::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("trackside"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || std::env::temp_dir().join(APP_NAME),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Returns the configuration directory, `None` without a home directory.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns `<config dir>/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and all paths when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use trackside::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), Path::new("/absolute/path"));
/// assert!(!expand_tilde("~/themes/dark.toml").starts_with("~"));
/// ```
#[must_use]
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Some(home) = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()) else {
        return path.to_path_buf();
    };

    if path == Path::new("~") {
        home
    } else if let Ok(rest) = path.strip_prefix("~") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}
