//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where the console keeps its configuration and log
//! files, following each platform's conventions.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_config_dir, get_data_dir};
