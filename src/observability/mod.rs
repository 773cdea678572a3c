//! Structured logging to a rotating file.
//!
//! The console owns the terminal, so log output goes to a file instead of
//! stderr. Spans opened around filter and sort passes, event handling,
//! gateway requests and store mutations appear as context on every line.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → trackside.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data dir>/trackside.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option (file or `--trace-level`)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, LOG_FILE_NAME};
