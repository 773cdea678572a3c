//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! shell (main.rs) and the gateway/store layers. It implements the
//! event-driven architecture that powers the console.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Shell line → Event → Event Handler → State Mutations → Actions → Executor
//!                           ↑                                         ↓
//!                           └────────── Store updates, toasts ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`input`]: Shell line parsing into events
//! - [`modes`]: Page, view and modal state types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use trackside::app::{handle_event, input::parse_command, AppState};
//! use trackside::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let event = parse_command("athletes")?;
//! let (_rerender, actions) = handle_event(&mut state, &event)?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), trackside::domain::TracksideError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::{Action, Draft};
pub use handler::{handle_event, Event};
pub use modes::{AthleteView, Modal, ModalMode, Page};
pub use state::{AppState, SharedData};
