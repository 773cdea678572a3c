//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use trackside::app::AppState;
//! use trackside::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let frame = render(&state, 80);
//! assert!(frame.contains("INFO"));
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the console UI into an ANSI-styled frame.
///
/// Computes the view model from application state and lays out the
/// components. Does not clear the screen; the caller writes the frame and
/// drains the notifications it showed.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `cols` - Terminal width in columns
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);

    let mut frame = String::new();
    components::render_frame(&mut frame, &viewmodel, &state.theme, cols);
    frame
}
