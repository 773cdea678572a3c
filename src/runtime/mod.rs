//! Side effect execution.
//!
//! The event handler only describes API calls as [`Action`](crate::app::Action)s.
//! The [`Executor`] runs them one at a time, in emission order, against a
//! [`Gateway`](crate::gateway::Gateway), routing every result through the
//! collection stores so the caches stay consistent with the server.
//!
//! # Architecture
//!
//! - `executor`: action dispatch, store updates and derived-view refresh

pub mod executor;

pub use executor::Executor;
