//! Remote collection gateway.
//!
//! Every request to the results API goes through the [`Gateway`] trait: a verb,
//! a path relative to the API root and an optional JSON body in, an optional
//! JSON payload out. Non-2xx responses surface as
//! [`TracksideError::Http`](crate::domain::TracksideError::Http) carrying the
//! user-facing message for the status.
//!
//! # Modules
//!
//! - `backend`: The [`Gateway`] trait, verbs and route construction
//! - `http`: [`HttpGateway`] backed by `reqwest`
//! - `memory`: [`MemoryGateway`] for tests and offline use
//! - `client`: Typed helpers decoding payloads into entities
//! - `status`: HTTP status to message mapping

pub mod backend;
pub mod client;
pub mod http;
pub mod memory;
pub mod status;

pub use backend::{routes, Gateway, Verb};
pub use http::HttpGateway;
pub use memory::MemoryGateway;
pub use status::{http_error, message_for_status};
