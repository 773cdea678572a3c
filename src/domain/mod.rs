//! Domain layer for the Trackside console.
//!
//! This module contains the entity types exchanged with the results API and the
//! error type shared by every layer. Nothing here performs I/O; the gateway and
//! stores build on these types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entity`]: Collection metadata and the [`Entity`] trait
//! - [`catalog`]: Clubs, disciplines, track meets and items
//! - [`athlete`]: Athlete model
//! - [`result`]: Competition results and their measurements
//!
//! # Examples
//!
//! ```
//! use trackside::domain::{Entity, Item, Result};
//!
//! fn decode_item() -> Result<Item> {
//!     Ok(serde_json::from_str(r#"{"id": 3, "name": "Hurdles"}"#)?)
//! }
//!
//! assert_eq!(decode_item().unwrap().id(), 3);
//! ```

pub mod athlete;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod result;

pub use athlete::{Athlete, AthleteDraft};
pub use catalog::{Club, Discipline, DisciplineGender, Item, ItemDraft, ResultKind, TrackMeet};
pub use entity::{CatalogKind, Collection, Entity};
pub use error::{Result, TracksideError, UNEXPECTED_ERROR_MESSAGE};
pub use result::{parse_iso_date, Measurement, ResultDraft, ResultEntry};
