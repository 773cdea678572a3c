//! Gateway abstraction.
//!
//! This module defines the [`Gateway`] trait that abstracts over the transport
//! used to reach the results API. The HTTP client and the in-memory gateway
//! implement it, so stores and the runtime never know which one they talk to.

use crate::domain::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Abstraction over the JSON request/response exchange with the API.
///
/// `path` is relative to the API root, e.g. `athletes/all`. A successful
/// response with no content (204 or an empty body) yields `Ok(None)`.
///
/// # Errors
///
/// Implementations return [`TracksideError::Http`](crate::domain::TracksideError::Http)
/// for non-2xx responses and the transport or decode variants otherwise.
///
/// # Examples
///
/// ```
/// use trackside::gateway::{routes, Gateway, MemoryGateway, Verb};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let gateway = MemoryGateway::with_demo_data();
/// let payload = gateway.request(Verb::Get, &routes::all("items"), None).await?;
/// assert!(payload.is_some_and(|p| p.is_array()));
/// # Ok::<(), trackside::domain::TracksideError>(())
/// # }).unwrap();
/// ```
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Performs one request.
    async fn request(&self, verb: Verb, path: &str, body: Option<Value>) -> Result<Option<Value>>;
}

/// Route construction for collection endpoints.
pub mod routes {
    #[must_use]
    pub fn all(base: &str) -> String {
        format!("{base}/all")
    }

    #[must_use]
    pub fn by_id(base: &str, id: i64) -> String {
        format!("{base}/id/{id}")
    }

    #[must_use]
    pub fn create(base: &str) -> String {
        format!("{base}/create")
    }

    #[must_use]
    pub fn edit(base: &str, id: i64) -> String {
        format!("{base}/edit/{id}")
    }

    #[must_use]
    pub fn delete(base: &str, id: i64) -> String {
        format!("{base}/delete/{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_follow_collection_layout() {
        assert_eq!(routes::all("athletes"), "athletes/all");
        assert_eq!(routes::by_id("results", 4), "results/id/4");
        assert_eq!(routes::create("items"), "items/create");
        assert_eq!(routes::edit("items", 2), "items/edit/2");
        assert_eq!(routes::delete("athletes", 9), "athletes/delete/9");
        assert_eq!(Verb::Patch.as_str(), "PATCH");
    }
}
