//! Typed requests on top of a [`Gateway`].
//!
//! These helpers build the route for an entity's collection, send the draft
//! body and decode the payload. Errors propagate unchanged; the stores decide
//! how to surface them.

use super::backend::{routes, Gateway, Verb};
use crate::domain::error::Result;
use crate::domain::{CatalogKind, Entity};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn decode<T: DeserializeOwned>(payload: Option<Value>) -> Result<T> {
    Ok(serde_json::from_value(payload.unwrap_or(Value::Null))?)
}

/// `GET {base}/all` for an editable collection.
///
/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn fetch_all<E, G>(gateway: &G) -> Result<Vec<E>>
where
    E: Entity,
    G: Gateway + ?Sized,
{
    let payload = gateway
        .request(Verb::Get, &routes::all(E::COLLECTION.base()), None)
        .await?;
    decode(payload)
}

/// `GET {base}/id/{id}`.
///
/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn fetch_one<E, G>(gateway: &G, id: i64) -> Result<E>
where
    E: Entity,
    G: Gateway + ?Sized,
{
    let payload = gateway
        .request(Verb::Get, &routes::by_id(E::COLLECTION.base(), id), None)
        .await?;
    decode(payload)
}

/// `POST {base}/create` with the draft; returns the stored entity.
///
/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn create<E, G>(gateway: &G, draft: &E::Draft) -> Result<E>
where
    E: Entity,
    G: Gateway + ?Sized,
{
    let body = serde_json::to_value(draft)?;
    let payload = gateway
        .request(Verb::Post, &routes::create(E::COLLECTION.base()), Some(body))
        .await?;
    decode(payload)
}

/// `PATCH {base}/edit/{id}` with the draft; returns the stored entity.
///
/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn update<E, G>(gateway: &G, id: i64, draft: &E::Draft) -> Result<E>
where
    E: Entity,
    G: Gateway + ?Sized,
{
    let body = serde_json::to_value(draft)?;
    let payload = gateway
        .request(Verb::Patch, &routes::edit(E::COLLECTION.base(), id), Some(body))
        .await?;
    decode(payload)
}

/// `DELETE {base}/delete/{id}`. Any payload is ignored.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn delete<E, G>(gateway: &G, id: i64) -> Result<()>
where
    E: Entity,
    G: Gateway + ?Sized,
{
    gateway
        .request(Verb::Delete, &routes::delete(E::COLLECTION.base(), id), None)
        .await?;
    Ok(())
}

/// `GET {base}/all` for a read-only catalog collection.
///
/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn fetch_catalog<T, G>(gateway: &G, kind: CatalogKind) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    G: Gateway + ?Sized,
{
    let payload = gateway
        .request(Verb::Get, &routes::all(kind.base()), None)
        .await?;
    decode(payload)
}
