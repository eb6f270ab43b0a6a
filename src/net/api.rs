//! REST calls to the storage collaborator.
//!
//! Contract: `GET /api/{collection}` returns the full collection ordered by
//! `createdAt` descending, optionally narrowed server-side with `?type=`;
//! `DELETE /api/{collection}/{id}` succeeds even when the id no longer
//! exists; `POST`/`PUT` replace the full field set and return the record id.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! list calls return empty snapshots and mutations fail, since the admin
//! surfaces are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::StoreError;
use super::types::{AwardRecord, EventRecord, MemberRecord};

/// Collection names used by pages and preview lists.
pub const MEMBERS: &str = "members";
pub const EVENTS: &str = "events";
pub const AWARDS: &str = "awards";

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(collection: &str) -> String {
    format!("/api/{collection}")
}

#[cfg(any(test, feature = "hydrate"))]
fn record_endpoint(collection: &str, id: &str) -> String {
    format!("/api/{collection}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_endpoint(collection: &str, type_filter: Option<&str>) -> String {
    match type_filter {
        Some(filter) => format!("/api/{collection}?type={filter}"),
        None => collection_endpoint(collection),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Strip server-owned fields from an upsert payload. Mutation is full-field
/// replacement of everything else; `id` and `createdAt` are never sent.
#[cfg(any(test, feature = "hydrate"))]
fn upsert_body<T: serde::Serialize>(record: &T) -> serde_json::Value {
    let mut value = serde_json::to_value(record).unwrap_or(serde_json::Value::Null);
    if let Some(fields) = value.as_object_mut() {
        fields.remove("id");
        fields.remove("createdAt");
    }
    value
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(
    collection: &'static str,
    type_filter: Option<&str>,
) -> Result<Vec<T>, StoreError> {
    let fetch_err = |message: String| StoreError::Fetch { collection, message };
    let url = list_endpoint(collection, type_filter);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| fetch_err(e.to_string()))?;
    if !resp.ok() {
        return Err(fetch_err(status_message(resp.status())));
    }
    resp.json::<Vec<T>>().await.map_err(|e| fetch_err(e.to_string()))
}

/// Fetch the member roster, optionally narrowed server-side to one role.
///
/// # Errors
///
/// Returns `StoreError::Fetch` carrying the collaborator message verbatim.
pub async fn list_members(type_filter: Option<&str>) -> Result<Vec<MemberRecord>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(MEMBERS, type_filter).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = type_filter;
        Ok(Vec::new())
    }
}

/// Fetch all events, newest first.
///
/// # Errors
///
/// Returns `StoreError::Fetch` carrying the collaborator message verbatim.
pub async fn list_events() -> Result<Vec<EventRecord>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(EVENTS, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Fetch all awards, newest first.
///
/// # Errors
///
/// Returns `StoreError::Fetch` carrying the collaborator message verbatim.
pub async fn list_awards() -> Result<Vec<AwardRecord>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(AWARDS, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Delete one record. The collaborator treats deleting an id that no longer
/// exists as success, so overlapping deletes stay independent and idempotent.
///
/// # Errors
///
/// Returns `StoreError::Delete` when the request itself fails.
pub async fn delete_record(collection: &'static str, id: &str) -> Result<(), StoreError> {
    #[cfg(feature = "hydrate")]
    {
        let delete_err = |message: String| StoreError::Delete { collection, message };
        let url = record_endpoint(collection, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| delete_err(e.to_string()))?;
        if !resp.ok() {
            return Err(delete_err(status_message(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(StoreError::Delete {
            collection,
            message: "not available during server rendering".to_owned(),
        })
    }
}

/// Create (`id = None`) or fully replace (`id = Some(..)`) a record and
/// return its id.
///
/// # Errors
///
/// Returns `StoreError::Save` when the request fails or the response cannot
/// be decoded.
pub async fn save_record<T: serde::Serialize>(
    collection: &'static str,
    id: Option<&str>,
    record: &T,
) -> Result<String, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        let save_err = |message: String| StoreError::Save { collection, message };
        let body = upsert_body(record);
        let request = match id {
            Some(existing) => gloo_net::http::Request::put(&record_endpoint(collection, existing)),
            None => gloo_net::http::Request::post(&collection_endpoint(collection)),
        };
        let resp = request
            .json(&body)
            .map_err(|e| save_err(e.to_string()))?
            .send()
            .await
            .map_err(|e| save_err(e.to_string()))?;
        if !resp.ok() {
            return Err(save_err(status_message(resp.status())));
        }
        #[derive(serde::Deserialize)]
        struct SavedResponse {
            id: String,
        }
        let saved: SavedResponse = resp.json().await.map_err(|e| save_err(e.to_string()))?;
        Ok(saved.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, record);
        Err(StoreError::Save {
            collection,
            message: "not available during server rendering".to_owned(),
        })
    }
}
