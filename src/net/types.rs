//! Wire-protocol DTOs for the sync and REST boundaries.
//!
//! DESIGN
//! ======
//! Sync messages are tagged JSON so the dispatch code stays schema-driven.
//! Record fields beyond identity and placement are open-ended (`props`)
//! because record kinds evolve server-side without client releases.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One message on the sync websocket, in either direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncMessage {
    /// Full snapshot of the document, sent by the server after connect.
    Init {
        #[serde(default)]
        records: Vec<DocRecord>,
    },
    /// Incremental update: upserts and removals, applied in arrival order.
    Patch {
        #[serde(default)]
        put: Vec<DocRecord>,
        #[serde(default)]
        remove: Vec<String>,
    },
    /// Server liveness probe; the client answers with [`SyncMessage::Pong`].
    Ping,
    /// Client reply to [`SyncMessage::Ping`].
    Pong,
}

/// One keyed element of a synced drawing document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocRecord {
    /// Unique record identifier.
    pub id: String,
    /// Record type (e.g. `"shape"`, `"bookmark"`, `"image"`).
    pub kind: String,
    /// Left edge in document coordinates.
    #[serde(default)]
    pub x: f64,
    /// Top edge in document coordinates.
    #[serde(default)]
    pub y: f64,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub sort: f64,
    /// Open-ended per-kind properties (fill, text, url, preview metadata…).
    #[serde(default = "empty_props")]
    pub props: serde_json::Value,
}

fn empty_props() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Preview metadata for an external URL, as returned by `/api/unfurl`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlPreview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub favicon: Option<String>,
}

/// Parse one incoming websocket text payload.
///
/// Unknown message types and malformed JSON yield `None`; the caller logs
/// and drops them rather than tearing the connection down.
#[must_use]
pub fn parse_sync_message(text: &str) -> Option<SyncMessage> {
    serde_json::from_str(text).ok()
}

/// Serialize an outgoing message to its websocket text payload.
///
/// # Panics
///
/// Never panics in practice; `SyncMessage` contains no map keys or values
/// that can fail JSON serialization.
#[must_use]
pub fn encode_sync_message(message: &SyncMessage) -> String {
    serde_json::to_string(message).unwrap_or_default()
}
