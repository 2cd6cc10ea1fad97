//! Local replica of one synced drawing document.
//!
//! DESIGN
//! ======
//! The replica is a keyed record store fed by the sync client. Messages are
//! applied in arrival order; merging concurrent edits is the sync server's
//! job, so by the time a message reaches the client it is authoritative.
//! `revision` is bumped on every visible change so views can re-render off a
//! single cheap key instead of diffing the record map.

#[cfg(test)]
#[path = "replica_test.rs"]
mod replica_test;

use std::collections::HashMap;

use crate::net::types::{DocRecord, SyncMessage, UrlPreview};

/// In-memory copy of a synced document.
#[derive(Clone, Debug, Default)]
pub struct Replica {
    /// All document records keyed by record id.
    pub records: HashMap<String, DocRecord>,
    /// Bumped whenever applied changes may be visible.
    pub revision: u64,
    /// True once the initial snapshot has been applied.
    pub synced: bool,
}

impl Replica {
    /// Apply one sync message. `Init` replaces the record set, `Patch`
    /// upserts and removes in place; liveness messages are not document
    /// changes and are ignored here.
    pub fn apply(&mut self, message: &SyncMessage) {
        match message {
            SyncMessage::Init { records } => {
                self.records.clear();
                for record in records {
                    self.records.insert(record.id.clone(), record.clone());
                }
                self.synced = true;
                self.bump_revision();
            }
            SyncMessage::Patch { put, remove } => {
                if put.is_empty() && remove.is_empty() {
                    return;
                }
                for record in put {
                    self.records.insert(record.id.clone(), record.clone());
                }
                for id in remove {
                    self.records.remove(id);
                }
                self.bump_revision();
            }
            SyncMessage::Ping | SyncMessage::Pong => {}
        }
    }

    /// Merge resolved preview metadata into a bookmark record's props.
    ///
    /// No-op if the record disappeared while the preview fetch was in flight.
    pub fn apply_preview(&mut self, record_id: &str, preview: &UrlPreview) {
        let Some(record) = self.records.get_mut(record_id) else {
            return;
        };
        let props = record.props.as_object_mut();
        let Some(props) = props else {
            return;
        };
        if let Some(title) = &preview.title {
            props.insert("title".to_owned(), serde_json::json!(title));
        }
        if let Some(description) = &preview.description {
            props.insert("description".to_owned(), serde_json::json!(description));
        }
        if let Some(image) = &preview.image {
            props.insert("image".to_owned(), serde_json::json!(image));
        }
        if let Some(favicon) = &preview.favicon {
            props.insert("favicon".to_owned(), serde_json::json!(favicon));
        }
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
