//! Networking modules for HTTP + websocket sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls (unfurl previews, asset uploads), `sync_client`
//! manages one websocket lifecycle per session slot, and `types` defines the
//! wire schema spoken with the sync server.

pub mod api;
pub mod sync_client;
pub mod types;
