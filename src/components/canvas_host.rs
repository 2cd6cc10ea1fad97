//! View host binding the drawing surface to the active replica.
//!
//! ARCHITECTURE
//! ============
//! Exactly one replica is bound at a time: the host renders whatever the
//! pair's active selection points at and re-renders when the selection or
//! the replica changes. Connections live in `net::sync_client`; a selection
//! change re-binds this view and nothing else, while the hidden session
//! keeps accumulating remote edits in the background.
//!
//! The URL preview resolver is registered once per host instance on mount.
//! It is a property of the host, not of the bound replica, so selection
//! switches never re-register it.

#[cfg(test)]
#[path = "canvas_host_test.rs"]
mod canvas_host_test;

use leptos::prelude::*;

use crate::net::types::DocRecord;
use crate::state::replica::Replica;
use crate::state::session::{ConnectionStatus, SessionPairState};
use crate::state::surface::{SurfaceConfig, SurfacePart};

#[cfg(any(test, feature = "hydrate"))]
type PreviewResolver = std::rc::Rc<
    dyn Fn(
        String,
    )
        -> std::pin::Pin<Box<dyn std::future::Future<Output = Option<crate::net::types::UrlPreview>>>>,
>;

/// Install the default unfurl-backed resolver into an empty registration
/// slot. Returns `false` (and changes nothing) if one is already installed.
#[cfg(any(test, feature = "hydrate"))]
fn register_preview_resolver(
    slot: &std::rc::Rc<std::cell::RefCell<Option<PreviewResolver>>>,
) -> bool {
    let mut slot = slot.borrow_mut();
    if slot.is_some() {
        return false;
    }
    *slot = Some(std::rc::Rc::new(|url: String| {
        Box::pin(async move { crate::net::api::fetch_url_preview(&url).await })
    }));
    true
}

/// Drawing surface bound to the active session's replica.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionPairState>>();
    let surface = StoredValue::new(SurfaceConfig::bare_canvas());

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::collections::HashSet;
        use std::rc::Rc;

        let resolver: Rc<RefCell<Option<PreviewResolver>>> = Rc::new(RefCell::new(None));
        let in_flight: Rc<RefCell<HashSet<String>>> = Rc::new(RefCell::new(HashSet::new()));

        register_preview_resolver(&resolver);

        // Resolve previews for bookmark records the active replica is still
        // missing metadata for, one in-flight fetch per record.
        Effect::new(move || {
            let state = sessions.get();
            let Some(pair) = state.pair.as_ref() else {
                return;
            };
            let slot = pair.active_slot();
            let session = pair.active_session();
            if session.connection_status != ConnectionStatus::Connected {
                return;
            }
            let endpoint = session.endpoint.clone();

            for (record_id, url) in records_missing_preview(&session.replica) {
                let Some(resolve) = resolver.borrow().as_ref().map(Rc::clone) else {
                    continue;
                };
                if !in_flight.borrow_mut().insert(record_id.clone()) {
                    continue;
                }
                let in_flight = Rc::clone(&in_flight);
                let endpoint = endpoint.clone();
                leptos::task::spawn_local(async move {
                    let preview = resolve(url).await;
                    in_flight.borrow_mut().remove(&record_id);
                    let Some(preview) = preview else {
                        return;
                    };
                    sessions.update(|state| {
                        if let Some(pair) = state.pair.as_mut() {
                            let session = pair.session_mut(slot);
                            if session.endpoint == endpoint {
                                session.replica.apply_preview(&record_id, &preview);
                            }
                        }
                    });
                });
            }
        });
    }

    let placeholder = move || {
        let state = sessions.get();
        let Some(pair) = state.pair.as_ref() else {
            return Some("No document bound.");
        };
        let session = pair.active_session();
        status_placeholder(session.connection_status, session.replica.synced)
    };

    let records = move || {
        sessions
            .get()
            .pair
            .as_ref()
            .map(|pair| sorted_records(pair.active_replica()))
            .unwrap_or_default()
    };

    view! {
        <div class="canvas-surface">
            <Show when=move || surface.with_value(|s| !s.is_suppressed(SurfacePart::TopPanel))>
                <div class="canvas-surface__top-panel"></div>
            </Show>
            <Show when=move || surface.with_value(|s| !s.is_suppressed(SurfacePart::SharePanel))>
                <div class="canvas-surface__share-panel"></div>
            </Show>

            {move || match placeholder() {
                Some(message) => {
                    view! { <div class="canvas-surface__placeholder">{message}</div> }.into_any()
                }
                None => {
                    view! {
                        <div class="canvas-surface__records">
                            {records()
                                .into_iter()
                                .map(|record| {
                                    let image_src = record_image_src(&record);
                                    view! {
                                        <div
                                            class=record_css_class(&record)
                                            style=record_style(&record)
                                        >
                                            {image_src
                                                .map(|src| {
                                                    view! {
                                                        <img class="canvas-surface__record-image" src=src/>
                                                    }
                                                })}
                                            {record_label(&record)}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || surface.with_value(|s| !s.is_suppressed(SurfacePart::Toolbar))>
                <div class="canvas-surface__toolbar"></div>
            </Show>
            <Show when=move || surface.with_value(|s| !s.is_suppressed(SurfacePart::StylePanel))>
                <div class="canvas-surface__style-panel"></div>
            </Show>
            <Show when=move || surface.with_value(|s| !s.is_suppressed(SurfacePart::DebugPanel))>
                <div class="canvas-surface__debug-panel"></div>
            </Show>
        </div>
    }
}

/// Placeholder copy for a session with nothing to draw yet, if any.
fn status_placeholder(status: ConnectionStatus, synced: bool) -> Option<&'static str> {
    match status {
        ConnectionStatus::Connecting => Some("Connecting…"),
        ConnectionStatus::Connected if !synced => Some("Loading document…"),
        ConnectionStatus::Connected => None,
        ConnectionStatus::Disconnected => Some("Connection closed."),
        ConnectionStatus::Failed => Some("This canvas could not connect."),
    }
}

/// Records in paint order: ascending stacking order, id as tie-breaker so
/// the order is stable across renders.
fn sorted_records(replica: &Replica) -> Vec<DocRecord> {
    let mut records: Vec<DocRecord> = replica.records.values().cloned().collect();
    records.sort_by(|a, b| {
        a.sort
            .partial_cmp(&b.sort)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    records
}

/// Bookmark records that still need preview metadata, as `(id, url)` pairs.
fn records_missing_preview(replica: &Replica) -> Vec<(String, String)> {
    let mut pending: Vec<(String, String)> = replica
        .records
        .values()
        .filter(|record| record.kind == "bookmark")
        .filter(|record| record.props.get("title").is_none())
        .filter_map(|record| {
            record
                .props
                .get("url")
                .and_then(|value| value.as_str())
                .map(|url| (record.id.clone(), url.to_owned()))
        })
        .collect();
    pending.sort();
    pending
}

fn record_css_class(record: &DocRecord) -> String {
    format!("canvas-surface__record canvas-surface__record--{}", record.kind)
}

fn record_style(record: &DocRecord) -> String {
    format!(
        "left:{}px;top:{}px;transform:rotate({}deg);",
        record.x, record.y, record.rotation
    )
}

/// Retrieval URL for a record backed by an uploaded asset, if any.
fn record_image_src(record: &DocRecord) -> Option<String> {
    let asset = record.props.get("asset").and_then(|value| value.as_str())?;
    Some(crate::net::api::asset_url(asset))
}

/// Display text for a record node: preview title, own text, or its kind.
fn record_label(record: &DocRecord) -> String {
    if let Some(title) = record.props.get("title").and_then(|value| value.as_str()) {
        return title.to_owned();
    }
    if let Some(text) = record.props.get("text").and_then(|value| value.as_str()) {
        return text.to_owned();
    }
    record.kind.clone()
}
