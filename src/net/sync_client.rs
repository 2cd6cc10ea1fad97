//! Per-slot websocket sync client.
//!
//! One client task is spawned for each session slot when the room view
//! mounts; both run for the whole lifetime of the view. A task owns exactly
//! one socket: it connects, applies incoming document messages to its slot's
//! replica, answers liveness probes, and exits when the socket closes or the
//! page fires its shutdown channel. Nothing here ever reconnects — the only
//! code path that opens a connection is the mount path, so swapping the
//! displayed session can never cause connection churn.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport and parse failures are slot-local: they log, mark that slot
//! `Failed`/`Disconnected`, and leave the sibling slot untouched.

#[cfg(test)]
#[path = "sync_client_test.rs"]
mod sync_client_test;

use crate::net::types::SyncMessage;

#[cfg(feature = "hydrate")]
use crate::net::types::{encode_sync_message, parse_sync_message};
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionPairState, SessionSlot};
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, RwSignal, Update};

/// Map a page-origin connect endpoint to its websocket form.
#[must_use]
pub fn ws_endpoint(endpoint: &str) -> String {
    if let Some(rest) = endpoint.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = endpoint.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        endpoint.to_owned()
    }
}

/// Protocol-level reply owed for an incoming message, if any.
#[must_use]
pub fn reply_for(message: &SyncMessage) -> Option<SyncMessage> {
    match message {
        SyncMessage::Ping => Some(SyncMessage::Pong),
        SyncMessage::Init { .. } | SyncMessage::Patch { .. } | SyncMessage::Pong => None,
    }
}

/// Spawn the sync client task for one slot.
///
/// Returns the shutdown channel for the task: firing it (or dropping it)
/// makes the task exit and close its socket, which is how the page tears
/// both connections down on unmount.
#[cfg(feature = "hydrate")]
pub fn spawn_sync_client(
    sessions: RwSignal<SessionPairState>,
    slot: SessionSlot,
) -> futures::channel::oneshot::Sender<()> {
    let (shutdown_tx, shutdown_rx) = futures::channel::oneshot::channel();
    leptos::task::spawn_local(sync_client_task(sessions, slot, shutdown_rx));
    shutdown_tx
}

/// Connect and process messages until the socket closes or shutdown fires.
#[cfg(feature = "hydrate")]
async fn sync_client_task(
    sessions: RwSignal<SessionPairState>,
    slot: SessionSlot,
    shutdown_rx: futures::channel::oneshot::Receiver<()>,
) {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::future::Either;
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let Some(endpoint) = sessions
        .get_untracked()
        .pair
        .as_ref()
        .map(|pair| pair.session(slot).endpoint.clone())
    else {
        return;
    };
    let url = ws_endpoint(&endpoint);

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("sync connect failed for {url}: {e}");
            update_status(sessions, slot, &endpoint, ConnectionStatus::Failed);
            return;
        }
    };
    update_status(sessions, slot, &endpoint, ConnectionStatus::Connected);

    let (mut ws_write, mut ws_read) = ws.split();
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();

    // Forward outgoing replies from the channel to the socket.
    let send_task = async move {
        while let Some(payload) = rx.next().await {
            if ws_write.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: apply document messages to this slot's replica.
    let outcome = Rc::new(Cell::new(ConnectionStatus::Disconnected));
    let recv_outcome = Rc::clone(&outcome);
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => handle_payload(sessions, slot, &endpoint, &tx, &text),
                Ok(Message::Bytes(_)) => {}
                Err(gloo_net::websocket::WebSocketError::ConnectionClose(event)) => {
                    if !event.was_clean {
                        recv_outcome.set(ConnectionStatus::Failed);
                    }
                    break;
                }
                Err(e) => {
                    leptos::logging::warn!("sync recv error on {endpoint}: {e}");
                    recv_outcome.set(ConnectionStatus::Failed);
                    break;
                }
            }
        }
    };

    let io_task = async {
        futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    };

    match futures::future::select(Box::pin(io_task), shutdown_rx).await {
        Either::Left(((), _)) => {
            update_status(sessions, slot, &endpoint, outcome.get());
        }
        // Shutdown: the page is resetting session state itself; dropping the
        // socket halves here closes the connection.
        Either::Right((_, _)) => {}
    }
}

/// Handle one incoming text payload for `slot`.
#[cfg(feature = "hydrate")]
fn handle_payload(
    sessions: RwSignal<SessionPairState>,
    slot: SessionSlot,
    endpoint: &str,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    text: &str,
) {
    let Some(message) = parse_sync_message(text) else {
        leptos::logging::warn!("dropping unparseable sync message on {endpoint}");
        return;
    };

    if let Some(reply) = reply_for(&message) {
        let _ = tx.unbounded_send(encode_sync_message(&reply));
        return;
    }

    sessions.update(|state| {
        if let Some(pair) = state.pair.as_mut() {
            let session = pair.session_mut(slot);
            // A task writes only to the session it was spawned for; if the
            // route remounted the pair under this task, the endpoint no
            // longer matches and the message is dropped.
            if session.endpoint == endpoint {
                session.replica.apply(&message);
            }
        }
    });
}

#[cfg(feature = "hydrate")]
fn update_status(
    sessions: RwSignal<SessionPairState>,
    slot: SessionSlot,
    endpoint: &str,
    status: ConnectionStatus,
) {
    sessions.update(|state| {
        if let Some(pair) = state.pair.as_mut() {
            let session = pair.session_mut(slot);
            if session.endpoint == endpoint {
                session.connection_status = status;
            }
        }
    });
}
