//! Dual-session state for one mounted room.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every room is served by two fully independent sync sessions, addressing
//! the `-A` and `-B` suffixed rooms. Both connect eagerly when the room view
//! mounts and both stay connected until it unmounts; the UI displays one of
//! them at a time. This module owns that pair and the active selection.
//!
//! DESIGN
//! ======
//! The pair owns both sessions in a fixed two-element array and the active
//! selection is an index into it. Switching rebinds what the view reads and
//! nothing else: no session is created, dropped, or reconnected by a switch,
//! and the hidden session keeps applying remote edits in the background.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::replica::Replica;

/// Which of the two concurrent sessions is addressed: the `-A` or `-B` room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionSlot {
    /// The `-A` suffixed room. Selected by default on mount.
    #[default]
    A,
    /// The `-B` suffixed room.
    B,
}

impl SessionSlot {
    /// Room-id suffix used in this slot's connect endpoint.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// The sibling slot.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Connection lifecycle of one session's websocket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Handshake in progress. Sessions begin connecting at mount, so this is
    /// the initial state.
    #[default]
    Connecting,
    /// Socket is open; the initial snapshot may still be streaming in.
    Connected,
    /// Socket closed after a successful connect.
    Disconnected,
    /// Connect or transport failure. Scoped to this session only; the
    /// sibling session is unaffected.
    Failed,
}

/// One live sync session: its endpoint, connection lifecycle, and replica.
#[derive(Clone, Debug)]
pub struct Session {
    /// Connect endpoint, `<origin>/api/connect/<roomId>-<suffix>`.
    pub endpoint: String,
    /// Current websocket lifecycle state, written by the sync client task.
    pub connection_status: ConnectionStatus,
    /// Local copy of this session's synced document.
    pub replica: Replica,
}

impl Session {
    fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            connection_status: ConnectionStatus::Connecting,
            replica: Replica::default(),
        }
    }
}

/// Both sessions of a mounted room plus the active selection.
#[derive(Clone, Debug)]
pub struct SessionPair {
    sessions: [Session; 2],
    active: SessionSlot,
}

impl SessionPair {
    /// Build both sessions for `room_id` eagerly, each addressing its own
    /// suffixed room. Returns immediately; connecting happens in the per-slot
    /// sync client tasks.
    #[must_use]
    pub fn mount(origin: &str, room_id: &str) -> Self {
        Self {
            sessions: [
                Session::new(connect_endpoint(origin, room_id, SessionSlot::A)),
                Session::new(connect_endpoint(origin, room_id, SessionSlot::B)),
            ],
            active: SessionSlot::A,
        }
    }

    /// The currently selected slot.
    #[must_use]
    pub fn active_slot(&self) -> SessionSlot {
        self.active
    }

    /// Borrow the session in `slot`.
    #[must_use]
    pub fn session(&self, slot: SessionSlot) -> &Session {
        &self.sessions[slot.index()]
    }

    /// Mutably borrow the session in `slot`. Used by the sync client task
    /// that owns that slot.
    pub fn session_mut(&mut self, slot: SessionSlot) -> &mut Session {
        &mut self.sessions[slot.index()]
    }

    /// The session currently bound to the view.
    #[must_use]
    pub fn active_session(&self) -> &Session {
        self.session(self.active)
    }

    /// Replica of the active session. Pure read, no side effects.
    #[must_use]
    pub fn active_replica(&self) -> &Replica {
        &self.active_session().replica
    }

    /// Toggle the active selection between the two existing sessions.
    ///
    /// This is a pure selection swap; neither session's connection is
    /// touched. Calling it twice restores the original selection.
    pub fn switch_active(&mut self) {
        self.active = self.active.other();
    }
}

/// Route-scoped session state provided as a context signal.
///
/// Both fields are `None` until the route supplies a room id and the page
/// mounts the pair; a missing `:id` parameter leaves the state empty and the
/// page renders the join placeholder instead of crashing.
#[derive(Clone, Debug, Default)]
pub struct SessionPairState {
    /// Room id from the route, if one was supplied.
    pub room_id: Option<String>,
    /// The mounted pair; absent when no room is active.
    pub pair: Option<SessionPair>,
}

impl SessionPairState {
    /// State for a freshly routed room id: a mounted pair when an id is
    /// present, the empty placeholder state otherwise.
    #[must_use]
    pub fn for_room(origin: &str, room_id: Option<String>) -> Self {
        match room_id {
            Some(id) => Self {
                pair: Some(SessionPair::mount(origin, &id)),
                room_id: Some(id),
            },
            None => Self::default(),
        }
    }
}

/// Derive one slot's connect endpoint from the page origin and room id.
#[must_use]
pub fn connect_endpoint(origin: &str, room_id: &str, slot: SessionSlot) -> String {
    format!("{origin}/api/connect/{room_id}-{}", slot.suffix())
}
