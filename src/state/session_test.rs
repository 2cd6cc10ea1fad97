use super::*;
use crate::net::types::DocRecord;

fn sample_record(id: &str) -> DocRecord {
    DocRecord {
        id: id.to_owned(),
        kind: "shape".to_owned(),
        x: 10.0,
        y: 20.0,
        rotation: 0.0,
        sort: 1.0,
        props: serde_json::json!({}),
    }
}

// =============================================================
// Endpoint derivation
// =============================================================

#[test]
fn connect_endpoint_appends_room_and_slot_suffix() {
    assert_eq!(
        connect_endpoint("https://app.example.com", "abc123", SessionSlot::A),
        "https://app.example.com/api/connect/abc123-A"
    );
    assert_eq!(
        connect_endpoint("https://app.example.com", "abc123", SessionSlot::B),
        "https://app.example.com/api/connect/abc123-B"
    );
}

#[test]
fn mount_creates_exactly_two_sessions_with_suffixed_endpoints() {
    let pair = SessionPair::mount("http://localhost:3000", "abc123");
    assert_eq!(
        pair.session(SessionSlot::A).endpoint,
        "http://localhost:3000/api/connect/abc123-A"
    );
    assert_eq!(
        pair.session(SessionSlot::B).endpoint,
        "http://localhost:3000/api/connect/abc123-B"
    );
}

#[test]
fn mounted_sessions_start_connecting_with_empty_replicas() {
    let pair = SessionPair::mount("http://localhost:3000", "r1");
    for slot in [SessionSlot::A, SessionSlot::B] {
        let session = pair.session(slot);
        assert_eq!(session.connection_status, ConnectionStatus::Connecting);
        assert!(session.replica.records.is_empty());
        assert!(!session.replica.synced);
    }
}

// =============================================================
// Active selection
// =============================================================

#[test]
fn default_selection_is_a() {
    let pair = SessionPair::mount("http://localhost:3000", "r1");
    assert_eq!(pair.active_slot(), SessionSlot::A);
}

#[test]
fn switch_active_toggles_and_twice_restores() {
    let mut pair = SessionPair::mount("http://localhost:3000", "r1");
    pair.switch_active();
    assert_eq!(pair.active_slot(), SessionSlot::B);
    pair.switch_active();
    assert_eq!(pair.active_slot(), SessionSlot::A);
}

#[test]
fn switch_active_never_touches_either_session() {
    let mut pair = SessionPair::mount("http://localhost:3000", "r1");
    pair.session_mut(SessionSlot::A).connection_status = ConnectionStatus::Connected;
    pair.session_mut(SessionSlot::B).connection_status = ConnectionStatus::Connected;

    let endpoint_a = pair.session(SessionSlot::A).endpoint.clone();
    let endpoint_b = pair.session(SessionSlot::B).endpoint.clone();

    for _ in 0..5 {
        pair.switch_active();
    }

    assert_eq!(pair.session(SessionSlot::A).endpoint, endpoint_a);
    assert_eq!(pair.session(SessionSlot::B).endpoint, endpoint_b);
    assert_eq!(
        pair.session(SessionSlot::A).connection_status,
        ConnectionStatus::Connected
    );
    assert_eq!(
        pair.session(SessionSlot::B).connection_status,
        ConnectionStatus::Connected
    );
}

#[test]
fn active_replica_follows_selection() {
    let mut pair = SessionPair::mount("http://localhost:3000", "r1");
    let record = sample_record("only-in-b");
    pair.session_mut(SessionSlot::B)
        .replica
        .records
        .insert(record.id.clone(), record);

    assert!(pair.active_replica().records.is_empty());
    pair.switch_active();
    assert!(pair.active_replica().records.contains_key("only-in-b"));
}

#[test]
fn failure_is_scoped_to_one_slot() {
    let mut pair = SessionPair::mount("http://localhost:3000", "r1");
    pair.session_mut(SessionSlot::A).connection_status = ConnectionStatus::Connected;
    pair.session_mut(SessionSlot::B).connection_status = ConnectionStatus::Failed;

    assert_eq!(
        pair.active_session().connection_status,
        ConnectionStatus::Connected
    );

    pair.switch_active();
    assert_eq!(
        pair.active_session().connection_status,
        ConnectionStatus::Failed
    );

    pair.switch_active();
    assert_eq!(
        pair.active_session().connection_status,
        ConnectionStatus::Connected
    );
}

// =============================================================
// Slots
// =============================================================

#[test]
fn slot_other_is_involutive() {
    assert_eq!(SessionSlot::A.other(), SessionSlot::B);
    assert_eq!(SessionSlot::B.other(), SessionSlot::A);
    assert_eq!(SessionSlot::A.other().other(), SessionSlot::A);
}

#[test]
fn slot_suffixes_are_distinct() {
    assert_eq!(SessionSlot::A.suffix(), "A");
    assert_eq!(SessionSlot::B.suffix(), "B");
}

// =============================================================
// Route-scoped state
// =============================================================

#[test]
fn for_room_without_id_stays_empty() {
    let state = SessionPairState::for_room("http://localhost:3000", None);
    assert!(state.room_id.is_none());
    assert!(state.pair.is_none());
}

#[test]
fn for_room_with_id_mounts_pair_selecting_a() {
    let state = SessionPairState::for_room("http://localhost:3000", Some("abc123".to_owned()));
    assert_eq!(state.room_id.as_deref(), Some("abc123"));
    let pair = state.pair.expect("pair mounted");
    assert_eq!(pair.active_slot(), SessionSlot::A);
}
