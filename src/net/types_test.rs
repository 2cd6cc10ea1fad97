use super::*;

#[test]
fn parse_init_snapshot() {
    let text = r#"{
        "type": "init",
        "records": [
            { "id": "r1", "kind": "shape", "x": 1.5, "y": 2.5, "rotation": 90.0, "sort": 3.0, "props": { "fill": "red" } }
        ]
    }"#;
    let message = parse_sync_message(text).expect("init parses");
    let SyncMessage::Init { records } = message else {
        panic!("expected init");
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "r1");
    assert_eq!(records[0].kind, "shape");
    assert_eq!(records[0].x, 1.5);
    assert_eq!(records[0].rotation, 90.0);
    assert_eq!(records[0].props["fill"], "red");
}

#[test]
fn record_geometry_and_props_default_when_absent() {
    let text = r#"{ "type": "init", "records": [ { "id": "r1", "kind": "note" } ] }"#;
    let Some(SyncMessage::Init { records }) = parse_sync_message(text) else {
        panic!("expected init");
    };
    assert_eq!(records[0].x, 0.0);
    assert_eq!(records[0].y, 0.0);
    assert_eq!(records[0].rotation, 0.0);
    assert_eq!(records[0].sort, 0.0);
    assert!(records[0].props.as_object().is_some_and(|map| map.is_empty()));
}

#[test]
fn parse_patch_with_partial_fields() {
    let text = r#"{ "type": "patch", "put": [ { "id": "r2", "kind": "shape" } ] }"#;
    let Some(SyncMessage::Patch { put, remove }) = parse_sync_message(text) else {
        panic!("expected patch");
    };
    assert_eq!(put.len(), 1);
    assert!(remove.is_empty());
}

#[test]
fn parse_ping() {
    assert_eq!(parse_sync_message(r#"{"type":"ping"}"#), Some(SyncMessage::Ping));
}

#[test]
fn unknown_message_type_yields_none() {
    assert_eq!(parse_sync_message(r#"{"type":"presence","cursor":[1,2]}"#), None);
}

#[test]
fn malformed_json_yields_none() {
    assert_eq!(parse_sync_message("{not json"), None);
}

#[test]
fn encode_pong_round_trips() {
    let encoded = encode_sync_message(&SyncMessage::Pong);
    assert_eq!(encoded, r#"{"type":"pong"}"#);
    assert_eq!(parse_sync_message(&encoded), Some(SyncMessage::Pong));
}

#[test]
fn record_survives_a_serde_round_trip() {
    let record = DocRecord {
        id: "r9".to_owned(),
        kind: "bookmark".to_owned(),
        x: -4.0,
        y: 8.0,
        rotation: 15.0,
        sort: 2.0,
        props: serde_json::json!({ "url": "https://example.com" }),
    };
    let encoded = serde_json::to_string(&record).expect("record serializes");
    let decoded: DocRecord = serde_json::from_str(&encoded).expect("record deserializes");
    assert_eq!(decoded, record);
}
