use super::*;

#[test]
fn same_room_never_remounts() {
    assert!(!should_remount(Some("abc123"), Some("abc123")));
    assert!(!should_remount(None, None));
}

#[test]
fn arriving_room_id_mounts() {
    assert!(should_remount(None, Some("abc123")));
}

#[test]
fn leaving_a_room_unmounts() {
    assert!(should_remount(Some("abc123"), None));
}

#[test]
fn different_room_id_remounts() {
    assert!(should_remount(Some("abc123"), Some("xyz789")));
}
