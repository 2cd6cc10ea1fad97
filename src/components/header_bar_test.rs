use super::*;

#[test]
fn switch_label_names_the_current_selection() {
    assert_eq!(switch_canvas_label(SessionSlot::A), "Switch Canvas (A)");
    assert_eq!(switch_canvas_label(SessionSlot::B), "Switch Canvas (B)");
}

#[test]
fn default_slot_labels_as_a() {
    assert_eq!(switch_canvas_label(SessionSlot::default()), "Switch Canvas (A)");
}

#[test]
fn copy_feedback_clears_after_three_seconds() {
    assert_eq!(COPY_FEEDBACK_MS, 3000);
}

#[test]
fn glyph_class_tracks_connection_state() {
    assert_eq!(
        connection_glyph_class(ConnectionStatus::Connected),
        "header-bar__glyph header-bar__glyph--connected"
    );
    assert_eq!(
        connection_glyph_class(ConnectionStatus::Connecting),
        "header-bar__glyph header-bar__glyph--connecting"
    );
    assert_eq!(
        connection_glyph_class(ConnectionStatus::Disconnected),
        connection_glyph_class(ConnectionStatus::Failed)
    );
}
