//! Reusable UI components for the room view.

pub mod canvas_host;
pub mod header_bar;
