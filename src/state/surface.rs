//! Chrome configuration for the embedded drawing surface.
//!
//! DESIGN
//! ======
//! The drawing widget has a fixed set of optional chrome parts (menus,
//! panels, toolbars, overlays). Rather than a sparse bag of boolean flags,
//! the config holds one explicit entry per part, each mapped to an effect,
//! so the contract with the rendering layer stays exhaustive: a part that is
//! not `Suppressed` is rendered, and there is no third state.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// One optional chrome part of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfacePart {
    ContextMenu,
    ActionsMenu,
    HelpMenu,
    ZoomMenu,
    MainMenu,
    Minimap,
    StylePanel,
    PageMenu,
    NavigationPanel,
    Toolbar,
    KeyboardShortcutsDialog,
    QuickActions,
    HelperButtons,
    DebugPanel,
    DebugMenu,
    SharePanel,
    MenuPanel,
    TopPanel,
    CursorChatBubble,
    RichTextToolbar,
    ImageToolbar,
    VideoToolbar,
    Dialogs,
    Toasts,
    A11y,
    FollowingIndicator,
}

impl SurfacePart {
    /// Every chrome part, in rendering-layer order.
    pub const ALL: [Self; 26] = [
        Self::ContextMenu,
        Self::ActionsMenu,
        Self::HelpMenu,
        Self::ZoomMenu,
        Self::MainMenu,
        Self::Minimap,
        Self::StylePanel,
        Self::PageMenu,
        Self::NavigationPanel,
        Self::Toolbar,
        Self::KeyboardShortcutsDialog,
        Self::QuickActions,
        Self::HelperButtons,
        Self::DebugPanel,
        Self::DebugMenu,
        Self::SharePanel,
        Self::MenuPanel,
        Self::TopPanel,
        Self::CursorChatBubble,
        Self::RichTextToolbar,
        Self::ImageToolbar,
        Self::VideoToolbar,
        Self::Dialogs,
        Self::Toasts,
        Self::A11y,
        Self::FollowingIndicator,
    ];
}

/// Whether a chrome part is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartVisibility {
    /// Part is rendered by the surface.
    #[default]
    Shown,
    /// Part is not rendered at all.
    Suppressed,
}

/// Exhaustive part-to-effect mapping for one surface instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceConfig {
    entries: Vec<(SurfacePart, PartVisibility)>,
}

impl Default for SurfaceConfig {
    /// Everything shown — the widget's stock chrome.
    fn default() -> Self {
        Self {
            entries: SurfacePart::ALL
                .iter()
                .map(|part| (*part, PartVisibility::Shown))
                .collect(),
        }
    }
}

impl SurfaceConfig {
    /// The bare-canvas configuration used by the room view: every chrome
    /// part suppressed except the style panel and the toolbar, leaving only
    /// the drawing area and the app's own header.
    #[must_use]
    pub fn bare_canvas() -> Self {
        Self {
            entries: SurfacePart::ALL
                .iter()
                .map(|part| match part {
                    SurfacePart::StylePanel | SurfacePart::Toolbar => {
                        (*part, PartVisibility::Shown)
                    }
                    _ => (*part, PartVisibility::Suppressed),
                })
                .collect(),
        }
    }

    /// Effect configured for `part`.
    #[must_use]
    pub fn visibility(&self, part: SurfacePart) -> PartVisibility {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == part)
            .map(|(_, visibility)| *visibility)
            .unwrap_or_default()
    }

    /// True if `part` is configured away.
    #[must_use]
    pub fn is_suppressed(&self, part: SurfacePart) -> bool {
        self.visibility(part) == PartVisibility::Suppressed
    }
}
