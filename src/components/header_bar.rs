//! Room header: connection glyph, room label, share and switch controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the only chrome the page adds on top of the bare drawing
//! surface. It stays interactive regardless of session health: a failed
//! session never disables the switch or share controls.

#[cfg(test)]
#[path = "header_bar_test.rs"]
mod header_bar_test;

use leptos::prelude::*;

use crate::state::session::{ConnectionStatus, SessionPairState, SessionSlot};
use crate::util::browser;

/// How long the `Copied!` confirmation stays up, in milliseconds.
pub const COPY_FEEDBACK_MS: u32 = 3000;

/// Header bar with the room label, copy-link control, and the canvas switch.
#[component]
pub fn HeaderBar() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionPairState>>();
    let copied = RwSignal::new(false);

    // At most one pending clear timer. Scheduling replaces (and thereby
    // cancels) the previous one, so a stale clear can never fire after a
    // re-copy; unmount drops whatever is pending.
    #[cfg(feature = "hydrate")]
    let copied_reset: std::rc::Rc<std::cell::RefCell<Option<gloo_timers::callback::Timeout>>> =
        std::rc::Rc::new(std::cell::RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let copied_reset = std::rc::Rc::clone(&copied_reset);
        on_cleanup(move || {
            copied_reset.borrow_mut().take();
        });
    }

    let on_copy = move |_| {
        browser::copy_to_clipboard(&browser::current_href());
        copied.set(true);
        #[cfg(feature = "hydrate")]
        {
            let timeout =
                gloo_timers::callback::Timeout::new(COPY_FEEDBACK_MS, move || copied.set(false));
            let _stale = copied_reset.borrow_mut().replace(timeout);
        }
    };

    let active_slot = move || {
        sessions
            .get()
            .pair
            .as_ref()
            .map(|pair| pair.active_slot())
            .unwrap_or_default()
    };
    let active_status = move || {
        sessions
            .get()
            .pair
            .as_ref()
            .map(|pair| pair.active_session().connection_status)
            .unwrap_or(ConnectionStatus::Disconnected)
    };
    let room_label = move || {
        sessions
            .get()
            .room_id
            .unwrap_or_else(|| "no room".to_owned())
    };

    let on_switch = move |_| {
        sessions.update(|state| {
            if let Some(pair) = state.pair.as_mut() {
                pair.switch_active();
            }
        });
    };

    view! {
        <div class="header-bar">
            <svg
                class=move || connection_glyph_class(active_status())
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                stroke-width="1.5"
                stroke="currentColor"
                width="16"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M8.288 15.038a5.25 5.25 0 0 1 7.424 0M5.106 11.856c3.807-3.808 9.98-3.808 13.788 0M1.924 8.674c5.565-5.565 14.587-5.565 20.152 0M12.53 18.22l-.53.53-.53-.53a.75.75 0 0 1 1.06 0Z"
                ></path>
            </svg>
            <div class="header-bar__room">{room_label}</div>
            <button class="header-bar__copy" aria-label="copy room link" on:click=on_copy>
                "Copy link"
                <Show when=move || copied.get()>
                    <div class="header-bar__copied">"Copied!"</div>
                </Show>
            </button>
            <button class="header-bar__switch" on:click=on_switch>
                {move || switch_canvas_label(active_slot())}
            </button>
        </div>
    }
}

/// Label for the switch control under the current selection.
fn switch_canvas_label(slot: SessionSlot) -> String {
    format!("Switch Canvas ({})", slot.suffix())
}

fn connection_glyph_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "header-bar__glyph header-bar__glyph--connected",
        ConnectionStatus::Connecting => "header-bar__glyph header-bar__glyph--connecting",
        ConnectionStatus::Disconnected | ConnectionStatus::Failed => {
            "header-bar__glyph header-bar__glyph--down"
        }
    }
}
