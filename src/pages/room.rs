//! Room page — dual-session orchestration for one routed room.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between URL room identity
//! and session-pair lifecycle: both sessions are created eagerly when a room
//! id arrives, stay connected for the whole visit, and are torn down
//! together on route change or unmount. Displaying the other session is a
//! selection change handled entirely inside the session state — no network
//! activity is involved.
//!
//! TRADE-OFFS
//! ==========
//! A route change to a different room recreates the pair. Within one routed
//! room the pair is created exactly once; the mount effect is keyed on the
//! room id, so unrelated re-runs never touch the sessions.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::canvas_host::CanvasHost;
use crate::components::header_bar::HeaderBar;
use crate::state::session::SessionPairState;
use crate::util::browser;

/// True when the routed room differs from the mounted one.
fn should_remount(mounted: Option<&str>, routed: Option<&str>) -> bool {
    mounted != routed
}

/// Room page — header bar plus the drawing surface for the active session,
/// or a join placeholder when the route carries no room id.
#[component]
pub fn RoomPage() -> impl IntoView {
    let sessions = expect_context::<RwSignal<SessionPairState>>();
    let params = use_params_map();
    let room_id = move || params.read().get("id");
    let last_mounted = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let shutdowns: std::rc::Rc<std::cell::RefCell<Vec<futures::channel::oneshot::Sender<()>>>> =
        std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

    // Mount the pair once per routed room id.
    {
        #[cfg(feature = "hydrate")]
        let shutdowns = std::rc::Rc::clone(&shutdowns);
        Effect::new(move || {
            let next = room_id();
            if !should_remount(last_mounted.get_untracked().as_deref(), next.as_deref()) {
                return;
            }

            // Dropping the previous shutdown channels ends the old tasks and
            // closes their sockets before the new pair connects.
            #[cfg(feature = "hydrate")]
            shutdowns.borrow_mut().clear();

            sessions.set(SessionPairState::for_room(&browser::page_origin(), next.clone()));

            #[cfg(feature = "hydrate")]
            if next.is_some() {
                use crate::net::sync_client::spawn_sync_client;
                use crate::state::session::SessionSlot;

                let mut held = shutdowns.borrow_mut();
                held.push(spawn_sync_client(sessions, SessionSlot::A));
                held.push(spawn_sync_client(sessions, SessionSlot::B));
            }

            last_mounted.set(next);
        });
    }

    // Both connections are released on every exit path.
    {
        #[cfg(feature = "hydrate")]
        let shutdowns = std::rc::Rc::clone(&shutdowns);
        on_cleanup(move || {
            #[cfg(feature = "hydrate")]
            shutdowns.borrow_mut().clear();
            sessions.set(SessionPairState::default());
        });
    }

    let has_room = move || sessions.get().room_id.is_some();

    view! {
        <div class="room-page">
            <div class="room-page__header">
                <HeaderBar/>
            </div>
            <div class="room-page__content">
                <Show
                    when=has_room
                    fallback=|| {
                        view! {
                            <div class="room-page__empty">
                                "No room selected. Open /room/<id> to join one."
                            </div>
                        }
                    }
                >
                    <CanvasHost/>
                </Show>
            </div>
        </div>
    }
}
