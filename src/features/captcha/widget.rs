//! Slider verification component. Rendering and event wiring live here; the
//! pass/fail logic is in [`super::model`]. Pointer events are captured on
//! the handle element itself, so every mounted widget owns its drag session
//! and multiple instances coexist without shared listeners.

use super::model::{ReleaseOutcome, SliderChallenge, TrackGeometry, target_percent_from_unit};
use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, PointerEvent};

/// Name of the DOM event dispatched on the widget container once per
/// successful challenge. The event detail carries `{verified: true}`.
pub const VERIFIED_EVENT: &str = "captcha-verified";

/// How long the failure icon and caption stay up before reverting to idle.
const FAILURE_RESET_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Status {
    Idle,
    Dragging,
    Verified,
    Failed,
}

impl Status {
    fn caption(self) -> &'static str {
        match self {
            Status::Idle => "Slide to verify",
            Status::Dragging => "Keep sliding...",
            Status::Verified => "Verified!",
            Status::Failed => "Try again",
        }
    }
}

/// Draggable slider challenge gating login and signup submissions.
///
/// This is UX friction only: the verdict is computed client-side and must
/// not be treated as proof of anything by the backend.
#[component]
pub fn SliderCaptcha(
    /// Invoked once when the challenge is passed.
    #[prop(optional)]
    on_verified: Option<Callback<()>>,
    /// Bump this counter to clear the widget and seed a fresh target.
    #[prop(optional, into)]
    reset: Option<Signal<u32>>,
) -> impl IntoView {
    let challenge = RwSignal::new(SliderChallenge::from_unit(js_sys::Math::random()));
    let (offset, set_offset) = signal(0.0_f64);
    let (target_marker_left, set_target_marker_left) = signal(0.0_f64);
    let (near, set_near) = signal(false);
    let (status, set_status) = signal(Status::Idle);
    let (reverting, set_reverting) = signal(false);

    let container_ref = NodeRef::<Div>::new();
    let track_ref = NodeRef::<Div>::new();
    let handle_ref = NodeRef::<Div>::new();

    let geometry = move || -> Option<TrackGeometry> {
        let track = track_ref.get_untracked()?;
        let handle = handle_ref.get_untracked()?;
        Some(TrackGeometry::new(
            f64::from(track.offset_width()),
            f64::from(handle.offset_width()),
        ))
    };

    // Positions the target marker once the track has a measurable width,
    // and again whenever the challenge is re-seeded. Reads the refs tracked
    // so the marker lands after mount.
    Effect::new(move |_| {
        let percent = challenge.with(|c| c.target_percent());
        let (Some(track), Some(handle)) = (track_ref.get(), handle_ref.get()) else {
            return;
        };
        let geometry = TrackGeometry::new(
            f64::from(track.offset_width()),
            f64::from(handle.offset_width()),
        );
        let marker = geometry.target_offset(percent) + geometry.handle_width / 2.0;
        set_target_marker_left.set(marker);
    });

    if let Some(reset) = reset {
        Effect::new(move |previous: Option<u32>| {
            let counter = reset.get();
            if previous.is_some_and(|value| value != counter) {
                challenge.update(|c| c.reset_with(target_percent_from_unit(js_sys::Math::random())));
                set_offset.set(0.0);
                set_near.set(false);
                set_reverting.set(false);
                set_status.set(Status::Idle);
            }
            counter
        });
    }

    let on_pointer_down = move |event: PointerEvent| {
        if challenge.with_untracked(|c| c.verified()) {
            return;
        }
        event.prevent_default();
        if let Some(handle) = handle_ref.get_untracked() {
            let _ = handle.set_pointer_capture(event.pointer_id());
        }
        if challenge
            .try_update(|c| c.begin_drag(f64::from(event.client_x())))
            .unwrap_or(false)
        {
            set_reverting.set(false);
            set_status.set(Status::Dragging);
        }
    };

    let on_pointer_move = move |event: PointerEvent| {
        if !challenge.with_untracked(|c| c.dragging()) {
            return;
        }
        let Some(geometry) = geometry() else {
            return;
        };
        event.prevent_default();
        let update = challenge
            .try_update(|c| c.drag_to(f64::from(event.client_x()), geometry))
            .flatten();
        if let Some(update) = update {
            set_offset.set(update.offset);
            set_near.set(update.near_target);
        }
    };

    let on_pointer_up = move |event: PointerEvent| {
        if !challenge.with_untracked(|c| c.dragging()) {
            return;
        }
        // Widths are re-read here so the decision survives mid-drag reflow.
        let Some(geometry) = geometry() else {
            return;
        };
        if let Some(handle) = handle_ref.get_untracked() {
            let _ = handle.release_pointer_capture(event.pointer_id());
        }
        set_near.set(false);

        match challenge.try_update(|c| c.release(geometry)).flatten() {
            Some(ReleaseOutcome::Verified { snap_offset }) => {
                set_offset.set(snap_offset);
                set_status.set(Status::Verified);
                dispatch_verified(&container_ref);
                if let Some(on_verified) = on_verified {
                    on_verified.run(());
                }
            }
            Some(ReleaseOutcome::Rejected) => {
                set_reverting.set(true);
                set_offset.set(0.0);
                set_status.set(Status::Failed);
                Timeout::new(FAILURE_RESET_MS, move || {
                    set_reverting.set(false);
                    if status.get_untracked() == Status::Failed {
                        set_status.set(Status::Idle);
                    }
                })
                .forget();
            }
            None => {}
        }
    };

    view! {
        <div
            node_ref=container_ref
            class="relative select-none"
            class:opacity-90=move || status.get() == Status::Verified
        >
            <div
                node_ref=track_ref
                class="relative h-11 w-full overflow-hidden rounded-lg border border-gray-300 bg-gray-100 dark:border-gray-600 dark:bg-gray-700"
            >
                <div
                    class="absolute top-0 h-full w-0.5 bg-gray-400 transition-colors dark:bg-gray-500"
                    class:bg-blue-500=move || near.get()
                    style:left=move || format!("{}px", target_marker_left.get())
                ></div>
                <div
                    class="absolute left-0 top-0 h-full bg-blue-200 dark:bg-blue-900/40"
                    class:transition-all=move || reverting.get()
                    style:width=move || format!("{}px", offset.get())
                ></div>
                <div
                    node_ref=handle_ref
                    class="absolute top-0 flex h-full w-10 cursor-grab touch-none items-center justify-center rounded-lg border border-gray-300 bg-white shadow-sm dark:border-gray-500 dark:bg-gray-800"
                    class:cursor-grabbing=move || status.get() == Status::Dragging
                    class:transition-all=move || reverting.get()
                    style:left=move || format!("{}px", offset.get())
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_up
                >
                    <span class="material-symbols-outlined text-gray-500 dark:text-gray-300">
                        {move || {
                            if status.get() == Status::Verified { "check" } else { "chevron_right" }
                        }}
                    </span>
                </div>
            </div>
            <div class="mt-2 flex items-center justify-between text-sm">
                <span class="text-gray-500 dark:text-gray-400">
                    {move || status.get().caption()}
                </span>
                {move || {
                    let icon = match status.get() {
                        Status::Verified => {
                            Some(("check_circle", "material-symbols-outlined text-emerald-600"))
                        }
                        Status::Failed => {
                            Some(("cancel", "material-symbols-outlined text-red-600"))
                        }
                        _ => None,
                    };
                    icon.map(|(name, class)| view! { <span class=class>{name}</span> })
                }}
            </div>
        </div>
    }
}

/// Dispatches the `captcha-verified` event on the widget container so
/// listeners outside the component tree can observe the result.
fn dispatch_verified(container_ref: &NodeRef<Div>) {
    let Some(container) = container_ref.get_untracked() else {
        return;
    };
    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("verified"), &JsValue::TRUE);

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict(VERIFIED_EVENT, &init) {
        let _ = container.dispatch_event(&event);
    }
}
