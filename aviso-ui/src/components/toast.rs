//! Toast root and its slots
//!
//! `Toast` is the dismissible surface. It is controlled: the parent owns the
//! open state and is told about close requests through `on_open_change`
//! (close/action slots, swipe, Escape, auto-dismiss countdown). After closing,
//! the root stays mounted with `data-state="closed"` for the exit duration.
//!
//! ```ignore
//! Toast { open, on_open_change: move |open| toast_open.set(open),
//!     ToastTitle { "Saved" }
//!     ToastDescription { "Your changes are live" }
//!     ToastAction { slot: ActionSlot::new("Undo", "Undo the last save")?, onclick: undo }
//! }
//! ```

use aviso_common::{
    surface_attributes, AccessibleLabelSlot, ActionSlot, DismissCountdown, DismissibleSurface,
    PointerKind, StyleState, StyleTarget, SwipeRelease, SwipeTracker,
};
use chrono::Utc;
use dioxus::prelude::*;
use tracing::{debug, warn};

use super::button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use super::provider::use_toast_settings;
use super::viewport::use_viewport_pause;
use crate::timer::sleep_ms;

/// Lets slots inside a toast close it
#[derive(Clone, Copy)]
struct ToastRootContext {
    on_open_change: EventHandler<bool>,
}

/// Root surface as seen through the dismissible-surface capability
struct RootSurface {
    open: bool,
    on_open_change: EventHandler<bool>,
}

impl DismissibleSurface for RootSurface {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.on_open_change.call(open);
        }
    }
}

fn request_close(open: bool, on_open_change: EventHandler<bool>, reason: &'static str) {
    debug!(reason, "Toast close requested");
    RootSurface {
        open,
        on_open_change,
    }
    .set_open(false);
}

/// Replace the task in `slot`, cancelling the previous one.
fn replace_task(mut slot: Signal<Option<Task>>, task: Option<Task>) {
    if let Some(previous) = slot.take() {
        previous.cancel();
    }
    slot.set(task);
}

#[component]
pub fn Toast(
    /// Whether the toast is shown
    open: ReadSignal<bool>,
    /// Called with `false` when the toast asks to be closed
    on_open_change: EventHandler<bool>,
    children: Element,
) -> Element {
    let settings = use_toast_settings();
    let paused = use_viewport_pause();

    let mut tracker = use_signal(|| {
        let config = &settings.peek().config;
        SwipeTracker::new(config.swipe_direction, config.swipe_threshold_px)
    });
    let mut countdown = use_signal(|| DismissCountdown::new(settings.peek().config.duration_ms));
    let mut present = use_signal(|| false);
    let mut last_open = use_signal(|| false);
    let close_task: Signal<Option<Task>> = use_signal(|| None);
    let exit_task: Signal<Option<Task>> = use_signal(|| None);

    use_context_provider(|| ToastRootContext { on_open_change });

    // Open/close and pause/resume drive the countdown and the exit presence
    use_effect(move || {
        let is_open = open();
        let was_open = *last_open.peek();
        if was_open != is_open {
            last_open.set(is_open);
        }

        if !is_open {
            // Only the open -> closed edge starts the exit
            if was_open {
                countdown.write().stop();
                replace_task(close_task, None);
                if *present.peek() {
                    let exit_ms = settings.peek().config.exit_duration_ms;
                    let task = spawn(async move {
                        sleep_ms(exit_ms).await;
                        present.set(false);
                    });
                    replace_task(exit_task, Some(task));
                }
            }
            return;
        }

        let is_paused = paused();
        let now = Utc::now();

        let delay = if countdown.peek().is_idle() {
            replace_task(exit_task, None);
            tracker.write().reset();
            present.set(true);
            let delay = countdown.write().start(now);
            if is_paused {
                countdown.write().pause(now);
                None
            } else {
                delay
            }
        } else if is_paused {
            if countdown.write().pause(now) {
                replace_task(close_task, None);
            }
            None
        } else {
            countdown.write().resume(now)
        };

        if let Some(delay_ms) = delay {
            let task = spawn(async move {
                sleep_ms(delay_ms).await;
                request_close(true, on_open_change, "timeout");
            });
            replace_task(close_task, Some(task));
        }
    });

    use_drop(move || {
        for mut slot in [close_task, exit_task] {
            if let Ok(mut guard) = slot.try_write() {
                if let Some(task) = guard.take() {
                    task.cancel();
                }
            }
        }
    });

    let is_open = open();
    if !is_open && !present() {
        return rsx! {};
    }

    let surface = RootSurface {
        open: is_open,
        on_open_change,
    };
    let attrs = surface_attributes(&surface, &*tracker.read());
    let resolved = settings
        .read()
        .styles
        .resolve(
            StyleTarget::Toast,
            &[],
            &StyleState {
                data_state: Some(attrs.data_state),
                swipe: attrs.data_swipe,
                ..Default::default()
            },
        )
        .to_css();
    let style = format!("{resolved} {}", attrs.css_vars);

    rsx! {
        li {
            role: "status",
            aria_live: "off",
            aria_atomic: "true",
            tabindex: "0",
            "data-state": attrs.data_state.as_str(),
            "data-swipe": attrs.data_swipe.map(|phase| phase.as_str()),
            "data-swipe-direction": attrs.data_swipe_direction.as_str(),
            style: "{style}",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    request_close(open(), on_open_change, "escape");
                }
            },
            onpointerdown: move |evt: PointerEvent| {
                if evt.trigger_button() != Some(dioxus::html::input_data::MouseButton::Primary) {
                    return;
                }
                let point = evt.client_coordinates();
                tracker.write().pointer_down(point.x, point.y);
            },
            onpointermove: move |evt: PointerEvent| {
                let point = evt.client_coordinates();
                let kind = PointerKind::from_pointer_type(&evt.pointer_type());
                tracker.write().pointer_move(point.x, point.y, kind);
            },
            onpointerup: move |_| {
                let release = tracker.write().pointer_up();
                if release == SwipeRelease::Dismiss {
                    request_close(open(), on_open_change, "swipe");
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ToastTitle(children: Element) -> Element {
    let settings = use_toast_settings();
    let style = settings
        .read()
        .styles
        .resolve(StyleTarget::Title, &[], &StyleState::default())
        .to_css();

    rsx! {
        div { style: "{style}", {children} }
    }
}

#[component]
pub fn ToastDescription(children: Element) -> Element {
    let settings = use_toast_settings();
    let style = settings
        .read()
        .styles
        .resolve(StyleTarget::Description, &[], &StyleState::default())
        .to_css();

    rsx! {
        div { style: "{style}", {children} }
    }
}

/// Close the enclosing toast. Logs and does nothing outside a `Toast`.
fn use_close_toast() -> Callback<()> {
    let root = use_hook(try_consume_context::<ToastRootContext>);
    use_callback(move |()| match root {
        Some(root) => request_close(true, root.on_open_change, "close button"),
        None => warn!("Toast close control rendered outside a Toast"),
    })
}

/// Action button that also closes the toast.
///
/// The slot's alt text replaces the visible label for assistive technology.
#[component]
pub fn ToastAction(
    slot: ActionSlot,
    #[props(default = ButtonVariant::Violet)] variant: ButtonVariant,
    #[props(default = ButtonSize::Small)] size: ButtonSize,
    /// Extra work to do before the toast closes
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let settings = use_toast_settings();
    let close = use_close_toast();
    let style = settings
        .read()
        .styles
        .resolve(StyleTarget::Action, &[], &StyleState::default())
        .to_css();
    let label = slot.label().to_string();
    let alt_text = slot.alt_text().to_string();

    rsx! {
        div {
            style: "{style}",
            "data-toast-announce-alt": "{alt_text}",
            Button {
                variant,
                size,
                aria_label: Some(alt_text.clone()),
                onclick: move |evt: MouseEvent| {
                    if let Some(handler) = onclick {
                        handler.call(evt);
                    }
                    close.call(());
                },
                "{label}"
            }
        }
    }
}

/// Unstyled control that closes the toast
#[component]
pub fn ToastClose(
    #[props(default = "Close".to_string())] aria_label: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let close = use_close_toast();

    rsx! {
        ChromelessButton {
            class,
            aria_label: Some(aria_label),
            onclick: move |_| close.call(()),
            {children}
        }
    }
}
