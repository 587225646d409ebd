//! Fixed-position region that stacks toasts
//!
//! Hovering or focusing the viewport pauses every toast's auto-dismiss
//! countdown. The configured hotkey (F8 by default) moves focus into it; an
//! empty hotkey installs no document listener.

use std::sync::atomic::{AtomicU64, Ordering};

use aviso_common::{StyleState, StyleTarget};
use dioxus::prelude::*;

use super::provider::use_toast_settings;
use crate::wasm_utils::{focus_element_by_id, HotkeyListener};

/// Counter for generating unique viewport IDs
static VIEWPORT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Whether the viewport is hovered or holds focus, shared with its toasts
#[derive(Clone, Copy, PartialEq)]
pub struct ViewportPause(pub Signal<bool>);

/// Pause state of the enclosing viewport, or a never-paused signal outside one.
pub fn use_viewport_pause() -> Signal<bool> {
    use_hook(|| match try_consume_context::<ViewportPause>() {
        Some(ViewportPause(paused)) => paused,
        None => Signal::new(false),
    })
}

#[component]
pub fn ToastViewport(children: Element) -> Element {
    let settings = use_toast_settings();
    let mut hovered = use_signal(|| false);
    let mut focused = use_signal(|| false);
    let mut paused = use_signal(|| false);
    use_context_provider(|| ViewportPause(paused));

    let viewport_id = use_hook(|| {
        let id = VIEWPORT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("toast-viewport-{}", id)
    });

    use_effect(move || {
        let next = hovered() || focused();
        if *paused.peek() != next {
            paused.set(next);
        }
    });

    let mut hotkey_listener: Signal<Option<HotkeyListener>> = use_signal(|| None);

    // WORKAROUND: use_effect instead of use_hook so the web_sys_x::window() IPC
    // call runs after the render cycle rather than during it.
    let id_for_hotkey = viewport_id.clone();
    use_effect(move || {
        let hotkey = settings.read().config.hotkey.clone();
        if hotkey.is_empty() {
            return;
        }
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };

        let target_id = id_for_hotkey.clone();
        let focus_document = document.clone();
        let listener = HotkeyListener::new(document, hotkey, move || {
            focus_element_by_id(&focus_document, &target_id);
        });
        hotkey_listener.set(Some(listener));
    });

    use_drop(move || {
        // Detach outside the diff cycle: dropping JS refs during scope teardown
        // triggers synchronous IPC on desktop.
        if let Ok(mut guard) = hotkey_listener.try_write() {
            if let Some(listener) = guard.take() {
                spawn(async move {
                    drop(listener);
                });
            }
        }
    });

    let (label, style) = {
        let settings = settings.read();
        let style = settings
            .styles
            .resolve(StyleTarget::Viewport, &[], &StyleState::default())
            .to_css();
        (settings.config.viewport_aria_label(), style)
    };

    rsx! {
        div {
            role: "region",
            aria_label: "{label}",
            tabindex: "-1",
            ol {
                id: "{viewport_id}",
                tabindex: "-1",
                style: "{style}",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                onfocusin: move |_| focused.set(true),
                onfocusout: move |_| focused.set(false),
                {children}
            }
        }
    }
}
