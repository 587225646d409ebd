//! Notification toast revealed shortly after its trigger changes
//!
//! Every change of `trigger` (either direction) hides the toast, waits the
//! reveal delay, then shows `message` with the time of the reveal. The pending
//! reveal is a spawned task owned by the toast's state machine: a newer
//! trigger cancels it, and so does unmounting.

use aviso_common::{
    DismissibleSurface, ScheduledTask, ToastConfig, ToastContent, ToastMachine, TriggerOutcome,
};
use chrono::{Local, Utc};
use dioxus::prelude::*;
use tracing::{debug, error};

use super::button::{ButtonSize, ButtonVariant};
use super::provider::ToastProvider;
use super::toast::{Toast, ToastAction, ToastDescription, ToastTitle};
use super::viewport::ToastViewport;
use crate::timer::sleep_ms;

/// Pending reveal running on the Dioxus runtime
struct RevealTask(Task);

impl ScheduledTask for RevealTask {
    fn cancel(self) {
        self.0.cancel();
    }
}

#[component]
pub fn NotificationToast(
    /// Any change of this value starts a new toast cycle
    trigger: ReadSignal<bool>,
    /// Shown verbatim as the title
    message: String,
    /// Timings, swipe direction and labels
    #[props(default)]
    config: ToastConfig,
) -> Element {
    let reveal_delay_ms = config.reveal_delay_ms;
    let timestamp_policy = config.timestamp_policy;
    let mut machine = use_signal(|| {
        ToastMachine::<RevealTask>::new(Utc::now(), config.reveal_on_mount)
    });

    use_effect(move || {
        let value = trigger();
        let mut reveal_target = machine;
        let outcome = machine.write().observe_trigger(value, move |ticket| {
            RevealTask(spawn(async move {
                sleep_ms(reveal_delay_ms).await;
                let at = timestamp_policy.event_timestamp(Utc::now());
                reveal_target.write().reveal(ticket, at);
            }))
        });
        if outcome != TriggerOutcome::Unchanged {
            debug!(trigger = value, ?outcome, "Notification toast trigger observed");
        }
    });

    use_drop(move || {
        if let Ok(mut machine) = machine.try_write() {
            machine.teardown();
        }
    });

    let open = use_memo(move || machine.read().is_visible());
    let open: ReadSignal<bool> = open.into();

    let ToastContent {
        title,
        description,
        datetime,
    } = ToastContent::new(&message, machine.read().event_timestamp(), &Local);
    let action = match config.action_slot() {
        Ok(slot) => Some(slot),
        Err(e) => {
            error!("Toast action hidden: {e}");
            None
        }
    };

    rsx! {
        ToastProvider { config,
            ToastViewport {
                Toast {
                    open,
                    on_open_change: move |is_open: bool| machine.write().set_open(is_open),
                    ToastTitle { "{title}" }
                    ToastDescription {
                        time { datetime: "{datetime}", "{description}" }
                    }
                    if let Some(slot) = action {
                        ToastAction {
                            slot,
                            variant: ButtonVariant::Red,
                            size: ButtonSize::Small,
                        }
                    }
                }
            }
        }
    }
}
