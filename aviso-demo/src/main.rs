//! aviso demo - Web page for trying the notification toast by hand
//!
//! A message field and a button that flips the toast trigger. Toast settings
//! can be overridden with a JSON object in the `config` query parameter,
//! e.g. `/?config={"swipe_direction":"left","duration_ms":0}`.

use aviso_common::ToastConfig;
use aviso_ui::NotificationToast;
use dioxus::prelude::*;
use tracing::{warn, Level};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:config")]
    Demo { config: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
pub fn Demo(config: Option<String>) -> Element {
    let mut trigger = use_signal(|| false);
    let mut message = use_signal(|| "Agendamento confirmado".to_string());
    let toast_config = config_from_query(config.as_deref());
    let trigger_read: ReadSignal<bool> = trigger.into();

    rsx! {
        div { style: "min-height: 100vh; padding: 2rem; font-family: sans-serif; display: flex; gap: 0.75rem; align-items: center;",
            input {
                r#type: "text",
                value: "{message}",
                aria_label: "Toast message",
                oninput: move |evt| message.set(evt.value()),
            }
            button {
                r#type: "button",
                onclick: move |_| trigger.toggle(),
                "Show toast"
            }
        }
        NotificationToast { trigger: trigger_read, message: message(), config: toast_config }
    }
}

/// Parse the `?config=` JSON, falling back to the defaults.
fn config_from_query(raw: Option<&str>) -> ToastConfig {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return ToastConfig::default();
    };
    match ToastConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring ?config: {e}");
            ToastConfig::default()
        }
    }
}

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}
