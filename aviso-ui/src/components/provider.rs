//! Toast provider: shares config and styles with every toast below it

use std::rc::Rc;

use aviso_common::{StyleSheet, ToastConfig};
use dioxus::prelude::*;
use tracing::warn;

/// Config plus the style table built from it
#[derive(Clone, PartialEq)]
pub struct ToastSettings {
    pub config: ToastConfig,
    pub styles: Rc<StyleSheet>,
}

impl ToastSettings {
    pub fn new(config: ToastConfig) -> Self {
        let styles = Rc::new(StyleSheet::for_config(&config));
        Self { config, styles }
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

/// Context handle provided by [`ToastProvider`]
#[derive(Clone, Copy, PartialEq)]
pub struct ToastContext(pub ReadSignal<ToastSettings>);

/// Configures swipe direction, timings and labels for the toasts inside it
#[component]
pub fn ToastProvider(
    /// Settings for all toasts under this provider
    #[props(default)]
    config: ToastConfig,
    children: Element,
) -> Element {
    // Rebuilt only when the config prop changes
    let settings = use_memo(use_reactive!(|config| ToastSettings::new(config)));
    use_context_provider(|| ToastContext(settings.into()));

    rsx! {
        {children}
    }
}

/// Settings from the nearest [`ToastProvider`].
///
/// Outside a provider this falls back to the defaults.
pub fn use_toast_settings() -> ReadSignal<ToastSettings> {
    use_hook(|| match try_consume_context::<ToastContext>() {
        Some(ToastContext(settings)) => settings,
        None => {
            warn!("Toast component rendered outside a ToastProvider, using default settings");
            Signal::new(ToastSettings::default()).into()
        }
    })
}
