//! Buttons styled from the toast style table

use aviso_common::{StyleState, StyleTarget, VariantKey};
use dioxus::prelude::*;

use super::provider::use_toast_settings;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used by Button and by the toast close slot.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onhover: Option<EventHandler<bool>>,
    #[props(default)] onfocuschange: Option<EventHandler<bool>>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            style: style.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onmouseenter: move |_| {
                if let Some(handler) = onhover {
                    handler.call(true);
                }
            },
            onmouseleave: move |_| {
                if let Some(handler) = onhover {
                    handler.call(false);
                }
            },
            onfocus: move |_| {
                if let Some(handler) = onfocuschange {
                    handler.call(true);
                }
            },
            onblur: move |_| {
                if let Some(handler) = onfocuschange {
                    handler.call(false);
                }
            },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button color variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// White with violet text - the default
    Violet,
    /// Tinted green - for confirming actions
    Green,
    /// Tinted red - for dismissing or destructive actions
    Red,
}

impl From<ButtonVariant> for VariantKey {
    fn from(variant: ButtonVariant) -> Self {
        match variant {
            ButtonVariant::Violet => VariantKey::Violet,
            ButtonVariant::Green => VariantKey::Green,
            ButtonVariant::Red => VariantKey::Red,
        }
    }
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// 25px high, 12px text
    Small,
    /// 35px high, 15px text
    Medium,
}

impl ButtonSize {
    fn variant_key(self) -> Option<VariantKey> {
        match self {
            ButtonSize::Small => Some(VariantKey::Small),
            ButtonSize::Medium => None,
        }
    }
}

/// Button with variant, size and hover/focus styles from the style table
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let settings = use_toast_settings();
    let mut hovered = use_signal(|| false);
    let mut focused = use_signal(|| false);

    let variants: Vec<VariantKey> = std::iter::once(variant.into())
        .chain(size.variant_key())
        .collect();
    let state = StyleState {
        hovered: hovered() && !disabled,
        focused: focused(),
        ..Default::default()
    };
    let mut style = settings
        .read()
        .styles
        .resolve(StyleTarget::Button, &variants, &state);
    if disabled {
        style.set("opacity", "0.5");
        style.set("cursor", "not-allowed");
    }

    rsx! {
        ChromelessButton {
            disabled,
            style: Some(style.to_css()),
            aria_label,
            onhover: move |is_hovered| hovered.set(is_hovered),
            onfocuschange: move |is_focused| focused.set(is_focused),
            onclick,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_maps_to_style_key() {
        assert_eq!(VariantKey::from(ButtonVariant::Red), VariantKey::Red);
        assert_eq!(VariantKey::from(ButtonVariant::Violet), VariantKey::Violet);
    }

    #[test]
    fn test_medium_size_uses_base_style() {
        assert_eq!(ButtonSize::Small.variant_key(), Some(VariantKey::Small));
        assert_eq!(ButtonSize::Medium.variant_key(), None);
    }
}
