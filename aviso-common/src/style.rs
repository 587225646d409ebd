//! Data-driven style table
//!
//! Styles are flat lookups: a base set per [`StyleTarget`], overlays per
//! `(target, variant)` and overlays per `(target, state)`. Resolving merges
//! them in that order; later sets win property by property.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use crate::config::ToastConfig;
use crate::surface::DataState;
use crate::swipe::SwipePhase;

const SLATE_11: &str = "hsl(206, 6.0%, 43.5%)";
const SLATE_12: &str = "hsl(206, 24.0%, 9.0%)";
const VIOLET_11: &str = "hsl(252, 56.0%, 57.5%)";
const BLACK_A7: &str = "hsla(0, 0%, 0%, 0.294)";
const GREEN_2: &str = "hsl(120, 60.0%, 98.8%)";
const GREEN_7: &str = "hsl(141, 43.7%, 72.8%)";
const GREEN_11: &str = "hsl(153, 67.0%, 28.5%)";
const RED_2: &str = "hsl(359, 100%, 98.6%)";
const RED_7: &str = "hsl(359, 74.2%, 81.7%)";
const RED_11: &str = "hsl(358, 65.0%, 48.7%)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown style variant: {0}")]
    UnknownVariant(String),
}

/// Element a style set applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    Viewport,
    Toast,
    Title,
    Description,
    Action,
    Button,
}

/// Group a variant belongs to; one variant per group is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantGroup {
    Color,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKey {
    Violet,
    Green,
    Red,
    Small,
}

impl VariantKey {
    pub fn group(self) -> VariantGroup {
        match self {
            VariantKey::Violet | VariantKey::Green | VariantKey::Red => VariantGroup::Color,
            VariantKey::Small => VariantGroup::Size,
        }
    }
}

impl FromStr for VariantKey {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "violet" => Ok(VariantKey::Violet),
            "green" => Ok(VariantKey::Green),
            "red" => Ok(VariantKey::Red),
            "small" => Ok(VariantKey::Small),
            other => Err(StyleError::UnknownVariant(other.to_string())),
        }
    }
}

/// State an overlay is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    Open,
    Closed,
    SwipeMove,
    SwipeCancel,
    SwipeEnd,
    Hover,
    Focus,
}

/// Runtime state of the element being styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
    pub data_state: Option<DataState>,
    pub swipe: Option<SwipePhase>,
    pub hovered: bool,
    pub focused: bool,
}

impl StyleState {
    /// Overlay keys in application order
    fn keys(&self) -> Vec<StateKey> {
        let mut keys = Vec::new();
        match self.data_state {
            Some(DataState::Open) => keys.push(StateKey::Open),
            Some(DataState::Closed) => keys.push(StateKey::Closed),
            None => {}
        }
        match self.swipe {
            Some(SwipePhase::Move) => keys.push(StateKey::SwipeMove),
            Some(SwipePhase::Cancel) => keys.push(StateKey::SwipeCancel),
            Some(SwipePhase::End) => keys.push(StateKey::SwipeEnd),
            None => {}
        }
        if self.hovered {
            keys.push(StateKey::Hover);
        }
        if self.focused {
            keys.push(StateKey::Focus);
        }
        keys
    }
}

/// Ordered CSS declarations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSet {
    declarations: Vec<(&'static str, String)>,
}

impl StyleSet {
    pub fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        let mut set = Self::default();
        for (property, value) in pairs {
            set.set(*property, *value);
        }
        set
    }

    /// Set a property, replacing an earlier value in place.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn overlay(&mut self, other: &StyleSet) {
        for (property, value) in &other.declarations {
            self.set(*property, value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as an inline `style` attribute value
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The whole style table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    base: HashMap<StyleTarget, StyleSet>,
    variants: HashMap<(StyleTarget, VariantKey), StyleSet>,
    states: HashMap<(StyleTarget, StateKey), StyleSet>,
    defaults: HashMap<StyleTarget, Vec<VariantKey>>,
}

impl StyleSheet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, target: StyleTarget, set: StyleSet) -> Self {
        self.base.insert(target, set);
        self
    }

    pub fn with_variant(mut self, target: StyleTarget, key: VariantKey, set: StyleSet) -> Self {
        self.variants.insert((target, key), set);
        self
    }

    pub fn with_state(mut self, target: StyleTarget, key: StateKey, set: StyleSet) -> Self {
        self.states.insert((target, key), set);
        self
    }

    /// Variant applied when the caller picks none from its group
    pub fn with_default_variant(mut self, target: StyleTarget, key: VariantKey) -> Self {
        self.defaults.entry(target).or_default().push(key);
        self
    }

    /// Merge base, variants (explicit or default per group) and state overlays.
    pub fn resolve(
        &self,
        target: StyleTarget,
        variants: &[VariantKey],
        state: &StyleState,
    ) -> StyleSet {
        let mut resolved = self.base.get(&target).cloned().unwrap_or_default();

        let mut chosen: Vec<VariantKey> = variants.to_vec();
        if let Some(defaults) = self.defaults.get(&target) {
            for default in defaults {
                if !chosen.iter().any(|v| v.group() == default.group()) {
                    chosen.insert(0, *default);
                }
            }
        }
        for key in chosen {
            if let Some(set) = self.variants.get(&(target, key)) {
                resolved.overlay(set);
            }
        }

        for key in state.keys() {
            if let Some(set) = self.states.get(&(target, key)) {
                resolved.overlay(set);
            }
        }
        resolved
    }

    /// [`resolve`](Self::resolve) with variants given by name, e.g. `["red", "small"]`.
    pub fn resolve_named(
        &self,
        target: StyleTarget,
        variants: &[&str],
        state: &StyleState,
    ) -> Result<StyleSet, StyleError> {
        let keys = variants
            .iter()
            .map(|name| name.parse::<VariantKey>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.resolve(target, &keys, state))
    }

    /// Toast styles for the given viewport placement.
    pub fn for_config(config: &ToastConfig) -> Self {
        let inset = format!("{}px", config.viewport_inset_px);
        let (vertical, horizontal) = config.viewport_corner.edges();
        let mut viewport = StyleSet::from_pairs(&[
            ("position", "fixed"),
            ("display", "flex"),
            ("flex-direction", "column"),
            ("padding", inset.as_str()),
            ("gap", "10px"),
            ("width", "390px"),
            ("max-width", "100vw"),
            ("margin", "0"),
            ("list-style", "none"),
            ("z-index", "2147483647"),
            ("outline", "none"),
        ]);
        viewport.set(vertical, "0");
        viewport.set(horizontal, "0");

        let violet_shadow = format!("0 2px 10px {BLACK_A7}");
        let green_shadow = format!("inset 0 0 0 1px {GREEN_7}");
        let red_shadow = format!("inset 0 0 0 1px {RED_7}");

        Self::empty()
            .with_base(StyleTarget::Viewport, viewport)
            .with_base(
                StyleTarget::Toast,
                StyleSet::from_pairs(&[
                    ("background-color", "white"),
                    ("border-radius", "6px"),
                    (
                        "box-shadow",
                        "hsl(206 22% 7% / 35%) 0px 10px 38px -10px, hsl(206 22% 7% / 20%) 0px 10px 20px -15px",
                    ),
                    ("padding", "15px"),
                    ("display", "grid"),
                    ("grid-template-areas", "\"title action\" \"description action\""),
                    ("grid-template-columns", "auto max-content"),
                    ("column-gap", "15px"),
                    ("align-items", "center"),
                    ("touch-action", "none"),
                ]),
            )
            .with_state(
                StyleTarget::Toast,
                StateKey::Open,
                StyleSet::from_pairs(&[("opacity", "1")]),
            )
            .with_state(
                StyleTarget::Toast,
                StateKey::Closed,
                StyleSet::from_pairs(&[("opacity", "0"), ("transition", "opacity 100ms ease-in")]),
            )
            .with_state(
                StyleTarget::Toast,
                StateKey::SwipeMove,
                StyleSet::from_pairs(&[(
                    "transform",
                    "translate(var(--toast-swipe-move-x, 0px), var(--toast-swipe-move-y, 0px))",
                )]),
            )
            .with_state(
                StyleTarget::Toast,
                StateKey::SwipeCancel,
                StyleSet::from_pairs(&[
                    ("transform", "translate(0, 0)"),
                    ("transition", "transform 200ms ease-out"),
                ]),
            )
            .with_state(
                StyleTarget::Toast,
                StateKey::SwipeEnd,
                StyleSet::from_pairs(&[
                    (
                        "transform",
                        "translate(var(--toast-swipe-end-x, 0px), var(--toast-swipe-end-y, 0px))",
                    ),
                    ("transition", "opacity 100ms ease-out"),
                ]),
            )
            .with_base(
                StyleTarget::Title,
                StyleSet::from_pairs(&[
                    ("grid-area", "title"),
                    ("margin-bottom", "5px"),
                    ("font-weight", "500"),
                    ("color", SLATE_12),
                    ("font-size", "15px"),
                ]),
            )
            .with_base(
                StyleTarget::Description,
                StyleSet::from_pairs(&[
                    ("grid-area", "description"),
                    ("margin", "0"),
                    ("color", SLATE_11),
                    ("font-size", "13px"),
                    ("line-height", "1.3"),
                ]),
            )
            .with_base(
                StyleTarget::Action,
                StyleSet::from_pairs(&[("grid-area", "action")]),
            )
            .with_base(
                StyleTarget::Button,
                StyleSet::from_pairs(&[
                    ("all", "unset"),
                    ("display", "inline-flex"),
                    ("align-items", "center"),
                    ("justify-content", "center"),
                    ("border-radius", "4px"),
                    ("padding", "0 15px"),
                    ("font-size", "15px"),
                    ("line-height", "1"),
                    ("font-weight", "500"),
                    ("height", "35px"),
                    ("cursor", "pointer"),
                ]),
            )
            .with_variant(
                StyleTarget::Button,
                VariantKey::Small,
                StyleSet::from_pairs(&[
                    ("font-size", "12px"),
                    ("padding", "0 10px"),
                    ("line-height", "25px"),
                    ("height", "25px"),
                ]),
            )
            .with_variant(
                StyleTarget::Button,
                VariantKey::Violet,
                StyleSet::from_pairs(&[
                    ("background-color", "white"),
                    ("color", VIOLET_11),
                    ("box-shadow", violet_shadow.as_str()),
                ]),
            )
            .with_variant(
                StyleTarget::Button,
                VariantKey::Green,
                StyleSet::from_pairs(&[
                    ("background-color", GREEN_2),
                    ("color", GREEN_11),
                    ("box-shadow", green_shadow.as_str()),
                ]),
            )
            .with_variant(
                StyleTarget::Button,
                VariantKey::Red,
                StyleSet::from_pairs(&[
                    ("background-color", RED_2),
                    ("color", RED_11),
                    ("box-shadow", red_shadow.as_str()),
                ]),
            )
            .with_default_variant(StyleTarget::Button, VariantKey::Violet)
            .with_state(
                StyleTarget::Button,
                StateKey::Hover,
                StyleSet::from_pairs(&[("filter", "brightness(0.96)")]),
            )
            .with_state(
                StyleTarget::Button,
                StateKey::Focus,
                StyleSet::from_pairs(&[
                    ("outline", "2px solid currentColor"),
                    ("outline-offset", "1px"),
                ]),
            )
    }
}
