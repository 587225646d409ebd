//! Toast configuration
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable config.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::surface::{ActionSlot, SlotError};
use crate::swipe::{SwipeDirection, DEFAULT_SWIPE_THRESHOLD_PX};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid toast config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown swipe direction: {0}")]
    UnknownSwipeDirection(String),
    #[error("Unknown viewport corner: {0}")]
    UnknownCorner(String),
}

/// Screen corner the viewport is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl ViewportCorner {
    /// CSS edges (vertical, horizontal) pinned to zero
    pub fn edges(self) -> (&'static str, &'static str) {
        match self {
            ViewportCorner::TopLeft => ("top", "left"),
            ViewportCorner::TopRight => ("top", "right"),
            ViewportCorner::BottomLeft => ("bottom", "left"),
            ViewportCorner::BottomRight => ("bottom", "right"),
        }
    }
}

impl FromStr for ViewportCorner {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(ViewportCorner::TopLeft),
            "top-right" => Ok(ViewportCorner::TopRight),
            "bottom-left" => Ok(ViewportCorner::BottomLeft),
            "bottom-right" => Ok(ViewportCorner::BottomRight),
            other => Err(ConfigError::UnknownCorner(other.to_string())),
        }
    }
}

/// Which instant the description shows for a revealed toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    /// The moment the toast was revealed
    #[default]
    AtReveal,
    /// One week after the reveal
    OneWeekAhead,
}

impl TimestampPolicy {
    pub fn event_timestamp(self, revealed_at: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimestampPolicy::AtReveal => revealed_at,
            TimestampPolicy::OneWeekAhead => revealed_at + Duration::days(7),
        }
    }
}

/// Settings shared by every toast under one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Delay between a trigger change and the reveal
    pub reveal_delay_ms: u64,
    /// Treat the first trigger value as a change
    pub reveal_on_mount: bool,
    /// Auto-dismiss after this long; 0 keeps the toast until dismissed
    pub duration_ms: u64,
    /// How long a closing toast stays mounted with `data-state="closed"`
    pub exit_duration_ms: u64,
    pub swipe_direction: SwipeDirection,
    pub swipe_threshold_px: f64,
    pub viewport_corner: ViewportCorner,
    /// Distance between the viewport's toasts and the screen edges
    pub viewport_inset_px: u32,
    /// Key that moves focus to the viewport; empty disables the hotkey
    pub hotkey: String,
    /// Region label; `{hotkey}` is replaced with the hotkey
    pub viewport_label: String,
    pub action_label: String,
    pub action_alt_text: String,
    pub timestamp_policy: TimestampPolicy,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 100,
            reveal_on_mount: true,
            duration_ms: 5000,
            exit_duration_ms: 100,
            swipe_direction: SwipeDirection::Right,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            viewport_corner: ViewportCorner::BottomRight,
            viewport_inset_px: 25,
            hotkey: "F8".to_string(),
            viewport_label: "Notifications ({hotkey})".to_string(),
            action_label: "Close".to_string(),
            action_alt_text: "Close toast".to_string(),
            timestamp_policy: TimestampPolicy::AtReveal,
        }
    }
}

impl ToastConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn viewport_aria_label(&self) -> String {
        self.viewport_label.replace("{hotkey}", &self.hotkey)
    }

    pub fn action_slot(&self) -> Result<ActionSlot, SlotError> {
        ActionSlot::new(self.action_label.clone(), self.action_alt_text.clone())
    }
}
