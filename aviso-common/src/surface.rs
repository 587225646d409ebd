//! Capabilities a toast surface is built from
//!
//! The toast component only relies on these traits. The reveal machine is a
//! [`DismissibleSurface`], the swipe tracker a [`SwipeGestureSource`] and the
//! action slot an [`AccessibleLabelSlot`]; a UI binding renders whatever
//! [`surface_attributes`] derives from them.

use thiserror::Error;

use crate::swipe::{SwipeDirection, SwipeOffset, SwipePhase};

/// Something that can be open or closed and dismissed by the user
pub trait DismissibleSurface {
    fn is_open(&self) -> bool;

    /// Request a new open state (close button, swipe, Escape, timeout).
    fn set_open(&mut self, open: bool);

    fn data_state(&self) -> DataState {
        if self.is_open() {
            DataState::Open
        } else {
            DataState::Closed
        }
    }
}

/// Source of swipe status for one surface
pub trait SwipeGestureSource {
    fn direction(&self) -> SwipeDirection;
    fn phase(&self) -> Option<SwipePhase>;
    /// Offset while a swipe is in progress
    fn move_offset(&self) -> Option<SwipeOffset>;
    /// Final offset of a swipe that ended in a dismissal
    fn end_offset(&self) -> Option<SwipeOffset>;
}

/// A control with a visible label and an alternate text for assistive technology
pub trait AccessibleLabelSlot {
    fn label(&self) -> &str;
    fn alt_text(&self) -> &str;
}

/// Value of the `data-state` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataState {
    Open,
    Closed,
}

impl DataState {
    pub fn as_str(self) -> &'static str {
        match self {
            DataState::Open => "open",
            DataState::Closed => "closed",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("Action slot \"{0}\" needs a non-empty alt text for screen readers")]
    MissingAltText(String),
}

/// Label and alt text of a toast action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSlot {
    label: String,
    alt_text: String,
}

impl ActionSlot {
    pub fn new(label: impl Into<String>, alt_text: impl Into<String>) -> Result<Self, SlotError> {
        let label = label.into();
        let alt_text = alt_text.into();
        if alt_text.trim().is_empty() {
            return Err(SlotError::MissingAltText(label));
        }
        Ok(Self { label, alt_text })
    }
}

impl AccessibleLabelSlot for ActionSlot {
    fn label(&self) -> &str {
        &self.label
    }

    fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// DOM attributes of a toast root, derived from its capabilities
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceAttributes {
    pub data_state: DataState,
    pub data_swipe: Option<SwipePhase>,
    pub data_swipe_direction: SwipeDirection,
    /// Inline custom properties carrying the swipe offsets
    pub css_vars: String,
}

pub fn surface_attributes(
    surface: &impl DismissibleSurface,
    gesture: &impl SwipeGestureSource,
) -> SurfaceAttributes {
    let mut vars = Vec::new();
    if let Some(offset) = gesture.move_offset() {
        vars.push(format!("--toast-swipe-move-x: {}px;", offset.x));
        vars.push(format!("--toast-swipe-move-y: {}px;", offset.y));
    }
    if let Some(offset) = gesture.end_offset() {
        vars.push(format!("--toast-swipe-end-x: {}px;", offset.x));
        vars.push(format!("--toast-swipe-end-y: {}px;", offset.y));
    }

    SurfaceAttributes {
        data_state: surface.data_state(),
        data_swipe: gesture.phase(),
        data_swipe_direction: gesture.direction(),
        css_vars: vars.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::{PointerKind, SwipeTracker};

    struct Flag(bool);

    impl DismissibleSurface for Flag {
        fn is_open(&self) -> bool {
            self.0
        }

        fn set_open(&mut self, open: bool) {
            self.0 = open;
        }
    }

    #[test]
    fn test_action_slot_requires_alt_text() {
        assert_eq!(
            ActionSlot::new("Close", "  "),
            Err(SlotError::MissingAltText("Close".to_string()))
        );
        let slot = ActionSlot::new("Close", "Close toast").unwrap();
        assert_eq!(slot.label(), "Close");
        assert_eq!(slot.alt_text(), "Close toast");
    }

    #[test]
    fn test_attributes_for_idle_open_surface() {
        let tracker = SwipeTracker::new(SwipeDirection::Right, 50.0);
        let attrs = surface_attributes(&Flag(true), &tracker);
        assert_eq!(attrs.data_state, DataState::Open);
        assert_eq!(attrs.data_swipe, None);
        assert_eq!(attrs.data_swipe_direction.as_str(), "right");
        assert!(attrs.css_vars.is_empty());
    }

    #[test]
    fn test_attributes_while_swiping() {
        let mut tracker = SwipeTracker::new(SwipeDirection::Right, 50.0);
        tracker.pointer_down(0.0, 0.0);
        tracker.pointer_move(25.0, 0.0, PointerKind::Mouse);
        let attrs = surface_attributes(&Flag(true), &tracker);
        assert_eq!(attrs.data_swipe.map(SwipePhase::as_str), Some("move"));
        assert_eq!(
            attrs.css_vars,
            "--toast-swipe-move-x: 25px; --toast-swipe-move-y: 0px;"
        );
    }

    #[test]
    fn test_closed_surface_after_swipe_end() {
        let mut tracker = SwipeTracker::new(SwipeDirection::Right, 50.0);
        tracker.pointer_down(0.0, 0.0);
        tracker.pointer_move(80.0, 0.0, PointerKind::Mouse);
        tracker.pointer_up();
        let mut surface = Flag(true);
        surface.set_open(false);

        let attrs = surface_attributes(&surface, &tracker);
        assert_eq!(attrs.data_state.as_str(), "closed");
        assert_eq!(attrs.data_swipe, Some(SwipePhase::End));
        assert!(attrs.css_vars.contains("--toast-swipe-end-x: 80px;"));
    }
}
