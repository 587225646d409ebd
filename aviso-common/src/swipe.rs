//! Swipe-to-dismiss gesture tracking
//!
//! Fed raw pointer coordinates by the surface. Movement is clamped to the one
//! configured direction; releasing past the threshold ends the swipe and
//! dismisses, releasing before it cancels and snaps back.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::surface::SwipeGestureSource;

/// Default distance in pixels a swipe must travel to dismiss
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Movement needed before a touch counts as a swipe
const TOUCH_MOVE_START_BUFFER: f64 = 10.0;
/// Movement needed before a mouse/pen drag counts as a swipe
const POINTER_MOVE_START_BUFFER: f64 = 2.0;

/// The single direction a toast can be swiped away in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl SwipeDirection {
    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }

    /// Keep only the component of a raw delta that points in this direction.
    fn clamp(self, dx: f64, dy: f64) -> SwipeOffset {
        match self {
            SwipeDirection::Right => SwipeOffset::new(dx.max(0.0), 0.0),
            SwipeDirection::Left => SwipeOffset::new(dx.min(0.0), 0.0),
            SwipeDirection::Down => SwipeOffset::new(0.0, dy.max(0.0)),
            SwipeDirection::Up => SwipeOffset::new(0.0, dy.min(0.0)),
        }
    }

    /// Whether `delta` travels further than `threshold` along this direction's axis
    fn covers(self, delta: SwipeOffset, threshold: f64) -> bool {
        let abs_x = delta.x.abs();
        let abs_y = delta.y.abs();
        let mostly_horizontal = abs_x > abs_y;
        if self.is_horizontal() {
            mostly_horizontal && abs_x > threshold
        } else {
            !mostly_horizontal && abs_y > threshold
        }
    }
}

impl FromStr for SwipeDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(SwipeDirection::Up),
            "down" => Ok(SwipeDirection::Down),
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            other => Err(ConfigError::UnknownSwipeDirection(other.to_string())),
        }
    }
}

/// Kind of pointer that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parse the DOM `pointerType` string. Unknown types are treated as a mouse.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    fn move_start_buffer(self) -> f64 {
        match self {
            PointerKind::Touch => TOUCH_MOVE_START_BUFFER,
            PointerKind::Mouse | PointerKind::Pen => POINTER_MOVE_START_BUFFER,
        }
    }
}

/// Status of the current or last swipe, exposed as `data-swipe`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    Move,
    Cancel,
    End,
}

impl SwipePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SwipePhase::Move => "move",
            SwipePhase::Cancel => "cancel",
            SwipePhase::End => "end",
        }
    }
}

/// Pixel offset of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeOffset {
    pub x: f64,
    pub y: f64,
}

impl SwipeOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a pointer release means for the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeRelease {
    /// Past the threshold: the toast should close
    Dismiss,
    /// Swipe started but fell short
    Cancel,
    /// No swipe was in progress
    Ignored,
}

/// Tracks one pointer gesture at a time on a toast surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    direction: SwipeDirection,
    threshold: f64,
    start: Option<(f64, f64)>,
    delta: Option<SwipeOffset>,
    phase: Option<SwipePhase>,
    end_offset: Option<SwipeOffset>,
}

impl SwipeTracker {
    pub fn new(direction: SwipeDirection, threshold: f64) -> Self {
        Self {
            direction,
            threshold,
            start: None,
            delta: None,
            phase: None,
            end_offset: None,
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.delta = None;
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, kind: PointerKind) {
        let Some((start_x, start_y)) = self.start else {
            return;
        };
        let dx = x - start_x;
        let dy = y - start_y;
        let delta = self.direction.clamp(dx, dy);
        let buffer = kind.move_start_buffer();

        if self.delta.is_some() || self.direction.covers(delta, buffer) {
            self.delta = Some(delta);
            self.phase = Some(SwipePhase::Move);
            self.end_offset = None;
        } else if dx.abs() > buffer || dy.abs() > buffer {
            // Moved off-axis first: this gesture is not a swipe
            self.start = None;
        }
    }

    pub fn pointer_up(&mut self) -> SwipeRelease {
        self.start = None;
        let Some(delta) = self.delta.take() else {
            return SwipeRelease::Ignored;
        };

        if self.direction.covers(delta, self.threshold) {
            self.phase = Some(SwipePhase::End);
            self.end_offset = Some(delta);
            SwipeRelease::Dismiss
        } else {
            self.phase = Some(SwipePhase::Cancel);
            SwipeRelease::Cancel
        }
    }

    /// Forget the last gesture, e.g. when the toast reopens.
    pub fn reset(&mut self) {
        self.start = None;
        self.delta = None;
        self.phase = None;
        self.end_offset = None;
    }
}

impl SwipeGestureSource for SwipeTracker {
    fn direction(&self) -> SwipeDirection {
        self.direction
    }

    fn phase(&self) -> Option<SwipePhase> {
        self.phase
    }

    fn move_offset(&self) -> Option<SwipeOffset> {
        self.delta
    }

    fn end_offset(&self) -> Option<SwipeOffset> {
        self.end_offset
    }
}
