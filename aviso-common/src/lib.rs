//! aviso-common - Pure toast logic shared by the UI and the native driver
//!
//! Nothing in here touches the DOM or a UI runtime: the reveal state machine,
//! swipe tracking, the auto-dismiss countdown, the style table and pt-BR date
//! formatting are plain data structures driven by the caller.

pub mod config;
pub mod content;
pub mod countdown;
pub mod datefmt;
#[cfg(not(target_arch = "wasm32"))]
pub mod driver;
pub mod machine;
pub mod style;
pub mod surface;
pub mod swipe;

pub use config::{ConfigError, TimestampPolicy, ToastConfig, ViewportCorner};
pub use content::ToastContent;
pub use countdown::DismissCountdown;
pub use machine::{
    RevealOutcome, RevealTicket, ScheduledTask, ToastMachine, ToastPhase, ToastState,
    TriggerOutcome,
};
pub use style::{StateKey, StyleError, StyleSet, StyleSheet, StyleState, StyleTarget, VariantKey};
pub use surface::{
    surface_attributes, AccessibleLabelSlot, ActionSlot, DataState, DismissibleSurface,
    SlotError, SurfaceAttributes, SwipeGestureSource,
};
pub use swipe::{PointerKind, SwipeDirection, SwipeOffset, SwipePhase, SwipeRelease, SwipeTracker};
