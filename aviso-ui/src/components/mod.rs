//! Toast components

pub mod button;
pub mod notification_toast;
pub mod provider;
pub mod toast;
pub mod viewport;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use notification_toast::NotificationToast;
pub use provider::{use_toast_settings, ToastContext, ToastProvider, ToastSettings};
pub use toast::{Toast, ToastAction, ToastClose, ToastDescription, ToastTitle};
pub use viewport::{use_viewport_pause, ToastViewport, ViewportPause};
