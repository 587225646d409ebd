//! aviso-ui - Toast components for Dioxus
//!
//! The toast building blocks (provider, viewport, root and its slots) plus
//! `NotificationToast`, which reveals itself shortly after its trigger
//! changes.

pub mod components;
pub mod timer;
pub mod wasm_utils;

pub use components::*;
