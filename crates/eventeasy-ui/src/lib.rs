//! Event Easy UI Components
//!
//! Dioxus building blocks shared by the Event Easy screens.
//!
//! Components take their colors from CSS custom properties set on the screen
//! root (see `eventeasy_core::theme::Palette::css_variables`), so none of them
//! needs to know whether the screen is in light or dark mode.

pub mod components;

pub use components::*;
