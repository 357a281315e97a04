//! Reusable UI components
//!
//! - Pill buttons for the hero, event cards and call to action
//! - Line icons for every `eventeasy_core::Icon`
//! - The navbar search field

mod button;
mod icon;
mod input;

pub use button::*;
pub use icon::*;
pub use input::*;
