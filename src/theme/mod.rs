//! Styling for the Event Easy shell.
//!
//! Colors come from the palette table in `eventeasy_core::theme`; this module
//! only carries layout and the rules that read the palette's custom
//! properties.

mod styles;

pub use styles::GLOBAL_STYLES;
