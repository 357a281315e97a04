//! Color constants for the Event Easy palette.
//!
//! Warm orange accents on a light surface, amber accents on slate in dark mode.

// === BRAND ===
pub const ORANGE: &str = "#ea580c";
pub const AMBER: &str = "#fbbf24";
pub const PINK: &str = "#ec4899";

// === LIGHT SURFACES ===
pub const WHITE: &str = "#fff";
pub const BLACK: &str = "#000";
pub const CREAM: &str = "#fff7ed";
pub const MIST: &str = "#f3f4f6";
pub const PERIWINKLE: &str = "#e0e7ff";

// === SLATE (Dark surfaces) ===
pub const SLATE_950: &str = "#111827";
pub const SLATE_900: &str = "#1f2937";
pub const SLATE_850: &str = "#23272f";
pub const SLATE_700: &str = "#374151";

// === TEXT GRAYS ===
pub const GRAY_500: &str = "#6b7280";
pub const GRAY_300: &str = "#d1d5db";
pub const GRAY_200: &str = "#e5e7eb";

// === PRICE ===
pub const EMERALD: &str = "#059669";
pub const EMERALD_LIGHT: &str = "#34d399";

// === OVERLAYS ===
pub const SCRIM: &str = "rgba(0, 0, 0, 0.4)";
