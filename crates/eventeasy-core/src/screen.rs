//! Home screen state.
//!
//! The screen is the single owner of the theme and the hero background
//! index. Children get the theme by value and a callback to flip it; nothing
//! else is shared.

use crate::catalog::{AssetRef, HERO_IMAGES};
use crate::theme::{Palette, ThemeMode};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HomeScreenState {
    theme: ThemeMode,
    background: usize,
}

impl HomeScreenState {
    /// Light theme, first hero image
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
        tracing::debug!(theme = ?self.theme, "Theme toggled");
    }

    pub fn background_index(&self) -> usize {
        self.background
    }

    /// Records the index published by the hero rotator, wrapped into range.
    pub fn set_background_index(&mut self, index: usize) {
        self.background = index % HERO_IMAGES.len();
    }

    pub fn hero_image(&self) -> AssetRef {
        HERO_IMAGES[self.background]
    }
}
