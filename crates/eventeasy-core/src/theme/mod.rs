//! Theme selection for the home screen.
//!
//! Every themed surface reads one [`Palette`], looked up once per render from
//! the current [`ThemeMode`]. Components never branch on the mode themselves;
//! the shell turns the palette into CSS custom properties on the screen root.

pub mod colors;
mod palette;

pub use palette::{Palette, StatusBarStyle, DARK, LIGHT};

/// The two presentation variants of the screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Flips the mode in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Looks up the palette for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// CSS class applied to the screen root
    pub fn class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// Label of the menu entry that switches to the other mode
    pub fn switch_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn toggle_flips_mode() {
        let mut mode = ThemeMode::Light;
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.palette(), &DARK);
    }

    #[test]
    fn double_toggle_restores_every_surface() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            let before = start.palette().clone();
            let mut mode = start;
            mode.toggle();
            assert_ne!(mode.palette(), &before);
            mode.toggle();
            assert_eq!(mode, start);
            assert_eq!(mode.palette(), &before);
            assert_eq!(mode.palette().css_variables(), before.css_variables());
        }
    }

    #[test]
    fn switch_label_names_the_other_mode() {
        assert_eq!(ThemeMode::Light.switch_label(), "Dark Mode");
        assert_eq!(ThemeMode::Dark.switch_label(), "Light Mode");
    }
}
