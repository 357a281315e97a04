//! The two palette tables and their CSS projection.

use super::colors::*;
use crate::icon::Icon;

/// Status bar content style for the host platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusBarStyle {
    /// Light glyphs, for dark backgrounds
    LightContent,
    /// Dark glyphs, for light backgrounds
    DarkContent,
}

impl StatusBarStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusBarStyle::LightContent => "light-content",
            StatusBarStyle::DarkContent => "dark-content",
        }
    }
}

/// One color per themed surface of the screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    pub status_bar: StatusBarStyle,
    pub toggle_icon: Icon,

    // Screen
    pub background: &'static str,
    pub hero_background: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub find_button: &'static str,
    pub find_button_text: &'static str,
    pub organize_button: &'static str,
    pub organize_button_text: &'static str,
    pub section_title: &'static str,

    // Cards
    pub feature_card: &'static str,
    pub feature_title: &'static str,
    pub feature_text: &'static str,
    pub step_card: &'static str,
    pub step_circle: &'static str,
    pub step_number: &'static str,
    pub step_title: &'static str,
    pub step_text: &'static str,
    pub event_card: &'static str,
    pub event_accent: &'static str,
    pub event_title: &'static str,
    pub event_location: &'static str,
    pub event_price: &'static str,
    pub event_button: &'static str,
    pub event_button_text: &'static str,
    pub testimonial_card: &'static str,
    pub testimonial_quote: &'static str,
    pub testimonial_name: &'static str,
    pub testimonial_role: &'static str,

    // Call to action
    pub cta_background: &'static str,
    pub cta_title: &'static str,
    pub cta_subtitle: &'static str,
    pub cta_button: &'static str,
    pub cta_button_text: &'static str,

    // Navbar
    pub navbar_background: &'static str,
    pub toggle_icon_color: &'static str,
    pub search_icon_color: &'static str,
    pub menu_icon_color: &'static str,
    pub search_text: &'static str,
    pub menu_sheet: &'static str,
}

pub const LIGHT: Palette = Palette {
    status_bar: StatusBarStyle::DarkContent,
    toggle_icon: Icon::Moon,

    background: WHITE,
    hero_background: WHITE,
    hero_title: WHITE,
    hero_subtitle: PERIWINKLE,
    find_button: WHITE,
    find_button_text: ORANGE,
    organize_button: ORANGE,
    organize_button_text: WHITE,
    section_title: ORANGE,

    feature_card: MIST,
    feature_title: ORANGE,
    feature_text: SLATE_700,
    step_card: CREAM,
    step_circle: ORANGE,
    step_number: WHITE,
    step_title: ORANGE,
    step_text: SLATE_700,
    event_card: WHITE,
    event_accent: ORANGE,
    event_title: SLATE_850,
    event_location: GRAY_500,
    event_price: EMERALD,
    event_button: ORANGE,
    event_button_text: WHITE,
    testimonial_card: MIST,
    testimonial_quote: SLATE_700,
    testimonial_name: ORANGE,
    testimonial_role: GRAY_500,

    cta_background: ORANGE,
    cta_title: WHITE,
    cta_subtitle: CREAM,
    cta_button: WHITE,
    cta_button_text: BLACK,

    navbar_background: WHITE,
    toggle_icon_color: GRAY_500,
    search_icon_color: ORANGE,
    menu_icon_color: SLATE_700,
    search_text: SLATE_700,
    menu_sheet: WHITE,
};

pub const DARK: Palette = Palette {
    status_bar: StatusBarStyle::LightContent,
    toggle_icon: Icon::Sun,

    background: SLATE_950,
    hero_background: SLATE_900,
    hero_title: WHITE,
    hero_subtitle: WHITE,
    find_button: SLATE_700,
    find_button_text: WHITE,
    organize_button: AMBER,
    organize_button_text: SLATE_900,
    section_title: AMBER,

    feature_card: SLATE_700,
    feature_title: AMBER,
    feature_text: GRAY_200,
    step_card: SLATE_700,
    step_circle: AMBER,
    step_number: SLATE_900,
    step_title: AMBER,
    step_text: GRAY_200,
    event_card: SLATE_850,
    event_accent: AMBER,
    event_title: AMBER,
    event_location: GRAY_300,
    event_price: EMERALD_LIGHT,
    event_button: AMBER,
    event_button_text: SLATE_900,
    testimonial_card: SLATE_700,
    testimonial_quote: GRAY_200,
    testimonial_name: AMBER,
    testimonial_role: GRAY_300,

    cta_background: ORANGE,
    cta_title: SLATE_900,
    cta_subtitle: SLATE_900,
    cta_button: SLATE_900,
    cta_button_text: ORANGE,

    navbar_background: SLATE_900,
    toggle_icon_color: ORANGE,
    search_icon_color: GRAY_300,
    menu_icon_color: GRAY_300,
    search_text: GRAY_300,
    menu_sheet: SLATE_950,
};

impl Palette {
    /// Color surfaces as (custom property, value) pairs.
    pub fn entries(&self) -> [(&'static str, &'static str); 40] {
        [
            ("--bg", self.background),
            ("--hero-bg", self.hero_background),
            ("--hero-title", self.hero_title),
            ("--hero-subtitle", self.hero_subtitle),
            ("--find-btn", self.find_button),
            ("--find-btn-text", self.find_button_text),
            ("--organize-btn", self.organize_button),
            ("--organize-btn-text", self.organize_button_text),
            ("--section-title", self.section_title),
            ("--feature-card", self.feature_card),
            ("--feature-title", self.feature_title),
            ("--feature-text", self.feature_text),
            ("--step-card", self.step_card),
            ("--step-circle", self.step_circle),
            ("--step-num", self.step_number),
            ("--step-title", self.step_title),
            ("--step-text", self.step_text),
            ("--event-card", self.event_card),
            ("--event-accent", self.event_accent),
            ("--event-title", self.event_title),
            ("--event-location", self.event_location),
            ("--event-price", self.event_price),
            ("--event-btn", self.event_button),
            ("--event-btn-text", self.event_button_text),
            ("--testimonial-card", self.testimonial_card),
            ("--testimonial-quote", self.testimonial_quote),
            ("--testimonial-name", self.testimonial_name),
            ("--testimonial-role", self.testimonial_role),
            ("--cta-bg", self.cta_background),
            ("--cta-title", self.cta_title),
            ("--cta-subtitle", self.cta_subtitle),
            ("--cta-btn", self.cta_button),
            ("--cta-btn-text", self.cta_button_text),
            ("--navbar-bg", self.navbar_background),
            ("--toggle-icon", self.toggle_icon_color),
            ("--search-icon", self.search_icon_color),
            ("--menu-icon", self.menu_icon_color),
            ("--search-text", self.search_text),
            ("--menu-sheet", self.menu_sheet),
            ("--scrim", SCRIM),
        ]
    }

    /// Renders the palette as an inline `style` declaration list.
    pub fn css_variables(&self) -> String {
        self.entries()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
