//! Icon identifiers used across the screen.
//!
//! The core only names icons; drawing them is up to the UI layer.

/// Icon glyphs referenced by the catalogs and the navbar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Icon {
    Calendar,
    Moon,
    Sun,
    Search,
    Bars,
    Close,
    Bolt,
    Bell,
    MapMarker,
    MapPin,
    Users,
    Lock,
    Star,
}

impl Icon {
    /// Icon-font name of the glyph
    pub fn name(self) -> &'static str {
        match self {
            Icon::Calendar => "calendar",
            Icon::Moon => "moon-o",
            Icon::Sun => "sun-o",
            Icon::Search => "search",
            Icon::Bars => "bars",
            Icon::Close => "times",
            Icon::Bolt => "bolt",
            Icon::Bell => "bell",
            Icon::MapMarker => "map-marker",
            Icon::MapPin => "map-pin",
            Icon::Users => "users",
            Icon::Lock => "lock",
            Icon::Star => "star",
        }
    }
}
