//! Static content of the home screen.
//!
//! Everything here is defined once and never changes while the process runs.

use crate::icon::Icon;

/// Opaque handle to a bundled image.
///
/// The core cycles through handles by index; resolving, decoding and caching
/// the underlying file is the host's job.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct AssetRef(&'static str);

impl AssetRef {
    pub const fn new(file_name: &'static str) -> Self {
        Self(file_name)
    }

    pub fn file_name(self) -> &'static str {
        self.0
    }
}

/// Hero backgrounds, in rotation order.
pub const HERO_IMAGES: [AssetRef; 3] = [
    AssetRef::new("bg_1.jpg"),
    AssetRef::new("bg_2.webp"),
    AssetRef::new("bg_3.jpg"),
];

pub const BRAND_NAME: &str = "Event Easy";
pub const HERO_TITLE: &str = "Discover Amazing Events Near You";
pub const HERO_SUBTITLE: &str = "Event Easy connects you with the best concerts, workshops, sports games, and more in your area.";
pub const CTA_TITLE: &str = "Ready to Experience the Difference?";
pub const CTA_SUBTITLE: &str = "Join thousands of event organizers and attendees using Event Easy";
pub const CTA_BUTTON: &str = "Get Started Today";
pub const SEARCH_PLACEHOLDER: &str = "Search events...";

/// A selling point shown in the feature grid
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Bolt,
        title: "Quick Discovery",
        description: "Find events tailored to your interests in seconds with our smart recommendation engine.",
    },
    Feature {
        icon: Icon::Bell,
        title: "Real-Time Updates",
        description: "Get instant notifications about event changes, cancellations, or new tickets available.",
    },
    Feature {
        icon: Icon::MapMarker,
        title: "Location-Based",
        description: "See only events near you or search any location with our interactive maps.",
    },
    Feature {
        icon: Icon::Users,
        title: "Social Features",
        description: "See which friends are going, share events, and connect with like-minded people.",
    },
    Feature {
        icon: Icon::Lock,
        title: "Secure Booking",
        description: "100% secure ticketing with verified organizers and fraud protection.",
    },
    Feature {
        icon: Icon::Star,
        title: "Ratings & Reviews",
        description: "Make informed decisions with authentic attendee feedback.",
    },
];

/// One step of the "How It Works" walkthrough
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "Create Your Profile",
        description: "Tell us your interests and preferences to get personalized recommendations.",
    },
    Step {
        title: "Browse Events",
        description: "Explore thousands of events near you or search by category, date, or location.",
    },
    Step {
        title: "Book Tickets",
        description: "Secure your spot with our easy checkout process and mobile tickets.",
    },
];

/// A sample event card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EventListing {
    pub image: AssetRef,
    pub date: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    /// Price in dollars, already formatted with two decimals
    pub price: &'static str,
}

impl EventListing {
    /// Label shown under the event title, e.g. "From $49.99"
    pub fn price_label(&self) -> String {
        format!("From ${}", self.price)
    }
}

pub const EVENTS: [EventListing; 3] = [
    EventListing {
        image: HERO_IMAGES[0],
        date: "June 15, 2025",
        title: "Summer Music Festival",
        location: "Central Park, New York",
        price: "49.99",
    },
    EventListing {
        image: HERO_IMAGES[1],
        date: "June 22, 2025",
        title: "Tech Conference 2025",
        location: "Convention Center, San Francisco",
        price: "199.99",
    },
    EventListing {
        image: HERO_IMAGES[2],
        date: "July 5, 2025",
        title: "Food & Wine Expo",
        location: "Downtown, Chicago",
        price: "29.99",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    /// The quote wrapped in double quotes
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.quote)
    }
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Event Easy has completely changed how I find things to do. The personalized recommendations are spot on!",
        name: "Sarah J.",
        role: "Music Enthusiast",
    },
    Testimonial {
        quote: "As an event organizer, Event Easy has helped me reach the right audience. Ticket sales increased by 40%!",
        name: "Michael T.",
        role: "Event Organizer",
    },
];

/// A page section the mobile menu can jump to
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct SectionLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl SectionLink {
    /// Element id targeted by the anchor (without the leading `#`)
    pub fn element_id(&self) -> &'static str {
        self.anchor.trim_start_matches('#')
    }
}

pub const MENU_LINKS: [SectionLink; 4] = [
    SectionLink { label: "Features", anchor: "#features" },
    SectionLink { label: "Events", anchor: "#events" },
    SectionLink { label: "How It Works", anchor: "#how-it-works" },
    SectionLink { label: "Testimonials", anchor: "#testimonials" },
];
