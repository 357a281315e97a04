//! Event Card Components
//!
//! Sample listings under "Popular Events Near You". Booking is not wired to
//! anything yet; the button is display only.

use dioxus::prelude::*;
use eventeasy_core::{EventListing, Icon, EVENTS};
use eventeasy_ui::{Button, ButtonVariant, IconGlyph};

use crate::context::use_app_config;

#[component]
pub fn PopularEvents() -> Element {
    rsx! {
        section { id: "events",
            h2 { class: "section-title", "Popular Events Near You" }
            div { class: "card-grid",
                for event in EVENTS {
                    EventCard { key: "{event.title}", event: event }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EventCardProps {
    pub event: EventListing,
}

/// One event: thumbnail, date, title, location, price and booking button
#[component]
pub fn EventCard(props: EventCardProps) -> Element {
    let config = use_app_config();
    let event = props.event;
    let image_url = config.asset_url(event.image);

    rsx! {
        article { class: "event-card",
            img { class: "event-image", src: "{image_url}", alt: "{event.title}" }
            div { class: "event-content",
                div { class: "event-row",
                    IconGlyph { icon: Icon::Calendar, size: 16, color: "var(--event-accent)".to_string() }
                    span { class: "event-date", "{event.date}" }
                }
                h3 { class: "event-title", "{event.title}" }
                div { class: "event-row",
                    IconGlyph { icon: Icon::MapPin, size: 16, color: "var(--event-accent)".to_string() }
                    span { class: "event-location", "{event.location}" }
                }
                p { class: "event-price", "{event.price_label()}" }
                Button { variant: ButtonVariant::Card, "Book Now" }
            }
        }
    }
}
