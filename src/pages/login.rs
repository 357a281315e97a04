//! Login destinations reached from the hero buttons.
//!
//! Authentication is out of scope for this app; these screens only confirm
//! the navigation intent and lead back home.

use dioxus::prelude::*;
use eventeasy_core::NavigationIntent;

use crate::app::Route;

#[component]
pub fn LoginAttendee() -> Element {
    rsx! {
        LoginPlaceholder { intent: NavigationIntent::AttendeeLogin, title: "Attendee Login" }
    }
}

#[component]
pub fn LoginOrganizer() -> Element {
    rsx! {
        LoginPlaceholder { intent: NavigationIntent::OrganizerLogin, title: "Organizer Login" }
    }
}

#[component]
fn LoginPlaceholder(intent: NavigationIntent, title: &'static str) -> Element {
    rsx! {
        main { class: "login-screen", "data-screen": intent.screen_name(),
            h1 { class: "login-title", "{title}" }
            Link { to: Route::Home {}, class: "login-back", "Back to Event Easy" }
        }
    }
}
