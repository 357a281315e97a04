use dioxus::prelude::*;
use eventeasy_core::NavigationIntent;

use crate::context::get_app_config;
use crate::pages::{Home, LoginAttendee, LoginOrganizer};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home screen
/// - `/login/attendee` - Attendee login (hero "Find Events")
/// - `/login/organizer` - Organizer login (hero "Organize Event")
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login/attendee")]
    LoginAttendee {},
    #[route("/login/organizer")]
    LoginOrganizer {},
}

impl From<NavigationIntent> for Route {
    fn from(intent: NavigationIntent) -> Self {
        match intent {
            NavigationIntent::AttendeeLogin => Route::LoginAttendee {},
            NavigationIntent::OrganizerLogin => Route::LoginOrganizer {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, app configuration, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_app_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
