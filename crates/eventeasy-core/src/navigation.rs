//! Navigation intents issued by the home screen.
//!
//! The screen never routes by itself. It names a destination and hands it to
//! whatever [`Navigator`] the host provides.

use std::fmt;

/// A named request to move to another screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NavigationIntent {
    /// "Find Events" in the hero
    AttendeeLogin,
    /// "Organize Event" in the hero
    OrganizerLogin,
}

impl NavigationIntent {
    /// Name of the destination screen
    pub fn screen_name(self) -> &'static str {
        match self {
            NavigationIntent::AttendeeLogin => "LoginAttendee",
            NavigationIntent::OrganizerLogin => "LoginOrganizer",
        }
    }

    /// Caption of the hero button that issues this intent
    pub fn button_label(self) -> &'static str {
        match self {
            NavigationIntent::AttendeeLogin => "Find Events",
            NavigationIntent::OrganizerLogin => "Organize Event",
        }
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.screen_name())
    }
}

/// Fulfils navigation intents.
pub trait Navigator {
    fn navigate(&self, intent: NavigationIntent);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, intent: NavigationIntent) {
        (**self).navigate(intent)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<NavigationIntent>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, intent: NavigationIntent) {
            self.visited.borrow_mut().push(intent);
        }
    }

    #[test]
    fn intents_map_to_screen_names() {
        assert_eq!(NavigationIntent::AttendeeLogin.screen_name(), "LoginAttendee");
        assert_eq!(NavigationIntent::OrganizerLogin.to_string(), "LoginOrganizer");
    }

    #[test]
    fn navigator_receives_intents_in_order() {
        let nav = RecordingNavigator::default();
        let by_ref = &nav;
        by_ref.navigate(NavigationIntent::OrganizerLogin);
        nav.navigate(NavigationIntent::AttendeeLogin);
        assert_eq!(
            *nav.visited.borrow(),
            vec![NavigationIntent::OrganizerLogin, NavigationIntent::AttendeeLogin]
        );
    }
}
