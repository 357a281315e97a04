//! Page components for Event Easy.

mod home;
mod login;

pub use home::Home;
pub use login::{LoginAttendee, LoginOrganizer};
