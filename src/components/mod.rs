//! UI Components for Event Easy.
//!
//! The home screen's sections, top to bottom.

mod call_to_action;
mod event_card;
mod feature_grid;
mod footer;
mod hero;
mod navbar;
mod steps;
mod testimonials;

pub use call_to_action::CallToAction;
pub use event_card::{EventCard, PopularEvents};
pub use feature_grid::FeatureGrid;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use steps::HowItWorks;
pub use testimonials::Testimonials;
