//! Event Easy Core Library
//!
//! Screen model for the Event Easy home screen, independent of any UI
//! framework.
//!
//! ## Overview
//!
//! - [`theme`]: two-valued [`ThemeMode`] and the palette table every themed
//!   surface reads from
//! - [`rotator`]: the hero background cycle and its cancellable timer
//! - [`navbar`]: menu/search visibility and the search query
//! - [`screen`]: state owned by the home screen (theme, background index)
//! - [`catalog`] and [`footer`]: static content
//! - [`navigation`] and [`footer::LinkOpener`]: collaborators the host provides
//!
//! ## Quick Start
//!
//! ```ignore
//! use eventeasy_core::{HeroRotator, HomeScreenState, HERO_IMAGES, ROTATION_PERIOD};
//!
//! let mut screen = HomeScreenState::new();
//! let rotator = HeroRotator::start(HERO_IMAGES.len(), ROTATION_PERIOD)?;
//! let mut index = rotator.subscribe();
//! while index.changed().await.is_ok() {
//!     screen.set_background_index(*index.borrow());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod footer;
pub mod icon;
pub mod logging;
pub mod navbar;
pub mod navigation;
pub mod rotator;
pub mod screen;
pub mod theme;

// Re-exports
pub use catalog::{
    AssetRef, EventListing, Feature, SectionLink, Step, Testimonial, EVENTS, FEATURES,
    HERO_IMAGES, MENU_LINKS, STEPS, TESTIMONIALS,
};
pub use error::{Error, Result};
pub use footer::{FooterLink, FooterSection, LinkOpener, FOOTER_SECTIONS};
pub use icon::Icon;
pub use navbar::{MenuEntry, MenuOutcome, NavbarState, NavbarVisibility};
pub use navigation::{NavigationIntent, Navigator};
pub use rotator::{BackgroundCycle, HeroRotator, ROTATION_PERIOD};
pub use screen::HomeScreenState;
pub use theme::{Palette, StatusBarStyle, ThemeMode};
