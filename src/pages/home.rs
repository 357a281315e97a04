//! Home screen - the landing page of Event Easy.
//!
//! Owns the screen state (theme, hero background) and the hero rotator.
//! Children receive the theme by value and a callback to flip it.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use eventeasy_core::{HeroRotator, HomeScreenState, HERO_IMAGES};

use crate::components::{
    CallToAction, FeatureGrid, Footer, Hero, HowItWorks, Navbar, PopularEvents, Testimonials,
};
use crate::context::use_app_config;

/// Home screen component.
#[component]
pub fn Home() -> Element {
    let config = use_app_config();
    let mut screen = use_signal(HomeScreenState::new);

    // The rotator lives exactly as long as this screen
    let rotator = use_hook(|| {
        let rotator = match HeroRotator::start(HERO_IMAGES.len(), config.rotation_period) {
            Ok(rotator) => Some(rotator),
            Err(e) => {
                tracing::error!(error = %e, "Failed to start hero rotator");
                None
            }
        };
        Rc::new(RefCell::new(rotator))
    });

    // Mirror every published index into the screen state
    use_hook({
        let rotator = rotator.clone();
        move || {
            let receiver = rotator.borrow().as_ref().map(HeroRotator::subscribe);
            if let Some(mut index) = receiver {
                spawn(async move {
                    while index.changed().await.is_ok() {
                        let value = *index.borrow_and_update();
                        screen.with_mut(|s| s.set_background_index(value));
                    }
                });
            }
        }
    });

    use_drop(move || {
        if let Some(rotator) = rotator.borrow_mut().as_mut() {
            rotator.cancel();
        }
    });

    let state = screen();
    let theme = state.theme();
    let theme_class = theme.class();
    let palette = state.palette();
    let theme_vars = palette.css_variables();

    rsx! {
        div {
            class: "screen {theme_class}",
            style: "{theme_vars}",
            "data-status-bar": palette.status_bar.as_str(),

            // The navbar stays put while the content scrolls
            Navbar {
                theme: theme,
                on_toggle_theme: move |_| screen.with_mut(|s| s.toggle_dark_mode()),
            }

            main { class: "screen-scroll",
                Hero { image: state.hero_image() }
                FeatureGrid {}
                HowItWorks {}
                PopularEvents {}
                Testimonials {}
                CallToAction {}
                Footer { theme: theme }
            }
        }
    }
}
