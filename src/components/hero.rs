//! Hero Section Component
//!
//! Rotating background image with the headline and the two entry buttons.

use dioxus::prelude::*;
use eventeasy_core::catalog::{HERO_SUBTITLE, HERO_TITLE};
use eventeasy_core::{AssetRef, NavigationIntent, Navigator};
use eventeasy_ui::{Button, ButtonVariant};

use crate::context::{use_app_config, use_route_navigator};

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Background currently selected by the rotator
    pub image: AssetRef,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let config = use_app_config();
    let navigator = use_route_navigator();
    let image_url = config.asset_url(props.image);
    let find_label = NavigationIntent::AttendeeLogin.button_label();
    let organize_label = NavigationIntent::OrganizerLogin.button_label();

    rsx! {
        section { class: "hero",
            img { class: "hero-image", src: "{image_url}", alt: "" }
            div { class: "hero-overlay" }

            div { class: "hero-content",
                h1 { class: "hero-title", "{HERO_TITLE}" }
                p { class: "hero-subtitle", "{HERO_SUBTITLE}" }

                div { class: "hero-buttons",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| navigator.navigate(NavigationIntent::AttendeeLogin),
                        "{find_label}"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| navigator.navigate(NavigationIntent::OrganizerLogin),
                        "{organize_label}"
                    }
                }
            }
        }
    }
}
