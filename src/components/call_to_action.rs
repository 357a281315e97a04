//! Closing call-to-action banner.

use dioxus::prelude::*;
use eventeasy_core::catalog::{CTA_BUTTON, CTA_SUBTITLE, CTA_TITLE};
use eventeasy_ui::{Button, ButtonVariant};

#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section { class: "cta",
            h2 { class: "cta-title", "{CTA_TITLE}" }
            p { class: "cta-subtitle", "{CTA_SUBTITLE}" }
            Button { variant: ButtonVariant::CallToAction, "{CTA_BUTTON}" }
        }
    }
}
