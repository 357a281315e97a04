//! "How It Works" steps, numbered from 1.

use dioxus::prelude::*;
use eventeasy_core::STEPS;

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { id: "how-it-works",
            h2 { class: "section-title", "How It Works" }
            div { class: "card-grid",
                for (step, number) in STEPS.iter().zip(1..) {
                    div { key: "{step.title}", class: "step-card",
                        div { class: "step-circle",
                            span { class: "step-num", "{number}" }
                        }
                        h3 { class: "step-title", "{step.title}" }
                        p { class: "step-desc", "{step.description}" }
                    }
                }
            }
        }
    }
}
