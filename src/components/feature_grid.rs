//! Feature grid ("Why Choose Event Easy").

use dioxus::prelude::*;
use eventeasy_core::FEATURES;
use eventeasy_ui::IconGlyph;

#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        section { id: "features",
            h2 { class: "section-title", "Why Choose Event Easy" }
            div { class: "card-grid",
                for feature in FEATURES {
                    div { key: "{feature.title}", class: "feature-card",
                        IconGlyph { icon: feature.icon, size: 28, color: "var(--accent)".to_string() }
                        h3 { class: "feature-title", "{feature.title}" }
                        p { class: "feature-desc", "{feature.description}" }
                    }
                }
            }
        }
    }
}
