use dioxus::prelude::*;
use eventeasy_core::TESTIMONIALS;

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { id: "testimonials",
            h2 { class: "section-title", "What Our Users Say" }
            div { class: "card-grid",
                for testimonial in TESTIMONIALS {
                    blockquote { key: "{testimonial.name}", class: "testimonial-card",
                        p { class: "testimonial-quote", "{testimonial.quoted()}" }
                        span { class: "testimonial-name", "{testimonial.name}" }
                        span { class: "testimonial-role", "{testimonial.role}" }
                    }
                }
            }
        }
    }
}
