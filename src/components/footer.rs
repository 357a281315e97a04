//! Footer Component
//!
//! Static brand blurb, three link columns and the copyright line. The footer
//! receives the screen theme but keeps the same slate look in both modes.

use chrono::Datelike;
use dioxus::prelude::*;
use eventeasy_core::catalog::BRAND_NAME;
use eventeasy_core::footer::{copyright, FOOTER_TAGLINE};
use eventeasy_core::{FooterLink, Icon, ThemeMode, FOOTER_SECTIONS};
use eventeasy_ui::IconGlyph;

use crate::context::WebviewLinkOpener;

#[component]
pub fn Footer(theme: ThemeMode) -> Element {
    let year = chrono::Local::now().year();
    let theme_class = theme.class();

    rsx! {
        footer { class: "footer footer-{theme_class}",
            div { class: "footer-sections",
                div { class: "footer-section",
                    div { class: "footer-brand",
                        IconGlyph { icon: Icon::Calendar, size: 22, color: "var(--brand-pink)".to_string() }
                        span { class: "footer-title", "{BRAND_NAME}" }
                    }
                    p { class: "footer-text", "{FOOTER_TAGLINE}" }
                }

                for section in FOOTER_SECTIONS {
                    div { key: "{section.title}", class: "footer-section",
                        h3 { class: "footer-title", "{section.title}" }
                        for link in section.links {
                            FooterLinkItem { key: "{link.text}", link: *link }
                        }
                    }
                }
            }

            div { class: "footer-copyright", "{copyright(year)}" }
        }
    }
}

/// A single footer entry; inert unless it carries a URL
#[component]
fn FooterLinkItem(link: FooterLink) -> Element {
    let on_tap = move |_| {
        if let Err(e) = link.activate(&WebviewLinkOpener) {
            tracing::warn!(error = %e, text = link.text, "Footer link could not be opened");
        }
    };

    rsx! {
        button {
            class: if link.url.is_some() { "footer-link" } else { "footer-link inert" },
            r#type: "button",
            onclick: on_tap,
            "{link.text}"
        }
    }
}
