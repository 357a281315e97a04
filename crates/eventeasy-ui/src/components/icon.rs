//! Line icons
//!
//! Lucide outlines drawn inline as SVG, one per `eventeasy_core::Icon`.

use dioxus::prelude::*;
use eventeasy_core::Icon;

#[derive(Clone, PartialEq, Props)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[props(default = 24)]
    pub size: u32,
    /// Stroke color; any CSS color or `var(--...)` reference
    #[props(default = "currentColor".to_string())]
    pub color: String,
}

/// Inline SVG icon
#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    rsx! {
        svg {
            class: "icon icon-{props.icon.name()}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            style: "color: {props.color};",
            "aria-hidden": "true",
            {render_icon_shapes(props.icon)}
        }
    }
}

fn render_icon_shapes(icon: Icon) -> Element {
    match icon {
        Icon::Calendar => rsx! {
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            path { d: "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z" }
            path { d: "M3 10h18" }
        },
        Icon::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        Icon::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        },
        Icon::Search => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        Icon::Bars => rsx! {
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        },
        Icon::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        Icon::Bolt => rsx! {
            path { d: "M13 2 3 14h9l-1 8 10-12h-9l1-8z" }
        },
        Icon::Bell => rsx! {
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        },
        // Same outline; the catalogs use both names
        Icon::MapMarker | Icon::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        Icon::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        Icon::Lock => rsx! {
            path { d: "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        },
        Icon::Star => rsx! {
            path { d: "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" }
        },
    }
}
