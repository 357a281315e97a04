//! Button Components
//!
//! Pill buttons in the styles the home screen uses:
//! - Primary: filled accent ("Organize Event")
//! - Secondary: light pill with accent text ("Find Events")
//! - Card: full-width button at the bottom of an event card ("Book Now")
//! - CallToAction: inverse pill on the orange banner ("Get Started Today")

use dioxus::prelude::*;
use eventeasy_core::Icon;

use super::IconGlyph;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Card,
    CallToAction,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Card => "btn-card",
            ButtonVariant::CallToAction => "btn-cta",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled pill button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         onclick: move |_| navigator.navigate(NavigationIntent::AttendeeLogin),
///         "Find Events"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (theme toggle, search, menu, close)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub icon: Icon,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Icon color, usually a `var(--...)` reference
    #[props(default = "currentColor".to_string())]
    pub color: String,
    #[props(default = 22)]
    pub size: u32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            IconGlyph { icon: props.icon, size: props.size, color: props.color.clone() }
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            icon: Icon::Close,
            onclick: onclick,
            aria_label: "Close".to_string(),
            color: "var(--accent)".to_string(),
            class: "close-btn".to_string(),
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
