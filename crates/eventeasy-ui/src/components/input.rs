//! Search field
//!
//! Rounded input shown under the navbar row. It captures text only; nothing
//! is submitted or filtered.

use dioxus::prelude::*;
use eventeasy_core::catalog::SEARCH_PLACEHOLDER;
use eventeasy_core::Icon;

use super::{CloseButton, IconGlyph};

#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called with the full field contents on every keystroke
    pub oninput: EventHandler<String>,
    /// Handler for the close button
    pub onclose: EventHandler<()>,
    /// Placeholder text
    #[props(default = SEARCH_PLACEHOLDER.to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-bar",
            span { class: "search-bar-icon",
                IconGlyph { icon: Icon::Search, size: 18, color: "var(--accent)".to_string() }
            }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                autofocus: true,
                oninput: move |e| props.oninput.call(e.value()),
            }
            CloseButton { onclick: move |_| props.onclose.call(()) }
        }
    }
}
