//! Navigation Bar Component
//!
//! Brand on the left, theme toggle in the middle, search and menu on the
//! right. The search bar drops down under the row; the menu slides up from
//! the bottom over a scrim.

use dioxus::prelude::*;
use eventeasy_core::catalog::BRAND_NAME;
use eventeasy_core::{Icon, MenuEntry, MenuOutcome, NavbarState, ThemeMode};
use eventeasy_ui::{CloseButton, IconButton, IconGlyph, SearchInput};

use crate::context::scroll_to_section;

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Theme of the owning screen
    pub theme: ThemeMode,
    /// Asks the owner to flip the theme
    pub on_toggle_theme: EventHandler<()>,
}

/// Navbar component
///
/// Owns the menu/search visibility flags and the search query.
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let mut nav = use_signal(NavbarState::new);

    let palette = props.theme.palette();
    let on_toggle_theme = props.on_toggle_theme;
    let theme = props.theme;

    let mut select = move |entry: MenuEntry| {
        let outcome = nav.with_mut(|n| n.select(entry));
        match outcome {
            MenuOutcome::None => {}
            MenuOutcome::ToggleTheme => on_toggle_theme.call(()),
            MenuOutcome::ScrollTo(link) => scroll_to_section(link),
        }
    };

    rsx! {
        header { class: "navbar",
            div { class: "navbar-row",
                // Brand
                div { class: "navbar-brand",
                    IconGlyph { icon: Icon::Calendar, size: 24, color: "var(--accent)".to_string() }
                    span { class: "brand-text", "{BRAND_NAME}" }
                }

                // Theme toggle
                div { class: "navbar-center",
                    IconButton {
                        icon: palette.toggle_icon,
                        color: "var(--toggle-icon)".to_string(),
                        aria_label: theme.switch_label().to_string(),
                        onclick: move |_| on_toggle_theme.call(()),
                    }
                }

                // Search and menu
                div { class: "navbar-actions",
                    IconButton {
                        icon: Icon::Search,
                        color: "var(--search-icon)".to_string(),
                        aria_label: "Search".to_string(),
                        onclick: move |_| nav.with_mut(|n| n.toggle_search()),
                    }
                    IconButton {
                        icon: Icon::Bars,
                        size: 24,
                        color: "var(--menu-icon)".to_string(),
                        aria_label: "Menu".to_string(),
                        onclick: move |_| nav.with_mut(|n| n.open_menu()),
                    }
                }
            }

            if nav.read().is_search_open() {
                SearchInput {
                    value: nav.read().query().to_string(),
                    oninput: move |text: String| nav.with_mut(|n| n.set_query(text)),
                    onclose: move |_| nav.with_mut(|n| n.close_search()),
                }
            }

            if nav.read().is_menu_open() {
                div {
                    class: "menu-overlay",
                    onclick: move |_| nav.with_mut(|n| n.close_menu()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Escape {
                            nav.with_mut(|n| n.close_menu());
                        }
                    },

                    div {
                        class: "menu-sheet",
                        "role": "dialog",
                        onclick: move |e: MouseEvent| e.stop_propagation(),

                        div { class: "menu-header",
                            span { class: "brand-text", "Menu" }
                            CloseButton { onclick: move |_| nav.with_mut(|n| n.close_menu()) }
                        }

                        for (entry, label) in MenuEntry::all().map(|e| (e, e.label(theme))) {
                            button {
                                key: "{label}",
                                class: "menu-link",
                                r#type: "button",
                                onclick: move |_| select(entry),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
