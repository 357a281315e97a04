//! Navbar visibility state.
//!
//! Two independent flags (mobile menu, search bar) plus the search query.
//! Every combination of the flags is legal and either can change regardless
//! of the other. The one coupled transition is choosing "Search" from the
//! open menu, which closes the menu and opens the search bar.

use crate::catalog::{SectionLink, MENU_LINKS};
use crate::theme::ThemeMode;

/// Entries of the slide-up mobile menu, in display order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MenuEntry {
    Section(SectionLink),
    ToggleTheme,
    Search,
}

impl MenuEntry {
    /// All menu entries in display order
    pub fn all() -> impl Iterator<Item = MenuEntry> {
        MENU_LINKS
            .into_iter()
            .map(MenuEntry::Section)
            .chain([MenuEntry::ToggleTheme, MenuEntry::Search])
    }

    /// Caption of the entry; the theme entry names the mode it switches to.
    pub fn label(self, theme: ThemeMode) -> &'static str {
        match self {
            MenuEntry::Section(link) => link.label,
            MenuEntry::ToggleTheme => theme.switch_label(),
            MenuEntry::Search => "Search",
        }
    }
}

/// What the navbar's owner must do after a menu selection
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuOutcome {
    /// Nothing beyond the navbar's own state change
    None,
    /// Flip the screen theme
    ToggleTheme,
    /// Bring the given page section into view
    ScrollTo(SectionLink),
}

/// The four reachable visibility combinations
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NavbarVisibility {
    Collapsed,
    MenuOpen,
    SearchOpen,
    MenuAndSearchOpen,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NavbarState {
    menu_open: bool,
    search_open: bool,
    query: String,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visibility(&self) -> NavbarVisibility {
        match (self.menu_open, self.search_open) {
            (false, false) => NavbarVisibility::Collapsed,
            (true, false) => NavbarVisibility::MenuOpen,
            (false, true) => NavbarVisibility::SearchOpen,
            (true, true) => NavbarVisibility::MenuAndSearchOpen,
        }
    }

    /// Search icon in the navbar row
    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
        tracing::debug!(open = self.search_open, "Search bar toggled");
    }

    /// Close button inside the search bar
    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    /// Close button, scrim tap, or back gesture
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Applies a menu selection and reports what the owner has to do.
    pub fn select(&mut self, entry: MenuEntry) -> MenuOutcome {
        tracing::debug!(?entry, "Menu entry selected");
        match entry {
            MenuEntry::Section(link) => {
                self.menu_open = false;
                MenuOutcome::ScrollTo(link)
            }
            MenuEntry::ToggleTheme => MenuOutcome::ToggleTheme,
            MenuEntry::Search => {
                self.search_open = true;
                self.menu_open = false;
                MenuOutcome::None
            }
        }
    }

    /// Replaces the query with the current contents of the input field.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Appends a single keystroke.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = NavbarState::new();
        assert_eq!(state.visibility(), NavbarVisibility::Collapsed);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn toggle_search_is_a_strict_flip() {
        let mut state = NavbarState::new();
        state.toggle_search();
        assert!(state.is_search_open());
        state.toggle_search();
        assert!(!state.is_search_open());
        state.toggle_search();
        assert!(state.is_search_open());
    }

    #[test]
    fn selecting_search_closes_menu_and_opens_search() {
        let mut state = NavbarState::new();
        state.open_menu();
        assert_eq!(state.visibility(), NavbarVisibility::MenuOpen);

        assert_eq!(state.select(MenuEntry::Search), MenuOutcome::None);
        assert!(!state.is_menu_open());
        assert!(state.is_search_open());
    }

    #[test]
    fn selecting_search_keeps_search_open_if_already_open() {
        let mut state = NavbarState::new();
        state.toggle_search();
        state.open_menu();
        assert_eq!(state.visibility(), NavbarVisibility::MenuAndSearchOpen);
        state.select(MenuEntry::Search);
        assert_eq!(state.visibility(), NavbarVisibility::SearchOpen);
    }

    #[test]
    fn section_links_close_menu_and_request_scroll() {
        let mut state = NavbarState::new();
        state.open_menu();
        let outcome = state.select(MenuEntry::Section(MENU_LINKS[1]));
        assert_eq!(outcome, MenuOutcome::ScrollTo(MENU_LINKS[1]));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn theme_entry_leaves_menu_open() {
        let mut state = NavbarState::new();
        state.open_menu();
        assert_eq!(state.select(MenuEntry::ToggleTheme), MenuOutcome::ToggleTheme);
        assert!(state.is_menu_open());
    }

    #[test]
    fn flags_are_independent() {
        let mut state = NavbarState::new();
        state.toggle_search();
        state.open_menu();
        state.close_search();
        assert_eq!(state.visibility(), NavbarVisibility::MenuOpen);
        state.toggle_search();
        state.close_menu();
        assert_eq!(state.visibility(), NavbarVisibility::SearchOpen);
    }

    #[test]
    fn typing_jazz_changes_only_the_query() {
        let mut state = NavbarState::new();
        state.toggle_search();
        let before = state.visibility();
        for c in "jazz".chars() {
            state.push_char(c);
        }
        assert_eq!(state.query(), "jazz");
        assert_eq!(state.visibility(), before);
    }

    #[test]
    fn query_survives_closing_search() {
        let mut state = NavbarState::new();
        state.toggle_search();
        state.set_query("rock");
        state.close_search();
        state.toggle_search();
        assert_eq!(state.query(), "rock");
    }

    #[test]
    fn menu_lists_sections_then_theme_then_search() {
        let entries: Vec<_> = MenuEntry::all().collect();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], MenuEntry::Section(MENU_LINKS[0]));
        assert_eq!(entries[4], MenuEntry::ToggleTheme);
        assert_eq!(entries[5], MenuEntry::Search);
    }

    #[test]
    fn entry_labels_follow_theme() {
        assert_eq!(MenuEntry::Section(MENU_LINKS[2]).label(ThemeMode::Light), "How It Works");
        assert_eq!(MenuEntry::ToggleTheme.label(ThemeMode::Light), "Dark Mode");
        assert_eq!(MenuEntry::ToggleTheme.label(ThemeMode::Dark), "Light Mode");
        assert_eq!(MenuEntry::Search.label(ThemeMode::Dark), "Search");
    }
}
