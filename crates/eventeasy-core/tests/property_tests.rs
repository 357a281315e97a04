//! Property-based tests for the screen model
//!
//! Uses proptest to check the rotation, theme and navbar invariants over
//! arbitrary inputs.

use eventeasy_core::{
    BackgroundCycle, HomeScreenState, MenuEntry, NavbarState, ThemeMode, MENU_LINKS,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// User actions on the navbar
#[derive(Debug, Clone)]
enum NavOp {
    ToggleSearch,
    CloseSearch,
    OpenMenu,
    CloseMenu,
    Select(usize), // Index into MenuEntry::all()
    Type(char),
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            Just(NavOp::ToggleSearch),
            Just(NavOp::CloseSearch),
            Just(NavOp::OpenMenu),
            Just(NavOp::CloseMenu),
            (0..6usize).prop_map(NavOp::Select),
            any::<char>().prop_map(NavOp::Type),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After N advances the index is N mod len
    #[test]
    fn index_is_fire_count_mod_len(len in 1usize..16, fires in 0usize..500) {
        let mut cycle = BackgroundCycle::new(len).unwrap();
        for _ in 0..fires {
            cycle.advance();
        }
        prop_assert_eq!(cycle.current(), fires % len);
    }

    /// The index never leaves [0, len)
    #[test]
    fn index_stays_in_range(len in 1usize..16, fires in 0usize..200) {
        let mut cycle = BackgroundCycle::new(len).unwrap();
        for _ in 0..fires {
            prop_assert!(cycle.advance() < len);
        }
    }

    /// An even number of toggles is the identity on the palette
    #[test]
    fn even_toggles_restore_theme(pairs in 0usize..50) {
        let mut screen = HomeScreenState::new();
        let before = screen.palette().clone();
        for _ in 0..pairs * 2 {
            screen.toggle_dark_mode();
        }
        prop_assert_eq!(screen.theme(), ThemeMode::Light);
        prop_assert_eq!(screen.palette(), &before);
    }

    /// Typing characters one by one yields exactly that string
    #[test]
    fn query_matches_typed_text(text in ".{0,64}") {
        let mut nav = NavbarState::new();
        for c in text.chars() {
            nav.push_char(c);
        }
        prop_assert_eq!(nav.query(), text.as_str());
        prop_assert!(!nav.is_menu_open());
        prop_assert!(!nav.is_search_open());
    }

    /// Whatever the history, choosing Search from the menu ends with
    /// the menu closed and search open
    #[test]
    fn search_entry_always_lands_in_search(ops in nav_ops_strategy(40)) {
        let entries: Vec<MenuEntry> = MenuEntry::all().collect();
        let mut nav = NavbarState::new();
        for op in ops {
            match op {
                NavOp::ToggleSearch => nav.toggle_search(),
                NavOp::CloseSearch => nav.close_search(),
                NavOp::OpenMenu => nav.open_menu(),
                NavOp::CloseMenu => nav.close_menu(),
                NavOp::Select(i) => { nav.select(entries[i]); }
                NavOp::Type(c) => nav.push_char(c),
            }
        }
        nav.open_menu();
        nav.select(MenuEntry::Search);
        prop_assert!(!nav.is_menu_open());
        prop_assert!(nav.is_search_open());
    }

    /// Section links always close the menu and leave search untouched
    #[test]
    fn section_links_only_touch_the_menu(link in 0usize..4, search_open in any::<bool>()) {
        let mut nav = NavbarState::new();
        if search_open {
            nav.toggle_search();
        }
        nav.open_menu();
        nav.select(MenuEntry::Section(MENU_LINKS[link]));
        prop_assert!(!nav.is_menu_open());
        prop_assert_eq!(nav.is_search_open(), search_open);
    }
}
