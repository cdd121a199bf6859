//! Page Composer state machine, aside hover offset, navigation mapping and
//! the action-row flow.

use neonfolio_core::layout::{
    action_row_layout, AsideState, LayoutMode, MobileMenu, NavItem, PageState, ACTION_ROW_STAGGER,
    MENU_SHEET_HIDDEN, MENU_SHEET_SHOWN,
};
use neonfolio_core::scroll::SectionPositions;
use neonfolio_core::size_class::{classify, SizeClass};
use pretty_assertions::assert_eq;

#[test]
fn desktop_viewport_without_touch_shows_side_navigation() {
    let state = PageState::for_viewport(classify(1024.0, 768.0), false);
    assert_eq!(state.layout, LayoutMode::Desktop);
    assert!(!state.is_mobile());
}

#[test]
fn compact_touch_viewport_uses_bottom_sheet() {
    let state = PageState::for_viewport(classify(375.0, 800.0), true);
    assert_eq!(state.layout, LayoutMode::Mobile);
    assert_eq!(state.menu, MobileMenu::Collapsed);
    assert_eq!(state.menu_sheet_offset(), MENU_SHEET_HIDDEN);
}

#[test]
fn viewport_changes_report_transitions_once() {
    let mut state = PageState::default();
    assert_eq!(state.on_viewport(classify(1200.0, 900.0), false), None);

    let change = state.on_viewport(classify(500.0, 900.0), false).unwrap();
    assert_eq!((change.from, change.to), (LayoutMode::Desktop, LayoutMode::Mobile));
    assert_eq!(state.on_viewport(classify(420.0, 900.0), false), None);
}

#[test]
fn leaving_mobile_collapses_the_menu() {
    let mut state = PageState::for_viewport(classify(375.0, 800.0), false);
    assert!(state.toggle_menu());
    assert!(state.is_menu_expanded());
    assert_eq!(state.menu_sheet_offset(), MENU_SHEET_SHOWN);

    state.on_viewport(classify(1024.0, 800.0), false);
    assert_eq!(state.layout, LayoutMode::Desktop);
    assert_eq!(state.menu, MobileMenu::Collapsed);
    assert_eq!(state.menu_sheet_offset(), MENU_SHEET_HIDDEN);
}

#[test]
fn menu_toggle_is_ignored_on_desktop() {
    let mut state = PageState::for_viewport(classify(1024.0, 800.0), false);
    assert!(!state.toggle_menu());
    assert_eq!(state.menu, MobileMenu::Collapsed);
}

#[test]
fn navigating_from_the_sheet_closes_it() {
    let mut state = PageState::for_viewport(classify(375.0, 800.0), true);
    state.toggle_menu();
    state.on_navigate();
    assert_eq!(state.menu, MobileMenu::Collapsed);
}

#[test]
fn aside_offset_follows_hover() {
    let mut aside = AsideState::default();
    assert_eq!(aside.offset(), 43.0);
    aside.set_hovered(true);
    assert_eq!(aside.offset(), 225.0);
    assert_eq!(aside.transition().target(), 225.0);
}

#[test]
fn nav_items_map_to_section_ids() {
    let ids: Vec<&str> = NavItem::ALL.iter().map(|i| i.section_id()).collect();
    assert_eq!(ids, vec!["about", "experience", "projects", "skills", "contact"]);
    assert_eq!(NavItem::from_section_id("skills"), Some(NavItem::Skills));
    assert_eq!(NavItem::from_section_id("nope"), None);
}

#[test]
fn nav_item_before_measurement_is_a_no_op() {
    let mut positions = SectionPositions::new();
    assert_eq!(positions.scroll_target(NavItem::Projects.section_id(), 80.0, 4000.0), None);
    positions.record(NavItem::Projects.section_id(), 2100.0);
    assert_eq!(
        positions.scroll_target(NavItem::Projects.section_id(), 80.0, 4000.0),
        Some(2020.0)
    );
}

#[test]
fn action_row_flows_by_width_class() {
    let compact = action_row_layout(SizeClass::Compact, 4);
    assert_eq!(compact.iter().map(|s| s.row).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert!(compact.iter().all(|s| s.offset_y == 0.0));

    let medium = action_row_layout(SizeClass::Medium, 4);
    assert_eq!(
        medium.iter().map(|s| (s.row, s.column)).collect::<Vec<_>>(),
        vec![(0, 0), (0, 1), (1, 0), (1, 1)]
    );

    let expanded = action_row_layout(SizeClass::Expanded, 4);
    assert!(expanded.iter().all(|s| s.row == 0));
    let offsets: Vec<f64> = expanded.iter().map(|s| s.offset_y).collect();
    assert_eq!(offsets, ACTION_ROW_STAGGER.to_vec());
}
