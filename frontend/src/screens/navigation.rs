use dioxus::prelude::*;
use neonfolio_core::layout::{NavItem, MENU_HANDLE_HEIGHT, MENU_SHEET_HIDDEN};
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{TextRole, Theme};

use crate::theme::text_in;
use crate::widgets::ShapedBox;

/// Bottom sheet used as navigation on mobile. Only the handle shows while
/// collapsed; `offset` slides the item panel in and out.
#[component]
pub fn MenuSheet(
    theme: Theme,
    expanded: bool,
    offset: f64,
    on_toggle: EventHandler<()>,
    on_navigate: EventHandler<NavItem>,
) -> Element {
    let p = theme.palette;
    let row_height = MENU_SHEET_HIDDEN / NavItem::ALL.len() as f64;
    let handle_font = text_in(&theme, TextRole::LabelLarge, p.black);
    let item_font = text_in(&theme, TextRole::TitleMedium, p.yellow);
    let arrow = if expanded { "\u{25BC}" } else { "\u{25B2}" };
    let divider = p.border_green.with_alpha(0.4);
    let panel = p.black;

    rsx! {
        nav {
            style: "position: fixed; left: 0; right: 0; bottom: 0; z-index: 50; transform: translateY({offset:.2}px);",
            ShapedBox {
                kind: ShapeKind::SectionTopDecoration,
                fill: p.yellow,
                style: "height: {MENU_HANDLE_HEIGHT}px; cursor: pointer;",
                div {
                    style: "height: {MENU_HANDLE_HEIGHT}px; display: flex; align-items: center; justify-content: center; gap: 8px; {handle_font}",
                    role: "button",
                    aria_expanded: "{expanded}",
                    onclick: move |_| on_toggle.call(()),
                    span { "MENU" }
                    span { "{arrow}" }
                }
            }
            div { style: "height: {MENU_SHEET_HIDDEN}px; background: {panel}; display: flex; flex-direction: column;",
                for (item, label) in NavItem::ALL.map(|item| (item, item.label())) {
                    div {
                        key: "{label}",
                        style: "height: {row_height}px; display: flex; align-items: center; padding: 0 24px; border-bottom: 1px solid {divider}; cursor: pointer; {item_font}",
                        onclick: move |_| on_navigate.call(item),
                        "{label}"
                    }
                }
            }
        }
    }
}
