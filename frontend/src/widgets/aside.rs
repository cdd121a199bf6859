use dioxus::prelude::*;
use neonfolio_core::layout::{AsideState, NavItem, ASIDE_ITEM_TILT_DEG};
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::Theme;

use crate::widgets::shaped::ShapedBox;

/// Desktop side navigation. Rests mostly tucked away and slides out while
/// the pointer is over it.
#[component]
pub fn Aside(theme: Theme, clock: Signal<f64>, on_navigate: EventHandler<NavItem>) -> Element {
    let mut state = use_signal(AsideState::default);
    let mut slide = use_signal(|| AsideState::default().transition());
    let width = state.read().width;
    let offset = {
        let slide = slide.read();
        if slide.is_finished(*clock.peek()) {
            slide.target()
        } else {
            slide.value_at(clock())
        }
    };
    let shift = offset - width;

    let mut set_hovered = move |hovered: bool| {
        state.write().set_hovered(hovered);
        let target = state.peek().offset();
        let now = *clock.peek();
        slide.write().retarget(target, now);
    };

    rsx! {
        nav {
            style: "width: {width}px; transform: translateX({shift:.2}px); display: flex; flex-direction: column; gap: 3px;",
            onmouseenter: move |_| set_hovered(true),
            onmouseleave: move |_| set_hovered(false),
            for item in NavItem::ALL {
                AsideItem { key: "{item:?}", theme, item, on_navigate }
            }
        }
    }
}

#[component]
fn AsideItem(theme: Theme, item: NavItem, on_navigate: EventHandler<NavItem>) -> Element {
    let p = theme.palette;
    let mut hovered = use_signal(|| false);
    let (bg, fg) = if hovered() { (p.black, p.yellow) } else { (p.yellow, p.black) };
    let edge = p.black;
    let counter_tilt = -ASIDE_ITEM_TILT_DEG;
    let label = item.label();

    rsx! {
        div { style: "transform: rotate({ASIDE_ITEM_TILT_DEG}deg);",
            ShapedBox {
                kind: ShapeKind::AsideItem,
                fill: bg,
                clip: true,
                style: "cursor: pointer;",
                div {
                    style: "border-left: 10px solid {edge}; border-bottom: 10px solid {edge}; border-top: 1px solid {edge}; padding: 5px 10px;",
                    onmouseenter: move |_| hovered.set(true),
                    onmouseleave: move |_| hovered.set(false),
                    onclick: move |_| on_navigate.call(item),
                    span { style: "display: inline-block; font-size: 21px; color: {fg}; transform: rotate({counter_tilt}deg);",
                        "{label}"
                    }
                }
            }
        }
    }
}
