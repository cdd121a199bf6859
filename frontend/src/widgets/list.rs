use dioxus::prelude::*;
use neonfolio_core::animation::ListJitter;
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{Color, Theme};

use crate::widgets::shaped::ShapedBox;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListKind {
    #[default]
    Unordered,
    Ordered,
}

const BULLET_SIZE: f64 = 19.0;

#[component]
pub fn List(
    theme: Theme,
    clock: Signal<f64>,
    items: Vec<String>,
    #[props(default)] kind: ListKind,
    #[props(default)] jitter: bool,
    color: Option<Color>,
    #[props(default = 19.0)] font_size: f64,
) -> Element {
    let color = color.unwrap_or(theme.palette.on_surface);
    rsx! {
        div { style: "display: flex; flex-direction: column; padding-left: 29px;",
            for (index, item) in items.into_iter().enumerate() {
                ListItem {
                    key: "{index}",
                    theme,
                    clock,
                    text: item,
                    index,
                    kind,
                    jitter,
                    color,
                    font_size,
                }
            }
        }
    }
}

#[component]
fn ListItem(
    theme: Theme,
    clock: Signal<f64>,
    text: String,
    index: usize,
    kind: ListKind,
    jitter: bool,
    color: Color,
    font_size: f64,
) -> Element {
    let p = theme.palette;
    let wave = ListJitter::new(index);
    let (skew, offset) = if jitter && wave.should_glitch() {
        let now = clock();
        (wave.skew(now), wave.offset(now))
    } else {
        (0.0, 0.0)
    };
    let shape = match kind {
        ListKind::Unordered => ShapeKind::UnorderedBullet,
        ListKind::Ordered => ShapeKind::OrderedBullet,
    };
    let number = index + 1;
    let number_color = if color == p.black { p.yellow } else { p.black };

    rsx! {
        div { style: "display: flex; align-items: flex-start; padding: 4px 0; transform: translateX({offset:.2}px);",
            ShapedBox {
                kind: shape,
                fill: color,
                style: "width: {BULLET_SIZE}px; height: {BULLET_SIZE}px; margin-left: -29px; margin-right: 10px; flex-shrink: 0;",
                if kind == ListKind::Ordered {
                    span { style: "display: flex; align-items: center; justify-content: center; height: {BULLET_SIZE}px; font-size: 11px; font-weight: 700; color: {number_color};",
                        "{number}"
                    }
                }
            }
            span { style: "display: inline-block; font-size: {font_size}px; line-height: 1.3; color: {color}; transform: rotate({skew:.2}deg); transform-origin: left center;",
                "{text}"
            }
        }
    }
}
