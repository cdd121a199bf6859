use dioxus::prelude::*;
use neonfolio_core::animation::ScanDirection;
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{Tone, Theme};

use crate::theme::spacing;
use crate::widgets::effects::ScanLine;
use crate::widgets::shaped::ShapedBox;

/// Card on the notched card outline, with optional header and footer bands.
#[component]
pub fn Card(
    theme: Theme,
    clock: Signal<f64>,
    #[props(default)] tone: Tone,
    #[props(default)] scan: bool,
    header: Option<Element>,
    footer: Option<Element>,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let p = theme.palette;
    let bg = tone.background(p);
    let fg = tone.foreground(p);
    let band = fg.with_alpha(0.1);
    let (band_pad, body_pad) = (spacing::MD, spacing::CARD_PADDING);

    rsx! {
        ShapedBox {
            kind: ShapeKind::Card,
            fill: bg,
            stroke: p.border_green,
            stroke_width: 2.0,
            style: "color: {fg}; {style}",
            div { style: "position: relative; display: flex; flex-direction: column;",
                if let Some(header) = header {
                    div { style: "background: {band}; padding: {band_pad};", {header} }
                }
                div { style: "padding: {body_pad}; padding-bottom: 48px;", {children} }
                if let Some(footer) = footer {
                    div { style: "background: {band}; padding: {band_pad}; margin-bottom: 30px;", {footer} }
                }
                if scan {
                    ScanLine { clock, color: p.border_green, direction: ScanDirection::Horizontal }
                }
            }
        }
    }
}
