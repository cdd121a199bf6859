use dioxus::prelude::*;
use neonfolio_core::animation::ScanDirection;
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{Color, Tone, Theme};

use crate::widgets::effects::ScanLine;
use crate::widgets::shaped::ShapedBox;

/// Paragraph colours: `(background, text)`. Inside an inverse section the
/// pairing flips so the paragraph keeps contrasting with its surroundings.
pub fn paragraph_colors(theme: &Theme, tone: Tone, section: Tone) -> (Color, Color) {
    let effective = if section == Tone::Inverse { tone.flipped() } else { tone };
    (effective.background(theme.palette), effective.foreground(theme.palette))
}

pub fn default_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Normal => "P-14",
        Tone::Inverse => "T-71",
    }
}

#[component]
pub fn Paragraph(
    theme: Theme,
    clock: Signal<f64>,
    text: String,
    #[props(default)] tone: Tone,
    #[props(default)] section: Tone,
    scan: Option<ScanDirection>,
    label: Option<String>,
    #[props(default)] style: String,
) -> Element {
    let palette = theme.palette;
    let (bg, fg) = paragraph_colors(&theme, tone, section);
    let (stroke, stroke_width, padding, label_pos) = match tone {
        Tone::Normal => (None, 0.0, "30px 35px", "right: 25px; bottom: 27px;"),
        Tone::Inverse => (Some(palette.border_green), 3.0, "35px 55px", "right: 90px; bottom: 6px;"),
    };
    let label = label.unwrap_or_else(|| default_label(tone).to_string());
    let outline = palette.border_green;

    rsx! {
        ShapedBox {
            kind: ShapeKind::Paragraph,
            fill: bg,
            stroke,
            stroke_width,
            style: "{style}",
            div { style: "position: relative; padding: {padding}; overflow: hidden;",
                p { style: "margin: 0; font-size: 19px; line-height: 26px; text-align: center; color: {fg}; white-space: pre-line;",
                    "{text}"
                }
                if let Some(direction) = scan {
                    ScanLine { clock, color: outline, direction, reverse: true }
                }
            }
            span {
                style: "position: absolute; {label_pos} background: {bg}; color: {fg}; border: 2px solid {outline}; \
                        padding: 2px; font-size: 10px; font-weight: 700; line-height: 10px;",
                "{label}"
            }
        }
    }
}
