use dioxus::prelude::*;
use neonfolio_core::animation::SeparatorGlitch;
use neonfolio_core::shapes::{ShapeKind, SEPARATOR_HEIGHT};
use neonfolio_core::theme::Color;

use crate::widgets::shaped::ShapeStrip;

/// Which outline the separator draws at `elapsed_ms`: a flat rule while
/// the glitch is quiet, the torn shape during a burst.
pub fn separator_shape(glitched: bool, elapsed_ms: f64) -> (ShapeKind, String) {
    if !glitched {
        return (ShapeKind::SimpleSeparator, String::new());
    }
    let frame = SeparatorGlitch.sample(elapsed_ms);
    if frame.skew_x == 0.0 {
        (ShapeKind::SimpleSeparator, format!("transform: translateX({:.2}px);", frame.offset_x))
    } else {
        (ShapeKind::GlitchedSeparator, format!("transform: {};", frame.css_transform()))
    }
}

#[component]
pub fn Separator(
    clock: Signal<f64>,
    color: Color,
    #[props(default)] glitched: bool,
    #[props(default)] style: String,
) -> Element {
    let now = if glitched { clock() } else { 0.0 };
    let (kind, transform) = separator_shape(glitched, now);
    rsx! {
        div { style: "width: 100%; {style}",
            ShapeStrip {
                kind,
                fill: color,
                height: SEPARATOR_HEIGHT,
                style: "{transform}",
            }
        }
    }
}
