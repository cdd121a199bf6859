//! Animated decorations shared by several widgets: glitch displacement,
//! scan lines, and the dotted background.

use dioxus::prelude::*;
use neonfolio_core::animation::{GlitchJitter, ScanDirection, ScanSweep};
use neonfolio_core::theme::Color;

/// Inline declarations for a glitching element at `elapsed_ms`. Empty while
/// the waveform is quiet so the element keeps its plain styling.
pub fn glitch_css(jitter: GlitchJitter, elapsed_ms: f64) -> String {
    let offset = jitter.offset(elapsed_ms);
    let chroma = jitter.chroma(elapsed_ms);
    if offset == 0.0 && chroma == 0.0 {
        return String::new();
    }
    let mut css = format!("transform: translateX({offset:.2}px);");
    if chroma != 0.0 {
        css.push(' ');
        css.push_str(&chroma_shadow_css(chroma));
    }
    css
}

/// Red/cyan text split for a chromatic offset of `chroma`.
pub fn chroma_shadow_css(chroma: f64) -> String {
    let split = chroma * 2.0;
    format!(
        "text-shadow: {split:.2}px 0 rgba(255, 0, 60, 0.75), {neg:.2}px 0 rgba(0, 240, 255, 0.75);",
        neg = -split,
    )
}

/// Dot grid painted with a repeating radial gradient.
pub fn dotted_background_css(dot: Color, radius: f64, spacing: f64, offset: (f64, f64)) -> String {
    format!(
        "background-image: radial-gradient(circle, {dot} {radius}px, transparent {edge}px); \
         background-size: {spacing}px {spacing}px; background-position: {x}px {y}px;",
        dot = dot.css(),
        edge = radius + 0.5,
        x = offset.0,
        y = offset.1,
    )
}

/// Thin line plus a soft band sweeping across the parent, which must be
/// positioned.
#[component]
pub fn ScanLine(
    clock: Signal<f64>,
    color: Color,
    #[props(default)] direction: ScanDirection,
    #[props(default)] reverse: bool,
) -> Element {
    let sweep = ScanSweep::for_direction(direction);
    let sweep = if reverse { sweep.reversing() } else { sweep };
    let pos = sweep.position(clock()) * 100.0;
    let line = color.css();
    let band = color.with_alpha(0.3).css();
    let (line_box, band_box) = match direction {
        ScanDirection::Horizontal => (
            format!("left: 0; right: 0; top: calc({pos:.2}% - 1.5px); height: 3px;"),
            format!("left: 0; right: 0; top: calc({pos:.2}% - 5px); height: 10px;"),
        ),
        ScanDirection::Vertical => (
            format!("top: 0; bottom: 0; left: calc({pos:.2}% - 1.5px); width: 3px;"),
            format!("top: 0; bottom: 0; left: calc({pos:.2}% - 5px); width: 10px;"),
        ),
    };

    rsx! {
        div { style: "position: absolute; inset: 0; overflow: hidden; pointer-events: none;",
            div { style: "position: absolute; {band_box} background: {band};" }
            div { style: "position: absolute; {line_box} background: {line};" }
        }
    }
}

/// Wraps children in the glitch displacement.
#[component]
pub fn Glitch(
    clock: Signal<f64>,
    #[props(default = 1.0)] intensity: f64,
    #[props(default = true)] active: bool,
    children: Element,
) -> Element {
    let css = if active {
        glitch_css(GlitchJitter::new(intensity), clock())
    } else {
        String::new()
    };
    rsx! {
        div { style: "{css}", {children} }
    }
}
