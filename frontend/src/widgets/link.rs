use dioxus::prelude::*;
use neonfolio_core::animation::{Easing, RepeatMode, Tween};
use neonfolio_core::theme::{Color, TextRole, Theme};

use crate::theme::text_in;

/// Hover scan period.
const SCAN_MS: f64 = 900.0;

/// Vertical position of the hover scan line, from the bottom edge up.
pub fn hover_scan_percent(elapsed_ms: f64) -> f64 {
    let t = Tween::new(SCAN_MS, RepeatMode::Restart, Easing::Linear).progress(elapsed_ms);
    (1.0 - t) * 100.0
}

/// Inline text link with a glowing underline; a scan line runs up the text
/// while hovered.
#[component]
pub fn Link(
    theme: Theme,
    clock: Signal<f64>,
    text: String,
    on_click: EventHandler<()>,
    color: Option<Color>,
    #[props(default = TextRole::BodyMedium)] role: TextRole,
) -> Element {
    let color = color.unwrap_or(theme.palette.border_green);
    let mut hovered = use_signal(|| false);
    let font = text_in(&theme, role, color);
    let glow = color.with_alpha(0.3);
    let scan_top = if hovered() { hover_scan_percent(clock()) } else { 0.0 };

    rsx! {
        span {
            style: "position: relative; display: inline-block; cursor: pointer; padding-bottom: 4px;",
            role: "link",
            tabindex: "0",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |_| on_click.call(()),
            span { style: "{font} font-weight: 500;", "{text}" }
            span { style: "position: absolute; left: 0; right: 0; bottom: 1px; height: 1.5px; background: {color}; box-shadow: 0 0 8px 3px {glow};" }
            if hovered() {
                span {
                    style: "position: absolute; left: -2px; right: -2px; height: 1.5px; top: {scan_top:.2}%; background: {color}; box-shadow: 0 0 2px 2px {glow};",
                }
            }
        }
    }
}
