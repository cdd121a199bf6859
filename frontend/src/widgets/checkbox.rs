use dioxus::prelude::*;
use neonfolio_core::animation::{Easing, Transition};
use neonfolio_core::theme::{Color, TextRole, Theme};

use crate::theme::text_in;

const CHECKED_SCALE: f64 = 1.1;

/// Open ring plus a vertical stroke, green when checked.
#[component]
pub fn Checkbox(
    theme: Theme,
    clock: Signal<f64>,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] label: String,
    label_color: Option<Color>,
    #[props(default = true)] enabled: bool,
) -> Element {
    let p = theme.palette;
    let mut scale = use_signal(|| {
        let start = if checked { CHECKED_SCALE } else { 1.0 };
        Transition::settled(start, Transition::CHECKMARK_MS, Easing::EaseInOutCubic)
    });
    let target = if checked { CHECKED_SCALE } else { 1.0 };
    let factor = {
        let transition = scale.read();
        if transition.target() == target {
            transition.value_at(clock())
        } else {
            target
        }
    };

    let alpha = if enabled { 1.0 } else { 0.5 };
    let mark = if checked { p.border_green } else { p.yellow }.with_alpha(alpha);
    let label_color = label_color.unwrap_or(p.black);
    let label_color = if enabled { label_color } else { label_color.with_alpha(0.5) };
    let font = text_in(&theme, TextRole::BodyMedium, label_color);
    let backing = p.black;
    let cursor = if enabled { "pointer" } else { "not-allowed" };

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; padding: 4px; cursor: {cursor}; user-select: none;",
            role: "checkbox",
            aria_checked: "{checked}",
            onclick: move |_| {
                if enabled {
                    let next = if checked { 1.0 } else { CHECKED_SCALE };
                    let now = *clock.peek();
                    scale.write().retarget(next, now);
                    on_change.call(!checked);
                }
            },
            svg {
                width: "20",
                height: "20",
                style: "background: {backing}; border-radius: 3px; transform: scale({factor:.3}); flex-shrink: 0;",
                path {
                    d: "M 10.83 11.83 A 4 4 0 1 1 10.83 6.17",
                    fill: "none",
                    stroke: "{mark}",
                    stroke_width: "2",
                }
                rect { x: "9", y: "3", width: "2", height: "7", fill: "{mark}" }
            }
            if !label.is_empty() {
                span { style: "{font} font-weight: 500; padding-left: 8px;", "{label}" }
            }
        }
    }
}
