use dioxus::prelude::*;
use neonfolio_core::animation::{Easing, Transition};
use neonfolio_core::theme::{Color, TextRole, Theme};

use crate::theme::text_in;

/// Left edge of the sliding indicator, unselected and selected.
const INDICATOR_OFF: f64 = 2.0;
const INDICATOR_ON: f64 = 10.0;

/// A 20x14 track with a small block that slides right when selected.
#[component]
pub fn RadioButton(
    theme: Theme,
    clock: Signal<f64>,
    selected: bool,
    on_select: EventHandler<()>,
    #[props(default)] label: String,
    label_color: Option<Color>,
    #[props(default = true)] enabled: bool,
) -> Element {
    let p = theme.palette;
    let target = if selected { INDICATOR_ON } else { INDICATOR_OFF };
    let mut slide = use_signal(|| Transition::settled(target, Transition::RADIO_MS, Easing::EaseInOutCubic));
    let left = {
        let transition = slide.read();
        if transition.target() == target {
            transition.value_at(clock())
        } else {
            target
        }
    };

    let alpha = if enabled { 1.0 } else { 0.5 };
    let indicator = if selected { p.border_green } else { p.yellow }.with_alpha(alpha);
    let track = p.black;
    let label_color = label_color.unwrap_or(p.black);
    let label_color = if enabled { label_color } else { label_color.with_alpha(0.5) };
    let font = text_in(&theme, TextRole::BodyMedium, label_color);
    let cursor = if enabled { "pointer" } else { "not-allowed" };

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; padding: 4px; cursor: {cursor}; user-select: none;",
            role: "radio",
            aria_checked: "{selected}",
            onclick: move |_| {
                if enabled && !selected {
                    let now = *clock.peek();
                    slide.write().retarget(INDICATOR_ON, now);
                    on_select.call(());
                }
            },
            div { style: "position: relative; width: 20px; height: 14px; background: {track}; border-radius: 3px; flex-shrink: 0;",
                div { style: "position: absolute; left: {left:.2}px; top: 2px; width: 8px; height: 6px; background: {indicator};" }
            }
            if !label.is_empty() {
                span { style: "{font} font-weight: 500; padding-left: 8px;", "{label}" }
            }
        }
    }
}

/// Vertical group where exactly one option is selected.
#[component]
pub fn RadioGroup(
    theme: Theme,
    clock: Signal<f64>,
    options: Vec<String>,
    selected: String,
    on_select: EventHandler<String>,
    label_color: Option<Color>,
    #[props(default = true)] enabled: bool,
) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            for option in options {
                RadioButton {
                    key: "{option}",
                    theme,
                    clock,
                    selected: option == selected,
                    label: option.clone(),
                    label_color,
                    enabled,
                    on_select: move |_| on_select.call(option.clone()),
                }
            }
        }
    }
}
