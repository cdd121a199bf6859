//! Determinate progress bar and the indeterminate spinner.

use dioxus::prelude::*;
use neonfolio_core::animation::{Easing, RepeatMode, Transition, Tween};
use neonfolio_core::theme::{Color, TextRole, Theme};

use crate::theme::text_in;
use crate::widgets::effects::dotted_background_css;

/// Whole-percent label, truncated the way a counter would show it.
pub fn percent_label(progress: f64) -> String {
    let clamped = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    format!("{}%", (clamped * 100.0 + 1e-9).floor() as u32)
}

const GLITCH_OFFSET: Tween = Tween::new(150.0, RepeatMode::Reverse, Easing::Linear);
const GLITCH_ALPHA: Tween = Tween::new(100.0, RepeatMode::Reverse, Easing::Linear);

#[component]
pub fn ProgressBar(
    theme: Theme,
    clock: Signal<f64>,
    progress: f64,
    #[props(default = true)] show_percentage: bool,
    #[props(default)] glitch: bool,
    color: Option<Color>,
    track: Option<Color>,
) -> Element {
    let p = theme.palette;
    let target = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    let mut fill = use_signal(|| Transition::settled(0.0, Transition::PROGRESS_MS, Easing::EaseOutCubic));
    use_effect(use_reactive((&target,), move |(target,)| {
        let now = *clock.peek();
        fill.write().retarget(target, now);
    }));

    let now = clock();
    let shown = fill.read().value_at(now);
    let color = color.unwrap_or(p.red);
    let track = track.unwrap_or(p.black);
    let dots = dotted_background_css(p.yellow.with_alpha(0.3), 1.0, 5.0, (0.0, 0.0));
    let (jitter, overlay_alpha) = if glitch {
        (GLITCH_OFFSET.lerp(0.0, 3.0, now), GLITCH_ALPHA.lerp(0.7, 1.0, now) * 0.3)
    } else {
        (0.0, 0.0)
    };
    let width_pct = shown * 100.0;
    let overlays = [p.border_green, p.neon_green, p.orange].map(|tint| tint.with_alpha(overlay_alpha as f32));
    let edge = p.border_green;
    let label = percent_label(shown);
    let label_font = text_in(&theme, TextRole::BodyMedium, p.black);

    rsx! {
        div { style: "display: flex; flex-direction: column;",
            div {
                style: "position: relative; height: 20px; width: 100%; overflow: hidden; background-color: {track}; {dots}",
                role: "progressbar",
                aria_valuenow: "{label}",
                if shown > 0.0 {
                    div { style: "position: absolute; left: 0; top: 0; bottom: 0; width: calc({width_pct:.2}% + {jitter:.2}px); background: {color};" }
                }
                if glitch && shown > 0.1 {
                    for (i, tint) in overlays.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            style: "position: absolute; top: 0; bottom: 0; left: calc({width_pct:.2}% * {i} / 3 + {jitter:.2}px - 1.5px); width: calc({width_pct:.2}% / 3); background: {tint};",
                        }
                    }
                }
                if shown > 0.0 {
                    div { style: "position: absolute; top: 0; bottom: 0; left: calc({width_pct:.2}% - 1px); width: 2px; background: {edge};" }
                }
            }
            if show_percentage {
                span { style: "{label_font} padding-top: 4px;", "{label}" }
            }
        }
    }
}

/// SVG path for an arc of a circle, angles in degrees clockwise from 3 o'clock.
pub fn arc_path(cx: f64, cy: f64, r: f64, start_deg: f64, sweep_deg: f64) -> String {
    let point = |deg: f64| {
        let rad = deg.to_radians();
        (cx + r * rad.cos(), cy + r * rad.sin())
    };
    let (x0, y0) = point(start_deg);
    let (x1, y1) = point(start_deg + sweep_deg);
    let large = if sweep_deg.abs() > 180.0 { 1 } else { 0 };
    format!("M {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2}")
}

const SPIN: Tween = Tween::new(1000.0, RepeatMode::Restart, Easing::Linear);
const FLICKER: Tween = Tween::new(200.0, RepeatMode::Reverse, Easing::Linear);
const PULSE: Tween = Tween::new(800.0, RepeatMode::Reverse, Easing::EaseInOutSine);

#[component]
pub fn LoadingSpinner(
    theme: Theme,
    clock: Signal<f64>,
    #[props(default = 40.0)] size: f64,
    color: Option<Color>,
    secondary: Option<Color>,
    #[props(default = 3.0)] stroke_width: f64,
) -> Element {
    let color = color.unwrap_or(theme.palette.border_green);
    let secondary = secondary.unwrap_or(theme.palette.red);
    let now = clock();
    let rotation = SPIN.lerp(0.0, 360.0, now);
    let alpha = 0.3 + FLICKER.progress(now) * 0.7;
    let pulse = PULSE.lerp(0.8, 1.2, now);

    let c = size / 2.0;
    let r = size / 3.0;
    let outer: Vec<String> = (0..8).map(|i| arc_path(c, c, r, f64::from(i) * 45.0 - 20.0, 40.0)).collect();
    let inner: Vec<String> = (0..8)
        .step_by(2)
        .map(|i| arc_path(c, c, r * 0.8, f64::from(i) * 45.0 - 10.0, 20.0))
        .collect();
    let main = color.with_alpha(alpha as f32);
    let accent = secondary.with_alpha((alpha * 0.7) as f32);
    let ring = color.with_alpha((pulse - 0.8).max(0.0) as f32);
    let ring_r = 4.0 * pulse;
    let thin = stroke_width * 0.5;

    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            style: "transform: rotate({rotation:.1}deg); flex-shrink: 0;",
            for (i, d) in outer.into_iter().enumerate() {
                path { key: "o{i}", d: "{d}", fill: "none", stroke: "{main}", stroke_width: "{stroke_width}", stroke_linecap: "round" }
            }
            for (i, d) in inner.into_iter().enumerate() {
                path { key: "i{i}", d: "{d}", fill: "none", stroke: "{accent}", stroke_width: "{thin}", stroke_linecap: "round" }
            }
            circle { cx: "{c}", cy: "{c}", r: "{ring_r:.2}", fill: "none", stroke: "{ring}", stroke_width: "{thin}" }
            circle { cx: "{c}", cy: "{c}", r: "2", fill: "{color}" }
        }
    }
}

/// Spinner with a caption underneath.
#[component]
pub fn LoadingSpinnerWithText(theme: Theme, clock: Signal<f64>, text: String, text_color: Option<Color>) -> Element {
    let font = text_in(&theme, TextRole::BodyMedium, text_color.unwrap_or(theme.palette.black));
    rsx! {
        div { style: "display: flex; flex-direction: column; align-items: center; gap: 8px;",
            LoadingSpinner { theme, clock }
            span { style: "{font}", "{text}" }
        }
    }
}
