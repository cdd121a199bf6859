use dioxus::prelude::*;
use neonfolio_core::animation::{Blink, GlitchJitter};
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{Color, Theme, TitleLevel};

use crate::theme::text_in;
use crate::widgets::effects::glitch_css;
use crate::widgets::separator::Separator;
use crate::widgets::shaped::ShapeStrip;

const GLITCH_INTENSITY: f64 = 0.7;

/// Top padding above a glitching-separator underline, per level.
pub fn separator_padding(level: TitleLevel) -> f64 {
    match level {
        TitleLevel::H1 => 2.0,
        TitleLevel::H2 => 1.0,
        TitleLevel::H3 | TitleLevel::H4 => 0.0,
    }
}

#[component]
pub fn Title(
    theme: Theme,
    clock: Signal<f64>,
    text: String,
    #[props(default)] level: TitleLevel,
    color: Option<Color>,
    #[props(default = true)] cursor: bool,
    #[props(default = true)] underline: bool,
    #[props(default)] glitching_underline: bool,
    #[props(default)] glitch: bool,
) -> Element {
    let color = color.unwrap_or(theme.palette.on_surface);
    let font = text_in(&theme, level.text_role(), color);
    let needs_clock = cursor || glitch;
    let now = if needs_clock { clock() } else { 0.0 };
    let cursor_opacity = Blink::default().opacity(now);
    let glitch = if glitch {
        glitch_css(GlitchJitter::new(GLITCH_INTENSITY), now)
    } else {
        String::new()
    };
    let gap = level.underline_gap();
    let pad = separator_padding(level);

    rsx! {
        div { style: "display: inline-flex; flex-direction: column; max-width: 100%;",
            div { style: "{font} margin: 0; {glitch}",
                "{text}"
                if cursor {
                    span { style: "margin-left: 4px; opacity: {cursor_opacity:.3};", "_" }
                }
            }
            if underline {
                if glitching_underline {
                    Separator { clock, color, glitched: true, style: "padding-top: {pad}px;" }
                } else {
                    ShapeStrip {
                        kind: ShapeKind::TitleUnderline(level),
                        fill: color,
                        style: "margin-top: {gap}px;",
                    }
                }
            }
        }
    }
}
