use dioxus::prelude::*;
use neonfolio_core::animation::{Easing, GlitchJitter, Transition};
use neonfolio_core::shapes::{ShapeKind, BUTTON_OVERHANG};
use neonfolio_core::theme::{Color, ColorPalette, TextRole, Theme};

use crate::theme::text_in;
use crate::widgets::effects::chroma_shadow_css;
use crate::widgets::shaped::ShapedBox;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Red,
    Green,
    Blue,
    Purple,
}

impl ButtonVariant {
    pub fn fill(self, palette: &ColorPalette) -> Color {
        match self {
            ButtonVariant::Red => palette.red,
            ButtonVariant::Green => palette.green,
            ButtonVariant::Blue => palette.blue,
            ButtonVariant::Purple => palette.purple,
        }
    }
}

/// One `transform` carrying both the press scale and any glitch shift, so
/// neither declaration overrides the other.
pub fn button_motion_css(scale: f64, glitch: Option<GlitchJitter>, elapsed_ms: f64) -> String {
    let (offset, chroma) = glitch
        .map(|jitter| (jitter.offset(elapsed_ms), jitter.chroma(elapsed_ms)))
        .unwrap_or((0.0, 0.0));
    let mut css = if offset != 0.0 {
        format!("transform: translateX({offset:.2}px) scale({scale:.3});")
    } else {
        format!("transform: scale({scale:.3});")
    };
    if chroma != 0.0 {
        css.push(' ');
        css.push_str(&chroma_shadow_css(chroma));
    }
    css
}

/// Whether the button has to follow the frame clock at `now_ms`: only while
/// glitching or mid-press.
pub fn follows_clock(glitch: bool, press: &Transition, now_ms: f64) -> bool {
    glitch || !press.is_finished(now_ms)
}

pub const DEFAULT_CODE: &str = "R-25";
const PRESSED_SCALE: f64 = 0.95;
const GLITCH_INTENSITY: f64 = 0.8;

#[component]
pub fn Button(
    theme: Theme,
    clock: Signal<f64>,
    text: String,
    on_click: EventHandler<()>,
    #[props(default)] variant: ButtonVariant,
    #[props(default = DEFAULT_CODE.to_string())] code: String,
    #[props(default)] glitch: bool,
    #[props(default = true)] enabled: bool,
    #[props(default)] full_width: bool,
) -> Element {
    let p = theme.palette;
    let mut press = use_signal(|| Transition::settled(1.0, Transition::PRESS_MS, Easing::Linear));
    let motion = {
        let press = press.read();
        let animating = follows_clock(glitch, &press, *clock.peek());
        let now = if animating { clock() } else { *clock.peek() };
        let jitter = glitch.then(|| GlitchJitter::new(GLITCH_INTENSITY));
        button_motion_css(press.value_at(now), jitter, now)
    };

    let fill = variant.fill(p);
    let fill = if enabled { fill } else { fill.with_alpha(0.5) };
    let label = text_in(&theme, TextRole::LabelLarge, p.white);
    let code_style = format!(
        "position: absolute; right: 25px; bottom: 2px; background: {}; border: 2px solid {}; \
         padding: 2px 4px; font-size: 9px; font-weight: 700; line-height: 11px; color: {};",
        p.yellow.css(),
        p.border_green.css(),
        p.black.css(),
    );
    let width = if full_width { "width: 100%;" } else { "" };
    let cursor = if enabled { "pointer" } else { "not-allowed" };

    rsx! {
        div { style: "margin: 0 {BUTTON_OVERHANG}px; {width}",
            ShapedBox {
                kind: ShapeKind::Button,
                fill,
                stroke: p.border_green,
                stroke_width: 3.0,
                style: "{motion}",
                button {
                    r#type: "button",
                    disabled: !enabled,
                    style: "display: block; width: 100%; background: transparent; border: none; padding: 35px 75px; cursor: {cursor}; text-transform: uppercase; {label}",
                    onmousedown: move |_| {
                        if enabled {
                            let now = *clock.peek();
                            press.write().retarget(PRESSED_SCALE, now);
                        }
                    },
                    onmouseup: move |_| {
                        let now = *clock.peek();
                        press.write().retarget(1.0, now);
                    },
                    onmouseleave: move |_| {
                        let now = *clock.peek();
                        press.write().retarget(1.0, now);
                    },
                    onclick: move |_| {
                        if enabled {
                            on_click.call(());
                        }
                    },
                    "{text}"
                }
                span { style: "{code_style}", "{code}" }
            }
        }
    }
}
