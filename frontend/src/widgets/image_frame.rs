use dioxus::prelude::*;
use neonfolio_core::animation::ScanDirection;
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{Color, TextRole, Theme};

use crate::theme::text_in;
use crate::widgets::effects::{dotted_background_css, ScanLine};
use crate::widgets::shaped::ShapedBox;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameStyle {
    #[default]
    Standard,
    Thick,
    Glowing,
    Minimal,
}

impl FrameStyle {
    pub const ALL: [FrameStyle; 4] = [
        FrameStyle::Standard,
        FrameStyle::Thick,
        FrameStyle::Glowing,
        FrameStyle::Minimal,
    ];

    pub fn border_width(self) -> f64 {
        match self {
            FrameStyle::Standard => 2.0,
            FrameStyle::Thick => 4.0,
            FrameStyle::Glowing => 3.0,
            FrameStyle::Minimal => 1.0,
        }
    }

    /// Soft halo for the glowing style; empty otherwise.
    pub fn glow_css(self, border: Color) -> String {
        match self {
            FrameStyle::Glowing => format!(
                "filter: drop-shadow(0 0 {blur}px {halo});",
                blur = self.border_width() * 2.0,
                halo = border.with_alpha(0.3).css(),
            ),
            _ => String::new(),
        }
    }
}

#[component]
pub fn ImageFrame(
    theme: Theme,
    clock: Signal<f64>,
    #[props(default)] frame: FrameStyle,
    border: Option<Color>,
    background: Option<Color>,
    #[props(default)] dotted: bool,
    #[props(default)] scan: bool,
    label: Option<String>,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let p = theme.palette;
    let border = border.unwrap_or(p.border_green);
    let background = background.unwrap_or(p.black);
    let dots = if dotted {
        dotted_background_css(p.yellow.with_alpha(0.3), 1.0, 5.0, (0.0, 0.0))
    } else {
        String::new()
    };
    let glow = frame.glow_css(border);
    let caption = text_in(&theme, TextRole::BodySmall, border);

    rsx! {
        div { style: "display: flex; flex-direction: column; {style}",
            ShapedBox {
                kind: ShapeKind::ImageFrame,
                fill: background,
                stroke: border,
                stroke_width: frame.border_width(),
                style: "flex: 1; {glow}",
                div { style: "position: relative; height: 100%; box-sizing: border-box; padding: 30px 5px 15px 5px; {dots}",
                    {children}
                    if scan {
                        ScanLine { clock, color: border, direction: ScanDirection::Horizontal }
                    }
                }
            }
            if let Some(label) = label {
                span { style: "{caption} font-weight: 500; padding-top: 4px;", "{label}" }
            }
        }
    }
}
