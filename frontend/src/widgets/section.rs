use dioxus::prelude::*;
use neonfolio_core::shapes::{ShapeKind, SECTION_BORDER_HEIGHT};
use neonfolio_core::theme::{Color, Tone, Theme};

use crate::platform::offset_within;
use crate::theme::SCROLL_CONTAINER_ID;
use crate::widgets::effects::dotted_background_css;
use crate::widgets::shaped::ShapedBox;

/// Edge shape drawn along the bottom of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionBorder {
    #[default]
    Bottom,
    /// Notched bottom plus the raised left flank.
    Both,
}

impl SectionBorder {
    pub fn shape(self) -> ShapeKind {
        match self {
            SectionBorder::Bottom => ShapeKind::SectionBottomBorder,
            SectionBorder::Both => ShapeKind::Card,
        }
    }
}

/// Dot colour of the dotted pattern for a section of `tone`.
pub fn dot_color(theme: &Theme, tone: Tone) -> Color {
    let ink = tone.foreground(theme.palette);
    match tone {
        Tone::Normal => ink.with_alpha(0.26),
        Tone::Inverse => ink.with_alpha(0.13),
    }
}

/// Full-width band with the top notch and a bottom edge in the contrasting
/// colour.
#[component]
pub fn Section(
    theme: Theme,
    #[props(default)] tone: Tone,
    #[props(default)] border: SectionBorder,
    #[props(default)] dotted: bool,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let bg = tone.background(theme.palette);
    let edge = tone.foreground(theme.palette);
    let dots = if dotted {
        dotted_background_css(dot_color(&theme, tone), 1.0, 5.0, (-13.0, -3.0))
    } else {
        String::new()
    };

    rsx! {
        section { style: "position: relative; width: 100%; background-color: {bg}; {dots}",
            ShapedBox {
                kind: ShapeKind::SectionTopDecoration,
                fill: edge,
                style: "position: absolute; left: 0; right: 0; top: 0; height: {SECTION_BORDER_HEIGHT}px;",
            }
            div { style: "position: relative; {style}", {children} }
            ShapedBox {
                kind: border.shape(),
                fill: edge,
                style: "position: absolute; left: 0; right: 0; bottom: 0; height: {SECTION_BORDER_HEIGHT}px;",
            }
        }
    }
}

/// Wrapper that reports its offset inside the scroll container whenever it
/// mounts or changes size, so navigation can find it later.
#[component]
pub fn SectionAnchor(id: String, on_placed: EventHandler<(String, f64)>, children: Element) -> Element {
    let mounted_id = id.clone();
    let resized_id = id.clone();
    rsx! {
        div {
            id: "{id}",
            onmounted: move |_| report_offset(mounted_id.clone(), on_placed),
            onresize: move |_| report_offset(resized_id.clone(), on_placed),
            {children}
        }
    }
}

fn report_offset(id: String, on_placed: EventHandler<(String, f64)>) {
    spawn(async move {
        if let Some(top) = offset_within(SCROLL_CONTAINER_ID, &id).await {
            on_placed.call((id, top));
        }
    });
}
