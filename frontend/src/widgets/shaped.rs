use dioxus::prelude::*;
use neonfolio_core::shapes::{outline, ShapeKind};
use neonfolio_core::theme::Color;

/// Box that paints an angular outline behind its children. The outline is
/// regenerated from the measured border box whenever it resizes. With `clip`
/// the box itself is masked to the outline as well.
#[component]
pub fn ShapedBox(
    kind: ShapeKind,
    fill: Option<Color>,
    stroke: Option<Color>,
    #[props(default = 0.0)] stroke_width: f64,
    #[props(default)] clip: bool,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let mut size = use_signal(|| (0.0_f64, 0.0_f64));
    let (width, height) = size();
    let polygon = outline(kind, width, height);
    let points = polygon.to_svg_points();
    let fill = fill.map_or_else(|| String::from("none"), |c| c.css());
    let stroke = stroke.map_or_else(|| String::from("none"), |c| c.css());
    let mask = if clip && !polygon.is_empty() {
        format!("clip-path: {};", polygon.to_css_clip_path())
    } else {
        String::new()
    };

    rsx! {
        div {
            style: "position: relative; {mask} {style}",
            onresize: move |e| {
                if let Ok(border_box) = e.get_border_box_size() {
                    let next = (border_box.width, border_box.height);
                    if *size.peek() != next {
                        size.set(next);
                    }
                }
            },
            if !polygon.is_empty() {
                svg {
                    style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; overflow: visible; pointer-events: none;",
                    polygon {
                        points: "{points}",
                        fill: "{fill}",
                        stroke: "{stroke}",
                        stroke_width: "{stroke_width}",
                        stroke_linejoin: "miter",
                    }
                }
            }
            div { style: "position: relative; height: 100%;", {children} }
        }
    }
}

/// Fixed-height strip holding just an outline, for separators and borders.
#[component]
pub fn ShapeStrip(
    kind: ShapeKind,
    fill: Color,
    #[props(default = 14.0)] height: f64,
    #[props(default)] style: String,
) -> Element {
    let height = kind.natural_height().unwrap_or(height);
    rsx! {
        ShapedBox {
            kind,
            fill,
            style: "width: 100%; height: {height}px; {style}",
        }
    }
}
