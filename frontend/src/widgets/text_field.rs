use dioxus::prelude::*;
use neonfolio_core::animation::Shake;
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{TextRole, Theme};

use crate::theme::text;
use crate::widgets::shaped::ShapedBox;

/// Input on the angular input-field outline. Errors turn the outline and
/// supporting text red and shake the field.
#[component]
pub fn TextField(
    theme: Theme,
    clock: Signal<f64>,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] password: bool,
    #[props(default = true)] enabled: bool,
    #[props(default)] error: bool,
    supporting_text: Option<String>,
) -> Element {
    let p = theme.palette;
    let ink = if error { p.red } else { p.black };
    let fill = if enabled { p.yellow } else { p.yellow.with_alpha(0.5) };
    let (dx, dy) = if error {
        Shake { intensity: 0.4 }.offset(clock())
    } else {
        (0.0, 0.0)
    };
    let body = text(&theme, TextRole::BodyLarge);
    let spacing = if password { 2 } else { 0 };
    let kind = if password { "password" } else { "text" };
    let placeholder_color = p.black.with_alpha(0.6).css();
    let supporting_color = if error { p.red.css() } else { p.black.with_alpha(0.7).css() };
    let small = text(&theme, TextRole::BodySmall);

    rsx! {
        div { style: "display: flex; flex-direction: column; transform: translate({dx:.2}px, {dy:.2}px);",
            ShapedBox {
                kind: ShapeKind::InputField,
                fill,
                stroke: ink,
                stroke_width: 2.0,
                input {
                    r#type: "{kind}",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    disabled: !enabled,
                    style: "display: block; width: 100%; box-sizing: border-box; background: transparent; border: none; outline: none; \
                            padding: 34px 20px 20px 20px; {body} font-size: 20px; font-weight: 700; letter-spacing: {spacing}px; \
                            color: {ink}; caret-color: {ink}; --placeholder: {placeholder_color};",
                    oninput: move |e| on_input.call(e.value()),
                }
            }
            if let Some(note) = supporting_text {
                span { style: "{small} color: {supporting_color}; padding: 4px 0 0 16px;", "{note}" }
            }
        }
    }
}
