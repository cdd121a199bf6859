use dioxus::prelude::*;
use neonfolio_core::theme::{Color, Theme};

/// Square 3px frame around a small group, purple unless told otherwise.
#[component]
pub fn Fieldset(
    theme: Theme,
    border: Option<Color>,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    let border = border.unwrap_or(theme.palette.purple);
    rsx! {
        div { style: "border: 3px solid {border}; padding: 16px; display: flex; flex-direction: column; {style}",
            {children}
        }
    }
}
