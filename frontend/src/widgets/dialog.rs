//! Modal dialogs: the generic frame plus confirmation, input, loading,
//! error and success variants built on it.

use dioxus::prelude::*;
use neonfolio_core::shapes::ShapeKind;
use neonfolio_core::theme::{TextRole, Theme};

use crate::theme::text_in;
use crate::widgets::button::{Button, ButtonVariant};
use crate::widgets::effects::{Glitch, ScanLine};
use crate::widgets::progress::{percent_label, LoadingSpinner, ProgressBar};
use crate::widgets::shaped::ShapedBox;
use crate::widgets::text_field::TextField;

/// Validation hook for [`InputDialog`]: `Some(message)` rejects the value.
pub type Validator = fn(&str) -> Option<String>;

/// Error shown under the input, if any.
pub fn input_error(validate: Option<Validator>, value: &str) -> Option<String> {
    validate.and_then(|check| check(value))
}

/// Submit is only offered for a non-blank value that passed validation.
pub fn can_submit(error: Option<&str>, value: &str) -> bool {
    error.is_none() && !value.trim().is_empty()
}

const GLITCH_INTENSITY: f64 = 0.5;

#[component]
pub fn Dialog(
    theme: Theme,
    clock: Signal<f64>,
    on_dismiss: EventHandler<()>,
    title: Option<String>,
    icon: Option<String>,
    #[props(default = true)] dismissible: bool,
    #[props(default)] glitch: bool,
    #[props(default)] scan: bool,
    children: Element,
) -> Element {
    let p = theme.palette;
    let backdrop = p.black.with_alpha(0.6);
    let heading = text_in(&theme, TextRole::TitleMedium, p.yellow);
    let icon_color = p.border_green;
    let ink = p.yellow;

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; padding: 24px; background: {backdrop};",
            onclick: move |_| {
                if dismissible {
                    on_dismiss.call(());
                }
            },
            div {
                style: "width: 100%; max-width: 560px;",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                Glitch { clock, intensity: GLITCH_INTENSITY, active: glitch,
                    ShapedBox {
                        kind: ShapeKind::Card,
                        fill: p.black,
                        stroke: p.border_green,
                        stroke_width: 2.0,
                        clip: true,
                        style: "color: {ink};",
                        div { style: "position: relative; padding: 24px 24px 54px 24px;",
                            if title.is_some() || icon.is_some() {
                                div { style: "display: flex; align-items: center; gap: 12px; padding-bottom: 16px;",
                                    if let Some(icon) = icon {
                                        span { style: "font-size: 24px; line-height: 24px; color: {icon_color};", "{icon}" }
                                    }
                                    if let Some(title) = title {
                                        span { style: "{heading} font-weight: 700;", "{title}" }
                                    }
                                }
                            }
                            {children}
                            if scan {
                                ScanLine { clock, color: p.border_green }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmationDialog(
    theme: Theme,
    clock: Signal<f64>,
    title: String,
    message: String,
    on_confirm: EventHandler<()>,
    on_dismiss: EventHandler<()>,
    #[props(default = "Confirm".to_string())] confirm_text: String,
    #[props(default = "Cancel".to_string())] dismiss_text: String,
    #[props(default = ButtonVariant::Red)] confirm_variant: ButtonVariant,
    #[props(default = ButtonVariant::Blue)] dismiss_variant: ButtonVariant,
    #[props(default)] urgent: bool,
) -> Element {
    let body = text_in(&theme, TextRole::BodyMedium, theme.palette.yellow);
    rsx! {
        Dialog { theme, clock, on_dismiss, title, icon: "⚠", glitch: urgent, scan: urgent,
            p { style: "{body} line-height: 20px; margin: 0 0 24px 0;", "{message}" }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                div { style: "flex: 1;",
                    Button { theme, clock, text: dismiss_text, variant: dismiss_variant, full_width: true, on_click: move |_| on_dismiss.call(()) }
                }
                div { style: "flex: 1;",
                    Button { theme, clock, text: confirm_text, variant: confirm_variant, glitch: urgent, full_width: true, on_click: move |_| on_confirm.call(()) }
                }
            }
        }
    }
}

#[component]
pub fn InputDialog(
    theme: Theme,
    clock: Signal<f64>,
    title: String,
    placeholder: String,
    on_confirm: EventHandler<String>,
    on_dismiss: EventHandler<()>,
    #[props(default)] initial_value: String,
    #[props(default = "Submit".to_string())] confirm_text: String,
    #[props(default = "Cancel".to_string())] dismiss_text: String,
    #[props(default)] password: bool,
    validate: Option<Validator>,
) -> Element {
    let mut value = use_signal(|| initial_value.clone());
    let current = value();
    let error = input_error(validate, &current);
    let enabled = can_submit(error.as_deref(), &current);

    rsx! {
        Dialog { theme, clock, on_dismiss, title, icon: "⌨",
            div { style: "padding-bottom: 16px;",
                TextField {
                    theme,
                    clock,
                    value: current.clone(),
                    placeholder,
                    password,
                    error: error.is_some(),
                    supporting_text: error.clone(),
                    on_input: move |next: String| value.set(next),
                }
            }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                div { style: "flex: 1;",
                    Button { theme, clock, text: dismiss_text, variant: ButtonVariant::Blue, full_width: true, on_click: move |_| on_dismiss.call(()) }
                }
                div { style: "flex: 1;",
                    Button {
                        theme,
                        clock,
                        text: confirm_text,
                        variant: ButtonVariant::Green,
                        enabled,
                        full_width: true,
                        on_click: move |_| on_confirm.call(value.peek().clone()),
                    }
                }
            }
        }
    }
}

#[component]
pub fn LoadingDialog(
    theme: Theme,
    clock: Signal<f64>,
    message: String,
    on_dismiss: Option<EventHandler<()>>,
    progress: Option<f64>,
) -> Element {
    let p = theme.palette;
    let body = text_in(&theme, TextRole::BodyMedium, p.yellow);
    let accent = text_in(&theme, TextRole::BodyMedium, p.border_green);
    let dismissible = on_dismiss.is_some();

    rsx! {
        Dialog {
            theme,
            clock,
            dismissible,
            scan: true,
            on_dismiss: move |_| {
                if let Some(handler) = on_dismiss {
                    handler.call(());
                }
            },
            div { style: "display: flex; flex-direction: column; align-items: center; padding: 16px;",
                div { style: "padding-bottom: 16px;",
                    LoadingSpinner { theme, clock, size: 60.0, color: p.border_green }
                }
                span { style: "{body} text-align: center; padding-bottom: 16px;", "{message}" }
                if let Some(progress) = progress {
                    div { style: "width: 100%;",
                        ProgressBar { theme, clock, progress, color: p.border_green, show_percentage: false }
                    }
                    span { style: "{accent} padding-top: 8px;", "{percent_label(progress)}" }
                }
            }
        }
    }
}

#[component]
pub fn ErrorDialog(
    theme: Theme,
    clock: Signal<f64>,
    title: String,
    message: String,
    on_dismiss: EventHandler<()>,
    #[props(default = "OK".to_string())] action_text: String,
    on_action: Option<EventHandler<()>>,
    details: Option<String>,
) -> Element {
    let p = theme.palette;
    let mut show_details = use_signal(|| false);
    let body = text_in(&theme, TextRole::BodyMedium, p.red);
    let detail_font = text_in(&theme, TextRole::BodySmall, p.yellow.with_alpha(0.8));
    let detail_bg = p.black.with_alpha(0.5);
    let toggle_text = if show_details() { "Hide Details" } else { "Show Details" }.to_string();

    rsx! {
        Dialog { theme, clock, on_dismiss, title, icon: "✖", glitch: true,
            p { style: "{body} line-height: 20px; margin: 0 0 16px 0;", "{message}" }
            if let Some(details) = details {
                div { style: "padding-bottom: 16px;",
                    Button {
                        theme,
                        clock,
                        text: toggle_text,
                        variant: ButtonVariant::Blue,
                        full_width: true,
                        on_click: move |_| show_details.toggle(),
                    }
                }
                if show_details() {
                    pre { style: "{detail_font} background: {detail_bg}; padding: 12px; margin: 0 0 16px 0; white-space: pre-wrap;",
                        "{details}"
                    }
                }
            }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                if let Some(action) = on_action {
                    div { style: "flex: 1;",
                        Button { theme, clock, text: action_text.clone(), variant: ButtonVariant::Red, full_width: true, on_click: move |_| action.call(()) }
                    }
                    div { style: "flex: 1;",
                        Button { theme, clock, text: "Cancel", variant: ButtonVariant::Blue, full_width: true, on_click: move |_| on_dismiss.call(()) }
                    }
                } else {
                    div { style: "flex: 1;",
                        Button { theme, clock, text: action_text.clone(), variant: ButtonVariant::Red, full_width: true, on_click: move |_| on_dismiss.call(()) }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SuccessDialog(
    theme: Theme,
    clock: Signal<f64>,
    title: String,
    message: String,
    on_dismiss: EventHandler<()>,
    #[props(default = "OK".to_string())] action_text: String,
    on_action: Option<EventHandler<()>>,
) -> Element {
    let body = text_in(&theme, TextRole::BodyMedium, theme.palette.green);
    rsx! {
        Dialog { theme, clock, on_dismiss, title, icon: "✔",
            p { style: "{body} line-height: 20px; margin: 0 0 24px 0;", "{message}" }
            div { style: "display: flex; gap: 8px; flex-wrap: wrap;",
                if let Some(action) = on_action {
                    div { style: "flex: 1;",
                        Button { theme, clock, text: "Close", variant: ButtonVariant::Blue, full_width: true, on_click: move |_| on_dismiss.call(()) }
                    }
                    div { style: "flex: 1;",
                        Button { theme, clock, text: action_text.clone(), variant: ButtonVariant::Green, full_width: true, on_click: move |_| action.call(()) }
                    }
                } else {
                    div { style: "flex: 1;",
                        Button { theme, clock, text: action_text.clone(), variant: ButtonVariant::Green, full_width: true, on_click: move |_| on_dismiss.call(()) }
                    }
                }
            }
        }
    }
}
