//! Component index: every widget on both section tones, plus the dialog
//! family behind a row of triggers.

use dioxus::prelude::*;
use neonfolio_core::animation::ScanDirection;
use neonfolio_core::content::Step;
use neonfolio_core::theme::{TextRole, Tone, Theme, TitleLevel};
use tracing::info;

use crate::theme::{spacing, text_in};
use crate::widgets::{
    Button, ButtonVariant, Card, Checkbox, ConfirmationDialog, ErrorDialog, Fieldset, FrameStyle, ImageFrame,
    InputDialog, Link, List, ListKind, LoadingDialog, LoadingSpinner, LoadingSpinnerWithText, Paragraph,
    ProgressBar, RadioGroup, Section, SectionBorder, Separator, Steps, SuccessDialog, TextField, Title,
};

/// Rejects handles that are too short or carry anything but letters,
/// digits and dashes. Blank input is left to the submit guard.
pub fn validate_handle(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() < 3 {
        return Some("Handle must be at least 3 characters".to_string());
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Some("Only letters, digits and '-' are allowed".to_string());
    }
    None
}

/// Next demo progress value: quarter steps, wrapping after full.
pub fn advance_progress(progress: f64) -> f64 {
    if progress >= 1.0 {
        0.0
    } else {
        (progress + 0.25).min(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpenDialog {
    Confirmation,
    Input,
    Loading,
    Error,
    Success,
}

const RADIO_OPTIONS: [&str; 3] = ["NETRUNNER", "FIXER", "SOLO"];

#[component]
pub fn ShowcaseScreen(theme: Theme, clock: Signal<f64>, on_back: EventHandler<()>) -> Element {
    let mut dialog = use_signal(|| None::<OpenDialog>);
    let mut progress = use_signal(|| 0.25_f64);
    let mut handle = use_signal(String::new);

    let close = move |_: ()| dialog.set(None);
    let mut open = move |which: OpenDialog| {
        info!(dialog = ?which, "showcase dialog opened");
        dialog.set(Some(which));
    };

    rsx! {
        div { style: "display: flex; flex-direction: column;",
            Section { theme, tone: Tone::Inverse, style: "padding: {spacing::DESKTOP_PADDING}; padding-bottom: 56px;",
                div { style: "display: flex; flex-direction: column; gap: 16px;",
                    Title { theme, clock, text: "COMPONENT INDEX", color: theme.palette.yellow, glitching_underline: true }
                    Link { theme, clock, text: "< BACK TO RESUME", color: theme.palette.border_green, on_click: move |_| on_back.call(()) }
                }
            }
            ShowcaseBody { theme, clock, tone: Tone::Normal, progress: progress() }
            ShowcaseBody { theme, clock, tone: Tone::Inverse, progress: progress() }
            Section { theme, border: SectionBorder::Both, style: "padding: {spacing::DESKTOP_PADDING}; padding-bottom: 72px;",
                div { style: "display: flex; flex-direction: column; gap: 16px;",
                    Title { theme, clock, text: "DIALOGS", level: TitleLevel::H2 }
                    div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 8px;",
                        Button { theme, clock, text: "CONFIRM", variant: ButtonVariant::Red, full_width: true, on_click: move |_| open(OpenDialog::Confirmation) }
                        Button { theme, clock, text: "INPUT", variant: ButtonVariant::Green, full_width: true, on_click: move |_| open(OpenDialog::Input) }
                        Button { theme, clock, text: "LOADING", variant: ButtonVariant::Blue, full_width: true, on_click: move |_| open(OpenDialog::Loading) }
                        Button { theme, clock, text: "ERROR", variant: ButtonVariant::Purple, full_width: true, on_click: move |_| open(OpenDialog::Error) }
                        Button { theme, clock, text: "SUCCESS", variant: ButtonVariant::Green, full_width: true, on_click: move |_| open(OpenDialog::Success) }
                        Button {
                            theme,
                            clock,
                            text: "ADVANCE PROGRESS",
                            variant: ButtonVariant::Blue,
                            code: "P-04",
                            full_width: true,
                            on_click: move |_| {
                                let next = advance_progress(*progress.peek());
                                progress.set(next);
                            },
                        }
                    }
                    if !handle().is_empty() {
                        {
                            let font = text_in(&theme, TextRole::BodyMedium, theme.palette.on_surface);
                            rsx! { span { style: "{font}", "Last handle: {handle}" } }
                        }
                    }
                }
            }
            {match dialog() {
                Some(OpenDialog::Confirmation) => rsx! {
                    ConfirmationDialog {
                        theme,
                        clock,
                        title: "PURGE CACHE",
                        message: "This wipes every cached shard on the node. Continue?",
                        urgent: true,
                        on_confirm: close,
                        on_dismiss: close,
                    }
                },
                Some(OpenDialog::Input) => rsx! {
                    InputDialog {
                        theme,
                        clock,
                        title: "NEW HANDLE",
                        placeholder: "ghost-42",
                        validate: validate_handle as fn(&str) -> Option<String>,
                        on_confirm: move |value: String| {
                            handle.set(value);
                            dialog.set(None);
                        },
                        on_dismiss: close,
                    }
                },
                Some(OpenDialog::Loading) => rsx! {
                    LoadingDialog { theme, clock, message: "Decrypting payload...", progress: progress(), on_dismiss: close }
                },
                Some(OpenDialog::Error) => rsx! {
                    ErrorDialog {
                        theme,
                        clock,
                        title: "UPLINK FAILED",
                        message: "The relay refused the handshake.",
                        details: "ERR 0x1F: certificate chain rejected by relay node 7",
                        action_text: "RETRY",
                        on_action: close,
                        on_dismiss: close,
                    }
                },
                Some(OpenDialog::Success) => rsx! {
                    SuccessDialog { theme, clock, title: "UPLOAD COMPLETE", message: "All shards are in place.", on_dismiss: close }
                },
                None => rsx! {},
            }}
        }
    }
}

/// One pass over the widget set on a section of `tone`.
#[component]
fn ShowcaseBody(theme: Theme, clock: Signal<f64>, tone: Tone, progress: f64) -> Element {
    let p = theme.palette;
    let ink = tone.foreground(p);
    let mut text = use_signal(String::new);
    let mut secret = use_signal(String::new);
    let mut checked = use_signal(|| true);
    let mut role = use_signal(|| RADIO_OPTIONS[0].to_string());
    let tone_name = match tone {
        Tone::Normal => "NORMAL",
        Tone::Inverse => "INVERSE",
    };
    let steps = vec![
        Step { role: "Junior".to_string(), period: "2009".to_string(), current: false },
        Step { role: "Lead".to_string(), period: "2016".to_string(), current: false },
        Step { role: "Principal".to_string(), period: "2021".to_string(), current: true },
    ];
    let heading = format!("{tone_name} TONE");
    let short_text = text().chars().count() < 3 && !text().is_empty();
    let supporting = short_text.then(|| "At least 3 characters".to_string());

    rsx! {
        Section { theme, tone, dotted: true, style: "padding: {spacing::DESKTOP_PADDING}; padding-top: 56px; padding-bottom: 72px;",
            div { style: "display: flex; flex-direction: column; gap: 32px;",
                Title { theme, clock, text: heading, color: ink }
                for level in TitleLevel::ALL {
                    Title { key: "{level:?}", theme, clock, text: format!("{level:?} TITLE"), level, color: ink, cursor: level == TitleLevel::H1 }
                }
                Separator { clock, color: ink }
                Separator { clock, color: ink, glitched: true }

                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 8px;",
                    Button { theme, clock, text: "RED", on_click: |_| {} }
                    Button { theme, clock, text: "GREEN", variant: ButtonVariant::Green, on_click: |_| {} }
                    Button { theme, clock, text: "BLUE", variant: ButtonVariant::Blue, glitch: true, on_click: |_| {} }
                    Button { theme, clock, text: "DISABLED", variant: ButtonVariant::Purple, enabled: false, on_click: |_| {} }
                }

                Paragraph { theme, clock, text: "Plain paragraph on the section colours.", section: tone }
                Paragraph {
                    theme,
                    clock,
                    text: "Inverse paragraph with a vertical scan.",
                    tone: Tone::Inverse,
                    section: tone,
                    scan: ScanDirection::Vertical,
                }
                Link { theme, clock, text: "A GLOWING LINK", color: ink, on_click: |_| {} }

                div { style: "display: flex; flex-direction: column; gap: 16px; max-width: 420px;",
                    TextField {
                        theme,
                        clock,
                        value: text(),
                        placeholder: "Callsign",
                        error: short_text,
                        supporting_text: supporting,
                        on_input: move |value: String| text.set(value),
                    }
                    TextField {
                        theme,
                        clock,
                        value: secret(),
                        placeholder: "Passphrase",
                        password: true,
                        on_input: move |value: String| secret.set(value),
                    }
                }

                Checkbox {
                    theme,
                    clock,
                    checked: checked(),
                    label: "Enable implants",
                    label_color: ink,
                    on_change: move |value: bool| checked.set(value),
                }
                RadioGroup {
                    theme,
                    clock,
                    options: RADIO_OPTIONS.iter().map(|o| o.to_string()).collect::<Vec<_>>(),
                    selected: role(),
                    label_color: ink,
                    on_select: move |value: String| role.set(value),
                }

                Fieldset { theme,
                    List { theme, clock, items: vec!["Cyberdeck".to_string(), "Monowire".to_string(), "Kiroshi optics".to_string()], color: ink }
                }
                Fieldset { theme, border: p.border_green,
                    List {
                        theme,
                        clock,
                        kind: ListKind::Ordered,
                        jitter: true,
                        items: vec!["Jack in".to_string(), "Breach".to_string(), "Extract".to_string()],
                        color: ink,
                    }
                }

                Card { theme, clock, tone: tone.flipped(), scan: true,
                    header: rsx! { Title { theme, clock, text: "CARD", level: TitleLevel::H4, color: tone.flipped().foreground(p), cursor: false } },
                    footer: rsx! { span { "FOOTER BAND" } },
                    Steps { theme, steps: steps.clone(), section: tone.flipped() }
                }
                Steps { theme, steps, section: tone, vertical: true }

                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 24px;",
                    for frame in FrameStyle::ALL {
                        ImageFrame { key: "{frame:?}", theme, clock, frame, dotted: true, scan: frame == FrameStyle::Glowing, label: format!("{frame:?}"),
                            div { style: "height: 120px;" }
                        }
                    }
                }

                div { style: "display: flex; flex-direction: column; gap: 16px; max-width: 420px;",
                    ProgressBar { theme, clock, progress }
                    ProgressBar { theme, clock, progress, glitch: true, color: p.neon_green }
                    div { style: "display: flex; gap: 32px; align-items: center;",
                        LoadingSpinner { theme, clock }
                        LoadingSpinnerWithText { theme, clock, text: "SYNCING", text_color: ink }
                    }
                }
            }
        }
    }
}
