use dioxus::prelude::*;
use neonfolio_core::config::Links;
use neonfolio_core::layout::action_row_layout;
use neonfolio_core::links::LinkKind;
use neonfolio_core::size_class::{LayoutMetrics, SizeClass};
use neonfolio_core::theme::{Tone, Theme, TitleLevel};

use crate::platform::open_external;
use crate::theme::spacing;
use crate::widgets::{Button, ButtonVariant, Paragraph, Section, SectionBorder, Title};

/// Button colour for each outbound link.
pub fn action_variant(kind: LinkKind) -> ButtonVariant {
    match kind {
        LinkKind::Cv => ButtonVariant::Red,
        LinkKind::GitHub => ButtonVariant::Green,
        LinkKind::LinkedIn => ButtonVariant::Blue,
        LinkKind::Email => ButtonVariant::Purple,
    }
}

#[component]
pub fn Hero(
    theme: Theme,
    clock: Signal<f64>,
    name: String,
    headline: String,
    subtitle: String,
    mobile: bool,
) -> Element {
    let padding = if mobile { spacing::MOBILE_PADDING } else { spacing::DESKTOP_PADDING };
    let ink = Tone::Inverse.foreground(theme.palette);

    rsx! {
        Section { theme, tone: Tone::Inverse, border: SectionBorder::Both, dotted: true,
            style: "padding: {padding}; padding-top: 56px; padding-bottom: 64px;",
            div { style: "display: flex; flex-direction: column; gap: 16px;",
                Title { theme, clock, text: name, level: TitleLevel::H1, color: ink, glitching_underline: true, glitch: true }
                Paragraph { theme, clock, text: headline, tone: Tone::Inverse, section: Tone::Inverse }
                Title {
                    theme,
                    clock,
                    text: subtitle,
                    level: TitleLevel::H4,
                    color: theme.palette.neon_green,
                    cursor: false,
                    underline: false,
                }
            }
        }
    }
}

/// CV, GitHub, LinkedIn and e-mail buttons, flowed into 1, 2 or 4 columns.
#[component]
pub fn ActionBar(theme: Theme, clock: Signal<f64>, links: Links, width: SizeClass) -> Element {
    let columns = LayoutMetrics::for_width(width).action_columns;
    let slots = action_row_layout(width, LinkKind::ALL.len());
    let padding = if width == SizeClass::Compact { spacing::MOBILE_PADDING } else { spacing::DESKTOP_PADDING };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat({columns}, minmax(0, 1fr)); column-gap: {spacing::MD}; row-gap: {spacing::SM}; padding: {padding}; padding-top: 48px;",
            for (kind, slot) in LinkKind::ALL.into_iter().zip(slots) {
                ActionButton {
                    key: "{kind:?}",
                    theme,
                    clock,
                    kind,
                    row: slot.row + 1,
                    column: slot.column + 1,
                    offset_y: slot.offset_y,
                    links: links.clone(),
                }
            }
        }
    }
}

#[component]
fn ActionButton(
    theme: Theme,
    clock: Signal<f64>,
    kind: LinkKind,
    row: usize,
    column: usize,
    offset_y: f64,
    links: Links,
) -> Element {
    let link = links.get(kind).clone();
    rsx! {
        div { style: "grid-row: {row}; grid-column: {column}; transform: translateY({offset_y}px);",
            Button {
                theme,
                clock,
                text: kind.label().to_string(),
                code: kind.code().to_string(),
                variant: action_variant(kind),
                full_width: true,
                on_click: move |_| open_external(&link),
            }
        }
    }
}
