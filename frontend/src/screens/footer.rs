use dioxus::prelude::*;
use neonfolio_core::animation::ScanDirection;
use neonfolio_core::layout::{NavItem, MENU_HANDLE_HEIGHT};
use neonfolio_core::theme::{Tone, Theme, TitleLevel};
use tracing::info;

use crate::theme::spacing;
use crate::widgets::{Checkbox, Link, Paragraph, Section, SectionAnchor, Title};

#[component]
pub fn PageFooter(
    theme: Theme,
    clock: Signal<f64>,
    location: String,
    availability: String,
    opt_in_label: String,
    mobile: bool,
    on_placed: EventHandler<(String, f64)>,
    on_showcase: EventHandler<()>,
) -> Element {
    let mut opted_in = use_signal(|| false);
    let p = theme.palette;
    let ink = Tone::Inverse.foreground(p);
    let padding = if mobile { spacing::MOBILE_PADDING } else { spacing::DESKTOP_PADDING };
    // Keep the last lines clear of the collapsed menu handle.
    let bottom = if mobile { MENU_HANDLE_HEIGHT + 64.0 } else { 64.0 };

    rsx! {
        SectionAnchor { id: NavItem::Contact.section_id().to_string(), on_placed,
            Section { theme, tone: Tone::Inverse, dotted: true,
                style: "padding: {padding}; padding-top: 56px; padding-bottom: {bottom}px;",
                div { style: "display: flex; flex-direction: column; gap: 24px;",
                    Title { theme, clock, text: location, level: TitleLevel::H4, color: p.neon_green, cursor: false }
                    Paragraph {
                        theme,
                        clock,
                        text: availability,
                        tone: Tone::Inverse,
                        section: Tone::Inverse,
                        scan: ScanDirection::Horizontal,
                        label: "C-07",
                    }
                    Checkbox {
                        theme,
                        clock,
                        checked: opted_in(),
                        label: opt_in_label,
                        label_color: ink,
                        on_change: move |checked: bool| {
                            info!(checked, "opportunity opt-in toggled");
                            opted_in.set(checked);
                        },
                    }
                    Link { theme, clock, text: "COMPONENT INDEX", color: p.border_green, on_click: move |_| on_showcase.call(()) }
                }
            }
        }
    }
}
