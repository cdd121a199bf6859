use dioxus::prelude::*;
use neonfolio_core::content::Step;
use neonfolio_core::theme::{Color, ColorPalette, Tone, Theme};

/// Marker colours for a timeline drawn on a section of the given tone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepColors {
    pub circle: Color,
    pub current_circle: Color,
    pub number: Color,
    pub line: Color,
    pub label: Color,
}

impl StepColors {
    pub fn for_section(palette: &ColorPalette, section: Tone) -> Self {
        let ink = section.foreground(palette);
        let paper = section.background(palette);
        match section {
            Tone::Inverse => Self {
                circle: ink,
                current_circle: ink,
                number: paper,
                line: ink,
                label: ink,
            },
            Tone::Normal => Self {
                circle: palette.purple,
                current_circle: ink,
                number: paper,
                line: palette.purple,
                label: ink,
            },
        }
    }

    fn circle_for(&self, step: &Step) -> Color {
        if step.current {
            self.current_circle
        } else {
            self.circle
        }
    }
}

/// Numbered timeline. Horizontal row on wide layouts, vertical list when
/// `vertical` is set.
#[component]
pub fn Steps(
    theme: Theme,
    steps: Vec<Step>,
    #[props(default)] section: Tone,
    #[props(default)] vertical: bool,
) -> Element {
    let colors = StepColors::for_section(theme.palette, section);
    let last = steps.len().saturating_sub(1);

    if vertical {
        rsx! {
            div { style: "display: flex; flex-direction: column; gap: 20px;",
                for (index, step) in steps.into_iter().enumerate() {
                    VerticalStep { key: "{index}", step, number: index + 1, is_last: index == last, colors }
                }
            }
        }
    } else {
        rsx! {
            div { style: "display: flex; flex-direction: row; align-items: flex-end; justify-content: space-between; padding-bottom: 20px;",
                for (index, step) in steps.into_iter().enumerate() {
                    HorizontalStep { key: "{index}", step, number: index + 1, is_last: index == last, colors }
                }
            }
        }
    }
}

#[component]
fn VerticalStep(step: Step, number: usize, is_last: bool, colors: StepColors) -> Element {
    let circle = colors.circle_for(&step);
    let number_color = colors.number;
    let label_color = colors.label;
    let label = step.label();

    rsx! {
        div { style: "position: relative; padding-left: 50px; min-height: 40px;",
            if !is_last {
                div { style: "position: absolute; left: 20px; top: 40px; width: 2px; height: 60px; background: {circle};" }
            }
            div { style: "display: flex; align-items: flex-end;",
                div { style: "width: 40px; height: 40px; margin-left: -50px; margin-right: 10px; border-radius: 50%; background: {circle}; display: flex; align-items: center; justify-content: center; flex-shrink: 0; font-size: 20px; font-weight: 700; color: {number_color};",
                    "{number}"
                }
                span { style: "font-size: 12px; line-height: 12px; color: {label_color}; white-space: pre-line; padding-bottom: 5px;",
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn HorizontalStep(step: Step, number: usize, is_last: bool, colors: StepColors) -> Element {
    let circle = colors.circle_for(&step);
    let line = if step.current { colors.current_circle } else { colors.line };
    let number_color = colors.number;
    let label_color = colors.label;
    let label = step.label();
    let end_pad = if is_last { 0 } else { 20 };

    rsx! {
        div { style: "position: relative; flex: 1 1 0; height: 80px; padding-right: {end_pad}px;",
            span { style: "position: absolute; left: 0; bottom: 32px; padding-right: 20px; font-size: 12px; line-height: 12px; color: {label_color}; white-space: pre-line;",
                "{label}"
            }
            if !is_last {
                div { style: "position: absolute; left: 40px; right: 0; bottom: 0; height: 2px; background: {line};" }
            }
            div { style: "position: absolute; left: 0; bottom: -20px; width: 40px; height: 40px; border-radius: 50%; background: {circle}; display: flex; align-items: center; justify-content: center; font-size: 20px; font-weight: 700; color: {number_color};",
                "{number}"
            }
        }
    }
}
