use dioxus::prelude::*;
use neonfolio_core::animation::ScanDirection;
use neonfolio_core::content::{Intro, Philosophy, Project, SkillCard, Step};
use neonfolio_core::layout::NavItem;
use neonfolio_core::size_class::LayoutMetrics;
use neonfolio_core::theme::{TextRole, Tone, Theme, TitleLevel};

use crate::theme::{spacing, text_in};
use crate::widgets::{
    Card, Fieldset, FrameStyle, ImageFrame, List, ListKind, Paragraph, Section, SectionAnchor, Steps, Title,
};

/// The body of the page: intro, experience, projects, skills, philosophy.
/// Each navigable block is wrapped in an anchor that reports its offset.
#[component]
pub fn MainContent(
    theme: Theme,
    clock: Signal<f64>,
    intro: Intro,
    timeline: Vec<Step>,
    projects: Vec<Project>,
    skills: Vec<SkillCard>,
    philosophy: Philosophy,
    metrics: LayoutMetrics,
    mobile: bool,
    on_placed: EventHandler<(String, f64)>,
) -> Element {
    let padding = if mobile { spacing::MOBILE_PADDING } else { spacing::DESKTOP_PADDING };
    let max_width = metrics
        .max_content_width
        .map(|w| format!("max-width: {w}px;"))
        .unwrap_or_default();

    rsx! {
        Section { theme, dotted: true, style: "padding: {padding}; padding-top: 48px; padding-bottom: 72px;",
            div { style: "display: flex; flex-direction: column; gap: 48px; margin: 0 auto; {max_width}",
                SectionAnchor { id: NavItem::About.section_id().to_string(), on_placed,
                    IntroCard { theme, clock, intro }
                }
                SectionAnchor { id: NavItem::Experience.section_id().to_string(), on_placed,
                    Timeline { theme, clock, steps: timeline, vertical: metrics.steps_vertical }
                }
                SectionAnchor { id: NavItem::Projects.section_id().to_string(), on_placed,
                    ProjectGallery { theme, clock, projects }
                }
                SectionAnchor { id: NavItem::Skills.section_id().to_string(), on_placed,
                    SkillGrid { theme, clock, skills }
                }
                PhilosophyCard { theme, clock, philosophy }
            }
        }
    }
}

#[component]
fn IntroCard(theme: Theme, clock: Signal<f64>, intro: Intro) -> Element {
    let p = theme.palette;
    let body = text_in(&theme, TextRole::BodyLarge, p.on_surface);

    rsx! {
        Card { theme, clock, scan: true,
            header: rsx! {
                Title { theme, clock, text: intro.title.clone(), level: TitleLevel::H3, cursor: false }
            },
            p { style: "{body} margin: 0 0 24px 0;", "{intro.body}" }
            div { style: "display: flex; flex-wrap: wrap; gap: 16px;",
                for (i, stat) in intro.stats.iter().enumerate() {
                    {
                        let accent = stat.accent.color(p);
                        let value = text_in(&theme, TextRole::HeadlineMedium, accent);
                        let label = text_in(&theme, TextRole::BodySmall, p.on_surface);
                        rsx! {
                            Fieldset { key: "{i}", theme, border: accent, style: "flex: 1; min-width: 140px; align-items: center;",
                                span { style: "{value}", "{stat.value}" }
                                span { style: "{label}", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Timeline(theme: Theme, clock: Signal<f64>, steps: Vec<Step>, vertical: bool) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 24px;",
            Title { theme, clock, text: "EXPERIENCE", level: TitleLevel::H2 }
            Card { theme, clock, tone: Tone::Inverse,
                Steps { theme, steps, section: Tone::Inverse, vertical }
            }
        }
    }
}

#[component]
fn ProjectGallery(theme: Theme, clock: Signal<f64>, projects: Vec<Project>) -> Element {
    let p = theme.palette;
    let heading = text_in(&theme, TextRole::TitleMedium, p.yellow);
    let body = text_in(&theme, TextRole::BodyMedium, p.yellow);
    let tag = text_in(&theme, TextRole::BodySmall, p.neon_green);

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 24px;",
            Title { theme, clock, text: "PROJECTS", level: TitleLevel::H2 }
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;",
                for (i, project) in projects.iter().enumerate() {
                    ImageFrame {
                        key: "{i}",
                        theme,
                        clock,
                        frame: FrameStyle::ALL[i % FrameStyle::ALL.len()],
                        dotted: true,
                        scan: i == 0,
                        label: project.code.clone(),
                        div { style: "display: flex; flex-direction: column; gap: 12px; padding: 0 12px;",
                            span { style: "{heading} font-weight: 700;", "{project.title}" }
                            span { style: "{body}", "{project.summary}" }
                            div { style: "display: flex; flex-wrap: wrap; gap: 8px;",
                                for tag_name in project.tags.iter() {
                                    span { key: "{tag_name}", style: "{tag} border: 1px solid currentColor; padding: 2px 6px;", "{tag_name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillGrid(theme: Theme, clock: Signal<f64>, skills: Vec<SkillCard>) -> Element {
    let p = theme.palette;
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 24px;",
            Title { theme, clock, text: "TECHNICAL SKILLS", level: TitleLevel::H2 }
            div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px;",
                for (i, skill) in skills.iter().enumerate() {
                    Card { key: "{i}", theme, clock, tone: skill.tone,
                        header: rsx! {
                            Title {
                                theme,
                                clock,
                                text: skill.title.clone(),
                                level: TitleLevel::H4,
                                color: skill.accent.color(p),
                                cursor: false,
                            }
                        },
                        List {
                            theme,
                            clock,
                            items: skill.items.clone(),
                            jitter: skill.jitter,
                            color: skill.tone.foreground(p),
                            font_size: 16.0,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PhilosophyCard(theme: Theme, clock: Signal<f64>, philosophy: Philosophy) -> Element {
    let ink = Tone::Inverse.foreground(theme.palette);
    rsx! {
        Card { theme, clock, tone: Tone::Inverse, scan: true,
            header: rsx! {
                Title { theme, clock, text: philosophy.title.clone(), level: TitleLevel::H3, color: ink, cursor: false }
            },
            div { style: "display: flex; flex-direction: column; gap: 24px;",
                Paragraph {
                    theme,
                    clock,
                    text: philosophy.body.clone(),
                    tone: Tone::Inverse,
                    section: Tone::Inverse,
                    scan: ScanDirection::Vertical,
                }
                List { theme, clock, items: philosophy.principles.clone(), kind: ListKind::Ordered, color: ink, font_size: 16.0 }
            }
        }
    }
}
