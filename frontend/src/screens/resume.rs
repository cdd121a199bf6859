use chrono::NaiveDate;
use dioxus::prelude::*;
use neonfolio_core::config::AppConfig;
use neonfolio_core::content::Resume;
use neonfolio_core::layout::{menu_sheet_transition, NavItem, PageState, ASIDE_TOP_OFFSET};
use neonfolio_core::scroll::SectionPositions;
use neonfolio_core::size_class::{LayoutMetrics, WindowSizeClasses};
use neonfolio_core::theme::Theme;
use tracing::debug;

use crate::platform::{max_scroll, scroll_to};
use crate::screens::content::MainContent;
use crate::screens::footer::PageFooter;
use crate::screens::hero::{ActionBar, Hero};
use crate::screens::navigation::MenuSheet;
use crate::theme::SCROLL_CONTAINER_ID;
use crate::widgets::Aside;

/// The single resume page. Desktop gets the hover aside, mobile the bottom
/// sheet; both navigate by scrolling to the recorded section offset.
#[component]
pub fn ResumeScreen(
    theme: Theme,
    clock: Signal<f64>,
    config: AppConfig,
    resume: Resume,
    today: NaiveDate,
    classes: WindowSizeClasses,
    page: Signal<PageState>,
    on_showcase: EventHandler<()>,
) -> Element {
    let mut positions = use_signal(SectionPositions::new);
    let mut sheet = use_signal(menu_sheet_transition);
    let scroll_offset = config.scroll_offset;

    let state = page();
    let mobile = state.is_mobile();
    let metrics = LayoutMetrics::for_width(classes.width);
    let sheet_target = state.menu_sheet_offset();
    let sheet_offset = {
        let slide = sheet.read();
        let now = *clock.peek();
        if slide.target() != sheet_target {
            sheet_target
        } else if slide.is_finished(now) {
            slide.target()
        } else {
            slide.value_at(clock())
        }
    };

    let mut navigate = move |item: NavItem| {
        page.write().on_navigate();
        let target = page.peek().menu_sheet_offset();
        let now = *clock.peek();
        sheet.write().retarget(target, now);

        let id = item.section_id();
        spawn(async move {
            let Some(max) = max_scroll(SCROLL_CONTAINER_ID).await else {
                return;
            };
            if let Some(top) = positions.peek().scroll_target(id, scroll_offset, max) {
                debug!(section = id, top, "scrolling to section");
                scroll_to(SCROLL_CONTAINER_ID, top);
            }
        });
    };

    let toggle_menu = move |_: ()| {
        if page.write().toggle_menu() {
            let target = page.peek().menu_sheet_offset();
            let now = *clock.peek();
            sheet.write().retarget(target, now);
        }
    };

    let record_position = move |(id, top): (String, f64)| positions.write().record(id, top);

    rsx! {
        div { style: "position: relative; min-height: 100%;",
            if !mobile {
                div { style: "position: fixed; left: 0; top: {ASIDE_TOP_OFFSET}px; z-index: 40;",
                    Aside { theme, clock, on_navigate: move |item| navigate(item) }
                }
            }
            Hero {
                theme,
                clock,
                name: resume.name.clone(),
                headline: resume.headline.clone(),
                subtitle: resume.subtitle(today),
                mobile,
            }
            ActionBar { theme, clock, links: config.links.clone(), width: classes.width }
            MainContent {
                theme,
                clock,
                intro: resume.intro.clone(),
                timeline: resume.timeline.clone(),
                projects: resume.projects.clone(),
                skills: resume.skills.clone(),
                philosophy: resume.philosophy.clone(),
                metrics,
                mobile,
                on_placed: record_position,
            }
            PageFooter {
                theme,
                clock,
                location: resume.location_line(),
                availability: resume.footer.availability.clone(),
                opt_in_label: resume.footer.opt_in_label.clone(),
                mobile,
                on_placed: record_position,
                on_showcase,
            }
            if mobile {
                MenuSheet {
                    theme,
                    expanded: state.is_menu_expanded(),
                    offset: sheet_offset,
                    on_toggle: toggle_menu,
                    on_navigate: move |item| navigate(item),
                }
            }
        }
    }
}
