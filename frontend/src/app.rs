use chrono::Utc;
use dioxus::prelude::*;
use neonfolio_core::content::Resume;
use neonfolio_core::layout::PageState;
use neonfolio_core::size_class::{Viewport, WindowSizeClasses};
use neonfolio_core::theme::Theme;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::config::load_config;
use crate::platform::{scroll_to, use_frame_clock, use_system_dark, use_viewport};
use crate::screens::{ResumeScreen, ShowcaseScreen};
use crate::theme::{global_css, SCROLL_CONTAINER_ID};
use crate::widgets::LoadingSpinnerWithText;

static RESUME: Lazy<Resume> = Lazy::new(Resume::embedded);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Resume,
    Showcase,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let today = use_hook(|| Utc::now().date_naive());
    let mut route = use_signal(|| Route::Resume);
    let mut page = use_signal(PageState::default);
    let mut size_classes = use_signal(|| None::<WindowSizeClasses>);
    let system_dark = use_system_dark();
    let viewport = use_viewport();
    let clock = use_frame_clock();

    let force_touch = config.force_touch;
    use_effect(move || {
        let report = viewport();
        let measured = Viewport::new(report.width, report.height);
        if !measured.is_measured() {
            return;
        }
        let classes = measured.classes();
        if *size_classes.peek() != Some(classes) {
            debug!(width = ?classes.width, height = ?classes.height, "size classes changed");
            size_classes.set(Some(classes));
        }
        let mut next = *page.peek();
        if next.on_viewport(classes, report.effective_touch(force_touch)).is_some() {
            page.set(next);
        }
    });

    let is_dark = config.theme.resolve(system_dark());
    use_effect(use_reactive((&is_dark,), |(is_dark,)| {
        info!(dark = is_dark, "theme resolved");
    }));
    let theme = Theme::new(is_dark);
    let css = global_css(&theme);

    let mut go_to = move |next: Route| {
        info!(route = ?next, "route changed");
        route.set(next);
        scroll_to(SCROLL_CONTAINER_ID, 0.0);
    };

    let body = match (route(), size_classes()) {
        (_, None) => rsx! {
            div { style: "height: 100%; display: flex; align-items: center; justify-content: center;",
                LoadingSpinnerWithText { theme, clock, text: "BOOTING", text_color: theme.palette.yellow }
            }
        },
        (Route::Resume, Some(classes)) => rsx! {
            ResumeScreen {
                theme,
                clock,
                config: config.clone(),
                resume: RESUME.clone(),
                today,
                classes,
                page,
                on_showcase: move |_| go_to(Route::Showcase),
            }
        },
        (Route::Showcase, Some(_)) => rsx! {
            ShowcaseScreen { theme, clock, on_back: move |_| go_to(Route::Resume) }
        },
    };

    rsx! {
        style { "{css}" }
        div {
            id: "{SCROLL_CONTAINER_ID}",
            style: "height: 100vh; overflow-y: auto; overflow-x: hidden;",
            {body}
        }
    }
}
