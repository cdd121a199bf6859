//! Host glue: viewport and touch, colour scheme, frame clock, the scroll
//! container and outbound links. Browser-side work goes through
//! `document::eval`; failures are logged and swallowed.

use dioxus::prelude::*;
use neonfolio_core::links::ExternalLink;
use serde::Deserialize;
use tracing::{debug, warn};

/// What the host reports on load and on every resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct ViewportReport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub touch: bool,
}

impl ViewportReport {
    /// Touch capability after the configured override.
    pub fn effective_touch(&self, force_touch: Option<bool>) -> bool {
        force_touch.unwrap_or(self.touch)
    }
}

/// Clock publish interval, roughly 30 fps.
pub const FRAME_INTERVAL_MS: f64 = 33.0;

const VIEWPORT_JS: &str = r#"
const report = () => dioxus.send({
    width: window.innerWidth,
    height: window.innerHeight,
    touch: ('ontouchstart' in window)
        || navigator.maxTouchPoints > 0
        || window.matchMedia('(pointer: coarse)').matches,
});
report();
window.addEventListener('resize', report);
await new Promise(() => {});
"#;

const COLOR_SCHEME_JS: &str = r#"
const query = window.matchMedia('(prefers-color-scheme: dark)');
dioxus.send(query.matches);
query.addEventListener('change', (e) => dioxus.send(e.matches));
await new Promise(() => {});
"#;

const FRAME_CLOCK_JS: &str = r#"
const interval = await dioxus.recv();
const start = performance.now();
let last = -Infinity;
const tick = (now) => {
    if (now - last >= interval) {
        last = now;
        dioxus.send(now - start);
    }
    requestAnimationFrame(tick);
};
requestAnimationFrame(tick);
await new Promise(() => {});
"#;

/// Live viewport size and touch capability.
pub fn use_viewport() -> Signal<ViewportReport> {
    let mut report = use_signal(ViewportReport::default);
    use_future(move || async move {
        let mut eval = document::eval(VIEWPORT_JS);
        loop {
            match eval.recv::<ViewportReport>().await {
                Ok(next) => {
                    if *report.peek() != next {
                        report.set(next);
                    }
                }
                Err(err) => {
                    warn!(error = ?err, "viewport listener stopped");
                    break;
                }
            }
        }
    });
    report
}

/// Whether the host prefers a dark colour scheme. Seeded from the OS on
/// native, then kept live by the `prefers-color-scheme` media query.
pub fn use_system_dark() -> Signal<bool> {
    let mut dark = use_signal(os_prefers_dark);
    use_future(move || async move {
        let mut eval = document::eval(COLOR_SCHEME_JS);
        while let Ok(next) = eval.recv::<bool>().await {
            if *dark.peek() != next {
                debug!(dark = next, "colour scheme changed");
                dark.set(next);
            }
        }
    });
    dark
}

#[cfg(not(target_arch = "wasm32"))]
fn os_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

#[cfg(target_arch = "wasm32")]
fn os_prefers_dark() -> bool {
    false
}

/// Milliseconds since the page mounted, advanced from `requestAnimationFrame`.
/// Every waveform samples this one signal.
pub fn use_frame_clock() -> Signal<f64> {
    let mut clock = use_signal(|| 0.0_f64);
    use_future(move || async move {
        let mut eval = document::eval(FRAME_CLOCK_JS);
        if let Err(err) = eval.send(FRAME_INTERVAL_MS) {
            warn!(error = ?err, "frame clock did not start");
            return;
        }
        while let Ok(elapsed) = eval.recv::<f64>().await {
            clock.set(elapsed);
        }
        debug!("frame clock stopped");
    });
    clock
}

/// JSON-quoted string literal for splicing into a script.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

/// Largest `scrollTop` the container can take, or `None` if it is not mounted.
pub async fn max_scroll(container_id: &str) -> Option<f64> {
    let script = format!(
        "const c = document.getElementById({id}); return c ? c.scrollHeight - c.clientHeight : null;",
        id = js_string(container_id),
    );
    match document::eval(&script).join::<Option<f64>>().await {
        Ok(value) => value,
        Err(err) => {
            warn!(error = ?err, container = container_id, "could not measure scroll range");
            None
        }
    }
}

/// Top of `element_id` in the scroll coordinates of `container_id`.
pub async fn offset_within(container_id: &str, element_id: &str) -> Option<f64> {
    let script = format!(
        r#"const c = document.getElementById({c});
const e = document.getElementById({e});
if (!c || !e) return null;
return e.getBoundingClientRect().top - c.getBoundingClientRect().top + c.scrollTop;"#,
        c = js_string(container_id),
        e = js_string(element_id),
    );
    match document::eval(&script).join::<Option<f64>>().await {
        Ok(value) => value,
        Err(err) => {
            debug!(error = ?err, element = element_id, "section offset unavailable");
            None
        }
    }
}

/// Smooth-scroll the container. Fire and forget.
pub fn scroll_to(container_id: &str, top: f64) {
    let script = format!(
        "const c = document.getElementById({id}); if (c) c.scrollTo({{ top: {top}, behavior: 'smooth' }});",
        id = js_string(container_id),
    );
    let _ = document::eval(&script);
}

/// Hand the link to the platform's default handler.
pub fn open_external(link: &ExternalLink) {
    debug!(kind = ?link.kind, target = link.as_str(), "opening external link");
    open_with_host(link);
}

#[cfg(not(target_arch = "wasm32"))]
fn open_with_host(link: &ExternalLink) {
    if let Err(err) = open::that(link.as_str()) {
        warn!(error = %err, target = link.as_str(), "failed to open link");
    }
}

#[cfg(target_arch = "wasm32")]
fn open_with_host(link: &ExternalLink) {
    let target = js_string(link.as_str());
    let script = if link.is_mail() {
        format!("window.location.href = {target};")
    } else {
        format!("window.open({target}, '_blank', 'noopener');")
    };
    let href = link.as_str().to_string();
    spawn(async move {
        if let Err(err) = document::eval(&script).join::<serde_json::Value>().await {
            warn!(error = ?err, target = %href, "failed to open link");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
        assert_eq!(js_string("neonfolio-scroll"), "\"neonfolio-scroll\"");
    }
}
