//! Page-level helpers: action button colours and the component index demos.

use neonfolio_core::links::LinkKind;
use neonfolio_frontend::platform::ViewportReport;
use neonfolio_frontend::screens::hero::action_variant;
use neonfolio_frontend::screens::showcase::{advance_progress, validate_handle};
use neonfolio_frontend::widgets::button::ButtonVariant;
use pretty_assertions::assert_eq;

#[test]
fn every_link_gets_its_own_button_colour() {
    let variants: Vec<ButtonVariant> = LinkKind::ALL.into_iter().map(action_variant).collect();
    assert_eq!(
        variants,
        vec![ButtonVariant::Red, ButtonVariant::Green, ButtonVariant::Blue, ButtonVariant::Purple]
    );
}

#[test]
fn handle_validation() {
    assert_eq!(validate_handle(""), None);
    assert_eq!(validate_handle("   "), None);
    assert_eq!(validate_handle("ab"), Some("Handle must be at least 3 characters".to_string()));
    assert_eq!(validate_handle("ghost_42"), Some("Only letters, digits and '-' are allowed".to_string()));
    assert_eq!(validate_handle("ghost-42"), None);
}

#[test]
fn demo_progress_steps_and_wraps() {
    assert_eq!(advance_progress(0.0), 0.25);
    assert_eq!(advance_progress(0.8), 1.0);
    assert_eq!(advance_progress(1.0), 0.0);
}

#[test]
fn forced_touch_overrides_detection() {
    let report = ViewportReport { width: 1024.0, height: 768.0, touch: false };
    assert!(!report.effective_touch(None));
    assert!(report.effective_touch(Some(true)));

    let touch = ViewportReport { touch: true, ..report };
    assert!(touch.effective_touch(None));
    assert!(!touch.effective_touch(Some(false)));
}

#[test]
fn viewport_report_reads_host_json() {
    let report: ViewportReport = serde_json::from_str(r#"{"width": 375, "height": 800}"#).unwrap();
    assert_eq!(report, ViewportReport { width: 375.0, height: 800.0, touch: false });
}
