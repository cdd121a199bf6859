//! Width/height bucketing, the isMobile signal and per-class layout metrics.

use neonfolio_core::size_class::{classify, is_mobile, LayoutMetrics, SizeClass, Viewport};
use pretty_assertions::assert_eq;

#[test]
fn width_boundaries_round_up_to_the_larger_class() {
    assert_eq!(SizeClass::for_width(599.9), SizeClass::Compact);
    assert_eq!(SizeClass::for_width(600.0), SizeClass::Medium);
    assert_eq!(SizeClass::for_width(839.9), SizeClass::Medium);
    assert_eq!(SizeClass::for_width(840.0), SizeClass::Expanded);
}

#[test]
fn height_boundaries_round_up_to_the_larger_class() {
    assert_eq!(SizeClass::for_height(479.0), SizeClass::Compact);
    assert_eq!(SizeClass::for_height(480.0), SizeClass::Medium);
    assert_eq!(SizeClass::for_height(899.0), SizeClass::Medium);
    assert_eq!(SizeClass::for_height(900.0), SizeClass::Expanded);
}

#[test]
fn axes_are_classified_independently() {
    let classes = classify(1024.0, 768.0);
    assert_eq!(classes.width, SizeClass::Expanded);
    assert_eq!(classes.height, SizeClass::Medium);

    let classes = classify(375.0, 1200.0);
    assert_eq!(classes.width, SizeClass::Compact);
    assert_eq!(classes.height, SizeClass::Expanded);
}

#[test]
fn growing_width_never_shrinks_the_class() {
    let mut previous = SizeClass::Compact;
    for step in 1..=2000 {
        let class = SizeClass::for_width(step as f64 * 0.75);
        assert!(class >= previous, "class went down at width {}", step as f64 * 0.75);
        previous = class;
    }
    assert_eq!(previous, SizeClass::Expanded);
}

#[test]
fn unmeasured_or_bogus_sizes_are_compact() {
    assert_eq!(SizeClass::for_width(0.0), SizeClass::Compact);
    assert_eq!(SizeClass::for_width(-10.0), SizeClass::Compact);
    assert_eq!(SizeClass::for_width(f64::NAN), SizeClass::Compact);
    assert_eq!(SizeClass::for_height(f64::INFINITY), SizeClass::Expanded);
    assert!(!Viewport::default().is_measured());
}

#[test]
fn compact_width_alone_means_mobile() {
    assert!(is_mobile(classify(375.0, 800.0), false));
}

#[test]
fn touch_alone_means_mobile_even_when_expanded() {
    let classes = classify(1440.0, 1000.0);
    assert!(classes.is_expanded());
    assert!(is_mobile(classes, true));
    assert!(!is_mobile(classes, false));
}

#[test]
fn metrics_follow_the_width_class() {
    let compact = LayoutMetrics::for_width(SizeClass::Compact);
    assert_eq!(compact.action_columns, 1);
    assert_eq!(compact.max_content_width, None);
    assert!(compact.steps_vertical);

    let medium = LayoutMetrics::for_width(SizeClass::Medium);
    assert_eq!(medium.action_columns, 2);
    assert_eq!(medium.max_content_width, Some(720.0));

    let expanded = LayoutMetrics::for_width(SizeClass::Expanded);
    assert_eq!(expanded.action_columns, 4);
    assert_eq!(expanded.max_content_width, Some(800.0));
    assert!(!expanded.steps_vertical);
}

#[test]
fn viewport_classes_match_classify() {
    let viewport = Viewport::new(700.0, 500.0);
    assert!(viewport.is_measured());
    assert_eq!(viewport.classes(), classify(700.0, 500.0));
    assert!(viewport.classes().is_medium());
}
