//! Embedded resume parsing and derived copy.

use chrono::NaiveDate;
use neonfolio_core::content::Resume;
use neonfolio_core::theme::{Accent, Tone};
use neonfolio_core::NeonError;
use pretty_assertions::assert_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn embedded_resume_parses() {
    let resume = Resume::embedded();
    assert_ne!(resume, Resume::fallback());
    assert_eq!(resume.name, "VIVIENNE FOSH");
    assert_eq!(resume.intro.stats.len(), 3);
    assert_eq!(resume.intro.stats[0].accent, Accent::Red);
    assert_eq!(resume.skills.len(), 4);
    assert_eq!(resume.skills[1].tone, Tone::Inverse);
    assert_eq!(resume.timeline.len(), 5);
    assert!(resume.timeline[0].current);
    assert_eq!(resume.timeline.iter().filter(|s| s.current).count(), 1);
    assert_eq!(resume.projects.len(), 3);
}

#[test]
fn step_labels_are_two_lines() {
    let resume = Resume::embedded();
    assert_eq!(resume.timeline[1].label(), "Staff Engineer\n2020-2023");
}

#[test]
fn years_count_whole_anniversaries() {
    let resume = Resume::embedded();
    assert_eq!(resume.career_start, date(2009, 6, 1));
    assert_eq!(resume.years_of_experience(date(2024, 5, 31)), 14);
    assert_eq!(resume.years_of_experience(date(2024, 6, 1)), 15);
    assert_eq!(resume.years_of_experience(date(2001, 1, 1)), 0);
    assert_eq!(
        resume.subtitle(date(2024, 7, 1)),
        "Full-Stack Mobile Architect • 15 Years Experience"
    );
    assert_eq!(resume.location_line(), "LOCATION: CHARLOTTESVILLE, VA");
}

#[test]
fn malformed_json_is_a_content_error() {
    let err = Resume::from_json("{ \"name\": 3 }").unwrap_err();
    assert!(matches!(err, NeonError::Content(_)));
}

#[test]
fn optional_lists_default_to_empty() {
    let raw = r#"{
        "name": "N", "headline": "H", "specialty": "S",
        "career_start": "2015-01-01", "location": "L",
        "intro": { "title": "T", "body": "B" },
        "philosophy": { "title": "P", "body": "B" },
        "footer": { "availability": "A", "opt_in_label": "O" }
    }"#;
    let resume = Resume::from_json(raw).unwrap();
    assert!(resume.skills.is_empty());
    assert!(resume.intro.stats.is_empty());
    assert!(resume.projects.is_empty());
}
