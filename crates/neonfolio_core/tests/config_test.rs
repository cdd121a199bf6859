//! Configuration from a key lookup: defaults, overrides and rejections.

use std::collections::HashMap;

use neonfolio_core::config::AppConfig;
use neonfolio_core::links::{ExternalLink, LinkKind};
use neonfolio_core::theme::ThemeMode;
use neonfolio_core::NeonError;
use pretty_assertions::assert_eq;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let loaded = AppConfig::from_lookup(|_| None);
    assert!(loaded.rejected.is_empty());
    let config = loaded.config;
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.scroll_offset, 80.0);
    assert_eq!(config.theme, ThemeMode::System);
    assert_eq!(config.force_touch, None);
    assert_eq!(config.links.github.as_str(), "https://github.com/example");
}

#[test]
fn blank_values_count_as_missing() {
    let config = AppConfig::from_lookup(lookup(&[("NEONFOLIO_THEME", "  ")])).config;
    assert_eq!(config.theme, ThemeMode::System);
}

#[test]
fn overrides_are_applied() {
    let config = AppConfig::from_lookup(lookup(&[
        ("NEONFOLIO_THEME", "dark"),
        ("NEONFOLIO_FORCE_TOUCH", "true"),
        ("NEONFOLIO_SCROLL_OFFSET", "64"),
        ("NEONFOLIO_GITHUB_URL", "https://github.com/neon"),
        ("NEONFOLIO_EMAIL", "hello@neon.dev"),
    ]))
    .config;
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.force_touch, Some(true));
    assert_eq!(config.scroll_offset, 64.0);
    assert_eq!(config.links.get(LinkKind::GitHub).as_str(), "https://github.com/neon");
    assert_eq!(config.links.email.as_str(), "mailto:hello@neon.dev");
    assert!(config.links.email.is_mail());
}

#[test]
fn bad_values_fall_back_to_their_own_default() {
    let loaded = AppConfig::from_lookup(lookup(&[
        ("NEONFOLIO_SCROLL_OFFSET", "lots"),
        ("NEONFOLIO_FORCE_TOUCH", "sometimes"),
        ("NEONFOLIO_THEME", "sepia"),
    ]));
    assert_eq!(loaded.config, AppConfig::default());

    let keys: Vec<&str> = loaded.rejected.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["NEONFOLIO_THEME", "NEONFOLIO_FORCE_TOUCH", "NEONFOLIO_SCROLL_OFFSET"]);
    assert!(matches!(loaded.rejected[0].error, NeonError::InvalidThemeMode(_)));
    assert!(matches!(loaded.rejected[1].error, NeonError::InvalidBool { .. }));
    assert!(matches!(
        loaded.rejected[2].error,
        NeonError::InvalidNumber { ref key, .. } if key == "NEONFOLIO_SCROLL_OFFSET"
    ));
}

#[test]
fn one_rejected_key_keeps_the_other_overrides() {
    let loaded = AppConfig::from_lookup(lookup(&[
        ("NEONFOLIO_THEME", "purple"),
        ("NEONFOLIO_GITHUB_URL", "https://github.com/realuser"),
        ("NEONFOLIO_CV_URL", "ftp://files.example.com/cv.pdf"),
        ("NEONFOLIO_SCROLL_OFFSET", "96"),
    ]));
    let config = &loaded.config;
    assert_eq!(config.theme, ThemeMode::System);
    assert_eq!(config.links.github.as_str(), "https://github.com/realuser");
    assert_eq!(config.links.cv, ExternalLink::default_for(LinkKind::Cv));
    assert_eq!(config.scroll_offset, 96.0);

    let keys: Vec<&str> = loaded.rejected.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["NEONFOLIO_THEME", "NEONFOLIO_CV_URL"]);
}

#[test]
fn links_only_accept_web_and_mail_schemes() {
    let err = ExternalLink::parse(LinkKind::Cv, "ftp://files.example.com/cv.pdf").unwrap_err();
    assert!(matches!(err, NeonError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"));

    let err = ExternalLink::parse(LinkKind::GitHub, "not a url").unwrap_err();
    assert!(matches!(err, NeonError::InvalidUrl { .. }));

    let link = ExternalLink::parse(LinkKind::LinkedIn, " https://www.linkedin.com/in/neon ").unwrap();
    assert_eq!(link.to_string(), "https://www.linkedin.com/in/neon");
    assert!(!link.is_mail());
}

#[test]
fn every_default_link_is_valid() {
    for kind in LinkKind::ALL {
        let default = ExternalLink::default_for(kind);
        let reparsed = ExternalLink::parse(kind, default.as_str()).unwrap();
        assert_eq!(reparsed.as_str(), default.as_str());
    }
}
