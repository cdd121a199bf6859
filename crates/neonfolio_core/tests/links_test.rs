//! Outbound link validation.

use neonfolio_core::error::NeonError;
use neonfolio_core::links::{validate_url, ExternalLink, LinkKind};
use pretty_assertions::assert_eq;

#[test]
fn bare_address_becomes_mailto() {
    let link = ExternalLink::parse(LinkKind::Email, " me@neon.dev ").unwrap();
    assert_eq!(link.as_str(), "mailto:me@neon.dev");
    assert!(link.is_mail());
}

#[test]
fn https_profile_is_kept() {
    let link = ExternalLink::parse(LinkKind::GitHub, "https://github.com/someone").unwrap();
    assert_eq!(link.to_string(), "https://github.com/someone");
    assert!(!link.is_mail());
}

#[test]
fn foreign_scheme_is_rejected() {
    let err = ExternalLink::parse(LinkKind::Cv, "ftp://files.example.com/cv.pdf").unwrap_err();
    assert!(matches!(err, NeonError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"));
}

#[test]
fn unparseable_url_is_invalid() {
    assert!(matches!(
        validate_url("K", "not a url"),
        Err(NeonError::InvalidUrl { .. })
    ));
}

#[test]
fn defaults_are_valid_links() {
    for kind in LinkKind::ALL {
        let default = ExternalLink::default_for(kind);
        assert!(validate_url(kind.env_key(), default.as_str()).is_ok(), "{kind:?}");
    }
}
