//! Outbound links (CV, profiles, mail). Validated once at config time so the
//! UI only ever hands well-formed URLs to the platform opener.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NeonError, Result};

pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    Cv,
    GitHub,
    LinkedIn,
    Email,
}

impl LinkKind {
    pub const ALL: [LinkKind; 4] = [LinkKind::Cv, LinkKind::GitHub, LinkKind::LinkedIn, LinkKind::Email];

    pub fn env_key(self) -> &'static str {
        match self {
            LinkKind::Cv => "NEONFOLIO_CV_URL",
            LinkKind::GitHub => "NEONFOLIO_GITHUB_URL",
            LinkKind::LinkedIn => "NEONFOLIO_LINKEDIN_URL",
            LinkKind::Email => "NEONFOLIO_EMAIL",
        }
    }

    pub fn default_target(self) -> &'static str {
        match self {
            LinkKind::Cv => "https://example.com/cv.pdf",
            LinkKind::GitHub => "https://github.com/example",
            LinkKind::LinkedIn => "https://www.linkedin.com/in/example",
            LinkKind::Email => "mailto:contact@example.com",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Cv => "DOWNLOAD CV",
            LinkKind::GitHub => "GITHUB",
            LinkKind::LinkedIn => "LINKEDIN",
            LinkKind::Email => "EMAIL",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LinkKind::Cv => "CV-01",
            LinkKind::GitHub => "GH-02",
            LinkKind::LinkedIn => "LI-03",
            LinkKind::Email => "EM-04",
        }
    }
}

/// A validated `http`, `https` or `mailto` URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub kind: LinkKind,
    href: String,
}

impl ExternalLink {
    /// Parse `raw` for `kind`. A bare address is accepted for email.
    pub fn parse(kind: LinkKind, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let candidate = if kind == LinkKind::Email && !raw.contains(':') && raw.contains('@') {
            format!("mailto:{raw}")
        } else {
            raw.to_string()
        };
        let url = validate_url(kind.env_key(), &candidate)?;
        Ok(Self {
            kind,
            href: url.into(),
        })
    }

    pub fn default_for(kind: LinkKind) -> Self {
        Self {
            kind,
            href: kind.default_target().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.href
    }

    pub fn is_mail(&self) -> bool {
        self.href.starts_with("mailto:")
    }
}

impl fmt::Display for ExternalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

/// Parse `value` and reject anything outside [`ALLOWED_SCHEMES`].
pub fn validate_url(key: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| NeonError::InvalidUrl {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(NeonError::UnsupportedScheme {
            key: key.to_string(),
            scheme: url.scheme().to_string(),
        });
    }
    if url.scheme() != "mailto" && url.host_str().is_none() {
        return Err(NeonError::InvalidUrl {
            key: key.to_string(),
            value: value.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(url)
}
