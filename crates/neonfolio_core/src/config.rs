use std::env;

use crate::error::{NeonError, Result};
use crate::links::{ExternalLink, LinkKind};
use crate::scroll::DEFAULT_VISUAL_OFFSET;
use crate::theme::ThemeMode;

pub const THEME_KEY: &str = "NEONFOLIO_THEME";
pub const FORCE_TOUCH_KEY: &str = "NEONFOLIO_FORCE_TOUCH";
pub const SCROLL_OFFSET_KEY: &str = "NEONFOLIO_SCROLL_OFFSET";

/// The four outbound links behind the action bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Links {
    pub cv: ExternalLink,
    pub github: ExternalLink,
    pub linkedin: ExternalLink,
    pub email: ExternalLink,
}

impl Links {
    pub fn get(&self, kind: LinkKind) -> &ExternalLink {
        match kind {
            LinkKind::Cv => &self.cv,
            LinkKind::GitHub => &self.github,
            LinkKind::LinkedIn => &self.linkedin,
            LinkKind::Email => &self.email,
        }
    }
}

impl Default for Links {
    fn default() -> Self {
        Self {
            cv: ExternalLink::default_for(LinkKind::Cv),
            github: ExternalLink::default_for(LinkKind::GitHub),
            linkedin: ExternalLink::default_for(LinkKind::LinkedIn),
            email: ExternalLink::default_for(LinkKind::Email),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    /// `Some` overrides runtime touch detection.
    pub force_touch: Option<bool>,
    pub scroll_offset: f64,
    pub links: Links,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            force_touch: None,
            scroll_offset: DEFAULT_VISUAL_OFFSET,
            links: Links::default(),
        }
    }
}

/// A resolved configuration plus every value that was rejected on the way.
/// Each rejected key falls back to its own default; the others are kept.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub rejected: Vec<Rejected>,
}

/// A key whose value failed validation.
#[derive(Debug)]
pub struct Rejected {
    pub key: String,
    pub error: NeonError,
}

impl AppConfig {
    pub fn from_env() -> LoadedConfig {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Values fixed at compile time, for targets with no process environment.
    pub fn from_baked() -> LoadedConfig {
        Self::from_lookup(baked)
    }

    /// Build from any key lookup. Missing or blank keys take their default.
    pub fn from_lookup<F>(lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();

        let theme = resolve(&lookup, &mut rejected, THEME_KEY, |raw| raw.parse::<ThemeMode>())
            .unwrap_or(ThemeMode::System);
        let force_touch = resolve(&lookup, &mut rejected, FORCE_TOUCH_KEY, |raw| {
            parse_bool(FORCE_TOUCH_KEY, raw)
        });
        let scroll_offset = resolve(&lookup, &mut rejected, SCROLL_OFFSET_KEY, |raw| {
            parse_offset(SCROLL_OFFSET_KEY, raw)
        })
        .unwrap_or(DEFAULT_VISUAL_OFFSET);

        let mut link = |kind: LinkKind| {
            resolve(&lookup, &mut rejected, kind.env_key(), |raw| ExternalLink::parse(kind, raw))
                .unwrap_or_else(|| ExternalLink::default_for(kind))
        };
        let links = Links {
            cv: link(LinkKind::Cv),
            github: link(LinkKind::GitHub),
            linkedin: link(LinkKind::LinkedIn),
            email: link(LinkKind::Email),
        };

        LoadedConfig {
            config: Self {
                theme,
                force_touch,
                scroll_offset,
                links,
            },
            rejected,
        }
    }
}

/// `None` when `key` is unset or blank, or when `parse` rejects it; the
/// rejection is kept in `rejected`.
fn resolve<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    rejected: &mut Vec<Rejected>,
    key: &str,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Option<T> {
    let raw = lookup(key).filter(|v| !v.trim().is_empty())?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            rejected.push(Rejected {
                key: key.to_string(),
                error: err,
            });
            None
        }
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(NeonError::InvalidBool {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_offset(key: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(NeonError::InvalidNumber {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn baked(key: &str) -> Option<String> {
    let value = match key {
        THEME_KEY => option_env!("NEONFOLIO_THEME"),
        FORCE_TOUCH_KEY => option_env!("NEONFOLIO_FORCE_TOUCH"),
        SCROLL_OFFSET_KEY => option_env!("NEONFOLIO_SCROLL_OFFSET"),
        "NEONFOLIO_CV_URL" => option_env!("NEONFOLIO_CV_URL"),
        "NEONFOLIO_GITHUB_URL" => option_env!("NEONFOLIO_GITHUB_URL"),
        "NEONFOLIO_LINKEDIN_URL" => option_env!("NEONFOLIO_LINKEDIN_URL"),
        "NEONFOLIO_EMAIL" => option_env!("NEONFOLIO_EMAIL"),
        _ => None,
    };
    value.map(str::to_string)
}
