//! Resume content. The page copy lives in `data/resume.json`, compiled into
//! the binary and parsed once at startup.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::Result;
use crate::theme::{Accent, Tone};

const EMBEDDED: &str = include_str!("../data/resume.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub headline: String,
    pub specialty: String,
    pub career_start: NaiveDate,
    pub location: String,
    pub intro: Intro,
    #[serde(default)]
    pub skills: Vec<SkillCard>,
    #[serde(default)]
    pub timeline: Vec<Step>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub philosophy: Philosophy,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intro {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub accent: Accent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCard {
    pub title: String,
    pub accent: Accent,
    #[serde(default)]
    pub tone: Tone,
    pub items: Vec<String>,
    #[serde(default)]
    pub jitter: bool,
}

/// One entry in the experience timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub current: bool,
}

impl Step {
    /// Two-line label shown inside the step marker.
    pub fn label(&self) -> String {
        format!("{}\n{}", self.role, self.period)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Short code printed on the frame, e.g. `PRJ-01`.
    pub code: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Philosophy {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub principles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub availability: String,
    pub opt_in_label: String,
}

impl Resume {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The compiled-in resume, or [`Resume::fallback`] if it fails to parse.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(resume) => resume,
            Err(err) => {
                error!(%err, "embedded resume is malformed, using fallback content");
                Self::fallback()
            }
        }
    }

    /// Minimal content that needs no parsing.
    pub fn fallback() -> Self {
        Self {
            name: "NEONFOLIO".to_string(),
            headline: "SOFTWARE ENGINEER".to_string(),
            specialty: "Engineer".to_string(),
            career_start: NaiveDate::from_ymd_opt(2009, 6, 1).unwrap_or_default(),
            location: "REMOTE".to_string(),
            intro: Intro {
                title: "ABOUT".to_string(),
                body: String::new(),
                stats: Vec::new(),
            },
            skills: Vec::new(),
            timeline: Vec::new(),
            projects: Vec::new(),
            philosophy: Philosophy {
                title: "ENGINEERING PHILOSOPHY".to_string(),
                body: String::new(),
                principles: Vec::new(),
            },
            footer: Footer {
                availability: String::new(),
                opt_in_label: "Notify me about opportunities".to_string(),
            },
        }
    }

    /// Whole years since `career_start`, zero if the start lies in the future.
    pub fn years_of_experience(&self, today: NaiveDate) -> u32 {
        let start = self.career_start;
        if today <= start {
            return 0;
        }
        let mut years = today.year() - start.year();
        if (today.month(), today.day()) < (start.month(), start.day()) {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }

    pub fn subtitle(&self, today: NaiveDate) -> String {
        format!(
            "{} • {} Years Experience",
            self.specialty,
            self.years_of_experience(today)
        )
    }

    pub fn location_line(&self) -> String {
        format!("LOCATION: {}", self.location)
    }
}
