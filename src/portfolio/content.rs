use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

static PROFILE_JSON: &str = include_str!("../../content/profile.json");

static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::parse(PROFILE_JSON).expect("Should be able to parse content/profile.json")
});

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Couldn't parse profile: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub period: String,
    pub institution: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub period: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl ExperienceEntry {
    pub fn tech_line(&self) -> String {
        self.tech.join(", ")
    }
}

/// Everything the static sections render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub about: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<String>,
}

impl Profile {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The profile compiled into the crate.
pub fn profile() -> &'static Profile {
    &PROFILE
}
