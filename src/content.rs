//! The portfolio content document.
//!
//! Everything the site shows comes from one JSON document, `portfolio.json`.
//! Field names follow the document (camelCase) and are part of the contract:
//! renaming a field breaks every section that reads it.
//!
//! ```json
//! {
//!   "personal":   { "name": "...", "title": "...", "favicon": "/favicon.webp", ... },
//!   "social":     { "github": "https://github.com/...", "linkedin": "" },
//!   "skills":     { "frontend": [...], "backend": [...], "tools": [...] },
//!   "projects":   [ { "id": "p1", "status": "In Development", ... } ],
//!   "experience": [ { "id": "e1", "endDate": null, "current": true, ... } ],
//!   "education":  [ ... ],
//!   "certifications": [ ... ]
//! }
//! ```
//!
//! The types here carry no behavior beyond small accessors. They are never
//! mutated after loading; sections derive their own view models from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The aggregate root: one portfolio, loaded once per build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub social: SocialLinks,
    pub skills: SkillCategories,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    /// Markdown.
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

impl PersonalInfo {
    pub fn avatar(&self) -> Option<&str> {
        present(&self.avatar)
    }

    pub fn favicon(&self) -> Option<&str> {
        present(&self.favicon)
    }

    pub fn og_image(&self) -> Option<&str> {
        present(&self.og_image)
    }
}

/// Social profile URLs. An absent or empty value means "do not render".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn github(&self) -> Option<&str> {
        present(&self.github)
    }

    pub fn linkedin(&self) -> Option<&str> {
        present(&self.linkedin)
    }

    pub fn twitter(&self) -> Option<&str> {
        present(&self.twitter)
    }

    pub fn website(&self) -> Option<&str> {
        present(&self.website)
    }
}

/// Treat `Some("")` and whitespace-only strings the same as `None`.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// A single skill entry.
///
/// `level` is kept exactly as authored (it may be fractional or out of
/// range); sections read it through [`Skill::clamped_level`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: f64,
    pub icon: String,
}

impl Skill {
    /// Level clamped to `0..=100`.
    pub fn clamped_level(&self) -> u8 {
        self.level.clamp(0.0, 100.0).round() as u8
    }

    pub fn level_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.level)
    }
}

/// The three fixed skill buckets. Order inside each bucket is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategories {
    #[serde(default)]
    pub frontend: Vec<Skill>,
    #[serde(default)]
    pub backend: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Skill>,
}

/// Names the three buckets of [`SkillCategories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Tools => "Tools & Platforms",
        }
    }
}

impl SkillCategories {
    pub fn get(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        SkillCategory::ALL.into_iter().flat_map(|c| self.get(c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Development")]
    InDevelopment,
    Planned,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InDevelopment => "In Development",
            ProjectStatus::Planned => "Planned",
        }
    }

    /// Attribute-safe key used in markup (`data-status`).
    pub fn key(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InDevelopment => "in-development",
            ProjectStatus::Planned => "planned",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
    pub status: ProjectStatus,
}

impl Project {
    pub fn live_url(&self) -> Option<&str> {
        present(&self.live_url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: ContentDate,
    /// `None` means the role is ongoing.
    #[serde(default)]
    pub end_date: Option<ContentDate>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: ContentDate,
    pub end_date: ContentDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: ContentDate,
    pub credential_id: String,
}

/// A calendar date as written in the document.
///
/// Accepts `YYYY-MM-DD` and the shorter `YYYY-MM` (first of the month).
/// Anything else fails deserialization, which fails the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentDate(NaiveDate);

impl ContentDate {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for ContentDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for ContentDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
            .map(ContentDate)
            .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
    }
}

impl From<ContentDate> for String {
    fn from(value: ContentDate) -> Self {
        value.0.format("%Y-%m-%d").to_string()
    }
}
