//! Project filtering.
//!
//! The projects section shows one of four views over the same list. Each
//! mode is a plain predicate; [`apply`] keeps document order and never
//! fails. An empty result is a normal outcome ("No projects found"), not an
//! error.
//!
//! `featured` and the status modes are independent dimensions: a project can
//! match several modes or none but `all`.

use crate::content::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    #[default]
    All,
    Featured,
    Completed,
    InDevelopment,
}

impl FilterMode {
    /// All modes, in the order the filter bar shows them.
    pub const ALL: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Featured,
        FilterMode::Completed,
        FilterMode::InDevelopment,
    ];

    /// Stable key used in markup and config.
    pub fn key(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Featured => "featured",
            FilterMode::Completed => "completed",
            FilterMode::InDevelopment => "in-development",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All Projects",
            FilterMode::Featured => "Featured",
            FilterMode::Completed => "Completed",
            FilterMode::InDevelopment => "In Development",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Featured => project.featured,
            FilterMode::Completed => project.status == ProjectStatus::Completed,
            FilterMode::InDevelopment => project.status == ProjectStatus::InDevelopment,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| format!("unknown filter '{s}'"))
    }
}

/// Projects matching `mode`, in document order.
pub fn apply<'a>(mode: FilterMode, projects: &'a [Project]) -> Vec<&'a Project> {
    projects.iter().filter(|p| mode.matches(p)).collect()
}

/// Selected mode of the projects section.
///
/// Selection holds no history: selecting the current mode again changes
/// nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    mode: FilterMode,
}

impl ProjectFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn select(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        apply(self.mode, projects)
    }
}
