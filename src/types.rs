//! Shared types used by the page runtime and the HTML generator.

use serde::{Deserialize, Serialize};

/// A section of the one-page portfolio.
///
/// Every section renders a container whose `id` is [`SectionId::anchor`].
/// Navigation and footer links target these ids, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Sections with a one-shot reveal animation.
    pub const ANIMATED: [SectionId; 3] =
        [SectionId::Skills, SectionId::Projects, SectionId::Experience];

    /// Sections listed in the navigation bar and footer quick links.
    pub const NAVIGABLE: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// `#about`-style link target.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn navigable_sections_skip_hero() {
        assert!(!SectionId::NAVIGABLE.contains(&SectionId::Hero));
        assert_eq!(SectionId::About.href(), "#about");
    }
}
