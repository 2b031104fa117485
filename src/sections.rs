//! Section view models.
//!
//! Each public function here takes the loaded [`PortfolioDocument`] and
//! returns exactly what one section of the page renders. They are pure:
//! no state, no I/O, and nothing here can fail. Optional content that is
//! missing comes out as `None` or an empty list, and the renderer omits
//! the corresponding markup.
//!
//! | Deriver | Reads | Rendered by |
//! |---------|-------|-------------|
//! | [`hero`] | personal, social | hero |
//! | [`about`] | personal, education, certifications | about |
//! | [`skills`] | skills | skills |
//! | [`projects`] | projects | projects (through [`crate::filter`]) |
//! | [`experience`] | experience | experience |
//! | [`contact`] | personal, social | contact **and** footer |
//!
//! Lists keep document order. Experience is shown as authored; nothing is
//! re-sorted by date.

use crate::content::{
    ContentDate, PersonalInfo, PortfolioDocument, Project, SkillCategory, SocialLinks,
};
use crate::icons::Icon;

/// Render a date as `June 2023`, or `Present` for an open end.
pub fn format_month_year(date: Option<ContentDate>) -> String {
    match date {
        Some(d) => d.date().format("%B %Y").to_string(),
        None => "Present".to_string(),
    }
}

/// `start - end` with `Present` for an open end.
pub fn format_period(start: ContentDate, end: Option<ContentDate>) -> String {
    format!(
        "{} - {}",
        format_month_year(Some(start)),
        format_month_year(end)
    )
}

// ============================================================================
// Social links
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    GitHub,
    LinkedIn,
    Twitter,
    Website,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink<'a> {
    pub platform: Platform,
    pub href: &'a str,
}

/// Social links that should be rendered, in a fixed platform order.
pub fn social_links(social: &SocialLinks) -> Vec<SocialLink<'_>> {
    [
        (Platform::GitHub, social.github()),
        (Platform::LinkedIn, social.linkedin()),
        (Platform::Twitter, social.twitter()),
        (Platform::Website, social.website()),
    ]
    .into_iter()
    .filter_map(|(platform, href)| href.map(|href| SocialLink { platform, href }))
    .collect()
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView<'a> {
    pub personal: &'a PersonalInfo,
    pub social: &'a SocialLinks,
}

impl HeroView<'_> {
    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> String {
        format!("{} - {}", self.personal.name, self.personal.title)
    }
}

pub fn hero(doc: &PortfolioDocument) -> HeroView<'_> {
    HeroView {
        personal: &doc.personal,
        social: &doc.social,
    }
}

// ============================================================================
// About
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EducationView<'a> {
    pub degree: &'a str,
    pub school: &'a str,
    pub location: &'a str,
    pub period: String,
    pub gpa: Option<&'a str>,
    pub honors: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationView<'a> {
    pub name: &'a str,
    pub issuer: &'a str,
    pub date: String,
    pub credential_id: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView<'a> {
    pub personal: &'a PersonalInfo,
    /// Empty means: no education card at all.
    pub education: Vec<EducationView<'a>>,
    /// Empty means: no certifications card at all.
    pub certifications: Vec<CertificationView<'a>>,
}

pub fn about(doc: &PortfolioDocument) -> AboutView<'_> {
    let education = doc
        .education
        .iter()
        .map(|edu| EducationView {
            degree: &edu.degree,
            school: &edu.school,
            location: &edu.location,
            period: format_period(edu.start_date, Some(edu.end_date)),
            gpa: edu.gpa.as_deref().filter(|g| !g.trim().is_empty()),
            honors: edu.honors.as_deref().unwrap_or_default(),
        })
        .collect();

    let certifications = doc
        .certifications
        .iter()
        .map(|cert| CertificationView {
            name: &cert.name,
            issuer: &cert.issuer,
            date: format_month_year(Some(cert.date)),
            credential_id: &cert.credential_id,
        })
        .collect();

    AboutView {
        personal: &doc.personal,
        education,
        certifications,
    }
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SkillView<'a> {
    pub name: &'a str,
    /// Clamped to `0..=100`.
    pub level: u8,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategoryView<'a> {
    pub category: SkillCategory,
    pub title: &'static str,
    pub skills: Vec<SkillView<'a>>,
}

pub fn skills(doc: &PortfolioDocument) -> Vec<SkillCategoryView<'_>> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| SkillCategoryView {
            category,
            title: category.title(),
            skills: doc
                .skills
                .get(category)
                .iter()
                .map(|skill| SkillView {
                    name: &skill.name,
                    level: skill.clamped_level(),
                    icon: Icon::resolve(&skill.icon),
                })
                .collect(),
        })
        .collect()
}

// ============================================================================
// Projects
// ============================================================================

pub fn projects(doc: &PortfolioDocument) -> &[Project] {
    &doc.projects
}

// ============================================================================
// Experience
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceView<'a> {
    pub id: &'a str,
    pub position: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub period: String,
    pub current: bool,
    pub description: &'a str,
    pub achievements: &'a [String],
    pub technologies: &'a [String],
}

pub fn experience(doc: &PortfolioDocument) -> Vec<ExperienceView<'_>> {
    doc.experience
        .iter()
        .map(|exp| ExperienceView {
            id: &exp.id,
            position: &exp.position,
            company: &exp.company,
            location: &exp.location,
            period: format_period(exp.start_date, exp.end_date),
            current: exp.current,
            description: &exp.description,
            achievements: &exp.achievements,
            technologies: &exp.technologies,
        })
        .collect()
}

// ============================================================================
// Contact / Footer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMethod<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
    /// `mailto:`/`tel:` link; `None` for plain text.
    pub href: Option<String>,
}

/// Shared by the contact section and the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactView<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub methods: Vec<ContactMethod<'a>>,
    pub social: Vec<SocialLink<'a>>,
}

pub fn contact(doc: &PortfolioDocument) -> ContactView<'_> {
    let p = &doc.personal;
    let mut methods = Vec::new();
    if !p.email.trim().is_empty() {
        methods.push(ContactMethod {
            kind: ContactKind::Email,
            value: &p.email,
            href: Some(format!("mailto:{}", p.email.trim())),
        });
    }
    if !p.phone.trim().is_empty() {
        let dial: String = p
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        methods.push(ContactMethod {
            kind: ContactKind::Phone,
            value: &p.phone,
            href: Some(format!("tel:{dial}")),
        });
    }
    if !p.location.trim().is_empty() {
        methods.push(ContactMethod {
            kind: ContactKind::Location,
            value: &p.location,
            href: None,
        });
    }

    ContactView {
        name: &p.name,
        title: &p.title,
        subtitle: &p.subtitle,
        methods,
        social: social_links(&doc.social),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn present_for_open_end() {
        assert_eq!(format_month_year(None), "Present");
    }

    #[test]
    fn long_month_and_year() {
        assert_eq!(format_month_year(Some(date("2023-06-01"))), "June 2023");
        assert_eq!(format_month_year(Some(date("2019-12-31"))), "December 2019");
    }

    #[test]
    fn period_joins_both_ends() {
        assert_eq!(
            format_period(date("2021-01-15"), Some(date("2023-06-01"))),
            "January 2021 - June 2023"
        );
        assert_eq!(format_period(date("2023-07-01"), None), "July 2023 - Present");
    }

    #[test]
    fn hero_is_a_pass_through() {
        let doc = sample_document();
        let view = hero(&doc);
        assert_eq!(view.personal, &doc.personal);
        assert_eq!(view.social, &doc.social);
        assert_eq!(view.avatar_alt(), "Dana Reyes - Systems Engineer");
    }

    #[test]
    fn social_links_skip_empty() {
        let doc = sample_document();
        let links = social_links(&doc.social);
        let platforms: Vec<Platform> = links.iter().map(|l| l.platform).collect();
        // website is "" in the fixture
        assert_eq!(
            platforms,
            vec![Platform::GitHub, Platform::LinkedIn, Platform::Twitter]
        );
    }

    #[test]
    fn about_keeps_education_order_and_omits_empty_certifications() {
        let mut doc = sample_document();
        doc.certifications.clear();
        let view = about(&doc);

        let degrees: Vec<&str> = view.education.iter().map(|e| e.degree).collect();
        assert_eq!(degrees, vec!["MSc Computer Science", "BSc Informatics"]);
        assert!(view.certifications.is_empty());
    }

    #[test]
    fn about_formats_education_and_optional_fields() {
        let doc = sample_document();
        let view = about(&doc);
        assert_eq!(view.education[0].period, "September 2018 - July 2020");
        assert_eq!(view.education[0].gpa, Some("18/20"));
        assert_eq!(view.education[0].honors, ["Summa Cum Laude".to_string()]);
        assert_eq!(view.education[1].gpa, None);
        assert!(view.education[1].honors.is_empty());
        assert_eq!(view.certifications[0].date, "March 2022");
    }

    #[test]
    fn skills_keep_category_and_item_order() {
        let doc = sample_document();
        let view = skills(&doc);
        let titles: Vec<&str> = view.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Frontend Development",
                "Backend Development",
                "Tools & Platforms"
            ]
        );
        let backend: Vec<&str> = view[1].skills.iter().map(|s| s.name).collect();
        assert_eq!(backend, vec!["Rust", "PostgreSQL"]);
    }

    #[test]
    fn out_of_range_skill_is_clamped_and_unknown_icon_defaults() {
        let mut doc = sample_document();
        doc.skills.backend[0].level = 120.0;
        doc.skills.backend[0].icon = "unknown-key".into();
        doc.skills.tools[0].level = -10.0;

        let view = skills(&doc);
        let rust = &view[1].skills[0];
        assert_eq!(rust.level, 100);
        assert_eq!(rust.icon, Icon::DEFAULT);
        assert_eq!(view[2].skills[0].level, 0);
    }

    #[test]
    fn experience_keeps_document_order() {
        let mut doc = sample_document();
        doc.experience.reverse();
        let view = experience(&doc);
        let ids: Vec<&str> = view.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["initech", "acme"]);
    }

    #[test]
    fn experience_periods_use_present() {
        let doc = sample_document();
        let view = experience(&doc);
        assert_eq!(view[0].period, "July 2023 - Present");
        assert!(view[0].current);
        assert_eq!(view[1].period, "January 2021 - June 2023");
        assert!(view[1].achievements.is_empty());
    }

    #[test]
    fn several_current_roles_render_independently() {
        let mut doc = sample_document();
        doc.experience[1].current = true;
        doc.experience[1].end_date = None;
        let view = experience(&doc);
        assert!(view.iter().all(|e| e.current));
        assert!(view.iter().all(|e| e.period.ends_with("Present")));
    }

    #[test]
    fn contact_methods_and_links() {
        let doc = sample_document();
        let view = contact(&doc);
        let kinds: Vec<ContactKind> = view.methods.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Phone, ContactKind::Location]
        );
        assert_eq!(view.methods[0].href.as_deref(), Some("mailto:dana@example.com"));
        assert_eq!(view.methods[1].href.as_deref(), Some("tel:+3515550100"));
        assert_eq!(view.methods[2].href, None);
        assert_eq!(view.social.len(), 3);
    }

    #[test]
    fn contact_omits_blank_phone() {
        let mut doc = sample_document();
        doc.personal.phone = String::new();
        let view = contact(&doc);
        assert!(view.methods.iter().all(|m| m.kind != ContactKind::Phone));
    }

    #[test]
    fn contact_derivation_is_deterministic() {
        let doc = sample_document();
        assert_eq!(contact(&doc), contact(&doc));
    }
}
