//! HTML site generation.
//!
//! Takes a settled [`Page`] and renders it to a single static `index.html`,
//! then copies the content directory's assets alongside it.
//!
//! ## What gets rendered
//!
//! The page view decides the document:
//!
//! - **Loading**: a bare "Loading portfolio..." placeholder
//! - **Error**: a dedicated error surface, never a half-populated page
//! - **Ready**: navigation, then `#hero`, `#about`, `#skills`, `#projects`,
//!   `#experience`, `#contact`, then the footer
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html            # The portfolio
//! ├── assets/               # Copied verbatim from <content>/assets/
//! │   ├── avatar.png
//! │   └── favicon.webp
//! └── .folio-cache.json     # Output cache manifest
//! ```
//!
//! ## Interactive parts without a framework
//!
//! - **Project filter**: one radio input per mode precedes the filter bar and
//!   the card grid. The stylesheet hides cards that don't match the checked
//!   mode using their `data-featured`/`data-status` attributes. Modes whose
//!   result is empty get a "No projects found" element, shown only while that
//!   mode is checked.
//! - **Reveal**: animated sections are rendered in their latch's current
//!   state with the data-driven targets in `data-target`/`data-delay`.
//!   `static/reveal.js` fires each section once at the configured threshold.
//!   A `<noscript>` rule shows everything when scripting is off.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/reveal.js`: One-shot reveal on scroll
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::cache::{self, CacheManifest, CacheStats};
use crate::config::{self, SiteConfig};
use crate::content::{PortfolioDocument, Project};
use crate::filter::{self, FilterMode};
use crate::loader::ContentSource;
use crate::metadata::DocumentHead;
use crate::page::{Page, PageView};
use crate::reveal::{RevealLatch, stagger_target_ms};
use crate::sections::{
    self, AboutView, ContactView, ExperienceView, HeroView, SkillCategoryView, SocialLink,
};
use crate::types::SectionId;
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/reveal.js");

/// Shown to visitors without scripting: every gated value at its target.
const NOSCRIPT_CSS: &str = "[data-reveal] [data-reveal-item] { opacity: 1; transform: none; } \
.skill-bar-fill { width: var(--target) !important; }";

const EMPTY_PROJECTS: &str = "No projects found";

// ============================================================================
// Build
// ============================================================================

/// How a build ended, as far as the page is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Ready {
        name: String,
        projects: usize,
        experience: usize,
    },
    Failed(String),
    /// The load never settled; the placeholder was written.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub outcome: BuildOutcome,
    /// Asset paths relative to the output directory, in walk order.
    pub assets: Vec<String>,
    pub cache: CacheStats,
}

impl BuildReport {
    pub fn is_failed(&self) -> bool {
        !matches!(self.outcome, BuildOutcome::Ready { .. })
    }
}

/// Load, compose and write the site.
///
/// A failed load is not an error here: the error page is written and the
/// outcome says so. Only I/O problems are errors.
pub fn build(
    config: &SiteConfig,
    source: &dyn ContentSource,
    content_dir: &Path,
    output_dir: &Path,
    use_cache: bool,
) -> Result<BuildReport, GenerateError> {
    let mut page = Page::new(config);
    page.start(source);
    page.run_until_idle();

    fs::create_dir_all(output_dir)?;
    let mut manifest = if use_cache {
        CacheManifest::load(output_dir)
    } else {
        CacheManifest::empty()
    };
    let mut stats = CacheStats::default();

    let html = render_page(&page, config).into_string();
    let written =
        cache::write_if_changed(&mut manifest, &mut stats, output_dir, "index.html", html.as_bytes())?;
    debug!(written, "index.html");

    let assets = copy_assets(
        &content_dir.join(&config.assets_dir),
        &config.assets_dir,
        output_dir,
        &mut manifest,
        &mut stats,
    )?;

    manifest.save(output_dir)?;

    let outcome = match page.view() {
        PageView::Ready(doc) => BuildOutcome::Ready {
            name: doc.personal.name.clone(),
            projects: doc.projects.len(),
            experience: doc.experience.len(),
        },
        PageView::Error(reason) => BuildOutcome::Failed(reason.to_string()),
        PageView::Loading => BuildOutcome::Pending,
    };
    info!(output = %output_dir.display(), %stats, "site generated");

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        outcome,
        assets,
        cache: stats,
    })
}

/// Copy every file under `assets_dir` to `output_dir/<prefix>/`.
fn copy_assets(
    assets_dir: &Path,
    prefix: &str,
    output_dir: &Path,
    manifest: &mut CacheManifest,
    stats: &mut CacheStats,
) -> Result<Vec<String>, GenerateError> {
    if !assets_dir.is_dir() {
        debug!(path = %assets_dir.display(), "no assets directory, skipping");
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let rel_path = Path::new(prefix)
            .join(relative)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let bytes = fs::read(entry.path())?;
        cache::write_if_changed(manifest, stats, output_dir, &rel_path, &bytes)?;
        copied.push(rel_path);
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Stylesheet with colors from config prepended.
fn page_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Renders the base HTML document structure
fn base_document(
    head: &DocumentHead,
    lang: &str,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                (head.render())
                style { (PreEscaped(css)) }
                noscript { style { (PreEscaped(NOSCRIPT_CSS)) } }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Class list for an animated section.
fn reveal_class(base: &str, latch: &RevealLatch) -> String {
    if latch.is_revealed() {
        format!("{base} is-revealed")
    } else {
        base.to_string()
    }
}

/// Inline transition delay, only once the latch has fired.
fn delay_style(latch: &RevealLatch, index: usize, step_ms: u32) -> Option<String> {
    latch
        .is_revealed()
        .then(|| format!("transition-delay: {}ms", latch.stagger_delay_ms(index, step_ms)))
}

fn social_list(links: &[SocialLink<'_>]) -> Markup {
    html! {
        ul.social-links {
            @for link in links {
                li {
                    a href=(link.href) target="_blank" rel="noopener noreferrer" aria-label=(link.platform.label()) {
                        (link.platform.label())
                    }
                }
            }
        }
    }
}

/// Renders the top navigation bar
pub fn render_nav(name: &str) -> Markup {
    html! {
        nav.site-nav {
            a.brand href=(SectionId::Hero.href()) { (name) }
            ul {
                @for section in SectionId::NAVIGABLE {
                    li { a href=(section.href()) { (section.label()) } }
                }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

pub fn render_hero(view: &HeroView<'_>) -> Markup {
    let personal = view.personal;
    let links = sections::social_links(view.social);
    html! {
        section.hero id=(SectionId::Hero.anchor()) {
            div.container {
                @if let Some(avatar) = personal.avatar() {
                    img.avatar src=(avatar) alt=(view.avatar_alt());
                }
                h1 { (personal.name) }
                p.title { (personal.title) }
                p.muted { (personal.subtitle) }
                (social_list(&links))
                a.badge.badge-accent href=(SectionId::Contact.href()) { "Get in touch" }
            }
        }
    }
}

pub fn render_about(view: &AboutView<'_>) -> Markup {
    html! {
        section.about id=(SectionId::About.anchor()) {
            div.container {
                h2.section-title { "About Me" }
                div.about-grid {
                    div.card.about-bio {
                        (PreEscaped(markdown_to_html(&view.personal.bio)))
                        p.muted { (view.personal.location) }
                    }
                    @if !view.education.is_empty() {
                        div.card {
                            h3 { "Education" }
                            ul.about-list {
                                @for edu in &view.education {
                                    li {
                                        strong { (edu.degree) }
                                        div { (edu.school) ", " (edu.location) }
                                        div.muted { (edu.period) }
                                        @if let Some(gpa) = edu.gpa {
                                            div { "GPA: " (gpa) }
                                        }
                                        @for honor in edu.honors {
                                            span.badge { (honor) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    @if !view.certifications.is_empty() {
                        div.card {
                            h3 { "Certifications" }
                            ul.about-list {
                                @for cert in &view.certifications {
                                    li {
                                        strong { (cert.name) }
                                        div { (cert.issuer) }
                                        div.muted { (cert.date) }
                                        @if !cert.credential_id.is_empty() {
                                            div.muted { "Credential ID: " (cert.credential_id) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_skills(categories: &[SkillCategoryView<'_>], latch: &RevealLatch, step_ms: u32) -> Markup {
    html! {
        section id=(SectionId::Skills.anchor())
            class=(reveal_class("skills", latch))
            data-reveal=(SectionId::Skills.anchor())
            data-threshold=(latch.threshold()) {
            div.container {
                h2.section-title { "Skills & Expertise" }
                div.skills-grid {
                    @for (i, category) in categories.iter().enumerate() {
                        // Category cards trail the heading by one step.
                        div.card data-reveal-item
                            data-delay=(stagger_target_ms(i + 1, step_ms))
                            style=[delay_style(latch, i + 1, step_ms)] {
                            h3 { (category.title) }
                            @for skill in &category.skills {
                                div.skill {
                                    div.skill-header {
                                        span { (skill.icon.render()) " " (skill.name) }
                                        span.muted { (skill.level) "%" }
                                    }
                                    div.skill-bar {
                                        div.skill-bar-fill
                                            style={ "width: " (latch.bar_width(skill.level)) "%; --target: " (skill.level) "%" }
                                            data-target=(skill.level) {}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_project_card(project: &Project, index: usize, latch: &RevealLatch, step_ms: u32) -> Markup {
    html! {
        article.card.project-card
            data-id=(project.id)
            data-featured=(if project.featured { "true" } else { "false" })
            data-status=(project.status.key())
            data-reveal-item
            data-delay=(stagger_target_ms(index, step_ms))
            style=[delay_style(latch, index, step_ms)] {
            @if !project.image.trim().is_empty() {
                img src=(project.image) alt=(project.name) loading="lazy";
            }
            div.project-badges {
                span.badge { (project.status.label()) }
                @if project.featured {
                    span.badge.badge-accent { "Featured" }
                }
            }
            h3 { (project.name) }
            p.muted { (project.description) }
            div.tech-stack {
                @for tech in &project.tech_stack {
                    span.badge { (tech) }
                }
            }
            div.project-links {
                @if let Some(live) = project.live_url() {
                    a href=(live) target="_blank" rel="noopener noreferrer" { "Live Demo" }
                }
                @if !project.github_url.trim().is_empty() {
                    a href=(project.github_url) target="_blank" rel="noopener noreferrer" { "Code" }
                }
            }
        }
    }
}

pub fn render_projects(
    projects: &[Project],
    selected: FilterMode,
    latch: &RevealLatch,
    step_ms: u32,
) -> Markup {
    html! {
        section id=(SectionId::Projects.anchor())
            class=(reveal_class("projects", latch))
            data-reveal=(SectionId::Projects.anchor())
            data-threshold=(latch.threshold()) {
            div.container {
                h2.section-title { "Featured Projects" }
                @for mode in FilterMode::ALL {
                    input.filter-input type="radio" name="project-filter"
                        id={ "filter-" (mode.key()) } value=(mode.key()) checked[mode == selected];
                }
                div.project-filters role="group" aria-label="Filter projects" {
                    @for mode in FilterMode::ALL {
                        label for={ "filter-" (mode.key()) } { (mode.label()) }
                    }
                }
                div.project-grid {
                    @for (i, project) in projects.iter().enumerate() {
                        (render_project_card(project, i, latch, step_ms))
                    }
                    @for mode in FilterMode::ALL {
                        @if filter::apply(mode, projects).is_empty() {
                            p.project-empty.muted data-filter=(mode.key()) { (EMPTY_PROJECTS) }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_experience(entries: &[ExperienceView<'_>], latch: &RevealLatch, step_ms: u32) -> Markup {
    html! {
        section id=(SectionId::Experience.anchor())
            class=(reveal_class("experience", latch))
            data-reveal=(SectionId::Experience.anchor())
            data-threshold=(latch.threshold()) {
            div.container {
                h2.section-title { "Work Experience" }
                ol.timeline {
                    @for (i, exp) in entries.iter().enumerate() {
                        li.timeline-item.card data-id=(exp.id) data-reveal-item
                            data-delay=(stagger_target_ms(i, step_ms))
                            style=[delay_style(latch, i, step_ms)] {
                            div.timeline-header {
                                h3 { (exp.position) }
                                @if exp.current {
                                    span.badge.badge-accent { "Current" }
                                }
                            }
                            div { (exp.company) }
                            div.muted { (exp.period) " · " (exp.location) }
                            p { (exp.description) }
                            @if !exp.achievements.is_empty() {
                                ul.achievements {
                                    @for achievement in exp.achievements {
                                        li { (achievement) }
                                    }
                                }
                            }
                            @if !exp.technologies.is_empty() {
                                div.tech-stack {
                                    @for tech in exp.technologies {
                                        span.badge { (tech) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn contact_methods(view: &ContactView<'_>) -> Markup {
    html! {
        ul.contact-methods {
            @for method in &view.methods {
                li {
                    span.muted { (method.kind.label()) }
                    br;
                    @match &method.href {
                        Some(href) => {
                            a href=(href) { (method.value) }
                        },
                        None => {
                            span { (method.value) }
                        },
                    }
                }
            }
        }
    }
}

pub fn render_contact(view: &ContactView<'_>) -> Markup {
    html! {
        section.contact id=(SectionId::Contact.anchor()) {
            div.container {
                h2.section-title { "Get In Touch" }
                p.muted { "I'm always open to discussing new opportunities and interesting projects." }
                (contact_methods(view))
                (social_list(&view.social))
            }
        }
    }
}

pub fn render_footer(view: &ContactView<'_>, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-grid {
                    div {
                        strong { (view.name) }
                        p.muted { (view.title) }
                        p.muted { (view.subtitle) }
                    }
                    div {
                        h4 { "Quick Links" }
                        ul {
                            @for section in SectionId::NAVIGABLE {
                                li { a href=(section.href()) { (section.label()) } }
                            }
                        }
                    }
                    div {
                        h4 { "Contact" }
                        (contact_methods(view))
                        (social_list(&view.social))
                    }
                }
                p.muted {
                    "© " (year) " " (view.name) ". All rights reserved."
                    " "
                    a href=(SectionId::Hero.href()) { "Back to top" }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_portfolio(
    doc: &PortfolioDocument,
    page: &Page,
    config: &SiteConfig,
    css: &str,
    year: i32,
) -> Markup {
    let step = config.reveal.stagger_ms;
    let latch = |section| page.reveals().latch(section).copied().unwrap_or_default();
    let contact = sections::contact(doc);

    let content = html! {
        (render_nav(&doc.personal.name))
        main {
            (render_hero(&sections::hero(doc)))
            (render_about(&sections::about(doc)))
            (render_skills(&sections::skills(doc), &latch(SectionId::Skills), step))
            (render_projects(
                sections::projects(doc),
                page.filter().mode(),
                &latch(SectionId::Projects),
                step,
            ))
            (render_experience(&sections::experience(doc), &latch(SectionId::Experience), step))
            (render_contact(&contact))
        }
        (render_footer(&contact, year))
        script { (PreEscaped(JS)) }
    };

    base_document(page.head(), &config.site.lang, css, None, content)
}

fn render_loading(head: &DocumentHead, lang: &str, css: &str) -> Markup {
    let content = html! {
        main.status-page {
            p.muted { "Loading portfolio..." }
        }
    };
    base_document(head, lang, css, Some("loading"), content)
}

fn render_error(head: &DocumentHead, lang: &str, css: &str, reason: &str) -> Markup {
    let content = html! {
        main.status-page {
            div.card {
                h1.error-title { "Error" }
                p { (reason) }
            }
        }
    };
    base_document(head, lang, css, Some("error"), content)
}

/// Render whatever the page currently shows.
pub fn render_page(page: &Page, config: &SiteConfig) -> Markup {
    let css = page_css(config);
    let lang = &config.site.lang;
    match page.view() {
        PageView::Loading => render_loading(page.head(), lang, &css),
        PageView::Error(reason) => render_error(page.head(), lang, &css, reason),
        PageView::Ready(doc) => {
            render_portfolio(doc, page, config, &css, chrono::Local::now().year())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
