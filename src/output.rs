//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity (skill
//! category, project, role, generated file) leads with its positional index
//! and title; details are indented context lines underneath. The check output
//! reads as a content inventory of the portfolio document.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Dana Reyes, Systems Engineer
//!     Source: content/portfolio.json
//!
//! Skills
//! 001 Frontend Development (2 skills)
//!     React 90%
//!     TypeScript 85%
//!
//! Projects
//! 001 Folio [Completed, Featured]
//!     A static portfolio generator.
//!
//! Experience
//! 001 Senior Engineer, Acme Storage (July 2023 - Present)
//!
//! About
//!     2 education entries, 1 certification
//!
//! Warnings
//!     2 experience entries are marked current
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Assets
//!     001 assets/favicon.webp
//! Cache: 1 unchanged, 1 written (2 total)
//! Generated portfolio for Dana Reyes (4 projects, 2 roles) at dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::content::PortfolioDocument;
use crate::generate::{BuildOutcome, BuildReport};
use crate::sections;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Frontend Development (2 skills)
/// 001 Folio
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the content inventory shown by `check`.
///
/// `source` is the human-readable description of where the document came
/// from; `warnings` are the data-quality findings of the loader.
pub fn format_check_output(doc: &PortfolioDocument, source: &str, warnings: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    let personal = &doc.personal;

    lines.push(format!("{}, {}", personal.name, personal.title));
    lines.push(format!("{}Source: {}", indent(1), source));

    lines.push(String::new());
    lines.push("Skills".to_string());
    for (i, category) in sections::skills(doc).iter().enumerate() {
        let count = plural(category.skills.len(), "skill", "skills");
        lines.push(entity_header(i + 1, category.title, Some(&count)));
        for skill in &category.skills {
            lines.push(format!("{}{} {}%", indent(1), skill.name, skill.level));
        }
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in doc.projects.iter().enumerate() {
        let mut tags = vec![project.status.label()];
        if project.featured {
            tags.push("Featured");
        }
        lines.push(format!(
            "{} [{}]",
            entity_header(i + 1, &project.name, None),
            tags.join(", ")
        ));
        let desc = truncate_desc(project.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("{}{}", indent(1), desc));
        }
    }

    lines.push(String::new());
    lines.push("Experience".to_string());
    for (i, exp) in sections::experience(doc).iter().enumerate() {
        let title = format!("{}, {}", exp.position, exp.company);
        lines.push(entity_header(i + 1, &title, Some(&exp.period)));
    }

    lines.push(String::new());
    lines.push("About".to_string());
    lines.push(format!(
        "{}{}, {}",
        indent(1),
        plural(doc.education.len(), "education entry", "education entries"),
        plural(doc.certifications.len(), "certification", "certifications")
    ));

    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in warnings {
            lines.push(format!("{}{}", indent(1), warning));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(doc: &PortfolioDocument, source: &str, warnings: &[String]) {
    for line in format_check_output(doc, source, warnings) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output: the page written, copied assets, cache summary.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.outcome {
        BuildOutcome::Ready { .. } => lines.push("Home \u{2192} index.html".to_string()),
        BuildOutcome::Failed(reason) => {
            lines.push("Error page \u{2192} index.html".to_string());
            lines.push(format!("{}{}", indent(1), reason));
        }
        BuildOutcome::Pending => lines.push("Loading page \u{2192} index.html".to_string()),
    }

    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for (i, asset) in report.assets.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), entity_header(i + 1, asset, None)));
        }
    }

    lines.push(format!("Cache: {}", report.cache));

    let out = report.output_dir.display();
    match &report.outcome {
        BuildOutcome::Ready {
            name,
            projects,
            experience,
        } => lines.push(format!(
            "Generated portfolio for {} ({}, {}) at {}",
            name,
            plural(*projects, "project", "projects"),
            plural(*experience, "role", "roles"),
            out
        )),
        BuildOutcome::Failed(_) | BuildOutcome::Pending => {
            lines.push(format!("Generated error page at {}", out))
        }
    }

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
