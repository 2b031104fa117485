//! Skill icon registry.
//!
//! Skills name their icon with a symbolic key (`"database"`, `"git-branch"`).
//! Keys resolve against a fixed table; an unknown key resolves to
//! [`Icon::Code`] instead of failing, so a typo in the document costs an icon,
//! not the page.

use maud::{Markup, PreEscaped, html};

/// Renderable icon handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Code2,
    Zap,
    Palette,
    Layers,
    Server,
    Database,
    HardDrive,
    GitBranch,
    Box,
    Cloud,
    Figma,
}

/// Key → icon. `react` has no glyph of its own and shares `Code`.
const REGISTRY: &[(&str, Icon)] = &[
    ("react", Icon::Code),
    ("code", Icon::Code),
    ("zap", Icon::Zap),
    ("palette", Icon::Palette),
    ("layers", Icon::Layers),
    ("server", Icon::Server),
    ("code2", Icon::Code2),
    ("database", Icon::Database),
    ("hard-drive", Icon::HardDrive),
    ("git-branch", Icon::GitBranch),
    ("box", Icon::Box),
    ("cloud", Icon::Cloud),
    ("figma", Icon::Figma),
];

impl Icon {
    pub const DEFAULT: Icon = Icon::Code;

    /// Resolve a document key. Matching is exact; unknown keys get the default.
    pub fn resolve(key: &str) -> Icon {
        REGISTRY
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::DEFAULT)
    }

    pub fn is_known(key: &str) -> bool {
        REGISTRY.iter().any(|(k, _)| *k == key)
    }

    /// CSS class suffix.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Code2 => "code2",
            Icon::Zap => "zap",
            Icon::Palette => "palette",
            Icon::Layers => "layers",
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::HardDrive => "hard-drive",
            Icon::GitBranch => "git-branch",
            Icon::Box => "box",
            Icon::Cloud => "cloud",
            Icon::Figma => "figma",
        }
    }

    /// Shape elements on a 24x24 stroked grid, drawn after the lucide set.
    fn shapes(self) -> &'static str {
        match self {
            Icon::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            Icon::Code2 => r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#,
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Icon::Palette => concat!(
                r#"<circle cx="13.5" cy="6.5" r=".5"/><circle cx="17.5" cy="10.5" r=".5"/>"#,
                r#"<circle cx="8.5" cy="7.5" r=".5"/><circle cx="6.5" cy="12.5" r=".5"/>"#,
                r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.9 0 1.6-.7 1.6-1.7 0-.4-.2-.8-.4-1.1-.3-.3-.4-.7-.4-1.1a1.6 1.6 0 0 1 1.7-1.7h2c3 0 5.5-2.5 5.5-5.5C22 6 17.5 2 12 2z"/>"#,
            ),
            Icon::Layers => concat!(
                r#"<polygon points="12 2 2 7 12 12 22 7 12 2"/>"#,
                r#"<polyline points="2 17 12 22 22 17"/><polyline points="2 12 12 17 22 12"/>"#,
            ),
            Icon::Server => concat!(
                r#"<rect x="2" y="2" width="20" height="8" rx="2"/>"#,
                r#"<rect x="2" y="14" width="20" height="8" rx="2"/>"#,
                r#"<line x1="6" y1="6" x2="6.01" y2="6"/><line x1="6" y1="18" x2="6.01" y2="18"/>"#,
            ),
            Icon::Database => concat!(
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/>"#,
                r#"<path d="M3 5v14a9 3 0 0 0 18 0V5"/><path d="M3 12a9 3 0 0 0 18 0"/>"#,
            ),
            Icon::HardDrive => concat!(
                r#"<line x1="22" y1="12" x2="2" y2="12"/>"#,
                r#"<path d="M5.45 5.11 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z"/>"#,
                r#"<line x1="6" y1="16" x2="6.01" y2="16"/><line x1="10" y1="16" x2="10.01" y2="16"/>"#,
            ),
            Icon::GitBranch => concat!(
                r#"<line x1="6" y1="3" x2="6" y2="15"/><circle cx="18" cy="6" r="3"/>"#,
                r#"<circle cx="6" cy="18" r="3"/><path d="M18 9a9 9 0 0 1-9 9"/>"#,
            ),
            Icon::Box => concat!(
                r#"<path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/>"#,
                r#"<path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22V12"/>"#,
            ),
            Icon::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
            Icon::Figma => concat!(
                r#"<path d="M5 5.5A3.5 3.5 0 0 1 8.5 2H12v7H8.5A3.5 3.5 0 0 1 5 5.5z"/>"#,
                r#"<path d="M12 2h3.5a3.5 3.5 0 1 1 0 7H12V2z"/>"#,
                r#"<path d="M12 12.5a3.5 3.5 0 1 1 7 0 3.5 3.5 0 1 1-7 0z"/>"#,
                r#"<path d="M5 19.5A3.5 3.5 0 0 1 8.5 16H12v3.5a3.5 3.5 0 1 1-7 0z"/>"#,
                r#"<path d="M5 12.5A3.5 3.5 0 0 1 8.5 9H12v7H8.5A3.5 3.5 0 0 1 5 12.5z"/>"#,
            ),
        }
    }

    /// Inline SVG, stroked in `currentColor` so it follows the text color.
    pub fn render(self) -> Markup {
        html! {
            svg class={ "icon icon-" (self.name()) }
                xmlns="http://www.w3.org/2000/svg"
                width="24" height="24" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round"
                aria-hidden="true" {
                (PreEscaped(self.shapes()))
            }
        }
    }
}
