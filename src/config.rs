//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The content
//! document says *what* the portfolio contains; this file says how the site
//! around it behaves: page title, default head tags, animation timing,
//! initial project filter and colors.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml        # Site config (optional)
//! ├── portfolio.json     # Content document
//! └── assets/            # Copied verbatim to the output root
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_file = "portfolio.json"
//! assets_dir = "assets"
//!
//! [site]
//! title = "Portfolio"
//! description = "Personal portfolio"
//! lang = "en"
//! favicon = "/favicon.ico"          # Replaced by personal.favicon when set
//! og_image = "/og-image.png"        # Replaced by personal.ogImage when set
//! twitter_card = "summary_large_image"
//!
//! [reveal]
//! enabled = true                    # false = show everything immediately
//! threshold = 0.3                   # Visible fraction that triggers a reveal
//! stagger_ms = 200                  # Delay between consecutive items
//!
//! [projects]
//! default_filter = "all"            # all | featured | completed | in-development
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f5f6f8"
//! text = "#111827"
//! text_muted = "#6b7280"
//! border = "#e5e7eb"
//! primary = "#4f46e5"
//!
//! [colors.dark]
//! background = "#0b0f19"
//! surface = "#151b2b"
//! text = "#f3f4f6"
//! text_muted = "#9ca3af"
//! border = "#1f2937"
//! primary = "#818cf8"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [reveal]
//! enabled = false
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::filter::FilterMode;
use crate::reveal::{DEFAULT_STAGGER_MS, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// File name of the content document inside the content directory.
    pub content_file: String,
    /// Directory (relative to the content directory) copied to the output root.
    pub assets_dir: String,
    /// Page-level head settings.
    pub site: SiteMeta,
    /// Reveal animation settings.
    pub reveal: RevealConfig,
    /// Projects section settings.
    pub projects: ProjectsConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_file: "portfolio.json".to_string(),
            assets_dir: "assets".to_string(),
            site: SiteMeta::default(),
            reveal: RevealConfig::default(),
            projects: ProjectsConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_file must not be empty".into(),
            ));
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be in (0, 1]".into(),
            ));
        }
        if self.reveal.stagger_ms > 5000 {
            return Err(ConfigError::Validation(
                "reveal.stagger_ms must be at most 5000".into(),
            ));
        }
        Ok(())
    }
}

/// Head defaults. The favicon and social image are placeholders until the
/// content document provides its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
    pub favicon: String,
    pub og_image: String,
    pub twitter_card: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "Personal portfolio".to_string(),
            lang: "en".to_string(),
            favicon: "/favicon.ico".to_string(),
            og_image: "/og-image.png".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// When false, every section starts revealed.
    pub enabled: bool,
    /// Visible fraction of a section that triggers its reveal.
    pub threshold: f64,
    /// Delay between consecutive items, in milliseconds.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: DEFAULT_THRESHOLD,
            stagger_ms: DEFAULT_STAGGER_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Filter selected when the page opens.
    pub default_filter: FilterMode,
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and muted section background.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    /// Accent color: links, badges, skill bars.
    pub primary: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f5f6f8".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            primary: "#4f46e5".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b0f19".to_string(),
            surface: "#151b2b".to_string(),
            text: "#f3f4f6".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#1f2937".to_string(),
            primary: "#818cf8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content directory, on top of the
/// stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio-gen Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Content document, relative to the content directory.
content_file = "portfolio.json"

# Directory copied verbatim to the output root (avatar, favicon, images).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Page head
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
description = "Personal portfolio"
lang = "en"
# Placeholder favicon, replaced by personal.favicon from the document.
favicon = "/favicon.ico"
# Placeholder social preview image, replaced by personal.ogImage.
og_image = "/og-image.png"
twitter_card = "summary_large_image"

# ---------------------------------------------------------------------------
# Reveal animation
# ---------------------------------------------------------------------------
[reveal]
# Set to false to show every section without animation.
enabled = true
# Fraction of a section that must be visible before it reveals (0, 1].
threshold = 0.3
# Delay between consecutive cards, in milliseconds.
stagger_ms = 200

# ---------------------------------------------------------------------------
# Projects
# ---------------------------------------------------------------------------
[projects]
# Filter selected when the page opens:
# "all", "featured", "completed" or "in-development".
default_filter = "all"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f5f6f8"
text = "#111827"
text_muted = "#6b7280"
border = "#e5e7eb"
primary = "#4f46e5"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0f19"
surface = "#151b2b"
text = "#f3f4f6"
text_muted = "#9ca3af"
border = "#1f2937"
primary = "#818cf8"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_vars(&colors.light, "    "),
        dark = scheme_vars(&colors.dark, "        "),
    )
}

fn scheme_vars(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-primary", &scheme.primary),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
