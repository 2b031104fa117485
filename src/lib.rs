//! # folio-gen
//!
//! A static site generator for single-page developer portfolios. One JSON
//! document describes the person (profile, skills, projects, experience,
//! education, certifications) and the generator renders it as a single
//! `index.html` with inline CSS and one small script.
//!
//! # Architecture: Load, Compose, Render
//!
//! ```text
//! 1. Load      portfolio.json  →  LoadStatus     (pending → ready | failed, once)
//! 2. Compose   LoadStatus      →  Page           (event queue: filter, reveal, head sync)
//! 3. Render    Page            →  dist/          (Maud HTML + copied assets)
//! ```
//!
//! The content document is read-only once loaded. Everything the page shows
//! is derived from it by pure functions in [`sections`], [`filter`] and
//! [`icons`]. The only mutable presentation state (the load status, the
//! selected project filter, the per-section reveal latches and the document
//! head) is owned by [`page::Page`] and changed only by processing events in
//! order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Typed schema of the portfolio document |
//! | [`loader`] | Content sources and the one-shot load state machine |
//! | [`sections`] | Per-section view models derived from the document |
//! | [`icons`] | Skill icon registry with a default fallback |
//! | [`filter`] | Project filter modes and their predicates |
//! | [`reveal`] | One-way reveal latches for animated sections |
//! | [`metadata`] | Head model and favicon / social image synchronization |
//! | [`page`] | Composition root: owns state, processes events in order |
//! | [`generate`] | Renders the page with Maud and writes the output directory |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`cache`] | Skips rewriting output files whose bytes haven't changed |
//! | [`types`] | Page section identifiers and anchors |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Scripting Only Where It's Needed
//!
//! The project filter is plain HTML and CSS: one radio input per mode and
//! attribute selectors over the cards. The reveal animation is the only part
//! that needs the browser to observe scrolling, and it degrades to a fully
//! visible page when scripting is off.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Interpolation is auto-escaped, so content fields can never
//! inject markup. The one exception is the bio, which is Markdown rendered by
//! `pulldown-cmark`.
//!
//! ## Failure Is a Page, Not a Panic
//!
//! A document that can't be read or parsed produces a dedicated error page
//! ("Failed to load portfolio data") instead of a partial portfolio. Bad data
//! inside a valid document (duplicate ids, out-of-range skill levels, several
//! current roles) is reported by `check` and logged, but never repaired.

pub mod cache;
pub mod config;
pub mod content;
pub mod filter;
pub mod generate;
pub mod icons;
pub mod loader;
pub mod metadata;
pub mod output;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
