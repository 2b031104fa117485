//! Page runtime: the composition root.
//!
//! A [`Page`] owns every piece of mutable presentation state (the content
//! loader, the head metadata, the project filter and the section reveal
//! latches) and changes it only by processing [`PageEvent`]s, one at a time,
//! in arrival order:
//!
//! ```text
//! start(source) ──▶ queue: [ContentSettled]
//!                          │
//! run_until_idle() ────────┤  ContentSettled(Ok)  → loader Ready, then head sync
//!                          │  ContentSettled(Err) → loader Failed
//!                          │  Visibility{..}      → section latch (ignored until Ready)
//!                          │  SelectFilter(mode)  → projects filter
//! ```
//!
//! Loading is deferred: `start` only queues the result, so the page is
//! observably pending until the next `run_until_idle`. The head is synced
//! after the ready state is stored and never before, so it always reads the
//! document the page is about to render.
//!
//! Everything runs on the caller's thread. There is no timeout; a page whose
//! load is never delivered stays pending.

use crate::config::{SiteConfig, SiteMeta};
use crate::content::PortfolioDocument;
use crate::filter::{FilterMode, ProjectFilter};
use crate::loader::{ContentLoader, ContentSource, LoadError, LoadStatus};
use crate::metadata::{DocumentHead, HeadElement, MetaKey, sync_metadata};
use crate::reveal::{SectionReveals, VisibilitySignal};
use crate::types::SectionId;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub enum PageEvent {
    ContentSettled(Result<PortfolioDocument, LoadError>),
    Visibility {
        section: SectionId,
        signal: VisibilitySignal,
    },
    SelectFilter(FilterMode),
}

/// What the page shows right now.
#[derive(Debug)]
pub enum PageView<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a Arc<PortfolioDocument>),
}

#[derive(Debug)]
pub struct Page {
    loader: ContentLoader,
    head: DocumentHead,
    filter: ProjectFilter,
    reveals: SectionReveals,
    queue: VecDeque<PageEvent>,
}

/// Head before any content is known, from `[site]`.
pub fn initial_head(site: &SiteMeta) -> DocumentHead {
    let mut head = DocumentHead::new(vec![
        HeadElement::Charset("UTF-8".to_string()),
        HeadElement::meta(
            MetaKey::name("viewport"),
            "width=device-width, initial-scale=1.0",
        ),
        HeadElement::Title(site.title.clone()),
        HeadElement::meta(MetaKey::name("description"), site.description.as_str()),
        HeadElement::meta(MetaKey::property("og:title"), site.title.as_str()),
        HeadElement::meta(MetaKey::property("og:description"), site.description.as_str()),
        HeadElement::meta(MetaKey::property("og:type"), "website"),
        HeadElement::meta(MetaKey::property("og:image"), site.og_image.as_str()),
        HeadElement::meta(MetaKey::name("twitter:card"), site.twitter_card.as_str()),
        HeadElement::meta(MetaKey::name("twitter:image"), site.og_image.as_str()),
    ]);
    if !site.favicon.is_empty() {
        head.push(HeadElement::link("icon", site.favicon.as_str()));
    }
    head
}

impl Page {
    pub fn new(config: &SiteConfig) -> Self {
        let mut reveals = SectionReveals::new(config.reveal.threshold);
        if !config.reveal.enabled {
            reveals.reveal_all();
        }
        Self {
            loader: ContentLoader::new(),
            head: initial_head(&config.site),
            filter: ProjectFilter::new(config.projects.default_filter),
            reveals,
            queue: VecDeque::new(),
        }
    }

    /// Begin loading. The result is delivered on the next [`Page::run_until_idle`].
    pub fn start(&mut self, source: &dyn ContentSource) {
        debug!(source = %source.describe(), "loading portfolio content");
        self.dispatch(PageEvent::ContentSettled(source.fetch()));
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        self.queue.push_back(event);
    }

    /// Process queued events in order. Returns how many were processed.
    pub fn run_until_idle(&mut self) -> usize {
        let mut processed = 0;
        while let Some(event) = self.queue.pop_front() {
            self.handle(event);
            processed += 1;
        }
        processed
    }

    fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::ContentSettled(result) => {
                if !self.loader.settle(result) {
                    return;
                }
                // The ready state is stored above; sync reads from it.
                if let Some(doc) = self.loader.status().document().cloned() {
                    info!(name = %doc.personal.name, "portfolio ready");
                    sync_metadata(&mut self.head, &doc.personal);
                }
            }
            PageEvent::Visibility { section, signal } => {
                if self.loader.status().document().is_none() {
                    debug!(section = section.anchor(), "visibility before content, ignored");
                    return;
                }
                self.reveals.observe(section, signal);
            }
            PageEvent::SelectFilter(mode) => {
                debug!(%mode, "project filter selected");
                self.filter.select(mode);
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        self.loader.status()
    }

    pub fn view(&self) -> PageView<'_> {
        match self.loader.status() {
            LoadStatus::Pending => PageView::Loading,
            LoadStatus::Failed(reason) => PageView::Error(reason),
            LoadStatus::Ready(doc) => PageView::Ready(doc),
        }
    }

    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn reveals(&self) -> &SectionReveals {
        &self.reveals
    }
}
