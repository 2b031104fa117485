//! Page head metadata and its synchronization with the content document.
//!
//! The page head starts from site configuration: charset, viewport, title,
//! description, a default favicon and default social preview tags. Once the
//! document is loaded, [`sync_metadata`] mirrors two content fields into it:
//!
//! - **Favicon** (`personal.favicon`): every link whose `rel` contains
//!   `icon` is removed, then exactly one `rel="icon"` link and one
//!   `rel="apple-touch-icon"` link are appended, both pointing at the favicon.
//! - **Social preview image** (`personal.ogImage`): the existing
//!   `og:image` and `twitter:image` meta tags get the image as their content.
//!   Missing tags are left missing.
//!
//! An absent field skips its half of the sync. Running the sync again with
//! the same data produces the same head, so reloading never accumulates
//! duplicate icon links. Nothing else in the head is touched.

use crate::content::PersonalInfo;
use maud::{Markup, html};
use tracing::debug;

/// Key of a `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(String),
    /// `<meta property="...">` (Open Graph)
    Property(String),
}

impl MetaKey {
    pub fn name(name: &str) -> Self {
        MetaKey::Name(name.to_string())
    }

    pub fn property(property: &str) -> Self {
        MetaKey::Property(property.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement {
    Charset(String),
    Title(String),
    Meta {
        key: MetaKey,
        content: String,
    },
    Link {
        rel: String,
        href: String,
        mime: Option<String>,
    },
}

impl HeadElement {
    pub fn meta(key: MetaKey, content: impl Into<String>) -> Self {
        HeadElement::Meta {
            key,
            content: content.into(),
        }
    }

    pub fn link(rel: &str, href: impl Into<String>) -> Self {
        HeadElement::Link {
            rel: rel.to_string(),
            href: href.into(),
            mime: None,
        }
    }

    /// True for any link in the icon family (`icon`, `shortcut icon`,
    /// `apple-touch-icon`, `mask-icon`).
    fn is_icon_link(&self) -> bool {
        matches!(self, HeadElement::Link { rel, .. } if rel.contains("icon"))
    }

    fn render(&self) -> Markup {
        match self {
            HeadElement::Charset(charset) => html! { meta charset=(charset); },
            HeadElement::Title(title) => html! { title { (title) } },
            HeadElement::Meta {
                key: MetaKey::Name(name),
                content,
            } => html! { meta name=(name) content=(content); },
            HeadElement::Meta {
                key: MetaKey::Property(property),
                content,
            } => html! { meta property=(property) content=(content); },
            HeadElement::Link { rel, href, mime } => {
                html! { link rel=(rel) type=[mime.as_deref()] href=(href); }
            }
        }
    }
}

/// Ordered model of the page `<head>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    elements: Vec<HeadElement>,
}

impl DocumentHead {
    pub fn new(elements: Vec<HeadElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    pub fn push(&mut self, element: HeadElement) {
        self.elements.push(element);
    }

    /// Hrefs of links whose `rel` is exactly `rel`.
    pub fn links(&self, rel: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                HeadElement::Link { rel: r, href, .. } if r == rel => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of links in the icon family.
    pub fn icon_link_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_icon_link()).count()
    }

    pub fn meta_content(&self, key: &MetaKey) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::Meta { key: k, content } if k == key => Some(content.as_str()),
            _ => None,
        })
    }

    fn set_meta_content(&mut self, key: &MetaKey, value: &str) -> bool {
        let mut found = false;
        for element in &mut self.elements {
            if let HeadElement::Meta { key: k, content } = element
                && k == key
            {
                *content = value.to_string();
                found = true;
            }
        }
        found
    }

    pub fn render(&self) -> Markup {
        html! {
            @for element in &self.elements {
                (element.render())
            }
        }
    }
}

/// MIME type for a favicon, from its extension.
pub fn icon_mime(href: &str) -> Option<&'static str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "webp" => Some("image/webp"),
        "png" => Some("image/png"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

/// Replace every icon link with one favicon and one touch icon.
pub fn replace_favicon(head: &mut DocumentHead, href: &str) {
    head.elements.retain(|e| !e.is_icon_link());
    head.push(HeadElement::Link {
        rel: "icon".to_string(),
        href: href.to_string(),
        mime: icon_mime(href).map(str::to_string),
    });
    head.push(HeadElement::link("apple-touch-icon", href));
}

/// Point the existing Open Graph and Twitter image tags at `url`.
pub fn replace_social_image(head: &mut DocumentHead, url: &str) {
    for key in [MetaKey::property("og:image"), MetaKey::name("twitter:image")] {
        if !head.set_meta_content(&key, url) {
            debug!(?key, "social image tag not present, leaving head unchanged");
        }
    }
}

/// Mirror `personal.favicon` and `personal.ogImage` into the head.
pub fn sync_metadata(head: &mut DocumentHead, personal: &PersonalInfo) {
    if let Some(favicon) = personal.favicon() {
        debug!(favicon, "syncing favicon");
        replace_favicon(head, favicon);
    }
    if let Some(image) = personal.og_image() {
        debug!(image, "syncing social preview image");
        replace_social_image(head, image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn base_head() -> DocumentHead {
        DocumentHead::new(vec![
            HeadElement::Charset("UTF-8".into()),
            HeadElement::Title("Portfolio".into()),
            HeadElement::link("icon", "/favicon.ico"),
            HeadElement::link("shortcut icon", "/favicon.ico"),
            HeadElement::link("stylesheet", "/extra.css"),
            HeadElement::meta(MetaKey::property("og:title"), "Portfolio"),
            HeadElement::meta(MetaKey::property("og:image"), "/default-og.png"),
            HeadElement::meta(MetaKey::name("twitter:card"), "summary_large_image"),
            HeadElement::meta(MetaKey::name("twitter:image"), "/default-og.png"),
        ])
    }

    #[test]
    fn sync_replaces_icons_and_social_image() {
        let doc = sample_document();
        let mut head = base_head();
        sync_metadata(&mut head, &doc.personal);

        assert_eq!(head.links("icon"), vec!["/assets/favicon.webp"]);
        assert_eq!(head.links("apple-touch-icon"), vec!["/assets/favicon.webp"]);
        assert!(head.links("shortcut icon").is_empty());
        assert_eq!(head.icon_link_count(), 2);
        assert_eq!(
            head.meta_content(&MetaKey::property("og:image")),
            Some("/assets/og-card.png")
        );
        assert_eq!(
            head.meta_content(&MetaKey::name("twitter:image")),
            Some("/assets/og-card.png")
        );
    }

    #[test]
    fn sync_twice_does_not_duplicate() {
        let doc = sample_document();
        let mut head = base_head();
        sync_metadata(&mut head, &doc.personal);
        let once = head.clone();
        sync_metadata(&mut head, &doc.personal);

        assert_eq!(head, once);
        assert_eq!(head.links("icon").len(), 1);
        assert_eq!(head.links("apple-touch-icon").len(), 1);
    }

    #[test]
    fn sync_leaves_other_elements_alone() {
        let doc = sample_document();
        let mut head = base_head();
        sync_metadata(&mut head, &doc.personal);

        assert_eq!(head.links("stylesheet"), vec!["/extra.css"]);
        assert_eq!(
            head.meta_content(&MetaKey::property("og:title")),
            Some("Portfolio")
        );
        assert_eq!(
            head.meta_content(&MetaKey::name("twitter:card")),
            Some("summary_large_image")
        );
        assert_eq!(head.elements()[1], HeadElement::Title("Portfolio".into()));
    }

    #[test]
    fn absent_fields_are_no_ops() {
        let mut doc = sample_document();
        doc.personal.favicon = None;
        doc.personal.og_image = Some(String::new());
        let mut head = base_head();
        sync_metadata(&mut head, &doc.personal);
        assert_eq!(head, base_head());
    }

    #[test]
    fn missing_social_tags_are_not_created() {
        let doc = sample_document();
        let mut head = DocumentHead::new(vec![HeadElement::Title("x".into())]);
        sync_metadata(&mut head, &doc.personal);
        assert_eq!(head.meta_content(&MetaKey::property("og:image")), None);
        assert_eq!(head.meta_content(&MetaKey::name("twitter:image")), None);
    }

    #[test]
    fn favicon_link_carries_mime_type() {
        let doc = sample_document();
        let mut head = base_head();
        sync_metadata(&mut head, &doc.personal);
        let html = head.render().into_string();
        assert!(html.contains(r#"<link rel="icon" type="image/webp" href="/assets/favicon.webp">"#));
        assert!(html.contains(r#"<link rel="apple-touch-icon" href="/assets/favicon.webp">"#));
    }

    #[test]
    fn icon_mime_by_extension() {
        assert_eq!(icon_mime("/a/fav.PNG"), Some("image/png"));
        assert_eq!(icon_mime("/fav.svg?v=2"), Some("image/svg+xml"));
        assert_eq!(icon_mime("/favicon"), None);
    }
}
