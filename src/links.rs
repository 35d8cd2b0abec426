//! Outbound Links
//!
//! Which links a project shows, and opening them through the browser.

use thiserror::Error;

use crate::models::{available, Item};

#[derive(Debug, Error, PartialEq)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,
    #[error("unsupported link scheme: {0}")]
    UnsupportedScheme(String),
    #[error("browser refused to open {0}")]
    Blocked(String),
}

const SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Repository,
    Web,
    AppStore,
    PlayStore,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Repository => "GitHub",
            LinkKind::Web => "Website",
            LinkKind::AppStore => "App Store",
            LinkKind::PlayStore => "Google Play",
        }
    }
}

/// One row of a project's link list
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEntry {
    Link { kind: LinkKind, url: String },
    /// Private repository, shown as text instead of a link
    RequestAccess,
}

pub const REQUEST_ACCESS_LABEL: &str = "Source code available upon request";

/// Links to render for `item`, in display order.
///
/// Missing publish targets are left out; a missing repository becomes a
/// request-access note.
pub fn project_links(item: &Item) -> Vec<LinkEntry> {
    let mut entries = Vec::new();

    match available(&item.repository) {
        Some(url) => entries.push(LinkEntry::Link { kind: LinkKind::Repository, url: url.to_string() }),
        None => entries.push(LinkEntry::RequestAccess),
    }

    let publish = [
        (LinkKind::Web, &item.publish.web),
        (LinkKind::AppStore, &item.publish.app_store),
        (LinkKind::PlayStore, &item.publish.play_store),
    ];
    for (kind, value) in publish {
        if let Some(url) = available(value) {
            entries.push(LinkEntry::Link { kind, url: url.to_string() });
        }
    }

    entries
}

/// Check that `url` is something the browser should be asked to open
pub fn validate_url(url: &str) -> Result<&str, LinkError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LinkError::Empty);
    }

    let lower = url.to_ascii_lowercase();
    match SCHEMES.iter().find(|scheme| lower.starts_with(*scheme)) {
        Some(scheme) if url.len() > scheme.len() => Ok(url),
        Some(_) => Err(LinkError::Empty),
        None => Err(LinkError::UnsupportedScheme(url.to_string())),
    }
}

/// Open `url` in a new browser tab
pub fn open_url(url: &str) -> Result<(), LinkError> {
    let url = validate_url(url)?;
    let win = web_sys::window().ok_or_else(|| LinkError::Blocked(url.to_string()))?;

    match win.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        _ => Err(LinkError::Blocked(url.to_string())),
    }
}

/// Open `url`, logging instead of failing
pub fn open_link(url: &str) {
    if let Err(e) = open_url(url) {
        web_sys::console::warn_1(&format!("[LINK] {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, PublishLinks};

    fn item(repository: &str, web: &str, app_store: &str, play_store: &str) -> Item {
        Item {
            id: ItemId::from("demo"),
            title: "Demo".to_string(),
            description: "A demo project".to_string(),
            tech: "Rust".to_string(),
            repository: repository.to_string(),
            publish: PublishLinks {
                web: web.to_string(),
                app_store: app_store.to_string(),
                play_store: play_store.to_string(),
            },
        }
    }

    #[test]
    fn test_missing_store_link_is_omitted() {
        let links = project_links(&item("https://github.com/x/y", "N/A", "N/A", "https://play.google.com/x"));
        assert_eq!(
            links,
            vec![
                LinkEntry::Link { kind: LinkKind::Repository, url: "https://github.com/x/y".into() },
                LinkEntry::Link { kind: LinkKind::PlayStore, url: "https://play.google.com/x".into() },
            ]
        );
        assert!(!links.iter().any(|l| matches!(l, LinkEntry::Link { kind: LinkKind::AppStore, .. })));
    }

    #[test]
    fn test_missing_repository_requests_access() {
        let links = project_links(&item("N/A", "https://example.com", "N/A", "N/A"));
        assert_eq!(links[0], LinkEntry::RequestAccess);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_validate_url() {
        assert_eq!(validate_url("https://example.com"), Ok("https://example.com"));
        assert_eq!(validate_url("  mailto:me@example.com "), Ok("mailto:me@example.com"));
        assert_eq!(validate_url("HTTP://EXAMPLE.COM"), Ok("HTTP://EXAMPLE.COM"));
        assert_eq!(validate_url(""), Err(LinkError::Empty));
        assert_eq!(validate_url("   "), Err(LinkError::Empty));
        assert_eq!(validate_url("mailto:"), Err(LinkError::Empty));
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(LinkError::UnsupportedScheme("javascript:alert(1)".into()))
        );
        assert!(matches!(validate_url("N/A"), Err(LinkError::UnsupportedScheme(_))));
    }
}
