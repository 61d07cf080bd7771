//! AUR package-page retrieval and comment-section parsing.
//!
//! The package page lists comments in up to two `div.comments.package-comments`
//! containers ("Pinned Comments" first, then "Latest Comments"). Each
//! container starts with a header holding the section title, followed by
//! alternating `h4` author/date headings and comment-body elements.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};

use crate::error::{FetchError, StructuralError};
use crate::textutil::{collapse_whitespace, strip_control_chars};
use crate::thread::{Entry, Section};

/// Source of a package's comment sections.
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch up to `num_comments` latest comments (pinned ones are always
    /// included by the upstream page).
    async fn fetch_sections(
        &self,
        package: &str,
        num_comments: u32,
    ) -> Result<Vec<Section>, FetchError>;
}

/// HTTP client for `aur.archlinux.org`-style package pages.
pub struct AurClient {
    http: reqwest::Client,
    base_url: String,
}

impl AurClient {
    /// Build a client with a reusable HTTP connection pool.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aur-talk/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// `{base}/packages/{package}/?O=0&PP={num_comments}` with the package
    /// name percent-encoded as one path segment.
    pub fn page_url(&self, package: &str, num_comments: u32) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["packages", package, ""]);
        url.query_pairs_mut()
            .append_pair("O", "0")
            .append_pair("PP", &num_comments.to_string());
        Ok(url)
    }
}

#[async_trait]
impl CommentSource for AurClient {
    async fn fetch_sections(
        &self,
        package: &str,
        num_comments: u32,
    ) -> Result<Vec<Section>, FetchError> {
        let url = self.page_url(package, num_comments)?;
        tracing::debug!(%url, "fetching package page");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "package page response");
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(package.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        Ok(parse_comment_sections(&html)?)
    }
}

/// Parse every comment section of a package page, in document order.
///
/// A page without comment containers yields an empty list.
pub fn parse_comment_sections(html: &str) -> Result<Vec<Section>, StructuralError> {
    let document = Html::parse_document(html);
    let section_selector =
        Selector::parse("div.comments.package-comments").expect("valid section selector");
    let title_selector = Selector::parse("h3 span.text").expect("valid title selector");

    let mut sections = Vec::new();
    for (index, container) in document.select(&section_selector).enumerate() {
        let mut children = container.child_elements();
        let title = children
            .next()
            .and_then(|header| header.select(&title_selector).next())
            .map(|span| element_text(&span))
            .filter(|title| !title.is_empty())
            .ok_or(StructuralError::MissingSectionTitle { section: index })?;

        let entries: Vec<Entry> = children.map(classify_entry).collect();
        tracing::debug!(%title, entries = entries.len(), "parsed comment section");
        sections.push(Section::new(title, entries));
    }
    Ok(sections)
}

fn classify_entry(element: ElementRef<'_>) -> Entry {
    if element.value().name() == "h4" {
        Entry::Heading(element_text(&element))
    } else {
        Entry::Body(element.html())
    }
}

fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&strip_control_chars(
        &element.text().collect::<Vec<_>>().join(" "),
    ))
}
