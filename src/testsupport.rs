//! Shared test fixtures for the parser, renderer and app test modules.

use std::cell::RefCell;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::fetch::CommentSource;
use crate::markup::{ConvertOptions, MarkupToText};
use crate::thread::Section;

/// Converter that returns the markup unchanged.
pub struct PassThrough;

impl MarkupToText for PassThrough {
    fn convert(&self, markup: &str, _options: &ConvertOptions) -> String {
        markup.to_string()
    }
}

/// Pass-through converter that records the options of every call.
#[derive(Default)]
pub struct RecordingConverter {
    pub calls: RefCell<Vec<ConvertOptions>>,
}

impl MarkupToText for RecordingConverter {
    fn convert(&self, markup: &str, options: &ConvertOptions) -> String {
        self.calls.borrow_mut().push(options.clone());
        markup.to_string()
    }
}

/// One comment container of a synthetic package page.
pub struct PageSection<'a> {
    pub title: &'a str,
    /// `(author/date heading, body inner HTML)` pairs.
    pub comments: &'a [(&'a str, &'a str)],
}

/// Build a package page shaped like the AUR's comment markup.
pub fn aur_page(sections: &[PageSection<'_>]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><body><div id=\"archnavbar\"></div><div id=\"content\">\n",
    );
    for (idx, section) in sections.iter().enumerate() {
        html.push_str("<div class=\"comments package-comments\">\n");
        html.push_str(&format!(
            "  <div class=\"comments-header\"><h3><span class=\"text\">{}</span></h3></div>\n",
            section.title
        ));
        for (n, (heading, body)) in section.comments.iter().enumerate() {
            let id = idx * 100 + n;
            html.push_str(&format!(
                "  <h4 id=\"comment-{id}\" class=\"comment-header\">{heading}</h4>\n"
            ));
            html.push_str(&format!(
                "  <div id=\"comment-{id}-content\" class=\"article-content\"><div>{body}</div></div>\n"
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div></body></html>");
    html
}

/// Canned [`CommentSource`] that records the requests it receives.
pub struct FakeSource {
    result: Mutex<Option<Result<Vec<Section>, FetchError>>>,
    pub requests: Mutex<Vec<(String, u32)>>,
}

impl FakeSource {
    pub fn returning(result: Result<Vec<Section>, FetchError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommentSource for FakeSource {
    async fn fetch_sections(
        &self,
        package: &str,
        num_comments: u32,
    ) -> Result<Vec<Section>, FetchError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push((package.to_string(), num_comments));
        self.result
            .lock()
            .expect("result lock")
            .take()
            .expect("FakeSource polled more than once")
    }
}
