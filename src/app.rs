//! One-shot orchestration: fetch a package's comments and print them.

use std::io::Write;

use crate::config::DisplayConfig;
use crate::error::AppError;
use crate::fetch::CommentSource;
use crate::markup::HtmlToText;
use crate::reflow::WrapConfig;
use crate::render::{CommentRenderer, RenderOptions, StyleFlags};
use crate::thread::{Notice, SectionFilter};

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub package: String,
    /// Page size for the latest comments; pinned comments always come along.
    pub num_comments: u32,
}

/// Renderer settings for the effective display config.
pub fn render_options(display: &DisplayConfig, filter: SectionFilter) -> RenderOptions {
    RenderOptions {
        wrap: WrapConfig::new(display.effective_width()),
        styles: StyleFlags {
            color: display.color,
            bold: display.bold,
            italic: display.italic,
        },
        filter,
    }
}

/// Fetch `request.package` from `source` and write every rendered unit,
/// each followed by a newline, to `out`.
///
/// Returns the notice that replaced regular output, if any. Notices are not
/// errors: the caller still exits successfully.
pub async fn run<S>(
    source: &S,
    request: &Request,
    options: RenderOptions,
    out: &mut dyn Write,
) -> Result<Option<Notice>, AppError>
where
    S: CommentSource + ?Sized,
{
    let sections = source
        .fetch_sections(&request.package, request.num_comments)
        .await?;
    tracing::debug!(
        package = %request.package,
        sections = sections.len(),
        "fetched comment sections"
    );

    let converter = HtmlToText;
    let renderer = CommentRenderer::new(&converter, options);
    let rendering = renderer.render(&sections);
    let outcome = rendering.outcome();
    for unit in rendering {
        writeln!(out, "{unit}")?;
    }
    out.flush()?;
    Ok(outcome)
}
