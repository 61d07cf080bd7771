//! Comment rendering: section banners, author/date lines and comment bodies.
//!
//! [`CommentRenderer::render`] yields printable units lazily in document
//! order. The caller prints each unit followed by a newline.

use crossterm::style::Stylize;
use textwrap::{Options, WordSeparator, WordSplitter};

use crate::markup::{ConvertOptions, MarkupToText};
use crate::reflow::{reflow, WrapConfig};
use crate::settings;
use crate::style::StyleKind;
use crate::textutil::{collapse_blank_lines, collapse_whitespace};
use crate::thread::{select_sections, Entry, Notice, Section, SectionFilter};

/// Which ANSI styles to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleFlags {
    /// Master switch; without it no escape sequences are written at all.
    pub color: bool,
    pub bold: bool,
    pub italic: bool,
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self {
            color: true,
            bold: true,
            italic: true,
        }
    }
}

impl StyleFlags {
    /// Plain output with markdown marks for bold/italic spans.
    pub fn plain() -> Self {
        Self {
            color: false,
            bold: false,
            italic: false,
        }
    }

    fn ansi(self, kind: StyleKind) -> bool {
        self.color
            && match kind {
                StyleKind::Bold => self.bold,
                StyleKind::Italic => self.italic,
            }
    }
}

/// Everything the renderer needs besides the sections themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub wrap: WrapConfig,
    pub styles: StyleFlags,
    pub filter: SectionFilter,
}

/// Formats sections of comments for the terminal.
pub struct CommentRenderer<'c, C: MarkupToText + ?Sized> {
    converter: &'c C,
    options: RenderOptions,
    convert: ConvertOptions,
}

impl<'c, C: MarkupToText + ?Sized> CommentRenderer<'c, C> {
    pub fn new(converter: &'c C, options: RenderOptions) -> Self {
        let marker = |kind: StyleKind| {
            if options.styles.ansi(kind) {
                kind.ansi_start().to_string()
            } else {
                kind.markdown_mark().to_string()
            }
        };
        let convert = ConvertOptions {
            width: options.wrap.width(),
            bold_marker: marker(StyleKind::Bold),
            italic_marker: marker(StyleKind::Italic),
            list_marker: options.wrap.list_marker().to_string(),
        };
        Self {
            converter,
            options,
            convert,
        }
    }

    /// Lazily render `sections` according to the configured filter.
    pub fn render<'a>(&'a self, sections: &'a [Section]) -> Rendering<'a> {
        let selected = match select_sections(sections, self.options.filter) {
            Ok(selected) => selected,
            Err(notice) => {
                tracing::debug!(?notice, "nothing to render");
                return Rendering::notice(notice);
            }
        };
        tracing::debug!(sections = selected.len(), "rendering comment sections");

        let with_banners = selected.len() > 1;
        let units = selected.into_iter().flat_map(move |section| {
            let banner = with_banners.then(|| self.banner(section.title.as_deref().unwrap_or("")));
            banner
                .into_iter()
                .chain(section.entries.iter().map(move |entry| self.entry(entry)))
        });
        Rendering {
            notice: None,
            units: Box::new(units),
        }
    }

    /// Centered section title padded with the banner fill, then a blank line.
    fn banner(&self, title: &str) -> String {
        let columns = self
            .options
            .wrap
            .width()
            .unwrap_or(settings::BANNER_FALLBACK_COLUMNS);
        let line = center(&format!(" {title} "), columns, settings::BANNER_FILL);
        if self.options.styles.color {
            format!("{}\n", line.bold())
        } else {
            format!("{line}\n")
        }
    }

    fn entry(&self, entry: &Entry) -> String {
        match entry {
            Entry::Heading(text) => self.heading(text),
            Entry::Body(markup) => self.body(markup),
        }
    }

    fn heading(&self, text: &str) -> String {
        let text = collapse_whitespace(text);
        let text = match self.options.wrap.width() {
            Some(width) => textwrap::fill(
                &text,
                Options::new(width)
                    .break_words(false)
                    .word_separator(WordSeparator::AsciiSpace)
                    .word_splitter(WordSplitter::NoHyphenation),
            ),
            None => text,
        };
        if self.options.styles.color {
            text.bold().to_string()
        } else {
            text
        }
    }

    /// Converted, style-paired, reflowed body followed by a blank line.
    fn body(&self, markup: &str) -> String {
        let converted = self.converter.convert(markup, &self.convert);
        let mut text = converted.trim().to_string();
        for kind in [StyleKind::Bold, StyleKind::Italic] {
            if self.options.styles.ansi(kind) {
                text = kind.pair_ansi_markers(&text);
            }
        }
        let text = collapse_blank_lines(&reflow(&text, &self.options.wrap));
        if self.options.styles.color {
            format!("{}\n", text.with(settings::COLOR_COMMENT_BODY))
        } else {
            format!("{text}\n")
        }
    }
}

/// Pad `text` on both sides with `fill` up to `columns` characters.
///
/// Odd padding puts the extra fill character on the right.
fn center(text: &str, columns: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= columns {
        return text.to_string();
    }
    let padding = columns - len;
    let left = padding / 2;
    let mut out = String::with_capacity(text.len() + padding * fill.len_utf8());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(padding - left));
    out
}

/// Lazy sequence of printable units, plus the notice that replaced regular
/// output, if any.
pub struct Rendering<'a> {
    notice: Option<Notice>,
    units: Box<dyn Iterator<Item = String> + 'a>,
}

impl Rendering<'_> {
    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            units: Box::new(std::iter::once(notice.to_string())),
        }
    }

    /// The informational outcome, when nothing but a notice is printed.
    pub fn outcome(&self) -> Option<Notice> {
        self.notice
    }
}

impl Iterator for Rendering<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.units.next()
    }
}
