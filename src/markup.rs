//! HTML-to-text conversion of comment bodies.
//!
//! [`HtmlToText`] walks a `scraper` fragment and produces markdown-ish text:
//! paragraphs wrapped to the output width, `[text](href)` links, backtick
//! code, `[code]` blocks and `-` bullets. Styled spans are surrounded by the
//! *same* marker on both sides; ANSI markers are paired later by
//! [`crate::style`]. Bullet items stay on one line; [`crate::reflow`] wraps
//! them.

use scraper::{ElementRef, Html, Node};
use textwrap::{Options, WordSeparator, WordSplitter};

use crate::settings;
use crate::reflow::list_item_indent;
use crate::textutil::{collapse_whitespace, strip_control_chars};

/// Conversion settings, built once per run and shared by every body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Paragraph wrap width; `None` leaves paragraphs unwrapped.
    pub width: Option<usize>,
    pub bold_marker: String,
    pub italic_marker: String,
    pub list_marker: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: None,
            bold_marker: settings::MARKDOWN_BOLD.to_string(),
            italic_marker: settings::MARKDOWN_ITALIC.to_string(),
            list_marker: settings::DEFAULT_LIST_MARKER.to_string(),
        }
    }
}

/// Converts one comment body's markup into terminal text.
pub trait MarkupToText {
    fn convert(&self, markup: &str, options: &ConvertOptions) -> String;
}

/// [`MarkupToText`] over HTML fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlToText;

impl MarkupToText for HtmlToText {
    fn convert(&self, markup: &str, options: &ConvertOptions) -> String {
        let fragment = Html::parse_fragment(markup);
        let mut writer = BlockWriter::new(options, options.width, true);
        writer.walk_children(fragment.root_element());
        writer.finish().join("\n\n")
    }
}

/// Accumulates inline text and emits finished, formatted blocks.
struct BlockWriter<'o> {
    options: &'o ConvertOptions,
    width: Option<usize>,
    wrap_paragraphs: bool,
    blocks: Vec<String>,
    inline: String,
}

impl<'o> BlockWriter<'o> {
    fn new(options: &'o ConvertOptions, width: Option<usize>, wrap_paragraphs: bool) -> Self {
        Self {
            options,
            width,
            wrap_paragraphs,
            blocks: Vec::new(),
            inline: String::new(),
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush_paragraph();
        self.blocks
    }

    fn walk_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            if let Some(child_element) = ElementRef::wrap(child) {
                self.walk_element(child_element);
            } else if let Node::Text(text) = child.value() {
                self.push_text(text);
            }
        }
    }

    fn walk_element(&mut self, element: ElementRef<'_>) {
        let options = self.options;
        match element.value().name() {
            "p" | "div" | "section" | "article" | "header" | "footer" => {
                self.flush_paragraph();
                self.walk_children(element);
                self.flush_paragraph();
            }
            name @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
                self.flush_paragraph();
                let level = name[1..].parse::<usize>().unwrap_or(1);
                self.inline.push_str(&"#".repeat(level));
                self.inline.push(' ');
                self.walk_children(element);
                self.flush_paragraph();
            }
            "br" => self.inline.push('\n'),
            "hr" => {
                self.flush_paragraph();
                self.blocks.push("* * *".to_string());
            }
            "strong" | "b" => self.surround(element, &options.bold_marker),
            "em" | "i" => self.surround(element, &options.italic_marker),
            "code" | "tt" => self.surround(element, "`"),
            "a" => self.push_link(element),
            "img" => {
                if let Some(alt) = element.value().attr("alt") {
                    self.push_text(alt);
                }
            }
            "pre" => {
                self.flush_paragraph();
                self.push_code_block(element);
            }
            "blockquote" => {
                self.flush_paragraph();
                self.push_blockquote(element);
            }
            "ul" => {
                self.flush_paragraph();
                self.push_list(element, None);
            }
            "ol" => {
                self.flush_paragraph();
                let start = element
                    .value()
                    .attr("start")
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(1);
                self.push_list(element, Some(start));
            }
            "script" | "style" | "form" | "button" | "input" | "select" => {}
            _ => self.walk_children(element),
        }
    }

    /// Append text with control characters dropped and HTML whitespace
    /// collapsed.
    fn push_text(&mut self, text: &str) {
        let text = strip_control_chars(text);
        let text = text.as_str();
        let at_break = self.inline.is_empty() || self.inline.ends_with([' ', '\n']);
        let collapsed = collapse_whitespace(text);
        if collapsed.is_empty() {
            if !at_break && !text.is_empty() {
                self.inline.push(' ');
            }
            return;
        }
        if !at_break && text.starts_with(char::is_whitespace) {
            self.inline.push(' ');
        }
        self.inline.push_str(&collapsed);
        if text.ends_with(char::is_whitespace) {
            self.inline.push(' ');
        }
    }

    fn surround(&mut self, element: ElementRef<'_>, marker: &str) {
        self.inline.push_str(marker);
        self.walk_children(element);
        let trailing_space = self.inline.ends_with(' ');
        if trailing_space {
            self.inline.pop();
        }
        self.inline.push_str(marker);
        if trailing_space {
            self.inline.push(' ');
        }
    }

    fn push_link(&mut self, element: ElementRef<'_>) {
        let Some(href) = element.value().attr("href") else {
            self.walk_children(element);
            return;
        };
        let href = strip_control_chars(href);
        let href = href.trim();
        let text = collapse_whitespace(&strip_control_chars(
            &element.text().collect::<String>(),
        ));
        let link = if text.is_empty() || text == href {
            format!("<{href}>")
        } else {
            format!("[{text}]({href})")
        };
        self.inline.push_str(&link);
    }

    fn push_code_block(&mut self, element: ElementRef<'_>) {
        let code = strip_control_chars(&element.text().collect::<String>());
        let code = code.trim_matches('\n').trim_end();
        self.blocks.push(format!(
            "{}\n{code}\n{}",
            settings::CODE_BLOCK_OPEN,
            settings::CODE_BLOCK_CLOSE
        ));
    }

    fn push_blockquote(&mut self, element: ElementRef<'_>) {
        let width = self.width.map(|width| width.saturating_sub(2).max(1));
        let mut quoted = BlockWriter::new(self.options, width, self.wrap_paragraphs);
        quoted.walk_children(element);
        let body = quoted.finish().join("\n\n");
        if body.is_empty() {
            return;
        }
        let prefixed = body
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.blocks.push(prefixed);
    }

    /// Emit a list block; `ordered_start` is `Some(n)` for `<ol>`.
    fn push_list(&mut self, element: ElementRef<'_>, ordered_start: Option<usize>) {
        let mut lines = Vec::new();
        let mut number = ordered_start.unwrap_or(1);
        for item in element.child_elements() {
            if item.value().name() != "li" {
                continue;
            }
            let marker = match ordered_start {
                Some(_) => format!("{number}."),
                None => self.options.list_marker.clone(),
            };
            number += 1;
            self.push_list_item(item, &marker, ordered_start.is_some(), &mut lines);
        }
        if !lines.is_empty() {
            self.blocks.push(lines.join("\n"));
        }
    }

    fn push_list_item(
        &self,
        item: ElementRef<'_>,
        marker: &str,
        ordered: bool,
        lines: &mut Vec<String>,
    ) {
        let hanging = " ".repeat(marker.chars().count() + 1);
        let nested_width = self
            .width
            .map(|width| width.saturating_sub(hanging.len()).max(1));
        // A bullet's first line stays unwrapped for reflow; everything else in
        // the item is wrapped here. Nested bullets and code are left as is.
        let mut content = BlockWriter::new(self.options, nested_width, false);
        content.walk_children(item);
        let blocks = content.finish();

        let mut item_lines = blocks.iter().flat_map(|block| block.split('\n'));
        let first = item_lines.next().unwrap_or_default();
        let head = format!("{marker} {first}");
        match self.width {
            Some(width) if ordered => {
                let options = wrap_options(width).subsequent_indent(&hanging);
                lines.extend(textwrap::wrap(&head, options).into_iter().map(String::from));
            }
            _ => lines.push(head.trim_end().to_string()),
        }
        let mut in_code = false;
        for line in item_lines {
            if line.is_empty() {
                continue;
            }
            let verbatim = in_code
                || line.starts_with(' ')
                || list_item_indent(line, &self.options.list_marker).is_some();
            if line == settings::CODE_BLOCK_OPEN {
                in_code = true;
            } else if line == settings::CODE_BLOCK_CLOSE {
                in_code = false;
            }
            match self.width {
                Some(width) if !verbatim => {
                    let options = wrap_options(width)
                        .initial_indent(&hanging)
                        .subsequent_indent(&hanging);
                    lines.extend(textwrap::wrap(line, options).into_iter().map(String::from));
                }
                _ => lines.push(format!("{hanging}{line}")),
            }
        }
    }

    fn flush_paragraph(&mut self) {
        let text = self
            .inline
            .split('\n')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        self.inline.clear();
        let text = text.trim_matches('\n');
        if text.is_empty() {
            return;
        }
        let block = match self.width {
            Some(width) if self.wrap_paragraphs => textwrap::fill(text, wrap_options(width)),
            _ => text.to_string(),
        };
        self.blocks.push(block);
    }
}

fn wrap_options<'a>(width: usize) -> Options<'a> {
    Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
}
