//! List-aware reflow of converted comment text.
//!
//! The HTML-to-text converter wraps prose to the output width but leaves
//! bullet items on one long line. [`reflow`] wraps those bullet lines and
//! hangs their continuation lines under the item text:
//!
//! ```text
//! - item one that is
//!   quite long and
//!   must wrap
//! ```
//!
//! Every other line passes through untouched.

use textwrap::{Options, WordSeparator, WordSplitter};

use crate::settings;

/// Output width and list-marker settings shared by the reflow and render code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapConfig {
    width: Option<usize>,
    list_marker: String,
}

impl WrapConfig {
    /// Wrap at `width` columns; `0` means unbounded (no wrapping at all).
    pub fn new(width: usize) -> Self {
        Self {
            width: (width > 0).then_some(width),
            list_marker: settings::DEFAULT_LIST_MARKER.to_string(),
        }
    }

    /// Pass all text through without wrapping.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Replace the bullet marker that identifies list-item lines.
    pub fn with_list_marker(mut self, marker: impl Into<String>) -> Self {
        self.list_marker = marker.into();
        self
    }

    /// Target column count, or `None` when unbounded.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn list_marker(&self) -> &str {
        &self.list_marker
    }

    /// Columns between the marker position and the item text (`"- "` is 2).
    pub fn continuation_indent(&self) -> usize {
        self.list_marker.chars().count() + 1
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_WIDTH)
    }
}

/// Re-wrap list-item lines of `text` to `config`'s width.
///
/// Lines are split on `\n` and joined back the same way; no trailing newline
/// is added. Lines inside a `[code]` ... `[/code]` block are kept verbatim.
/// With an unbounded width the input is returned unchanged.
pub fn reflow(text: &str, config: &WrapConfig) -> String {
    let Some(width) = config.width() else {
        return text.to_string();
    };

    let mut in_code = false;
    text.split('\n')
        .map(|line| {
            match line.trim() {
                settings::CODE_BLOCK_OPEN => in_code = true,
                settings::CODE_BLOCK_CLOSE => in_code = false,
                _ if in_code => {}
                _ => {
                    if let Some((indent, item_text)) = split_list_item(line, config.list_marker())
                    {
                        return wrap_list_item(item_text, indent, width, config);
                    }
                }
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Leading-space count of `line` when it is a list item, `None` otherwise.
///
/// A list item is, after its leading spaces, either exactly `marker` or
/// `marker` followed by a space.
pub fn list_item_indent(line: &str, marker: &str) -> Option<usize> {
    split_list_item(line, marker).map(|(indent, _)| indent)
}

/// Split a list-item line into its indent and the trimmed item text.
fn split_list_item<'a>(line: &'a str, marker: &str) -> Option<(usize, &'a str)> {
    if marker.is_empty() {
        return None;
    }
    let content = line.trim_start_matches(' ');
    let rest = content.strip_prefix(marker)?;
    if rest.is_empty() || rest.starts_with(' ') {
        Some((line.len() - content.len(), rest.trim()))
    } else {
        None
    }
}

fn wrap_list_item(item_text: &str, indent: usize, width: usize, config: &WrapConfig) -> String {
    // The marker rides in the first line's indent so it never ends up alone.
    let initial = format!("{}{} ", " ".repeat(indent), config.list_marker());
    if item_text.is_empty() {
        return initial.trim_end().to_string();
    }
    let hanging = indent + config.continuation_indent();
    let subsequent = " ".repeat(hanging);
    let options = Options::new(width.max(hanging + 1))
        .initial_indent(&initial)
        .subsequent_indent(&subsequent)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation);
    textwrap::wrap(item_text, options).join("\n")
}
