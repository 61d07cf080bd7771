//! Start/end pairing for raw style markers.
//!
//! The HTML-to-text converter surrounds a styled span with the same marker on
//! both sides because it has no notion of a distinct end marker. For ANSI
//! output that means a bold span reads `ESC[1m text ESC[1m`, which never
//! switches bold off. [`correct_style_markers`] turns every second occurrence
//! into the matching end sequence.

use crate::settings;

/// A style kind whose markers are paired by [`correct_style_markers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Bold,
    Italic,
}

impl StyleKind {
    /// Raw ANSI start marker emitted by the converter for this style.
    pub fn ansi_start(self) -> &'static str {
        match self {
            Self::Bold => settings::ANSI_BOLD_START,
            Self::Italic => settings::ANSI_ITALIC_START,
        }
    }

    /// Replacement for the last two characters of an end occurrence.
    pub fn ansi_end_suffix(self) -> &'static str {
        match self {
            Self::Bold => settings::ANSI_BOLD_END_SUFFIX,
            Self::Italic => settings::ANSI_ITALIC_END_SUFFIX,
        }
    }

    /// Markdown-style mark used when ANSI output for this style is disabled.
    pub fn markdown_mark(self) -> &'static str {
        match self {
            Self::Bold => settings::MARKDOWN_BOLD,
            Self::Italic => settings::MARKDOWN_ITALIC,
        }
    }

    /// Pair up this kind's ANSI markers in `text`.
    pub fn pair_ansi_markers(self, text: &str) -> String {
        correct_style_markers(text, self.ansi_start(), self.ansi_end_suffix())
    }
}

/// Rewrite every even (2nd, 4th, ...) occurrence of `marker` into an end marker.
///
/// Occurrences are the non-overlapping matches of `marker` found left to right
/// in the original `text`. Odd occurrences stay as they are. For even ones the
/// final two characters of the marker are replaced with `end_replacement`. A
/// trailing unmatched start is left alone.
pub fn correct_style_markers(text: &str, marker: &str, end_replacement: &str) -> String {
    if marker.is_empty() {
        return text.to_string();
    }

    let kept_prefix = &marker[..end_suffix_start(marker)];
    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    for (n, (start, _)) in text.match_indices(marker).enumerate() {
        if n % 2 == 0 {
            continue;
        }
        out.push_str(&text[copied_to..start]);
        out.push_str(kept_prefix);
        out.push_str(end_replacement);
        copied_to = start + marker.len();
    }
    out.push_str(&text[copied_to..]);
    out
}

/// Byte offset where the last two characters of `marker` begin.
fn end_suffix_start(marker: &str) -> usize {
    marker
        .char_indices()
        .rev()
        .nth(1)
        .map_or(0, |(idx, _)| idx)
}
