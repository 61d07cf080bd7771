//! Centralized, hardcoded presentation settings.
//!
//! This is the single place to tweak section titles, notices, banner glyphs,
//! style markers and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Sections / notices
// ---------------------------------------------------------------------------

pub const PINNED_SECTION_TITLE: &str = "Pinned Comments";
pub const LATEST_SECTION_TITLE: &str = "Latest Comments";

pub const NOTICE_NO_COMMENTS: &str = "No comments.";
pub const NOTICE_NO_PINNED_COMMENTS: &str = "No pinned comments.";

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const BANNER_FILL: char = '—';
/// Banner width used when output width is unbounded.
pub const BANNER_FALLBACK_COLUMNS: usize = 80;

pub const DEFAULT_LIST_MARKER: &str = "-";

/// Delimiter lines around preformatted text; reflow leaves what is between
/// them alone.
pub const CODE_BLOCK_OPEN: &str = "[code]";
pub const CODE_BLOCK_CLOSE: &str = "[/code]";

// ---------------------------------------------------------------------------
// Style markers
// ---------------------------------------------------------------------------

pub const ANSI_BOLD_START: &str = "\x1b[1m";
/// Replaces the trailing `1m` of a bold start to form `ESC[22m`.
pub const ANSI_BOLD_END_SUFFIX: &str = "22m";
pub const ANSI_ITALIC_START: &str = "\x1b[3m";
/// Replaces the trailing `3m` of an italic start to form `ESC[23m`.
pub const ANSI_ITALIC_END_SUFFIX: &str = "23m";

pub const MARKDOWN_BOLD: &str = "**";
pub const MARKDOWN_ITALIC: &str = "_";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Foreground for comment bodies. Must stay a color rather than SGR dim:
/// `ESC[22m` ends dim as well as bold.
pub const COLOR_COMMENT_BODY: Color = Color::DarkGrey;
