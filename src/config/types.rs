//! Configuration data model.
//!
//! This module holds struct definitions plus default values. Loading and
//! precedence logic lives in `config::mod`.

use serde::Deserialize;

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_NUM_COMMENTS, DEFAULT_TIMEOUT_SECS, DEFAULT_WIDTH,
};

/// Top-level runtime configuration (`aur-talk.toml`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub fetch: FetchConfig,
}

/// `[display]`: output width and styling.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Output width in columns; must be at least 1.
    pub width: usize,
    /// Print without any width restriction (overrides `width`).
    pub free_format: bool,
    /// Emit ANSI escape sequences at all.
    pub color: bool,
    pub bold: bool,
    pub italic: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            free_format: false,
            color: true,
            bold: true,
            italic: true,
        }
    }
}

impl DisplayConfig {
    /// Effective wrap width; `0` means unbounded.
    pub fn effective_width(&self) -> usize {
        if self.free_format {
            0
        } else {
            self.width
        }
    }
}

/// `[fetch]`: where and how much to fetch.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    pub base_url: String,
    /// Number of latest comments requested; pinned comments always come along.
    pub num_comments: u32,
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            num_comments: DEFAULT_NUM_COMMENTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
