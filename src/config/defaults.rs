//! Default configuration constants.
//!
//! Keeping defaults in one module lets the CLI, the config loader and the
//! renderer share the same literals.

/// Default output width in columns.
pub const DEFAULT_WIDTH: usize = 80;
/// Default number of latest comments to fetch.
pub const DEFAULT_NUM_COMMENTS: u32 = 10;
/// Page size requested by `--all`.
pub const ALL_COMMENTS: u32 = 1000;
/// Default AUR web interface.
pub(super) const DEFAULT_BASE_URL: &str = "https://aur.archlinux.org";
/// Default timeout for the package page request.
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Directory and file name under the per-user config root.
pub(super) const CONFIG_DIR_NAME: &str = "aur-talk";
pub(super) const CONFIG_FILE_NAME: &str = "aur-talk.toml";
