//! Compile-time build metadata exposed through `aur-talk --version`.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("AUR_TALK_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("AUR_TALK_BUILD_TIMESTAMP");

/// Long version block used by clap for `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("AUR_TALK_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("AUR_TALK_BUILD_TIMESTAMP")
);
