//! Configuration loading from a TOML file and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Command-line flags (applied by the binary after loading)
//! 2. Environment variables (`AUR_TALK_BASE_URL`, `AUR_TALK_TIMEOUT_SECS`,
//!    `AUR_TALK_WIDTH`, `NO_COLOR`)
//! 3. TOML file specified via the `--config` flag
//! 4. `$XDG_CONFIG_HOME/aur-talk/aur-talk.toml` (or
//!    `~/.config/aur-talk/aur-talk.toml`)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod defaults;
mod env;
mod sources;
mod types;

pub use defaults::{ALL_COMMENTS, DEFAULT_NUM_COMMENTS, DEFAULT_WIDTH};
pub use types::{Config, DisplayConfig, FetchConfig};

use env::apply_env_overrides;
use sources::{config_root_dir, read_config_text_with_sources};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    tracing::debug!(?source, "loading configuration");

    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&mut config)?;
    Ok(config)
}

fn validate(config: &mut Config) -> Result<(), ConfigError> {
    if config.display.width == 0 {
        return Err(ConfigError::Invalid(
            "display.width must be at least 1 (use display.free_format for unbounded output)"
                .into(),
        ));
    }
    if config.fetch.num_comments == 0 {
        return Err(ConfigError::Invalid(
            "fetch.num_comments must be at least 1".into(),
        ));
    }
    if config.fetch.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("fetch.base_url must not be empty".into()));
    }
    // A zero timeout would disable the limit entirely.
    config.fetch.timeout_secs = config.fetch.timeout_secs.max(1);
    Ok(())
}
