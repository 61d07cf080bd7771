//! Environment overrides.
//!
//! `AUR_TALK_*` variables override file values; `NO_COLOR` (any non-empty
//! value) turns ANSI output off.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup, "AUR_TALK_BASE_URL") {
        config.fetch.base_url = url;
    }
    if let Some(timeout) = non_empty(env_lookup, "AUR_TALK_TIMEOUT_SECS") {
        config.fetch.timeout_secs = timeout
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "invalid AUR_TALK_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
                ))
            })?;
    }
    if let Some(width) = non_empty(env_lookup, "AUR_TALK_WIDTH") {
        config.display.width = width.parse::<usize>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid AUR_TALK_WIDTH value `{width}`: expected a column count"
            ))
        })?;
    }
    if non_empty(env_lookup, "NO_COLOR").is_some() {
        config.display.color = false;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
