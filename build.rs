//! Injects build metadata for `aur-talk --version`.
//!
//! Each value can be pinned from the environment for reproducible builds;
//! otherwise it is read from git/date, falling back to "unknown" markers.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "AUR_TALK_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "AUR_TALK_BUILD_TIMESTAMP";

fn main() {
    watch_git_head();

    let detected: [(&str, fn() -> String); 2] = [
        (GIT_HASH_VAR, git_short_hash),
        (TIMESTAMP_VAR, build_timestamp_utc),
    ];
    for (var, detect) in detected {
        println!("cargo:rerun-if-env-changed={var}");
        let value = env::var(var)
            .ok()
            .filter(|pinned| !pinned.trim().is_empty())
            .unwrap_or_else(detect);
        println!("cargo:rustc-env={var}={value}");
    }
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let branch = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_string));
    if let Some(branch) = branch {
        println!("cargo:rerun-if-changed=.git/{branch}");
    }
}

fn git_short_hash() -> String {
    command_stdout("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_timestamp_utc() -> String {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        format!("unix:{secs}")
    })
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_string()).filter(|text| !text.is_empty())
}
