//! Stamps the `yt` binary with the version it reports in `--version` and in
//! its User-Agent.
//!
//! The crate version is always used. When built from a git checkout the short
//! commit is appended, e.g. `0.1.0 (3f2a9c1)`, with `-dirty` for uncommitted
//! changes. `YTDATA_BUILD_VERSION` replaces the whole string for packagers.

use std::path::PathBuf;
use std::process::Command;

const OVERRIDE: &str = "YTDATA_BUILD_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={OVERRIDE}");

    let version = match std::env::var(OVERRIDE) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => stamp(env!("CARGO_PKG_VERSION")),
    };

    println!("cargo:rustc-env=YTDATA_VERSION={version}");
}

fn stamp(crate_version: &str) -> String {
    let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]) else {
        return crate_version.to_string();
    };

    // The checkout lives at the workspace root, not next to this crate.
    let git_dir = PathBuf::from(git_dir);
    println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());
    println!("cargo:rerun-if-changed={}", git_dir.join("index").display());

    match git(&["rev-parse", "--short", "HEAD"]) {
        Some(commit) => {
            let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|changes| !changes.is_empty());
            let suffix = if dirty { "-dirty" } else { "" };
            format!("{crate_version} ({commit}{suffix})")
        }
        None => crate_version.to_string(),
    }
}

/// Runs git and returns trimmed stdout; `None` if git is missing or fails.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}
