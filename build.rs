//! Build script for embedding git and build metadata at compile time.
//!
//! Sets `cargo:rustc-env` variables consumed by the `--version` output
//! of the CLI. Falls back to `"unknown"` when git is
//! unavailable (e.g. Docker builds without `.git`).

use std::process::Command;

/// Try an override env var first (for Docker builds), then fall back to a command.
fn command_or_env(env_key: &str, program: &str, args: &[&str]) -> String {
    println!("cargo:rerun-if-env-changed={env_key}");
    std::env::var(env_key)
        .ok()
        .filter(|s| !s.is_empty() && s != "unknown")
        .unwrap_or_else(|| {
            Command::new(program)
                .args(args)
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "unknown".into())
        })
}

fn main() {
    // Re-run when HEAD changes (branch switch, new commit)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    println!(
        "cargo:rustc-env=WEBRESPONSE_GIT_HASH={}",
        command_or_env(
            "WEBRESPONSE_GIT_HASH_OVERRIDE",
            "git",
            &["rev-parse", "--short", "HEAD"]
        )
    );
    println!(
        "cargo:rustc-env=WEBRESPONSE_BUILD_TIME={}",
        command_or_env(
            "WEBRESPONSE_BUILD_TIME_OVERRIDE",
            "date",
            &["-u", "+%Y-%m-%dT%H:%M:%SZ"]
        )
    );
}
