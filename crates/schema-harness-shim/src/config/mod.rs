//! Configuration loading and resolution.

use std::path::{Path, PathBuf};

use schema_harness::KnownIssues;

use crate::types::ShimResult;

/// Environment variable naming the known-issues file.
pub const SKIPS_ENV: &str = "HARNESS_SKIPS";

const CWD_SKIPS: &str = ".harness/skips.json";

/// Resolve the known-issues file path: explicit > `HARNESS_SKIPS` > `./.harness/skips.json`.
pub fn resolve_skips_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    if let Ok(env_path) = std::env::var(SKIPS_ENV) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    let cwd_skips = PathBuf::from(CWD_SKIPS);
    cwd_skips.exists().then_some(cwd_skips)
}

/// Load known issues from `path`, or an empty set when there is none.
pub fn load_known_issues(path: Option<&Path>) -> ShimResult<KnownIssues> {
    match path {
        Some(path) => Ok(KnownIssues::load(path)?),
        None => Ok(KnownIssues::default()),
    }
}
