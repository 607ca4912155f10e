//! Known engine issues: cases reported as skipped instead of run.

use std::collections::HashMap;
use std::path::Path;

use crate::types::{HarnessError, HarnessResult, SkipReason};

/// Skip reasons keyed by test case description.
///
/// On disk this is a JSON object:
/// `{"<case description>": {"message": "...", "issue_url": "..."}}`.
#[derive(Debug, Clone, Default)]
pub struct KnownIssues {
    by_description: HashMap<String, SkipReason>,
}

impl KnownIssues {
    /// Load known issues from a JSON file.
    pub fn load(path: &Path) -> HarnessResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let by_description: HashMap<String, SkipReason> = serde_json::from_str(&data)
            .map_err(|e| HarnessError::KnownIssues(format!("{}: {e}", path.display())))?;

        tracing::info!(
            "Loaded {} known issues from {}",
            by_description.len(),
            path.display()
        );
        Ok(Self { by_description })
    }

    pub fn insert(&mut self, description: impl Into<String>, reason: SkipReason) {
        self.by_description.insert(description.into(), reason);
    }

    pub fn lookup(&self, description: &str) -> Option<&SkipReason> {
        self.by_description.get(description)
    }

    pub fn len(&self) -> usize {
        self.by_description.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "unicode pattern": {{"message": "regex engine lacks \\p classes", "issue_url": "https://example.com/1"}},
                "big numbers": {{"message": "overflow"}}
            }}"#
        )
        .unwrap();

        let issues = KnownIssues::load(file.path()).unwrap();
        assert_eq!(issues.len(), 2);
        let reason = issues.lookup("unicode pattern").unwrap();
        assert_eq!(reason.issue_url.as_deref(), Some("https://example.com/1"));
        assert_eq!(issues.lookup("big numbers").unwrap().issue_url, None);
        assert!(issues.lookup("something else").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KnownIssues::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, HarnessError::Io(_)));
    }

    #[test]
    fn test_load_wrong_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["not", "an", "object"]"#).unwrap();
        let err = KnownIssues::load(file.path()).unwrap_err();
        assert!(matches!(err, HarnessError::KnownIssues(_)));
    }
}
