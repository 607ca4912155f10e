//! JSON Schema dialect identifiers and URI normalization.

use serde_json::Value;
use url::Url;

use crate::types::{HarnessError, HarnessResult};

/// A published JSON Schema dialect, identified by its meta-schema URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    Draft202012,
    Draft201909,
    Draft7,
    Draft6,
    Draft4,
    Draft3,
}

impl Dialect {
    /// Every dialect this harness knows about, newest first.
    pub const ALL: [Dialect; 6] = [
        Dialect::Draft202012,
        Dialect::Draft201909,
        Dialect::Draft7,
        Dialect::Draft6,
        Dialect::Draft4,
        Dialect::Draft3,
    ];

    /// Canonical meta-schema URI, as published.
    pub const fn uri(self) -> &'static str {
        match self {
            Dialect::Draft202012 => "https://json-schema.org/draft/2020-12/schema",
            Dialect::Draft201909 => "https://json-schema.org/draft/2019-09/schema",
            Dialect::Draft7 => "http://json-schema.org/draft-07/schema#",
            Dialect::Draft6 => "http://json-schema.org/draft-06/schema#",
            Dialect::Draft4 => "http://json-schema.org/draft-04/schema#",
            Dialect::Draft3 => "http://json-schema.org/draft-03/schema#",
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Dialect::Draft202012 => "draft2020-12",
            Dialect::Draft201909 => "draft2019-09",
            Dialect::Draft7 => "draft7",
            Dialect::Draft6 => "draft6",
            Dialect::Draft4 => "draft4",
            Dialect::Draft3 => "draft3",
        }
    }

    /// Look up a dialect by URI, ignoring an empty trailing fragment.
    ///
    /// Returns `None` for URIs that are well-formed but name no known dialect.
    pub fn from_uri(uri: &str) -> HarnessResult<Option<Self>> {
        let normalized = normalize_uri(uri)?;
        Ok(Self::ALL
            .into_iter()
            .find(|d| d.uri().trim_end_matches('#') == normalized))
    }

    /// The dialect a schema document declares through `$schema`, if it is known.
    pub fn declared_by(schema: &Value) -> Option<Self> {
        let declared = schema.get("$schema")?.as_str()?;
        Self::from_uri(declared).ok().flatten()
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.uri())
    }
}

/// The dialect most recently selected by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDialect {
    /// Normalized URI as sent.
    pub uri: String,
    /// The known dialect it names, if any.
    pub dialect: Option<Dialect>,
}

impl From<Dialect> for ActiveDialect {
    fn from(dialect: Dialect) -> Self {
        Self {
            uri: dialect.uri().trim_end_matches('#').to_string(),
            dialect: Some(dialect),
        }
    }
}

/// Parse an absolute URI and strip an empty fragment (`...#` is `...`).
pub fn normalize_uri(uri: &str) -> HarnessResult<String> {
    parse_normalized(uri)
        .map(String::from)
        .map_err(|e| HarnessError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })
}

pub(crate) fn parse_normalized(uri: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(uri)?;
    if url.fragment() == Some("") {
        url.set_fragment(None);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_uri_exact() {
        let d = Dialect::from_uri("https://json-schema.org/draft/2020-12/schema").unwrap();
        assert_eq!(d, Some(Dialect::Draft202012));
    }

    #[test]
    fn test_from_uri_empty_fragment() {
        let d = Dialect::from_uri("https://json-schema.org/draft/2020-12/schema#").unwrap();
        assert_eq!(d, Some(Dialect::Draft202012));

        let d = Dialect::from_uri("http://json-schema.org/draft-07/schema").unwrap();
        assert_eq!(d, Some(Dialect::Draft7));
    }

    #[test]
    fn test_from_uri_unknown() {
        let d = Dialect::from_uri("https://example.com/my-dialect").unwrap();
        assert_eq!(d, None);
    }

    #[test]
    fn test_from_uri_nonempty_fragment_is_distinct() {
        let d = Dialect::from_uri("https://json-schema.org/draft/2020-12/schema#meta").unwrap();
        assert_eq!(d, None);
    }

    #[test]
    fn test_from_uri_malformed() {
        assert!(Dialect::from_uri("not a uri").is_err());
        assert!(Dialect::from_uri("").is_err());
    }

    #[test]
    fn test_normalize_keeps_nonempty_fragment() {
        let n = normalize_uri("urn:example:thing#frag").unwrap();
        assert_eq!(n, "urn:example:thing#frag");
    }

    #[test]
    fn test_declared_by() {
        let schema = json!({"$schema": "http://json-schema.org/draft-04/schema#"});
        assert_eq!(Dialect::declared_by(&schema), Some(Dialect::Draft4));
        assert_eq!(Dialect::declared_by(&json!({"type": "string"})), None);
        assert_eq!(Dialect::declared_by(&json!(true)), None);
        assert_eq!(Dialect::declared_by(&json!({"$schema": 12})), None);
    }

    #[test]
    fn test_active_from_known_dialect() {
        let active = ActiveDialect::from(Dialect::Draft7);
        assert_eq!(active.uri, "http://json-schema.org/draft-07/schema");
        assert_eq!(active.dialect, Some(Dialect::Draft7));
    }
}
