//! Error types for content loading operations

use thiserror::Error;

/// Errors surfaced by the content fetching and loading layers.
///
/// The collection loader swallows per-document errors (logging them and
/// degrading to a partial result); everything else propagates these verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The transport reported a non-success HTTP status for a document.
    #[error("Fetch failed for {path}: HTTP {status}")]
    Fetch { path: String, status: u16 },

    /// The response body was not valid JSON, or did not match the
    /// requested document shape. The Content-Type header plays no role
    /// here; it is advisory only.
    #[error("Invalid JSON document at {path}: {reason}")]
    Parse { path: String, reason: String },

    /// The collection name has no entry in the manifest.
    #[error("Unknown collection: {name}")]
    UnknownCollection { name: String },

    /// The request never produced a status (connect failure, timeout,
    /// body read error).
    #[error("Transport error for {path}: {reason}")]
    Transport { path: String, reason: String },
}

impl ContentError {
    /// The logical document path this error relates to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Fetch { path, .. } | Self::Parse { path, .. } | Self::Transport { path, .. } => {
                Some(path)
            }
            Self::UnknownCollection { .. } => None,
        }
    }
}

/// Result type alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = ContentError::Fetch {
            path: "data/settings.json".to_string(),
            status: 404,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("data/settings.json"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ContentError::Parse {
            path: "data/hero.json".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("data/hero.json"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_unknown_collection_display() {
        let err = ContentError::UnknownCollection {
            name: "catalogues".to_string(),
        };
        assert!(format!("{}", err).contains("catalogues"));
    }

    #[test]
    fn test_error_path_accessor() {
        let err = ContentError::Transport {
            path: "data/partners/sogea.json".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(err.path(), Some("data/partners/sogea.json"));

        let err = ContentError::UnknownCollection {
            name: "services".to_string(),
        };
        assert_eq!(err.path(), None);
    }
}
