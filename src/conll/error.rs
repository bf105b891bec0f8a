//! Errors that can occur while reading a corpus

use std::fmt;
use std::path::PathBuf;

/// Errors raised by corpus construction and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// No file exists at the supplied path (checked at construction)
    PathNotFound(PathBuf),
    /// IO error while reading the file
    Io(String),
    /// A token line with fewer than 4 space-separated fields.
    ///
    /// The parse is aborted as a whole; no partial output is returned.
    LineFormat {
        /// 1-based line number of the offending line
        line: usize,
        /// Number of fields found on the line
        found: usize,
        /// The stripped line content
        content: String,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::PathNotFound(path) => {
                write!(f, "path not found: {}", path.display())
            }
            CorpusError::Io(msg) => write!(f, "IO error: {}", msg),
            CorpusError::LineFormat {
                line,
                found,
                content,
            } => write!(
                f,
                "line {}: expected 4 space-separated fields, found {}: {:?}",
                line, found, content
            ),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(err: std::io::Error) -> Self {
        CorpusError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_not_found() {
        let err = CorpusError::PathNotFound(PathBuf::from("missing.conll"));
        assert_eq!(err.to_string(), "path not found: missing.conll");
    }

    #[test]
    fn test_display_line_format() {
        let err = CorpusError::LineFormat {
            line: 7,
            found: 2,
            content: "EU NNP".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 7: expected 4 space-separated fields, found 2: \"EU NNP\""
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CorpusError::from(io);
        assert!(matches!(err, CorpusError::Io(_)));
    }
}
