//! Error types for parsing and artifact output

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the form format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A non-blank line has no `=` between the directive and its value
    #[error("line {line}: expected '=' between directive and value")]
    MissingSeparator { line: usize },

    /// The directive side of a line matches no known shape (only raised in strict mode)
    #[error("line {line}: unrecognized directive `{text}`")]
    Unrecognized { line: usize, text: String },
}

/// Errors raised while writing a single artifact
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    /// Path of the artifact or directory that failed
    pub fn path(&self) -> &PathBuf {
        match self {
            OutputError::CreateDir { path, .. } | OutputError::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages_carry_line() {
        let err = ParseError::MissingSeparator { line: 4 };
        assert_eq!(
            err.to_string(),
            "line 4: expected '=' between directive and value"
        );

        let err = ParseError::Unrecognized {
            line: 7,
            text: "select[Colour]".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: unrecognized directive `select[Colour]`");
    }

    #[test]
    fn test_output_error_path_and_source() {
        let err = OutputError::Write {
            path: PathBuf::from("out/index-template.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), &PathBuf::from("out/index-template.html"));
        assert_eq!(err.to_string(), "failed to write out/index-template.html");
        assert!(std::error::Error::source(&err).is_some());
    }
}
