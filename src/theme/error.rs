//! Theme error types.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur when loading, converting or writing themes.
#[derive(Debug)]
pub enum ThemeError {
    /// Failed to read or write a theme file.
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Input is not valid JSON5.
    ParseError {
        path: Option<PathBuf>,
        source: json5::Error,
    },
    /// Input parsed but does not have the shape of a VS Code theme.
    ShapeError {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// Converted theme contains a value a property list cannot hold.
    SerializeError { source: plist::Error },
    /// A rule setting is `null`, which has no property list form.
    NullValue { rule: usize, key: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError { path, source } => {
                write!(f, "failed to access theme file '{}': {}", path.display(), source)
            }
            Self::ParseError { path, source } => {
                if let Some(path) = path {
                    write!(f, "failed to parse theme '{}': {}", path.display(), source)
                } else {
                    write!(f, "failed to parse theme: {source}")
                }
            }
            Self::ShapeError { path, source } => {
                if let Some(path) = path {
                    write!(f, "invalid theme structure in '{}': {}", path.display(), source)
                } else {
                    write!(f, "invalid theme structure: {source}")
                }
            }
            Self::SerializeError { source } => {
                write!(f, "failed to serialize property list: {source}")
            }
            Self::NullValue { rule, key } => {
                write!(f, "setting '{key}' of rule {rule} is null; property lists have no null")
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::ParseError { source, .. } => Some(source),
            Self::ShapeError { source, .. } => Some(source),
            Self::SerializeError { source } => Some(source),
            Self::NullValue { .. } => None,
        }
    }
}

impl From<plist::Error> for ThemeError {
    fn from(err: plist::Error) -> Self {
        Self::SerializeError { source: err }
    }
}
