//! Theme loader - reads VS Code themes from JSON5 / JSONC files.

use std::path::Path;

use serde_json::Value;

use super::error::ThemeError;
use super::schema::SourceTheme;
use crate::log_debug;

/// Load a source theme from a file path.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<SourceTheme, ThemeError> {
    let content = std::fs::read_to_string(path).map_err(|e| ThemeError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_from_str(&content, Some(path))
}

/// Load a source theme from JSON5 text.
///
/// Parsing and decoding are separate steps so malformed syntax and a wrong document shape
/// surface as different errors.
///
/// # Errors
/// Returns an error if the text is not JSON5 or is not shaped like a VS Code theme.
pub fn load_from_str(content: &str, path: Option<&Path>) -> Result<SourceTheme, ThemeError> {
    let _span = tracing::debug_span!("load_from_str", bytes = content.len()).entered();

    let value: Value = json5::from_str(content).map_err(|e| ThemeError::ParseError {
        path: path.map(Path::to_path_buf),
        source: e,
    })?;

    let theme: SourceTheme =
        serde_json::from_value(value).map_err(|e| ThemeError::ShapeError {
            path: path.map(Path::to_path_buf),
            source: e,
        })?;

    log_debug!(
        "Loaded theme {:?}: {} token rules, {} colors",
        theme.name,
        theme.token_colors.len(),
        theme.colors.len()
    );
    Ok(theme)
}
