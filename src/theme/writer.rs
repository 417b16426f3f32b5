//! Theme writer - serializes TextMate themes as XML property lists.

use std::path::Path;

use serde_json::Value;

use super::error::ThemeError;
use super::schema::TargetTheme;
use crate::log_debug;

/// Serialize a theme to XML property list bytes.
///
/// # Errors
/// Returns an error if the theme holds a value a property list cannot represent. A `null`
/// anywhere inside a rule's `settings` or extra keys is rejected with
/// [`ThemeError::NullValue`] rather than written as an empty string.
pub fn to_xml_bytes(theme: &TargetTheme) -> Result<Vec<u8>, ThemeError> {
    reject_nulls(theme)?;

    let mut buffer = Vec::new();
    plist::to_writer_xml(&mut buffer, theme)?;
    Ok(buffer)
}

/// Serialize a theme to an XML property list string.
///
/// # Errors
/// Returns an error if the theme holds a value a property list cannot represent.
pub fn to_xml_string(theme: &TargetTheme) -> Result<String, ThemeError> {
    let bytes = to_xml_bytes(theme)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn reject_nulls(theme: &TargetTheme) -> Result<(), ThemeError> {
    for (index, rule) in theme.settings.iter().enumerate() {
        if let Some((key, _)) = rule
            .settings
            .iter()
            .chain(&rule.extra)
            .find(|(_, value)| contains_null(value))
        {
            return Err(ThemeError::NullValue {
                rule: index,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

/// Write a theme to `path`.
///
/// The document is serialized completely before the file is touched, so a serialize
/// failure leaves no output behind.
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_to_file(theme: &TargetTheme, path: &Path) -> Result<(), ThemeError> {
    let _span = tracing::debug_span!("write_to_file", path = %path.display()).entered();

    let bytes = to_xml_bytes(theme)?;
    std::fs::write(path, &bytes).map_err(|e| ThemeError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    log_debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
