//! VS Code to TextMate theme conversion.
//!
//! A VS Code color theme keeps editor chrome colors in a flat `colors` map and syntax
//! highlighting in an ordered `tokenColors` list. A TextMate `.tmTheme` is a property list
//! whose first `settings` entry holds the global defaults and whose remaining entries are
//! scoped rules. Converting between them means:
//!
//! - picking (or synthesizing) the unscoped default rule and putting it first
//! - copying a fixed set of editor colors into the default rule under TextMate names
//! - collapsing list scopes into comma-joined selector strings
//!
//! # Input
//!
//! ```jsonc
//! {
//!     "name": "My Theme",
//!     "colors": {
//!         "editor.foreground": "#ffffff",
//!         "editor.background": "#000000", // comments and trailing commas are fine
//!     },
//!     "tokenColors": [
//!         { "scope": ["comment", "string"], "settings": { "foreground": "#888888" } },
//!     ],
//! }
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use vsc_to_tm::theme;
//!
//! let source = theme::load_from_file(Path::new("my-theme.json"))?;
//! let target = theme::convert(source);
//! theme::write_to_file(&target, Path::new("my-theme.tmTheme"))?;
//! ```

mod convert;
mod error;
mod loader;
mod schema;
mod writer;

use std::path::Path;

// Re-exports
pub use convert::{COLOR_MAPPINGS, ConvertOptions, convert, convert_with, missing_defaults};
pub use error::ThemeError;
pub use loader::{load_from_file, load_from_str};
pub use schema::{Rule, Scope, SourceTheme, TargetTheme};
pub use writer::{to_xml_bytes, to_xml_string, write_to_file};

/// Load `input`, convert it and write the result to `output`.
///
/// Returns the converted theme so callers can report on it.
///
/// # Errors
/// Returns an error if loading, serializing or writing fails. Nothing is written unless the
/// whole document serialized successfully.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<TargetTheme, ThemeError> {
    let _span = tracing::info_span!(
        "convert_file",
        input = %input.display(),
        output = %output.display()
    )
    .entered();

    let source = load_from_file(input)?;
    let target = convert_with(source, options);
    tracing::debug!(
        "Converted {} rules, missing defaults: {:?}",
        target.rules().len(),
        missing_defaults(&target)
    );
    write_to_file(&target, output)?;
    Ok(target)
}

#[cfg(test)]
mod tests;
