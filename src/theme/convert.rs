//! VS Code -> TextMate theme conversion.

use std::iter;

use indexmap::IndexMap;
use serde_json::Value;

use super::schema::{Rule, SourceTheme, TargetTheme};
use crate::log_debug;

/// Workbench color keys copied into the TextMate default settings, in application order.
pub const COLOR_MAPPINGS: [(&str, &str); 6] = [
    ("editorCursor.foreground", "caret"),
    ("editor.selectionBackground", "selection"),
    ("editor.lineHighlightBackground", "lineHighlight"),
    ("editor.foreground", "foreground"),
    ("editor.background", "background"),
    ("editorWhitespace.foreground", "invisibles"),
];

/// Options layered on top of the plain conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Replaces the source theme name.
    pub name: Option<String>,
    /// Attached to the output as the theme `uuid`.
    pub uuid: Option<String>,
    /// Additional (source color key -> default settings key) pairs, applied after the built-ins.
    pub extra_mappings: IndexMap<String, String>,
}

/// Convert a VS Code theme into a TextMate theme.
pub fn convert(source: SourceTheme) -> TargetTheme {
    convert_with(source, &ConvertOptions::default())
}

/// Convert a VS Code theme into a TextMate theme with extra options.
///
/// The first unscoped rule becomes the default-settings entry. When that rule sits at index
/// 0 it is reused in place. When it sits later, reusing it in place would leave a scoped rule
/// at `settings[0]`, where TextMate consumers read the global defaults and no `scope` may
/// appear; the two requirements conflict, so the rule is moved to the front instead. Every
/// other rule keeps its relative order. With no unscoped rule an empty one is prepended.
pub fn convert_with(source: SourceTheme, options: &ConvertOptions) -> TargetTheme {
    let SourceTheme {
        name,
        token_colors: mut rules,
        colors,
    } = source;

    let mut defaults = match rules.iter().position(Rule::is_default) {
        Some(index) => {
            log_debug!("Using rule {} as default settings", index);
            rules.remove(index)
        }
        None => {
            log_debug!("No unscoped rule found, synthesizing default settings");
            Rule::default()
        }
    };
    defaults.scope = None;

    copy_colors(&colors, &mut defaults.settings, COLOR_MAPPINGS);
    copy_colors(
        &colors,
        &mut defaults.settings,
        options
            .extra_mappings
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str())),
    );

    for rule in &mut rules {
        rule.normalize_scope();
    }

    TargetTheme {
        name: options.name.clone().or(name),
        settings: iter::once(defaults).chain(rules).collect(),
        uuid: options.uuid.clone(),
    }
}

/// Copy every mapped color present in `colors` into `settings`; absent keys are skipped.
fn copy_colors<'a>(
    colors: &IndexMap<String, Value>,
    settings: &mut IndexMap<String, Value>,
    mappings: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    for (from, to) in mappings {
        if let Some(color) = colors.get(from) {
            settings.insert(to.to_string(), color.clone());
        }
    }
}

/// Default-settings keys TextMate consumers expect but the converted theme lacks.
pub fn missing_defaults(theme: &TargetTheme) -> Vec<&'static str> {
    let defaults = theme.defaults();
    COLOR_MAPPINGS
        .iter()
        .map(|&(_, key)| key)
        .filter(|key| defaults.is_none_or(|rule| !rule.settings.contains_key(*key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Scope;
    use serde_json::json;

    fn source(colors: Value, token_colors: Value) -> SourceTheme {
        serde_json::from_value(json!({
            "name": "Sample",
            "colors": colors,
            "tokenColors": token_colors,
        }))
        .unwrap()
    }

    #[test]
    fn test_copy_colors_skips_absent_keys() {
        let colors: IndexMap<String, Value> =
            [("a".to_string(), json!("#111111"))].into_iter().collect();
        let mut settings = IndexMap::new();

        copy_colors(&colors, &mut settings, [("a", "x"), ("b", "y")]);

        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("x"), Some(&json!("#111111")));
    }

    #[test]
    fn test_later_mapping_overwrites_earlier() {
        let theme = source(
            json!({ "editor.foreground": "#ffffff", "terminal.foreground": "#eeeeee" }),
            json!([]),
        );
        let options = ConvertOptions {
            extra_mappings: [("terminal.foreground".to_string(), "foreground".to_string())]
                .into_iter()
                .collect(),
            ..ConvertOptions::default()
        };

        let converted = convert_with(theme, &options);
        let defaults = converted.defaults().unwrap();
        assert_eq!(defaults.settings.get("foreground"), Some(&json!("#eeeeee")));
    }

    #[test]
    fn test_blank_scope_default_is_cleared() {
        let theme = source(
            json!({}),
            json!([{ "scope": "", "settings": { "foreground": "#abcdef" } }]),
        );

        let converted = convert(theme);
        assert_eq!(converted.settings.len(), 1);
        assert_eq!(converted.settings[0].scope, None);
    }

    #[test]
    fn test_options_override_name_and_set_uuid() {
        let theme = source(json!({}), json!([]));
        let options = ConvertOptions {
            name: Some("Renamed".to_string()),
            uuid: Some("0000-TEST".to_string()),
            ..ConvertOptions::default()
        };

        let converted = convert_with(theme, &options);
        assert_eq!(converted.name.as_deref(), Some("Renamed"));
        assert_eq!(converted.uuid.as_deref(), Some("0000-TEST"));
    }

    #[test]
    fn test_missing_defaults() {
        let theme = source(
            json!({ "editor.foreground": "#ffffff", "editorCursor.foreground": "#ff0000" }),
            json!([{ "scope": ["a"], "settings": {} }]),
        );

        let converted = convert(theme);
        assert_eq!(
            missing_defaults(&converted),
            vec!["selection", "lineHighlight", "background", "invisibles"]
        );
        assert_eq!(converted.settings[1].scope, Some(Scope::from("a")));
    }

    #[test]
    fn test_missing_defaults_without_default_rule() {
        assert_eq!(missing_defaults(&TargetTheme::default()).len(), 6);
    }
}
