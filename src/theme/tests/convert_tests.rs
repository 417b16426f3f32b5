//! Conversion behavior tests

use serde_json::{Value, json};

use crate::theme::{Scope, SourceTheme, convert, load_from_str};

fn source(colors: Value, token_colors: Value) -> SourceTheme {
    serde_json::from_value(json!({
        "name": "Fixture",
        "colors": colors,
        "tokenColors": token_colors,
    }))
    .expect("fixture should decode")
}

fn scopes(theme: &crate::theme::TargetTheme) -> Vec<Option<String>> {
    theme
        .settings
        .iter()
        .map(|rule| rule.scope.as_ref().map(ToString::to_string))
        .collect()
}

#[test]
fn test_default_rule_synthesized_when_absent() {
    let theme = source(
        json!({}),
        json!([
            { "scope": "comment", "settings": { "foreground": "#888888" } },
            { "scope": "keyword", "settings": { "foreground": "#ff00ff" } }
        ]),
    );

    let converted = convert(theme);

    assert_eq!(converted.settings.len(), 3);
    assert_eq!(converted.settings[0].scope, None);
    assert!(converted.settings[0].settings.is_empty());
    assert_eq!(
        scopes(&converted),
        vec![None, Some("comment".to_string()), Some("keyword".to_string())]
    );
}

#[test]
fn test_leading_default_rule_reused_in_place() {
    let theme = source(
        json!({ "editor.background": "#000000" }),
        json!([
            { "settings": { "foreground": "#cccccc" } },
            { "scope": "comment", "settings": {} }
        ]),
    );

    let converted = convert(theme);

    assert_eq!(converted.settings.len(), 2);
    let defaults = &converted.settings[0].settings;
    assert_eq!(defaults.get("foreground"), Some(&json!("#cccccc")));
    assert_eq!(defaults.get("background"), Some(&json!("#000000")));
    assert_eq!(converted.settings[1].scope, Some(Scope::from("comment")));
}

#[test]
fn test_later_default_rule_moves_to_front() {
    let theme = source(
        json!({ "editor.foreground": "#ffffff" }),
        json!([
            { "scope": "comment", "settings": {} },
            { "scope": "string", "settings": {} },
            { "settings": { "caret": "#ff0000" } },
            { "scope": "keyword", "settings": {} }
        ]),
    );

    let converted = convert(theme);

    assert_eq!(converted.settings.len(), 4);
    assert_eq!(
        scopes(&converted),
        vec![
            None,
            Some("comment".to_string()),
            Some("string".to_string()),
            Some("keyword".to_string())
        ]
    );
    let defaults = &converted.settings[0].settings;
    assert_eq!(defaults.get("caret"), Some(&json!("#ff0000")));
    assert_eq!(defaults.get("foreground"), Some(&json!("#ffffff")));
}

#[test]
fn test_only_first_unscoped_rule_becomes_default() {
    let theme = source(
        json!({}),
        json!([
            { "settings": { "foreground": "#111111" } },
            { "settings": { "foreground": "#222222" } }
        ]),
    );

    let converted = convert(theme);

    assert_eq!(converted.settings.len(), 2);
    assert_eq!(
        converted.settings[0].settings.get("foreground"),
        Some(&json!("#111111"))
    );
    assert_eq!(converted.settings[1].scope, None);
}

#[test]
fn test_all_recognized_colors_copied() {
    let theme = source(
        json!({
            "editorCursor.foreground": "#aeafad",
            "editor.selectionBackground": "#264f78",
            "editor.lineHighlightBackground": "#2a2d2e",
            "editor.foreground": "#d4d4d4",
            "editor.background": "#1e1e1e",
            "editorWhitespace.foreground": "#3b3b3b",
            "sideBar.background": "#252526"
        }),
        json!([]),
    );

    let converted = convert(theme);
    let defaults = &converted.settings[0].settings;

    assert_eq!(defaults.len(), 6);
    assert_eq!(defaults.get("caret"), Some(&json!("#aeafad")));
    assert_eq!(defaults.get("selection"), Some(&json!("#264f78")));
    assert_eq!(defaults.get("lineHighlight"), Some(&json!("#2a2d2e")));
    assert_eq!(defaults.get("foreground"), Some(&json!("#d4d4d4")));
    assert_eq!(defaults.get("background"), Some(&json!("#1e1e1e")));
    assert_eq!(defaults.get("invisibles"), Some(&json!("#3b3b3b")));
    assert!(!defaults.contains_key("sideBar.background"));
}

#[test]
fn test_absent_colors_not_emitted() {
    let theme = source(json!({ "editor.foreground": "#d4d4d4" }), json!([]));

    let converted = convert(theme);
    let defaults = &converted.settings[0].settings;

    assert_eq!(defaults.len(), 1);
    for key in ["caret", "selection", "lineHighlight", "background", "invisibles"] {
        assert!(!defaults.contains_key(key), "unexpected key {key}");
    }
}

#[test]
fn test_scope_stringification() {
    let theme = source(
        json!({}),
        json!([
            { "scope": ["comment", "string"], "settings": {} },
            { "scope": "keyword.control", "settings": {} },
            { "scope": ["entity.name.function"], "settings": {} }
        ]),
    );

    let converted = convert(theme);

    assert_eq!(converted.settings[1].scope, Some(Scope::from("comment,string")));
    assert_eq!(converted.settings[2].scope, Some(Scope::from("keyword.control")));
    assert_eq!(
        converted.settings[3].scope,
        Some(Scope::from("entity.name.function"))
    );
}

#[test]
fn test_rule_extras_pass_through() {
    let theme = source(
        json!({}),
        json!([
            { "name": "Comments", "scope": "comment", "settings": { "fontStyle": "italic" } }
        ]),
    );

    let converted = convert(theme);
    let rule = &converted.settings[1];

    assert_eq!(rule.extra.get("name"), Some(&json!("Comments")));
    assert_eq!(rule.settings.get("fontStyle"), Some(&json!("italic")));
}

#[test]
fn test_name_carried_over() {
    let converted = convert(source(json!({}), json!([])));
    assert_eq!(converted.name.as_deref(), Some("Fixture"));
    assert_eq!(converted.uuid, None);
}

#[test]
fn test_reference_scenario() {
    let text = r##"{
        "colors": { "editor.foreground": "#ffffff", "editor.background": "#000000" },
        "tokenColors": [
            { "scope": ["comment", "string"], "settings": { "foreground": "#888888" } }
        ]
    }"##;

    let converted = convert(load_from_str(text, None).expect("fixture should load"));
    let settings = serde_json::to_value(&converted.settings).expect("settings serialize");

    assert_eq!(
        settings,
        json!([
            { "settings": { "foreground": "#ffffff", "background": "#000000" } },
            { "scope": "comment,string", "settings": { "foreground": "#888888" } }
        ])
    );
}
