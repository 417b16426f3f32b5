//! Serde schema types for source (VS Code) and target (TextMate) themes.
//!
//! Both formats share the same rule shape, so a single [`Rule`] type flows from the parsed
//! source straight into the serialized target.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Root structure of a VS Code color theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTheme {
    /// Display name of the theme.
    #[serde(default)]
    pub name: Option<String>,

    /// Ordered token color rules.
    pub token_colors: Vec<Rule>,

    /// Flat workbench color map (`"editor.background" = "#1e1e1e"`).
    pub colors: IndexMap<String, Value>,
}

/// Root structure of a TextMate `.tmTheme` property list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TargetTheme {
    /// Display name of the theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Rules; `settings[0]` holds the global defaults and carries no scope.
    pub settings: Vec<Rule>,

    /// Theme identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl TargetTheme {
    /// The global default-settings rule.
    pub fn defaults(&self) -> Option<&Rule> {
        self.settings.first()
    }

    /// The scoped rules following the defaults.
    pub fn rules(&self) -> &[Rule] {
        self.settings.get(1..).unwrap_or_default()
    }
}

/// A single token color rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Scope selector(s) the rule applies to. Absent for the default rule.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_scope"
    )]
    pub scope: Option<Scope>,

    /// Style settings (`foreground`, `fontStyle`, ...).
    #[serde(default)]
    pub settings: IndexMap<String, Value>,

    /// Any other keys (`name`, ...), passed through untouched.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Rule {
    /// Create a rule with the given scope and no settings.
    pub fn scoped(scope: impl Into<Scope>) -> Self {
        Self {
            scope: Some(scope.into()),
            ..Self::default()
        }
    }

    /// Whether this rule has no usable scope and therefore acts as the default rule.
    pub fn is_default(&self) -> bool {
        self.scope.as_ref().is_none_or(Scope::is_blank)
    }

    /// Collapse a list scope into its comma-joined single-string form.
    pub fn normalize_scope(&mut self) {
        if let Some(scope) = self.scope.as_mut()
            && !scope.is_blank()
        {
            *scope = Scope::Single(scope.to_string());
        }
    }
}

/// Writes a present scope as the bare selector.
///
/// `extra` is flattened, so serde emits `Rule` through its map path, where the plist
/// serializer would otherwise wrap `Some` in a `{Some: ...}` dictionary.
#[allow(clippy::ref_option)]
fn serialize_scope<S: Serializer>(scope: &Option<Scope>, serializer: S) -> Result<S::Ok, S::Error> {
    match scope {
        Some(scope) => scope.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// A rule scope: either a single selector string or a list of selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    Single(String),
    List(Vec<String>),
}

impl Scope {
    /// An empty string scope selects nothing and is treated like a missing one.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Single(s) if s.is_empty())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for Scope {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<String> for Scope {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for Scope {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}
