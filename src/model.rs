//! Shared rule model produced by the normalizers and consumed by the
//! Markdown renderer. All entities are built fresh per invocation and are
//! not mutated after construction.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A single lint rule in the shared representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulensRule {
    /// Fully-qualified rule ID (e.g. `suspicious/noCatchAssign`). Kept in
    /// the raw form reported by the tool, even when the category is
    /// displayed under an alias.
    pub id: String,
    /// Bare rule name (e.g. `noCatchAssign`).
    pub name: String,
    pub description: String,
    /// Documentation URL, when the description table has one.
    pub url: Option<String>,
    /// Enforcement level. Biome's rage report carries none, so only ESLint
    /// rules populate this.
    pub severity: Option<Severity>,
    /// Raw tool-specific option payload, when configured.
    pub options: Option<Value>,
}

/// A named grouping of rules, typically a plugin or rule namespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulensCategory {
    pub name: String,
    pub description: Option<String>,
    /// Sorted by rule name.
    pub rules: Vec<RulensRule>,
}

/// One lint tool's full rule set, organized into categories sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulensLinter {
    pub name: String,
    pub categories: Vec<RulensCategory>,
}

/// Enforcement level of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warn,
    Off,
    Unknown,
}

impl Severity {
    /// Parse a string severity (`"error"`, `"warn"`, `"off"`). Anything
    /// else is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "error" => Severity::Error,
            "warn" => Severity::Warn,
            "off" => Severity::Off,
            _ => Severity::Unknown,
        }
    }

    /// Map ESLint's numeric severity codes: 0 off, 1 warn, 2 error.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Severity::Off,
            1 => Severity::Warn,
            2 => Severity::Error,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Off => "off",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified shape of a raw ESLint rule config value.
///
/// ESLint accepts a string (`"error"`), a numeric code (`2`), or an array
/// whose head is the severity and whose tail is rule options
/// (`["error", {...}]`). One explicit classification replaces the
/// duck typing of those shapes at every use site.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    /// Bare severity, or an array form without options.
    Severity(Severity),
    /// Array form carrying options after the severity.
    WithOptions(Severity, Value),
    /// Anything that is not a recognized rule config shape.
    Unknown,
}

impl RuleSetting {
    pub fn classify(raw: &Value) -> Self {
        match raw {
            Value::String(name) => RuleSetting::Severity(Severity::from_name(name)),
            Value::Number(code) => {
                let severity = code.as_i64().map(Severity::from_code).unwrap_or(Severity::Unknown);
                RuleSetting::Severity(severity)
            }
            Value::Array(items) if !items.is_empty() => {
                let severity = match &items[0] {
                    Value::String(name) => Severity::from_name(name),
                    Value::Number(code) => {
                        code.as_i64().map(Severity::from_code).unwrap_or(Severity::Unknown)
                    }
                    _ => Severity::Unknown,
                };
                let rest = &items[1..];
                match rest {
                    [] => RuleSetting::Severity(severity),
                    [single] => RuleSetting::WithOptions(severity, single.clone()),
                    many => RuleSetting::WithOptions(severity, Value::Array(many.to_vec())),
                }
            }
            _ => RuleSetting::Unknown,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RuleSetting::Severity(severity) | RuleSetting::WithOptions(severity, _) => *severity,
            RuleSetting::Unknown => Severity::Unknown,
        }
    }

    pub fn into_options(self) -> Option<Value> {
        match self {
            RuleSetting::WithOptions(_, options) => Some(options),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_string_severities() {
        assert_eq!(RuleSetting::classify(&json!("error")), RuleSetting::Severity(Severity::Error));
        assert_eq!(RuleSetting::classify(&json!("warn")), RuleSetting::Severity(Severity::Warn));
        assert_eq!(RuleSetting::classify(&json!("off")), RuleSetting::Severity(Severity::Off));
        assert_eq!(
            RuleSetting::classify(&json!("shout")),
            RuleSetting::Severity(Severity::Unknown)
        );
    }

    #[test]
    fn classifies_numeric_severities() {
        assert_eq!(RuleSetting::classify(&json!(0)), RuleSetting::Severity(Severity::Off));
        assert_eq!(RuleSetting::classify(&json!(1)), RuleSetting::Severity(Severity::Warn));
        assert_eq!(RuleSetting::classify(&json!(2)), RuleSetting::Severity(Severity::Error));
        assert_eq!(RuleSetting::classify(&json!(7)), RuleSetting::Severity(Severity::Unknown));
    }

    #[test]
    fn classifies_array_forms() {
        assert_eq!(
            RuleSetting::classify(&json!(["error"])),
            RuleSetting::Severity(Severity::Error)
        );
        assert_eq!(
            RuleSetting::classify(&json!([2, { "allow": ["warn"] }])),
            RuleSetting::WithOptions(Severity::Error, json!({ "allow": ["warn"] }))
        );
        // Multiple option entries stay grouped as an array
        assert_eq!(
            RuleSetting::classify(&json!(["warn", "single", "double"])),
            RuleSetting::WithOptions(Severity::Warn, json!(["single", "double"]))
        );
    }

    #[test]
    fn unrecognized_shapes_are_unknown() {
        assert_eq!(RuleSetting::classify(&json!(null)), RuleSetting::Unknown);
        assert_eq!(RuleSetting::classify(&json!({ "level": "error" })), RuleSetting::Unknown);
        assert_eq!(RuleSetting::classify(&json!([])), RuleSetting::Unknown);
        assert_eq!(RuleSetting::classify(&json!(1.5)), RuleSetting::Severity(Severity::Unknown));
    }

    #[test]
    fn severity_display_matches_wire_names() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(Severity::Off.to_string(), "off");
        assert_eq!(Severity::Unknown.to_string(), "unknown");
    }
}
