//! Markdown rendering of the shared rule model.
//!
//! Rendering is a pure function of its input: identical input always
//! produces byte-identical output, which is what makes the diff-based
//! `check` command meaningful.

use crate::model::{RulensCategory, RulensLinter, RulensRule};

/// Document title emitted ahead of the per-linter sections.
pub const DOCUMENT_TITLE: &str = "# Rulens Lint Rules Dump";

/// Introductory paragraph per known linter.
const LINTER_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Biome",
        "Biome enforces modern JavaScript/TypeScript best practices with a focus on correctness, maintainability, and performance.",
    ),
    (
        "ESLint",
        "ESLint provides static analysis focused on identifying potential errors and enforcing coding standards.",
    ),
];

/// Descriptions for well-known categories, used when the category itself
/// carries none.
const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "accessibility",
        "Rules in this category ensure that code is accessible to all users, including those using assistive technologies.",
    ),
    (
        "complexity",
        "Rules in this category help maintain code that is easy to understand, modify, and debug by limiting complexity.",
    ),
    (
        "correctness",
        "Rules in this category identify code that is likely to be incorrect or lead to bugs.",
    ),
    ("nursery", "Newer rules that are still being refined based on community feedback."),
    (
        "performance",
        "Rules in this category help improve application and runtime performance.",
    ),
    (
        "security",
        "Rules in this category identify security vulnerabilities that could be exploited.",
    ),
    ("style", "Rules in this category enforce consistent code style and patterns."),
    (
        "suspicious",
        "Rules in this category identify potentially problematic code patterns.",
    ),
    ("ESLint Core", "Core ESLint rules that apply to JavaScript code."),
];

fn table_get(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Render the full reference document for the given linters.
pub fn render_document(linters: &[RulensLinter]) -> String {
    let sections: Vec<String> = linters.iter().map(render_linter).collect();
    format!("{DOCUMENT_TITLE}\n\n{}", sections.join("\n"))
}

/// Render one linter's section, `## <name> Rules` plus its categories.
pub fn render_linter(linter: &RulensLinter) -> String {
    let mut out = format!("## {} Rules\n\n", linter.name);

    if linter.categories.is_empty() {
        out.push_str("No rules enabled.\n");
        return out;
    }

    if let Some(description) = table_get(LINTER_DESCRIPTIONS, &linter.name) {
        out.push_str(description);
        out.push_str("\n\n");
    }

    // The normalizers sort categories already; sorting again keeps the
    // output deterministic for hand-built inputs too.
    let mut categories: Vec<&RulensCategory> = linter.categories.iter().collect();
    categories.sort_by(|a, b| a.name.cmp(&b.name));

    for (index, category) in categories.iter().enumerate() {
        out.push_str(&render_category(category));
        if index + 1 < categories.len() {
            out.push('\n');
        }
    }

    out
}

fn render_category(category: &RulensCategory) -> String {
    let mut out = format!("### {}\n\n", category.name);

    if category.rules.is_empty() {
        out.push_str("No rules in this category.\n");
        return out;
    }

    let description = category
        .description
        .as_deref()
        .or_else(|| table_get(CATEGORY_DESCRIPTIONS, &category.name));
    if let Some(description) = description {
        out.push_str(description);
        out.push_str("\n\n");
    }

    let mut rules: Vec<&RulensRule> = category.rules.iter().collect();
    rules.sort_by(|a, b| a.name.cmp(&b.name));

    for rule in rules {
        out.push_str(&render_rule_line(rule));
    }

    out
}

/// One bullet line per rule: linked name when a URL exists, then the
/// description, severity, and options payload when present.
fn render_rule_line(rule: &RulensRule) -> String {
    let mut line = match &rule.url {
        Some(url) => format!("- [`{}`]({url}): {}", rule.name, rule.description),
        None => format!("- `{}`: {}", rule.name, rule.description),
    };

    if let Some(severity) = rule.severity {
        line.push_str(&format!(" ({severity})"));
    }

    if let Some(options) = &rule.options {
        let payload =
            serde_json::to_string(options).unwrap_or_else(|_| "complex options".to_string());
        line.push_str(&format!(" Options: {payload}"));
    }

    line.push('\n');
    line
}
