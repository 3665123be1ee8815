//! Bundled Biome rule description table.
//!
//! Biome's rage report lists enabled rule IDs with no metadata, so the
//! descriptions and documentation URLs come from a static JSON table shipped
//! with the tool and refreshed by an offline maintenance script.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

/// Documentation entry for one rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleDoc {
    pub description: String,
    pub url: Option<String>,
}

/// Placeholder description when the table has no entry for a rule.
pub const NO_DESCRIPTION: &str = "No description available";

static BIOME_RULE_DOCS: LazyLock<HashMap<String, RuleDoc>> = LazyLock::new(|| {
    // The table is bundled with the binary; a parse failure is a packaging
    // bug, not a runtime condition.
    serde_json::from_str(include_str!("../data/biome-rules.json"))
        .expect("bundled biome-rules.json is valid JSON")
});

/// Look up the documentation entry for a fully-qualified rule ID.
///
/// Fallback chain: exact match, then the `accessibility` display alias
/// mapped back to the table's `a11y` key, then the category lowercased,
/// then a case-insensitive scan of the whole table.
pub fn lookup(rule_id: &str) -> Option<&'static RuleDoc> {
    let table = &*BIOME_RULE_DOCS;

    if let Some(doc) = table.get(rule_id) {
        return Some(doc);
    }

    if let Some((category, name)) = rule_id.split_once('/') {
        if category == "accessibility" {
            if let Some(doc) = table.get(&format!("a11y/{name}")) {
                return Some(doc);
            }
        }

        let lowercase = category.to_lowercase();
        if lowercase != category {
            if let Some(doc) = table.get(&format!("{lowercase}/{name}")) {
                return Some(doc);
            }
        }
    }

    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(rule_id))
        .map(|(_, doc)| doc)
}
