//! Normalization of raw tool output into the shared rule model.
//!
//! Each tool gets its own normalizer; both funnel through the same
//! identifier-splitting rules so a malformed ID can never abort a run.

mod biome;
mod eslint;

pub use biome::normalize_biome_rules;
pub use eslint::normalize_eslint_rules;

use std::collections::BTreeMap;

use crate::model::{RulensCategory, RulensRule};

/// Catch-all category for identifiers that do not follow `category/name`.
pub const FALLBACK_CATEGORY: &str = "other";

/// Split a raw rule identifier into `(category, name)`.
///
/// An identifier without a separator belongs to `default_category` when the
/// tool has one (ESLint core rules). Otherwise — and for any malformed ID
/// (empty segment, more than one separator) — the rule lands in
/// [`FALLBACK_CATEGORY`] with separators flattened into the display name.
pub(crate) fn split_rule_id(id: &str, default_category: Option<&str>) -> (String, String) {
    let parts: Vec<&str> = id.split('/').collect();
    match parts.as_slice() {
        [name] if !name.is_empty() => match default_category {
            Some(category) => (category.to_string(), name.to_string()),
            None => (FALLBACK_CATEGORY.to_string(), name.to_string()),
        },
        [category, name] if !category.is_empty() && !name.is_empty() => {
            (category.to_string(), name.to_string())
        }
        _ => (FALLBACK_CATEGORY.to_string(), id.replace('/', "_")),
    }
}

/// Turn a category-keyed rule collection into the final sorted category
/// list: categories ordered by name, rules within each category ordered by
/// display name, duplicate IDs collapsed.
pub(crate) fn into_sorted_categories(
    categorized: BTreeMap<String, Vec<RulensRule>>,
) -> Vec<RulensCategory> {
    categorized
        .into_iter()
        .map(|(name, mut rules)| {
            rules.sort_by(|a, b| a.name.cmp(&b.name));
            rules.dedup_by(|a, b| a.id == b.id);
            RulensCategory {
                name,
                description: None,
                rules,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_well_formed_ids() {
        assert_eq!(
            split_rule_id("style/useTemplate", None),
            ("style".to_string(), "useTemplate".to_string())
        );
        assert_eq!(
            split_rule_id("@typescript-eslint/no-explicit-any", Some("ESLint Core")),
            ("@typescript-eslint".to_string(), "no-explicit-any".to_string())
        );
    }

    #[test]
    fn bare_name_uses_default_category() {
        assert_eq!(
            split_rule_id("no-console", Some("ESLint Core")),
            ("ESLint Core".to_string(), "no-console".to_string())
        );
        assert_eq!(
            split_rule_id("useTemplate", None),
            (FALLBACK_CATEGORY.to_string(), "useTemplate".to_string())
        );
    }

    #[test]
    fn malformed_ids_land_in_fallback() {
        assert_eq!(
            split_rule_id("a/b/c", Some("ESLint Core")),
            (FALLBACK_CATEGORY.to_string(), "a_b_c".to_string())
        );
        assert_eq!(
            split_rule_id("/noName", None),
            (FALLBACK_CATEGORY.to_string(), "_noName".to_string())
        );
        assert_eq!(
            split_rule_id("style/", None),
            (FALLBACK_CATEGORY.to_string(), "style_".to_string())
        );
        assert_eq!(split_rule_id("", None), (FALLBACK_CATEGORY.to_string(), String::new()));
    }
}
