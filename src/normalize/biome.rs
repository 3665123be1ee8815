//! Biome rule normalization: rage-report rule IDs enriched with the bundled
//! description table.

use std::collections::BTreeMap;

use super::{into_sorted_categories, split_rule_id};
use crate::descriptions::{self, NO_DESCRIPTION};
use crate::model::{RulensLinter, RulensRule};
use crate::tools::biome::BiomeRageResult;

pub const LINTER_NAME: &str = "Biome";

/// Category rename for presentation: the short internal code Biome uses for
/// its accessibility rules reads better spelled out.
const CATEGORY_ALIASES: &[(&str, &str)] = &[("a11y", "accessibility")];

/// Convert a rage result into the shared representation.
pub fn normalize_biome_rules(result: &BiomeRageResult) -> RulensLinter {
    let mut categorized: BTreeMap<String, Vec<RulensRule>> = BTreeMap::new();

    for id in &result.rules {
        let (category, name) = split_rule_id(id, None);
        let category = display_category(&category);

        let (description, url) = match descriptions::lookup(id) {
            Some(doc) => (doc.description.clone(), doc.url.clone()),
            None => (NO_DESCRIPTION.to_string(), None),
        };

        categorized.entry(category).or_default().push(RulensRule {
            id: id.clone(),
            name,
            description,
            url,
            severity: None,
            options: None,
        });
    }

    RulensLinter {
        name: LINTER_NAME.to_string(),
        categories: into_sorted_categories(categorized),
    }
}

fn display_category(category: &str) -> String {
    CATEGORY_ALIASES
        .iter()
        .find(|(short, _)| *short == category)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| category.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rage_result(rules: &[&str]) -> BiomeRageResult {
        BiomeRageResult {
            raw: String::new(),
            rules: rules.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn categorizes_and_sorts() {
        let linter = normalize_biome_rules(&rage_result(&[
            "style/useTemplate",
            "suspicious/noCatchAssign",
            "style/noVar",
        ]));

        assert_eq!(linter.name, "Biome");
        let names: Vec<&str> = linter.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["style", "suspicious"]);

        let style = &linter.categories[0];
        let rule_names: Vec<&str> = style.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(rule_names, vec!["noVar", "useTemplate"]);
    }

    #[test]
    fn applies_accessibility_alias_but_keeps_raw_id() {
        let linter = normalize_biome_rules(&rage_result(&["a11y/noAutofocus", "style/useTemplate"]));

        // accessibility sorts before style
        assert_eq!(linter.categories[0].name, "accessibility");
        let rule = &linter.categories[0].rules[0];
        assert_eq!(rule.id, "a11y/noAutofocus");
        assert_eq!(rule.name, "noAutofocus");
        assert!(rule.url.is_some());
    }

    #[test]
    fn enriches_from_description_table() {
        let linter = normalize_biome_rules(&rage_result(&["suspicious/noCatchAssign"]));
        let rule = &linter.categories[0].rules[0];
        assert_eq!(rule.description, "Disallow reassigning exceptions in catch clauses.");
        assert_eq!(
            rule.url.as_deref(),
            Some("https://biomejs.dev/linter/rules/no-catch-assign")
        );
    }

    #[test]
    fn unknown_rule_gets_placeholder() {
        let linter = normalize_biome_rules(&rage_result(&["style/someFutureRule"]));
        let rule = &linter.categories[0].rules[0];
        assert_eq!(rule.description, NO_DESCRIPTION);
        assert!(rule.url.is_none());
    }

    #[test]
    fn malformed_ids_collect_under_other() {
        let linter =
            normalize_biome_rules(&rage_result(&["justAName", "too/many/parts", "/empty"]));

        assert_eq!(linter.categories.len(), 1);
        let other = &linter.categories[0];
        assert_eq!(other.name, "other");
        let names: Vec<&str> = other.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["_empty", "justAName", "too_many_parts"]);
    }

    #[test]
    fn duplicate_ids_are_collapsed() {
        let linter = normalize_biome_rules(&rage_result(&["style/noVar", "style/noVar"]));
        assert_eq!(linter.categories[0].rules.len(), 1);
    }

    #[test]
    fn empty_rule_list_yields_no_categories() {
        let linter = normalize_biome_rules(&rage_result(&[]));
        assert!(linter.categories.is_empty());
    }
}
