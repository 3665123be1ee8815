//! ESLint rule normalization: resolved-config rule entries classified by
//! severity shape, with disabled rules filtered out.

use std::collections::BTreeMap;

use super::{into_sorted_categories, split_rule_id};
use crate::model::{RuleSetting, RulensLinter, RulensRule, Severity};
use crate::tools::eslint::EslintConfigResult;

pub const LINTER_NAME: &str = "ESLint";

/// Category for built-in rules, which carry no plugin prefix.
pub const CORE_CATEGORY: &str = "ESLint Core";

/// Convert a resolved ESLint config into the shared representation.
///
/// Rules whose setting resolves to `off` are dropped here: a disabled rule
/// is config noise, not documentation.
pub fn normalize_eslint_rules(result: &EslintConfigResult) -> RulensLinter {
    let mut categorized: BTreeMap<String, Vec<RulensRule>> = BTreeMap::new();

    for (id, raw) in &result.rules {
        let setting = RuleSetting::classify(raw);
        let severity = setting.severity();
        if severity == Severity::Off {
            continue;
        }

        let (category, name) = split_rule_id(id, Some(CORE_CATEGORY));
        let options = setting.into_options();

        categorized.entry(category).or_default().push(RulensRule {
            id: id.clone(),
            description: format!("ESLint rule: {name}"),
            name,
            url: None,
            severity: Some(severity),
            options,
        });
    }

    RulensLinter {
        name: LINTER_NAME.to_string(),
        categories: into_sorted_categories(categorized),
    }
}
