//! ESLint runner: obtains the resolved configuration through
//! `eslint --print-config` and extracts the `rules` map.
//!
//! The original tool loaded the JavaScript config module in-process; here
//! ESLint itself resolves the configuration and reports it as JSON.

use std::path::Path;

use serde_json::{Map, Value};

use super::{COMMAND_TIMEOUT, ToolError, resolve_binary, run_command};

pub const DEFAULT_CONFIG_PATH: &str = "eslint.config.js";

/// Raw result of an ESLint config resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct EslintConfigResult {
    /// Unmodified `--print-config` JSON, kept for debug dumps.
    pub raw: String,
    /// Rule ID (e.g. `@typescript-eslint/no-explicit-any`) to its raw
    /// config value, in the order ESLint reports them.
    pub rules: Map<String, Value>,
}

/// Resolve the ESLint configuration rooted at `config_path` and extract the
/// configured rules. A missing config file is fatal for this tool's run.
pub fn run_eslint_config(
    config_path: Option<&str>,
    extra_args: &str,
    cwd: &Path,
) -> Result<EslintConfigResult, ToolError> {
    let config_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
    let full_path = cwd.join(config_path);
    if !full_path.exists() {
        return Err(ToolError::ConfigNotFound { path: full_path });
    }

    let binary = resolve_binary("eslint", cwd);

    let mut args = vec![
        "--config".to_string(),
        config_path.to_string(),
        "--print-config".to_string(),
        config_path.to_string(),
    ];
    args.extend(extra_args.split_whitespace().map(str::to_string));

    let output = run_command(&binary, &args, cwd, COMMAND_TIMEOUT)?;
    if output.status != 0 {
        return Err(ToolError::Failed {
            command: binary.display().to_string(),
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }

    let rules = parse_config_rules(&output.stdout).map_err(|reason| ToolError::UnparseableOutput {
        command: binary.display().to_string(),
        reason,
    })?;

    log::debug!("eslint resolved {} configured rules", rules.len());

    Ok(EslintConfigResult {
        raw: output.stdout,
        rules,
    })
}

/// Pull the `rules` object out of a `--print-config` JSON document. A config
/// without a `rules` key resolves to an empty map.
pub fn parse_config_rules(config_json: &str) -> Result<Map<String, Value>, String> {
    let config: Value = serde_json::from_str(config_json).map_err(|e| e.to_string())?;

    match config.get("rules") {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(rules)) => Ok(rules.clone()),
        Some(other) => Err(format!("`rules` is not an object (found {other})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_rules_map() {
        let config = r#"{
            "languageOptions": { "ecmaVersion": "latest" },
            "rules": {
                "no-console": ["error"],
                "@typescript-eslint/no-explicit-any": 2
            }
        }"#;
        let rules = parse_config_rules(config).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules["no-console"], json!(["error"]));
        assert_eq!(rules["@typescript-eslint/no-explicit-any"], json!(2));
    }

    #[test]
    fn missing_rules_key_is_empty() {
        assert!(parse_config_rules(r#"{ "languageOptions": {} }"#).unwrap().is_empty());
        assert!(parse_config_rules(r#"{ "rules": null }"#).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_config_rules("not json").is_err());
        assert!(parse_config_rules(r#"{ "rules": [1, 2] }"#).is_err());
    }

    #[test]
    fn missing_config_file_is_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let result = run_eslint_config(None, "", temp.path());
        assert!(matches!(result, Err(ToolError::ConfigNotFound { .. })));
    }
}
