//! Biome runner: invokes `biome rage --linter` and parses the enabled-rule
//! list out of its plain-text report.

use std::path::Path;

use super::{COMMAND_TIMEOUT, ToolError, resolve_binary, run_command};

/// Raw result of a `biome rage` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeRageResult {
    /// Unmodified rage report, kept for debug dumps.
    pub raw: String,
    /// Rule IDs from the `Enabled rules:` section, e.g.
    /// `suspicious/noCatchAssign`.
    pub rules: Vec<String>,
}

/// Run `biome rage --linter` in `cwd` and extract the enabled rule IDs.
pub fn run_biome_rage(extra_args: &str, cwd: &Path) -> Result<BiomeRageResult, ToolError> {
    let binary = resolve_binary("biome", cwd);

    let mut args = vec!["rage".to_string(), "--linter".to_string()];
    args.extend(extra_args.split_whitespace().map(str::to_string));

    let output = run_command(&binary, &args, cwd, COMMAND_TIMEOUT)?;
    if output.status != 0 {
        return Err(ToolError::Failed {
            command: binary.display().to_string(),
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }

    log::debug!("biome rage output:\n{}", output.stdout);

    let rules = parse_enabled_rules(&output.stdout);
    Ok(BiomeRageResult {
        raw: output.stdout,
        rules,
    })
}

/// Extract rule IDs from the `Enabled rules:` section of a rage report.
///
/// Rule IDs are listed one per line with no prefix. The section ends at the
/// first blank line or at the next section header (a line containing `:`).
pub fn parse_enabled_rules(report: &str) -> Vec<String> {
    let mut rules = Vec::new();
    let mut in_rules_section = false;

    for line in report.lines() {
        let trimmed = line.trim();

        if trimmed == "Enabled rules:" {
            in_rules_section = true;
            continue;
        }
        if in_rules_section && (trimmed.is_empty() || trimmed.contains(':')) {
            in_rules_section = false;
            continue;
        }
        if in_rules_section {
            rules.push(trimmed.to_string());
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
CLI:
  Version:                      1.9.4

Linter:
  Recommended:                  true
  Enabled rules:
    style/useTemplate
    a11y/noAutofocus
    suspicious/noCatchAssign

Workspace:
  Open Documents:               0
";

    #[test]
    fn parses_enabled_rules_section() {
        assert_eq!(
            parse_enabled_rules(SAMPLE_REPORT),
            vec!["style/useTemplate", "a11y/noAutofocus", "suspicious/noCatchAssign"]
        );
    }

    #[test]
    fn section_ends_at_next_header() {
        let report = "Enabled rules:\n  style/useTemplate\nWorkspace:\n  other/ignored\n";
        assert_eq!(parse_enabled_rules(report), vec!["style/useTemplate"]);
    }

    #[test]
    fn no_section_yields_no_rules() {
        assert!(parse_enabled_rules("Linter:\n  Recommended: true\n").is_empty());
        assert!(parse_enabled_rules("").is_empty());
    }
}
