//! Command handlers for the rulens CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod check;
pub mod completions;
pub mod generate;
pub mod version;

use std::path::PathBuf;

use rulens_lib::model::RulensLinter;
use rulens_lib::normalize;
use rulens_lib::tools::{biome, eslint};

/// Shared tool flags accepted by `generate` and `check`.
pub struct ToolOptions {
    /// Extra arguments passed through to `biome rage`.
    pub biome_args: String,
    /// Extra arguments passed through to `eslint`.
    pub eslint_args: String,
    /// Path to the ESLint config file (default: `eslint.config.js`).
    pub eslint_config: Option<String>,
}

/// Run every tool and normalize what succeeded. A tool failure is a
/// warning, not an abort; callers treat an empty result as fatal.
pub(crate) fn collect_linters(options: &ToolOptions) -> Vec<RulensLinter> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut linters = Vec::new();

    match biome::run_biome_rage(&options.biome_args, &cwd) {
        Ok(result) => {
            log::info!("found {} Biome rules", result.rules.len());
            linters.push(normalize::normalize_biome_rules(&result));
        }
        Err(error) => {
            log::warn!("Biome not found or failed to run: {error}");
            log::info!("continuing without Biome rules");
        }
    }

    match eslint::run_eslint_config(options.eslint_config.as_deref(), &options.eslint_args, &cwd) {
        Ok(result) => {
            log::info!("found {} configured ESLint rules", result.rules.len());
            linters.push(normalize::normalize_eslint_rules(&result));
        }
        Err(error) => {
            log::warn!("ESLint not found or failed to run: {error}");
            log::info!("continuing without ESLint rules");
        }
    }

    linters
}

pub(crate) const NO_LINTERS_MESSAGE: &str =
    "no linter configurations found; ensure at least one of Biome or ESLint is properly configured";
