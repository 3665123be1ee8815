//! Handler for the `check` command (alias `lint`): regenerate in memory and
//! diff against the committed documentation.

use anyhow::{Context, Result, bail};
use colored::*;
use std::path::Path;

use rulens_lib::markdown;
use rulens_lib::utils::diff;

use super::{NO_LINTERS_MESSAGE, ToolOptions, collect_linters};

/// Outcome of a check run, mapped to an exit code by `main()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Updated,
    OutOfDate,
}

/// Compare freshly generated documentation against the file at `output`,
/// rewriting it when `update` is set.
pub fn handle_check(output: &str, options: &ToolOptions, update: bool) -> Result<CheckStatus> {
    let path = Path::new(output);
    if !path.exists() {
        bail!("output file {output} does not exist; run `rulens generate` first");
    }

    let linters = collect_linters(options);
    if linters.is_empty() {
        bail!(NO_LINTERS_MESSAGE);
    }

    let document = markdown::render_document(&linters);
    let comparison = diff::compare_with_file(path, &document)
        .with_context(|| format!("failed to compare against {output}"))?;

    if comparison.identical {
        println!("{} lint rules documentation is up to date", "OK".green().bold());
        return Ok(CheckStatus::UpToDate);
    }

    println!("{} lint rules documentation is out of date", "Stale".yellow().bold());

    if update {
        diff::update_file(path, &document).with_context(|| format!("failed to write {output}"))?;
        println!("{} {output}", "Updated".green().bold());
        Ok(CheckStatus::Updated)
    } else {
        println!("run with --update to rewrite it, or run `rulens generate`");
        Ok(CheckStatus::OutOfDate)
    }
}
