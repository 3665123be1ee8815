//! Handler for the `generate` command.

use anyhow::{Context, Result, bail};
use colored::*;
use std::path::Path;

use rulens_lib::markdown;
use rulens_lib::utils::diff;

use super::{NO_LINTERS_MESSAGE, ToolOptions, collect_linters};

/// Generate the Markdown reference and write it to `output`.
pub fn handle_generate(output: &str, options: &ToolOptions) -> Result<()> {
    log::info!("generating documentation to {output}");

    let linters = collect_linters(options);
    if linters.is_empty() {
        bail!(NO_LINTERS_MESSAGE);
    }

    let document = markdown::render_document(&linters);
    let updated = diff::update_file(Path::new(output), &document)
        .with_context(|| format!("failed to write {output}"))?;

    if updated {
        println!("{} {output}", "Generated".green().bold());
    } else {
        println!("{} {output} is already up to date", "Unchanged".green());
    }
    Ok(())
}
