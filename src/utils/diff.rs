//! Content comparison and conditional file updates for the `check` and
//! `generate` commands.

use std::fs;
use std::io;
use std::path::Path;

/// Result of comparing two content blobs.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareResult {
    pub identical: bool,
    pub message: String,
}

/// Normalize content for comparison: CRLF to LF, surrounding whitespace
/// trimmed.
pub fn normalize_content(content: &str) -> String {
    content.replace("\r\n", "\n").trim().to_string()
}

/// Compare two content strings after normalization.
pub fn compare_content(existing: &str, generated: &str) -> CompareResult {
    if normalize_content(existing) == normalize_content(generated) {
        CompareResult {
            identical: true,
            message: "Contents are identical".to_string(),
        }
    } else {
        CompareResult {
            identical: false,
            message: "Contents differ".to_string(),
        }
    }
}

/// Compare generated content against a file on disk. A missing file is a
/// non-identical result, not an error; read failures propagate.
pub fn compare_with_file(path: &Path, generated: &str) -> io::Result<CompareResult> {
    if !path.exists() {
        log::warn!("target file {} doesn't exist, can't compare", path.display());
        return Ok(CompareResult {
            identical: false,
            message: format!("Target file {} doesn't exist", path.display()),
        });
    }

    let existing = fs::read_to_string(path)?;
    let result = compare_content(&existing, generated);

    if result.identical {
        log::info!("files are identical: {}", path.display());
    } else {
        log::warn!("files differ: {}", path.display());
    }

    Ok(result)
}

/// Write `content` to `path` when it differs from what is already there,
/// creating parent directories as needed. Returns whether a write occurred.
pub fn update_file(path: &Path, content: &str) -> io::Result<bool> {
    if path.exists() {
        let existing = fs::read_to_string(path)?;
        if compare_content(&existing, content).identical {
            log::info!("file content unchanged, no update needed: {}", path.display());
            return Ok(false);
        }
    } else if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    log::info!("updated file: {}", path.display());
    Ok(true)
}
