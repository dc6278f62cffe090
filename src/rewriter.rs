//! Single-file text rewriting primitives.
//! Both entry points load the whole file as text, substitute, and write
//! the result back to the same path. A missing file is legitimate
//! template variability and rewrites nothing.

use crate::error::Result;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Applies `pattern` globally to the file at `path`, substituting
/// `replacement` for every match.
///
/// # Arguments
/// * `path` - File to rewrite
/// * `pattern` - Pattern locating the text to replace
/// * `replacement` - Replacement text; may reference capture groups
///
/// # Notes
/// - No-op when the file does not exist
/// - A present file without a match is written back unchanged
pub fn rewrite_file<P: AsRef<Path>>(path: P, pattern: &Regex, replacement: &str) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!("Skipping rewrite, '{}' is not present", path.display());
        return Ok(());
    }
    let content = fs::read_to_string(path)?;
    let rewritten = pattern.replace_all(&content, replacement);
    fs::write(path, rewritten.as_bytes())?;
    Ok(())
}

/// Replaces every literal occurrence of `old` with `new` in the file at
/// `path`, in a single left-to-right non-overlapping pass.
///
/// No-op when the file does not exist.
pub fn replace_in_file<P: AsRef<Path>>(path: P, old: &str, new: &str) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        debug!("Skipping replace, '{}' is not present", path.display());
        return Ok(());
    }
    let content = fs::read_to_string(path)?;
    fs::write(path, content.replace(old, new))?;
    Ok(())
}
