//! Identifier propagation across the new project's text files.
//! Performs a literal, global substring replace of the template's
//! project name with the new one. Identifiers are constrained by the
//! naming grammar, so no escaping is needed.

use crate::constants::{LIB_DIR, MANIFEST_FILE, README_FILE, TEST_DIR, TEXT_EXTENSIONS};
use crate::error::{Error, Result};
use crate::rewriter::replace_in_file;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Whether a file's suffix makes it eligible for identifier propagation.
fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Rewrites every eligible file under `subtree`. Skips the whole subtree
/// when the template never had one.
fn propagate_subtree(subtree: &Path, old: &str, new: &str) -> Result<()> {
    if !subtree.is_dir() {
        debug!("Skipping '{}', not present in project", subtree.display());
        return Ok(());
    }

    for dir_entry in WalkDir::new(subtree) {
        let entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_file() && is_text_file(entry.path()) {
            replace_in_file(entry.path(), old, new)?;
        }
    }
    Ok(())
}

/// Replaces `old` with `new` across the manifest, the lib and test
/// subtrees, and the README of `project_root`.
///
/// Re-running with the same arguments is a no-op: after the first pass
/// no occurrence of `old` remains.
pub fn propagate<P: AsRef<Path>>(project_root: P, old: &str, new: &str) -> Result<()> {
    let root = project_root.as_ref();
    debug!("Propagating identifier '{}' -> '{}'", old, new);

    replace_in_file(root.join(MANIFEST_FILE), old, new)?;
    propagate_subtree(&root.join(LIB_DIR), old, new)?;
    propagate_subtree(&root.join(TEST_DIR), old, new)?;
    replace_in_file(root.join(README_FILE), old, new)?;

    Ok(())
}
