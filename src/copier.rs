//! Recursive template tree copy with exclusion rules.

use crate::error::Result;
use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::Path;

/// Copies every non-excluded descendant of `source` into `destination`.
///
/// # Arguments
/// * `source` - Template directory to copy from
/// * `destination` - Directory to copy into; must already exist
/// * `excluded` - Exclusion rules matched against entry base names
///
/// # Notes
/// - Each level is listed with a single readdir pass; recursion is
///   driven by nested calls, one per subdirectory
/// - An excluded name is skipped without descending, so an excluded
///   directory contributes no file however deep its contents
/// - File bytes are copied verbatim; content is never interpreted
/// - The first I/O failure aborts the whole copy, leaving the partial
///   destination for the caller to deal with
pub fn copy_tree<P, Q>(source: P, destination: Q, excluded: &GlobSet) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = source.as_ref();
    let destination = destination.as_ref();

    for dir_entry in fs::read_dir(source)? {
        let entry = dir_entry?;
        let name = entry.file_name();
        if excluded.is_match(&name) {
            debug!("Skipping excluded entry '{}'", name.to_string_lossy());
            continue;
        }

        let target = destination.join(&name);
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copy_tree(entry.path(), target, excluded)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
