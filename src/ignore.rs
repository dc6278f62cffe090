//! Directory and file exclusion rules applied while copying a template tree.
//! Build output, tool caches and dot-prefixed entries never belong in a
//! freshly stamped project, similar to .gitignore functionality.

use crate::constants::EXCLUDED_NAMES;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiles the fixed exclusion rules into a set of glob patterns.
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns matched against
///   entry base names
///
/// # Notes
/// - The rules are not configurable: the generated directories from
///   `EXCLUDED_NAMES` plus any name beginning with a dot
/// - Matching a directory name excludes its entire subtree, however deep
pub fn exclusion_set() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for name in EXCLUDED_NAMES {
        builder.add(
            Glob::new(name)
                .map_err(|e| Error::ExclusionError(format!("exclusion rules failed: {}", e)))?,
        );
    }
    builder.add(
        Glob::new(".*")
            .map_err(|e| Error::ExclusionError(format!("exclusion rules failed: {}", e)))?,
    );
    let glob_set = builder
        .build()
        .map_err(|e| Error::ExclusionError(format!("exclusion rules failed: {}", e)))?;

    Ok(glob_set)
}
