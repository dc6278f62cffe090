//! Core project creation orchestration.
//! Sequences validation, tree copy, identifier propagation and platform
//! descriptor updates. A failure part-way through leaves the partially
//! built project directory in place; callers wanting atomicity must
//! remove it on any reported failure.

use crate::copier::copy_tree;
use crate::descriptor::update_descriptors;
use crate::error::{Error, Result};
use crate::ignore::exclusion_set;
use crate::name::is_valid_name;
use crate::propagator::propagate;
use crate::template::{ensure_template, original_name};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates `dest/name` from the template at `template_dir`.
///
/// # Arguments
/// * `name` - Name of the new project; must match the naming grammar
/// * `template_dir` - Existing Flutter project used as the copy source
/// * `org` - Organization identifier, e.g. `com.example`
/// * `dest` - Directory the new project is created under
///
/// # Returns
/// * `Result<PathBuf>` - Root of the newly created project
///
/// # Flow
/// 1. Validates the project name
/// 2. Validates the template directory and its manifest
/// 3. Copies the template tree, minus excluded entries
/// 4. Replaces the template's identifier with `name` in text files
/// 5. Points platform descriptors at `org`.`name`
///
/// # Errors
/// * `Error::InvalidProjectName` if `name` fails the grammar
/// * `Error::TemplateDoesNotExist` / `Error::NotAFlutterProject` for a
///   bad template
/// * `Error::ProjectDirectoryExists` if `dest/name` already exists; the
///   existing directory is never merged or overwritten
/// * `Error::IoError` on any underlying read/write/copy failure
pub fn create_project<P, Q>(name: &str, template_dir: P, org: &str, dest: Q) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    if !is_valid_name(name) {
        return Err(Error::InvalidProjectName { name: name.to_string() });
    }

    let template_dir = template_dir.as_ref();
    ensure_template(template_dir)?;

    let project_root = dest.as_ref().join(name);
    if project_root.exists() {
        return Err(Error::ProjectDirectoryExists {
            project_dir: project_root.display().to_string(),
        });
    }

    let old_name = original_name(template_dir)?;
    debug!("Template project is named '{}'", old_name);

    fs::create_dir_all(&project_root)?;
    copy_tree(template_dir, &project_root, &exclusion_set()?)?;

    propagate(&project_root, &old_name, name)?;

    let package_id = format!("{}.{}", org, name);
    update_descriptors(&project_root, &package_id)?;

    Ok(project_root)
}
