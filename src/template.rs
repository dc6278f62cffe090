//! Template root inspection.
//! A valid template is an existing directory carrying a pubspec.yaml
//! manifest; the manifest's `name:` key names the project the template
//! was authored as.

use crate::constants::{DEFAULT_PROJECT_NAME, MANIFEST_FILE};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Ensures `template_dir` designates an existing Flutter template.
///
/// # Errors
/// * `Error::TemplateDoesNotExist` if the directory is missing
/// * `Error::NotAFlutterProject` if it has no pubspec.yaml
pub fn ensure_template<P: AsRef<Path>>(template_dir: P) -> Result<()> {
    let template_dir = template_dir.as_ref();
    if !template_dir.is_dir() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: template_dir.display().to_string(),
        });
    }
    if !template_dir.join(MANIFEST_FILE).is_file() {
        return Err(Error::NotAFlutterProject {
            template_dir: template_dir.display().to_string(),
        });
    }
    Ok(())
}

/// Reads the project identifier from the template manifest: the value of
/// the first `name:` key, trimmed. Falls back to the default identifier
/// when the manifest has no such key.
///
/// The manifest is scanned line by line; no YAML parsing is involved.
pub fn original_name<P: AsRef<Path>>(template_dir: P) -> Result<String> {
    let manifest_path = template_dir.as_ref().join(MANIFEST_FILE);
    let content = fs::read_to_string(manifest_path)?;

    for line in content.lines() {
        if let Some(value) = line.strip_prefix("name:") {
            let value = value.trim();
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    debug!("Manifest has no name key, assuming '{}'", DEFAULT_PROJECT_NAME);
    Ok(DEFAULT_PROJECT_NAME.to_string())
}
