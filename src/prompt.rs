//! User confirmation prompts.

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Asks the user to confirm `message`, defaulting to no.
///
/// Returns true without prompting when `skip` is set.
pub fn confirm(skip: bool, message: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))
}
