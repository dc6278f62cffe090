//! Project name validation.
//! The grammar matches what pub.dev accepts for package names: a
//! lowercase letter followed by lowercase letters, digits or underscores.

use regex::Regex;

/// Pattern every project name must match in full
const NAME_PATTERN: &str = "^[a-z][a-z0-9_]*$";

/// Returns true iff `name` is a valid project identifier.
///
/// Pure predicate, no I/O. Used once as a precondition gate before any
/// filesystem mutation.
pub fn is_valid_name(name: &str) -> bool {
    Regex::new(NAME_PATTERN).unwrap().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_name() {
        assert!(is_valid_name("a"));
    }

    #[test]
    fn test_empty_name() {
        assert!(!is_valid_name(""));
    }
}
