use std::fs;

use regex::Regex;
use stencil::rewriter::{replace_in_file, rewrite_file};
use tempfile::TempDir;

#[test]
fn test_rewrite_file_replaces_all_matches() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.gradle");
    fs::write(&path, "id \"one\"\nid \"two\"\n").unwrap();

    let pattern = Regex::new(r#"id "[^"]*""#).unwrap();
    rewrite_file(&path, &pattern, "id \"three\"").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "id \"three\"\nid \"three\"\n");
}

#[test]
fn test_rewrite_file_without_match_leaves_content_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.gradle");
    fs::write(&path, "nothing to see here\n").unwrap();

    let pattern = Regex::new(r#"id "[^"]*""#).unwrap();
    rewrite_file(&path, &pattern, "id \"three\"").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "nothing to see here\n");
}

#[test]
fn test_rewrite_file_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();
    let pattern = Regex::new("x").unwrap();
    assert!(rewrite_file(dir.path().join("absent.txt"), &pattern, "y").is_ok());
}

#[test]
fn test_replace_in_file_is_literal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "a.b matches a.b only\n").unwrap();

    // A regex would treat '.' as a wildcard; literal replace must not
    replace_in_file(&path, "a.b", "x").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "x matches x only\n");
}

#[test]
fn test_replace_in_file_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(replace_in_file(dir.path().join("absent.txt"), "old", "new").is_ok());
}
