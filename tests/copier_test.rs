use std::fs;
use std::path::Path;

use stencil::copier::copy_tree;
use stencil::ignore::exclusion_set;
use tempfile::TempDir;

fn write_file(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_copies_nested_tree() {
    let source = TempDir::new().unwrap();
    write_file(&source.path().join("pubspec.yaml"), b"name: base_app\n");
    write_file(&source.path().join("lib/main.dart"), b"void main() {}\n");
    write_file(&source.path().join("lib/src/widgets/button.dart"), b"class Button {}\n");

    let dest = TempDir::new().unwrap();
    copy_tree(source.path(), dest.path(), &exclusion_set().unwrap()).unwrap();

    assert!(dest.path().join("pubspec.yaml").is_file());
    assert!(dest.path().join("lib/main.dart").is_file());
    assert!(dest.path().join("lib/src/widgets/button.dart").is_file());
    assert!(!dir_diff::is_different(source.path(), dest.path()).unwrap());
}

#[test]
fn test_excluded_entries_are_skipped_at_any_depth() {
    let source = TempDir::new().unwrap();
    write_file(&source.path().join("pubspec.yaml"), b"name: base_app\n");
    write_file(&source.path().join("build/app.apk"), b"binary");
    write_file(&source.path().join(".dart_tool/package_config.json"), b"{}");
    write_file(&source.path().join(".git/HEAD"), b"ref: refs/heads/main\n");
    write_file(&source.path().join(".flutter-plugins"), b"");
    write_file(&source.path().join(".flutter-plugins-dependencies"), b"");
    // Nested one level down as well
    write_file(&source.path().join("android/build/output.txt"), b"junk");
    write_file(&source.path().join("android/app/build.gradle"), b"android {}\n");

    let dest = TempDir::new().unwrap();
    copy_tree(source.path(), dest.path(), &exclusion_set().unwrap()).unwrap();

    assert!(!dest.path().join("build").exists());
    assert!(!dest.path().join(".dart_tool").exists());
    assert!(!dest.path().join(".git").exists());
    assert!(!dest.path().join(".flutter-plugins").exists());
    assert!(!dest.path().join(".flutter-plugins-dependencies").exists());
    assert!(!dest.path().join("android/build").exists());

    assert!(dest.path().join("android/app/build.gradle").is_file());
}

#[test]
fn test_file_bytes_are_preserved() {
    let source = TempDir::new().unwrap();
    let binary: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    write_file(&source.path().join("assets/icon.png"), &binary);

    let dest = TempDir::new().unwrap();
    copy_tree(source.path(), dest.path(), &exclusion_set().unwrap()).unwrap();

    let copied = fs::read(dest.path().join("assets/icon.png")).unwrap();
    assert_eq!(copied, binary);
}

#[test]
fn test_empty_directories_are_created() {
    let source = TempDir::new().unwrap();
    fs::create_dir_all(source.path().join("assets/images")).unwrap();

    let dest = TempDir::new().unwrap();
    copy_tree(source.path(), dest.path(), &exclusion_set().unwrap()).unwrap();

    assert!(dest.path().join("assets/images").is_dir());
}

#[test]
fn test_missing_source_is_an_error() {
    let dest = TempDir::new().unwrap();
    let result = copy_tree(
        Path::new("/nonexistent/template"),
        dest.path(),
        &exclusion_set().unwrap(),
    );
    assert!(result.is_err());
}
