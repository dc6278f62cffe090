//! Common constants used throughout the stencil application.

/// Manifest file expected at the root of every Flutter template
pub const MANIFEST_FILE: &str = "pubspec.yaml";

/// Identifier assumed when the template manifest carries no `name:` key
pub const DEFAULT_PROJECT_NAME: &str = "flutter_app";

/// Directory names never copied into a new project
pub const EXCLUDED_NAMES: [&str; 4] =
    ["build", ".dart_tool", ".flutter-plugins", ".flutter-plugins-dependencies"];

/// File suffixes eligible for identifier propagation
pub const TEXT_EXTENSIONS: [&str; 3] = ["dart", "yaml", "md"];

/// Library subtree scanned during identifier propagation
pub const LIB_DIR: &str = "lib";

/// Test subtree scanned during identifier propagation
pub const TEST_DIR: &str = "test";

/// Documentation file rewritten during identifier propagation
pub const README_FILE: &str = "README.md";
