//! Platform descriptor rewrites for a freshly stamped project.
//! Each descriptor file carries an embedded application identifier that
//! the template's author baked in; one named pattern rule per file
//! points it at the new package id. Keeping the rules separate lets a
//! future structured parser replace a single rule without touching the
//! others.

use crate::error::Result;
use crate::rewriter::rewrite_file;
use log::debug;
use regex::Regex;
use std::path::Path;

/// One platform descriptor file and the substitution that fixes its
/// embedded application identifier.
struct DescriptorTarget {
    /// Path relative to the project root
    relative_path: &'static str,
    /// Pattern locating the identifier field
    pattern: &'static str,
    /// Replacement template; `{id}` receives the package id
    replacement: &'static str,
}

/// The fixed descriptor table. The Info.plist entry deliberately writes
/// the build-system variable instead of the literal package id; the
/// literal value lives in the Xcode project file.
const DESCRIPTOR_TARGETS: [DescriptorTarget; 5] = [
    DescriptorTarget {
        relative_path: "android/app/build.gradle",
        pattern: r#"applicationId "[^"]*""#,
        replacement: r#"applicationId "{id}""#,
    },
    DescriptorTarget {
        relative_path: "android/app/src/main/AndroidManifest.xml",
        pattern: r#"package="[^"]*""#,
        replacement: r#"package="{id}""#,
    },
    DescriptorTarget {
        relative_path: "android/app/src/main/kotlin/MainActivity.kt",
        pattern: r"(?m)^package [\w.]+",
        replacement: "package {id}",
    },
    DescriptorTarget {
        relative_path: "ios/Runner/Info.plist",
        pattern: r"(<key>CFBundleIdentifier</key>\s*<string>)[^<]*(</string>)",
        replacement: "${1}$(PRODUCT_BUNDLE_IDENTIFIER)${2}",
    },
    DescriptorTarget {
        relative_path: "ios/Runner.xcodeproj/project.pbxproj",
        pattern: r"PRODUCT_BUNDLE_IDENTIFIER = [^;]*;",
        replacement: "PRODUCT_BUNDLE_IDENTIFIER = {id};",
    },
];

/// Points every known platform descriptor at `package_id`.
///
/// # Notes
/// - Each rewrite is a single whole-file pass; multiple matches in one
///   file are all rewritten identically
/// - A missing descriptor file is legitimate template variability
///   (Android-only or iOS-only templates) and is skipped
/// - The rewrites touch disjoint files and are order-independent
pub fn update_descriptors<P: AsRef<Path>>(project_root: P, package_id: &str) -> Result<()> {
    let root = project_root.as_ref();
    for target in &DESCRIPTOR_TARGETS {
        let path = root.join(target.relative_path);
        debug!("Updating descriptor '{}'", path.display());

        // Table patterns are static and known valid.
        let pattern = Regex::new(target.pattern).unwrap();
        let replacement = target.replacement.replace("{id}", package_id);
        rewrite_file(&path, &pattern, &replacement)?;
    }
    Ok(())
}
