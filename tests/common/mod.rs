//! Shared testing utilities for studiogen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fixed proguard boilerplate every generated project carries.
pub const PROGUARD_RULES: &str = "\
# Add project specific ProGuard rules here.
# By default, the flags in this file are appended to flags specified
# in /home/zhou/opt/android-sdk/tools/proguard/proguard-android.txt
# You can edit the include path and order by changing the proguardFiles
# directive in build.gradle.
#
# For more details, see
#   http://developer.android.com/guide/developing/tools/proguard.html

# Add any project specific keep options here:

# If your project uses WebView with JS, uncomment the following
# and specify the fully qualified class name to the JavaScript interface
# class:
#-keepclassmembers class fqcn.of.javascript.interface.for.webview {
#   public *;
#}
";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `studiogen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("studiogen").expect("Failed to locate studiogen binary");
        cmd.current_dir(self.work_dir()).env_remove("STUDIOGEN_LOG");
        cmd
    }

    /// Read a generated file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Assert that the standard directory tree exists under `base`.
    pub fn assert_directories_exist(&self, base: &str) {
        let base = self.work_dir.join(base);
        for dir in [
            "libs",
            "src/main/java",
            "src/androidTest/java",
            "src/main/assets",
            "src/main/jniLibs",
            "src/main/res",
        ] {
            assert!(base.join(dir).is_dir(), "{} should be a directory", base.join(dir).display());
        }
    }

    /// Assert that `relative` is an empty directory.
    pub fn assert_empty_dir(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        let mut entries = fs::read_dir(&path).expect("directory should be readable");
        assert!(entries.next().is_none(), "{} should be empty", path.display());
    }
}
