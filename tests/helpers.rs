//! Shared test utilities for userbuild tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use userbuild::config::BuildEnv;
use userbuild::pkgconfig::PkgConfig;

/// Test environment with a temporary sysroot tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Sysroot under which installs, symlinks and .pc files land
    pub sysroot: PathBuf,
    /// Base directory for descriptor files and mock tools
    pub base_dir: PathBuf,
}

impl TestEnv {
    /// Create a test environment with the usual sysroot skeleton.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let sysroot = base_dir.join("sysroot");

        for dir in ["usr/bin", "usr/lib", "usr/include"] {
            fs::create_dir_all(sysroot.join(dir)).expect("Failed to create sysroot dir");
        }

        Self {
            _temp_dir: temp_dir,
            sysroot,
            base_dir,
        }
    }

    /// Build environment pointing at the temporary sysroot.
    pub fn build_env(&self) -> BuildEnv {
        BuildEnv::new(&self.sysroot, "/usr")
    }

    /// Write a descriptor file and return its path.
    pub fn write_descriptor(&self, name: &str, content: &str) -> PathBuf {
        let path = self.base_dir.join(name);
        fs::write(&path, content).expect("Failed to write descriptor");
        path
    }

    /// Write a mock pkg-config script with the given shell body.
    ///
    /// The script sees the query flag as $1 and the joined names as $2.
    pub fn mock_pkg_config(&self, body: &str) -> PkgConfig {
        let path = self.base_dir.join("mock-pkg-config");
        write_script(&path, body);
        PkgConfig::new(&path)
    }
}

/// Write an executable shell script.
pub fn write_script(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for script");
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");

    let mut perms = fs::metadata(path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

/// Assert that a symlink exists and points to the expected target.
pub fn assert_symlink(path: &Path, expected_target: &str) {
    assert!(
        path.is_symlink(),
        "Expected symlink at {}, but it's not a symlink",
        path.display()
    );

    let target = fs::read_link(path).expect("Failed to read symlink");
    assert_eq!(
        target.to_string_lossy(),
        expected_target,
        "Symlink {} points to {:?}, expected {}",
        path.display(),
        target,
        expected_target
    );
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content =
        fs::read_to_string(path).expect(&format!("Failed to read file: {}", path.display()));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}
