//! Build environment configuration.
//!
//! Reads SYSROOT and PREFIX from the environment. A `.env` file is loaded
//! by main before this runs; real environment variables take precedence.
//! Components never read the environment themselves, they take a
//! `&BuildEnv` so tests can construct one directly.

use std::env;
use std::path::PathBuf;

use crate::error::UserbuildError;

/// Resolved build environment shared by descriptor-driven operations.
#[derive(Debug, Clone)]
pub struct BuildEnv {
    /// Root of the target filesystem tree being staged.
    pub sysroot: PathBuf,
    /// Installation prefix inside the target (e.g. "/usr").
    pub prefix: String,
}

impl BuildEnv {
    /// Build an environment from explicit values.
    pub fn new(sysroot: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            sysroot: sysroot.into(),
            prefix: prefix.into(),
        }
    }

    /// Load SYSROOT and PREFIX. Both must be set and non-empty.
    pub fn from_env() -> Result<Self, UserbuildError> {
        let sysroot = require_var("SYSROOT")?;
        let prefix = require_var("PREFIX")?;
        Ok(Self {
            sysroot: PathBuf::from(sysroot),
            prefix,
        })
    }

    /// Join an in-OS absolute path under the sysroot.
    pub fn under_sysroot(&self, path: &str) -> PathBuf {
        self.sysroot.join(path.trim_start_matches('/'))
    }

    /// The installation prefix directory under the sysroot.
    pub fn prefix_dir(&self) -> PathBuf {
        self.under_sysroot(&self.prefix)
    }

    /// `<sysroot><prefix>/lib`, where shared libraries install.
    pub fn lib_dir(&self) -> PathBuf {
        self.prefix_dir().join("lib")
    }

    /// `<sysroot><prefix>/lib/pkgconfig`, where generated .pc files land.
    pub fn pkgconfig_dir(&self) -> PathBuf {
        self.lib_dir().join("pkgconfig")
    }
}

fn require_var(name: &str) -> Result<String, UserbuildError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(UserbuildError::MissingEnvironment {
            name: name.to_string(),
        }),
    }
}
