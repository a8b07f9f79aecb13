//! App descriptor: one installable userspace program.

use std::path::Path;

use crate::config::BuildEnv;
use crate::error::UserbuildError;

use super::DescriptorFile;

/// Parsed app descriptor.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    /// Binary name, also the make target name.
    pub name: String,
    /// pkg-config names the app links against.
    pub depends: Vec<String>,
    /// In-OS directory the binary installs to. Always ends with `/`.
    pub install_dir: String,
    /// Root-relative paths to symlink at the installed binary.
    pub symlinks: Vec<String>,
    /// Extra make targets, passed through verbatim.
    pub additional_targets: String,
    /// Local compiler flags, prepended to resolved dependency cflags.
    pub cflags: String,
    /// Local linker flags. Surfaced on their own, never merged with
    /// resolved --libs output.
    pub ldflags: String,
}

impl AppDescriptor {
    /// Parse an app descriptor. The declared install directory must
    /// already exist under the sysroot.
    pub fn from_file(path: &Path, env: &BuildEnv) -> Result<Self, UserbuildError> {
        let file = DescriptorFile::load(path)?;

        let name = file.required("NAME", true, false)?;

        let mut install_dir = file.optional("INSTALL_DIR", "/usr/bin/", true, false)?;
        if !install_dir.ends_with('/') {
            install_dir.push('/');
        }
        if !env.under_sysroot(&install_dir).exists() {
            return Err(UserbuildError::PathNotFound { path: install_dir });
        }

        Ok(Self {
            name,
            depends: file.list("DEPENDS")?,
            install_dir,
            symlinks: file.list("SYMLINKS")?,
            additional_targets: file.optional("ADDITIONAL_TARGETS", "", false, false)?,
            cflags: file.optional("CFLAGS", "", false, false)?,
            ldflags: file.optional("LDFLAGS", "", false, false)?,
        })
    }

    /// Absolute in-OS path of the installed binary, the symlink target.
    pub fn install_path(&self) -> String {
        format!("{}{}", self.install_dir, self.name)
    }
}
