//! Library descriptor: one userspace shared or static library.

use std::path::Path;

use crate::error::UserbuildError;

use super::{validate_version, DescriptorFile};

/// Parsed library descriptor.
#[derive(Debug, Clone)]
pub struct LibraryDescriptor {
    /// Library name, canonicalized to carry the `lib` prefix.
    pub name: String,
    /// Free-text description for the generated .pc file. Quote characters
    /// survive parsing and are stripped at render time.
    pub description: String,
    /// Three-component version, e.g. "1.2.0".
    pub version: String,
    /// Public pkg-config dependencies.
    pub deps: Vec<String>,
    /// Private dependencies, linked only through Libs.private.
    pub deps_private: Vec<String>,
    /// Local compiler flags, emitted verbatim into the .pc file.
    pub cflags: String,
    /// False when the descriptor carries the NO_SHARED marker.
    pub shared: bool,
}

impl LibraryDescriptor {
    /// Parse a library descriptor. No environment is needed at parse time.
    pub fn from_file(path: &Path) -> Result<Self, UserbuildError> {
        let file = DescriptorFile::load(path)?;

        let mut name = file.required("NAME", true, false)?;
        if !name.starts_with("lib") {
            name = format!("lib{name}");
        }

        let version = file.optional("VERSION", "1.0.0", true, false)?;
        validate_version("VERSION", &version)?;

        Ok(Self {
            name,
            description: file.optional("DESCRIPTION", "", false, true)?,
            version,
            deps: file.list("DEPENDS_ON")?,
            deps_private: file.list("DEPENDS_ON_PRIV")?,
            cflags: file.optional("CFLAGS", "", false, false)?,
            shared: !file.has_marker("NO_SHARED"),
        })
    }

    /// Name without the `lib` prefix: the pkg-config module name.
    pub fn pc_name(&self) -> &str {
        self.name.strip_prefix("lib").unwrap_or(&self.name)
    }

    /// Major component of the version.
    pub fn major_version(&self) -> &str {
        self.version.split('.').next().unwrap_or(&self.version)
    }
}
