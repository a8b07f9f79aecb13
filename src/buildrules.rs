//! Generated make fragment for library builds.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::descriptor::LibraryDescriptor;
use crate::error::UserbuildError;
use crate::pkgconfig::{resolve_cflags, PkgConfig};

/// Render the make fragment a library build includes. Dependency cflags
/// come from the resolver; the descriptor's own CFLAGS belong to the .pc
/// file, not the build rules.
pub fn render_build_rules(
    lib: &LibraryDescriptor,
    tool: &PkgConfig,
) -> Result<String, UserbuildError> {
    let mut rules = String::new();
    rules.push_str(&format!("LIB_PREFIX := {}\n", lib.name));
    rules.push_str(&format!(
        "LIB_SHARED := {}\n",
        if lib.shared { "1" } else { "0" }
    ));

    let cflags = resolve_cflags("", &lib.deps, tool)?;
    if !cflags.is_empty() {
        rules.push_str(&format!("CFLAGS += {cflags}\n"));
    }

    Ok(rules)
}

/// Write the fragment to `path` (conventionally `generated_build_rules.mk`
/// in the directory make runs from).
pub fn write_build_rules(
    lib: &LibraryDescriptor,
    tool: &PkgConfig,
    path: &Path,
) -> Result<()> {
    let rules = render_build_rules(lib, tool)?;
    fs::write(path, rules).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
