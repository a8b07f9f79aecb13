//! Package-metadata (.pc) file generation.
//!
//! Field order and spacing are pinned by downstream consumers of the
//! generated files; change them only together with the userspace
//! makefiles. Requires/Requires.private stay empty on purpose, linkage
//! is expressed entirely through Libs.

use std::fs;
use std::path::PathBuf;
use std::slice;

use anyhow::{Context, Result};

use crate::config::BuildEnv;
use crate::descriptor::LibraryDescriptor;
use crate::error::UserbuildError;
use crate::pkgconfig::PkgConfig;

/// Render the .pc content for a library. Every public dependency is
/// resolved with one `--libs` query here, before anything touches the
/// filesystem, so a failed resolution leaves no partial output behind.
pub fn render_pc(
    lib: &LibraryDescriptor,
    env: &BuildEnv,
    tool: &PkgConfig,
) -> Result<String, UserbuildError> {
    let name = lib.pc_name();

    let mut pc = String::new();
    pc.push_str(&format!("prefix={}\n", env.prefix));
    pc.push_str("exec_prefix=${prefix}\n");
    pc.push_str(&format!("libdir={}/lib\n", env.prefix));
    pc.push_str(&format!("includedir={}/include\n\n", env.prefix));

    pc.push_str(&format!("Name: {name}\n"));
    if !lib.description.is_empty() {
        pc.push_str(&format!(
            "Description: {}\n",
            lib.description.replace('"', "")
        ));
    }
    pc.push_str("Requires:\nRequires.private:\n");
    pc.push_str(&format!("Version: {}\n", lib.version));

    pc.push_str(&format!("Libs: -L${{libdir}} -l{name} "));
    for dep in &lib.deps {
        let flags = tool.libs(slice::from_ref(dep))?;
        pc.push_str(&flags);
        pc.push(' ');
    }
    pc.push('\n');

    pc.push_str("Libs.private: ");
    for dep in &lib.deps_private {
        pc.push_str(&format!("-l{dep} "));
    }
    pc.push('\n');

    pc.push_str(&format!("Cflags: -I${{includedir}} {}\n", lib.cflags));

    Ok(pc)
}

/// Render and write `<sysroot><prefix>/lib/pkgconfig/<name>.pc`,
/// returning the written path.
pub fn emit_pc_file(
    lib: &LibraryDescriptor,
    env: &BuildEnv,
    tool: &PkgConfig,
) -> Result<PathBuf> {
    let content = render_pc(lib, env, tool)?;

    let dir = env.pkgconfig_dir();
    let _ = fs::create_dir_all(&dir);

    let path = dir.join(format!("{}.pc", lib.pc_name()));
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
