//! Install-time symlink creation.
//!
//! App links point at in-OS absolute paths, so they are dangling on the
//! host and only resolve once the sysroot boots as the real root.
//! Library links target the shared object inside the sysroot tree.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::BuildEnv;
use crate::descriptor::{AppDescriptor, LibraryDescriptor};

/// What happened when ensuring a symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymlinkOutcome {
    Created,
    /// Something already sits at the link path. Success, so repeated
    /// build runs stay idempotent.
    AlreadyExists,
}

/// Create `link` pointing at `target`. Already-existing paths are
/// success; every other failure propagates.
pub fn ensure_symlink(target: &Path, link: &Path) -> io::Result<SymlinkOutcome> {
    match symlink(target, link) {
        Ok(()) => Ok(SymlinkOutcome::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(SymlinkOutcome::AlreadyExists),
        Err(e) => Err(e),
    }
}

/// Create every symlink an app descriptor declares, each pointing at the
/// installed binary. A failing entry does not stop the remaining entries;
/// any recorded failure fails the operation at the end.
pub fn create_app_symlinks(app: &AppDescriptor, env: &BuildEnv) -> Result<()> {
    let target = app.install_path();
    let mut failed = 0usize;

    for sym in &app.symlinks {
        let link = env.under_sysroot(sym);
        if let Err(e) = link_entry(Path::new(&target), &link) {
            eprintln!("  Failed to link {}: {:#}", link.display(), e);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} symlinks could not be created",
            failed,
            app.symlinks.len()
        );
    }
    Ok(())
}

fn link_entry(target: &Path, link: &Path) -> Result<()> {
    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    ensure_symlink(target, link)?;
    Ok(())
}

/// Create the versioned `.so` symlinks for a shared library. Static
/// libraries are a no-op.
pub fn create_library_symlinks(lib: &LibraryDescriptor, env: &BuildEnv) -> Result<()> {
    if !lib.shared {
        return Ok(());
    }

    let so_path = env.lib_dir().join(format!("{}.so", lib.name));
    println!("Building symlinks to {}", so_path.display());

    for suffix in [lib.version.as_str(), lib.major_version()] {
        let link = PathBuf::from(format!("{}.{}", so_path.display(), suffix));
        ensure_symlink(&so_path, &link)
            .with_context(|| format!("Failed to link {}", link.display()))?;
    }

    Ok(())
}
