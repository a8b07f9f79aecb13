//! Genpc command - emits a pkg-config .pc file for a library descriptor.

use std::path::Path;

use anyhow::Result;

use crate::config::BuildEnv;
use crate::descriptor::LibraryDescriptor;
use crate::pcfile;
use crate::pkgconfig::PkgConfig;

/// Execute the genpc command. Silent on success; the makefiles treat any
/// output as noise.
pub fn cmd_genpc(file: &Path) -> Result<()> {
    let env = BuildEnv::from_env()?;
    let lib = LibraryDescriptor::from_file(file)?;
    let tool = PkgConfig::from_env();

    pcfile::emit_pc_file(&lib, &env, &tool)?;
    Ok(())
}
