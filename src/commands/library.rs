//! Lib command - queries a library descriptor, optionally creates the
//! versioned .so symlinks or the generated make fragment.

use std::path::Path;

use anyhow::Result;

use crate::buildrules;
use crate::config::BuildEnv;
use crate::descriptor::LibraryDescriptor;
use crate::pkgconfig::{self, PkgConfig};
use crate::symlink;

/// Which pieces of library information to print or apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibOptions {
    pub build_symlinks: bool,
    pub generate_build_rules: bool,
    pub cflags: bool,
    pub name: bool,
    pub version: bool,
    pub shared: bool,
}

/// Execute the lib command. Only --build-symlinks needs the environment;
/// every query works without SYSROOT/PREFIX set.
pub fn cmd_lib(file: &Path, opts: LibOptions) -> Result<()> {
    let lib = LibraryDescriptor::from_file(file)?;
    let tool = PkgConfig::from_env();

    if opts.build_symlinks {
        let env = BuildEnv::from_env()?;
        symlink::create_library_symlinks(&lib, &env)?;
    }
    if opts.generate_build_rules {
        buildrules::write_build_rules(&lib, &tool, Path::new("generated_build_rules.mk"))?;
    }
    if opts.cflags {
        println!("{}", pkgconfig::resolve_cflags("", &lib.deps, &tool)?);
    }
    if opts.name {
        println!("{}", lib.name);
    }
    if opts.version {
        println!("{}", lib.version);
    }
    if opts.shared {
        println!("{}", if lib.shared { "1" } else { "0" });
    }

    Ok(())
}
