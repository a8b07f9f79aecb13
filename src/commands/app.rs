//! App command - queries an app descriptor, optionally creates symlinks.

use std::path::Path;

use anyhow::Result;

use crate::config::BuildEnv;
use crate::descriptor::AppDescriptor;
use crate::pkgconfig::{self, PkgConfig};
use crate::symlink;

/// Which pieces of app information to print or apply. Several may be
/// requested in one invocation; they run in a fixed order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppOptions {
    pub libs: bool,
    pub ldflags: bool,
    pub cflags: bool,
    pub name: bool,
    pub install_dir: bool,
    pub create_symlinks: bool,
    pub additional_targets: bool,
}

/// Execute the app command.
pub fn cmd_app(file: &Path, opts: AppOptions) -> Result<()> {
    let env = BuildEnv::from_env()?;
    let app = AppDescriptor::from_file(file, &env)?;
    let tool = PkgConfig::from_env();

    if opts.libs {
        println!("{}", pkgconfig::resolve_libs(&app.depends, &tool)?);
    }
    if opts.ldflags {
        println!("{}", app.ldflags);
    }
    if opts.cflags {
        println!(
            "{}",
            pkgconfig::resolve_cflags(&app.cflags, &app.depends, &tool)?
        );
    }
    if opts.name {
        println!("{}", app.name);
    }
    if opts.install_dir {
        println!("{}", app.install_dir);
    }
    if opts.create_symlinks {
        symlink::create_app_symlinks(&app, &env)?;
    }
    if opts.additional_targets {
        println!("{}", app.additional_targets);
    }

    Ok(())
}
