//! Userbuild - userspace build helpers.
//!
//! Small commands the userspace makefiles shell out to: query app and
//! library descriptors, resolve pkg-config flags, emit .pc metadata,
//! create install symlinks, and pack the initial ramdisk.
#![allow(dead_code)]

mod buildrules;
mod commands;
mod config;
mod descriptor;
mod error;
mod pcfile;
mod pkgconfig;
mod ramdisk;
mod symlink;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "userbuild")]
#[command(about = "Userspace build helpers")]
#[command(
    after_help = "ENVIRONMENT:\n  SYSROOT     Target root the build stages into\n  PREFIX      Install prefix inside the target (e.g. /usr)\n  PKG_CONFIG  Override the pkg-config executable"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query an app descriptor or create its install symlinks
    App {
        /// Path to the descriptor file
        file: PathBuf,

        /// Print linker flags resolved from DEPENDS
        #[arg(long)]
        libs: bool,
        /// Print the descriptor's raw LDFLAGS
        #[arg(long)]
        ldflags: bool,
        /// Print local CFLAGS plus flags resolved from DEPENDS
        #[arg(long)]
        cflags: bool,
        /// Print the app name
        #[arg(long)]
        name: bool,
        /// Print the install directory
        #[arg(long)]
        install_dir: bool,
        /// Create the declared symlinks under $SYSROOT
        #[arg(long)]
        create_symlinks: bool,
        /// Print ADDITIONAL_TARGETS verbatim
        #[arg(long)]
        additional_targets: bool,
    },

    /// Query a library descriptor, its symlinks, or its build rules
    Lib {
        /// Path to the descriptor file
        file: PathBuf,

        /// Create versioned .so symlinks under $SYSROOT (shared libraries only)
        #[arg(long)]
        build_symlinks: bool,
        /// Write generated_build_rules.mk in the current directory
        #[arg(long)]
        generate_build_rules: bool,
        /// Print compiler flags resolved from DEPENDS_ON
        #[arg(long)]
        cflags: bool,
        /// Print the canonicalized library name
        #[arg(long)]
        name: bool,
        /// Print the library version
        #[arg(long)]
        version: bool,
        /// Print 1 for shared libraries, 0 otherwise
        #[arg(long)]
        shared: bool,
    },

    /// Emit a pkg-config .pc file for a library descriptor
    Genpc {
        /// Path to the descriptor file
        file: PathBuf,
    },

    /// Pack a directory into a compressed ramdisk archive
    Ramdisk {
        /// Staged root directory to pack
        source: PathBuf,
        /// Output archive path
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::App {
            file,
            libs,
            ldflags,
            cflags,
            name,
            install_dir,
            create_symlinks,
            additional_targets,
        } => {
            let opts = commands::AppOptions {
                libs,
                ldflags,
                cflags,
                name,
                install_dir,
                create_symlinks,
                additional_targets,
            };
            commands::cmd_app(&file, opts)?;
        }

        Commands::Lib {
            file,
            build_symlinks,
            generate_build_rules,
            cflags,
            name,
            version,
            shared,
        } => {
            let opts = commands::LibOptions {
                build_symlinks,
                generate_build_rules,
                cflags,
                name,
                version,
                shared,
            };
            commands::cmd_lib(&file, opts)?;
        }

        Commands::Genpc { file } => {
            commands::cmd_genpc(&file)?;
        }

        Commands::Ramdisk { source, output } => {
            commands::cmd_ramdisk(&source, &output)?;
        }
    }

    Ok(())
}
