//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `app` - Query app descriptors and create install symlinks
//! - `library` - Query library descriptors, versioned .so symlinks, build rules
//! - `genpc` - Emit pkg-config metadata for a library
//! - `ramdisk` - Pack a staged root into the boot archive

pub mod app;
pub mod genpc;
pub mod library;
pub mod ramdisk;

pub use app::{cmd_app, AppOptions};
pub use genpc::cmd_genpc;
pub use library::{cmd_lib, LibOptions};
pub use ramdisk::cmd_ramdisk;
