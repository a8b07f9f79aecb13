//! Userbuild library exports for testing.
//!
//! This module exposes internal components for integration testing.

pub mod buildrules;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod pcfile;
pub mod pkgconfig;
pub mod ramdisk;
pub mod symlink;
