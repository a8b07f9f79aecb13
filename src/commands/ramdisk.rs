//! Ramdisk command - packs a staged root into the boot archive.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::ramdisk;

/// Execute the ramdisk command.
pub fn cmd_ramdisk(source: &Path, output: &Path) -> Result<()> {
    println!("Packing {} into {}...", source.display(), output.display());

    let entries = ramdisk::pack_ramdisk(source, output)?;

    let size_mb = fs::metadata(output)?.len() as f64 / 1024.0 / 1024.0;
    println!("  Ramdisk size: {:.2} MB ({} entries)", size_mb, entries);

    Ok(())
}
