//! Ramdisk archive packing.
//!
//! Walks a staged root directory and writes a gzip-compressed USTAR
//! archive the kernel mounts as its initial root filesystem. The first
//! entry is the staged root itself, a directory named exactly `/`; the
//! kernel mounts the first entry as the root node and resolves children
//! by their bare relative names, so everything below it keeps its
//! source-relative path. Ownership is normalized to root, and a couple
//! of top-level directories get fixed permission bits no matter what
//! the staging tree says. Siblings are visited in file-name order so
//! the archive is deterministic.

use std::fs::{self, File};
use std::io;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

use anyhow::{bail, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Builder, EntryType, Header};
use walkdir::{DirEntry, WalkDir};

/// Top-level entries whose permission bits are pinned regardless of the
/// staging tree: /tmp must be sticky world-writable, /var group-writable.
const MODE_OVERRIDES: &[(&str, u32)] = &[("tmp", 0o1777), ("var", 0o775)];

/// Pack `source` into a gzip-compressed USTAR archive at `dest`,
/// replacing any previous archive. Returns the number of entries
/// written, the root entry included.
pub fn pack_ramdisk(source: &Path, dest: &Path) -> Result<u64> {
    match fs::remove_file(dest) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to remove {}", dest.display()));
        }
    }

    let file =
        File::create(dest).with_context(|| format!("Failed to create {}", dest.display()))?;
    let mut archive = Builder::new(GzEncoder::new(file, Compression::default()));

    append_root(&mut archive, source)?;

    let mut entries = 1u64;
    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let rel = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("{} escapes the source tree", entry.path().display()))?;
        append_entry(&mut archive, &entry, rel)?;
        entries += 1;
    }

    let encoder = archive
        .into_inner()
        .context("Failed to flush the archive")?;
    encoder.finish().context("Failed to finish compression")?;

    Ok(entries)
}

/// The root entry must come first, be a directory, and be named exactly
/// `/` or the kernel prefixes that name onto every root-level lookup.
fn append_root(archive: &mut Builder<GzEncoder<File>>, source: &Path) -> Result<()> {
    let meta = fs::metadata(source)
        .with_context(|| format!("Failed to stat {}", source.display()))?;

    let mut header = Header::new_ustar();
    header.set_entry_type(EntryType::Directory);
    header.set_size(0);
    header.set_uid(0);
    header.set_gid(0);
    header.set_mtime(meta.mtime().max(0) as u64);
    header.set_mode(meta.permissions().mode() & 0o7777);
    // set_path refuses absolute names, so write the name field directly.
    header.as_old_mut().name[0] = b'/';
    header.set_cksum();

    archive
        .append(&header, io::empty())
        .context("Failed to append the root entry")
}

fn append_entry(
    archive: &mut Builder<GzEncoder<File>>,
    entry: &DirEntry,
    rel: &Path,
) -> Result<()> {
    let meta = entry
        .metadata()
        .with_context(|| format!("Failed to stat {}", entry.path().display()))?;

    let mut header = Header::new_ustar();
    header.set_uid(0);
    header.set_gid(0);
    header.set_mtime(meta.mtime().max(0) as u64);
    header.set_mode(entry_mode(entry, rel, &meta));

    let file_type = entry.file_type();
    if file_type.is_dir() {
        header.set_entry_type(EntryType::Directory);
        header.set_size(0);
        let name = format!("{}/", rel.display());
        archive
            .append_data(&mut header, &name, io::empty())
            .with_context(|| format!("Failed to append {name}"))?;
    } else if file_type.is_symlink() {
        let target = fs::read_link(entry.path())
            .with_context(|| format!("Failed to read link {}", entry.path().display()))?;
        header.set_entry_type(EntryType::Symlink);
        header.set_size(0);
        archive
            .append_link(&mut header, rel, &target)
            .with_context(|| format!("Failed to append {}", rel.display()))?;
    } else if file_type.is_file() {
        header.set_size(meta.len());
        let data = File::open(entry.path())
            .with_context(|| format!("Failed to open {}", entry.path().display()))?;
        archive
            .append_data(&mut header, rel, data)
            .with_context(|| format!("Failed to append {}", rel.display()))?;
    } else {
        bail!("Unsupported file type at {}", entry.path().display());
    }

    Ok(())
}

fn entry_mode(entry: &DirEntry, rel: &Path, meta: &fs::Metadata) -> u32 {
    if entry.depth() == 1 {
        if let Some(name) = rel.to_str() {
            if let Some(&(_, mode)) = MODE_OVERRIDES.iter().find(|(n, _)| *n == name) {
                return mode;
            }
        }
    }
    meta.permissions().mode() & 0o7777
}
