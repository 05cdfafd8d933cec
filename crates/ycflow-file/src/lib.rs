//! Atomic text file writer
//!
//! Writes content to a file only when it differs from what is already there,
//! replacing the file atomically through a temporary file in the same
//! directory.

pub mod error;

pub use error::{FileError, Result};

use serde::Serialize;
use sha1::{Digest, Sha1};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Outcome of [`write_text_file`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub path: PathBuf,

    /// SHA-1 of the content, hex encoded
    pub checksum: String,

    pub changed: bool,
}

/// SHA-1 of `data` as lowercase hex
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Make sure `path` has content `content`.
///
/// A bare file name is taken relative to the current directory. In check
/// mode nothing is written and `changed` tells whether a write would happen.
pub fn write_text_file(path: &str, content: &str, check_mode: bool) -> Result<FileResult> {
    if path.is_empty() {
        return Err(FileError::EmptyPath);
    }

    let dest = resolve(path);
    if dest.is_dir() {
        return Err(FileError::DestinationIsDirectory(dest));
    }

    let dir = dest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    check_directory(&dir)?;

    let checksum = sha1_hex(content.as_bytes());
    let changed = match std::fs::read(&dest) {
        Ok(existing) => sha1_hex(&existing) != checksum,
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => return Err(e.into()),
    };

    if changed && !check_mode {
        replace(&dir, &dest, content.as_bytes())?;
        tracing::info!("Wrote {} (sha1 {})", dest.display(), checksum);
    } else if !changed {
        tracing::debug!("{} is up to date", dest.display());
    }

    Ok(FileResult {
        path: dest,
        checksum,
        changed,
    })
}

/// `name` → `./name`, anything with a directory part is kept as is
fn resolve(path: &str) -> PathBuf {
    let path = Path::new(path);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path.to_path_buf(),
        _ => Path::new(".").join(path),
    }
}

fn check_directory(dir: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(FileError::DirectoryNotAccessible(dir.to_path_buf()));
        }
        Err(_) => return Err(FileError::DirectoryNotFound(dir.to_path_buf())),
    };

    if !metadata.is_dir() {
        return Err(FileError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !is_writable(dir, &metadata) {
        return Err(FileError::DirectoryNotWritable(dir.to_path_buf()));
    }
    Ok(())
}

/// Whether the current process may create files in `dir`
#[cfg(unix)]
fn is_writable(dir: &Path, _metadata: &std::fs::Metadata) -> bool {
    nix::unistd::access(dir, nix::unistd::AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable(_dir: &Path, metadata: &std::fs::Metadata) -> bool {
    !metadata.permissions().readonly()
}

/// Write to a temp file next to `dest` and rename it over `dest`.
fn replace(dir: &Path, dest: &Path, content: &[u8]) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => FileError::DirectoryNotWritable(dir.to_path_buf()),
        _ => FileError::Io(e),
    })?;

    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| FileError::Io(e.error))?;
    Ok(())
}
