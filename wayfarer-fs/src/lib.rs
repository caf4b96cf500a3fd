//! Capability-based filesystem helpers for Wayfarer inputs and outputs.
//!
//! Paths are UTF-8 (`camino`) and every operation goes through a `cap-std`
//! directory handle anchored at the filesystem root, the drive prefix, or
//! the current directory.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a file for writing.
///
/// The parent directory must already exist; see [`ensure_parent_dir`].
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Open the directory containing `path` and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (anchor, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    dir.create_dir_all(&relative)
}

/// Report whether `path` exists and is a regular file.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Split `path` into the directory to anchor on and the remainder below it.
///
/// Absolute paths anchor on their root (and drive prefix, where present);
/// relative paths anchor on the current directory.
pub fn split_anchor(path: &Utf8Path) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let mut anchor = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(prefix) => anchor.push(prefix.as_str()),
            Utf8Component::RootDir => anchor.push(std::path::MAIN_SEPARATOR_STR),
            _ => break,
        }
    }
    if anchor.as_str().is_empty() {
        return Ok((Utf8PathBuf::from("."), path.to_path_buf()));
    }
    let relative = path
        .strip_prefix(&anchor)
        .map_err(|_| io::Error::other(format!("failed to strip {anchor} from {path}")))?
        .to_path_buf();
    Ok((anchor, relative))
}
