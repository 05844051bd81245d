use crate::error::{Error, Result};
use crate::model::Entry;
use log::trace;
use std::fs;
use std::path::Path;

/// Lists the direct children of one directory.
///
/// Implementations never yield the `.` and `..` pseudo-entries. Entry order
/// is unspecified.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>>;
}

/// Lister backed by the local filesystem.
///
/// Symlinks are reported as files carrying the size of the link itself, so
/// linked directories are never descended into.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>> {
        let read_dir = fs::read_dir(path).map_err(|e| Error::not_found(path, e))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| Error::not_found(path, e))?;
            let metadata = dir_entry
                .metadata()
                .map_err(|e| Error::not_found(dir_entry.path(), e))?;

            let name = dir_entry.file_name();
            let entry = if metadata.is_dir() {
                Entry::directory(name)
            } else {
                Entry::file(name, metadata.len())
            };
            entries.push(entry);
        }

        trace!("listed {} entries in {}", entries.len(), path.display());
        Ok(entries)
    }
}
