use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One direct child returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub kind: EntryKind,
    /// Byte length; always zero for directories.
    pub size: u64,
}

impl Entry {
    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            size,
        }
    }

    pub fn directory(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            size: 0,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdirectoryTotal {
    pub path: PathBuf,
    pub total_size: u64,
}

/// A child subtree left out of the totals in keep-going mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub root_path: PathBuf,
    /// In discovery order.
    pub totals: Vec<SubdirectoryTotal>,
    pub grand_total: u64,
    pub failures: Vec<ScanFailure>,
}

impl ScanResult {
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            ..Self::default()
        }
    }

    pub fn push(&mut self, total: SubdirectoryTotal) {
        self.grand_total += total.total_size;
        self.totals.push(total);
    }
}
