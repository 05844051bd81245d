pub mod lister;

use crate::error::{Error, Result};
use crate::model::{ScanFailure, ScanResult, SubdirectoryTotal};
use humansize::{BINARY, format_size};
use lister::DirectoryLister;
use log::{debug, warn};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Sum files sitting directly in the root into an extra record.
    pub include_root_files: bool,
    /// Skip children whose subtree fails to list instead of aborting.
    pub keep_going: bool,
}

pub struct TreeScanner<L: DirectoryLister> {
    lister: L,
    options: ScanOptions,
}

impl<L: DirectoryLister> TreeScanner<L> {
    pub const fn new(lister: L, options: ScanOptions) -> Self {
        Self { lister, options }
    }

    /// Totals every immediate subdirectory of `root`.
    ///
    /// A root that cannot be listed is always an error. Without `keep_going`
    /// any failure below the root aborts the whole scan.
    pub fn scan_root(&self, root: &Path) -> Result<ScanResult> {
        let entries = self.lister.list(root)?;
        let mut result = ScanResult::new(root.to_path_buf());
        let mut loose_files = 0u64;

        for entry in &entries {
            if !entry.is_dir() {
                loose_files += entry.size;
                continue;
            }

            let path = root.join(&entry.name);
            match self.size_of_subtree(&path) {
                Ok(total_size) => {
                    debug!("{}: {}", path.display(), format_size(total_size, BINARY));
                    result.push(SubdirectoryTotal { path, total_size });
                }
                Err(err) if self.options.keep_going => {
                    warn!("skipping {}: {err}", path.display());
                    result.failures.push(ScanFailure {
                        path,
                        reason: failure_reason(&err),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        if self.options.include_root_files {
            result.push(SubdirectoryTotal {
                path: root.to_path_buf(),
                total_size: loose_files,
            });
        } else if loose_files > 0 {
            debug!(
                "ignoring {} of files directly in {}",
                format_size(loose_files, BINARY),
                root.display()
            );
        }

        Ok(result)
    }

    /// Sum of every file's size beneath `dir`, at any depth.
    ///
    /// Walks with an explicit stack so very deep trees cannot exhaust the
    /// call stack.
    pub fn size_of_subtree(&self, dir: &Path) -> Result<u64> {
        let mut total = 0u64;
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in self.lister.list(&current)? {
                if entry.is_dir() {
                    pending.push(current.join(&entry.name));
                } else {
                    total += entry.size;
                }
            }
        }

        Ok(total)
    }
}

fn failure_reason(err: &Error) -> String {
    match err {
        Error::NotFound { path, source } => format!("{source} ({})", path.display()),
        other => other.to_string(),
    }
}
