use crate::core::io::archive::{self, ArchiveError};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Paths that have already been handed out by a scan. Grows monotonically.
#[derive(Debug, Clone, Default)]
pub struct KnownFileSet {
    paths: HashSet<PathBuf>,
}

impl KnownFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Returns `true` if the path was not known before.
    fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Outcome of one pass over the input directory.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Newly discovered structure files, in sorted path order.
    pub new_files: Vec<PathBuf>,
    /// Compressed files that could not be unpacked; they are retried on the next scan.
    pub decompression_failures: Vec<(PathBuf, ArchiveError)>,
}

/// Matches file names that look like structure files: any name containing "pdb", ignoring case.
pub fn is_structure_file_name(name: &str) -> bool {
    name.to_lowercase().contains("pdb")
}

/// Incrementally discovers structure files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
}

impl DirectoryScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks the root recursively and returns structure files not yet in `known`.
    ///
    /// Every returned path is added to `known`, so it is reported exactly once per run
    /// regardless of what happens to it downstream. Compressed matches are unpacked
    /// in place first and their decompressed path is reported instead.
    pub fn scan(&self, known: &mut KnownFileSet) -> Result<ScanReport, ScanError> {
        let mut report = ScanReport::default();
        let entries = sorted_entries(&self.root).map_err(|source| ScanError::ReadDir {
            path: self.root.clone(),
            source,
        })?;
        self.visit(entries, known, &mut report);
        debug!(
            "Scan of {:?} found {} new file(s), {} decompression failure(s).",
            &self.root,
            report.new_files.len(),
            report.decompression_failures.len()
        );
        Ok(report)
    }

    fn visit(&self, entries: Vec<PathBuf>, known: &mut KnownFileSet, report: &mut ScanReport) {
        for path in entries {
            // Symlinked directories are not followed.
            let is_real_dir = fs::symlink_metadata(&path)
                .map(|m| m.is_dir())
                .unwrap_or(false);
            if is_real_dir {
                match sorted_entries(&path) {
                    Ok(children) => self.visit(children, known, report),
                    Err(e) => warn!("Skipping unreadable directory {:?}: {}", &path, e),
                }
                continue;
            }
            if !path.is_file() {
                continue;
            }

            let matches = path
                .file_name()
                .map(|name| is_structure_file_name(&name.to_string_lossy()))
                .unwrap_or(false);
            if !matches {
                continue;
            }

            let candidate = if archive::is_compressed(&path) {
                match archive::decompress_in_place(&path) {
                    Ok(decompressed) => decompressed,
                    Err(e) => {
                        warn!("Failed unzipping file {:?}: {}", &path, e);
                        report.decompression_failures.push((path, e));
                        continue;
                    }
                }
            } else {
                path
            };

            if known.insert(candidate.clone()) {
                report.new_files.push(candidate);
            }
        }
    }
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}
