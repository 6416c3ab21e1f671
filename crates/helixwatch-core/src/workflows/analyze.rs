use crate::core::helix::{self, HelixStats};
use crate::core::io::dssp::DsspFile;
use crate::core::io::traits::SecondaryStructureFile;
use crate::engine::error::EngineError;
use crate::engine::extractor::StructureExtractor;
use crate::engine::progress::{EventReporter, MonitorEvent};
use crate::engine::scanner::{DirectoryScanner, KnownFileSet};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Runs DSSP on a single structure file and analyzes the result.
#[instrument(skip(extractor))]
pub fn analyze_file(
    path: &Path,
    extractor: &impl StructureExtractor,
) -> Result<HelixStats, EngineError> {
    let map = extractor.extract(path)?;
    Ok(helix::analyze(&map))
}

/// Analyzes a previously saved DSSP output file without running DSSP.
pub fn analyze_dssp_output(path: &Path) -> Result<HelixStats, EngineError> {
    let map = DsspFile::read_from_path(path)?;
    Ok(helix::analyze(&map))
}

/// Extracts and analyzes one newly discovered file, reporting the outcome.
///
/// Failures are reported and logged, never propagated: one bad file must not stop the loop.
pub(crate) fn process_file(
    path: &Path,
    extractor: &impl StructureExtractor,
    reporter: &EventReporter,
) -> Option<HelixStats> {
    info!("Found new structure file: {:?}", path);
    reporter.report(MonitorEvent::FileDiscovered {
        path: path.to_path_buf(),
    });

    match analyze_file(path, extractor) {
        Ok(stats) => {
            info!(
                "Analyzed {:?}: longest helix {} residue(s), helical content {:?}.",
                path, stats.longest_helix, stats.helical_content
            );
            reporter.report(MonitorEvent::FileAnalyzed {
                path: path.to_path_buf(),
                stats,
            });
            Some(stats)
        }
        Err(e) => {
            warn!("Skipping {:?}: {}", path, e);
            reporter.report(MonitorEvent::FileFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            None
        }
    }
}

/// One polling tick: scan for new files and process each in discovery order.
pub(crate) fn poll_directory(
    scanner: &DirectoryScanner,
    known: &mut KnownFileSet,
    extractor: &impl StructureExtractor,
    reporter: &EventReporter,
) -> Vec<(PathBuf, Option<HelixStats>)> {
    let report = match scanner.scan(known) {
        Ok(report) => report,
        Err(e) => {
            warn!("Directory scan failed: {}", e);
            reporter.report(MonitorEvent::ScanFailed {
                reason: e.to_string(),
            });
            return Vec::new();
        }
    };

    for (path, error) in report.decompression_failures {
        reporter.report(MonitorEvent::DecompressionFailed {
            path,
            reason: error.to_string(),
        });
    }

    report
        .new_files
        .into_iter()
        .map(|path| {
            let stats = process_file(&path, extractor, reporter);
            (path, stats)
        })
        .collect()
}
