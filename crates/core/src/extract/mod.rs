//! Failure extraction: derives the list of test files to rerun from
//! whichever result format the runner left behind

pub mod document_extractor;
pub mod file_lookup;
pub mod summary_extractor;

pub use document_extractor::DocumentExtractor;
pub use file_lookup::FileLookup;
pub use summary_extractor::extract_from_summary;

use std::path::Path;

use crate::error::Result;

/// Which extraction strategy produced the failure list. Returned alongside
/// the list so callers (and tests) can observe the format decision instead
/// of inferring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Per-test result documents in the results directory.
    Documents,
    /// The aggregated run-summary tree.
    Summary,
}

/// Extracts failure identifiers from the per-test documents when a results
/// directory is available, falling back to the run summary when that
/// yields nothing. An empty list is a valid, successful outcome.
pub fn extract_failures(
    results_dir: Option<&Path>,
    summary_file: &Path,
) -> Result<(Vec<String>, ExtractionStrategy)> {
    if let Some(dir) = results_dir {
        let extractor = DocumentExtractor::new()?;
        let identifiers = extractor.extract(dir)?;
        if !identifiers.is_empty() {
            return Ok((identifiers, ExtractionStrategy::Documents));
        }
    }

    Ok((
        extract_from_summary(summary_file),
        ExtractionStrategy::Summary,
    ))
}
