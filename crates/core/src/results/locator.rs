//! Locates the most recent result set on disk

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;

/// Directory name the runner uses for result sets embedded in a report
/// archive.
const EMBEDDED_RESULTS_DIR: &str = "allure-results";

/// Which result-set location was selected for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSource {
    /// The canonical results directory.
    Canonical(PathBuf),
    /// The newest embedded results directory found in the reports archive.
    Archive(PathBuf),
}

impl ResultSource {
    pub fn path(&self) -> &Path {
        match self {
            ResultSource::Canonical(path) | ResultSource::Archive(path) => path,
        }
    }
}

/// Finds the most recent result-set directory, preferring the canonical
/// location over archived copies. Returns `None` when neither exists;
/// downstream treats that as "nothing to extract", not an error.
pub fn locate(config: &Config) -> Result<Option<ResultSource>> {
    if config.results_dir.is_dir() {
        debug!(
            "using canonical results directory {}",
            config.results_dir.display()
        );
        return Ok(Some(ResultSource::Canonical(config.results_dir.clone())));
    }

    if !config.report_archive_dir.is_dir() {
        debug!("no results directory and no report archive");
        return Ok(None);
    }

    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in WalkDir::new(&config.report_archive_dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name() != OsStr::new(EMBEDDED_RESULTS_DIR) {
            continue;
        }
        let modified = entry
            .metadata()
            .ok()
            .and_then(|metadata| metadata.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        candidates.push((modified, entry.into_path()));
    }

    // Newest first
    candidates.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(candidates
        .into_iter()
        .next()
        .map(|(_, path)| ResultSource::Archive(path)))
}
