//! Fallback failure extraction from an aggregated run-summary document

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::results::{RunSummary, Suite, TestStatus};
use crate::utils::paths::normalize_separators;

/// Collects failure identifiers from the summary's nested suite tree. A
/// spec joins the list when any attempt of any of its tests failed or was
/// skipped. A missing or malformed summary yields an empty list.
pub fn extract_from_summary(summary_file: &Path) -> Vec<String> {
    let contents = match fs::read_to_string(summary_file) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("no run summary at {}: {e}", summary_file.display());
            return Vec::new();
        }
    };
    let summary: RunSummary = match serde_json::from_str(&contents) {
        Ok(summary) => summary,
        Err(e) => {
            warn!(
                "skipping malformed run summary {}: {e}",
                summary_file.display()
            );
            return Vec::new();
        }
    };

    let mut identifiers = Vec::new();
    let mut seen = HashSet::new();
    for suite in &summary.suites {
        collect_suite(suite, &mut identifiers, &mut seen);
    }
    identifiers
}

fn collect_suite(suite: &Suite, identifiers: &mut Vec<String>, seen: &mut HashSet<String>) {
    for spec in &suite.specs {
        let any_failed = spec.tests.iter().any(|test| {
            test.results.iter().any(|attempt| {
                matches!(attempt.status, TestStatus::Failed | TestStatus::Skipped)
            })
        });
        if !any_failed {
            continue;
        }
        let identifier = normalize_separators(&spec.file);
        if seen.insert(identifier.clone()) {
            identifiers.push(identifier);
        }
    }

    for nested in &suite.suites {
        collect_suite(nested, identifiers, seen);
    }
}
