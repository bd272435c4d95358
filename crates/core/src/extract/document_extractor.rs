//! Failure extraction from a directory of per-test result documents

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use super::file_lookup::{lookup_test_file, spec_pattern};
use crate::error::Result;
use crate::results::ResultDocument;

/// File-name suffix the external runner uses for per-test documents.
const RESULT_FILE_SUFFIX: &str = "-result.json";

pub struct DocumentExtractor {
    spec_pattern: Regex,
}

impl DocumentExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            spec_pattern: spec_pattern()?,
        })
    }

    /// Collects the deduplicated identifiers of tests whose latest outcome
    /// is failed, skipped or broken. Malformed documents are skipped, not
    /// fatal; records with no derivable identifier are skipped silently.
    pub fn extract(&self, results_dir: &Path) -> Result<Vec<String>> {
        let mut identifiers = Vec::new();
        let mut seen = HashSet::new();

        // read_dir order is platform-dependent; sort so first-seen order
        // is stable across invocations.
        let mut entries: Vec<_> = fs::read_dir(results_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        entries.sort();

        for path in entries {
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !name.ends_with(RESULT_FILE_SUFFIX) {
                continue;
            }

            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!("skipping unreadable result document {}: {e}", path.display());
                    continue;
                }
            };
            let document: ResultDocument = match serde_json::from_str(&contents) {
                Ok(document) => document,
                Err(e) => {
                    warn!("skipping malformed result document {}: {e}", path.display());
                    continue;
                }
            };

            if !document.effective_status().is_terminal_failure() {
                continue;
            }
            let Some(identifier) = lookup_test_file(&document, &self.spec_pattern) else {
                continue;
            };
            if seen.insert(identifier.clone()) {
                debug!("{identifier} marked for rerun");
                identifiers.push(identifier);
            }
        }

        Ok(identifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn extract(dir: &Path) -> Vec<String> {
        DocumentExtractor::new().unwrap().extract(dir).unwrap()
    }

    #[test]
    fn test_all_passed_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        write_doc(
            temp.path(),
            "a-result.json",
            r#"{"status": "passed", "testFile": "tests/a.spec.js"}"#,
        );
        write_doc(
            temp.path(),
            "b-result.json",
            r#"{"status": "passed", "testFile": "tests/b.spec.js"}"#,
        );

        assert!(extract(temp.path()).is_empty());
    }

    #[test]
    fn test_duplicate_identifiers_appear_once() {
        let temp = TempDir::new().unwrap();
        write_doc(
            temp.path(),
            "a-result.json",
            r#"{"status": "failed", "testFile": "tests/role.spec.js"}"#,
        );
        write_doc(
            temp.path(),
            "b-result.json",
            r#"{"status": "broken", "testFile": "tests/role.spec.js"}"#,
        );

        assert_eq!(extract(temp.path()), vec!["tests/role.spec.js"]);
    }

    #[test]
    fn test_broken_full_name_record_is_extracted() {
        let temp = TempDir::new().unwrap();
        write_doc(
            temp.path(),
            "a-result.json",
            r#"{"status": "broken", "fullName": "tests/admin/role.spec.js > should create"}"#,
        );

        assert_eq!(extract(temp.path()), vec!["tests/admin/role.spec.js"]);
    }

    #[test]
    fn test_backslash_identifiers_are_normalized_before_dedup() {
        let temp = TempDir::new().unwrap();
        write_doc(
            temp.path(),
            "a-result.json",
            r#"{"status": "failed", "testFile": "tests\\admin\\role.spec.js"}"#,
        );
        write_doc(
            temp.path(),
            "b-result.json",
            r#"{"status": "skipped", "testFile": "tests/admin/role.spec.js"}"#,
        );

        assert_eq!(extract(temp.path()), vec!["tests/admin/role.spec.js"]);
    }

    #[test]
    fn test_malformed_document_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_doc(temp.path(), "a-result.json", "{ not json");
        write_doc(
            temp.path(),
            "b-result.json",
            r#"{"status": "failed", "testFile": "tests/b.spec.js"}"#,
        );

        assert_eq!(extract(temp.path()), vec!["tests/b.spec.js"]);
    }

    #[test]
    fn test_record_without_identifier_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_doc(temp.path(), "a-result.json", r#"{"status": "failed"}"#);

        assert!(extract(temp.path()).is_empty());
    }

    #[test]
    fn test_non_result_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        write_doc(
            temp.path(),
            "container.json",
            r#"{"status": "failed", "testFile": "tests/container.spec.js"}"#,
        );
        write_doc(
            temp.path(),
            "a-result.json",
            r#"{"status": "failed", "testFile": "tests/a.spec.js"}"#,
        );

        assert_eq!(extract(temp.path()), vec!["tests/a.spec.js"]);
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let extractor = DocumentExtractor::new().unwrap();

        assert!(extractor.extract(&temp.path().join("absent")).is_err());
    }
}
