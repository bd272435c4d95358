//! Strategies for deriving a test-file identifier from a result document

use regex::Regex;

use crate::error::{Error, Result};
use crate::results::ResultDocument;
use crate::utils::paths::normalize_separators;

/// Pattern for a test-file path embedded in a `fullName` attribute, e.g.
/// `"tests/admin/role.spec.js > should create"`.
const SPEC_FILE_PATTERN: &str = r"tests[/\\][^>\s]*\.spec\.[jt]s";

/// Compiles the `fullName` scan pattern.
pub fn spec_pattern() -> Result<Regex> {
    Regex::new(SPEC_FILE_PATTERN)
        .map_err(|e| Error::Other(format!("invalid spec-file pattern: {e}")))
}

/// The ways a result document can name its test file. Strategies are tried
/// in [`FileLookup::PRIORITY`] order and the first one that yields an
/// identifier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLookup {
    /// A `labels` entry named `testFile`.
    TestFileLabel,
    /// The top-level `testFile` attribute.
    TestFileField,
    /// A `tests/**/*.spec.*` path embedded in `fullName`.
    FullNameScan,
}

impl FileLookup {
    pub const PRIORITY: [FileLookup; 3] = [
        FileLookup::TestFileLabel,
        FileLookup::TestFileField,
        FileLookup::FullNameScan,
    ];

    fn apply(self, document: &ResultDocument, spec_pattern: &Regex) -> Option<String> {
        match self {
            FileLookup::TestFileLabel => document
                .labels
                .iter()
                .find(|label| label.name == "testFile")
                .and_then(|label| label.value.clone()),
            FileLookup::TestFileField => document.test_file.clone(),
            FileLookup::FullNameScan => document
                .full_name
                .as_deref()
                .and_then(|full_name| spec_pattern.find(full_name))
                .map(|matched| matched.as_str().to_string()),
        }
    }
}

/// Derives the test-file identifier for a document, normalized to forward
/// slashes, or `None` when no strategy applies (the record is then skipped
/// by the caller).
pub fn lookup_test_file(document: &ResultDocument, spec_pattern: &Regex) -> Option<String> {
    FileLookup::PRIORITY
        .iter()
        .find_map(|strategy| strategy.apply(document, spec_pattern))
        .map(|identifier| normalize_separators(&identifier))
}
