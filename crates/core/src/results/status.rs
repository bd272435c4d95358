use serde::Serialize;

/// Outcome of a single test execution, as reported by the external runner.
///
/// Runners are not consistent about casing, so deserialization is
/// case-insensitive; a status string this crate does not know about maps
/// to `Unknown` rather than failing the parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Broken,
    #[default]
    Unknown,
}

crate::impl_case_insensitive_deserialize!(
    TestStatus,
    fallback = Unknown,
    Passed => "passed",
    Failed => "failed",
    Skipped => "skipped",
    Broken => "broken",
);

impl TestStatus {
    /// True for outcomes eligible for rerun.
    pub fn is_terminal_failure(self) -> bool {
        matches!(
            self,
            TestStatus::Failed | TestStatus::Skipped | TestStatus::Broken
        )
    }
}
