use serde::Deserialize;

use super::status::TestStatus;

/// One entry of a result document's `labels` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A per-test result document as written by the external runner.
///
/// The fields naming the test file vary between runner versions, which is
/// why three of them are carried here; [`crate::extract::FileLookup`]
/// decides which one wins. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResultDocument {
    pub status: Option<TestStatus>,
    pub stage: Option<TestStatus>,
    pub labels: Vec<Label>,
    #[serde(rename = "testFile")]
    pub test_file: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

impl ResultDocument {
    /// Effective outcome: `status` wins, `stage` is the legacy fallback.
    pub fn effective_status(&self) -> TestStatus {
        self.status.or(self.stage).unwrap_or(TestStatus::Unknown)
    }
}
