use serde::Deserialize;

use super::status::TestStatus;

/// Aggregated run-summary document: a tree of suites containing specs
/// containing tests containing result attempts. This is the fallback
/// result format when no per-test documents are available.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunSummary {
    pub suites: Vec<Suite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Suite {
    /// Nested sub-suites, traversed recursively.
    pub suites: Vec<Suite>,
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Spec {
    /// Test-file path, the rerun unit of granularity.
    pub file: String,
    pub tests: Vec<SpecTest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpecTest {
    pub results: Vec<Attempt>,
}

/// One execution attempt of a test.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Attempt {
    pub status: TestStatus,
}
