pub mod document;
pub mod locator;
pub mod status;
pub mod summary;

pub use document::{Label, ResultDocument};
pub use locator::ResultSource;
pub use status::TestStatus;
pub use summary::{Attempt, RunSummary, Spec, SpecTest, Suite};
