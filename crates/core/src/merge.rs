//! Copies rerun artifacts back into the original result location

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Shallow-copies every file directly inside `rerun_dir` into
/// `original_dir`, overwriting same-named files so the downstream report
/// reflects the rerun outcome. Returns the number of files copied; a
/// missing rerun directory is a 0-count no-op.
pub fn merge_results(rerun_dir: &Path, original_dir: &Path) -> Result<usize> {
    if !rerun_dir.is_dir() {
        debug!("no rerun artifacts at {}", rerun_dir.display());
        return Ok(0);
    }
    fs::create_dir_all(original_dir)?;

    let mut copied = 0;
    for entry in fs::read_dir(rerun_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        fs::copy(entry.path(), original_dir.join(entry.file_name()))?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_every_rerun_file_lands_with_identical_content() {
        let temp = TempDir::new().unwrap();
        let rerun = temp.path().join("rerun-results");
        let original = temp.path().join("allure-results");
        fs::create_dir_all(&rerun).unwrap();
        fs::create_dir_all(&original).unwrap();

        fs::write(rerun.join("a-result.json"), r#"{"status": "passed"}"#).unwrap();
        fs::write(rerun.join("b-result.json"), r#"{"status": "failed"}"#).unwrap();

        let copied = merge_results(&rerun, &original).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(original.join("a-result.json")).unwrap(),
            r#"{"status": "passed"}"#
        );
        assert_eq!(
            fs::read_to_string(original.join("b-result.json")).unwrap(),
            r#"{"status": "failed"}"#
        );
    }

    #[test]
    fn test_same_named_files_are_overwritten() {
        let temp = TempDir::new().unwrap();
        let rerun = temp.path().join("rerun-results");
        let original = temp.path().join("allure-results");
        fs::create_dir_all(&rerun).unwrap();
        fs::create_dir_all(&original).unwrap();

        fs::write(original.join("a-result.json"), r#"{"status": "failed"}"#).unwrap();
        fs::write(rerun.join("a-result.json"), r#"{"status": "passed"}"#).unwrap();

        merge_results(&rerun, &original).unwrap();

        assert_eq!(
            fs::read_to_string(original.join("a-result.json")).unwrap(),
            r#"{"status": "passed"}"#
        );
    }

    #[test]
    fn test_missing_rerun_directory_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("allure-results");
        fs::create_dir_all(&original).unwrap();

        let copied =
            merge_results(&temp.path().join("rerun-results"), &original).unwrap();
        assert_eq!(copied, 0);
    }

    #[test]
    fn test_subdirectories_are_not_copied() {
        let temp = TempDir::new().unwrap();
        let rerun = temp.path().join("rerun-results");
        let original = temp.path().join("allure-results");
        fs::create_dir_all(rerun.join("attachments")).unwrap();
        fs::create_dir_all(&original).unwrap();
        fs::write(rerun.join("a-result.json"), "{}").unwrap();

        let copied = merge_results(&rerun, &original).unwrap();

        assert_eq!(copied, 1);
        assert!(!original.join("attachments").exists());
    }

    #[test]
    fn test_missing_original_directory_is_created() {
        let temp = TempDir::new().unwrap();
        let rerun = temp.path().join("rerun-results");
        let original = temp.path().join("allure-results");
        fs::create_dir_all(&rerun).unwrap();
        fs::write(rerun.join("a-result.json"), "{}").unwrap();

        let copied = merge_results(&rerun, &original).unwrap();

        assert_eq!(copied, 1);
        assert!(original.join("a-result.json").is_file());
    }
}
