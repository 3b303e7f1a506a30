//! Staging of uploaded NAMASTE CSV files.
//!
//! The ingest endpoint reads the CSV by path, so the upload is copied into a
//! temporary file that outlives the request.

use crate::api::error::ApiError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Checks that `path` names an existing `.csv` file.
pub fn validate_csv(path: &Path) -> Result<(), ApiError> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(ApiError::InvalidUpload(format!(
            "{} is not a CSV file (expected columns code,term)",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ApiError::InvalidUpload(format!(
            "{} does not exist",
            path.display()
        )));
    }
    Ok(())
}

/// Copies the CSV at `source` into a persistent temporary `.csv` file and
/// returns its path.
pub fn stage_csv(source: &Path) -> Result<PathBuf, ApiError> {
    validate_csv(source)?;
    let contents = fs::read(source)?;

    let mut tmp = tempfile::Builder::new()
        .prefix("namaste-")
        .suffix(".csv")
        .tempfile()?;
    tmp.write_all(&contents)?;
    tmp.flush()?;
    let (_file, path) = tmp.keep().map_err(|e| ApiError::Io(e.error))?;

    log::debug!("Staged {} at {}", source.display(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_stage_copies_contents_to_persistent_csv() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("namaste.csv");
        fs::write(&source, "code,term\nNAM001,Jvara\n").unwrap();

        let staged = stage_csv(&source).unwrap();
        assert_ne!(staged, source);
        assert_eq!(staged.extension().unwrap(), "csv");
        assert_eq!(
            fs::read_to_string(&staged).unwrap(),
            "code,term\nNAM001,Jvara\n"
        );
        fs::remove_file(staged).unwrap();
    }

    #[test]
    fn test_rejects_non_csv_extension() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("codes.txt");
        fs::write(&source, "code,term\n").unwrap();

        let err = stage_csv(&source).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUpload(_)));
    }

    #[test]
    fn test_rejects_missing_file() {
        let dir = tempdir().unwrap();
        let err = validate_csv(&dir.path().join("missing.csv")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("CODES.CSV");
        fs::write(&source, "code,term\n").unwrap();
        assert!(validate_csv(&source).is_ok());
    }
}
