//! Output directory inspection after a successful run.
//!
//! The engine owns the artifact format, so this only reports what landed in
//! the output directory: its absolute location, file count and total size.

use crate::bundler::{Error, Result, error::ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// What the engine left in the output directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputSummary {
    /// Absolute output directory
    pub dir: PathBuf,
    /// Number of regular files, recursively
    pub files: usize,
    /// Sum of their sizes in bytes
    pub total_bytes: u64,
}

/// Summarizes `dir`, or returns `None` if it does not exist.
///
/// Traversal runs on the blocking pool. Symlinks are not followed.
pub async fn summarize_output(dir: &Path) -> Result<Option<OutputSummary>> {
    if !dir.exists() {
        return Ok(None);
    }

    let absolute = dir
        .absolutize()
        .fs_context("resolving output directory", dir)?
        .into_owned();

    let root = absolute.clone();
    let (files, total_bytes) = tokio::task::spawn_blocking(move || -> Result<(usize, u64)> {
        let mut files = 0usize;
        let mut total_bytes = 0u64;
        for entry in walkdir::WalkDir::new(&root).follow_links(false) {
            let entry = entry.map_err(|e| Error::GenericError(e.to_string()))?;
            if entry.file_type().is_file() {
                let metadata = entry
                    .metadata()
                    .map_err(|e| Error::GenericError(e.to_string()))?;
                files += 1;
                total_bytes += metadata.len();
            }
        }
        Ok((files, total_bytes))
    })
    .await
    .map_err(|e| Error::GenericError(format!("Output scan task panicked: {}", e)))??;

    Ok(Some(OutputSummary {
        dir: absolute,
        files,
        total_bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("launcher"), b"1234").unwrap();
        std::fs::create_dir_all(dir.path().join("jre/lib")).unwrap();
        std::fs::write(dir.path().join("jre/lib/rt.jar"), b"123456").unwrap();

        let summary = summarize_output(dir.path()).await.unwrap().unwrap();

        assert_eq!(summary.files, 2);
        assert_eq!(summary.total_bytes, 10);
        assert!(summary.dir.is_absolute());
    }

    #[tokio::test]
    async fn missing_directory_has_no_summary() {
        let dir = tempfile::tempdir().unwrap();
        let summary = summarize_output(&dir.path().join("never-created")).await.unwrap();
        assert_eq!(summary, None);
    }
}
