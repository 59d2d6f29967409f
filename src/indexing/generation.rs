//! Parallel tag generation over a file list

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::extract::extract_file;
use crate::schema::TagFile;

/// A file that could not be scanned
#[derive(Debug, Clone)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
    /// Exit code of the underlying error
    pub exit_code: u8,
}

/// Result of scanning a batch of files
#[derive(Debug, Default)]
pub struct IndexResult {
    /// Successfully scanned files, in input order
    pub files: Vec<TagFile>,
    /// Per-file failures, in input order
    pub errors: Vec<FileError>,
}

impl IndexResult {
    pub fn tag_count(&self) -> usize {
        self.files.iter().map(|f| f.tags.len()).sum()
    }
}

/// Scan `files` on the rayon pool.
///
/// A failing file is recorded in [`IndexResult::errors`] and the rest of the
/// batch still runs.
pub fn scan_files_parallel(files: &[PathBuf], config: &Config) -> IndexResult {
    let outcomes: Vec<(&Path, Result<TagFile>)> = files
        .par_iter()
        .map(|path| (path.as_path(), extract_file(path, config)))
        .collect();

    let mut result = IndexResult::default();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(file) => result.files.push(file),
            Err(e) => {
                debug!(path = %path.display(), "skipping file");
                result.errors.push(FileError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                    exit_code: e.exit_code(),
                });
            }
        }
    }
    result
}
