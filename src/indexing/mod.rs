//! File collection and parallel tag generation
//!
//! # Key Features
//!
//! - **Parallel Processing**: Uses Rayon for multi-threaded scanning
//! - **Error Handling**: Collects per-file errors without stopping the run
//! - **Stable Order**: Results come back in the order files were given
//!
//! # Example
//!
//! ```ignore
//! use shtags::indexing::{collect_files, scan_files_parallel};
//!
//! let files = collect_files(&repo_dir, 10, &config);
//! let result = scan_files_parallel(&files, &config);
//!
//! println!("Scanned {} files, {} errors", result.files.len(), result.errors.len());
//! ```

mod files;
mod generation;

pub use files::{collect_files, collect_files_recursive, should_skip_path};
pub use generation::{scan_files_parallel, FileError, IndexResult};
