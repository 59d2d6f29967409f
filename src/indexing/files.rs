//! File collection for directory scans
//!
//! Directories are walked recursively and every file the configuration can
//! route to a scanner is kept. Any other file is kept when its first line is
//! a shell `#!` line, matching how [`Config::route`] decides at scan time.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::lang::Lang;

/// Collect all routable script files under a directory.
///
/// # Arguments
///
/// * `dir` - The root directory to search
/// * `max_depth` - Maximum recursion depth (0 = only root directory)
/// * `config` - Decides which extensions are routed
///
/// # Returns
///
/// Paths to script files, sorted by path.
pub fn collect_files(dir: &Path, max_depth: usize, config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_files_recursive(dir, max_depth, 0, config, &mut files);
    files.sort();
    files
}

/// Recursively collect files with depth tracking.
///
/// Unreadable directories are skipped. Use `collect_files` for sorted output.
pub fn collect_files_recursive(
    dir: &Path,
    max_depth: usize,
    current_depth: usize,
    config: &Config,
    files: &mut Vec<PathBuf>,
) {
    if current_depth > max_depth {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if should_skip_path(&path) {
            continue;
        }

        if path.is_dir() {
            collect_files_recursive(&path, max_depth, current_depth + 1, config, files);
        } else if path.is_file() && is_script(&path, config) {
            files.push(path);
        }
    }
}

fn is_script(path: &Path, config: &Config) -> bool {
    if config.lang_for_path(path).is_some() {
        return true;
    }
    first_line(path).is_some_and(|l| Lang::from_shebang(&l).is_some())
}

fn first_line(path: &Path) -> Option<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path).ok()?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line).ok()?;
    Some(line)
}

/// Check if a path should be skipped during file collection.
///
/// Skips:
/// - Hidden files/directories (starting with '.')
/// - Common non-source directories: node_modules, target, dist, build, etc.
pub fn should_skip_path(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        name.starts_with('.')
            || name == "node_modules"
            || name == "target"
            || name == "dist"
            || name == "build"
            || name == "coverage"
            || name == "__pycache__"
            || name == "vendor"
    } else {
        false
    }
}
