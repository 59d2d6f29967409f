//! Tag extraction orchestration
//!
//! This module routes a file to its language scanner and collects the tags
//! into a [`TagFile`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::detectors::shell::ShellScanner;
use crate::error::{Result, ShtagsError};
use crate::lang::Lang;
use crate::schema::TagFile;
use crate::source::split_lines;
use crate::utils::display_path;

/// Extract tags from in-memory file content
///
/// This is the main entry point for tag extraction. `path` decides the
/// language (extension first, then `#!` line) and supplies the base name
/// that suppression rules match against.
pub fn extract(path: &Path, content: &[u8], config: &Config) -> Result<TagFile> {
    let lang = config.route(path, content)?;

    let mut file = TagFile {
        file: display_path(path),
        language: lang.name().to_string(),
        tags: Vec::new(),
    };

    match lang {
        Lang::Sh => {
            let stats = ShellScanner::new(&config.rules).scan(
                path,
                split_lines(content),
                &mut file.tags,
            );
            debug!(
                file = %file.file,
                lines = stats.lines,
                tags = stats.tags,
                suppressed = stats.suppressed,
                "scanned"
            );
        }
    }

    Ok(file)
}

/// Read `path` from disk and extract its tags
pub fn extract_file(path: &Path, config: &Config) -> Result<TagFile> {
    if !path.exists() {
        return Err(ShtagsError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    if path.is_dir() {
        return Err(ShtagsError::IsDirectory {
            path: path.display().to_string(),
        });
    }

    let content = fs::read(path)?;
    extract(path, &content, config)
}
