//! Error types for shtags
//!
//! The scanner core has no failure modes of its own: a line that does not
//! match simply yields no tag. Everything here belongs to the glue around it
//! (file access, language routing, configuration, output).

use thiserror::Error;

/// Errors produced while routing, reading, or reporting on shell scripts
#[derive(Debug, Error)]
pub enum ShtagsError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("{path} is a directory (use --recursive to scan directories)")]
    IsDirectory { path: String },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to write output: {message}")]
    Output { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShtagsError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnsupportedLanguage { .. } | Self::IsDirectory { .. } => 2,
            Self::Config { .. } => 3,
            Self::FileNotFound { .. } | Self::Output { .. } | Self::Io(_) => 1,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ShtagsError>;
