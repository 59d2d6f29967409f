//! Language detection and scanner registration
//!
//! Extension matching is case-sensitive: only the spellings listed in
//! [`Lang::extensions`] are routed to a scanner. Files without a registered
//! extension (autoconf's `configure`, scripts in `bin/`) fall back to the
//! interpreter named on a `#!` first line.

use std::path::Path;

use crate::error::{Result, ShtagsError};
use crate::schema::{TagKind, FUNCTION_KIND};

/// Supported script languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Bourne shell and its derivatives (bash, ksh, zsh)
    Sh,
}

impl Lang {
    /// All registered languages
    pub const ALL: &'static [Lang] = &[Lang::Sh];

    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ShtagsError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.extensions().contains(&ext))
            .ok_or_else(|| ShtagsError::UnsupportedLanguage {
                extension: ext.to_string(),
            })
    }

    /// Detect language from a `#!` interpreter line.
    ///
    /// The interpreter's base name is looked up as an extension, so
    /// `#!/bin/bash` and `#!/usr/bin/env zsh` both route to [`Lang::Sh`].
    pub fn from_shebang(first_line: &[u8]) -> Option<Self> {
        let rest = first_line.strip_prefix(b"#!")?;
        let rest = String::from_utf8_lossy(rest);
        let mut words = rest.split_ascii_whitespace();

        let mut interpreter = interpreter_name(words.next()?);
        if interpreter == "env" {
            interpreter = interpreter_name(words.find(|w| !w.starts_with('-'))?);
        }

        Self::from_extension(interpreter).ok()
    }

    /// Detect language from the path, falling back to the `#!` line of `content`
    pub fn detect(path: &Path, content: &[u8]) -> Result<Self> {
        Self::from_path(path).or_else(|err| {
            let first_line = content.split(|&b| b == b'\n').next().unwrap_or_default();
            Self::from_shebang(first_line).ok_or(err)
        })
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sh => "sh",
        }
    }

    /// Get the registered file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Sh => &[
                "sh", "SH", "bsh", "bash", "BASH", "ksh", "KSH", "zsh", "Zsh", "ZSH",
            ],
        }
    }

    /// Get the tag kinds this language's scanner can produce
    pub fn kinds(&self) -> &'static [TagKind] {
        match self {
            Self::Sh => &[FUNCTION_KIND],
        }
    }
}

fn interpreter_name(word: &str) -> &str {
    word.rsplit('/').next().unwrap_or(word)
}
