//! shtags: function tags for Bourne-family shell scripts
//!
//! This library scans sh, bash, ksh, and zsh scripts line by line and records
//! every function definition in a tag index, for editor "jump to definition"
//! support. It is a lexical scanner, not a shell parser: a line defines a
//! function when it reads `function name ...` or `name ()`.
//!
//! # Example
//!
//! ```
//! use shtags::{extract, Config};
//! use std::path::Path;
//!
//! let source = b"#!/bin/sh\nsetup() {\n  :\n}\nfunction teardown {\n  :\n}\n";
//!
//! let file = extract(Path::new("ci.sh"), source, &Config::default()).unwrap();
//! let names: Vec<_> = file.tags.iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, ["setup", "teardown"]);
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod indexing;
pub mod lang;
pub mod output;
pub mod schema;
pub mod source;
pub mod toon;
pub mod utils;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use detectors::shell::{classify_line, find_sh_tags, LineMatch, ShellScanner};
pub use detectors::suppress::{SuppressionRule, SuppressionRules};
pub use error::{Result, ShtagsError};
pub use extract::{extract, extract_file};
pub use lang::Lang;
pub use output::{format_ctags, render};
pub use schema::{Tag, TagFile, TagKind};
pub use source::{split_lines, TagSink};
pub use toon::encode_toon;
