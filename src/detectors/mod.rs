//! Language-specific tag detectors
//!
//! Each detector turns the lines of one file into tags for its language.
//!
//! - `shell`: sh, bash, ksh, zsh function definitions
//! - `cursor`: bounds-checked byte cursor shared by line scanners
//! - `suppress`: known false positives vetoed before emission

pub mod cursor;
pub mod shell;
pub mod suppress;
