//! Shell/Bash function detector
//!
//! A single-pass line scanner for Bourne-family scripts (sh, bash, ksh, zsh).
//! It does not parse shell syntax. A line defines a function when it has one
//! of two shapes:
//!
//! - `function name ...` (the keyword followed by whitespace)
//! - `name ()` (a name followed by an empty pair of parentheses)
//!
//! Either shape alone is enough, and `function name()` still yields one tag.
//! Lines whose first byte is `#` are never scanned.

use std::path::Path;

use tracing::{debug, trace};

use crate::detectors::cursor::{is_ident, is_space, ByteCursor};
use crate::detectors::suppress::SuppressionRules;
use crate::schema::Tag;
use crate::source::TagSink;
use crate::utils::base_name;

const FUNCTION_KEYWORD: &[u8] = b"function";

/// Why scanning of a line stopped before classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abandon {
    /// First byte of the line is `#`
    Comment,
    /// `function` is the prefix of a longer word, e.g. `functionality`
    KeywordPrefix,
    /// No name byte where a function name would start
    NoIdentifier,
}

/// A confirmed definition, borrowing its name from the scanned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition<'a> {
    pub name: &'a [u8],
    /// Confirmed by a leading `function` keyword
    pub keyword: bool,
    /// Confirmed by a trailing `()`
    pub parens: bool,
}

/// Outcome of classifying one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    Definition(Definition<'a>),
    /// A name was read but neither shape confirmed it
    NoMatch,
    Abandoned(Abandon),
}

/// Classify one line. Pure function of the line's bytes.
pub fn classify_line(line: &[u8]) -> LineMatch<'_> {
    match scan_line(line) {
        Ok(Some(def)) => LineMatch::Definition(def),
        Ok(None) => LineMatch::NoMatch,
        Err(reason) => LineMatch::Abandoned(reason),
    }
}

fn scan_line(line: &[u8]) -> Result<Option<Definition<'_>>, Abandon> {
    if line.first() == Some(&b'#') {
        return Err(Abandon::Comment);
    }

    let mut cur = ByteCursor::new(line);
    cur.skip_whitespace();

    let keyword = match_keyword(&mut cur)?;
    let name = take_name(&mut cur)?;
    let parens = match_empty_parens(&mut cur);

    Ok((keyword || parens).then_some(Definition {
        name,
        keyword,
        parens,
    }))
}

/// Consume an optional `function` keyword and the whitespace after it.
///
/// `function` not followed by whitespace abandons the line rather than being
/// read as the start of a name.
fn match_keyword(cur: &mut ByteCursor<'_>) -> Result<bool, Abandon> {
    if !cur.starts_with(FUNCTION_KEYWORD) {
        return Ok(false);
    }
    if !cur.peek_at(FUNCTION_KEYWORD.len()).is_some_and(is_space) {
        return Err(Abandon::KeywordPrefix);
    }
    cur.advance(FUNCTION_KEYWORD.len());
    cur.skip_whitespace();
    Ok(true)
}

/// Read a `[[:alnum:]_-]+` run and the whitespace after it
fn take_name<'a>(cur: &mut ByteCursor<'a>) -> Result<&'a [u8], Abandon> {
    let name = cur.take_while(is_ident);
    if name.is_empty() {
        return Err(Abandon::NoIdentifier);
    }
    cur.skip_whitespace();
    Ok(name)
}

/// `(` optional-whitespace `)`; argument lists do not count
fn match_empty_parens(cur: &mut ByteCursor<'_>) -> bool {
    if cur.bump() != Some(b'(') {
        return false;
    }
    cur.skip_whitespace();
    cur.peek() == Some(b')')
}

/// Counters for one scanned file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: usize,
    pub tags: usize,
    pub suppressed: usize,
}

/// Per-invocation scanner context.
///
/// Owns the candidate-name buffer, which is rebuilt for every line and
/// cleared before the next one is read.
#[derive(Debug)]
pub struct ShellScanner<'r> {
    rules: &'r SuppressionRules,
    name: String,
}

impl<'r> ShellScanner<'r> {
    pub fn new(rules: &'r SuppressionRules) -> Self {
        Self {
            rules,
            name: String::new(),
        }
    }

    /// Scan every line of `file`, emitting at most one tag per line into `sink`.
    ///
    /// `file` is only used for its base name, which suppression rules match against.
    pub fn scan<I, S>(&mut self, file: &Path, lines: I, sink: &mut S) -> ScanStats
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
        S: TagSink + ?Sized,
    {
        let script = base_name(file);
        let mut stats = ScanStats::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            stats.lines += 1;

            if let LineMatch::Definition(def) = classify_line(line) {
                self.name.extend(def.name.iter().copied().map(char::from));

                if let Some(rule) = self.rules.veto(&script, &self.name) {
                    debug!(
                        file = %file.display(),
                        line = idx + 1,
                        name = %self.name,
                        rule_file = %rule.file,
                        "suppressed function tag"
                    );
                    stats.suppressed += 1;
                } else {
                    trace!(name = %self.name, line = idx + 1, keyword = def.keyword, parens = def.parens, "function");
                    sink.emit(Tag::function(
                        self.name.as_str(),
                        idx + 1,
                        String::from_utf8_lossy(line),
                    ));
                    stats.tags += 1;
                }
            }

            self.name.clear();
        }

        stats
    }
}

/// Convenience wrapper: scan `lines` with `rules` and collect the tags
pub fn find_sh_tags<I>(file: &Path, lines: I, rules: &SuppressionRules) -> Vec<Tag>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut tags = Vec::new();
    ShellScanner::new(rules).scan(file, lines, &mut tags);
    tags
}
