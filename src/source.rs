//! Line source and tag sink seams around the scanner
//!
//! The scanner consumes any iterator of byte lines and hands finished tags to
//! a [`TagSink`]. [`split_lines`] is the line source used for files read into
//! memory.

use crate::schema::Tag;

/// Receives finalized tags from a scanner
pub trait TagSink {
    fn emit(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn emit(&mut self, tag: Tag) {
        self.push(tag);
    }
}

/// Split raw file content into physical lines without their terminators.
///
/// `\n` ends a line and a `\r` directly before it is dropped too. A final
/// line without a terminator is still yielded; empty input yields nothing.
pub fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let empty = content.is_empty();

    body.split(|&b| b == b'\n')
        .filter(move |_| !empty)
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(content: &[u8]) -> Vec<&[u8]> {
        split_lines(content).collect()
    }

    #[test]
    fn test_split_unix_lines() {
        assert_eq!(collect(b"a\nb\n"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_split_crlf_lines() {
        assert_eq!(collect(b"a\r\nb\r\n"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_trailing_line_without_newline() {
        assert_eq!(collect(b"a\nb"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        assert_eq!(collect(b"\n\nx\n"), vec![&b""[..], &b""[..], &b"x"[..]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Tag> = Vec::new();
        sink.emit(Tag::function("a", 1, "a()"));
        sink.emit(Tag::function("b", 2, "b()"));
        let names: Vec<_> = sink.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
