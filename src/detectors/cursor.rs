//! Bounds-checked byte cursor over a single line
//!
//! The cursor only ever moves forward. Reads past the end return `None`
//! and advancing at the end is a no-op.

/// C `isspace` in the "C" locale
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Bytes allowed in a shell function name: `[[:alnum:]_-]`
pub fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte under the cursor
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Byte `offset` positions ahead of the cursor
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Consume and return the byte under the cursor
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Advance `n` bytes, clamped to the end of the line
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// True if the remaining bytes start with `literal`; does not consume
    pub fn starts_with(&self, literal: &[u8]) -> bool {
        self.rest().starts_with(literal)
    }

    /// Advance while `pred` holds and return the consumed bytes
    pub fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    pub fn skip_whitespace(&mut self) {
        self.take_while(is_space);
    }

    /// Unconsumed remainder of the line
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_bump() {
        let mut cur = ByteCursor::new(b"ab");
        assert_eq!(cur.peek(), Some(b'a'));
        assert_eq!(cur.bump(), Some(b'a'));
        assert_eq!(cur.bump(), Some(b'b'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.peek(), None);
        assert!(cur.rest().is_empty());
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut cur = ByteCursor::new(b"abc");
        cur.advance(10);
        assert_eq!(cur.rest(), b"");
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn test_take_while_and_whitespace() {
        let mut cur = ByteCursor::new(b"  \tfoo-bar_1 (");
        cur.skip_whitespace();
        assert_eq!(cur.take_while(is_ident), b"foo-bar_1");
        cur.skip_whitespace();
        assert_eq!(cur.peek(), Some(b'('));
    }

    #[test]
    fn test_peek_at_past_end() {
        let cur = ByteCursor::new(b"function");
        assert_eq!(cur.peek_at(7), Some(b'n'));
        assert_eq!(cur.peek_at(8), None);
    }

    #[test]
    fn test_empty_line() {
        let mut cur = ByteCursor::new(b"");
        cur.skip_whitespace();
        assert!(cur.take_while(is_ident).is_empty());
        assert!(!cur.starts_with(b"function"));
    }

    #[test]
    fn test_space_set_matches_isspace() {
        for b in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(b));
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0xA0));
    }
}
