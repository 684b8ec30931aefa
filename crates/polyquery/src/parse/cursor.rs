//! Byte cursor over shared text input.
//!
//! Mirrors formatted stream extraction: every `read_*` first skips whitespace
//! (line terminators included), then consumes as much as the token needs. A
//! cursor may be limited to a sub-range (`take_line`); offsets always refer to
//! the full source.

/// Whitespace as skipped by formatted input (space, \t, \n, \v, \f, \r).
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            end: src.len(),
        }
    }

    /// Byte offset into the full source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed text up to this cursor's limit.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..self.end]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    #[inline]
    fn peek_byte(&self) -> Option<u8> {
        self.rest().as_bytes().first().copied()
    }

    pub fn skip_ws(&mut self) {
        while let Some(b) = self.peek_byte() {
            if !is_space(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Next non-whitespace character, consumed.
    pub fn next_char(&mut self) -> Option<char> {
        self.skip_ws();
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Next whitespace-delimited word, consumed.
    pub fn word(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest.bytes().position(is_space).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Consume an optional sign (`-` only when `signed`) and a run of digits.
    /// Returns the consumed text, or `None` (nothing consumed) when no digit follows.
    fn digits(&mut self, signed: bool) -> Option<&'a str> {
        self.skip_ws();
        let bytes = self.rest().as_bytes();
        let mut len = 0;
        if let Some(&b) = bytes.first() {
            if b == b'+' || (signed && b == b'-') {
                len = 1;
            }
        }
        let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        len += digits;
        let text = &self.rest()[..len];
        self.pos += len;
        Some(text)
    }

    /// Signed decimal integer that fits in `i32`.
    pub fn read_i32(&mut self) -> Option<i32> {
        self.digits(true)?.parse().ok()
    }

    /// Unsigned decimal integer that fits in `usize`.
    pub fn read_usize(&mut self) -> Option<usize> {
        self.digits(false)?.parse().ok()
    }

    /// Advance through the next line terminator (or to the limit).
    pub fn skip_line(&mut self) {
        match self.rest().find('\n') {
            Some(i) => self.pos += i + 1,
            None => self.pos = self.end,
        }
    }

    /// Split off the rest of the current line as its own cursor and move past it.
    ///
    /// The returned cursor stops before the `\n`; `self` resumes after it.
    pub fn take_line(&mut self) -> Cursor<'a> {
        let line_end = match self.rest().find('\n') {
            Some(i) => self.pos + i,
            None => self.end,
        };
        let line = Cursor {
            src: self.src,
            pos: self.pos,
            end: line_end,
        };
        self.pos = (line_end + 1).min(self.end);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stop_at_delimiters() {
        let mut c = Cursor::new("  (-12;+7)");
        assert_eq!(c.next_char(), Some('('));
        assert_eq!(c.read_i32(), Some(-12));
        assert_eq!(c.next_char(), Some(';'));
        assert_eq!(c.read_i32(), Some(7));
        assert_eq!(c.next_char(), Some(')'));
        assert!(c.next_char().is_none());
    }

    #[test]
    fn failed_read_consumes_nothing_after_whitespace() {
        let mut c = Cursor::new("  abc");
        assert_eq!(c.read_usize(), None);
        assert_eq!(c.rest(), "abc");
        let mut c = Cursor::new("-3");
        assert_eq!(c.read_usize(), None);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn overflow_is_a_failure() {
        let mut c = Cursor::new("2147483648");
        assert_eq!(c.read_i32(), None);
        let mut c = Cursor::new("-2147483648");
        assert_eq!(c.read_i32(), Some(i32::MIN));
    }

    #[test]
    fn take_line_limits_and_resumes() {
        let mut c = Cursor::new("AREA EVEN extra\nCOUNT 3");
        assert_eq!(c.word(), Some("AREA"));
        let mut line = c.take_line();
        assert_eq!(line.word(), Some("EVEN"));
        assert_eq!(line.word(), Some("extra"));
        assert_eq!(line.word(), None);
        assert!(line.is_at_end());
        assert_eq!(c.word(), Some("COUNT"));
        let mut last = c.take_line();
        assert_eq!(last.read_usize(), Some(3));
        assert!(c.is_at_end());
    }

    #[test]
    fn skip_line_moves_past_terminator() {
        let mut c = Cursor::new("garbage here\n4");
        c.skip_line();
        assert_eq!(c.read_usize(), Some(4));
        c.skip_line();
        assert!(c.is_at_end());
    }
}
