/// A byte cursor over template text with position tracking.
///
/// Delimiters are single ASCII bytes, and UTF-8 continuation bytes never
/// collide with ASCII, so every position the cursor stops at while looking
/// for a delimiter is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until the current byte is one of `stops`, without consuming it.
    ///
    /// Returns the byte found, or `None` with the cursor at end of input.
    pub fn skip_to_any(&mut self, stops: &[u8]) -> Option<u8> {
        let rest = &self.s.as_bytes()[self.i.min(self.s.len())..];
        match rest.iter().position(|b| stops.contains(b)) {
            Some(n) => {
                self.i += n;
                self.peek()
            }
            None => {
                self.i = self.s.len();
                None
            }
        }
    }
}
