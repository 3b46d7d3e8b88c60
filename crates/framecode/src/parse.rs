use crate::error::TimecodeError;
use crate::timecode::Timecode;

// ── Scanner ───────────────────────────────────────────────────────────────

/// Cursor over the input, scanning bounded ASCII-digit runs.
struct Scanner<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Scanner<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes between 1 and `max` ASCII digits and returns their value.
    /// `None` when the next character is not a digit.
    fn digits(&mut self, max: usize) -> Option<i64> {
        let start = self.pos;
        let mut count = 0;
        while count < max && matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            count += 1;
        }
        if count == 0 {
            return None;
        }
        // Only ASCII digits were consumed and max is 3, so this cannot fail.
        Some(self.src[start..self.pos].parse::<i64>().expect("validated digits"))
    }

    fn colon(&mut self) -> Option<()> {
        match self.peek() {
            Some(':') => {
                self.advance();
                Some(())
            }
            _ => None,
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.src.len()
    }
}

// ── Entry point ───────────────────────────────────────────────────────────

/// Parses `H{1,2}:M{1,2}:S{1,2}:F{1,3}` and builds a timecode at the given
/// frame rate.
///
/// The pattern is anchored: leading or trailing characters fail the parse.
/// Digit *count* is bounded but value range is not; out-of-range segments
/// wrap through the constructor, so `25:00:00:00` parses to `01:00:00:00`.
pub fn parse_timecode(text: &str, frame_rate: u32) -> Result<Timecode, TimecodeError> {
    match scan(text) {
        Some([hours, minutes, seconds, frames]) => {
            Timecode::from_parts(hours, minutes, seconds, frames, frame_rate)
        }
        None => Err(TimecodeError::Malformed {
            input: text.to_string(),
        }),
    }
}

fn scan(text: &str) -> Option<[i64; 4]> {
    let mut s = Scanner::new(text);
    let hours = s.digits(2)?;
    s.colon()?;
    let minutes = s.digits(2)?;
    s.colon()?;
    let seconds = s.digits(2)?;
    s.colon()?;
    let frames = s.digits(3)?;
    if !s.at_end() {
        return None;
    }
    Some([hours, minutes, seconds, frames])
}
