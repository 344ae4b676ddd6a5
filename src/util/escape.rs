use std::iter::Peekable;

/// An iterator that decodes backslash escape sequences as it reads chars.
///
/// Recognizes the C escapes `\n \t \v \b \r \f \a \\ \? \' \"`, `\x` followed by up to two
/// hex digits, and up to three octal digits. Numeric escapes produce the char with that
/// byte value (octal values wrap at 256). Any other escaped char stands for itself, as
/// does a backslash at the very end of the input or an `\x` with no hex digit after it.
pub struct Unescape<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<I: Iterator<Item = char>> Unescape<I> {
    /// Wraps an iterator of raw chars.
    pub fn new(chars: I) -> Unescape<I> {
        Unescape { chars: chars.peekable() }
    }

    // Consumes up to `max` more digits in `radix`, accumulating them onto `value`.
    fn digits(&mut self, radix: u32, max: usize, mut value: Option<u32>) -> Option<u32> {
        for _ in 0..max {
            let digit = match self.chars.peek().and_then(|c| c.to_digit(radix)) {
                Some(digit) => digit,
                None => break,
            };
            self.chars.next();
            value = Some(value.unwrap_or(0) * radix + digit);
        }
        value
    }
}

impl<I: Iterator<Item = char>> Iterator for Unescape<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c != '\\' {
            return Some(c);
        }
        let escaped = match self.chars.next() {
            Some(escaped) => escaped,
            None => return Some('\\'),
        };
        let decoded = match escaped {
            'n' => '\n',
            't' => '\t',
            'v' => '\u{0B}',
            'b' => '\u{08}',
            'r' => '\r',
            'f' => '\u{0C}',
            'a' => '\u{07}',
            'x' => self.digits(16, 2, None).map_or('x', byte_char),
            '0'..='7' => {
                let first = escaped.to_digit(8);
                self.digits(8, 2, first).map_or(escaped, byte_char)
            }
            other => other,
        };
        Some(decoded)
    }
}

fn byte_char(value: u32) -> char {
    (value & 0xFF) as u8 as char
}

/// Decodes every escape sequence in `s`.
pub fn unescape(s: &str) -> String {
    Unescape::new(s.chars()).collect()
}

#[cfg(test)]
mod test {
    use super::unescape;

    #[test]
    fn test_plain_text() {
        assert_eq!(unescape("no escapes here"), "no escapes here");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(unescape(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(unescape(r"\v\b\r\f\a"), "\u{0B}\u{08}\r\u{0C}\u{07}");
        assert_eq!(unescape(r#"\\ \? \' \""#), "\\ ? ' \"");
    }

    #[test]
    fn test_hex_escapes() {
        assert_eq!(unescape(r"\x41BC"), "ABC");
        assert_eq!(unescape(r"\x4"), "\u{04}");
        // only two digits are taken
        assert_eq!(unescape(r"\x414"), "A4");
        assert_eq!(unescape(r"\xg"), "xg");
    }

    #[test]
    fn test_octal_escapes() {
        assert_eq!(unescape(r"\101"), "A");
        assert_eq!(unescape(r"\12"), "\n");
        assert_eq!(unescape(r"\0"), "\u{0}");
        // only three digits are taken
        assert_eq!(unescape(r"\1011"), "A1");
        assert_eq!(unescape(r"\08"), "\u{0}8");
    }

    #[test]
    fn test_unknown_and_trailing() {
        assert_eq!(unescape(r"\q"), "q");
        assert_eq!(unescape("end\\"), "end\\");
    }
}
