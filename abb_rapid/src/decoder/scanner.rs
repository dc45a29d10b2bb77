//! Byte cursor over a single line of RAPID source.
//!
//! A failed match consumes at most leading whitespace, so callers can try
//! alternatives at the same spot.

use crate::EXT_AXIS_UNUSED;

pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consumes `c` after optional whitespace.
    pub fn eat(&mut self, c: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, c: char) -> Option<()> {
        self.eat(c).then_some(())
    }

    pub fn eat_str(&mut self, s: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    pub fn peek_char(&mut self, c: char) -> bool {
        self.skip_ws();
        self.peek() == Some(c)
    }

    /// Word characters only (`[A-Za-z0-9_]` plus other alphanumerics).
    pub fn ident(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        let len = rest.find(|c: char| !is_word(c)).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    /// Consumes the identifier `kw` only if it matches as a whole word.
    pub fn keyword(&mut self, kw: &str) -> bool {
        let start = self.pos;
        match self.ident() {
            Some(word) if word == kw => true,
            _ => {
                self.pos = start;
                false
            }
        }
    }

    /// `[+-]digits[.digits][(e|E)[+-]digits]`, returned as source text.
    fn number_token(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let mut i = 0;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let mantissa = i;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
            i += 1;
        }
        if !rest[mantissa..i].bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            let digits = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > digits {
                i = j;
            }
        }
        if rest[i..].starts_with(is_word) {
            return None;
        }
        self.pos += i;
        Some(&rest[..i])
    }

    pub fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        let value = self.number_token().and_then(|t| t.parse::<f64>().ok());
        if value.is_none() {
            self.pos = start;
        }
        value
    }

    pub fn int(&mut self) -> Option<i32> {
        let start = self.pos;
        let value = self.number_token().and_then(|t| t.parse::<i32>().ok());
        if value.is_none() {
            self.pos = start;
        }
        value
    }

    /// A number, or the unused-axis literal mapped to `f64::INFINITY`.
    pub fn ext_axis(&mut self) -> Option<f64> {
        let start = self.pos;
        let token = self.number_token()?;
        if token.eq_ignore_ascii_case(EXT_AXIS_UNUSED) {
            return Some(f64::INFINITY);
        }
        let value = token.parse::<f64>().ok();
        if value.is_none() {
            self.pos = start;
        }
        value
    }

    /// `[item,item,...]` with at least one item.
    fn list<T>(&mut self, item: fn(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let start = self.pos;
        let parsed = self.list_items(item);
        if parsed.is_none() {
            self.pos = start;
        }
        parsed
    }

    fn list_items<T>(&mut self, item: fn(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        self.expect('[')?;
        let mut values = vec![item(self)?];
        while self.eat(',') {
            values.push(item(self)?);
        }
        self.expect(']')?;
        Some(values)
    }

    pub fn num_list(&mut self) -> Option<Vec<f64>> {
        self.list(Self::number)
    }

    pub fn num_array<const N: usize>(&mut self) -> Option<[f64; N]> {
        let start = self.pos;
        let array = self.num_list().and_then(|v| <[f64; N]>::try_from(v).ok());
        if array.is_none() {
            self.pos = start;
        }
        array
    }

    pub fn int_array<const N: usize>(&mut self) -> Option<[i32; N]> {
        let start = self.pos;
        let array = self.list(Self::int).and_then(|v| <[i32; N]>::try_from(v).ok());
        if array.is_none() {
            self.pos = start;
        }
        array
    }

    pub fn ext_axis_array(&mut self) -> Option<[f64; 6]> {
        let start = self.pos;
        let array = self.list(Self::ext_axis).and_then(|v| <[f64; 6]>::try_from(v).ok());
        if array.is_none() {
            self.pos = start;
        }
        array
    }

    pub fn boolean(&mut self) -> Option<bool> {
        if self.keyword("TRUE") {
            Some(true)
        } else if self.keyword("FALSE") {
            Some(false)
        } else {
            None
        }
    }

    /// RAPID string literal; `""` and `\\` inside decode to `"` and `\`.
    pub fn string(&mut self) -> Option<String> {
        let start = self.pos;
        if !self.eat('"') {
            return None;
        }
        let mut out = String::new();
        let mut chars = self.rest().char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' if chars.peek().map(|&(_, n)| n) == Some('"') => {
                    chars.next();
                    out.push('"');
                }
                '"' => {
                    self.pos += i + 1;
                    return Some(out);
                }
                '\\' if chars.peek().map(|&(_, n)| n) == Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                _ => out.push(c),
            }
        }
        self.pos = start;
        None
    }

    /// Text between a `[` and its matching `]`, brackets inside string
    /// literals excluded.
    pub fn bracketed(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        if !rest.starts_with('[') {
            return None;
        }
        let mut depth = 0usize;
        let mut in_string = false;
        for (i, c) in rest.char_indices() {
            match c {
                '"' => in_string = !in_string,
                '[' if !in_string => depth += 1,
                ']' if !in_string => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += i + 1;
                        return Some(&rest[1..i]);
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.rest().is_empty()
    }

    /// `;` followed by nothing or a trailing `!` comment.
    pub fn end_of_statement(&mut self) -> bool {
        self.eat(';') && (self.at_end() || self.rest().starts_with('!'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_exponents() {
        let mut cur = Cursor::new(" -1.5, 2e3 ,.25");
        assert_eq!(cur.number(), Some(-1.5));
        assert!(cur.eat(','));
        assert_eq!(cur.number(), Some(2000.0));
        assert!(cur.eat(','));
        assert_eq!(cur.number(), Some(0.25));
        assert!(cur.at_end());
    }

    #[test]
    fn test_number_rejects_words() {
        let mut cur = Cursor::new("inf");
        assert_eq!(cur.number(), None);
        assert_eq!(cur.rest(), "inf");

        let mut cur = Cursor::new("10abc");
        assert_eq!(cur.number(), None);
        assert_eq!(cur.rest(), "10abc");
    }

    #[test]
    fn test_ext_axis_sentinel() {
        let mut cur = Cursor::new("[9E9,1,9e9,0,-2.5,9E+09]");
        let axes = cur.ext_axis_array().unwrap();
        assert_eq!(axes[0], f64::INFINITY);
        assert_eq!(axes[1], 1.0);
        assert_eq!(axes[2], f64::INFINITY);
        assert_eq!(axes[4], -2.5);
        // only the exact sentinel literal is special
        assert_eq!(axes[5], 9e9);
    }

    #[test]
    fn test_fixed_arrays_check_length() {
        let mut cur = Cursor::new("[1,2,3,4]");
        assert_eq!(cur.num_array::<3>(), None);
        assert_eq!(cur.rest(), "[1,2,3,4]");
        assert_eq!(cur.num_array::<4>(), Some([1.0, 2.0, 3.0, 4.0]));

        let mut cur = Cursor::new("[0,-1,0,1.5]");
        assert_eq!(cur.int_array::<4>(), None);
    }

    #[test]
    fn test_keyword_needs_whole_word() {
        let mut cur = Cursor::new("MoveLDO x");
        assert!(!cur.keyword("MoveL"));
        assert!(cur.keyword("MoveLDO"));
        assert_eq!(cur.ident(), Some("x"));
    }

    #[test]
    fn test_string_escapes() {
        let mut cur = Cursor::new(r#""say ""hi"" \\ ok",rest"#);
        assert_eq!(cur.string().as_deref(), Some(r#"say "hi" \ ok"#));
        assert!(cur.eat(','));

        let mut cur = Cursor::new(r#""unterminated"#);
        assert_eq!(cur.string(), None);
    }

    #[test]
    fn test_bracketed_skips_strings() {
        let mut cur = Cursor::new(r#"[FALSE,"a]b",[[0,0,0],[1,0,0,0]]];"#);
        assert_eq!(cur.bracketed(), Some(r#"FALSE,"a]b",[[0,0,0],[1,0,0,0]]"#));
        assert!(cur.end_of_statement());

        let mut cur = Cursor::new("[[1,2]");
        assert_eq!(cur.bracketed(), None);
    }

    #[test]
    fn test_end_of_statement_allows_comment() {
        assert!(Cursor::new(";  ! done").end_of_statement());
        assert!(!Cursor::new("; extra").end_of_statement());
        assert!(!Cursor::new("").end_of_statement());
    }
}
