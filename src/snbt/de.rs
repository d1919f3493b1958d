//! Recursive-descent SNBT parser.
//!
//! One method per production:
//!
//! ```text
//! value       := compound | listOrArray | literal
//! compound    := '{' (entry (',' entry)* ','?)? '}'
//! entry       := key ':' value
//! listOrArray := '[' typedPrefix? (value (',' value)* ','?)? ']'
//! typedPrefix := ('B' | 'I' | 'L') ';'
//! literal     := quotedString | simpleToken
//! ```
//!
//! Whitespace may appear between any two tokens.

use std::str::FromStr;

use crate::snbt::lexer::Lexer;
use crate::{Compound, Error, List, Result, Tag, TagKind};

/// SNBT parser over a [`Lexer`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, max_depth: usize) -> Self {
        Parser {
            lexer: Lexer::new(source),
            max_depth,
        }
    }

    /// Parses a compound that must make up the whole input, apart from
    /// surrounding whitespace.
    pub fn parse_root(&mut self) -> Result<Compound> {
        self.lexer.skip_whitespace();
        let root = self.parse_compound(0)?;
        self.expect_end()?;
        Ok(root)
    }

    /// Parses any single value that must make up the whole input.
    pub fn parse_tag(&mut self) -> Result<Tag> {
        let tag = self.parse_value(0)?;
        self.expect_end()?;
        Ok(tag)
    }

    fn expect_end(&mut self) -> Result<()> {
        self.lexer.skip_whitespace();
        if self.lexer.can_read(1) {
            return Err(self.lexer.error("Unexpected trailing data"));
        }
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthExceeded {
                depth,
                max: self.max_depth,
            });
        }
        Ok(())
    }

    fn parse_value(&mut self, depth: usize) -> Result<Tag> {
        self.lexer.skip_whitespace();
        match self.lexer.peek(0) {
            None => Err(self.lexer.error("Expected value")),
            Some('{') => Ok(Tag::Compound(self.parse_compound(depth)?)),
            Some('[') => self.parse_list_or_array(depth),
            Some(c) => {
                let start = self.lexer.cursor();
                let text = self.lexer.read_string()?;
                if c == '"' || c == '\'' {
                    return Ok(Tag::String(text));
                }
                if text.is_empty() {
                    return Err(self.lexer.error_at(start, "Expected value"));
                }
                Ok(infer_literal(&text))
            }
        }
    }

    fn parse_compound(&mut self, depth: usize) -> Result<Compound> {
        self.check_depth(depth)?;
        self.lexer.expect('{')?;
        self.lexer.skip_whitespace();

        let mut map = Compound::new();
        while self.lexer.peek(0).is_some_and(|c| c != '}') {
            let start = self.lexer.cursor();
            let key = self.lexer.read_string()?;
            if key.is_empty() {
                return Err(self.lexer.error_at(start, "Expected key"));
            }
            self.lexer.skip_whitespace();
            self.lexer.expect(':')?;
            let value = self.parse_value(depth + 1)?;
            map.insert(key, value);

            self.lexer.skip_whitespace();
            if self.lexer.peek(0) != Some(',') {
                break;
            }
            self.lexer.skip();
            self.lexer.skip_whitespace();
        }

        self.lexer.expect('}')?;
        Ok(map)
    }

    fn parse_list_or_array(&mut self, depth: usize) -> Result<Tag> {
        self.check_depth(depth)?;
        self.lexer.expect('[')?;
        self.lexer.skip_whitespace();

        let array_kind = self.parse_array_prefix()?;
        if !self.lexer.can_read(1) {
            return Err(self.lexer.error("Expected value"));
        }

        let mut kind = array_kind.and_then(TagKind::array_element);
        let mut elements = Vec::new();
        while self.lexer.peek(0).is_some_and(|c| c != ']') {
            let start = self.lexer.cursor();
            let element = self.parse_value(depth + 1)?;
            match kind {
                None => kind = Some(element.kind()),
                Some(expected) if expected != element.kind() => {
                    return Err(Error::type_mismatch(
                        self.lexer.source(),
                        start,
                        expected,
                        element.kind(),
                    ));
                }
                Some(_) => {}
            }
            elements.push(element);

            self.lexer.skip_whitespace();
            if self.lexer.peek(0) != Some(',') {
                break;
            }
            self.lexer.skip();
            self.lexer.skip_whitespace();
        }
        self.lexer.expect(']')?;

        Ok(match array_kind {
            Some(TagKind::ByteArray) => {
                Tag::ByteArray(elements.iter().filter_map(Tag::as_i8).collect())
            }
            Some(TagKind::IntArray) => {
                Tag::IntArray(elements.iter().filter_map(Tag::as_i32).collect())
            }
            Some(_) => Tag::LongArray(elements.iter().filter_map(Tag::as_i64).collect()),
            None => Tag::List(List::from_parts(kind.unwrap_or(TagKind::End), elements)),
        })
    }

    // `B;`, `I;` or `L;` directly after the bracket. A quoted first token is
    // never a prefix.
    fn parse_array_prefix(&mut self) -> Result<Option<TagKind>> {
        let prefix = match (self.lexer.peek(0), self.lexer.peek(1)) {
            (Some(c), Some(';')) if c != '"' && c != '\'' => c,
            _ => return Ok(None),
        };
        let start = self.lexer.cursor();
        let kind = match prefix {
            'B' => TagKind::ByteArray,
            'I' => TagKind::IntArray,
            'L' => TagKind::LongArray,
            other => {
                return Err(self
                    .lexer
                    .error_at(start, &format!("Unknown array type '{}'", other)))
            }
        };
        self.lexer.skip();
        self.lexer.skip();
        self.lexer.skip_whitespace();
        Ok(Some(kind))
    }
}

/// Infers the tag an unquoted token denotes.
///
/// A numeric suffix is tried first, then a plain double (only if the text has
/// a `.`), then an int, then `true`/`false` in any case. Anything else is a
/// string. A failed step falls through to the next one.
///
/// Floating-point text is plain decimal with an optional exponent, or one of
/// the exact spellings `NaN`, `Infinity` and `-Infinity`.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::snbt::infer_literal;
/// use nbt_snbt::Tag;
///
/// assert_eq!(infer_literal("5b"), Tag::Byte(5));
/// assert_eq!(infer_literal("300b"), Tag::String("300b".into()));
/// assert_eq!(infer_literal("1.5e3d"), Tag::Double(1500.0));
/// assert_eq!(infer_literal("TRUE"), Tag::Byte(1));
/// assert_eq!(infer_literal("-Infinityd"), Tag::Double(f64::NEG_INFINITY));
/// assert_eq!(infer_literal("inff"), Tag::String("inff".into()));
/// ```
pub fn infer_literal(text: &str) -> Tag {
    if let Some(suffix) = text.chars().last() {
        let body = &text[..text.len() - suffix.len_utf8()];
        let suffixed = match suffix {
            'b' | 'B' => body.parse().ok().map(Tag::Byte),
            's' | 'S' => body.parse().ok().map(Tag::Short),
            'l' | 'L' => body.parse().ok().map(Tag::Long),
            'f' | 'F' => parse_float(body).map(Tag::Float),
            'd' | 'D' => parse_float(body).map(Tag::Double),
            _ => None,
        };
        if let Some(tag) = suffixed {
            return tag;
        }
    }
    if text.contains('.') {
        if let Some(v) = parse_float(text) {
            return Tag::Double(v);
        }
    }
    if let Ok(v) = text.parse() {
        return Tag::Int(v);
    }
    if text.eq_ignore_ascii_case("true") {
        return Tag::Byte(1);
    }
    if text.eq_ignore_ascii_case("false") {
        return Tag::Byte(0);
    }
    Tag::String(text.to_string())
}

fn parse_float<T: FromStr>(text: &str) -> Option<T> {
    match text {
        "NaN" | "Infinity" | "-Infinity" => text.parse().ok(),
        _ if is_decimal(text) => text.parse().ok(),
        _ => None,
    }
}

// sign? (digits ('.' digits?)? | '.' digits) (('e' | 'E') sign? digits)?
fn is_decimal(text: &str) -> bool {
    let is_sign = |c: char| c == '+' || c == '-';
    let body = text.strip_prefix(is_sign).unwrap_or(text);
    let (mantissa, exponent) = match body.find(|c| c == 'e' || c == 'E') {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count();
    let dots = mantissa.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != mantissa.len() {
        return false;
    }
    match exponent {
        None => true,
        Some(exponent) => {
            let exponent = exponent.strip_prefix(is_sign).unwrap_or(exponent);
            !exponent.is_empty() && exponent.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MAX_DEPTH;

    fn parse(text: &str) -> Result<Compound> {
        Parser::new(text, MAX_DEPTH).parse_root()
    }

    #[test]
    fn test_suffix_inference() {
        assert_eq!(infer_literal("5b"), Tag::Byte(5));
        assert_eq!(infer_literal("5s"), Tag::Short(5));
        assert_eq!(infer_literal("5"), Tag::Int(5));
        assert_eq!(infer_literal("5L"), Tag::Long(5));
        assert_eq!(infer_literal("5.0f"), Tag::Float(5.0));
        assert_eq!(infer_literal("5.0"), Tag::Double(5.0));
        assert_eq!(infer_literal("true"), Tag::Byte(1));
        assert_eq!(infer_literal("FALSE"), Tag::Byte(0));
    }

    #[test]
    fn test_failed_steps_fall_through() {
        assert_eq!(infer_literal("1.2.3"), Tag::String("1.2.3".into()));
        assert_eq!(infer_literal("3000000000"), Tag::String("3000000000".into()));
        assert_eq!(infer_literal("b"), Tag::String("b".into()));
        assert_eq!(infer_literal("-"), Tag::String("-".into()));
    }

    #[test]
    fn test_double_suffix_is_not_byte_limited() {
        assert_eq!(infer_literal("1000d"), Tag::Double(1000.0));
        assert_eq!(infer_literal("2.5D"), Tag::Double(2.5));
    }

    #[test]
    fn test_non_finite_spellings_are_exact() {
        let root = parse("{k:nand}").unwrap();
        assert_eq!(root.get("k"), Some(&Tag::String("nand".into())));
        for text in ["inff", "INFd", "infinityf", "Nanf", "nan", "-inff", "infd"] {
            assert_eq!(infer_literal(text), Tag::String(text.into()), "{}", text);
        }

        assert_eq!(infer_literal("Infinityf"), Tag::Float(f32::INFINITY));
        assert_eq!(infer_literal("-Infinityd"), Tag::Double(f64::NEG_INFINITY));
        assert!(matches!(infer_literal("NaNf"), Tag::Float(v) if v.is_nan()));
        assert!(matches!(infer_literal("NaND"), Tag::Double(v) if v.is_nan()));
        // without a suffix these stay strings
        assert_eq!(infer_literal("NaN"), Tag::String("NaN".into()));
        assert_eq!(infer_literal("Infinity"), Tag::String("Infinity".into()));
    }

    #[test]
    fn test_float_grammar() {
        assert_eq!(infer_literal("1e3f"), Tag::Float(1000.0));
        assert_eq!(infer_literal("-1.5E-2d"), Tag::Double(-0.015));
        assert_eq!(infer_literal("+.5d"), Tag::Double(0.5));
        assert_eq!(infer_literal("1.5e3"), Tag::Double(1500.0));
        for text in ["1e", "e3d", ".f", "1.5e+d", "1..5", "0x1p3d", "1_0.0"] {
            assert_eq!(infer_literal(text), Tag::String(text.into()), "{}", text);
        }
    }

    #[test]
    fn test_array_prefix() {
        let root = parse("{a:[B;1b,2B],b:[I; 3],c:[L;-4L,],d:[B;]}").unwrap();
        assert_eq!(root.get("a"), Some(&Tag::ByteArray(vec![1, 2])));
        assert_eq!(root.get("b"), Some(&Tag::IntArray(vec![3])));
        assert_eq!(root.get("c"), Some(&Tag::LongArray(vec![-4])));
        assert_eq!(root.get("d"), Some(&Tag::ByteArray(vec![])));
    }

    #[test]
    fn test_array_elements_must_match() {
        let err = parse("{a:[I;1,2b]}").unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                position: 8,
                expected: TagKind::Int,
                found: TagKind::Byte,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_array_prefix() {
        let err = parse("{a:[X;1]}").unwrap_err();
        assert_eq!(err.position(), Some(4));
        assert!(err.to_string().starts_with("Unknown array type 'X'"));
    }

    #[test]
    fn test_unterminated_list() {
        assert!(parse("{a:[").is_err());
        assert!(parse("{a:[1").is_err());
        assert!(parse("{a:[B;").is_err());
    }

    #[test]
    fn test_empty_key() {
        let err = parse("{:1}").unwrap_err();
        assert_eq!(err.position(), Some(1));
        let err = parse("{\"\":1}").unwrap_err();
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn test_depth_cap() {
        let nested = |n: usize| format!("{}{}", "{a:".repeat(n) + "{", "}".repeat(n + 1));
        assert!(Parser::new(&nested(4), 4).parse_root().is_ok());
        assert_eq!(
            Parser::new(&nested(5), 4).parse_root(),
            Err(Error::DepthExceeded { depth: 5, max: 4 })
        );
    }

    #[test]
    fn test_parse_tag_any_value() {
        assert_eq!(Parser::new(" 7s ", MAX_DEPTH).parse_tag(), Ok(Tag::Short(7)));
        assert!(Parser::new("7s x", MAX_DEPTH).parse_tag().is_err());
        assert!(Parser::new("", MAX_DEPTH).parse_tag().is_err());
    }
}
