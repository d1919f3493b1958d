//! SNBT writer.
//!
//! Compact output puts everything on one line. Pretty output puts every
//! container entry on its own line, indented one tab deeper than the
//! container, and adds a space after each compound key's colon.

use std::fmt::{Debug, Display};

use crate::snbt::lexer::is_simple_char;
use crate::{Compound, List, Tag};

/// Values that can be written as SNBT.
pub trait ToSnbt {
    /// Returns `true` if every list in the value is homogeneous.
    fn is_valid(&self) -> bool;

    /// Appends the value to `writer` at nesting `depth`.
    fn write_snbt(&self, writer: &mut Writer, depth: usize);
}

impl ToSnbt for Tag {
    fn is_valid(&self) -> bool {
        Tag::is_valid(self)
    }

    fn write_snbt(&self, writer: &mut Writer, depth: usize) {
        writer.write_tag(self, depth);
    }
}

impl ToSnbt for Compound {
    fn is_valid(&self) -> bool {
        Compound::is_valid(self)
    }

    fn write_snbt(&self, writer: &mut Writer, depth: usize) {
        writer.write_compound(self, depth);
    }
}

impl ToSnbt for List {
    fn is_valid(&self) -> bool {
        List::is_valid(self)
    }

    fn write_snbt(&self, writer: &mut Writer, depth: usize) {
        writer.write_list(self, depth);
    }
}

/// Accumulates SNBT text.
#[derive(Debug, Default)]
pub struct Writer {
    out: String,
    pretty: bool,
}

impl Writer {
    pub fn new(pretty: bool) -> Self {
        Writer {
            out: String::new(),
            pretty,
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn write_tag(&mut self, tag: &Tag, depth: usize) {
        match tag {
            Tag::End => self.out.push_str("END"),
            Tag::Byte(v) => self.number(v, "b"),
            Tag::Short(v) => self.number(v, "s"),
            Tag::Int(v) => self.number(v, ""),
            Tag::Long(v) => self.number(v, "L"),
            Tag::Float(v) => self.float(v, v.is_infinite(), "f"),
            Tag::Double(v) => self.float(v, v.is_infinite(), "d"),
            Tag::String(s) => quote_into(s, &mut self.out),
            Tag::List(list) => self.write_list(list, depth),
            Tag::Compound(map) => self.write_compound(map, depth),
            Tag::ByteArray(values) => self.write_array("[B;", values, "B", depth),
            Tag::IntArray(values) => self.write_array("[I;", values, "", depth),
            Tag::LongArray(values) => self.write_array("[L;", values, "L", depth),
        }
    }

    pub fn write_compound(&mut self, map: &Compound, depth: usize) {
        self.container("{", '}', map.iter(), depth, |w, (key, value), depth| {
            if !key.is_empty() && key.chars().all(is_simple_char) {
                w.out.push_str(key);
            } else {
                quote_into(key, &mut w.out);
            }
            w.out.push(':');
            if w.pretty {
                w.out.push(' ');
            }
            w.write_tag(value, depth);
        });
    }

    pub fn write_list(&mut self, list: &List, depth: usize) {
        self.container("[", ']', list.iter(), depth, |w, tag, depth| {
            w.write_tag(tag, depth)
        });
    }

    fn write_array<T: Display>(&mut self, open: &str, values: &[T], suffix: &str, depth: usize) {
        self.container(open, ']', values.iter(), depth, |w, v, _| w.number(v, suffix));
    }

    fn number<T: Display>(&mut self, value: T, suffix: &str) {
        self.out.push_str(&value.to_string());
        self.out.push_str(suffix);
    }

    // Debug keeps a trailing ".0" on integral values but spells infinity
    // "inf", which the reader does not accept.
    fn float<T: Debug>(&mut self, value: T, infinite: bool, suffix: &str) {
        let text = format!("{:?}", value);
        if infinite {
            self.out.push_str(if text.starts_with('-') { "-Infinity" } else { "Infinity" });
        } else {
            self.out.push_str(&text);
        }
        self.out.push_str(suffix);
    }

    fn container<I, F>(&mut self, open: &str, close: char, items: I, depth: usize, mut item: F)
    where
        I: ExactSizeIterator,
        F: FnMut(&mut Self, I::Item, usize),
    {
        self.out.push_str(open);
        if items.len() == 0 {
            self.out.push(close);
            return;
        }
        for (i, element) in items.enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            if self.pretty {
                self.out.push('\n');
                self.indent(depth + 1);
            }
            item(self, element, depth + 1);
        }
        if self.pretty {
            self.out.push('\n');
            self.indent(depth);
        }
        self.out.push(close);
    }

    fn indent(&mut self, depth: usize) {
        self.out.extend(std::iter::repeat('\t').take(depth));
    }
}

/// Renders a value without checking validity.
pub(crate) fn render<T: ToSnbt + ?Sized>(value: &T, pretty: bool) -> String {
    let mut writer = Writer::new(pretty);
    value.write_snbt(&mut writer, 0);
    writer.into_string()
}

/// Writes `text` as a quoted string.
///
/// Double quotes are preferred. Single quotes are used when the first quote
/// character in the text is `"` and the text has no `'`, which avoids
/// escaping. Backslashes and the chosen quote are escaped.
///
/// ```rust
/// use nbt_snbt::snbt::quote;
///
/// assert_eq!(quote("plain"), "\"plain\"");
/// assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
/// assert_eq!(quote("it's \"x\""), "\"it's \\\"x\\\"\"");
/// assert_eq!(quote("a\\b"), "\"a\\\\b\"");
/// ```
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    quote_into(text, &mut out);
    out
}

fn quote_into(text: &str, out: &mut String) {
    let first = text.chars().find(|&c| c == '"' || c == '\'');
    let quote = if first == Some('"') && !text.contains('\'') {
        '\''
    } else {
        '"'
    };
    out.push(quote);
    for c in text.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Compound {
        let mut inner = Compound::new();
        inner.insert("x", Tag::Short(1));
        let mut root = Compound::new();
        root.insert("name", "Steve");
        root.insert("pos", List::from(vec![Tag::Double(1.0), Tag::Double(-2.5)]));
        root.insert("inner", inner);
        root.insert("empty", List::new());
        root
    }

    #[test]
    fn test_compact() {
        assert_eq!(
            render(&sample(), false),
            r#"{name:"Steve",pos:[1.0d,-2.5d],inner:{x:1s},empty:[]}"#
        );
    }

    #[test]
    fn test_pretty() {
        let expected = "{\n\tname: \"Steve\",\n\tpos: [\n\t\t1.0d,\n\t\t-2.5d\n\t],\n\tinner: {\n\t\tx: 1s\n\t},\n\tempty: []\n}";
        assert_eq!(render(&sample(), true), expected);
    }

    #[test]
    fn test_scalars_and_arrays() {
        assert_eq!(render(&Tag::Byte(-1), false), "-1b");
        assert_eq!(render(&Tag::Long(5), false), "5L");
        assert_eq!(render(&Tag::Float(5.0), false), "5.0f");
        assert_eq!(render(&Tag::byte_array(&[1, -2]), false), "[B;1B,-2B]");
        assert_eq!(render(&Tag::int_array(&[1, 2]), false), "[I;1,2]");
        assert_eq!(render(&Tag::long_array(&[3]), false), "[L;3L]");
        assert_eq!(render(&Tag::long_array(&[]), false), "[L;]");
        assert_eq!(render(&Tag::End, false), "END");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(render(&Tag::Float(f32::INFINITY), false), "Infinityf");
        assert_eq!(render(&Tag::Float(f32::NEG_INFINITY), false), "-Infinityf");
        assert_eq!(render(&Tag::Double(f64::INFINITY), false), "Infinityd");
        assert_eq!(render(&Tag::Double(f64::NEG_INFINITY), false), "-Infinityd");
        assert_eq!(render(&Tag::Float(f32::NAN), false), "NaNf");
        assert_eq!(render(&Tag::Double(f64::NAN), false), "NaNd");
        assert_eq!(render(&Tag::Double(1e300), false), "1e300d");
    }

    #[test]
    fn test_key_quoting() {
        let mut map = Compound::new();
        map.insert("a.b_c+-1", Tag::Int(1));
        map.insert("has space", Tag::Int(2));
        map.insert("", Tag::Int(3));
        assert_eq!(
            render(&map, false),
            r#"{a.b_c+-1:1,"has space":2,"":3}"#
        );
    }

    #[test]
    fn test_multiline_strings_are_not_reindented() {
        let mut map = Compound::new();
        map.insert("s", "a\nb");
        assert_eq!(render(&map, true), "{\n\ts: \"a\nb\"\n}");
    }
}
