//! SNBT, the text form of NBT.
//!
//! ```text
//! {name:"Steve",health:20.0f,pos:[0.5d,64.0d,-3.5d],inventory:[],uuid:[I;1,2,3,4]}
//! ```
//!
//! Unquoted tokens are typed by suffix (`b`, `s`, `L`, `f`, `d`, or none for
//! int), a bare `.` makes a double, and `true`/`false` become bytes. Quoted
//! tokens are always strings.
//!
//! # Examples
//!
//! ```rust
//! use nbt_snbt::{snbt, SnbtOptions, Tag};
//!
//! let root = snbt::parse("{b:1,a:2,b:3}").unwrap();
//! let keys: Vec<_> = root.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["b", "a"]);
//! assert_eq!(root.get("b"), Some(&Tag::Int(3)));
//!
//! let text = snbt::write(&root, &SnbtOptions::new()).unwrap();
//! assert_eq!(text, "{b:3,a:2}");
//! ```

mod de;
mod lexer;
mod ser;

pub use de::{infer_literal, Parser};
pub use lexer::Lexer;
pub use ser::{quote, ToSnbt, Writer};

pub(crate) use ser::render;

use crate::options::SnbtOptions;
use crate::{Compound, Error, Result, Tag};

/// Parses a compound with default options.
pub fn parse(text: &str) -> Result<Compound> {
    parse_with_options(text, &SnbtOptions::new())
}

/// Parses a compound that makes up the whole of `text`.
///
/// # Errors
///
/// Fails with a syntax or type-mismatch error carrying the character index
/// of the problem, or with a depth error if containers nest deeper than
/// `options.max_depth`.
pub fn parse_with_options(text: &str, options: &SnbtOptions) -> Result<Compound> {
    options.validate()?;
    match Parser::new(text, options.max_depth).parse_root() {
        Ok(root) => {
            log::debug!("parsed SNBT compound with {} entries", root.len());
            Ok(root)
        }
        Err(err) => {
            log::debug!("rejected SNBT input: {}", err);
            Err(err)
        }
    }
}

/// Parses a single value of any kind that makes up the whole of `text`.
pub fn parse_tag(text: &str, options: &SnbtOptions) -> Result<Tag> {
    options.validate()?;
    Parser::new(text, options.max_depth).parse_tag()
}

/// Writes `value` as SNBT.
///
/// # Errors
///
/// Fails with [`Error::InvalidTag`] if any list in the value holds an element
/// of the wrong kind.
pub fn write<T: ToSnbt + ?Sized>(value: &T, options: &SnbtOptions) -> Result<String> {
    if !value.is_valid() {
        return Err(Error::invalid_tag("list element kinds do not match"));
    }
    let text = render(value, options.pretty);
    log::debug!("wrote {} characters of SNBT", text.len());
    Ok(text)
}
