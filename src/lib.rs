//! # nbt_snbt
//!
//! Named Binary Tag (NBT) values with a hardened binary codec and an SNBT
//! (stringified NBT) parser and writer.
//!
//! ## What is NBT?
//!
//! NBT is a self-describing, recursively structured format used by voxel-game
//! save files and network protocols. A document is a tree of typed tags:
//! integers and floats of fixed width, strings, typed arrays, homogeneous
//! lists and insertion-ordered compounds. SNBT is its human-readable text form.
//!
//! ## Key Features
//!
//! - **Strongly typed model**: [`Tag`] has one variant per tag kind, and
//!   [`List`] carries its declared element kind even when empty
//! - **Defensive decoding**: every tag is charged to a [`SizeLimiter`] before it
//!   is allocated, and nesting is capped at 512 levels
//! - **Exact text rules**: suffix-driven literal typing, typed-array prefixes
//!   and positioned syntax errors
//! - **Serde interop**: tags serialize to and deserialize from any
//!   self-describing serde format
//!
//! ## Quick Start
//!
//! ```rust
//! use nbt_snbt::{compound, from_slice, from_snbt, to_snbt, to_vec, Tag};
//!
//! let root = compound! {
//!     "name" => "Steve",
//!     "health" => 20.0f32,
//!     "xp" => 1337,
//! };
//!
//! // Binary
//! let bytes = to_vec(&root).unwrap();
//! assert_eq!(from_slice(&bytes).unwrap(), root);
//!
//! // Text
//! let text = to_snbt(&root).unwrap();
//! assert_eq!(text, r#"{name:"Steve",health:20.0f,xp:1337}"#);
//! assert_eq!(from_snbt(&text).unwrap(), root);
//! ```
//!
//! ### Untrusted Input
//!
//! ```rust
//! use nbt_snbt::{from_reader_with_options, DecodeOptions, ErrorCategory};
//!
//! // An int array declaring 2^31 - 1 elements.
//! let bytes = [10, 0, 0, 11, 0, 1, b'a', 0x7F, 0xFF, 0xFF, 0xFF];
//! let options = DecodeOptions::new().with_size_limit(2 * 1024 * 1024);
//! let err = from_reader_with_options(&bytes[..], &options).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Malformed);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade at `debug`
//! level from the top-level entry points. It never installs a logger.
//!
//! ## Format Reference
//!
//! See the [`format`] module.

pub mod binary;
pub mod error;
pub mod format;
pub mod kind;
pub mod limits;
pub mod list;
pub mod macros;
pub mod map;
pub mod options;
pub mod snbt;
pub mod value;

pub use error::{Error, ErrorCategory, Result};
pub use kind::TagKind;
pub use limits::SizeLimiter;
pub use list::List;
pub use map::Compound;
pub use options::{DecodeOptions, SnbtOptions};
pub use snbt::ToSnbt;
pub use value::Tag;

use std::io;

/// Decodes a binary root compound with no size limit.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::{from_reader, Tag};
///
/// let bytes = [10, 0, 0, 1, 0, 1, b'b', 0x7F, 0];
/// let root = from_reader(&bytes[..]).unwrap();
/// assert_eq!(root.get("b"), Some(&Tag::Byte(127)));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the bytes are not a well-formed
/// document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<Compound>
where
    R: io::Read,
{
    binary::read(reader, &DecodeOptions::new())
}

/// Decodes a binary root compound under the given limits.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R>(reader: R, options: &DecodeOptions) -> Result<Compound>
where
    R: io::Read,
{
    binary::read(reader, options)
}

/// Decodes a binary root compound and its name under the given limits.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::{from_reader_named, DecodeOptions};
///
/// let bytes = [10, 0, 2, b'h', b'i', 0];
/// let (name, root) = from_reader_named(&bytes[..], &DecodeOptions::new()).unwrap();
/// assert_eq!(name, "hi");
/// assert!(root.is_empty());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_named<R>(reader: R, options: &DecodeOptions) -> Result<(String, Compound)>
where
    R: io::Read,
{
    binary::read_named(reader, options)
}

/// Decodes a binary root compound from a byte slice with no size limit.
///
/// Bytes after the root are ignored.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Compound> {
    binary::read(bytes, &DecodeOptions::new())
}

/// Encodes `root` with an empty root name.
///
/// # Errors
///
/// Returns an error, having written nothing, if the tree is invalid or cannot
/// be represented in the binary format. Returns an I/O error if the writer
/// fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, root: &Compound) -> Result<()>
where
    W: io::Write,
{
    binary::write(writer, root)
}

/// Encodes `root` under the root name `name`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_named<W>(writer: W, name: &str, root: &Compound) -> Result<()>
where
    W: io::Write,
{
    binary::write_named(writer, name, root)
}

/// Encodes `root` with an empty root name into a new byte vector.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::{compound, to_vec};
///
/// let bytes = to_vec(&compound! { "int" => 0xdead }).unwrap();
/// assert_eq!(bytes, [10, 0, 0, 3, 0, 3, b'i', b'n', b't', 0, 0, 0xde, 0xad, 0]);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(root: &Compound) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    binary::write(&mut bytes, root)?;
    Ok(bytes)
}

/// Parses an SNBT compound.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::{from_snbt, Tag};
///
/// let root = from_snbt("{id:\"minecraft:stone\",Count:1b}").unwrap();
/// assert_eq!(root.get("Count"), Some(&Tag::Byte(1)));
/// ```
///
/// # Errors
///
/// Returns an error carrying the failing character index if the text is not
/// a single well-formed compound.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_snbt(text: &str) -> Result<Compound> {
    snbt::parse(text)
}

/// Parses an SNBT compound with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_snbt_with_options(text: &str, options: &SnbtOptions) -> Result<Compound> {
    snbt::parse_with_options(text, options)
}

/// Writes a tag, list or compound as compact SNBT.
///
/// # Errors
///
/// Returns an error if any list holds an element of the wrong kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_snbt<T>(value: &T) -> Result<String>
where
    T: ?Sized + ToSnbt,
{
    snbt::write(value, &SnbtOptions::new())
}

/// Writes a tag, list or compound as pretty-printed SNBT.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::{compound, list, to_snbt_pretty};
///
/// let root = compound! { "xs" => list![1, 2] };
/// assert_eq!(to_snbt_pretty(&root).unwrap(), "{\n\txs: [\n\t\t1,\n\t\t2\n\t]\n}");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_snbt_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + ToSnbt,
{
    snbt::write(value, &SnbtOptions::pretty())
}

/// Writes a tag, list or compound as SNBT with custom options.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_snbt_with_options<T>(value: &T, options: &SnbtOptions) -> Result<String>
where
    T: ?Sized + ToSnbt,
{
    snbt::write(value, options)
}
