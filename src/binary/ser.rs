//! Binary NBT encoding.
//!
//! The encoder writes into an in-memory buffer, so a tag that turns out to be
//! unencodable halfway through never leaves a partial document in the
//! caller's writer.

use crate::binary::mutf8;
use crate::limits::MAX_STRING_BYTES;
use crate::{Compound, Error, List, Result, Tag, TagKind};

/// Buffering encoder.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::binary::Encoder;
/// use nbt_snbt::Compound;
///
/// let mut encoder = Encoder::new();
/// encoder.write_root("", &Compound::new()).unwrap();
/// assert_eq!(encoder.into_bytes(), [10, 0, 0, 0]);
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    /// Creates an empty encoder.
    pub fn new() -> Self {
        Encoder { buf: Vec::new() }
    }

    /// Creates an encoder with a preallocated buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Encoder {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the encoder, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Writes a root compound under `name`.
    ///
    /// # Errors
    ///
    /// Fails without writing anything if the tree is invalid.
    pub fn write_root(&mut self, name: &str, root: &Compound) -> Result<()> {
        if !root.is_valid() {
            return Err(Error::invalid_tag("list element kinds do not match"));
        }
        let start = self.buf.len();
        let written = self.write_named(name, root);
        if written.is_err() {
            self.buf.truncate(start);
        }
        written
    }

    fn write_named(&mut self, name: &str, root: &Compound) -> Result<()> {
        self.write_u8(TagKind::Compound.id());
        self.write_string(name, "root name")?;
        self.write_compound(root)
    }

    /// Writes the payload of `tag`, without its id byte.
    ///
    /// # Errors
    ///
    /// Fails if the tag is invalid or contains something the format cannot
    /// carry: a string longer than 65535 encoded bytes, an End value inside a
    /// compound, or a non-empty list declared as End.
    pub fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        if !tag.is_valid() {
            return Err(Error::invalid_tag("list element kinds do not match"));
        }
        let start = self.buf.len();
        let written = self.write_tag(tag);
        if written.is_err() {
            self.buf.truncate(start);
        }
        written
    }

    fn write_tag(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::End => {}
            Tag::Byte(v) => self.write_u8(*v as u8),
            Tag::Short(v) => self.write_raw(&v.to_be_bytes()),
            Tag::Int(v) => self.write_raw(&v.to_be_bytes()),
            Tag::Long(v) => self.write_raw(&v.to_be_bytes()),
            Tag::Float(v) => self.write_raw(&v.to_be_bytes()),
            Tag::Double(v) => self.write_raw(&v.to_be_bytes()),
            Tag::ByteArray(values) => {
                self.write_length(values.len(), "byte array")?;
                self.buf.extend(values.iter().map(|&b| b as u8));
            }
            Tag::String(text) => self.write_string(text, "string")?,
            Tag::List(list) => self.write_list(list)?,
            Tag::Compound(map) => self.write_compound(map)?,
            Tag::IntArray(values) => {
                self.write_length(values.len(), "int array")?;
                for v in values {
                    self.write_raw(&v.to_be_bytes());
                }
            }
            Tag::LongArray(values) => {
                self.write_length(values.len(), "long array")?;
                for v in values {
                    self.write_raw(&v.to_be_bytes());
                }
            }
        }
        Ok(())
    }

    fn write_list(&mut self, list: &List) -> Result<()> {
        if list.is_empty() {
            self.write_u8(TagKind::End.id());
        } else {
            if list.element_kind() == TagKind::End {
                return Err(Error::invalid_tag("non-empty list of TAG_End"));
            }
            self.write_u8(list.element_kind().id());
        }
        self.write_length(list.len(), "list")?;
        for element in list {
            self.write_tag(element)?;
        }
        Ok(())
    }

    fn write_compound(&mut self, map: &Compound) -> Result<()> {
        for (key, value) in map {
            if value.is_end() {
                return Err(Error::InvalidTag {
                    reason: format!("compound entry {:?} is TAG_End", key),
                });
            }
            self.write_u8(value.id());
            self.write_string(key, "compound key")?;
            self.write_tag(value)?;
        }
        self.write_u8(TagKind::End.id());
        Ok(())
    }

    #[inline]
    fn write_u8(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    #[inline]
    fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn write_length(&mut self, len: usize, field: &'static str) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| Error::LengthExceedsLimit {
            field,
            len,
            max: i32::MAX as usize,
        })?;
        self.write_raw(&len.to_be_bytes());
        Ok(())
    }

    fn write_string(&mut self, text: &str, field: &'static str) -> Result<()> {
        let len = mutf8::encoded_len(text);
        if len > MAX_STRING_BYTES {
            return Err(Error::LengthExceedsLimit {
                field,
                len,
                max: MAX_STRING_BYTES,
            });
        }
        self.write_raw(&(len as u16).to_be_bytes());
        mutf8::encode(text, &mut self.buf);
        Ok(())
    }
}
