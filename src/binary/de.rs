//! Binary NBT decoding.
//!
//! All multi-byte numbers are big-endian. Every tag is charged to the
//! decoder's [`SizeLimiter`] before its payload is read, so a document that
//! declares a huge array fails before the array is allocated.

use std::io::Read;

use crate::binary::mutf8;
use crate::limits::{footprint, SizeLimiter};
use crate::options::DecodeOptions;
use crate::{Compound, Error, List, Result, Tag, TagKind};

// Upper bound on speculative preallocation for declared lengths.
const MAX_PREALLOC: usize = 4096;

/// Streaming decoder over any [`Read`] source.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::binary::Decoder;
/// use nbt_snbt::{DecodeOptions, Tag};
///
/// let bytes = [10, 0, 1, b'r', 3, 0, 1, b'n', 0, 0, 0, 7, 0];
/// let mut decoder = Decoder::new(&bytes[..], &DecodeOptions::new());
/// let (name, root) = decoder.read_root().unwrap();
/// assert_eq!(name, "r");
/// assert_eq!(root.get("n"), Some(&Tag::Int(7)));
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
    reader: R,
    limiter: SizeLimiter,
    max_depth: usize,
}

impl<R: Read> Decoder<R> {
    /// Creates a decoder with the limits described by `options`.
    pub fn new(reader: R, options: &DecodeOptions) -> Self {
        Decoder {
            reader,
            limiter: options.limiter(),
            max_depth: options.max_depth,
        }
    }

    /// Creates a decoder that charges an existing limiter.
    pub fn with_limiter(reader: R, limiter: SizeLimiter, max_depth: usize) -> Self {
        Decoder {
            reader,
            limiter,
            max_depth,
        }
    }

    /// Returns the limiter, including everything charged so far.
    pub fn limiter(&self) -> &SizeLimiter {
        &self.limiter
    }

    /// Consumes the decoder, returning the reader and the limiter.
    pub fn into_parts(self) -> (R, SizeLimiter) {
        (self.reader, self.limiter)
    }

    /// Reads a root: a compound id, a name and a compound payload.
    ///
    /// Bytes after the root are left unread.
    pub fn read_root(&mut self) -> Result<(String, Compound)> {
        let id = self.read_u8("root tag type")?;
        let kind = TagKind::from_id(id).ok_or(Error::UnknownTagKind {
            id,
            context: "root tag type",
        })?;
        if kind != TagKind::Compound {
            return Err(Error::RootNotCompound { found: kind });
        }
        let name = self.read_string("root name")?;
        let root = self.read_compound(0)?;
        Ok((name, root))
    }

    /// Reads the payload of a tag of `kind` at nesting `depth`.
    ///
    /// The id byte must already have been consumed.
    pub fn read_payload(&mut self, kind: TagKind, depth: usize) -> Result<Tag> {
        Ok(match kind {
            TagKind::End => {
                self.limiter.add_charge(footprint::END)?;
                Tag::End
            }
            TagKind::Byte => {
                self.limiter.add_charge(footprint::BYTE)?;
                Tag::Byte(self.read_u8("byte")? as i8)
            }
            TagKind::Short => {
                self.limiter.add_charge(footprint::SHORT)?;
                Tag::Short(i16::from_be_bytes(self.read_array("short")?))
            }
            TagKind::Int => {
                self.limiter.add_charge(footprint::INT)?;
                Tag::Int(i32::from_be_bytes(self.read_array("int")?))
            }
            TagKind::Long => {
                self.limiter.add_charge(footprint::LONG)?;
                Tag::Long(i64::from_be_bytes(self.read_array("long")?))
            }
            TagKind::Float => {
                self.limiter.add_charge(footprint::FLOAT)?;
                Tag::Float(f32::from_be_bytes(self.read_array("float")?))
            }
            TagKind::Double => {
                self.limiter.add_charge(footprint::DOUBLE)?;
                Tag::Double(f64::from_be_bytes(self.read_array("double")?))
            }
            TagKind::ByteArray => {
                self.limiter.add_charge(footprint::ARRAY)?;
                let len = self.read_length("byte array")?;
                self.limiter.add_charge(len as u64)?;
                let bytes = self.read_bytes(len, "byte array")?;
                Tag::ByteArray(bytes.into_iter().map(|b| b as i8).collect())
            }
            TagKind::String => {
                self.limiter.add_charge(footprint::STRING)?;
                let text = self.read_string("string")?;
                self.limiter
                    .add_charge(footprint::STRING_CHAR * mutf8::utf16_len(&text) as u64)?;
                Tag::String(text)
            }
            TagKind::List => Tag::List(self.read_list(depth)?),
            TagKind::Compound => Tag::Compound(self.read_compound(depth)?),
            TagKind::IntArray => {
                self.limiter.add_charge(footprint::ARRAY)?;
                let len = self.read_length("int array")?;
                self.limiter.add_charge(4 * len as u64)?;
                let mut values = Vec::with_capacity(len.min(MAX_PREALLOC));
                for _ in 0..len {
                    values.push(i32::from_be_bytes(self.read_array("int array")?));
                }
                Tag::IntArray(values)
            }
            TagKind::LongArray => {
                self.limiter.add_charge(footprint::ARRAY)?;
                let len = self.read_length("long array")?;
                self.limiter.add_charge(8 * len as u64)?;
                let mut values = Vec::with_capacity(len.min(MAX_PREALLOC));
                for _ in 0..len {
                    values.push(i64::from_be_bytes(self.read_array("long array")?));
                }
                Tag::LongArray(values)
            }
        })
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

    fn read_list(&mut self, depth: usize) -> Result<List> {
        self.check_depth(depth)?;
        self.limiter.add_charge(footprint::LIST)?;
        let id = self.read_u8("list element type")?;
        let len = i32::from_be_bytes(self.read_array("list length")?);
        if len < 0 {
            return Err(Error::NegativeLength {
                field: "list",
                len,
            });
        }
        self.limiter
            .add_charge(footprint::LIST_ELEMENT * len as u64)?;

        let kind = match TagKind::from_id(id) {
            Some(kind) if len == 0 || kind != TagKind::End => kind,
            None if len == 0 => TagKind::End,
            _ => return Err(Error::InvalidListKind { id, len }),
        };

        let len = len as usize;
        let mut elements = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            elements.push(self.read_payload(kind, depth + 1)?);
        }
        Ok(List::from_parts(kind, elements))
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        self.check_depth(depth)?;
        self.limiter.add_charge(footprint::COMPOUND)?;
        let mut map = Compound::new();
        loop {
            let id = self.read_u8("compound entry type")?;
            let kind = TagKind::from_id(id).ok_or(Error::UnknownTagKind {
                id,
                context: "compound entry type",
            })?;
            if kind == TagKind::End {
                break;
            }
            let key = self.read_string("compound key")?;
            self.limiter.add_charge(
                footprint::COMPOUND_ENTRY + 2 * mutf8::utf16_len(&key) as u64,
            )?;
            let value = self.read_payload(kind, depth + 1)?;
            if map.insert(key, value).is_some() {
                self.limiter.add_charge(footprint::DUPLICATE_KEY)?;
            }
        }
        Ok(map)
    }

    #[inline]
    fn read_u8(&mut self, context: &'static str) -> Result<u8> {
        let buf: [u8; 1] = self.read_array(context)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.reader
            .read_exact(&mut buf)
            .map_err(|e| Error::io(&e, context))?;
        Ok(buf)
    }

    // Grows with the data actually read rather than the declared length.
    fn read_bytes(&mut self, len: usize, context: &'static str) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        (&mut self.reader)
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| Error::io(&e, context))?;
        if buf.len() != len {
            return Err(Error::UnexpectedEof { context });
        }
        Ok(buf)
    }

    fn read_length(&mut self, field: &'static str) -> Result<usize> {
        let len = i32::from_be_bytes(self.read_array(field)?);
        if len < 0 {
            return Err(Error::NegativeLength { field, len });
        }
        Ok(len as usize)
    }

    fn read_string(&mut self, field: &'static str) -> Result<String> {
        let len = u16::from_be_bytes(self.read_array(field)?) as usize;
        let bytes = self.read_bytes(len, field)?;
        mutf8::decode(&bytes, field)
    }
}
