//! Binary NBT.
//!
//! A document is a single named root: the compound id `10`, a length-prefixed
//! modified UTF-8 name, then the compound payload. Bytes after the root's
//! terminating End byte are not read.
//!
//! # Examples
//!
//! ```rust
//! use nbt_snbt::{binary, compound, DecodeOptions};
//!
//! let root = compound! { "int" => 0xdead };
//!
//! let mut bytes = Vec::new();
//! binary::write_named(&mut bytes, "level", &root).unwrap();
//! assert_eq!(&bytes[..8], [10, 0, 5, b'l', b'e', b'v', b'e', b'l']);
//!
//! let (name, back) = binary::read_named(&bytes[..], &DecodeOptions::new()).unwrap();
//! assert_eq!(name, "level");
//! assert_eq!(back, root);
//! ```

mod de;
mod mutf8;
mod ser;

pub use de::Decoder;
pub use ser::Encoder;

use std::io::{Read, Write};

use crate::limits::SizeLimiter;
use crate::options::DecodeOptions;
use crate::{Compound, Error, Result, Tag, TagKind};

/// Reads a root compound, discarding its name.
pub fn read<R: Read>(reader: R, options: &DecodeOptions) -> Result<Compound> {
    read_named(reader, options).map(|(_, root)| root)
}

/// Reads a root compound and its name.
///
/// # Errors
///
/// Fails with a malformed-data error if the root is not a compound, the input
/// is truncated or structurally invalid, containers nest deeper than
/// `options.max_depth`, or the estimated footprint exceeds
/// `options.size_limit`.
pub fn read_named<R: Read>(reader: R, options: &DecodeOptions) -> Result<(String, Compound)> {
    options.validate()?;
    let mut decoder = Decoder::new(reader, options);
    match decoder.read_root() {
        Ok((name, root)) => {
            log::debug!(
                "decoded NBT root {:?} with {} entries ({} bytes charged)",
                name,
                root.len(),
                decoder.limiter().charged()
            );
            Ok((name, root))
        }
        Err(err) => {
            log::debug!("rejected NBT input: {}", err);
            Err(err)
        }
    }
}

/// Writes `root` under the empty name.
pub fn write<W: Write>(writer: W, root: &Compound) -> Result<()> {
    write_named(writer, "", root)
}

/// Writes `root` under `name`.
///
/// # Errors
///
/// Fails before writing anything if the tree is invalid or cannot be
/// represented in the binary format.
pub fn write_named<W: Write>(mut writer: W, name: &str, root: &Compound) -> Result<()> {
    let mut encoder = Encoder::new();
    encoder.write_root(name, root)?;
    let bytes = encoder.into_bytes();
    writer.write_all(&bytes)?;
    log::debug!(
        "encoded NBT root {:?} with {} entries ({} bytes)",
        name,
        root.len(),
        bytes.len()
    );
    Ok(())
}

/// Reads the payload of a tag whose id byte has already been consumed.
///
/// `depth` is the nesting level the payload sits at, with the root compound at
/// depth 0. Charges go to `limiter`, which is handed back so a caller can keep
/// charging across several payloads.
pub fn read_payload<R: Read>(
    reader: R,
    kind: TagKind,
    limiter: SizeLimiter,
    depth: usize,
) -> Result<(Tag, SizeLimiter)> {
    let mut decoder = Decoder::with_limiter(reader, limiter, crate::limits::MAX_DEPTH);
    let tag = decoder.read_payload(kind, depth)?;
    let (_, limiter) = decoder.into_parts();
    Ok((tag, limiter))
}

/// Writes the payload of `tag`, without its id byte.
pub fn write_payload<W: Write>(mut writer: W, tag: &Tag) -> Result<()> {
    let mut encoder = Encoder::new();
    encoder.write_payload(tag)?;
    writer.write_all(encoder.as_bytes()).map_err(Error::from)
}
