//! Modified UTF-8, the string encoding of the binary format.
//!
//! Text is encoded as UTF-16 code units, each written in one to three bytes.
//! U+0000 takes the two-byte form `C0 80`, and characters outside the BMP are
//! written as two three-byte surrogates instead of one four-byte sequence.

use crate::{Error, Result};

/// Returns the number of UTF-16 code units in `text`.
#[inline]
pub(crate) fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Returns the encoded length of `text` in bytes.
pub(crate) fn encoded_len(text: &str) -> usize {
    text.encode_utf16()
        .map(|unit| match unit {
            0x0001..=0x007F => 1,
            0x0000 | 0x0080..=0x07FF => 2,
            _ => 3,
        })
        .sum()
}

/// Appends the encoding of `text` to `out`, without a length prefix.
pub(crate) fn encode(text: &str, out: &mut Vec<u8>) {
    for unit in text.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
}

/// Decodes `bytes` into a string.
///
/// A stray continuation byte, a four-byte lead, a truncated sequence or an
/// unpaired surrogate is an error.
pub(crate) fn decode(bytes: &[u8], field: &'static str) -> Result<String> {
    let malformed = || Error::InvalidModifiedUtf8 { field };
    let continuation = |b: Option<&u8>| match b {
        Some(&b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
        _ => Err(malformed()),
    };

    let mut units = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter();
    while let Some(&lead) = iter.next() {
        let unit = match lead >> 4 {
            0x0..=0x7 => u16::from(lead),
            0xC | 0xD => {
                let b2 = continuation(iter.next())?;
                (u16::from(lead & 0x1F) << 6) | b2
            }
            0xE => {
                let b2 = continuation(iter.next())?;
                let b3 = continuation(iter.next())?;
                (u16::from(lead & 0x0F) << 12) | (b2 << 6) | b3
            }
            _ => return Err(malformed()),
        };
        units.push(unit);
    }

    String::from_utf16(&units).map_err(|_| malformed())
}
