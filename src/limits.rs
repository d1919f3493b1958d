//! Decoding limits.
//!
//! Binary input is untrusted: a few bytes can declare a multi-gigabyte array
//! or a deeply nested tree. The decoder therefore charges an estimated
//! in-memory footprint to a [`SizeLimiter`] before it allocates anything, and
//! refuses containers nested deeper than [`MAX_DEPTH`].

use crate::{Error, Result};

/// Default maximum container nesting depth. The root compound is depth 0.
pub const MAX_DEPTH: usize = 512;

/// Largest string the binary format can carry, in encoded bytes.
pub const MAX_STRING_BYTES: usize = u16::MAX as usize;

/// Footprint estimates charged per tag, in bytes.
///
/// These mirror the object overhead of a typical managed runtime and are part
/// of the format's compatibility surface: documents accepted under a given
/// limit elsewhere are accepted here too.
pub mod footprint {
    pub const END: u64 = 8;
    pub const BYTE: u64 = 9;
    pub const SHORT: u64 = 10;
    pub const INT: u64 = 12;
    pub const LONG: u64 = 16;
    pub const FLOAT: u64 = 12;
    pub const DOUBLE: u64 = 16;
    /// Base charge of all three array kinds, before the elements.
    pub const ARRAY: u64 = 24;
    /// Charged before a string is read.
    pub const STRING: u64 = 36;
    /// Charged per UTF-16 code unit once a string is read.
    pub const STRING_CHAR: u64 = 16;
    pub const LIST: u64 = 37;
    /// Charged per declared list element, before the element kind is checked.
    pub const LIST_ELEMENT: u64 = 32;
    pub const COMPOUND: u64 = 48;
    /// Charged per compound entry, plus twice the key's UTF-16 length.
    pub const COMPOUND_ENTRY: u64 = 28;
    /// Charged again when a key repeats within one compound.
    pub const DUPLICATE_KEY: u64 = 36;
}

/// Accumulates footprint charges and fails once they exceed a maximum.
///
/// A total exactly equal to the maximum is accepted. Once exceeded the limiter
/// stays exceeded: any further charge, even zero, fails again.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::SizeLimiter;
///
/// let mut limiter = SizeLimiter::new(10);
/// assert!(limiter.add_charge(10).is_ok());
/// assert!(limiter.add_charge(1).is_err());
/// assert!(limiter.add_charge(0).is_err());
///
/// let mut unlimited = SizeLimiter::unlimited();
/// assert!(unlimited.add_charge(u64::MAX).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeLimiter {
    max: Option<u64>,
    charged: u64,
}

impl SizeLimiter {
    /// Creates a limiter that rejects totals above `max` bytes.
    #[must_use]
    pub fn new(max: u64) -> Self {
        SizeLimiter {
            max: Some(max),
            charged: 0,
        }
    }

    /// Creates a limiter that never rejects.
    #[must_use]
    pub fn unlimited() -> Self {
        SizeLimiter {
            max: None,
            charged: 0,
        }
    }

    /// Adds `bytes` to the running total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeLimitExceeded`] if the total is now above the maximum.
    #[inline]
    pub fn add_charge(&mut self, bytes: u64) -> Result<()> {
        self.charged = self.charged.saturating_add(bytes);
        match self.max {
            Some(max) if self.charged > max => Err(Error::SizeLimitExceeded { max }),
            _ => Ok(()),
        }
    }

    /// Returns the total charged so far.
    #[must_use]
    pub fn charged(&self) -> u64 {
        self.charged
    }

    /// Returns the maximum, or `None` if unlimited.
    #[must_use]
    pub fn max(&self) -> Option<u64> {
        self.max
    }
}

impl Default for SizeLimiter {
    fn default() -> Self {
        SizeLimiter::unlimited()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_total_is_accepted() {
        let mut limiter = SizeLimiter::new(footprint::COMPOUND);
        limiter.add_charge(footprint::COMPOUND).unwrap();
        assert_eq!(limiter.charged(), 48);
    }

    #[test]
    fn test_stays_exceeded() {
        let mut limiter = SizeLimiter::new(5);
        assert_eq!(
            limiter.add_charge(6),
            Err(Error::SizeLimitExceeded { max: 5 })
        );
        assert!(limiter.add_charge(0).is_err());
    }

    #[test]
    fn test_saturates() {
        let mut limiter = SizeLimiter::new(u64::MAX);
        limiter.add_charge(u64::MAX).unwrap();
        limiter.add_charge(u64::MAX).unwrap();
        assert_eq!(limiter.charged(), u64::MAX);
        assert_eq!(limiter.max(), Some(u64::MAX));
    }
}
