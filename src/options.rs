//! Configuration options for decoding and SNBT conversion.
//!
//! This module provides two builder-style structs:
//!
//! - [`DecodeOptions`]: size and depth limits for binary input
//! - [`SnbtOptions`]: layout of SNBT output and the nesting limit for SNBT input
//!
//! ## Examples
//!
//! ```rust
//! use nbt_snbt::{DecodeOptions, SnbtOptions};
//!
//! // Refuse documents whose estimated footprint exceeds 2 MiB
//! let options = DecodeOptions::new().with_size_limit(2 * 1024 * 1024);
//! assert_eq!(options.size_limit, Some(2 * 1024 * 1024));
//!
//! // One entry per line, tab-indented
//! let options = SnbtOptions::pretty();
//! assert!(options.pretty);
//! ```

use crate::limits::{SizeLimiter, MAX_DEPTH};
use crate::{Error, Result};

/// Limits applied while decoding binary NBT.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::DecodeOptions;
///
/// let options = DecodeOptions::new();
/// assert_eq!(options.size_limit, None);
/// assert_eq!(options.max_depth, 512);
///
/// let options = DecodeOptions::new().with_size_limit(4096).with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum estimated footprint in bytes, or `None` for no limit.
    pub size_limit: Option<u64>,
    /// Deepest container nesting accepted. The root compound is depth 0.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            size_limit: None,
            max_depth: MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default options: no size limit, depth limit 512.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with no size limit. Same as [`DecodeOptions::new`].
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Sets the maximum estimated footprint in bytes.
    #[must_use]
    pub fn with_size_limit(mut self, bytes: u64) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Sets the deepest accepted container nesting.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Checks that the options are usable.
    ///
    /// # Errors
    ///
    /// A `max_depth` of zero is an invalid argument: no document could pass.
    pub fn validate(&self) -> Result<()> {
        validate_depth(self.max_depth)
    }

    /// Creates the size limiter these options describe.
    #[must_use]
    pub fn limiter(&self) -> SizeLimiter {
        match self.size_limit {
            Some(max) => SizeLimiter::new(max),
            None => SizeLimiter::unlimited(),
        }
    }
}

/// Options for SNBT output and input.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::SnbtOptions;
///
/// let options = SnbtOptions::new();
/// assert!(!options.pretty);
///
/// let options = SnbtOptions::pretty().with_max_depth(64);
/// assert!(options.pretty);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnbtOptions {
    /// Put every container entry on its own tab-indented line.
    pub pretty: bool,
    /// Deepest container nesting accepted by the parser.
    pub max_depth: usize,
}

impl Default for SnbtOptions {
    fn default() -> Self {
        SnbtOptions {
            pretty: false,
            max_depth: MAX_DEPTH,
        }
    }
}

impl SnbtOptions {
    /// Creates default options: compact output, depth limit 512.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output.
    #[must_use]
    pub fn pretty() -> Self {
        SnbtOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the deepest container nesting accepted when parsing.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Checks that the options are usable.
    ///
    /// # Errors
    ///
    /// A `max_depth` of zero is an invalid argument.
    pub fn validate(&self) -> Result<()> {
        validate_depth(self.max_depth)
    }
}

fn validate_depth(depth: usize) -> Result<()> {
    if depth == 0 {
        return Err(Error::invalid_argument("max_depth must be at least 1"));
    }
    Ok(())
}
