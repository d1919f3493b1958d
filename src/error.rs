//! Error types for NBT decoding, encoding and SNBT parsing.
//!
//! Every failure in this crate is reported through the single [`Error`] enum.
//! Variants fall into three categories (see [`Error::category`]):
//!
//! - **Malformed data**: the bytes or text violate a structural rule (unknown
//!   tag id, negative length, depth or size limit exceeded, unterminated quote,
//!   mixed list element types, encoding an invalid tag, ...).
//! - **Invalid argument**: the caller misused the API, e.g. tried to replace the
//!   payload of an End tag.
//! - **I/O**: the underlying reader or writer failed for a reason other than
//!   running out of input.
//!
//! ## Examples
//!
//! ```rust
//! use nbt_snbt::{from_snbt, ErrorCategory};
//!
//! let err = from_snbt("{a:[1,\"x\"]}").unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Malformed);
//! assert_eq!(err.position(), Some(6));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

use crate::TagKind;

/// Number of characters shown before the failing index in syntax errors.
const CONTEXT_WIDTH: usize = 20;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input bytes or text are not well-formed.
    Malformed,
    /// The caller passed an argument that violates an API precondition.
    InvalidArgument,
    /// The underlying stream failed.
    Io,
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// I/O error other than end of input.
    #[error("IO error: {0}")]
    Io(String),

    /// The stream ended before a complete value was read.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    /// A tag type id outside `0..=12`.
    #[error("unknown tag type id {id} in {context}")]
    UnknownTagKind { id: u8, context: &'static str },

    /// The root of a binary document was not a compound.
    #[error("root is not of type TAG_Compound (found {found})")]
    RootNotCompound { found: TagKind },

    /// An array or list declared a negative length.
    #[error("negative {field} length: {len}")]
    NegativeLength { field: &'static str, len: i32 },

    /// A non-empty list declared End or an unknown element type.
    #[error("invalid list element type id {id} for list of length {len}")]
    InvalidListKind { id: u8, len: i32 },

    /// Containers nested deeper than the configured maximum.
    #[error("depth {depth} exceeds max depth {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// The estimated in-memory footprint exceeded the size limiter's maximum.
    #[error("NBT tag is larger than allowed ({max} byte(s))")]
    SizeLimitExceeded { max: u64 },

    /// Bytes that are not valid modified UTF-8.
    #[error("invalid modified UTF-8 in {field}")]
    InvalidModifiedUtf8 { field: &'static str },

    /// A value too large for its wire representation.
    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A tag that fails [`Tag::is_valid`](crate::Tag::is_valid) or cannot be represented on the wire.
    #[error("tag is not valid: {reason}")]
    InvalidTag { reason: String },

    /// SNBT syntax error.
    #[error("{msg} at index {position}: {context}")]
    Syntax {
        position: usize,
        msg: String,
        context: String,
        input: String,
    },

    /// A list or array element whose kind differs from the declared element kind.
    #[error("expected tag of type {expected}, found {found} at index {position}: {context}")]
    TypeMismatch {
        position: usize,
        expected: TagKind,
        found: TagKind,
        context: String,
        input: String,
    },

    /// API misuse.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Custom error raised through serde.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at `position` of `input`.
    ///
    /// The display form shows up to 20 characters of input preceding the
    /// failing index followed by a `<--[HERE]` marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nbt_snbt::Error;
    ///
    /// let err = Error::syntax("{a:1", 4, "Expected '}'");
    /// assert_eq!(err.to_string(), "Expected '}' at index 4: {a:1<--[HERE]");
    /// ```
    pub fn syntax(input: &str, position: usize, msg: &str) -> Self {
        Error::Syntax {
            position,
            msg: msg.to_string(),
            context: context_at(input, position),
            input: input.to_string(),
        }
    }

    /// Creates a type mismatch error for an element at `position` of `input`.
    pub fn type_mismatch(input: &str, position: usize, expected: TagKind, found: TagKind) -> Self {
        Error::TypeMismatch {
            position,
            expected,
            found,
            context: context_at(input, position),
            input: input.to_string(),
        }
    }

    /// Creates an invalid-tag error.
    pub fn invalid_tag(reason: &str) -> Self {
        Error::InvalidTag {
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument(msg: &str) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Maps an I/O error raised while reading `context`.
    pub fn io(err: &io::Error, context: &'static str) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof { context }
        } else {
            Error::Io(err.to_string())
        }
    }

    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidArgument(_) => ErrorCategory::InvalidArgument,
            Error::Io(_) => ErrorCategory::Io,
            _ => ErrorCategory::Malformed,
        }
    }

    /// Returns `true` for malformed-data errors.
    pub fn is_malformed(&self) -> bool {
        self.category() == ErrorCategory::Malformed
    }

    /// Returns the character index of a text error, if this is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax { position, .. } | Error::TypeMismatch { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    /// Returns the full SNBT source of a text error, if this is one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::Syntax { input, .. } | Error::TypeMismatch { input, .. } => Some(input),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(&err, "stream")
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

fn context_at(input: &str, position: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    let end = position.min(chars.len());
    let start = end.saturating_sub(CONTEXT_WIDTH);
    let mut context = String::new();
    if start > 0 {
        context.push_str("...");
    }
    context.extend(&chars[start..end]);
    context.push_str("<--[HERE]");
    context
}

pub type Result<T> = std::result::Result<T, Error>;
