//! Dynamic tag representation.
//!
//! This module provides the [`Tag`] enum, one variant per NBT tag kind. A tag
//! owns its children outright: cloning a tag deep-copies the whole tree.
//!
//! ## Usage Patterns
//!
//! ### Creating Tags
//!
//! ```rust
//! use nbt_snbt::{Tag, TagKind};
//!
//! let byte = Tag::from(true);
//! assert_eq!(byte, Tag::Byte(1));
//!
//! let text = Tag::from("hello");
//! assert_eq!(text.kind(), TagKind::String);
//! ```
//!
//! ### Numeric Coercion
//!
//! Any numeric tag can be read as any numeric width. Integral narrowing keeps
//! the low bits, and floating values are floored before narrowing.
//!
//! ```rust
//! use nbt_snbt::Tag;
//!
//! assert_eq!(Tag::Int(300).as_i8(), Some(44));
//! assert_eq!(Tag::Double(-1.5).as_i32(), Some(-2));
//! assert_eq!(Tag::Byte(-1).as_unsigned(), Some(255));
//! assert_eq!(Tag::from("x").as_i32(), None);
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use nbt_snbt::Tag;
//!
//! let n: i64 = i64::try_from(Tag::Long(7)).unwrap();
//! assert_eq!(n, 7);
//! assert!(i64::try_from(Tag::Int(7)).is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Compound, Error, List, Result, TagKind};

/// A single NBT value of any kind.
///
/// Equality compares floats by bit pattern with all NaNs treated as one value,
/// so `Tag` is `Eq` and `Hash` and can be used as a map key.
#[derive(Debug, Clone, Default)]
pub enum Tag {
    /// Terminator kind. Carries no payload and is only valid as the declared
    /// kind of an empty list.
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

// Floors toward negative infinity and narrows. Out-of-range values wrap the
// same way a saturated cast followed by a decrement would on a 32-bit target.
fn floor_to_i32(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated.wrapping_sub(1)
    } else {
        truncated
    }
}

fn float_bits(value: f32) -> u32 {
    if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn double_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl Tag {
    /// Returns the kind of this tag.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Tag::End => TagKind::End,
            Tag::Byte(_) => TagKind::Byte,
            Tag::Short(_) => TagKind::Short,
            Tag::Int(_) => TagKind::Int,
            Tag::Long(_) => TagKind::Long,
            Tag::Float(_) => TagKind::Float,
            Tag::Double(_) => TagKind::Double,
            Tag::ByteArray(_) => TagKind::ByteArray,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
            Tag::IntArray(_) => TagKind::IntArray,
            Tag::LongArray(_) => TagKind::LongArray,
        }
    }

    /// Returns the wire id of this tag's kind.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.kind().id()
    }

    /// Returns a fully independent copy of this tag.
    #[must_use]
    pub fn copy(&self) -> Tag {
        self.clone()
    }

    /// Returns `true` unless this tag is, or contains, a list holding an
    /// element whose kind differs from the list's declared kind.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Tag::List(list) => list.is_valid(),
            Tag::Compound(map) => map.is_valid(),
            _ => true,
        }
    }

    /// Replaces the payload with `value`, which must have the same kind.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error on an End tag or a kind mismatch.
    pub fn set_value(&mut self, value: impl Into<Tag>) -> Result<()> {
        let value = value.into();
        if matches!(self, Tag::End) {
            return Err(Error::invalid_argument("cannot set data for TAG_End"));
        }
        if value.kind() != self.kind() {
            return Err(Error::InvalidArgument(format!(
                "cannot store {} in {}",
                value.kind(),
                self.kind()
            )));
        }
        *self = value;
        Ok(())
    }

    /// Creates a byte array tag.
    #[must_use]
    pub fn byte_array(values: &[i8]) -> Tag {
        Tag::ByteArray(values.to_vec())
    }

    /// Creates an int array tag.
    #[must_use]
    pub fn int_array(values: &[i32]) -> Tag {
        Tag::IntArray(values.to_vec())
    }

    /// Creates a long array tag.
    #[must_use]
    pub fn long_array(values: &[i64]) -> Tag {
        Tag::LongArray(values.to_vec())
    }

    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Tag::End)
    }

    /// Returns `true` for the six scalar numeric kinds.
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Tag::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Tag::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Tag::Compound(_))
    }

    /// Returns `true` for the three typed array kinds.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Tag::ByteArray(_) | Tag::IntArray(_) | Tag::LongArray(_))
    }

    /// Reads the value as an 8-bit integer.
    #[must_use]
    pub fn as_i8(&self) -> Option<i8> {
        Some(match *self {
            Tag::Byte(v) => v,
            Tag::Short(v) => (v & 0xFF) as i8,
            Tag::Int(v) => (v & 0xFF) as i8,
            Tag::Long(v) => (v & 0xFF) as i8,
            Tag::Float(v) => (floor_to_i32(f64::from(v)) & 0xFF) as i8,
            Tag::Double(v) => (floor_to_i32(v) & 0xFF) as i8,
            _ => return None,
        })
    }

    /// Reads the value as a 16-bit integer.
    #[must_use]
    pub fn as_i16(&self) -> Option<i16> {
        Some(match *self {
            Tag::Byte(v) => i16::from(v),
            Tag::Short(v) => v,
            Tag::Int(v) => (v & 0xFFFF) as i16,
            Tag::Long(v) => (v & 0xFFFF) as i16,
            Tag::Float(v) => (floor_to_i32(f64::from(v)) & 0xFFFF) as i16,
            Tag::Double(v) => (floor_to_i32(v) & 0xFFFF) as i16,
            _ => return None,
        })
    }

    /// Reads the value as a 32-bit integer.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        Some(match *self {
            Tag::Byte(v) => i32::from(v),
            Tag::Short(v) => i32::from(v),
            Tag::Int(v) => v,
            // Full-width mask: narrowing a long keeps the low 32 bits.
            Tag::Long(v) => (v as u64 & u64::MAX) as i32,
            Tag::Float(v) => floor_to_i32(f64::from(v)),
            Tag::Double(v) => floor_to_i32(v),
            _ => return None,
        })
    }

    /// Reads the value as a 64-bit integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        Some(match *self {
            Tag::Byte(v) => i64::from(v),
            Tag::Short(v) => i64::from(v),
            Tag::Int(v) => i64::from(v),
            Tag::Long(v) => v,
            Tag::Float(v) => f64::from(v).floor() as i64,
            Tag::Double(v) => v.floor() as i64,
            _ => return None,
        })
    }

    /// Reads the value as a single-precision float.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        Some(match *self {
            Tag::Byte(v) => f32::from(v),
            Tag::Short(v) => f32::from(v),
            Tag::Int(v) => v as f32,
            Tag::Long(v) => v as f32,
            Tag::Float(v) => v,
            Tag::Double(v) => v as f32,
            _ => return None,
        })
    }

    /// Reads the value as a double-precision float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        Some(match *self {
            Tag::Byte(v) => f64::from(v),
            Tag::Short(v) => f64::from(v),
            Tag::Int(v) => f64::from(v),
            Tag::Long(v) => v as f64,
            Tag::Float(v) => f64::from(v),
            Tag::Double(v) => v,
            _ => return None,
        })
    }

    /// Reads an integral tag zero-extended to 64 bits.
    ///
    /// ```rust
    /// use nbt_snbt::Tag;
    ///
    /// assert_eq!(Tag::Short(-1).as_unsigned(), Some(0xFFFF));
    /// assert_eq!(Tag::Int(-1).as_unsigned(), Some(0xFFFF_FFFF));
    /// assert_eq!(Tag::Float(1.0).as_unsigned(), None);
    /// ```
    #[must_use]
    pub fn as_unsigned(&self) -> Option<u64> {
        Some(match *self {
            Tag::Byte(v) => u64::from(v as u8),
            Tag::Short(v) => u64::from(v as u16),
            Tag::Int(v) => u64::from(v as u32),
            Tag::Long(v) => v as u64,
            _ => return None,
        })
    }

    /// Reads a byte tag holding `0` or `1` as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Tag::Byte(0) => Some(false),
            Tag::Byte(1) => Some(true),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Tag::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Tag::LongArray(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Tag::End, Tag::End) => true,
            (Tag::Byte(a), Tag::Byte(b)) => a == b,
            (Tag::Short(a), Tag::Short(b)) => a == b,
            (Tag::Int(a), Tag::Int(b)) => a == b,
            (Tag::Long(a), Tag::Long(b)) => a == b,
            (Tag::Float(a), Tag::Float(b)) => float_bits(*a) == float_bits(*b),
            (Tag::Double(a), Tag::Double(b)) => double_bits(*a) == double_bits(*b),
            (Tag::ByteArray(a), Tag::ByteArray(b)) => a == b,
            (Tag::String(a), Tag::String(b)) => a == b,
            (Tag::List(a), Tag::List(b)) => a == b,
            (Tag::Compound(a), Tag::Compound(b)) => a == b,
            (Tag::IntArray(a), Tag::IntArray(b)) => a == b,
            (Tag::LongArray(a), Tag::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
        match self {
            Tag::End => {}
            Tag::Byte(v) => v.hash(state),
            Tag::Short(v) => v.hash(state),
            Tag::Int(v) => v.hash(state),
            Tag::Long(v) => v.hash(state),
            Tag::Float(v) => float_bits(*v).hash(state),
            Tag::Double(v) => double_bits(*v).hash(state),
            Tag::ByteArray(v) => v.hash(state),
            Tag::String(v) => v.hash(state),
            Tag::List(v) => v.hash(state),
            Tag::Compound(v) => v.hash(state),
            Tag::IntArray(v) => v.hash(state),
            Tag::LongArray(v) => v.hash(state),
        }
    }
}

/// Formats the tag as compact SNBT.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::snbt::render(self, false))
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;

        match self {
            Tag::End => serializer.serialize_unit(),
            Tag::Byte(v) => serializer.serialize_i8(*v),
            Tag::Short(v) => serializer.serialize_i16(*v),
            Tag::Int(v) => serializer.serialize_i32(*v),
            Tag::Long(v) => serializer.serialize_i64(*v),
            Tag::Float(v) => serializer.serialize_f32(*v),
            Tag::Double(v) => serializer.serialize_f64(*v),
            Tag::String(s) => serializer.serialize_str(s),
            Tag::List(list) => list.serialize(serializer),
            Tag::Compound(map) => map.serialize(serializer),
            Tag::ByteArray(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Tag::IntArray(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Tag::LongArray(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value representable as NBT")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(match i32::try_from(value) {
                    Ok(v) => Tag::Int(v),
                    Err(_) => Tag::Long(value),
                })
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                if let Ok(v) = i32::try_from(value) {
                    Ok(Tag::Int(v))
                } else if let Ok(v) = i64::try_from(value) {
                    Ok(Tag::Long(v))
                } else {
                    Err(E::custom(format!("integer {} does not fit TAG_Long", value)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Tag::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Tag::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Tag::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Tag::End)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Tag::End)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = List::new();
                while let Some(elem) = seq.next_element::<Tag>()? {
                    list.try_push(elem)
                        .map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(Tag::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Compound::new();
                while let Some((key, value)) = map.next_entry::<String, Tag>()? {
                    values.insert(key, value);
                }
                Ok(Tag::Compound(values))
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Tag::deserialize(deserializer)? {
            Tag::Compound(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "expected TAG_Compound, found {}",
                other.kind()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Tag::deserialize(deserializer)? {
            Tag::List(list) => Ok(list),
            other => Err(serde::de::Error::custom(format!(
                "expected TAG_List, found {}",
                other.kind()
            ))),
        }
    }
}

// Exact-kind extraction. Use the `as_*` accessors for coercion.
macro_rules! impl_try_from_tag {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TryFrom<Tag> for $ty {
                type Error = Error;

                fn try_from(value: Tag) -> Result<Self> {
                    match value {
                        Tag::$variant(v) => Ok(v),
                        other => Err(Error::InvalidArgument(format!(
                            "expected {}, found {}",
                            TagKind::$variant,
                            other.kind()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_try_from_tag! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    List => List,
    Compound => Compound,
}

impl From<bool> for Tag {
    fn from(value: bool) -> Self {
        Tag::Byte(i8::from(value))
    }
}

impl From<i8> for Tag {
    fn from(value: i8) -> Self {
        Tag::Byte(value)
    }
}

impl From<i16> for Tag {
    fn from(value: i16) -> Self {
        Tag::Short(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag::Int(value)
    }
}

impl From<i64> for Tag {
    fn from(value: i64) -> Self {
        Tag::Long(value)
    }
}

impl From<f32> for Tag {
    fn from(value: f32) -> Self {
        Tag::Float(value)
    }
}

impl From<f64> for Tag {
    fn from(value: f64) -> Self {
        Tag::Double(value)
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_string())
    }
}

impl From<List> for Tag {
    fn from(value: List) -> Self {
        Tag::List(value)
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Tag::Compound(value)
    }
}

impl From<Vec<i8>> for Tag {
    fn from(value: Vec<i8>) -> Self {
        Tag::ByteArray(value)
    }
}

impl From<Vec<i32>> for Tag {
    fn from(value: Vec<i32>) -> Self {
        Tag::IntArray(value)
    }
}

impl From<Vec<i64>> for Tag {
    fn from(value: Vec<i64>) -> Self {
        Tag::LongArray(value)
    }
}
