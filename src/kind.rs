//! Tag kinds and their wire ids.

use std::fmt;

/// The thirteen NBT tag kinds.
///
/// The discriminants are the wire ids written before every named tag and list
/// header. They never change.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::TagKind;
///
/// assert_eq!(TagKind::Compound.id(), 10);
/// assert_eq!(TagKind::from_id(11), Some(TagKind::IntArray));
/// assert_eq!(TagKind::from_name("TAG_Long_Array"), Some(TagKind::LongArray));
/// assert_eq!(TagKind::from_id(13), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagKind {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl TagKind {
    /// All kinds in id order.
    pub const ALL: [TagKind; 13] = [
        TagKind::End,
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::ByteArray,
        TagKind::String,
        TagKind::List,
        TagKind::Compound,
        TagKind::IntArray,
        TagKind::LongArray,
    ];

    /// Returns the wire id.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Creates a kind from its wire id.
    #[must_use]
    pub fn from_id(id: u8) -> Option<TagKind> {
        Self::ALL.get(id as usize).copied()
    }

    /// Returns the canonical name, e.g. `TAG_Byte_Array`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::End => "TAG_End",
            TagKind::Byte => "TAG_Byte",
            TagKind::Short => "TAG_Short",
            TagKind::Int => "TAG_Int",
            TagKind::Long => "TAG_Long",
            TagKind::Float => "TAG_Float",
            TagKind::Double => "TAG_Double",
            TagKind::ByteArray => "TAG_Byte_Array",
            TagKind::String => "TAG_String",
            TagKind::List => "TAG_List",
            TagKind::Compound => "TAG_Compound",
            TagKind::IntArray => "TAG_Int_Array",
            TagKind::LongArray => "TAG_Long_Array",
        }
    }

    /// Looks a kind up by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<TagKind> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Returns the element kind of the three array kinds.
    #[must_use]
    pub const fn array_element(self) -> Option<TagKind> {
        match self {
            TagKind::ByteArray => Some(TagKind::Byte),
            TagKind::IntArray => Some(TagKind::Int),
            TagKind::LongArray => Some(TagKind::Long),
            _ => None,
        }
    }

    /// Returns `true` for the six scalar numeric kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            TagKind::Byte
                | TagKind::Short
                | TagKind::Int
                | TagKind::Long
                | TagKind::Float
                | TagKind::Double
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TagKind {
    type Error = crate::Error;

    fn try_from(id: u8) -> crate::Result<Self> {
        TagKind::from_id(id).ok_or(crate::Error::UnknownTagKind {
            id,
            context: "tag type",
        })
    }
}
