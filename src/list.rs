//! Homogeneous list type with a declared element kind.
//!
//! A [`List`] carries its element kind as separate metadata: an empty list
//! still has a kind, and every element must match it for the list to be
//! valid. The kind is not enforced on mutation; [`List::is_valid`] reports
//! violations and both encoders refuse to write an invalid list.

use crate::{Error, Result, Tag, TagKind};

/// An ordered sequence of tags that all share one declared kind.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::{List, Tag, TagKind};
///
/// let mut list = List::new();
/// assert_eq!(list.element_kind(), TagKind::End);
///
/// list.try_push(Tag::Int(1)).unwrap();
/// assert_eq!(list.element_kind(), TagKind::Int);
/// assert!(list.try_push(Tag::Long(2)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List {
    element_kind: TagKind,
    elements: Vec<Tag>,
}

impl Default for List {
    fn default() -> Self {
        List::new()
    }
}

impl List {
    /// Creates an empty list declared as `TAG_End`.
    #[must_use]
    pub fn new() -> Self {
        List {
            element_kind: TagKind::End,
            elements: Vec::new(),
        }
    }

    /// Creates an empty list with the given declared element kind.
    #[must_use]
    pub fn with_kind(element_kind: TagKind) -> Self {
        List {
            element_kind,
            elements: Vec::new(),
        }
    }

    /// Creates a list from a declared kind and elements without checking them.
    #[must_use]
    pub fn from_parts(element_kind: TagKind, elements: Vec<Tag>) -> Self {
        List {
            element_kind,
            elements,
        }
    }

    /// Returns the declared element kind.
    #[inline]
    #[must_use]
    pub fn element_kind(&self) -> TagKind {
        self.element_kind
    }

    /// Changes the declared element kind.
    pub fn set_element_kind(&mut self, kind: TagKind) {
        self.element_kind = kind;
    }

    /// Appends a tag without checking its kind.
    pub fn push(&mut self, tag: impl Into<Tag>) {
        self.elements.push(tag.into());
    }

    /// Appends a tag, rejecting it if its kind differs from the declared one.
    ///
    /// An empty list declared as `TAG_End` adopts the kind of its first element.
    pub fn try_push(&mut self, tag: impl Into<Tag>) -> Result<()> {
        let tag = tag.into();
        if self.elements.is_empty() && self.element_kind == TagKind::End {
            self.element_kind = tag.kind();
        } else if tag.kind() != self.element_kind {
            return Err(Error::InvalidArgument(format!(
                "cannot add {} to a list of {}",
                tag.kind(),
                self.element_kind
            )));
        }
        self.elements.push(tag);
        Ok(())
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.elements.get(index)
    }

    /// Returns the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.elements.get_mut(index)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.elements.iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Tag> {
        self.elements.iter_mut()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Tag] {
        &self.elements
    }

    /// Returns the backing vector for bulk edits.
    pub fn elements_mut(&mut self) -> &mut Vec<Tag> {
        &mut self.elements
    }

    /// Consumes the list and returns its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<Tag> {
        self.elements
    }

    /// Returns `true` if every element has the declared kind and is itself valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.elements
            .iter()
            .all(|e| e.kind() == self.element_kind && e.is_valid())
    }
}

/// Builds a list whose declared kind is taken from the first element.
impl From<Vec<Tag>> for List {
    fn from(elements: Vec<Tag>) -> Self {
        let element_kind = elements.first().map_or(TagKind::End, Tag::kind);
        List {
            element_kind,
            elements,
        }
    }
}

impl FromIterator<Tag> for List {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        List::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
