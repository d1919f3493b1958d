/// Builds a [`Compound`](crate::Compound) from `key => value` pairs.
///
/// Values are converted with [`Tag::from`](crate::Tag), so plain Rust numbers,
/// strings, lists and nested compounds all work.
///
/// ```rust
/// use nbt_snbt::{compound, list, Tag};
///
/// let player = compound! {
///     "name" => "Steve",
///     "health" => 20.0f32,
///     "pos" => list![0.5f64, 64.0f64, -3.5f64],
///     "abilities" => compound! { "flying" => false },
/// };
///
/// assert_eq!(player.get("health"), Some(&Tag::Float(20.0)));
/// assert_eq!(player.len(), 4);
/// ```
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Compound::new();
        $(
            map.insert($key, $crate::Tag::from($value));
        )+
        map
    }};
}

/// Builds a [`List`](crate::List) whose declared kind is taken from the first
/// element.
///
/// ```rust
/// use nbt_snbt::{list, TagKind};
///
/// let empty = list![];
/// assert_eq!(empty.element_kind(), TagKind::End);
///
/// let names = list!["a", "b"];
/// assert_eq!(names.element_kind(), TagKind::String);
/// assert!(names.is_valid());
///
/// let mixed = list![1i32, 2i64];
/// assert!(!mixed.is_valid());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };

    ($($elem:expr),+ $(,)?) => {
        $crate::List::from(vec![$($crate::Tag::from($elem)),+])
    };
}
