//! Property-based tests for the codec round-trip guarantees.
//!
//! Trees are generated with homogeneous lists and non-empty keys, so every
//! generated value is valid in both the binary and the text form.

use nbt_snbt::binary::Decoder;
use nbt_snbt::snbt::infer_literal;
use nbt_snbt::{
    from_reader_with_options, from_slice, from_snbt, to_snbt, to_snbt_pretty, to_vec, Compound,
    DecodeOptions, List, Tag,
};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Tag> {
    prop_oneof![
        any::<i8>().prop_map(Tag::Byte),
        any::<i16>().prop_map(Tag::Short),
        any::<i32>().prop_map(Tag::Int),
        any::<i64>().prop_map(Tag::Long),
        any::<f32>().prop_map(Tag::Float),
        any::<f64>().prop_map(Tag::Double),
        "\\PC{0,12}".prop_map(Tag::String),
        prop::collection::vec(any::<i8>(), 0..8).prop_map(Tag::ByteArray),
        prop::collection::vec(any::<i32>(), 0..8).prop_map(Tag::IntArray),
        prop::collection::vec(any::<i64>(), 0..8).prop_map(Tag::LongArray),
    ]
}

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ :\"'\\\\]{1,8}"
}

// Keeps only the elements whose kind matches the first one.
fn homogeneous(tags: Vec<Tag>) -> List {
    let kind = tags.first().map(Tag::kind);
    tags.into_iter()
        .filter(|tag| Some(tag.kind()) == kind)
        .collect::<Vec<_>>()
        .into()
}

fn tag() -> impl Strategy<Value = Tag> {
    scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|v| Tag::List(homogeneous(v))),
            prop::collection::vec((key(), inner), 0..6)
                .prop_map(|entries| Tag::Compound(entries.into_iter().collect())),
        ]
    })
}

fn root() -> impl Strategy<Value = Compound> {
    prop::collection::vec((key(), tag()), 0..8).prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_binary_round_trip(root in root()) {
        let bytes = to_vec(&root).unwrap();
        prop_assert_eq!(from_slice(&bytes).unwrap(), root);
    }

    #[test]
    fn prop_text_round_trip(root in root()) {
        let text = to_snbt(&root).unwrap();
        prop_assert_eq!(from_snbt(&text).unwrap(), root.clone());

        let pretty = to_snbt_pretty(&root).unwrap();
        prop_assert_eq!(from_snbt(&pretty).unwrap(), root);
    }

    #[test]
    fn prop_size_limit_is_inclusive(root in root()) {
        let bytes = to_vec(&root).unwrap();

        let mut decoder = Decoder::new(&bytes[..], &DecodeOptions::new());
        decoder.read_root().unwrap();
        let total = decoder.limiter().charged();

        let exact = DecodeOptions::new().with_size_limit(total);
        prop_assert!(from_reader_with_options(&bytes[..], &exact).is_ok());

        let under = DecodeOptions::new().with_size_limit(total - 1);
        prop_assert!(from_reader_with_options(&bytes[..], &under).is_err());
    }

    #[test]
    fn prop_truncated_input_never_decodes(root in root(), cut in any::<prop::sample::Index>()) {
        let bytes = to_vec(&root).unwrap();
        let cut = cut.index(bytes.len());
        prop_assert!(from_slice(&bytes[..cut]).is_err());
    }

    #[test]
    fn prop_garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = from_slice(&bytes);
    }

    #[test]
    fn prop_garbage_text_never_panics(text in "\\PC{0,32}") {
        let _ = from_snbt(&text);
    }

    #[test]
    fn prop_int_literals(n in any::<i32>()) {
        prop_assert_eq!(infer_literal(&n.to_string()), Tag::Int(n));
    }

    #[test]
    fn prop_long_literals(n in any::<i64>()) {
        prop_assert_eq!(infer_literal(&format!("{}L", n)), Tag::Long(n));
    }

    #[test]
    fn prop_byte_literals(n in any::<i8>()) {
        prop_assert_eq!(infer_literal(&format!("{}b", n)), Tag::Byte(n));
    }
}
