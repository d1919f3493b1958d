use nbt_snbt::{
    compound, from_reader_named, from_reader_with_options, from_slice, from_snbt, list, to_snbt,
    to_vec, to_writer, to_writer_named, Compound, DecodeOptions, Error, ErrorCategory, List, Tag,
    TagKind,
};

fn player() -> Compound {
    compound! {
        "name" => "Steve",
        "Health" => 20.0f32,
        "XpLevel" => 30,
        "OnGround" => true,
        "Pos" => list![12.5f64, 64.0f64, -200.25f64],
        "Inventory" => list![
            compound! { "id" => "minecraft:diamond_sword", "Count" => 1i8, "Slot" => 0i8 },
            compound! { "id" => "minecraft:torch", "Count" => 64i8, "Slot" => 1i8 },
        ],
        "UUID" => Tag::int_array(&[-1, 2, -3, 4]),
        "Heightmap" => Tag::long_array(&[i64::MIN, 0, i64::MAX]),
        "Light" => Tag::byte_array(&[0, 15, -1]),
        "Seed" => 1234567890123i64,
        "Air" => 300i16,
        "Empty" => List::new(),
        "Nested" => compound! { "deeper" => compound! { "deepest" => "yes" } },
    }
}

// Builds a root holding `levels` single-entry compounds nested one inside the other.
fn nested(levels: usize) -> Compound {
    let mut inner = Compound::new();
    for _ in 0..levels {
        let mut outer = Compound::new();
        outer.insert("a", inner);
        inner = outer;
    }
    inner
}

#[test]
fn test_binary_round_trip() {
    let root = player();
    let bytes = to_vec(&root).unwrap();
    let back = from_slice(&bytes).unwrap();
    assert_eq!(back, root);

    let keys: Vec<_> = back.keys().map(String::as_str).collect();
    assert_eq!(keys[..3], ["name", "Health", "XpLevel"]);
}

#[test]
fn test_binary_byte_layout() {
    let mut bytes = Vec::new();
    to_writer_named(&mut bytes, "hello world", &compound! { "name" => "Bananrama" }).unwrap();

    let mut expected = vec![10, 0, 11];
    expected.extend_from_slice(b"hello world");
    expected.extend_from_slice(&[8, 0, 4]);
    expected.extend_from_slice(b"name");
    expected.extend_from_slice(&[0, 9]);
    expected.extend_from_slice(b"Bananrama");
    expected.push(0);
    assert_eq!(bytes, expected);

    let (name, root) = from_reader_named(&bytes[..], &DecodeOptions::new()).unwrap();
    assert_eq!(name, "hello world");
    assert_eq!(root.get("name"), Some(&Tag::String("Bananrama".to_string())));
}

#[test]
fn test_empty_list_kind_is_normalized() {
    let root = compound! { "xs" => List::with_kind(TagKind::String) };
    let bytes = to_vec(&root).unwrap();
    assert_eq!(bytes, [10, 0, 0, 9, 0, 2, b'x', b's', 0, 0, 0, 0, 0, 0]);

    let back = from_slice(&bytes).unwrap();
    let list = back.get("xs").and_then(Tag::as_list).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.element_kind(), TagKind::End);
}

#[test]
fn test_empty_list_with_unknown_id_decodes() {
    let bytes = [10, 0, 0, 9, 0, 1, b'l', 99, 0, 0, 0, 0, 0];
    let root = from_slice(&bytes).unwrap();
    assert_eq!(
        root.get("l").and_then(Tag::as_list).map(List::element_kind),
        Some(TagKind::End)
    );
}

#[test]
fn test_non_empty_end_list_is_rejected() {
    let bytes = [10, 0, 0, 9, 0, 1, b'l', 0, 0, 0, 0, 2, 0];
    let err = from_slice(&bytes).unwrap_err();
    assert!(matches!(err, Error::InvalidListKind { id: 0, len: 2 }));
}

#[test]
fn test_text_round_trip() {
    let root = player();
    let text = to_snbt(&root).unwrap();
    assert_eq!(from_snbt(&text).unwrap(), root);
}

#[test]
fn test_text_and_binary_agree() {
    let text = r#"{name:"Steve",Health:20.0f,Pos:[1.0d,2.0d,3.0d],UUID:[I;1,2,3,4]}"#;
    let root = from_snbt(text).unwrap();
    let back = from_slice(&to_vec(&root).unwrap()).unwrap();
    assert_eq!(to_snbt(&back).unwrap(), text);
}

#[test]
fn test_depth_limit_binary() {
    assert!(from_slice(&to_vec(&nested(512)).unwrap()).is_ok());

    // The encoder has no depth limit, so a too-deep tree can still be written.
    let bytes = to_vec(&nested(513)).unwrap();
    let err = from_slice(&bytes).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { depth: 513, max: 512 }));
}

#[test]
fn test_depth_limit_text() {
    let text = |levels: usize| format!("{}{{}}{}", "{a:".repeat(levels), "}".repeat(levels));
    assert_eq!(text(1), "{a:{}}");
    assert_eq!(from_snbt(&text(512)).unwrap(), nested(512));

    let err = from_snbt(&text(513)).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { depth: 513, .. }));
}

#[test]
fn test_custom_depth_limit() {
    let bytes = to_vec(&nested(4)).unwrap();
    let options = DecodeOptions::new().with_max_depth(3);
    assert!(from_reader_with_options(&bytes[..], &options).is_err());
    let options = DecodeOptions::new().with_max_depth(4);
    assert!(from_reader_with_options(&bytes[..], &options).is_ok());
}

#[test]
fn test_size_limit_exact_total_is_accepted() {
    // compound 48 + entry 28 + key 2 + byte 9
    let bytes = to_vec(&compound! { "a" => 1i8 }).unwrap();

    let exact = DecodeOptions::new().with_size_limit(87);
    assert!(from_reader_with_options(&bytes[..], &exact).is_ok());

    let short = DecodeOptions::new().with_size_limit(86);
    let err = from_reader_with_options(&bytes[..], &short).unwrap_err();
    assert!(matches!(err, Error::SizeLimitExceeded { max: 86 }));
}

#[test]
fn test_oversized_declaration_fails_before_allocation() {
    let bytes = [10, 0, 0, 12, 0, 1, b'a', 0x7F, 0xFF, 0xFF, 0xFF];
    let options = DecodeOptions::new().with_size_limit(1024 * 1024);
    let err = from_reader_with_options(&bytes[..], &options).unwrap_err();
    assert!(matches!(err, Error::SizeLimitExceeded { .. }));
}

#[test]
fn test_huge_declared_length_without_limit_is_eof() {
    let bytes = [10, 0, 0, 7, 0, 1, b'a', 0x7F, 0xFF, 0xFF, 0xFF, 1, 2, 3];
    let err = from_slice(&bytes).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }));
    assert_eq!(err.category(), ErrorCategory::Malformed);
}

#[test]
fn test_malformed_headers() {
    assert!(matches!(
        from_slice(&[8, 0, 0, 0, 0]).unwrap_err(),
        Error::RootNotCompound {
            found: TagKind::String
        }
    ));
    assert!(matches!(
        from_slice(&[13, 0, 0]).unwrap_err(),
        Error::UnknownTagKind { id: 13, .. }
    ));
    assert!(matches!(
        from_slice(&[10, 0, 0, 42, 0, 0]).unwrap_err(),
        Error::UnknownTagKind { id: 42, .. }
    ));
    assert!(matches!(
        from_slice(&[10, 0, 0, 11, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap_err(),
        Error::NegativeLength { len: -1, .. }
    ));
    assert_eq!(
        from_slice(&[10, 0, 0, 12, 0, 1, b'a', 0xFF, 0xFF, 0xFF, 0xFF]).unwrap_err(),
        Error::NegativeLength {
            field: "long array",
            len: -1
        }
    );
    assert_eq!(
        from_slice(&[10, 0, 0, 9, 0, 1, b'l', 1, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap_err(),
        Error::NegativeLength {
            field: "list",
            len: -1
        }
    );
    assert!(matches!(
        from_slice(&[]).unwrap_err(),
        Error::UnexpectedEof { .. }
    ));
    assert!(matches!(
        from_slice(&[10, 0, 0, 3, 0, 1, b'a', 0, 0]).unwrap_err(),
        Error::UnexpectedEof { .. }
    ));
}

#[test]
fn test_modified_utf8_strings() {
    let root = compound! { "s" => "nul\0 and \u{1F600}" };
    let bytes = to_vec(&root).unwrap();
    assert!(bytes.windows(2).any(|w| w == [0xC0, 0x80]));
    assert_eq!(from_slice(&bytes).unwrap(), root);
}

#[test]
fn test_encode_rejects_heterogeneous_list() {
    let mut list = List::with_kind(TagKind::Int);
    list.push(1);
    list.push("two");
    let mut bytes = Vec::new();
    let err = to_writer(&mut bytes, &compound! { "l" => list }).unwrap_err();
    assert!(matches!(err, Error::InvalidTag { .. }));
    assert!(bytes.is_empty());
}

#[test]
fn test_encode_rejects_long_string() {
    let root = compound! { "s" => "x".repeat(65536) };
    let err = to_vec(&root).unwrap_err();
    assert!(matches!(err, Error::LengthExceedsLimit { .. }));

    let root = compound! { "s" => "x".repeat(65535) };
    assert_eq!(from_slice(&to_vec(&root).unwrap()).unwrap(), root);
}

#[test]
fn test_duplicate_keys_in_binary_keep_last_value() {
    let bytes = [
        10, 0, 0, //
        1, 0, 1, b'k', 1, //
        1, 0, 1, b'j', 2, //
        1, 0, 1, b'k', 3, //
        0,
    ];
    let root = from_slice(&bytes).unwrap();
    let entries: Vec<_> = root.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    assert_eq!(entries, [("k", Tag::Byte(3)), ("j", Tag::Byte(2))]);
}

#[test]
fn test_serde_json_interop() {
    let root = compound! { "name" => "Steve", "xs" => list![1, 2], "flag" => true };
    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(json, r#"{"name":"Steve","xs":[1,2],"flag":1}"#);

    // JSON has no byte type, so the flag comes back as an int.
    let back: Compound = serde_json::from_str(&json).unwrap();
    assert_eq!(back.get("flag"), Some(&Tag::Int(1)));
    assert_eq!(back.get("xs"), root.get("xs"));
}
