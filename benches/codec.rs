use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nbt_snbt::{
    compound, from_reader_with_options, from_slice, from_snbt, list, to_snbt, to_vec, Compound,
    DecodeOptions, List, Tag,
};

fn player() -> Compound {
    compound! {
        "name" => "Steve",
        "Health" => 20.0f32,
        "XpLevel" => 30,
        "Pos" => list![12.5f64, 64.0f64, -200.25f64],
        "UUID" => Tag::int_array(&[1, 2, 3, 4]),
        "Abilities" => compound! { "flying" => false, "walkSpeed" => 0.1f32 },
    }
}

fn chunk(sections: usize) -> Compound {
    let sections: List = (0..sections)
        .map(|y| {
            Tag::Compound(compound! {
                "Y" => y as i8,
                "BlockStates" => Tag::LongArray((0..256).map(|i| i * y as i64).collect()),
                "Palette" => list![
                    compound! { "Name" => "minecraft:stone" },
                    compound! { "Name" => "minecraft:dirt" },
                    compound! { "Name" => format!("minecraft:ore_{}", y) },
                ],
            })
        })
        .collect();
    compound! {
        "xPos" => 4,
        "zPos" => -7,
        "Status" => "full",
        "Sections" => sections,
    }
}

fn benchmark_binary_simple(c: &mut Criterion) {
    let root = player();
    let bytes = to_vec(&root).unwrap();

    c.bench_function("binary_encode_simple", |b| {
        b.iter(|| to_vec(black_box(&root)))
    });
    c.bench_function("binary_decode_simple", |b| {
        b.iter(|| from_slice(black_box(&bytes)))
    });
}

fn benchmark_snbt_simple(c: &mut Criterion) {
    let root = player();
    let text = to_snbt(&root).unwrap();

    c.bench_function("snbt_write_simple", |b| b.iter(|| to_snbt(black_box(&root))));
    c.bench_function("snbt_parse_simple", |b| {
        b.iter(|| from_snbt(black_box(&text)))
    });
}

fn benchmark_binary_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_chunk");

    for size in [1, 4, 16].iter() {
        let bytes = to_vec(&chunk(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| from_slice(black_box(bytes)))
        });
    }
    group.finish();
}

fn benchmark_snbt_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("snbt_chunk");

    for size in [1, 4, 16].iter() {
        let text = to_snbt(&chunk(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_snbt(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_size_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_limit");
    let bytes = to_vec(&chunk(16)).unwrap();
    let limited = DecodeOptions::new().with_size_limit(2 * 1024 * 1024);

    group.bench_function("unlimited", |b| {
        b.iter(|| from_reader_with_options(black_box(&bytes[..]), &DecodeOptions::new()))
    });
    group.bench_function("limited", |b| {
        b.iter(|| from_reader_with_options(black_box(&bytes[..]), &limited))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_binary_simple,
    benchmark_snbt_simple,
    benchmark_binary_chunk,
    benchmark_snbt_chunk,
    benchmark_size_limit
);
criterion_main!(benches);
