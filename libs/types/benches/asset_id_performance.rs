//! Performance benchmarks for the asset id codec
//!
//! Vote processing validates every id it reads, so `is_valid_asset_id`
//! (decode + re-encode) is the hot path.

use bcx_types::{asset_id_to_str, encode_asset_id, is_valid_asset_id, AssetId};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_asset_id");
    for symbol in ["BTC", "ZZZZZZ", "ABC09", "ID0000000123"] {
        group.bench_with_input(BenchmarkId::from_parameter(symbol), symbol, |b, s| {
            b.iter(|| encode_asset_id(black_box(s)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let btc = encode_asset_id("BTC");
    let raw = AssetId::from_u32(123);

    c.bench_function("asset_id_to_str_alpha", |b| {
        b.iter(|| asset_id_to_str(black_box(btc)))
    });
    c.bench_function("asset_id_to_str_raw", |b| {
        b.iter(|| asset_id_to_str(black_box(raw)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let ids = [
        encode_asset_id("BTC"),
        encode_asset_id("ABC09"),
        AssetId::from_u32(0x8000_2503),
        AssetId::INVALID,
    ];

    c.bench_function("is_valid_asset_id_mixed", |b| {
        b.iter(|| {
            ids.iter()
                .filter(|id| is_valid_asset_id(black_box(**id)))
                .count()
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_validate);
criterion_main!(benches);
