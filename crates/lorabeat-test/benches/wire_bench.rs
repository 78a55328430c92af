//! Benchmarks for the heartbeat packet codec

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lorabeat_core::HeartbeatRecord;
use lorabeat_wire::{decode_packet, encode_heartbeat};

fn bench_encode(c: &mut Criterion) {
    let record = HeartbeatRecord::new(123_456, "23:59:59".to_string(), "beacon".to_string());

    c.bench_function("heartbeat_encode", |b| {
        b.iter(|| encode_heartbeat(black_box(&record)))
    });
}

fn bench_decode_parsed(c: &mut Criterion) {
    let bytes = encode_heartbeat(&HeartbeatRecord::new(
        123_456,
        "23:59:59".to_string(),
        "beacon".to_string(),
    ));

    c.bench_function("heartbeat_decode_parsed", |b| {
        b.iter(|| decode_packet(black_box(&bytes)))
    });
}

fn bench_decode_legacy(c: &mut Criterion) {
    let bytes = b"a legacy payload without any markers at all";

    c.bench_function("heartbeat_decode_legacy", |b| {
        b.iter(|| decode_packet(black_box(bytes)))
    });
}

criterion_group!(benches, bench_encode, bench_decode_parsed, bench_decode_legacy);
criterion_main!(benches);
