//! Benchmarks for linekv protocol handling

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use linekv::protocol::{encode_response, parse_command};
use linekv::Engine;

fn protocol_benchmarks(c: &mut Criterion) {
    c.bench_function("parse_put", |b| {
        b.iter(|| parse_command(black_box("PUT session42 active")))
    });

    let engine = Engine::new();
    c.bench_function("dispatch_put_get", |b| {
        b.iter(|| {
            let put = parse_command(black_box("PUT k v"));
            engine.execute(put);
            let get = parse_command(black_box("GET k"));
            encode_response(&engine.execute(get))
        })
    });
}

criterion_group!(benches, protocol_benchmarks);
criterion_main!(benches);
