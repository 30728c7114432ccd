use cryptal_sha512::hash::{Sha512, sha512};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sha512(c: &mut Criterion) {
    c.bench_function("sha512 128 bytes", |b| {
        b.iter(|| sha512(black_box(&[0u8; 128])))
    });
}

pub fn bench_sha512_streaming(c: &mut Criterion) {
    let data = vec![0x5Au8; 1 << 20];

    let mut group = c.benchmark_group("sha512 1 MiB");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("one shot", |b| b.iter(|| sha512(black_box(&data))));

    group.bench_function("4096-byte updates", |b| {
        b.iter(|| {
            let mut state = Sha512::new();
            for chunk in black_box(&data).chunks(4096) {
                let _ = state.update(chunk);
            }
            state.finalize()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sha512, bench_sha512_streaming);
criterion_main!(benches);
