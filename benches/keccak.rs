use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use eth_keccak::{keccak256, Address, BatchHasher};

fn bench_keccak256(c: &mut Criterion) {
    let mut group = c.benchmark_group("keccak256");
    for len in [32usize, 136, 1024, 16 * 1024] {
        let input = vec![0xa5u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| keccak256(black_box(input)))
        });
    }
    group.finish();
}

fn bench_address(c: &mut Criterion) {
    let public_key = [0x42u8; 64];
    c.bench_function("address_from_public_key", |b| {
        b.iter(|| Address::from_raw_public_key(black_box(&public_key)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let hasher = BatchHasher::with_cpu_count().expect("thread pool");
    let inputs: Vec<Vec<u8>> = (0..4096).map(|i| vec![i as u8; 64]).collect();
    c.bench_function("batch_4096x64", |b| b.iter(|| hasher.digest_all(black_box(&inputs))));
}

criterion_group!(benches, bench_keccak256, bench_address, bench_batch);
criterion_main!(benches);
