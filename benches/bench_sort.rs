use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion, Throughput};

use criterion::measurement::WallTime;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bin_radix_sort::harness::random_values;
use bin_radix_sort::{sort_iterative, sort_recursive, RadixKey};

#[inline(never)]
pub fn standard_sort_slice<T: Ord + Copy>(slice: &[T]) -> Vec<T> {
    let mut data = slice.to_vec();
    data.sort_unstable();
    data
}

#[inline(never)]
pub fn recursive_sort_slice<T: RadixKey>(slice: &[T]) -> Vec<T> {
    let mut data = slice.to_vec();
    sort_recursive(&mut data);
    data
}

#[inline(never)]
pub fn iterative_sort_slice<T: RadixKey>(slice: &[T]) -> Vec<T> {
    let mut data = slice.to_vec();
    sort_iterative(&mut data);
    data
}

const BATCH_SIZE: usize = 1_000_000;

fn bench_width<T: RadixKey + Ord>(mut group: BenchmarkGroup<'_, WallTime>, values: &[T]) {
    group.throughput(Throughput::Bytes((values.len() * size_of::<T>()) as u64));

    group
        .bench_function("standard", |b| b.iter(|| standard_sort_slice(values)))
        .bench_function("radix_recursive", |b| b.iter(|| recursive_sort_slice(values)))
        .bench_function("radix_iterative", |b| b.iter(|| iterative_sort_slice(values)));

    group.finish();
}

pub fn bench_sort(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let u8s = random_values::<u8, _>(&mut rng, BATCH_SIZE);
    let u16s = random_values::<u16, _>(&mut rng, BATCH_SIZE);
    let u32s = random_values::<u32, _>(&mut rng, BATCH_SIZE);
    let u64s = random_values::<u64, _>(&mut rng, BATCH_SIZE);

    bench_width(c.benchmark_group("u8"), &u8s);
    bench_width(c.benchmark_group("u16"), &u16s);
    bench_width(c.benchmark_group("u32"), &u32s);
    bench_width(c.benchmark_group("u64"), &u64s);
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
