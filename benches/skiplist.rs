use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
    Throughput,
};
use rand::{
    thread_rng,
    Rng,
};
use stratalist::SkipList;

static LIST_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

const BENCH_MAX_LEVEL: usize = 16;
const BENCH_PROBABILITY: f64 = 0.5;

fn populated_list(size: usize) -> SkipList<u64> {
    let mut rng = thread_rng();
    let mut list = SkipList::with_config(BENCH_MAX_LEVEL, BENCH_PROBABILITY).unwrap();
    for _ in 0..size {
        list.insert(rng.gen());
    }
    list
}

pub fn skiplist_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in LIST_SIZES.iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = thread_rng();
            b.iter_batched(
                || populated_list(size),
                |mut list| list.insert(black_box(rng.gen())),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

pub fn skiplist_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in LIST_SIZES.iter() {
        let list = populated_list(*size);
        let mut rng = thread_rng();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| list.contains(black_box(&rng.gen())));
        });
    }
    group.finish();
}

pub fn skiplist_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for size in LIST_SIZES.iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = thread_rng();
            b.iter_batched(
                || populated_list(size),
                |mut list| list.remove(black_box(&rng.gen())),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    skiplist_insert,
    skiplist_search,
    skiplist_remove
);
criterion_main!(benches);
