use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use triplet_sum::{find_zero_triplets, find_zero_triplets_brute_force};

fn input(len: usize) -> Vec<i32> {
    let mut rng = SmallRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("TripletSum");

    for len in [16usize, 128, 512] {
        let nums = input(len);

        group.bench_with_input(BenchmarkId::new("two pointers", len), &nums, |b, nums| {
            b.iter(|| find_zero_triplets(black_box(nums)))
        });

        if len <= 128 {
            group.bench_with_input(BenchmarkId::new("brute force", len), &nums, |b, nums| {
                b.iter(|| find_zero_triplets_brute_force(black_box(nums)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
