use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sequence_increment::progression::incremented;
use sequence_increment::{
    Alphabet, CustomAlphabetIncrement, FixedAlphabetIncrement, IncrementOptions, Incrementer,
    PermutationSequencer,
};

fn growing() -> IncrementOptions {
    IncrementOptions::new().grow_on_overflow(true)
}

/// Generate a shuffled arithmetic progression
fn generate_progression(size: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..size as i64).map(|i| 7 + 3 * i).collect();
    let mut seed = 12345u64;

    for i in (1..values.len()).rev() {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        values.swap(i, (seed % (i as u64 + 1)) as usize);
    }
    values
}

fn bench_fixed_alphabet(c: &mut Criterion) {
    let calls = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("fixed_alphabet");

    for n in calls.iter() {
        group.bench_with_input(BenchmarkId::new("digits", n), n, |b, &n| {
            b.iter(|| {
                let mut inc = FixedAlphabetIncrement::with_options("0", growing()).unwrap();
                for _ in 0..n {
                    black_box(inc.increment());
                }
                black_box(inc)
            });
        });

        group.bench_with_input(BenchmarkId::new("letters", n), n, |b, &n| {
            b.iter(|| {
                let mut inc = FixedAlphabetIncrement::with_options("A", growing()).unwrap();
                for _ in 0..n {
                    black_box(inc.increment());
                }
                black_box(inc)
            });
        });
    }

    group.finish();
}

fn bench_custom_alphabet(c: &mut Criterion) {
    let calls = [1_000, 10_000, 100_000];
    let alphabet = Alphabet::new(["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix"]).unwrap();
    let mut group = c.benchmark_group("custom_alphabet");

    for n in calls.iter() {
        group.bench_with_input(BenchmarkId::new("roman", n), n, |b, &n| {
            b.iter(|| {
                let mut inc =
                    CustomAlphabetIncrement::from_positions(vec![0], alphabet.clone(), growing())
                        .unwrap();
                for _ in 0..n {
                    black_box(inc.increment());
                }
                black_box(inc)
            });
        });
    }

    group.finish();
}

fn bench_permutation_table(c: &mut Criterion) {
    let sources = ["ABCD", "ABCDEF", "ABCDEFGH"];
    let mut group = c.benchmark_group("permutation_table");

    for source in sources.iter() {
        group.bench_with_input(
            BenchmarkId::new("build", source.len()),
            source,
            |b, source| {
                b.iter(|| black_box(PermutationSequencer::new(black_box(source)).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_progression(c: &mut Criterion) {
    let sizes = [100, 10_000, 1_000_000];
    let mut group = c.benchmark_group("progression");

    for size in sizes.iter() {
        let data = generate_progression(*size);

        group.bench_with_input(BenchmarkId::new("shuffled", size), &data, |b, data| {
            b.iter(|| black_box(incremented(black_box(data))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fixed_alphabet,
    bench_custom_alphabet,
    bench_permutation_table,
    bench_progression
);
criterion_main!(benches);
