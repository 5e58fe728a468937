use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use once_cell::sync::Lazy;
use regex::Regex;

use sort_classics_rs::Algorithm;
use sort_test_tools::patterns;

// Quadratic sorts dominate the runtime past a few thousand elements.
const TEST_SIZES: &[usize] = &[16, 256, 4_096];

static FILTER: Lazy<Option<Regex>> = Lazy::new(|| {
    let pattern = env::var("BENCH_REGEX").ok()?;
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(err) => panic!("invalid BENCH_REGEX {pattern:?}: {err}"),
    }
});

fn is_quadratic(algo: &Algorithm) -> bool {
    matches!(
        algo,
        Algorithm::Bubble
            | Algorithm::Selection
            | Algorithm::SelectionDescending
            | Algorithm::SelectionBidirectional
            | Algorithm::Insertion
            | Algorithm::BinaryInsertion
    )
}

fn bench_patterns(c: &mut Criterion) {
    // Pin to one core to reduce noise from migrations.
    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        core_affinity::set_for_current(core);
    }

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 6] = [
        ("random", |len| patterns::random_uniform(len, 0..1_000_000)),
        ("random_d20", |len| patterns::random_uniform(len, 0..20)),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |len| patterns::saw(len, 8)),
    ];

    for (pattern_name, pattern) in pattern_providers {
        let mut group = c.benchmark_group(format!("i64-{pattern_name}"));

        for algo in Algorithm::ALL {
            let name = match algo {
                Algorithm::BucketRange { width } => format!("{}_{width}", algo.name()),
                _ => algo.name().to_string(),
            };

            if let Some(filter) = FILTER.as_ref() {
                if !filter.is_match(&name) {
                    continue;
                }
            }

            for &len in TEST_SIZES {
                if len > 256 && is_quadratic(&algo) {
                    continue;
                }

                let input: Vec<i64> = pattern(len).into_iter().map(i64::from).collect();
                group.bench_with_input(BenchmarkId::new(&name, len), &input, |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |v| black_box(algo.run(v)),
                        BatchSize::SmallInput,
                    )
                });
            }
        }

        group.finish();
    }
}

fn bench_unit_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("f64-unit");

    for &len in TEST_SIZES {
        let input = patterns::random_unit_f64(len);
        group.bench_with_input(BenchmarkId::new("bucket_unit", len), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |v| sort_classics_rs::unstable::bucket::sort_unit(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_patterns, bench_unit_floats);
criterion_main!(benches);
