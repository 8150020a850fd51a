use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{PageId, Policy, ReplacementEngine};

/// Deterministic pseudo-random references with some locality.
fn references(len: usize, pages: i64) -> Vec<PageId> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let hot = (i as i64 / 64) % pages;
            if state % 4 == 0 {
                PageId((state % pages as u64) as i64)
            } else {
                PageId((hot + (state % 3) as i64) % pages)
            }
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    let engine = ReplacementEngine::new(8, references(2_000, 32)).unwrap();

    for policy in Policy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            b.iter(|| black_box(engine.run(policy)).result().page_faults)
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
