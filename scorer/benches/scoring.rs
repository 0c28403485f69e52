use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scorer::{Scorer, ScorerConfig, dl_distance, multi_set_ratio, quick_ratio};

const CANDIDATES: &[&str] = &[
    "supervisor",
    "superintendent",
    "supplementary",
    "HashMap",
    "with_capacity",
    "dl_distance_chars",
    "CompletionItemKind",
    "unreachable_patterns",
];

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    for cword in ["s", "supe", "suprevisor"] {
        group.bench_with_input(BenchmarkId::new("dl_distance", cword), cword, |b, cword| {
            b.iter(|| {
                for candidate in CANDIDATES {
                    black_box(dl_distance(cword, candidate));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("estimators", cword), cword, |b, cword| {
            b.iter(|| {
                for candidate in CANDIDATES {
                    black_box(quick_ratio(cword, candidate, 2));
                    black_box(multi_set_ratio(cword, candidate, 2));
                }
            })
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let scorer = match Scorer::new(ScorerConfig::default()) {
        Ok(scorer) => scorer,
        Err(err) => panic!("default scorer config rejected: {err}"),
    };
    let pool: Vec<String> = (0..2_000)
        .map(|i| format!("{}_{i}", CANDIDATES[i % CANDIDATES.len()]))
        .collect();

    c.bench_function("query_metrics_2000", |b| {
        b.iter(|| {
            let query = scorer.query("supe");
            for candidate in &pool {
                black_box(query.estimate(candidate));
                black_box(query.metrics(candidate));
            }
        })
    });
}

criterion_group!(benches, bench_primitives, bench_query);
criterion_main!(benches);
