//! Coloring validator benchmarks.
//!
//! Measures a full invariant pass over DSatur colorings of dense seeded
//! instances, in both fail-fast and collecting modes.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use irodori_benches::{error::BenchSetupError, instances::seeded_gnp, params::GnpBenchParams};
use irodori_core::{ColoringAlgorithm, ColoringValidator, SaturationDegreeColoring};

const ORDERS: &[usize] = &[200, 1_000];

const PROBABILITY: f64 = 0.3;

fn validate_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("validate");
    group.sample_size(20);

    for &order in ORDERS {
        let params = GnpBenchParams {
            order,
            probability: PROBABILITY,
        };
        let graph = seeded_gnp(params)?;
        let dsatur = SaturationDegreeColoring::new(&graph);
        let coloring = dsatur.coloring();

        group.bench_with_input(
            BenchmarkId::new("check_all", params),
            &(&graph, coloring),
            |b, &(graph, coloring)| {
                b.iter(|| ColoringValidator::new(graph, coloring).check_all().is_ok());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("collect_all", params),
            &(&graph, coloring),
            |b, &(graph, coloring)| {
                b.iter(|| ColoringValidator::new(graph, coloring).collect_all().len());
            },
        );
    }

    group.finish();
    Ok(())
}

fn validate(c: &mut Criterion) {
    if let Err(err) = validate_impl(c) {
        panic!("validation benchmark setup failed: {err}");
    }
}

criterion_group!(benches, validate);
criterion_main!(benches);
