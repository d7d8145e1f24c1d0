extern crate criterion;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_static::lazy_static;
use phase_curve_core::prelude::*;
use pprof::criterion::{Output, PProfProfiler};

lazy_static! {
    static ref PHASES: Vec<PhaseAngle> = (0..1000)
        .map(|idx| PhaseAngle::from_degrees(idx as f64 * 0.12).unwrap())
        .collect();
    static ref MODELS: Vec<ModelParameters> = vec![
        ModelParameters::SimpleHG { h: 15.0, g: 0.15 },
        ModelParameters::HG { h: 15.0, g: 0.15 },
        ModelParameters::SmoothedHG { h: 15.0, g: 0.15 },
        ModelParameters::HG1G2 {
            h: 15.0,
            g1: 0.62,
            g2: 0.14
        },
        ModelParameters::HG12 { h: 15.0, g12: 0.3 },
    ];
}

fn single(params: &ModelParameters) {
    for phase in PHASES.iter() {
        let _ = params.magnitude(*phase).unwrap();
    }
}

fn batch(params: &ModelParameters) {
    let _ = params.model().magnitudes(&PHASES).unwrap();
}

fn batch_par(params: &ModelParameters) {
    let _ = params.model().par_magnitudes(&PHASES).unwrap();
}

pub fn evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Phase-Curve");

    for params in MODELS.iter() {
        let name = params.display_name();
        group.bench_with_input(BenchmarkId::new("Single", name), params, |b, p| {
            b.iter(|| single(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("Batch", name), params, |b, p| {
            b.iter(|| batch(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("Parallel", name), params, |b, p| {
            b.iter(|| batch_par(black_box(p)))
        });
    }
}

pub fn basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Basis");
    let phase = PhaseAngle::from_degrees(17.0).unwrap();

    group.bench_function("Spline", |b| b.iter(|| spline_basis(black_box(phase))));
    group.bench_function("Exponential", |b| {
        b.iter(|| exponential_basis(black_box(phase), ExponentialVariant::Standard).unwrap())
    });
    group.bench_function("G12", |b| b.iter(|| g12_to_g1g2(black_box(0.3))));
}

criterion_group!(name=benches;
                 config = Criterion::default().sample_size(50).measurement_time(Duration::from_secs(5)).with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                 targets=evaluation, basis);
criterion_main!(benches);
