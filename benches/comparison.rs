use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exoplanet_engine::{filter_records, ComparisonView, ExoplanetRecord};

fn catalogue(n: usize) -> Vec<ExoplanetRecord> {
    (0..n)
        .map(|i| ExoplanetRecord {
            pl_rade: Some(0.5 + (i % 30) as f64 * 0.5),
            pl_bmasse: Some(1.0 + (i % 50) as f64),
            pl_eqt: Some(150.0 + (i % 40) as f64 * 25.0),
            habitability_score: Some((i % 100) as f64 / 100.0),
            pl_water_probability: Some((i % 7) as f64 / 7.0),
            esi: Some((i % 13) as f64 / 13.0),
            surface_gravity: Some((i % 9) as f64),
            ..ExoplanetRecord::named(format!("Kepler-{} b", i))
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let records = catalogue(5_000);
    c.bench_function("filter_5000_kepler_0.5", |b| {
        b.iter(|| filter_records(black_box(&records), black_box("kepler-1"), black_box(0.5)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut view = ComparisonView::new();
    for record in catalogue(5) {
        view.on_add(record);
    }

    c.bench_function("snapshot_5_selected", |b| b.iter(|| black_box(&view).snapshot()));
    c.bench_function("size_svg_5_selected", |b| b.iter(|| black_box(&view).size_svg()));
}

criterion_group!(benches, bench_filter, bench_snapshot);
criterion_main!(benches);
