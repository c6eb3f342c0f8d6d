use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use state_weather::models::{FilterThresholds, RawWeatherRow, RegionCatalog};
use state_weather::processors::{aggregate, evaluate, ingest};

// Synthetic station-day rows spread across the catalogued states
fn create_test_rows(stations_per_state: usize, days: usize) -> Vec<RawWeatherRow> {
    let catalog = RegionCatalog::us_states();
    let mut rows = Vec::new();

    for (state_index, code) in catalog.codes().enumerate() {
        for station in 0..stations_per_state {
            for day in 0..days {
                let base = 20.0 + state_index as f64 + (day % 30) as f64 * 0.5;
                rows.push(RawWeatherRow {
                    state: Some(code.to_string()),
                    tavg: Some(format!("{:.1}", base)),
                    tmin: Some(format!("{:.1}", base - 8.0)),
                    tmax: Some(format!("{:.1}", base + 8.0)),
                    awnd: Some(format!("{:.1}", 3.0 + (station % 5) as f64)),
                    snow: Some(if day % 7 == 0 { "12".to_string() } else { String::new() }),
                    prcp: Some(format!("{:.1}", (day % 3) as f64)),
                    station: Some(format!("US{}{:05}", code, station)),
                    date: Some(format!("2023-01-{:02}", day % 28 + 1)),
                });
            }
        }
    }

    rows
}

fn benchmark_ingestion(c: &mut Criterion) {
    let catalog = RegionCatalog::us_states();
    let mut group = c.benchmark_group("ingestion");

    for days in [10, 100].iter() {
        let rows = create_test_rows(5, *days);
        group.bench_with_input(BenchmarkId::new("ingest", rows.len()), &rows, |b, rows| {
            b.iter(|| ingest(black_box(rows.clone()), &catalog))
        });
    }

    group.finish();
}

fn benchmark_aggregation(c: &mut Criterion) {
    let catalog = RegionCatalog::us_states();
    let mut group = c.benchmark_group("aggregation");

    for days in [10, 100].iter() {
        let records = ingest(create_test_rows(5, *days), &catalog);
        group.bench_with_input(
            BenchmarkId::new("aggregate", records.len()),
            &records,
            |b, records| b.iter(|| aggregate(black_box(records))),
        );
    }

    group.finish();
}

fn benchmark_evaluation(c: &mut Criterion) {
    let catalog = RegionCatalog::us_states();
    let aggregates = aggregate(&ingest(create_test_rows(5, 100), &catalog));
    let thresholds = FilterThresholds::defaults_for(&aggregates)
        .with_min_data_points(200)
        .with_min_snow(50.0);

    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(&aggregates), black_box(&thresholds)))
    });
}

criterion_group!(
    benches,
    benchmark_ingestion,
    benchmark_aggregation,
    benchmark_evaluation
);
criterion_main!(benches);
