//! Pipeline benchmarks over synthetic provider payloads.
//!
//! Run with: `cargo bench --package stockplot-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stockplot_bench::{daily_payload, intraday_payload};
use stockplot_lib::{
    ChartOutcome, ChartRenderer, ChartRequest, DateWindow, Granularity, IntradayInterval,
    SvgRenderer, build_chart, classify, extract_series,
};

/// Series lengths in points.
const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn request(granularity: Granularity) -> ChartRequest {
    let window = DateWindow::parse("2000-01-01", "2099-12-31").unwrap();
    ChartRequest::new("BENCH", granularity, window, "line").unwrap()
}

fn extract_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in SIZES {
        let payload = daily_payload(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| {
                let container = classify(black_box(payload), Granularity::Daily).unwrap();
                extract_series(container, Granularity::Daily).unwrap()
            });
        });
    }

    group.finish();
}

fn build_chart_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chart");

    for size in SIZES {
        let payload = daily_payload(size);
        let request = request(Granularity::Daily);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("daily", size), &payload, |b, payload| {
            b.iter(|| build_chart(black_box(payload), &request).unwrap());
        });
    }

    // 20 sessions of 5-minute bars.
    let interval = IntradayInterval::Minute5;
    let payload = intraday_payload(20, interval);
    let request = request(Granularity::Intraday(interval));
    group.bench_function("intraday_5min_20d", |b| {
        b.iter(|| build_chart(black_box(&payload), &request).unwrap());
    });

    group.finish();
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let renderer = SvgRenderer::new();

    for size in SIZES {
        let ChartOutcome::Chart(chart) =
            build_chart(&daily_payload(size), &request(Granularity::Daily)).unwrap()
        else {
            unreachable!("synthetic series lies inside the window");
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &chart.payload, |b, chart| {
            b.iter(|| {
                let mut out = Vec::with_capacity(64 * 1024);
                renderer.render(black_box(chart), &mut out).unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    extract_benchmark,
    build_chart_benchmark,
    render_benchmark
);
criterion_main!(benches);
