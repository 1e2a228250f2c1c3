//! Benchmarks for the weather correlation analysis
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use painlog::analysis::{temperature_scatter, WeatherCorrelationAnalyzer};
use painlog::journal::JournalEntry;
use painlog::weather::parse_weather;

const CONDITIONS: &[&str] = &["sunny", "light rain", "overcast", "drizzle", "clear", "fog"];

fn create_test_entries(count: usize) -> Vec<JournalEntry> {
    (0..count)
        .map(|i| {
            let temp = (i % 35) as i32 - 5;
            let humidity = 30 + (i * 7) % 70;
            let condition = CONDITIONS[i % CONDITIONS.len()];
            let pain = ((i * 13) % 11) as f64;

            let entry = JournalEntry::new(pain).timestamp(i as i64 * 86_400_000);
            if i % 5 == 0 {
                entry
            } else {
                entry.weather(format!("{}°C, {}, {}% humidity", temp, condition, humidity))
            }
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("full_description", |b| {
        b.iter(|| parse_weather(black_box("18°C, light rain, 72% humidity")))
    });

    group.bench_function("unparseable", |b| {
        b.iter(|| parse_weather(black_box("invalid-weather-string")))
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = WeatherCorrelationAnalyzer::default();

    for size in [100, 1000, 5000] {
        let entries = create_test_entries(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("report_{}", size), |b| {
            b.iter(|| analyzer.analyze(black_box(&entries)))
        });

        group.bench_function(format!("scatter_{}", size), |b| {
            b.iter(|| temperature_scatter(black_box(&entries)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_analyze);
criterion_main!(benches);
