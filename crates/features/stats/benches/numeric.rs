use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geohint_domain::Value;
use geohint_stats::{Distribution, Gradient, parse_numeric, parse_numeric_text};
use std::hint::black_box;

const SAMPLES: [&str; 6] =
    ["42", "3.75", "3-5", "approximately 7", "usually 4 wide, sometimes 6", "no data"];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_numeric_text");

    for text in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, t| {
            b.iter(|| parse_numeric_text(black_box(t)));
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_and_color");
    let gradient = Gradient::default();

    for size in [50usize, 250, 1000] {
        let values: Vec<Value> =
            (0..size).map(|i| Value::from(format!("{} to {}", i, i + 2))).collect();
        let dist = Distribution::from_values(values.iter().filter_map(parse_numeric))
            .expect("ranges parse");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("color_all", size), &values, |b, vals| {
            b.iter(|| {
                for value in vals {
                    black_box(gradient.color(value, Some(&dist)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_rank);
criterion_main!(benches);
