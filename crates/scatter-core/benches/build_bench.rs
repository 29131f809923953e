// File: crates/scatter-core/benches/build_bench.rs
// Summary: Criterion benchmark for chart building and SVG serialization at several dataset sizes.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{ChartBuilder, ChartOptions, FinishTime, Record, Theme};

fn synthetic(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            year: 1990 + (i % 30) as i32,
            finish_time: FinishTime::from_min_sec(36 + (i % 4) as u32, (i * 7 % 60) as u32).unwrap(),
            name: format!("Rider {i}"),
            nationality: "FRA".to_string(),
            doping: if i % 3 == 0 { "Alleged".to_string() } else { String::new() },
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_and_serialize");
    for &n in &[35usize, 1_000usize, 10_000usize] {
        let records = synthetic(n);
        group.bench_function(format!("records_{n}"), |b| {
            let builder = ChartBuilder::new(ChartOptions::default());
            b.iter(|| -> Result<()> {
                let chart = builder.build(&records)?;
                let svg = chart.to_scene(&Theme::light()).to_svg();
                black_box(svg);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
