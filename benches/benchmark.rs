use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use stair_ways::{app, cli::Args, config::Config};
use std::hint::black_box;

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_count", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["stair_ways", "count", "30", "30"])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_execute(c: &mut Criterion) {
    let args = Args::try_parse_from(["stair_ways", "--format", "csv", "sequence", "500", "4"]).unwrap();
    let config = Config::default();
    c.bench_function("execute_sequence_500x4", |b| {
        b.iter(|| {
            let mut sink = Vec::with_capacity(64 * 1024);
            app::execute(black_box(&args.command), &config, &mut sink).unwrap();
            black_box(sink);
        })
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_execute);
criterion_main!(benches);
