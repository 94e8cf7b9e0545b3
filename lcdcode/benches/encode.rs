use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lcdcode::pipeline::{self, MemorySink};

fn bench_convert_row(c: &mut Criterion) {
    c.bench_function("convert_row_1337", |b| {
        b.iter(|| pipeline::convert_row(black_box("1337"), 1).unwrap())
    });
}

fn bench_run(c: &mut Criterion) {
    let rows: Vec<String> = (0..1000).map(|n| format!("{n:04}")).collect();
    c.bench_function("run_1000_rows", |b| {
        b.iter(|| {
            let mut source = rows.iter().cloned().map(Ok::<_, std::io::Error>);
            let mut sink = MemorySink::default();
            pipeline::run(&mut source, &mut sink).unwrap()
        })
    });
}

criterion_group!(benches, bench_convert_row, bench_run);
criterion_main!(benches);
