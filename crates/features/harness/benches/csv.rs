use casekit_harness::{CsvFormat, CsvRows, csv::parse_line};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::fmt::Write;

fn table(rows: usize) -> String {
    let mut text = String::from("word, length\n");
    for i in 0..rows {
        let _ = writeln!(text, "\"word {i}, quoted\", {i}");
    }
    text
}

fn bench_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_rows");

    for (label, rows) in [("10", 10usize), ("1K", 1_000), ("10K", 10_000)] {
        let text = table(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("file_dialect", label), &text, |b, t| {
            b.iter(|| {
                let parsed = CsvRows::new(t.as_str(), CsvFormat::file().skip_lines(1)).count();
                assert_eq!(parsed, rows);
            });
        });
    }

    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let format = CsvFormat::inline();
    c.bench_function("parse_line_mixed", |b| {
        b.iter(|| parse_line("foo, 1, 'foo, bar', '', , 'it''s'", &format).unwrap());
    });
}

criterion_group!(benches, bench_rows, bench_line);
criterion_main!(benches);
