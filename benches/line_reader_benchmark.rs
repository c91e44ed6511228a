//! Performance benchmarks for NDJSON line splitting
//!
//! Measures throughput of the line reader and event parser for different
//! chunk sizes.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use coursegen::stream::{parse_event_line, LineReader, TrailingLinePolicy};

/// Generate an NDJSON body with `events` progress lines and one result line
fn generate_body(events: usize) -> Vec<u8> {
    let mut body = String::new();
    for i in 0..events {
        body.push_str(&format!(
            "{{\"type\":\"progress\",\"text\":\"Writing lesson {} of the course – ü\"}}\n",
            i + 1
        ));
    }
    body.push_str("{\"type\":\"result\",\"text\":\"<html>done</html>\"}\n");
    body.into_bytes()
}

/// Benchmark splitting a body delivered in fixed-size chunks
fn bench_line_reader_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_reader_chunks");
    let body = generate_body(1_000);
    group.throughput(Throughput::Bytes(body.len() as u64));

    for chunk_size in [7, 64, 1024, 16 * 1024].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut reader = LineReader::new(TrailingLinePolicy::Drop);
                    let mut count = 0;
                    for chunk in body.chunks(chunk_size) {
                        count += reader.push(black_box(chunk)).len();
                    }
                    count += reader.finish().into_iter().count();
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark parsing every line of a body
fn bench_parse_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_events");
    let body = String::from_utf8(generate_body(1_000)).unwrap_or_default();
    let lines: Vec<&str> = body.lines().collect();
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("parse_event_line", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(parse_event_line(black_box(line)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_line_reader_chunks, bench_parse_events);
criterion_main!(benches);
