//! Criterion benchmarks for rust_field_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_field_logger::prelude::*;
use serde_json::json;

/// Appender that discards output, so only record construction is measured
struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, _stream: OutputStream, line: &str) -> Result<()> {
        black_box(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Entry Chaining Benchmarks
// ============================================================================

fn bench_entry_chaining(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_chaining");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_appender(NullAppender);
    let base = logger.with_field("service", "api").with_field("version", "1.2.3");

    group.bench_function("with_field", |b| {
        b.iter(|| black_box(base.with_field(black_box("request_id"), black_box("abc-123"))));
    });

    group.bench_function("with_fields", |b| {
        b.iter(|| {
            black_box(base.with_fields([("user_id", 42), ("attempt", 3), ("status", 200)]))
        });
    });

    group.finish();
}

// ============================================================================
// Finalize Benchmarks
// ============================================================================

fn bench_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("finalize");
    let logger = Logger::with_appender(NullAppender);

    for depth in [0usize, 1, 5, 20] {
        let entry = (0..depth).fold(logger.new_entry(), |entry, i| {
            entry.with_field(format!("key_{}", i), i as i64)
        });

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("layers", depth), &entry, |b, entry| {
            b.iter(|| black_box(entry.finalize(LogLevel::Info, "message", None)));
        });
    }

    let heavy = logger
        .with_field("payload", json!({"items": [1, 2, 3], "nested": {"ok": true}}))
        .with_field("error", FieldValue::classified(
            HttpClientError::new("Request failed").with_response(500, json!({"x": 1})),
        ));
    group.bench_function("object_and_error_fields", |b| {
        b.iter(|| black_box(heavy.finalize(LogLevel::Error, "failed", Some(Severity::High))));
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::with_appender(NullAppender);
    let entry = logger.with_field("service", "api");

    group.bench_function("info", |b| {
        b.iter(|| entry.info(black_box("Info message")));
    });

    logger.set_debug(false);
    group.bench_function("debug_suppressed", |b| {
        b.iter(|| entry.debug(black_box("Debug message")));
    });

    group.finish();
}

criterion_group!(benches, bench_entry_chaining, bench_finalize, bench_emit);
criterion_main!(benches);
