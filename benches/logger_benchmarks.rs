//! Criterion benchmarks for logf

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logf::core::line_writer::format_line;
use logf::prelude::*;
use std::panic::Location;
use std::sync::Arc;

fn sink_logger(flags: Flags, min: Level) -> Logger {
    Logger::builder()
        .writer(std::io::sink())
        .flags(flags)
        .min_level(min)
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let logger = Logger::new();
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| black_box(sink_logger(Flags::STD, Level::Info)));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(Flags::STD, Level::Trace);

    group.bench_function("printf", |b| {
        b.iter(|| {
            logger.printf(format_args!("request {} took {}ms", black_box(17), black_box(3)));
        });
    });

    group.bench_function("print", |b| {
        b.iter(|| {
            logger.print(&[&black_box("Info message")]);
        });
    });

    group.bench_function("println", |b| {
        b.iter(|| {
            logger.println(&[&black_box("Info"), &black_box(42)]);
        });
    });

    let located = sink_logger(Flags::STD | Flags::MICROSECONDS | Flags::SHORT_FILE, Level::Trace);
    group.bench_function("printf_all_flags", |b| {
        b.iter(|| {
            located.printf(format_args!("request {}", black_box(17)));
        });
    });

    group.finish();
}

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(Flags::STD, Level::Error);

    group.bench_function("debugf", |b| {
        b.iter(|| {
            logger.debugf(format_args!("skipped {}", black_box(1)));
        });
    });

    group.bench_function("output", |b| {
        b.iter(|| {
            let _ = logger.output(Level::Debug, Location::caller(), black_box("skipped"));
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(sink_logger(Flags::STD, Level::Trace));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            logger.printf(format_args!("Concurrent message"));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.bench_function("reconfigure_while_logging", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let writer = {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        logger.warnf(format_args!("busy"));
                    }
                })
            };
            for _ in 0..100 {
                logger.set_flags(black_box(Flags::STD));
                logger.set_min_level(black_box(Level::Trace));
            }
            writer.join().unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Line Formatting Benchmarks
// ============================================================================

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_line");
    group.throughput(Throughput::Elements(1));

    let now = Utc::now();
    let caller = Location::caller();
    let mut buf = String::with_capacity(128);

    group.bench_function("std_flags", |b| {
        b.iter(|| {
            buf.clear();
            format_line(&mut buf, "", black_box(Flags::STD), &now, caller, "Test message");
            black_box(buf.len())
        });
    });

    group.bench_function("long_file_micros", |b| {
        b.iter(|| {
            buf.clear();
            let flags = Flags::STD | Flags::MICROSECONDS | Flags::LONG_FILE;
            format_line(&mut buf, "svc: ", black_box(flags), &now, caller, "Test message");
            black_box(buf.len())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_filtered,
    bench_concurrent_logging,
    bench_format_line,
);
criterion_main!(benches);
