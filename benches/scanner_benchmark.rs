use std::{sync::LazyLock, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strscan::{ClassSet, Scanner, ScannerBuilder};

/// A header block repeated to get a buffer of a few hundred kilobytes.
static SCANNER_INPUT: LazyLock<String> = LazyLock::new(|| {
    "Host: example.org\r\nContent-Type: text/plain; charset=utf-8\r\nX-Request-Id: 4711\r\n"
        .repeat(4096)
});

/// Tokenizes the input into words and separators the way a simple parser would.
fn tokenize(scanner: &mut Scanner) -> usize {
    let mut tokens = 0;
    while !scanner.at_end() {
        if scanner.scan_charclass("h").is_some() || scanner.scan_charclass("s").is_some() {
            tokens += 1;
        } else {
            scanner.forward(1);
        }
    }
    tokens
}

fn class_scan_benchmark(c: &mut Criterion) {
    c.bench_function("class_scan_benchmark", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new_borrowed(SCANNER_INPUT.as_str());
            black_box(tokenize(&mut scanner));
        });
    });
}

fn uncached_class_scan_benchmark(c: &mut Criterion) {
    c.bench_function("uncached_class_scan_benchmark", |b| {
        b.iter(|| {
            let mut scanner = ScannerBuilder::new()
                .class_cache(false)
                .build_borrowed(SCANNER_INPUT.as_str());
            black_box(tokenize(&mut scanner));
        });
    });
}

fn prebuilt_class_set_benchmark(c: &mut Criterion) {
    let word = ClassSet::new("h");
    let space = ClassSet::new("s");
    c.bench_function("prebuilt_class_set_benchmark", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new_borrowed(SCANNER_INPUT.as_str());
            let mut tokens = 0;
            while !scanner.at_end() {
                if scanner.scan_class_set(&word).is_some()
                    || scanner.scan_class_set(&space).is_some()
                {
                    tokens += 1;
                } else {
                    scanner.forward(1);
                }
            }
            black_box(tokens);
        });
    });
}

fn upto_literal_benchmark(c: &mut Criterion) {
    c.bench_function("upto_literal_benchmark", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new_borrowed(SCANNER_INPUT.as_str());
            while let Some(line) = scanner.scan_upto_literal("\r\n") {
                black_box(line);
                scanner.forward(2);
            }
        });
    });
}

fn upto_literal_ci_benchmark(c: &mut Criterion) {
    c.bench_function("upto_literal_ci_benchmark", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new_borrowed(SCANNER_INPUT.as_str());
            while let Some(m) = scanner.scan_upto_literal_ci("x-request-id") {
                black_box(m);
                scanner.forward(1);
            }
        });
    });
}

criterion_group! {
    name = benchesscan;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = class_scan_benchmark, uncached_class_scan_benchmark, prebuilt_class_set_benchmark
}

criterion_group! {
    name = benchesupto;
    config = Criterion::default();
    targets = upto_literal_benchmark, upto_literal_ci_benchmark
}

criterion_main!(benchesscan, benchesupto);
