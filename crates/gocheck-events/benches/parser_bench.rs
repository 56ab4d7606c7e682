// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gocheck_events::{LineEventParser, StatusTally, classify_line};

const PREFIX: &str =
    "/tmp/snappy-tests-job/18811/src/github.com/ubuntu-core/snappy/integration-tests/tests";

/// Synthetic run with `tests` tests, each surrounded by some log noise
fn synthetic_run(tests: usize) -> String {
    let mut out = String::new();
    for i in 0..tests {
        out.push_str(&format!("****** Running benchSuite.Test{i}\n"));
        out.push_str("sudo snap install hello-world\n");
        out.push_str("hello-world 1.0.5 installed\n");
        let line = match i % 3 {
            0 => format!("PASS: {PREFIX}/bench_test.go:{i}: benchSuite.Test{i}\t0.005s\n"),
            1 => format!("FAIL: {PREFIX}/bench_test.go:{i}: benchSuite.Test{i}\n"),
            _ => format!("SKIP: {PREFIX}/bench_test.go:{i}: benchSuite.Test{i} (not on this image)\n"),
        };
        out.push_str(&line);
    }
    out
}

fn classify_benchmark(c: &mut Criterion) {
    let pass = format!("PASS: {PREFIX}/apt_test.go:34: testSuite.TestSuccess      0.005s");
    let noise = "E: Could not open lock file /var/lib/apt/lists/lock";

    c.bench_function("classify_pass_line", |b| {
        b.iter(|| classify_line(std::hint::black_box(&pass)))
    });
    c.bench_function("classify_unrecognized_line", |b| {
        b.iter(|| classify_line(std::hint::black_box(noise)))
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let run = synthetic_run(1_000);
    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(run.len() as u64));
    group.bench_function("write_1000_tests", |b| {
        b.iter(|| {
            let mut parser = LineEventParser::new(StatusTally::new());
            parser.write(std::hint::black_box(run.as_bytes()))
        })
    });
    group.finish();
}

criterion_group!(benches, classify_benchmark, parser_benchmark);
criterion_main!(benches);
