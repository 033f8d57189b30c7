// Dweve benchplot - Benchmark throughput and speedup plotting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Aggregation and chart construction benchmarks.
//!
//! Measures report parsing, grouping and speedup computation on synthetic
//! reports shaped like a `RangeMultiplier(2)->Range(1024, 1 << 28)` sweep.

use benchplot_core::report::RawBenchmark;
use benchplot_core::{collect_results, parse_report, prepare, PlotConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn synthetic_benchmarks(kernels: usize) -> Vec<RawBenchmark> {
    let mut benchmarks = Vec::new();
    for k in 0..kernels {
        let name = if k == 0 {
            "kernel_naive".to_string()
        } else {
            format!("kernel_unrolling<floating, {} >", 1 << k)
        };
        for shift in 10..=28 {
            benchmarks.push(RawBenchmark {
                name: format!("BM_kernel<{}>/{}", name, 1u64 << shift),
                real_time: (1u64 << shift) as f64 / (k + 1) as f64,
                time_unit: "ns".to_string(),
                run_type: Some("iteration".to_string()),
            });
        }
    }
    benchmarks
}

fn bench_collect_results(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_results");

    for kernels in [2, 8, 32] {
        let benchmarks = synthetic_benchmarks(kernels);
        group.throughput(Throughput::Elements(benchmarks.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kernels), &benchmarks, |b, input| {
            b.iter(|| collect_results(black_box(input)))
        });
    }

    group.finish();
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");

    for kernels in [2, 8, 32] {
        let json = serde_json::json!({
            "context": {
                "experiment": "dot product",
                "floating_type": "double",
                "memory_type": "heap memory",
                "caches": [
                    {"type": "Data", "level": 1, "size": 32768},
                    {"type": "Unified", "level": 2, "size": 1048576}
                ]
            },
            "benchmarks": synthetic_benchmarks(kernels),
        })
        .to_string();
        let report = parse_report(&json).expect("synthetic report parses");
        let config = PlotConfig::default();

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kernels), &report, |b, report| {
            b.iter(|| prepare(black_box(report), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_collect_results, bench_prepare);
criterion_main!(benches);
