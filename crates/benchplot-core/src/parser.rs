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

//! Benchmark entry parsing.
//!
//! Turns one raw report entry into a [`BenchmarkRecord`]: the logical name
//! and byte size are read out of the structured benchmark name, and the
//! measured time is converted into a throughput in GiB/s.
//!
//! Names produced by templated benchmarks look like
//! `BM_dot<dot_templated_unrolling<floating, 4 >>/65536`. The name pattern is
//! greedy, so the logical name is everything between the first `<` and the
//! last `>/`.

use crate::error::{PlotError, Result};
use crate::report::RawBenchmark;
use crate::units::{TimeUnit, BYTES_PER_GIB};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(.*)>/(.*)").expect("benchmark name pattern is valid"));

/// A single measurement, reduced to what the charts need.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Logical name (benchmark identifier without its size parameter).
    pub name: String,
    /// Bytes processed per iteration.
    pub size_bytes: u64,
    /// Throughput in GiB/s.
    pub throughput_gbps: f64,
}

/// Splits a structured benchmark name into logical name and size text.
///
/// Returns `None` when the name does not contain `<...>/...`.
pub fn split_name(name: &str) -> Option<(&str, &str)> {
    let caps = NAME_PATTERN.captures(name)?;
    let logical = caps.get(1)?.as_str();
    let size = caps.get(2)?.as_str();
    Some((logical, size))
}

/// Throughput in GiB/s for `size_bytes` processed in `seconds`.
pub fn throughput_gbps(size_bytes: u64, seconds: f64) -> f64 {
    (size_bytes as f64 / BYTES_PER_GIB) / seconds
}

/// Parse one raw benchmark entry.
///
/// # Errors
///
/// - [`PlotError::Format`] if the name does not match `<NAME>/SIZE`
/// - [`PlotError::InvalidSize`] if `SIZE` is not an integer
/// - [`PlotError::UnknownTimeUnit`] if `time_unit` is not `s|ms|us|ns`
/// - [`PlotError::InvalidTime`] if the time is zero, negative or not finite
///
/// # Examples
///
/// ```
/// use benchplot_core::parser::process_benchmark;
/// use benchplot_core::report::RawBenchmark;
///
/// let raw = RawBenchmark {
///     name: "<dot_naive>/1024".to_string(),
///     real_time: 1.0,
///     time_unit: "s".to_string(),
///     run_type: None,
/// };
/// let record = process_benchmark(&raw).unwrap();
/// assert_eq!(record.name, "dot_naive");
/// assert_eq!(record.size_bytes, 1024);
/// ```
pub fn process_benchmark(raw: &RawBenchmark) -> Result<BenchmarkRecord> {
    let (logical, size_text) = split_name(&raw.name).ok_or_else(|| PlotError::Format {
        name: raw.name.clone(),
    })?;

    let size_bytes = size_text
        .trim()
        .parse::<u64>()
        .map_err(|_| PlotError::InvalidSize {
            name: raw.name.clone(),
            size: size_text.to_string(),
        })?;

    let unit: TimeUnit = raw.time_unit.parse()?;
    let seconds = unit.to_seconds(raw.real_time);
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(PlotError::InvalidTime {
            name: raw.name.clone(),
            seconds,
        });
    }

    Ok(BenchmarkRecord {
        name: logical.to_string(),
        size_bytes,
        throughput_gbps: throughput_gbps(size_bytes, seconds),
    })
}
