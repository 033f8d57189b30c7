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

//! Grouping of parsed measurements by logical benchmark name.

use crate::error::Result;
use crate::parser::{process_benchmark, BenchmarkRecord};
use crate::report::RawBenchmark;
use std::collections::HashMap;

/// All measurements of one logical benchmark, in report order.
///
/// `sizes[i]` and `throughputs[i]` always come from the same report entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    name: String,
    sizes: Vec<u64>,
    throughputs: Vec<f64>,
}

impl SeriesGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sizes: Vec::new(),
            throughputs: Vec::new(),
        }
    }

    /// Appends one measurement.
    pub fn push(&mut self, size_bytes: u64, throughput_gbps: f64) {
        self.sizes.push(size_bytes);
        self.throughputs.push(throughput_gbps);
    }

    /// Logical benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sizes in bytes.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Throughputs in GiB/s.
    pub fn throughputs(&self) -> &[f64] {
        &self.throughputs
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if the group holds no measurements.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterates over `(size, throughput)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.sizes
            .iter()
            .copied()
            .zip(self.throughputs.iter().copied())
    }
}

/// Series groups in first-seen order, with lookup by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    groups: Vec<SeriesGroup>,
    index: HashMap<String, usize>,
}

impl SeriesSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to its group, creating the group on first sight.
    pub fn insert(&mut self, record: BenchmarkRecord) {
        let idx = match self.index.get(&record.name) {
            Some(&idx) => idx,
            None => {
                tracing::debug!(series = %record.name, "new series");
                self.groups.push(SeriesGroup::new(record.name.clone()));
                self.index.insert(record.name, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[idx].push(record.size_bytes, record.throughput_gbps);
    }

    /// Looks up a group by logical name.
    pub fn get(&self, name: &str) -> Option<&SeriesGroup> {
        self.index.get(name).map(|&idx| &self.groups[idx])
    }

    /// Iterates over groups in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, SeriesGroup> {
        self.groups.iter()
    }

    /// Group names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(SeriesGroup::name)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a SeriesGroup;
    type IntoIter = std::slice::Iter<'a, SeriesGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parses every entry and groups the results by logical name.
///
/// Repetition summaries (`run_type == "aggregate"`) are skipped. Repeated
/// sizes inside a group are kept as separate points.
///
/// # Errors
///
/// The first entry that fails to parse aborts the aggregation; no partial
/// result is returned.
pub fn collect_results(benchmarks: &[RawBenchmark]) -> Result<SeriesSet> {
    let mut set = SeriesSet::new();
    let mut skipped = 0usize;

    for raw in benchmarks {
        if raw.is_aggregate() {
            tracing::debug!(name = %raw.name, "skipping aggregate entry");
            skipped += 1;
            continue;
        }
        set.insert(process_benchmark(raw)?);
    }

    tracing::debug!(
        series = set.len(),
        entries = benchmarks.len(),
        skipped,
        "aggregated benchmarks"
    );
    Ok(set)
}
