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

//! End-to-end pipeline: report file in, charts out.

use crate::aggregate::{collect_results, SeriesSet};
use crate::cache::cache_boundaries;
use crate::chart::{speedup_chart, throughput_chart, ChartSpec};
use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::output::{present, Presentation, Viewer};
use crate::report::{load_report, Report};
use std::path::Path;

/// Everything derived from a report before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCharts {
    /// Measurements grouped by logical name.
    pub series: SeriesSet,
    /// Data and unified cache sizes.
    pub cache_boundaries: Vec<u64>,
    /// Throughput-versus-size chart.
    pub throughput: ChartSpec,
    /// Speedup-versus-size chart.
    pub speedup: ChartSpec,
}

impl PreparedCharts {
    /// Both charts, throughput first.
    pub fn charts(&self) -> [ChartSpec; 2] {
        [self.throughput.clone(), self.speedup.clone()]
    }
}

/// Aggregates a loaded report and builds both charts.
///
/// This is the pure part of the pipeline and performs no I/O.
pub fn prepare(report: &Report, config: &PlotConfig) -> Result<PreparedCharts> {
    let series = collect_results(&report.benchmarks)?;
    if series.is_empty() {
        return Err(PlotError::EmptyReport);
    }

    let boundaries = cache_boundaries(&report.context.caches);
    let placeholder = config.label_placeholder.as_deref();

    let throughput = throughput_chart(
        &series,
        &boundaries,
        &report.context,
        placeholder,
        config.title_style,
    )?;
    let speedup = speedup_chart(
        &series,
        &boundaries,
        &report.context,
        placeholder,
        config.title_style,
        &config.baseline,
    )?;

    Ok(PreparedCharts {
        series,
        cache_boundaries: boundaries,
        throughput,
        speedup,
    })
}

/// Loads the report at `path`, builds both charts and shows or saves them.
pub fn run(
    path: impl AsRef<Path>,
    config: &PlotConfig,
    viewer: &dyn Viewer,
) -> Result<Presentation> {
    let report = load_report(path.as_ref(), &config.load)?;
    let prepared = prepare(&report, config)?;

    tracing::info!(
        series = prepared.series.len(),
        caches = prepared.cache_boundaries.len(),
        "prepared charts"
    );

    present(&prepared.charts(), &config.style, &config.output, viewer)
}
