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

//! Benchmark report plotting.
//!
//! Reads a Google Benchmark JSON report and draws two charts against the
//! processed size: throughput in GiB/s, and speedup relative to a baseline
//! implementation. Cache sizes from the report context are drawn as vertical
//! reference lines so that throughput drops can be matched to the cache
//! hierarchy.
//!
//! ## Pipeline
//!
//! - [`report`]: load and deserialize the report
//! - [`parser`]: `<NAME>/SIZE` names and timings to [`parser::BenchmarkRecord`]s
//! - [`aggregate`]: group records by logical name
//! - [`cache`]: extract data/unified cache boundaries
//! - [`chart`]: build the throughput and speedup chart descriptions
//! - [`render`]: draw descriptions to SVG and PNG
//! - [`output`]: show the charts, or save them when no display is available
//!
//! ## Example
//!
//! ```no_run
//! use benchplot_core::{run, PlotConfig, SystemViewer};
//!
//! # fn main() -> benchplot_core::Result<()> {
//! run("dot.json", &PlotConfig::default(), &SystemViewer::new())?;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod cache;
pub mod chart;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod units;

pub use aggregate::{collect_results, SeriesGroup, SeriesSet};
pub use cache::cache_boundaries;
pub use chart::{ChartKind, ChartSpec, Curve};
pub use config::{BaselineSelector, ChartStyle, OutputMode, OutputOptions, PlotConfig, TitleStyle};
pub use error::{PlotError, Result};
pub use output::{present, Presentation, SystemViewer, Viewer};
pub use parser::{process_benchmark, BenchmarkRecord};
pub use pipeline::{prepare, run, PreparedCharts};
pub use report::{load_report, parse_report, LoadOptions, Report};
pub use units::TimeUnit;
