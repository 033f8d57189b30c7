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

//! Benchmark report model and loader.
//!
//! The report is the JSON document written by a Google Benchmark binary run
//! with `--benchmark_format=json`, extended with three custom context keys
//! (`experiment`, `floating_type`, `memory_type`). Fields the plotter does not
//! use are ignored during deserialization.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default maximum report size (256 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "BENCHPLOT_MAX_FILE_SIZE";

/// A parsed benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Machine and experiment context.
    #[serde(default)]
    pub context: Context,
    /// Benchmark entries in the order the harness emitted them.
    pub benchmarks: Vec<RawBenchmark>,
}

/// Report context block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Experiment name, used in chart titles.
    #[serde(default)]
    pub experiment: String,
    /// Floating point type the kernels were built for.
    #[serde(default)]
    pub floating_type: String,
    /// Memory placement of the benchmark buffers.
    #[serde(default)]
    pub memory_type: String,
    /// CPU caches of the benchmarking machine.
    #[serde(default)]
    pub caches: Vec<CacheInfo>,
}

/// One CPU cache entry from the report context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    /// Cache kind: `Data`, `Instruction` or `Unified`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Capacity in bytes.
    pub size: u64,
    /// Cache level, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

/// One benchmark entry as written by the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBenchmark {
    /// Structured name, `<LOGICAL_NAME>/SIZE`.
    pub name: String,
    /// Wall-clock time per iteration, in `time_unit`.
    pub real_time: f64,
    /// Unit of `real_time`.
    pub time_unit: String,
    /// `iteration` for measurements, `aggregate` for repetition summaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_type: Option<String>,
}

impl RawBenchmark {
    /// Returns `true` for the mean/median/stddev rows emitted with repetitions.
    pub fn is_aggregate(&self) -> bool {
        self.run_type.as_deref() == Some("aggregate")
    }
}

/// Options controlling how a report file is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LoadOptions {
    /// Default options with the size limit taken from the environment.
    ///
    /// Invalid or missing values of `BENCHPLOT_MAX_FILE_SIZE` leave the
    /// default in place.
    pub fn from_env() -> Self {
        let max_file_size = std::env::var(MAX_FILE_SIZE_ENV)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE);
        Self { max_file_size }
    }
}

/// Parse a report from an in-memory JSON string.
pub fn parse_report(json: &str) -> Result<Report> {
    serde_json::from_str(json).map_err(|e| PlotError::json_error("<memory>", e))
}

/// Read and parse a report file.
///
/// The file size is checked against [`LoadOptions::max_file_size`] before
/// any content is read.
///
/// # Errors
///
/// - [`PlotError::Io`] if the file is missing or unreadable
/// - [`PlotError::FileTooLarge`] if the file exceeds the limit
/// - [`PlotError::Json`] if the content is not a valid report
pub fn load_report(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Report> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| PlotError::io_error(path, e))?;

    if metadata.len() > options.max_file_size {
        return Err(PlotError::FileTooLarge {
            path: PathBuf::from(path),
            actual: metadata.len(),
            max: options.max_file_size,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| PlotError::io_error(path, e))?;
    let report: Report =
        serde_json::from_str(&content).map_err(|e| PlotError::json_error(path, e))?;

    tracing::debug!(
        path = %path.display(),
        benchmarks = report.benchmarks.len(),
        caches = report.context.caches.len(),
        "loaded report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "context": {
            "date": "2024-03-01T10:00:00+01:00",
            "num_cpus": 8,
            "experiment": "dot product",
            "floating_type": "double",
            "memory_type": "heap memory",
            "caches": [
                {"type": "Data", "level": 1, "size": 32768, "num_sharing": 2},
                {"type": "Unified", "level": 2, "size": 262144, "num_sharing": 2}
            ]
        },
        "benchmarks": [
            {
                "name": "BM_dot<dot_naive>/1024",
                "run_type": "iteration",
                "iterations": 1000,
                "real_time": 120.5,
                "cpu_time": 120.1,
                "time_unit": "ns"
            }
        ]
    }"#;

    #[test]
    fn test_parse_report_ignores_unknown_fields() {
        let report = parse_report(SAMPLE).unwrap();
        assert_eq!(report.context.experiment, "dot product");
        assert_eq!(report.context.floating_type, "double");
        assert_eq!(report.context.memory_type, "heap memory");
        assert_eq!(report.context.caches.len(), 2);
        assert_eq!(report.context.caches[0].kind, "Data");
        assert_eq!(report.context.caches[0].level, Some(1));
        assert_eq!(report.benchmarks.len(), 1);
        assert_eq!(report.benchmarks[0].time_unit, "ns");
        assert!(!report.benchmarks[0].is_aggregate());
    }

    #[test]
    fn test_parse_report_missing_context_defaults() {
        let report = parse_report(r#"{"benchmarks": []}"#).unwrap();
        assert_eq!(report.context, Context::default());
        assert!(report.benchmarks.is_empty());
    }

    #[test]
    fn test_parse_report_requires_benchmarks() {
        let err = parse_report(r#"{"context": {}}"#).unwrap_err();
        assert!(matches!(err, PlotError::Json { .. }));
    }

    #[test]
    fn test_parse_report_invalid_json() {
        let err = parse_report("{ not json").unwrap_err();
        assert!(matches!(err, PlotError::Json { .. }));
    }

    #[test]
    fn test_aggregate_run_type() {
        let raw = RawBenchmark {
            name: "BM_dot<dot_naive>/1024_mean".to_string(),
            real_time: 1.0,
            time_unit: "ns".to_string(),
            run_type: Some("aggregate".to_string()),
        };
        assert!(raw.is_aggregate());
    }

    #[test]
    fn test_load_report_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let report = load_report(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(report.benchmarks[0].name, "BM_dot<dot_naive>/1024");
    }

    #[test]
    fn test_load_report_missing_file() {
        let err = load_report("/nonexistent/report.json", &LoadOptions::default()).unwrap_err();
        match err {
            PlotError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/report.json"))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_report_too_large() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let options = LoadOptions { max_file_size: 16 };
        let err = load_report(file.path(), &options).unwrap_err();
        assert!(matches!(err, PlotError::FileTooLarge { max: 16, .. }));
    }
}
