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

//! Structured error types for benchmark report plotting.
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! side is [`PlotError`]. Variants carry enough context (file path, benchmark
//! name, offending value) to produce a useful message without a backtrace.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading, aggregating, or rendering a report.
///
/// Only [`PlotError::DisplayUnavailable`] is recoverable: the presenter
/// answers it by writing the charts to disk instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// The report file could not be read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The report file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// The report is not valid JSON or does not have the expected shape.
    #[error("JSON error in '{path}': {message}")]
    Json {
        /// Source of the document (file path or `<memory>`)
        path: PathBuf,
        /// The serde_json error message
        message: String,
    },

    /// A benchmark name does not follow the `<NAME>/SIZE` layout.
    #[error("Benchmark name '{name}' does not match the '<NAME>/SIZE' pattern")]
    Format {
        /// The offending benchmark name
        name: String,
    },

    /// The size component of a benchmark name is not a byte count.
    #[error("Benchmark '{name}' has a size '{size}' that is not a non-negative integer")]
    InvalidSize {
        /// The full benchmark name
        name: String,
        /// The size component as written
        size: String,
    },

    /// The `time_unit` of a benchmark is not one of `s`, `ms`, `us`, `ns`.
    #[error("Unknown time unit '{unit}' (expected one of s, ms, us, ns)")]
    UnknownTimeUnit {
        /// The unit string found in the report
        unit: String,
    },

    /// The measured time cannot be turned into a throughput.
    #[error("Benchmark '{name}' has a non-positive or non-finite time ({seconds} s)")]
    InvalidTime {
        /// The full benchmark name
        name: String,
        /// The converted time in seconds
        seconds: f64,
    },

    /// The report contains no measurements to plot.
    #[error("Report contains no benchmark measurements")]
    EmptyReport,

    /// No series qualifies as the speedup baseline.
    #[error("No baseline series found: no benchmark name matches '{pattern}'")]
    NoBaseline {
        /// Description of the selector that failed to match
        pattern: String,
    },

    /// A series cannot be divided element-wise by the baseline.
    #[error("Series '{series}' has {actual} points but the baseline has {expected}")]
    LengthMismatch {
        /// Name of the series being compared
        series: String,
        /// Number of points in the baseline
        expected: usize,
        /// Number of points in the series
        actual: usize,
    },

    /// Drawing a chart failed.
    #[error("Render error: {0}")]
    Render(String),

    /// No interactive display could be used.
    #[error("Display unavailable: {0}")]
    DisplayUnavailable(String),
}

impl PlotError {
    /// Create an I/O error with file path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use benchplot_core::error::PlotError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("report.json")
    ///     .map_err(|e| PlotError::io_error("report.json", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a JSON error with source context.
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a render error from any displayable backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }

    /// Create a display-unavailable error.
    pub fn display_unavailable(reason: impl Into<String>) -> Self {
        Self::DisplayUnavailable(reason.into())
    }

    /// Returns `true` if the pipeline can continue by writing files instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DisplayUnavailable(_))
    }
}
