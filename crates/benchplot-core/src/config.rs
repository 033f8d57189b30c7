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

//! Pipeline configuration.
//!
//! The defaults reproduce the classic chart layout:
//! the baseline is the first series whose name contains `naive`, the
//! `floating` placeholder in series names is replaced by the report's
//! floating point type, titles carry only the experiment name, and the
//! charts are shown interactively with a fallback to files in the current
//! directory.

use crate::report::LoadOptions;
use std::path::PathBuf;

/// Default substring identifying the baseline series.
pub const DEFAULT_BASELINE_PATTERN: &str = "naive";

/// Default placeholder token replaced in series labels.
pub const DEFAULT_LABEL_PLACEHOLDER: &str = "floating";

/// Rule selecting the speedup baseline among the series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineSelector {
    /// First series whose name contains the given substring.
    Contains(String),
    /// The series with exactly this name.
    Exact(String),
}

impl BaselineSelector {
    /// Returns `true` if `name` qualifies as the baseline.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            BaselineSelector::Contains(pattern) => name.contains(pattern.as_str()),
            BaselineSelector::Exact(expected) => name == expected,
        }
    }

    /// The pattern or name this selector looks for.
    pub fn pattern(&self) -> &str {
        match self {
            BaselineSelector::Contains(pattern) | BaselineSelector::Exact(pattern) => pattern,
        }
    }
}

impl Default for BaselineSelector {
    fn default() -> Self {
        BaselineSelector::Contains(DEFAULT_BASELINE_PATTERN.to_string())
    }
}

/// How chart titles are built from the report context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleStyle {
    /// `"{experiment} throughput"`.
    #[default]
    Experiment,
    /// `"{experiment} throughput ({floating_type}, {memory_type})"`.
    Detailed,
}

/// Visual parameters shared by both charts.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Font family for all text.
    pub font_family: String,
    /// Caption font size.
    pub title_font_size: u32,
    /// Axis description and legend font size.
    pub label_font_size: u32,
    /// Stroke width of series lines.
    pub line_width: u32,
    /// Draw a marker at every measurement.
    pub show_points: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            font_family: "sans-serif".to_string(),
            title_font_size: 28,
            label_font_size: 16,
            line_width: 2,
            show_points: true,
        }
    }
}

/// Whether to try interactive display first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Open the charts in a viewer, writing files only if that fails.
    #[default]
    Show,
    /// Write the chart files without trying a viewer.
    Save,
}

/// Where and how the charts are delivered.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Display or save.
    pub mode: OutputMode,
    /// Directory receiving the chart files.
    pub output_dir: PathBuf,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Show,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Baseline series selection for the speedup chart.
    pub baseline: BaselineSelector,
    /// Token replaced by the floating point type in legend labels.
    ///
    /// `None` disables the substitution. This only affects displayed labels;
    /// series are always looked up by their original names.
    pub label_placeholder: Option<String>,
    /// Title format.
    pub title_style: TitleStyle,
    /// Chart appearance.
    pub style: ChartStyle,
    /// Output delivery.
    pub output: OutputOptions,
    /// Report loading limits.
    pub load: LoadOptions,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineSelector::default(),
            label_placeholder: Some(DEFAULT_LABEL_PLACEHOLDER.to_string()),
            title_style: TitleStyle::default(),
            style: ChartStyle::default(),
            output: OutputOptions::default(),
            load: LoadOptions::default(),
        }
    }
}
