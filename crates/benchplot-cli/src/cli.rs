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

//! Command-line arguments.

use benchplot_core::{
    BaselineSelector, ChartStyle, LoadOptions, OutputMode, OutputOptions, PlotConfig, Presentation,
    SystemViewer, TitleStyle,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Short usage line printed when the arguments are wrong.
pub const USAGE: &str = "Usage: benchplot <json report>";

/// Plot throughput and speedup from a Google Benchmark JSON report
///
/// Opens both charts in the system viewer. When no display is available the
/// charts are written to the output directory as throughput.svg,
/// throughput.png, speedup.svg and speedup.png instead.
///
/// # Examples
///
/// ```bash
/// # Show the charts for a report
/// benchplot dot.json
///
/// # Write the charts to ./plots without opening a viewer
/// benchplot dot.json --save --output-dir plots
///
/// # Compare against a different baseline
/// benchplot minimum.json --baseline scalar
/// ```
#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(author, version, about = "Plot throughput and speedup from a Google Benchmark JSON report", long_about = None)]
pub struct Cli {
    /// JSON report written with --benchmark_format=json
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Substring identifying the baseline series for the speedup chart
    #[arg(short, long, default_value = benchplot_core::config::DEFAULT_BASELINE_PATTERN)]
    pub baseline: String,

    /// Token in series names replaced by the report's floating point type
    #[arg(long, default_value = benchplot_core::config::DEFAULT_LABEL_PLACEHOLDER)]
    pub placeholder: String,

    /// Show series names exactly as reported
    #[arg(long)]
    pub no_label_fix: bool,

    /// Add floating point type and memory type to chart titles
    #[arg(long)]
    pub detailed_titles: bool,

    /// Write chart files without trying to open a viewer
    #[arg(short, long)]
    pub save: bool,

    /// Directory for chart files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Show progress messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the pipeline configuration from the arguments.
    pub fn to_config(&self) -> PlotConfig {
        PlotConfig {
            baseline: BaselineSelector::Contains(self.baseline.clone()),
            label_placeholder: (!self.no_label_fix).then(|| self.placeholder.clone()),
            title_style: if self.detailed_titles {
                TitleStyle::Detailed
            } else {
                TitleStyle::Experiment
            },
            style: ChartStyle {
                width: self.width,
                height: self.height,
                ..ChartStyle::default()
            },
            output: OutputOptions {
                mode: if self.save {
                    OutputMode::Save
                } else {
                    OutputMode::Show
                },
                output_dir: self.output_dir.clone(),
            },
            load: LoadOptions::from_env(),
        }
    }

    /// Runs the pipeline and reports saved files on stdout.
    pub fn execute(&self) -> Result<(), benchplot_core::PlotError> {
        let config = self.to_config();
        tracing::debug!(report = %self.report.display(), ?config, "plotting report");
        match benchplot_core::run(&self.report, &config, &SystemViewer::new())? {
            Presentation::Displayed => {}
            Presentation::Saved(files) => {
                for file in files {
                    println!("{} Saved {}", "✓".green().bold(), file.display());
                }
            }
        }
        Ok(())
    }
}
