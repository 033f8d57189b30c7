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

//! Chart delivery: interactive display with a fallback to files.
//!
//! In [`OutputMode::Show`] the charts are handed to a [`Viewer`]. If the
//! viewer reports [`PlotError::DisplayUnavailable`] (no display server, no
//! opener program), the charts are written to the output directory as
//! `throughput.svg`, `throughput.png`, `speedup.svg` and `speedup.png`, and a
//! notice is printed. Any other error is fatal.

use crate::chart::ChartSpec;
use crate::config::{ChartStyle, OutputMode, OutputOptions};
use crate::error::{PlotError, Result};
use crate::render::render_svg;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Outcome of [`present`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// The charts were opened in a viewer.
    Displayed,
    /// The charts were written to these files.
    Saved(Vec<PathBuf>),
}

/// Something that can show charts to the user.
pub trait Viewer {
    /// Shows the charts.
    ///
    /// Implementations return [`PlotError::DisplayUnavailable`] when no
    /// display can be used; the caller then falls back to files.
    fn show(&self, charts: &[ChartSpec], style: &ChartStyle) -> Result<()>;
}

/// Opens the charts with the platform's default SVG viewer.
///
/// The SVG files are written to a per-process directory under the system
/// temporary directory and handed to `xdg-open` (Linux and BSD), `open`
/// (macOS) or `start` (Windows).
#[derive(Debug, Clone, Default)]
pub struct SystemViewer;

impl SystemViewer {
    /// Creates a viewer using the platform opener.
    pub fn new() -> Self {
        Self
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn check_display() -> Result<()> {
        let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
            .iter()
            .any(|var| std::env::var_os(var).map_or(false, |v| !v.is_empty()));
        if has_display {
            Ok(())
        } else {
            Err(PlotError::display_unavailable(
                "neither DISPLAY nor WAYLAND_DISPLAY is set",
            ))
        }
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    fn check_display() -> Result<()> {
        Ok(())
    }

    fn opener(path: &Path) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl Viewer for SystemViewer {
    fn show(&self, charts: &[ChartSpec], style: &ChartStyle) -> Result<()> {
        Self::check_display()?;

        let dir = std::env::temp_dir().join(format!("benchplot-{}", std::process::id()));
        fs::create_dir_all(&dir)
            .map_err(|e| PlotError::display_unavailable(format!("{}: {}", dir.display(), e)))?;

        for chart in charts {
            let path = dir.join(format!("{}.svg", chart.kind.name()));
            fs::write(&path, render_svg(chart, style)?)
                .map_err(|e| PlotError::io_error(&path, e))?;

            let status = Self::opener(&path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(|e| {
                    PlotError::display_unavailable(format!("cannot launch viewer: {}", e))
                })?;

            if !status.success() {
                return Err(PlotError::display_unavailable(format!(
                    "viewer exited with {}",
                    status
                )));
            }
            tracing::info!(path = %path.display(), "opened chart");
        }
        Ok(())
    }
}

/// Writes every chart as SVG (and PNG with the `png` feature) into `dir`.
///
/// File names are fixed: `<kind>.svg` and `<kind>.png`.
pub fn write_charts(
    charts: &[ChartSpec],
    style: &ChartStyle,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| PlotError::io_error(dir, e))?;

    let mut written = Vec::with_capacity(charts.len() * 2);
    for chart in charts {
        let svg_path = dir.join(format!("{}.svg", chart.kind.name()));
        let svg = render_svg(chart, style)?;
        fs::write(&svg_path, svg).map_err(|e| PlotError::io_error(&svg_path, e))?;
        tracing::info!(path = %svg_path.display(), "wrote chart");
        written.push(svg_path);

        #[cfg(feature = "png")]
        {
            let png_path = dir.join(format!("{}.png", chart.kind.name()));
            crate::render::render_png(chart, style, &png_path)?;
            tracing::info!(path = %png_path.display(), "wrote chart");
            written.push(png_path);
        }
    }

    #[cfg(not(feature = "png"))]
    tracing::warn!("built without the `png` feature; raster charts were not written");

    Ok(written)
}

/// Shows or saves the charts according to `options`.
///
/// # Errors
///
/// Render and I/O errors are returned. A display failure is not an error:
/// it triggers the file fallback.
pub fn present(
    charts: &[ChartSpec],
    style: &ChartStyle,
    options: &OutputOptions,
    viewer: &dyn Viewer,
) -> Result<Presentation> {
    if options.mode == OutputMode::Show {
        match viewer.show(charts, style) {
            Ok(()) => return Ok(Presentation::Displayed),
            Err(err) if err.is_recoverable() => {
                tracing::debug!(error = %err, "interactive display failed, saving charts instead");
                eprintln!(
                    "{} {}; saving charts to '{}'",
                    "note:".yellow().bold(),
                    err,
                    options.output_dir.display()
                );
            }
            Err(err) => return Err(err),
        }
    }

    let written = write_charts(charts, style, &options.output_dir)?;
    Ok(Presentation::Saved(written))
}
