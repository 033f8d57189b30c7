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

//! Chart rendering with plotters.
//!
//! A [`ChartSpec`] is drawn identically on every backend: log base 2 size
//! axis, linear value axis starting at zero, one coloured line per curve,
//! and a thin black vertical line at each cache boundary.
//!
//! SVG output is always available. PNG output needs the `png` feature,
//! which pulls in the plotters bitmap backend.
//!
//! Text is laid out with a bundled DejaVu Sans face registered under the
//! configured font family, so rendering never consults host fonts.

use crate::chart::ChartSpec;
use crate::config::ChartStyle;
use crate::error::{PlotError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontFamily, FontStyle};
#[cfg(feature = "png")]
use std::path::Path;

const MARGIN: u32 = 20;
const X_LABEL_AREA_SIZE: u32 = 60;
const Y_LABEL_AREA_SIZE: u32 = 80;
const POINT_RADIUS: i32 = 3;
const LEGEND_SWATCH_WIDTH: i32 = 20;

static BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Formats a byte count with binary units (`512 B`, `1.5 KiB`, `256 MiB`).
pub fn format_bytes(bytes: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if (value - value.round()).abs() < 1e-9 {
        format!("{} {}", value.round() as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Renders a chart to an SVG document.
pub fn render_svg(spec: &ChartSpec, style: &ChartStyle) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_chart(&root, spec, style)?;
    }
    Ok(svg)
}

/// Renders a chart to a PNG file.
#[cfg(feature = "png")]
pub fn render_png(spec: &ChartSpec, style: &ChartStyle, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_chart(&root, spec, style)
}

// Generic names are normalized by plotters ("Sans-Serif" resolves as "sans-serif").
fn register_bundled_font(family: &str) -> Result<()> {
    let name = FontFamily::from(family).as_str().to_string();
    register_font(&name, FontStyle::Normal, BUNDLED_FONT)
        .map_err(|_| PlotError::render(format!("bundled font rejected for '{}'", name)))
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    style: &ChartStyle,
) -> Result<()> {
    register_bundled_font(&style.font_family)?;
    root.fill(&WHITE).map_err(PlotError::render)?;

    let (x_lo, x_hi) = spec.x_range();
    let (y_lo, y_hi) = spec.y_range();
    let font = style.font_family.as_str();

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, (font, style.title_font_size))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d((x_lo..x_hi).log_scale().base(2.0), y_lo..y_hi)
        .map_err(PlotError::render)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_label_formatter(&|x| format_bytes(*x))
        .label_style((font, style.label_font_size))
        .axis_desc_style((font, style.label_font_size))
        .draw()
        .map_err(PlotError::render)?;

    for &boundary in &spec.cache_lines {
        let x = boundary as f64;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, y_lo), (x, y_hi)],
                BLACK.stroke_width(1),
            )))
            .map_err(PlotError::render)?;
    }

    let line_width = style.line_width;
    for (idx, curve) in spec.curves.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);

        chart
            .draw_series(LineSeries::new(
                curve.points.iter().copied(),
                color.stroke_width(line_width),
            ))
            .map_err(PlotError::render)?
            .label(curve.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + LEGEND_SWATCH_WIDTH, y)],
                    color.stroke_width(line_width),
                )
            });

        if style.show_points {
            chart
                .draw_series(
                    curve
                        .points
                        .iter()
                        .map(|&point| Circle::new(point, POINT_RADIUS, color.filled())),
                )
                .map_err(PlotError::render)?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE)
        .border_style(BLACK)
        .label_font((font, style.label_font_size))
        .draw()
        .map_err(PlotError::render)?;

    root.present().map_err(PlotError::render)?;
    Ok(())
}
