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

//! Chart construction.
//!
//! Builds backend-independent descriptions of the two charts: throughput
//! versus size, and speedup versus size relative to a baseline series. The
//! descriptions carry everything the renderer needs (titles, axis labels,
//! curves, cache reference lines) so that all numeric work is done, and
//! tested, here.

use crate::aggregate::{SeriesGroup, SeriesSet};
use crate::config::{BaselineSelector, TitleStyle};
use crate::error::{PlotError, Result};
use crate::report::Context;

/// X axis description shared by both charts.
pub const SIZE_AXIS_LABEL: &str = "size [bytes]";

/// The two chart variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Throughput in GB/s against size.
    Throughput,
    /// Throughput relative to the baseline against size.
    Speedup,
}

impl ChartKind {
    /// Short name, used in titles and as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Throughput => "throughput",
            ChartKind::Speedup => "speedup",
        }
    }

    /// Y axis description.
    pub fn y_label(self) -> &'static str {
        match self {
            ChartKind::Throughput => "throughput [GB/s]",
            ChartKind::Speedup => "speedup",
        }
    }
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Legend label.
    pub label: String,
    /// `(size in bytes, value)` points in report order.
    pub points: Vec<(f64, f64)>,
}

/// Backend-independent chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart variant.
    pub kind: ChartKind,
    /// Caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// One curve per series, in series order.
    pub curves: Vec<Curve>,
    /// Cache sizes drawn as vertical lines.
    pub cache_lines: Vec<u64>,
}

impl ChartSpec {
    /// X range covering every point and every cache line.
    ///
    /// Only positive values are considered since the axis is logarithmic.
    /// A single distinct value is widened to one octave on each side.
    pub fn x_range(&self) -> (f64, f64) {
        let xs = self
            .curves
            .iter()
            .flat_map(|c| c.points.iter().map(|&(x, _)| x))
            .chain(self.cache_lines.iter().map(|&c| c as f64))
            .filter(|&x| x > 0.0);

        let (lo, hi) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });

        if !lo.is_finite() || !hi.is_finite() {
            return (1.0, 2.0);
        }
        if lo == hi {
            return (lo / 2.0, hi * 2.0);
        }
        (lo, hi)
    }

    /// Y range from zero to slightly above the largest value.
    pub fn y_range(&self) -> (f64, f64) {
        let max = self
            .curves
            .iter()
            .flat_map(|c| c.points.iter().map(|&(_, y)| y))
            .fold(0.0_f64, f64::max);

        if max > 0.0 {
            (0.0, max * 1.05)
        } else {
            (0.0, 1.0)
        }
    }
}

/// Replaces the placeholder token in a series name for display.
///
/// Benchmark names cannot carry the floating point type, so kernels are
/// registered with a literal `floating` type parameter and the real type is
/// only known from the report context. The substitution is applied to legend
/// labels only and is skipped when no placeholder or no floating type is
/// available.
pub fn display_label(name: &str, placeholder: Option<&str>, floating_type: &str) -> String {
    match placeholder {
        Some(token) if !token.is_empty() && !floating_type.is_empty() => {
            name.replace(token, floating_type)
        }
        _ => name.to_string(),
    }
}

/// Caption for a chart of the given kind.
pub fn chart_title(kind: ChartKind, context: &Context, style: TitleStyle) -> String {
    let mut title = format!("{} {}", context.experiment, kind.name())
        .trim()
        .to_string();

    if style == TitleStyle::Detailed {
        let details: Vec<&str> = [
            context.floating_type.as_str(),
            context.memory_type.as_str(),
        ]
        .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        if !details.is_empty() {
            title.push_str(&format!(" ({})", details.join(", ")));
        }
    }
    title
}

/// First series (in first-seen order) accepted by the selector.
///
/// # Errors
///
/// [`PlotError::NoBaseline`] if no series matches.
pub fn find_baseline<'a>(
    series: &'a SeriesSet,
    selector: &BaselineSelector,
) -> Result<&'a SeriesGroup> {
    series
        .iter()
        .find(|group| selector.matches(group.name()))
        .ok_or_else(|| PlotError::NoBaseline {
            pattern: selector.pattern().to_string(),
        })
}

/// Element-wise ratio of `group` throughputs to `baseline` throughputs.
///
/// # Errors
///
/// [`PlotError::LengthMismatch`] if the two series differ in length.
///
/// # Examples
///
/// ```
/// use benchplot_core::aggregate::SeriesGroup;
/// use benchplot_core::chart::speedup;
///
/// let mut baseline = SeriesGroup::new("naive");
/// baseline.push(1024, 1.0);
/// baseline.push(2048, 2.0);
/// let mut fast = SeriesGroup::new("fast");
/// fast.push(1024, 2.0);
/// fast.push(2048, 4.0);
///
/// assert_eq!(speedup(&fast, &baseline).unwrap(), vec![2.0, 2.0]);
/// ```
pub fn speedup(group: &SeriesGroup, baseline: &SeriesGroup) -> Result<Vec<f64>> {
    if group.len() != baseline.len() {
        return Err(PlotError::LengthMismatch {
            series: group.name().to_string(),
            expected: baseline.len(),
            actual: group.len(),
        });
    }

    if group.sizes() != baseline.sizes() {
        tracing::warn!(
            series = group.name(),
            baseline = baseline.name(),
            "series sizes differ from the baseline; speedup is computed by index"
        );
    }

    Ok(group
        .throughputs()
        .iter()
        .zip(baseline.throughputs())
        .map(|(t, b)| t / b)
        .collect())
}

/// Builds a curve from sizes and values, dropping points a log axis
/// cannot show.
fn curve(label: String, sizes: &[u64], values: &[f64]) -> Curve {
    let mut dropped = 0usize;
    let points = sizes
        .iter()
        .zip(values)
        .filter_map(|(&size, &value)| {
            if size > 0 && value.is_finite() {
                Some((size as f64, value))
            } else {
                dropped += 1;
                None
            }
        })
        .collect();

    if dropped > 0 {
        tracing::warn!(series = %label, dropped, "dropped points that cannot be plotted");
    }
    Curve { label, points }
}

/// Throughput-versus-size chart.
///
/// # Errors
///
/// [`PlotError::EmptyReport`] if there are no series.
pub fn throughput_chart(
    series: &SeriesSet,
    cache_lines: &[u64],
    context: &Context,
    placeholder: Option<&str>,
    title_style: TitleStyle,
) -> Result<ChartSpec> {
    if series.is_empty() {
        return Err(PlotError::EmptyReport);
    }

    let curves = series
        .iter()
        .map(|group| {
            let label = display_label(group.name(), placeholder, &context.floating_type);
            curve(label, group.sizes(), group.throughputs())
        })
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::Throughput,
        title: chart_title(ChartKind::Throughput, context, title_style),
        x_label: SIZE_AXIS_LABEL.to_string(),
        y_label: ChartKind::Throughput.y_label().to_string(),
        curves,
        cache_lines: cache_lines.to_vec(),
    })
}

/// Speedup-versus-size chart relative to the selected baseline.
///
/// The baseline itself is included and plots as a flat line at 1.
///
/// # Errors
///
/// - [`PlotError::EmptyReport`] if there are no series
/// - [`PlotError::NoBaseline`] if no series matches the selector
/// - [`PlotError::LengthMismatch`] if any series differs in length from the
///   baseline
pub fn speedup_chart(
    series: &SeriesSet,
    cache_lines: &[u64],
    context: &Context,
    placeholder: Option<&str>,
    title_style: TitleStyle,
    selector: &BaselineSelector,
) -> Result<ChartSpec> {
    if series.is_empty() {
        return Err(PlotError::EmptyReport);
    }

    let baseline = find_baseline(series, selector)?;
    tracing::debug!(baseline = baseline.name(), "selected speedup baseline");

    let curves = series
        .iter()
        .map(|group| -> Result<Curve> {
            let ratios = speedup(group, baseline)?;
            let label = display_label(group.name(), placeholder, &context.floating_type);
            Ok(curve(label, group.sizes(), &ratios))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ChartSpec {
        kind: ChartKind::Speedup,
        title: chart_title(ChartKind::Speedup, context, title_style),
        x_label: SIZE_AXIS_LABEL.to_string(),
        y_label: ChartKind::Speedup.y_label().to_string(),
        curves,
        cache_lines: cache_lines.to_vec(),
    })
}
