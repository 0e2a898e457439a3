//! SVG charts for the demo dashboard.
//!
//! Geometry is computed here in plain functions; the components only lay the
//! resulting paths and rects into an `svg` element.

use dioxus::prelude::*;

use crate::core::format::{format_thousands, month_label};
use crate::core::locale::Locale;

use super::series::RevenuePoint;

pub const CHART_WIDTH: f64 = 560.0;
pub const CHART_HEIGHT: f64 = 220.0;
const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 10.0;
const PAD_TOP: f64 = 8.0;
const PAD_BOTTOM: f64 = 24.0;
const Y_TICKS: usize = 4;

/// Plot area and value range shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub min: f64,
    pub max: f64,
}

impl Frame {
    /// Range covering `values`, widened to whole 10k steps. Empty input gets `0..10k`.
    pub fn covering(values: impl IntoIterator<Item = i64>, from_zero: bool) -> Self {
        let mut lo = i64::MAX;
        let mut hi = i64::MIN;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo > hi {
            return Self {
                min: 0.0,
                max: 10_000.0,
            };
        }
        let step = 10_000;
        let min = if from_zero { 0 } else { lo.div_euclid(step) * step };
        let mut max = (hi + step - 1).div_euclid(step) * step;
        if max <= min {
            max = min + step;
        }
        Self {
            min: min as f64,
            max: max as f64,
        }
    }

    pub fn x(&self, index: usize, count: usize) -> f64 {
        let span = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
        if count <= 1 {
            return PAD_LEFT + span / 2.0;
        }
        PAD_LEFT + span * index as f64 / (count - 1) as f64
    }

    pub fn y(&self, value: f64) -> f64 {
        let span = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
        let ratio = (value - self.min) / (self.max - self.min);
        CHART_HEIGHT - PAD_BOTTOM - span * ratio.clamp(0.0, 1.0)
    }

    pub fn baseline(&self) -> f64 {
        CHART_HEIGHT - PAD_BOTTOM
    }

    /// Evenly spaced tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<i64> {
        (0..=Y_TICKS)
            .map(|i| (self.min + (self.max - self.min) * i as f64 / Y_TICKS as f64).round() as i64)
            .collect()
    }
}

/// `M`/`L` polyline through the values.
pub fn line_path(values: &[i64], frame: &Frame) -> String {
    let mut d = String::new();
    for (i, v) in values.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!(
            "{cmd}{:.1},{:.1} ",
            frame.x(i, values.len()),
            frame.y(*v as f64)
        ));
    }
    d.trim_end().to_string()
}

/// Closed area under the line, down to the baseline.
pub fn area_path(values: &[i64], frame: &Frame) -> String {
    if values.is_empty() {
        return String::new();
    }
    let line = line_path(values, frame);
    let last_x = frame.x(values.len() - 1, values.len());
    let first_x = frame.x(0, values.len());
    let base = frame.baseline();
    format!("{line} L{last_x:.1},{base:.1} L{first_x:.1},{base:.1} Z")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per value, centered in equal-width slots.
pub fn bar_rects(values: &[i64], frame: &Frame) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let span = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
    let slot = span / values.len() as f64;
    let width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = frame.y(*v as f64);
            BarRect {
                x: PAD_LEFT + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

/// Pre-formatted x-axis label.
#[derive(Debug, Clone, PartialEq)]
struct AxisLabel {
    key: usize,
    x: String,
    text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct GridLine {
    value: i64,
    y: String,
    label_y: String,
    label: String,
}

fn grid_lines(frame: &Frame, currency: bool) -> Vec<GridLine> {
    frame
        .ticks()
        .into_iter()
        .map(|value| {
            let y = frame.y(value as f64);
            GridLine {
                value,
                y: format!("{y:.1}"),
                label_y: format!("{:.1}", y + 4.0),
                label: format_thousands(value, currency),
            }
        })
        .collect()
}

#[component]
pub fn RevenueAreaChart(points: Vec<RevenuePoint>, locale: Locale, target_label: String) -> Element {
    let revenue: Vec<i64> = points.iter().map(|p| p.revenue).collect();
    let targets: Vec<i64> = points.iter().map(|p| p.target).collect();
    let frame = Frame::covering(revenue.iter().chain(targets.iter()).copied(), false);
    let area = area_path(&revenue, &frame);
    let line = line_path(&revenue, &frame);
    let target_line = line_path(&targets, &frame);
    let labels: Vec<AxisLabel> = points
        .iter()
        .enumerate()
        .map(|(i, p)| AxisLabel {
            key: p.month_index,
            x: format!("{:.1}", frame.x(i, points.len())),
            text: month_label(p.month_index, locale),
        })
        .collect();
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let label_y = format!("{:.1}", CHART_HEIGHT - 6.0);

    rsx! {
        svg {
            class: "demo-chart demo-chart--area",
            view_box: "{view_box}",
            role: "img",
            defs {
                linearGradient { id: "revenueGradient", x1: "0", y1: "0", x2: "0", y2: "1",
                    stop { offset: "5%", stop_color: "#6366f1", stop_opacity: "0.25" }
                    stop { offset: "95%", stop_color: "#6366f1", stop_opacity: "0" }
                }
            }
            YGrid { lines: grid_lines(&frame, true) }
            path { class: "demo-chart__area", d: "{area}", fill: "url(#revenueGradient)" }
            path { class: "demo-chart__line", d: "{line}", fill: "none" }
            path {
                class: "demo-chart__target",
                d: "{target_line}",
                fill: "none",
                stroke_dasharray: "4 4",
                title { "{target_label}" }
            }
            for label in labels {
                text {
                    key: "{label.key}",
                    class: "demo-chart__tick demo-chart__tick--x",
                    x: "{label.x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{label.text}"
                }
            }
        }
    }
}

#[component]
pub fn EventsBarChart(points: Vec<RevenuePoint>, locale: Locale) -> Element {
    let values: Vec<i64> = points.iter().map(|p| p.revenue).collect();
    let frame = Frame::covering(values.iter().copied(), true);
    let bars: Vec<(AxisLabel, BarRect)> = bar_rects(&values, &frame)
        .into_iter()
        .zip(points.iter())
        .map(|(bar, p)| {
            let label = AxisLabel {
                key: p.month_index,
                x: format!("{:.1}", bar.x + bar.width / 2.0),
                text: month_label(p.month_index, locale),
            };
            (label, bar)
        })
        .collect();
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let label_y = format!("{:.1}", CHART_HEIGHT - 6.0);

    rsx! {
        svg {
            class: "demo-chart demo-chart--bars",
            view_box: "{view_box}",
            role: "img",
            YGrid { lines: grid_lines(&frame, false) }
            for (label, bar) in bars {
                g { key: "{label.key}",
                    rect {
                        class: "demo-chart__bar",
                        x: format!("{:.1}", bar.x),
                        y: format!("{:.1}", bar.y),
                        width: format!("{:.1}", bar.width),
                        height: format!("{:.1}", bar.height),
                        rx: "4",
                    }
                    text {
                        class: "demo-chart__tick demo-chart__tick--x",
                        x: "{label.x}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        "{label.text}"
                    }
                }
            }
        }
    }
}

#[component]
fn YGrid(lines: Vec<GridLine>) -> Element {
    let x1 = format!("{PAD_LEFT}");
    let x2 = format!("{}", CHART_WIDTH - PAD_RIGHT);
    let label_x = format!("{}", PAD_LEFT - 6.0);

    rsx! {
        g { class: "demo-chart__grid",
            for grid in lines {
                g { key: "{grid.value}",
                    line {
                        x1: "{x1}",
                        x2: "{x2}",
                        y1: "{grid.y}",
                        y2: "{grid.y}",
                        stroke_dasharray: "3 3",
                    }
                    text {
                        class: "demo-chart__tick demo-chart__tick--y",
                        x: "{label_x}",
                        y: "{grid.label_y}",
                        text_anchor: "end",
                        "{grid.label}"
                    }
                }
            }
        }
    }
}
