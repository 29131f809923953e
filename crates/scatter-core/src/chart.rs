// File: crates/scatter-core/src/chart.rs
// Summary: Chart model and builder: derives scales, axes, dot layout and legend from records.
// Notes:
// - Building is pure; the same records and options always yield the same `Chart`.
// - Point positions are plot-local (origin at the top-left of the inner plot area).

use crate::axis::{format_clock, format_year, Axis, Orientation};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::record::{FinishTime, Record};
use crate::scale::{LinearScale, OrdinalScale, TimeScale};
use crate::theme;
use crate::types::{ChartOptions, LABEL_ALLEGED, LABEL_CLEAN};

/// Vertical spacing between legend rows.
pub const LEGEND_ROW: f64 = 20.0;
/// Legend swatch edge length.
pub const LEGEND_SWATCH: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint {
    /// Index of the source record.
    pub index: usize,
    pub year: i32,
    pub time: FinishTime,
    pub pos: Point,
    pub color: u32,
    pub alleged: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub alleged: bool,
    pub label: &'static str,
    pub color: u32,
    /// Row translation relative to the plot top.
    pub offset_y: f64,
}

/// Rotated label beside the vertical axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotate_deg: f64,
    pub font_size: f64,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub options: ChartOptions,
    /// Inner plot area in outer-surface pixels.
    pub frame: Rect,
    pub x_scale: LinearScale,
    pub y_scale: TimeScale,
    pub color: OrdinalScale<bool>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y_title: AxisTitle,
    pub points: Vec<PlotPoint>,
    pub legend: Vec<LegendEntry>,
}

impl Chart {
    /// Index of the top-most point whose disc contains `local` (plot-local pixels).
    pub fn hit_test(&self, local: Point) -> Option<usize> {
        let r2 = (self.options.dot_radius as f64).powi(2);
        self.points
            .iter()
            .rev()
            .find(|p| p.pos.distance_sq(&local) <= r2)
            .map(|p| p.index)
    }

    /// Same as [`Chart::hit_test`] for a position on the outer surface.
    pub fn point_at(&self, outer: Point) -> Option<usize> {
        self.hit_test(self.frame.to_local(outer))
    }

    pub fn x_domain(&self) -> (f64, f64) { self.x_scale.domain() }
}

pub struct ChartBuilder {
    options: ChartOptions,
    palette: &'static [u32],
}

impl ChartBuilder {
    pub fn new(options: ChartOptions) -> Self {
        let palette = theme::find(&options.theme).palette;
        Self { options, palette }
    }

    pub fn palette(mut self, palette: &'static [u32]) -> Self {
        self.palette = palette;
        self
    }

    pub fn build(&self, records: &[Record]) -> Result<Chart> {
        let (first, rest) = records.split_first().ok_or(ChartError::EmptyDataset)?;
        let opts = self.options.clone();
        let (w, h) = (opts.plot_width(), opts.plot_height());

        let (mut y_min, mut y_max) = (first.year, first.year);
        let (mut t_min, mut t_max) = (first.finish_time, first.finish_time);
        for r in rest {
            y_min = y_min.min(r.year);
            y_max = y_max.max(r.year);
            t_min = t_min.min(r.finish_time);
            t_max = t_max.max(r.finish_time);
        }

        let x_scale = LinearScale::new((y_min as f64 - 1.0, y_max as f64 + 1.0), (0.0, w));
        let y_scale = TimeScale::new((t_min, t_max), (0.0, h));
        let color = OrdinalScale::from_keys(self.palette, records.iter().map(Record::has_allegation));

        let x_axis = Axis::from_scale("x-axis", Orientation::Bottom, &x_scale, format_year);
        let y_axis = Axis::from_scale("y-axis", Orientation::Left, &y_scale, format_clock);

        let points = records
            .iter()
            .enumerate()
            .map(|(index, r)| PlotPoint {
                index,
                year: r.year,
                time: r.finish_time,
                pos: Point::new(x_scale.to_px(r.year as f64), y_scale.to_px(&r.finish_time)),
                color: color.get(&r.has_allegation()).unwrap_or(0),
                alleged: r.has_allegation(),
            })
            .collect::<Vec<_>>();

        let legend = color
            .domain()
            .iter()
            .enumerate()
            .map(|(i, &alleged)| LegendEntry {
                alleged,
                label: if alleged { LABEL_ALLEGED } else { LABEL_CLEAN },
                color: color.get(&alleged).unwrap_or(0),
                offset_y: h / 2.0 - i as f64 * LEGEND_ROW,
            })
            .collect::<Vec<_>>();

        let y_title = AxisTitle {
            text: opts.y_label.clone(),
            x: -160.0,
            y: -44.0,
            rotate_deg: -90.0,
            font_size: 20.0,
        };

        tracing::debug!(
            points = points.len(),
            categories = legend.len(),
            x_domain = ?x_scale.domain(),
            y_domain = %format!("{}..{}", t_min, t_max),
            "chart built"
        );

        let frame = Rect::from_ltwh(opts.insets.left as f64, opts.insets.top as f64, w, h);
        Ok(Chart { options: opts, frame, x_scale, y_scale, color, x_axis, y_axis, y_title, points, legend })
    }
}
