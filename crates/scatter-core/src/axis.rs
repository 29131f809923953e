// File: crates/scatter-core/src/axis.rs
// Summary: Axis model: orientation, pixel-placed ticks and their formatted labels.

use crate::record::FinishTime;
use crate::scale::TickScale;

/// Outer tick length in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick end and label.
pub const TICK_PADDING: f64 = 3.0;
/// Target tick count handed to the scale.
pub const TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub px: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: Orientation,
    /// Pixel extent of the domain line along the axis.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Build an axis from any tick-capable scale and a label formatter.
    pub fn from_scale<S, F>(id: &'static str, orientation: Orientation, scale: &S, format: F) -> Self
    where
        S: TickScale,
        F: Fn(&S::Domain) -> String,
    {
        let ticks = scale
            .ticks(TICK_COUNT)
            .iter()
            .map(|v| Tick { px: scale.apply(v), label: format(v) })
            .collect();
        Self { id, orientation, range: scale.range(), ticks }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

/// Integer label with no digit grouping ("1994", never "1,994").
pub fn format_year(v: &f64) -> String {
    format!("{}", v.round() as i64)
}

/// `MM:SS` clock label.
pub fn format_clock(t: &FinishTime) -> String {
    t.clock()
}
