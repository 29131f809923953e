// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, labels, default dataset URL).

use serde::Deserialize;

/// Default outer surface width in pixels.
pub const WIDTH: i32 = 920;
/// Default outer surface height in pixels.
pub const HEIGHT: i32 = 630;
/// Default dot radius in pixels.
pub const DOT_RADIUS: f32 = 7.0;

pub const TITLE: &str = "Doping in Professional Bicycle Racing";
pub const Y_LABEL: &str = "Time in Minutes";
pub const LABEL_ALLEGED: &str = "Doping allegations";
pub const LABEL_CLEAN: &str = "No doping allegations";

pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 20, 50, 30)
    }
}

/// Chart construction options. Deserializable so the CLI can read them from a JSON file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub dot_radius: f32,
    pub title: String,
    pub y_label: String,
    pub theme: String,
}

impl ChartOptions {
    /// Inner plot width (outer width minus horizontal insets), never negative.
    pub fn plot_width(&self) -> f64 {
        (self.width as f64 - self.insets.hsum() as f64).max(0.0)
    }

    /// Inner plot height (outer height minus vertical insets), never negative.
    pub fn plot_height(&self) -> f64 {
        (self.height as f64 - self.insets.vsum() as f64).max(0.0)
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            dot_radius: DOT_RADIUS,
            title: TITLE.to_string(),
            y_label: Y_LABEL.to_string(),
            theme: "light".to_string(),
        }
    }
}
