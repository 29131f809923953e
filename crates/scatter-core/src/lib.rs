// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports loading, chart construction, scene and rendering APIs.

pub mod axis;
pub mod chart;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod loader;
pub mod record;
pub mod render;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, ChartBuilder};
pub use driver::{Driver, Rendered, Stage};
pub use error::{ChartError, FetchError, RecordError};
pub use geometry::Point;
pub use loader::{fetch_records, load_file, parse_records};
pub use record::{FinishTime, Record};
pub use render::RenderOptions;
pub use scene::{Element, Scene};
pub use theme::Theme;
pub use tooltip::{TooltipController, TooltipState};
pub use types::{ChartOptions, Insets};
