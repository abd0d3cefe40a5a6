// File: crates/chart-core/src/lib.rs
// Summary: Chart library entry point; renders stock price requests as multi-line PNG charts.

pub mod axis;
pub mod chart;
pub mod downsample;
pub mod renderer;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{Axis, AxisKind};
pub use chart::{Chart, RenderError, RenderOptions};
pub use downsample::lttb;
pub use renderer::PngChartRenderer;
pub use series::LineSeries;
pub use theme::Theme;
pub use view::ViewState;
