// File: crates/chart-core/src/series.rs
// Summary: Labelled line series in plot coordinates (x = day number, y = close).

use stock_core::WindowedSeries;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    /// Map each (date, close) of a windowed series to (day number, close).
    pub fn from_windowed(series: &WindowedSeries) -> Self {
        let data = series
            .points()
            .map(|(date, close)| (date.day_ordinal() as f64, close))
            .collect();
        Self::new(series.label.clone(), data)
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Downsample with LTTB to at most `max_points`; shorter series are returned as is.
    pub fn downsample_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        if self.data_xy.len() > max_points {
            Self::new(self.label.clone(), lttb(&self.data_xy, max_points))
        } else {
            self.clone()
        }
    }
}
