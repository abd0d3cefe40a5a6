// File: crates/stock-core/src/request.rs
// Summary: Chart request handed to a renderer, and the renderer seam itself.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{Result, TrackerError};
use crate::window::{TimeWindow, WindowedSeries};

pub const CHART_TITLE: &str = "Stock Close Price vs Time";
pub const X_AXIS_LABEL: &str = "Time";
pub const Y_AXIS_LABEL: &str = "USD $";

/// One chart's worth of windowed series plus fixed title/axis labels.
/// Contract: at least one series, labels unique, order = legend order.
#[derive(Clone, Debug)]
pub struct ChartRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub window: TimeWindow,
    series: Vec<WindowedSeries>,
}

impl ChartRequest {
    pub fn new(window: TimeWindow, series: Vec<WindowedSeries>) -> Result<Self> {
        if series.is_empty() {
            return Err(TrackerError::Config("a chart needs at least one series".into()));
        }
        let mut seen = HashSet::new();
        for s in &series {
            if !seen.insert(s.label.as_str()) {
                return Err(TrackerError::Config(format!("series '{}' requested more than once", s.label)));
            }
        }
        Ok(Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            window,
            series,
        })
    }

    pub fn series(&self) -> &[WindowedSeries] { &self.series }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.label.as_str())
    }
}

/// Rendered chart. `path` is set when the renderer wrote it somewhere.
#[derive(Clone, Debug, Default)]
pub struct ChartArtifact {
    pub path: Option<PathBuf>,
    pub bytes: Vec<u8>,
}

/// Boundary to whatever draws the chart.
pub trait ChartRenderer {
    fn render(&self, request: &ChartRequest) -> anyhow::Result<ChartArtifact>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for &T {
    fn render(&self, request: &ChartRequest) -> anyhow::Result<ChartArtifact> {
        (**self).render(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ws(label: &str) -> WindowedSeries {
        WindowedSeries { label: label.into(), dates: Vec::new(), prices: Vec::new() }
    }

    #[test]
    fn fixed_metadata() {
        let r = ChartRequest::new(TimeWindow::Max, vec![ws("A"), ws("B")]).unwrap();
        assert_eq!(r.title, "Stock Close Price vs Time");
        assert_eq!(r.x_label, "Time");
        assert_eq!(r.y_label, "USD $");
        assert_eq!(r.labels().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert!(ChartRequest::new(TimeWindow::Max, vec![]).unwrap_err().is_config());
        assert!(ChartRequest::new(TimeWindow::Max, vec![ws("A"), ws("A")]).unwrap_err().is_config());
    }

    #[test]
    fn accepts_more_than_three() {
        let r = ChartRequest::new(TimeWindow::OneYear, ["A", "B", "C", "D"].map(ws).to_vec()).unwrap();
        assert_eq!(r.series().len(), 4);
    }
}
