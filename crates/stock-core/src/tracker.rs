// File: crates/stock-core/src/tracker.rs
// Summary: Load -> window -> request -> render pipeline for any number of symbols.

use tracing::info;

use crate::error::{Result, TrackerError};
use crate::loader::{LoadOptions, Loader};
use crate::request::{ChartArtifact, ChartRenderer, ChartRequest};
use crate::series::Symbol;
use crate::source::SourceResolver;
use crate::window::{select_window, TimeWindow};

/// Plots closing prices of one or more stocks over a trailing window.
/// Nothing is cached: every call reloads its sources.
pub struct StockTracker<R, C> {
    loader: Loader<R>,
    renderer: C,
}

impl<R: SourceResolver, C: ChartRenderer> StockTracker<R, C> {
    pub fn new(resolver: R, renderer: C) -> Self {
        Self { loader: Loader::new(resolver), renderer }
    }

    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.loader = self.loader.with_options(options);
        self
    }

    /// Everything except rendering: parse symbols, load, select the window.
    pub fn build_request<S: AsRef<str>>(&self, window: TimeWindow, symbols: &[S]) -> Result<ChartRequest> {
        let symbols = symbols
            .iter()
            .map(|s| Symbol::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if symbols.is_empty() {
            return Err(TrackerError::Config("no stock symbols given".into()));
        }
        let windowed = self
            .loader
            .load_all(&symbols)?
            .iter()
            .map(|series| select_window(series, window))
            .collect();
        ChartRequest::new(window, windowed)
    }

    pub fn plot<S: AsRef<str>>(&self, window: TimeWindow, symbols: &[S]) -> Result<ChartArtifact> {
        let request = self.build_request(window, symbols)?;
        let artifact = self
            .renderer
            .render(&request)
            .map_err(|e| TrackerError::Render(e.into()))?;
        let labels: Vec<&str> = request.labels().collect();
        info!(
            symbols = ?labels,
            %window,
            path = ?artifact.path,
            "rendered chart"
        );
        Ok(artifact)
    }

    pub fn plot_one(&self, window: TimeWindow, first: &str) -> Result<ChartArtifact> {
        self.plot(window, &[first])
    }

    pub fn plot_two(&self, window: TimeWindow, first: &str, second: &str) -> Result<ChartArtifact> {
        self.plot(window, &[first, second])
    }

    pub fn plot_three(&self, window: TimeWindow, first: &str, second: &str, third: &str) -> Result<ChartArtifact> {
        self.plot(window, &[first, second, third])
    }
}
