// File: crates/chart-core/src/renderer.rs
// Summary: `ChartRenderer` implementation producing PNG charts from chart requests.

use std::path::PathBuf;

use anyhow::Result;
use stock_core::{ChartArtifact, ChartRenderer, ChartRequest};
use tracing::info;

use crate::chart::{write_png, Chart, RenderOptions};

/// Renders requests to PNG bytes; writes them to `output` when one is set.
pub struct PngChartRenderer {
    options: RenderOptions,
    output: Option<PathBuf>,
}

impl PngChartRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, output: None }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }
}

impl Default for PngChartRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, request: &ChartRequest) -> Result<ChartArtifact> {
        let chart = Chart::from_request(request, self.options.max_points);
        let bytes = chart.render_to_png_bytes(&self.options)?;
        if let Some(path) = &self.output {
            write_png(path, &bytes)?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
        }
        Ok(ChartArtifact { path: self.output.clone(), bytes })
    }
}
