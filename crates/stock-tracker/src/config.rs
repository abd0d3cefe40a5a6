// File: crates/stock-tracker/src/config.rs
// Summary: YAML configuration with defaults, plus command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use chart_core::{theme, RenderOptions};
use serde::{Deserialize, Serialize};
use stock_core::{LoadOptions, TimeWindow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Directory holding `<symbol>.csv` files.
    pub data_dir: PathBuf,
    /// Chart destination; derived from symbols and window when unset.
    pub output: Option<PathBuf>,
    pub theme: String,
    pub width: i32,
    pub height: i32,
    pub max_points: usize,
    /// Reject files whose dates are not strictly ascending.
    pub strict: bool,
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output: None,
            theme: "dark".to_string(),
            width: chart_core::types::WIDTH,
            height: chart_core::types::HEIGHT,
            max_points: chart_core::types::MAX_POINTS,
            strict: false,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: TrackerConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0 && self.height > 0, "chart size must be positive, got {}x{}", self.width, self.height);
        ensure!(self.max_points >= 3, "max_points must be at least 3, got {}", self.max_points);
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: theme::find(&self.theme),
            max_points: self.max_points,
            ..RenderOptions::default()
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { strict: self.strict }
    }

    /// Explicit output, or `target/out/chart_<SYM>_..._<window>.png`.
    pub fn output_path(&self, window: TimeWindow, symbols: &[String]) -> PathBuf {
        if let Some(out) = &self.output {
            return out.clone();
        }
        let mut name = String::from("chart");
        for s in symbols {
            name.push('_');
            name.push_str(s);
        }
        name.push('_');
        name.push_str(window.token());
        PathBuf::from("target/out").join(format!("{name}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_defaults() {
        let cfg = TrackerConfig::from_yaml("{}").unwrap();
        assert_eq!(cfg, TrackerConfig::default());
    }

    #[test]
    fn partial_yaml_overrides_fields() {
        let cfg = TrackerConfig::from_yaml(
            "data_dir: data/prices\ntheme: light\nstrict: true\nwidth: 800\n",
        )
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("data/prices"));
        assert!(cfg.strict);
        assert_eq!(cfg.width, 800);
        assert_eq!(cfg.height, chart_core::types::HEIGHT);
        assert_eq!(cfg.render_options().theme.name, "light");
        assert!(cfg.load_options().strict);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(TrackerConfig::from_yaml("window: 1_year\n").is_err());
        assert!(TrackerConfig::from_yaml("width: 0\n").is_err());
        assert!(TrackerConfig::from_yaml("max_points: 2\n").is_err());
        assert!(TrackerConfig::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.yaml");
        fs::write(&path, "output: out/cmp.png\n").unwrap();
        let cfg = TrackerConfig::load(&path).unwrap();
        assert_eq!(cfg.output, Some(PathBuf::from("out/cmp.png")));
        assert!(TrackerConfig::load(dir.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn derived_output_name() {
        let cfg = TrackerConfig::default();
        let syms = vec!["AAPL".to_string(), "MSFT".to_string()];
        assert_eq!(
            cfg.output_path(TimeWindow::OneMonth, &syms),
            PathBuf::from("target/out/chart_AAPL_MSFT_1_month.png")
        );
        let fixed = TrackerConfig { output: Some("x.png".into()), ..TrackerConfig::default() };
        assert_eq!(fixed.output_path(TimeWindow::Max, &syms), PathBuf::from("x.png"));
    }
}
