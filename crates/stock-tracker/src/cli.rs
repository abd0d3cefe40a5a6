// File: crates/stock-tracker/src/cli.rs
// Summary: Hand-rolled argument parsing: options first, then `<window> <SYMBOL>...`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use stock_core::TimeWindow;

use crate::config::TrackerConfig;

pub const USAGE: &str = "\
usage: stock-tracker [options] <window> <SYMBOL>...

windows: max, 5_years, 4_years, 3_years, 2_years, 1_year, 1_month, 15_days

options:
  --config FILE     YAML configuration
  --data-dir DIR    directory holding <SYMBOL>.csv files
  --out FILE        output PNG path
  --theme NAME      dark | light
  --width N         chart width in pixels
  --height N        chart height in pixels
  --strict          reject files whose dates are not strictly ascending
  -h, --help        show this help";

#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub theme: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub strict: bool,
    pub help: bool,
    /// Always set unless `help` is.
    pub window: Option<TimeWindow>,
    pub symbols: Vec<String>,
}

impl CliArgs {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = CliArgs::default();
        let mut positional = Vec::new();
        let mut it = args.into_iter().map(Into::into);

        while let Some(arg) = it.next() {
            let mut value = |name: &str| it.next().with_context(|| format!("{name} needs a value"));
            match arg.as_str() {
                "-h" | "--help" => out.help = true,
                "--strict" => out.strict = true,
                "--config" => out.config = Some(value("--config")?.into()),
                "--data-dir" => out.data_dir = Some(value("--data-dir")?.into()),
                "--out" => out.out = Some(value("--out")?.into()),
                "--theme" => out.theme = Some(value("--theme")?),
                "--width" => out.width = Some(parse_px(&value("--width")?)?),
                "--height" => out.height = Some(parse_px(&value("--height")?)?),
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                _ => positional.push(arg),
            }
        }

        if out.help {
            return Ok(out);
        }
        let mut positional = positional.into_iter();
        let Some(window) = positional.next() else {
            bail!("a time window and at least one stock symbol are required");
        };
        out.window = Some(window.parse::<TimeWindow>()?);
        out.symbols = positional.collect();
        if out.symbols.is_empty() {
            bail!("at least one stock symbol is required");
        }
        Ok(out)
    }

    /// Command-line values take precedence over the file.
    pub fn apply(&self, config: &mut TrackerConfig) {
        if let Some(dir) = &self.data_dir { config.data_dir = dir.clone(); }
        if let Some(out) = &self.out { config.output = Some(out.clone()); }
        if let Some(theme) = &self.theme { config.theme = theme.clone(); }
        if let Some(w) = self.width { config.width = w; }
        if let Some(h) = self.height { config.height = h; }
        if self.strict { config.strict = true; }
    }
}

fn parse_px(raw: &str) -> Result<i32> {
    raw.parse().with_context(|| format!("'{raw}' is not a pixel size"))
}
