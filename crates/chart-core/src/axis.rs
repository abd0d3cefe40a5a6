// File: crates/chart-core/src/axis.rs
// Summary: Axis model (label, range, tick formatting) and tick spacing helper.

use chrono::NaiveDate;

/// How tick values are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Values are day numbers, 0001-01-01 being day 1.
    Date,
    /// Plain numbers, two decimals.
    Value,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, kind: AxisKind) -> Self {
        Self { label: label.into(), min: 0.0, max: 1.0, kind }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// `count` evenly spaced tick values across the range, ends included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }

    pub fn tick_label(&self, v: f64) -> String {
        match self.kind {
            AxisKind::Date => {
                let days = v.round() as i64;
                i32::try_from(days)
                    .ok()
                    .and_then(NaiveDate::from_num_days_from_ce_opt)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }
            AxisKind::Value => format!("{v:.2}"),
        }
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
