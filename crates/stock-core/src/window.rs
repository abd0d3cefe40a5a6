// File: crates/stock-core/src/window.rs
// Summary: Named time windows and trailing-count selection over a loaded series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::{Result, TrackerError};
use crate::series::Series;

/// Trailing period to plot. Each maps to a fixed sample count, not calendar arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeWindow {
    Max,
    FiveYears,
    FourYears,
    ThreeYears,
    TwoYears,
    OneYear,
    OneMonth,
    FifteenDays,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 8] = [
        TimeWindow::Max,
        TimeWindow::FiveYears,
        TimeWindow::FourYears,
        TimeWindow::ThreeYears,
        TimeWindow::TwoYears,
        TimeWindow::OneYear,
        TimeWindow::OneMonth,
        TimeWindow::FifteenDays,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            TimeWindow::Max => "max",
            TimeWindow::FiveYears => "5_years",
            TimeWindow::FourYears => "4_years",
            TimeWindow::ThreeYears => "3_years",
            TimeWindow::TwoYears => "2_years",
            TimeWindow::OneYear => "1_year",
            TimeWindow::OneMonth => "1_month",
            TimeWindow::FifteenDays => "15_days",
        }
    }

    /// Number of trailing samples; `None` means the whole series.
    pub const fn trailing_count(self) -> Option<usize> {
        match self {
            TimeWindow::Max => None,
            TimeWindow::FiveYears => Some(365 * 5),
            TimeWindow::FourYears => Some(365 * 4),
            TimeWindow::ThreeYears => Some(365 * 3),
            TimeWindow::TwoYears => Some(365 * 2),
            TimeWindow::OneYear => Some(365),
            TimeWindow::OneMonth => Some(30),
            TimeWindow::FifteenDays => Some(15),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        TimeWindow::ALL
            .into_iter()
            .find(|w| w.token() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = TimeWindow::ALL.iter().map(|w| w.token()).collect();
                TrackerError::Config(format!("unknown time window '{s}' (expected one of: {})", known.join(", ")))
            })
    }
}

impl TryFrom<String> for TimeWindow {
    type Error = TrackerError;
    fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<TimeWindow> for String {
    fn from(w: TimeWindow) -> Self { w.token().to_string() }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.token()) }
}

/// Trailing slice of one series as parallel date/price vectors.
/// Contract: `dates.len() == prices.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowedSeries {
    pub label: String,
    pub dates: Vec<CalendarDate>,
    pub prices: Vec<f64>,
}

impl WindowedSeries {
    pub fn len(&self) -> usize { self.dates.len() }
    pub fn is_empty(&self) -> bool { self.dates.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (CalendarDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.prices.iter().copied())
    }
}

/// Last `window.trailing_count()` samples of `series`, in original order.
/// A count larger than the series yields the whole series.
pub fn select_window(series: &Series, window: TimeWindow) -> WindowedSeries {
    let samples = series.samples();
    let start = match window.trailing_count() {
        Some(count) => samples.len().saturating_sub(count),
        None => 0,
    };
    let tail = &samples[start..];
    debug!(symbol = %series.symbol(), %window, total = samples.len(), selected = tail.len(), "selected window");
    WindowedSeries {
        label: series.symbol().to_string(),
        dates: tail.iter().map(|s| s.date).collect(),
        prices: tail.iter().map(|s| s.close).collect(),
    }
}
