// File: crates/stock-core/src/series.rs
// Summary: Symbol token, price samples and the per-symbol ordered series store.
// Notes:
// - Samples are kept in source order. Ascending, duplicate-free dates are a
//   precondition of the input; `check_chronology` verifies it on request.

use std::fmt;
use std::str::FromStr;

use crate::date::CalendarDate;
use crate::error::{Result, TrackerError};

/// Stock identifier; doubles as chart label and CSV file stem.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Accept a non-empty token with no whitespace and no path separators.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TrackerError::Config("empty stock symbol".into()));
        }
        if raw.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') || raw == "." || raw == ".." {
            return Err(TrackerError::Config(format!("invalid stock symbol '{raw}'")));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for Symbol {
    type Err = TrackerError;
    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str { &self.0 }
}

/// One daily close. Contract: `close` is finite and >= 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceSample {
    pub date: CalendarDate,
    pub close: f64,
}

impl PriceSample {
    /// Construct a sample enforcing the non-negative, finite close invariant.
    pub fn try_new(date: CalendarDate, close: f64) -> Result<Self> {
        if !close.is_finite() {
            return Err(TrackerError::parse(format!("close price {close} on {date} is not finite")));
        }
        if close < 0.0 {
            return Err(TrackerError::parse(format!("close price {close} on {date} is negative")));
        }
        Ok(Self { date, close })
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    symbol: Symbol,
    samples: Vec<PriceSample>,
}

impl Series {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol, samples: Vec::new() }
    }

    pub fn with_samples(symbol: Symbol, samples: Vec<PriceSample>) -> Self {
        Self { symbol, samples }
    }

    /// Append at the end. No reordering and no de-duplication.
    pub fn push(&mut self, date: CalendarDate, close: f64) -> Result<()> {
        self.samples.push(PriceSample::try_new(date, close)?);
        Ok(())
    }

    pub fn push_sample(&mut self, sample: PriceSample) {
        self.samples.push(sample);
    }

    pub fn symbol(&self) -> &Symbol { &self.symbol }
    pub fn samples(&self) -> &[PriceSample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn first(&self) -> Option<&PriceSample> { self.samples.first() }
    pub fn last(&self) -> Option<&PriceSample> { self.samples.last() }

    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.samples.iter().map(|s| s.date)
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.close)
    }

    /// Verify dates are strictly ascending (no disorder, no duplicates).
    pub fn check_chronology(&self) -> Result<()> {
        for (i, pair) in self.samples.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(TrackerError::Chronology {
                    symbol: self.symbol.to_string(),
                    index: i + 1,
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }
        Ok(())
    }
}
