// File: crates/stock-core/src/loader.rs
// Summary: Builds a `Series` from CSV text: header skipped, rows parsed in order, fail-fast.

use std::io::Read;
use std::path::PathBuf;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::record::sample_from_record;
use crate::series::{Series, Symbol};
use crate::source::SourceResolver;

/// Parse a whole CSV source for `symbol`.
///
/// The first non-blank line is the header and is discarded; blank lines are skipped.
/// The header must still be valid UTF-8.
/// The first malformed row aborts the load; no partial series is returned.
pub fn load_series<R: Read>(symbol: Symbol, reader: R) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    rdr.headers().map_err(|e| csv_error(&symbol, e))?;

    let mut series = Series::new(symbol);
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(csv_error(series.symbol(), e)),
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let sample = sample_from_record(&record).map_err(|e| e.at_line(line))?;
        series.push_sample(sample);
    }

    if series.is_empty() {
        warn!(symbol = %series.symbol(), "source has no data rows");
    }
    Ok(series)
}

pub fn load_series_from_str(symbol: Symbol, csv: &str) -> Result<Series> {
    load_series(symbol, csv.as_bytes())
}

fn csv_error(symbol: &Symbol, e: csv::Error) -> TrackerError {
    let line = e.position().map(|p| p.line());
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(source) => TrackerError::Io { path: PathBuf::from(symbol.as_str()), source },
        _ => TrackerError::Parse { line, message },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject series whose dates are not strictly ascending.
    pub strict: bool,
}

/// Loads series through a [`SourceResolver`]. Every call reads its source fresh.
pub struct Loader<R> {
    resolver: R,
    options: LoadOptions,
}

impl<R: SourceResolver> Loader<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver, options: LoadOptions::default() }
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn load(&self, symbol: &Symbol) -> Result<Series> {
        // whole source is in memory before parsing starts
        let bytes = self.resolver.read_source(symbol)?;
        let series = load_series(symbol.clone(), bytes.as_slice())?;
        if self.options.strict {
            series.check_chronology()?;
        }
        debug!(symbol = %symbol, samples = series.len(), "loaded series");
        Ok(series)
    }

    pub fn load_all(&self, symbols: &[Symbol]) -> Result<Vec<Series>> {
        symbols.iter().map(|s| self.load(s)).collect()
    }
}
