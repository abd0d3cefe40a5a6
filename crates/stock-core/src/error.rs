// File: crates/stock-core/src/error.rs
// Summary: Error taxonomy shared by parsing, loading, window selection and rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::date::CalendarDate;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Source could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed date, numeric field or CSV row. `line` is 1-based when known.
    #[error("{}{message}", line.map(|l| format!("line {l}: ")).unwrap_or_default())]
    Parse { line: Option<u64>, message: String },

    /// Invalid caller input: unknown window token, bad symbol, empty request.
    #[error("configuration error: {0}")]
    Config(String),

    /// Strict mode only: samples are not strictly ascending by date.
    #[error("{symbol}: sample {index} ({current}) does not follow {previous}")]
    Chronology {
        symbol: String,
        index: usize,
        previous: CalendarDate,
        current: CalendarDate,
    },

    #[error("render failed: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl TrackerError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse { line: None, message: message.into() }
    }

    /// Attach a source line number to a parse error that has none yet.
    pub(crate) fn at_line(self, line_no: u64) -> Self {
        match self {
            Self::Parse { line: None, message } => Self::Parse { line: Some(line_no), message },
            other => other,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
