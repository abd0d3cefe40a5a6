// File: crates/stock-core/src/lib.rs
// Summary: Core library entry point; daily close price model, CSV loading and window selection.

pub mod date;
pub mod error;
pub mod loader;
pub mod record;
pub mod request;
pub mod series;
pub mod source;
pub mod tracker;
pub mod window;

pub use date::{parse_date, CalendarDate};
pub use error::{Result, TrackerError};
pub use loader::{load_series, load_series_from_str, LoadOptions, Loader};
pub use record::{extract_close_price, extract_sample};
pub use request::{ChartArtifact, ChartRenderer, ChartRequest};
pub use series::{PriceSample, Series, Symbol};
pub use source::{DirectoryResolver, MemoryResolver, SourceResolver};
pub use tracker::StockTracker;
pub use window::{select_window, TimeWindow, WindowedSeries};
