// File: crates/stock-core/src/record.rs
// Summary: Extracts (date, close) from one `date,open,high,low,close,adj_close,volume` row.

use csv::StringRecord;

use crate::date::parse_date;
use crate::error::{Result, TrackerError};
use crate::series::PriceSample;

/// Column of the date in a daily OHLCV row.
pub const DATE_COLUMN: usize = 0;
/// Column of the unadjusted close (not `adj_close`).
pub const CLOSE_COLUMN: usize = 4;

/// Return the closing price of a raw CSV line.
pub fn extract_close_price(line: &str) -> Result<f64> {
    close_from_record(&split_line(line)?)
}

/// Return the (date, close) sample of a raw CSV line.
pub fn extract_sample(line: &str) -> Result<PriceSample> {
    sample_from_record(&split_line(line)?)
}

/// Same rules as [`extract_sample`] for a record already split by a CSV reader.
pub fn sample_from_record(record: &StringRecord) -> Result<PriceSample> {
    let raw_date = record
        .get(DATE_COLUMN)
        .ok_or_else(|| TrackerError::parse("empty row"))?;
    let date = parse_date(raw_date)?;
    let close = close_from_record(record)?;
    PriceSample::try_new(date, close)
}

fn close_from_record(record: &StringRecord) -> Result<f64> {
    let raw = record.get(CLOSE_COLUMN).ok_or_else(|| {
        TrackerError::parse(format!(
            "expected at least {} fields, found {}",
            CLOSE_COLUMN + 1,
            record.len()
        ))
    })?;
    let close: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TrackerError::parse(format!("invalid close price '{raw}'")))?;
    if !close.is_finite() || close < 0.0 {
        return Err(TrackerError::parse(format!("close price '{raw}' must be finite and >= 0")));
    }
    Ok(close)
}

fn split_line(line: &str) -> Result<StringRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    match rdr.read_record(&mut record) {
        Ok(true) => Ok(record),
        Ok(false) => Err(TrackerError::parse("empty row")),
        Err(e) => Err(TrackerError::parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;

    const ROW: &str = "2010-06-29,3.800000,5.000000,3.508000,4.778000,4.778000,93831500";

    #[test]
    fn close_is_fifth_column() {
        assert_eq!(extract_close_price(ROW).unwrap(), 4.778);
        assert_eq!(extract_close_price("2010-06-29,3.8,5.0,3.508,4.778,4.778,93831500").unwrap(), 4.778);
    }

    #[test]
    fn close_ignores_adjusted_column() {
        let line = "2020-01-02,10,11,9,10.5,7.25,1000\r\n";
        assert_eq!(extract_close_price(line).unwrap(), 10.5);
    }

    #[test]
    fn extracts_full_sample() {
        let s = extract_sample(ROW).unwrap();
        assert_eq!(s.date, CalendarDate::new(2010, 6, 29).unwrap());
        assert_eq!(s.close, 4.778);
    }

    #[test]
    fn five_fields_are_enough() {
        assert_eq!(extract_close_price("2010-06-29,1,2,0.5,1.5").unwrap(), 1.5);
    }

    #[test]
    fn short_rows_fail() {
        let err = extract_close_price("2010-06-29,3.8,5.0").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("found 3"), "{err}");
        assert!(extract_close_price("").unwrap_err().is_parse());
    }

    #[test]
    fn bad_numbers_fail() {
        for line in [
            "2010-06-29,1,2,3,null,4,5",
            "2010-06-29,1,2,3,,4,5",
            "2010-06-29,1,2,3,-1.0,4,5",
            "2010-06-29,1,2,3,inf,4,5",
        ] {
            assert!(extract_close_price(line).unwrap_err().is_parse(), "{line}");
        }
    }

    #[test]
    fn bad_date_fails_sample() {
        assert!(extract_sample("29/06/2010,1,2,3,4,5,6").unwrap_err().is_parse());
    }
}
