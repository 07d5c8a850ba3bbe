//! Catalog Loader
//!
//! Reads the catalog CSV into memory. Columns are mapped by position, not by header name:
//!
//! | column | field            |
//! |--------|------------------|
//! | 0      | `id`             |
//! | 1      | `name`           |
//! | 2      | `price_per_unit` |
//! | 3      | `category`       |
//! | 4      | `sub_category`   |
//! | 5      | `container_type` |
//! | 6      | `margin`         |
//!
//! Numeric columns that fail to parse, or parse to `NaN` / infinity, become zero
//! and the row is kept.
//! Structural problems (unreadable file, ragged or short rows) abort the whole load.

use super::types::{Catalog, Record};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Number of positional columns every row must provide.
pub const REQUIRED_COLUMNS: usize = 7;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open catalog {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog row at line {line} has {fields} fields, expected at least 7")]
    ShortRow { line: u64, fields: usize },
}

/// Knobs for reading the source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Treat the first row as a header instead of a record.
    pub skip_header: bool,
}

impl Catalog {
    /// Opens `path` and loads every row. Logs the number of loaded records.
    pub fn load(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(file, options)?;
        tracing::info!("Loaded {} records from disk.", catalog.len());
        Ok(catalog)
    }

    /// Loads a catalog from any CSV byte stream, keeping row order.
    pub fn from_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(options.skip_header)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in reader.records() {
            records.push(parse_row(&row?)?);
        }

        Ok(Self::from_records(records))
    }
}

fn parse_row(row: &StringRecord) -> Result<Record, LoadError> {
    let line = row.position().map_or(0, |pos| pos.line());
    if row.len() < REQUIRED_COLUMNS {
        return Err(LoadError::ShortRow {
            line,
            fields: row.len(),
        });
    }

    Ok(Record {
        id: parse_or_zero(&row[0], "id", line),
        name: row[1].to_string(),
        price_per_unit: parse_float_or_zero(&row[2], "price_per_unit", line),
        category: row[3].to_string(),
        sub_category: row[4].to_string(),
        container_type: row[5].to_string(),
        margin: parse_float_or_zero(&row[6], "margin", line),
    })
}

fn parse_or_zero<T>(raw: &str, column: &str, line: u64) -> T
where
    T: FromStr + Default,
{
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!("Line {}: {} {:?} is not a number, using 0", line, column, raw);
            T::default()
        }
    }
}

/// Like `parse_or_zero`, but `NaN` and infinities also become 0 since JSON cannot carry them.
fn parse_float_or_zero(raw: &str, column: &str, line: u64) -> f64 {
    let value: f64 = parse_or_zero(raw, column, line);
    if value.is_finite() {
        value
    } else {
        tracing::debug!("Line {}: {} {:?} is not finite, using 0", line, column, raw);
        0.0
    }
}
