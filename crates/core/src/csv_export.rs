//! CSV export of a page of records.
//!
//! A column is a header plus a formatter mapping a record to a [`Cell`].
//! Text is always quoted with embedded quotes doubled, even when it looks
//! numeric (a unit named `101`). Ids and amounts are written bare. Dates are
//! re-rendered in the display format (or left empty when they do not
//! parse), and missing values become empty fields. Row order is preserved.
//! A row whose formatter or date rendering fails is dropped with a warning
//! instead of aborting the export.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::dates;
use crate::types::DbId;
use crate::yes_no::YesNo;

/// A single formatted value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Numeric identifier, written unquoted.
    Id(DbId),
    /// Free text, written quoted.
    Text(Option<String>),
    /// A date string in any layout accepted by [`dates::parse_flexible`].
    Date(Option<String>),
    /// Money, written with two decimals.
    Amount(Option<f64>),
    /// A Yes/No answer.
    Flag(Option<YesNo>),
}

impl Cell {
    pub fn text<S: AsRef<str>>(value: Option<S>) -> Self {
        Cell::Text(value.map(|s| s.as_ref().to_owned()))
    }

    pub fn date(value: Option<NaiveDate>) -> Self {
        Cell::Date(value.map(dates::to_iso))
    }

    /// Flag cell from a stored `"Yes"`/`"No"` string.
    pub fn flag_str(value: Option<&str>) -> Self {
        Cell::Flag(value.and_then(YesNo::normalize))
    }

    /// Render the finished CSV field, quoting included.
    fn render(&self, date_format: &str) -> Result<String, CellError> {
        let field = match self {
            Cell::Id(id) => id.to_string(),
            Cell::Amount(value) => value.map(|v| format!("{v:.2}")).unwrap_or_default(),
            Cell::Text(value) => value.as_deref().map(quote).unwrap_or_default(),
            Cell::Flag(value) => value.map(|f| quote(f.as_str())).unwrap_or_default(),
            Cell::Date(None) => String::new(),
            Cell::Date(Some(raw)) => {
                let shown = dates::normalize_to_display(raw, date_format).map_err(|_| {
                    CellError(format!("date '{raw}' cannot be rendered as '{date_format}'"))
                })?;
                if shown.is_empty() {
                    shown
                } else {
                    quote(&shown)
                }
            }
        };
        Ok(field)
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// A formatter failure for one cell; the whole row is dropped.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CellError(pub String);

type Formatter<R> = Box<dyn Fn(&R) -> Result<Cell, CellError> + Send + Sync>;

/// One output column.
pub struct ColumnSpec<R> {
    pub header: &'static str,
    formatter: Formatter<R>,
}

impl<R> ColumnSpec<R> {
    /// A column whose formatter may fail.
    pub fn try_new<F>(header: &'static str, formatter: F) -> Self
    where
        F: Fn(&R) -> Result<Cell, CellError> + Send + Sync + 'static,
    {
        Self {
            header,
            formatter: Box::new(formatter),
        }
    }

    /// A column whose formatter always succeeds.
    pub fn new<F>(header: &'static str, formatter: F) -> Self
    where
        F: Fn(&R) -> Cell + Send + Sync + 'static,
    {
        Self::try_new(header, move |record| Ok(formatter(record)))
    }

    pub fn format(&self, record: &R) -> Result<Cell, CellError> {
        (self.formatter)(record)
    }
}

impl<R> std::fmt::Debug for ColumnSpec<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec").field("header", &self.header).finish()
    }
}

/// Records that know their export columns.
pub trait CsvRecord: Sized {
    fn csv_columns() -> Vec<ColumnSpec<Self>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid date display format '{0}'")]
    InvalidDateFormat(String),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV writer: {0}")]
    Flush(String),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub csv: String,
    pub rows_written: usize,
    pub rows_dropped: usize,
}

/// Renders records to CSV text.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    date_format: String,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            date_format: dates::DEFAULT_DISPLAY_FORMAT.to_string(),
        }
    }
}

impl CsvExporter {
    /// Build an exporter rendering dates with `date_format`.
    pub fn new(date_format: &str) -> Result<Self, ExportError> {
        if !dates::is_valid_display_format(date_format) {
            return Err(ExportError::InvalidDateFormat(date_format.to_string()));
        }
        Ok(Self {
            date_format: date_format.to_string(),
        })
    }

    /// Export `records` with the given columns: a header row followed by one
    /// row per record that formats cleanly.
    pub fn export<R>(
        &self,
        records: &[R],
        columns: &[ColumnSpec<R>],
    ) -> Result<ExportOutcome, ExportError> {
        // Fields arrive already quoted from `Cell::render`.
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(vec![]);

        wtr.write_record(columns.iter().map(|c| quote(c.header)))?;

        let mut rows_written = 0;
        let mut rows_dropped = 0;
        for (position, record) in records.iter().enumerate() {
            match self.format_row(record, columns) {
                Ok(row) => {
                    wtr.write_record(&row)?;
                    rows_written += 1;
                }
                Err((header, err)) => {
                    tracing::warn!(position, column = header, error = %err, "Dropping CSV row");
                    rows_dropped += 1;
                }
            }
        }

        let data = wtr
            .into_inner()
            .map_err(|e| ExportError::Flush(e.error().to_string()))?;
        Ok(ExportOutcome {
            csv: String::from_utf8(data)?,
            rows_written,
            rows_dropped,
        })
    }

    /// Export a slice of records using their own column set.
    pub fn export_records<R: CsvRecord>(&self, records: &[R]) -> Result<ExportOutcome, ExportError> {
        self.export(records, &R::csv_columns())
    }

    fn format_row<R>(
        &self,
        record: &R,
        columns: &[ColumnSpec<R>],
    ) -> Result<Vec<String>, (&'static str, CellError)> {
        columns
            .iter()
            .map(|column| {
                column
                    .format(record)
                    .and_then(|cell| cell.render(&self.date_format))
                    .map_err(|err| (column.header, err))
            })
            .collect()
    }
}

/// Download name for an export: `<slug>-<YYYY-MM-DD>.csv`.
pub fn export_filename(slug: &str, date: NaiveDate) -> String {
    format!("{slug}-{}.csv", dates::to_iso(date))
}
