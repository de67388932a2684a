//! In-memory tabular dataset parsed from uploaded CSV bytes.

use tracing::debug;

use crate::error::DataError;

/// A parsed CSV table: ordered column headers plus row-major text cells.
///
/// All cells are kept as text; the model reads the preview as prose, so
/// there is nothing to gain from sniffing numeric types here. Rows are
/// guaranteed rectangular: the parser rejects records whose length differs
/// from the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabularData {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularData {
    /// Parses CSV bytes into a table. The first record is the header row.
    ///
    /// # Errors
    /// - [`DataError::Csv`] for quoting errors, non-UTF-8 cells, or rows
    ///   whose field count differs from the header
    /// - [`DataError::EmptyCsv`] when the input has no header row
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new().from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(DataError::EmptyCsv);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            columns = headers.len(),
            rows = rows.len(),
            "parsed CSV upload"
        );

        Ok(Self { headers, rows })
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Renders the header plus at most the first `limit` data rows as a
    /// fixed-width text table, all columns included.
    ///
    /// Column width is the widest cell within the previewed window, so the
    /// output stays compact no matter how wide the full table is. Columns
    /// are separated by two spaces; the last column is not padded.
    pub fn preview(&self, limit: usize) -> String {
        let rows = &self.rows[..self.rows.len().min(limit)];

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &self.headers, &widths);
        for row in rows {
            out.push('\n');
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        if i + 1 < cells.len() {
            for _ in 0..widths[i].saturating_sub(cell.chars().count()) {
                out.push(' ');
            }
        }
    }
}
