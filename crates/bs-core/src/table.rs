//! Markdown table rendering.

use std::fmt::Write;

use serde::Serialize;
use thiserror::Error;

use crate::record::Record;

/// Errors raised when building a table by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row's field count differs from the header count.
    #[error("row {row} has {found} fields, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A header row plus data rows, all the same width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, checking that every row is as wide as the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != headers.len())
        {
            return Err(TableError::RowWidth {
                row,
                expected: headers.len(),
                found,
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Serializes the table as markdown.
    ///
    /// Layout: `| a | b |`, then one `|----` per column, then one line per
    /// row. Every line ends with `\n`, with no trailing blank line.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        write_line(&mut output, &self.headers);
        for _ in &self.headers {
            output.push_str("|----");
        }
        output.push_str("|\n");

        for row in &self.rows {
            write_line(&mut output, row);
        }

        output
    }
}

fn write_line(output: &mut String, cells: &[String]) {
    for cell in cells {
        write!(output, "| {cell} ").unwrap();
    }
    output.push_str("|\n");
}

/// Formats seconds either in shortest round-trip form or with fixed precision.
pub fn format_seconds(seconds: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{seconds:.digits$}"),
        None => seconds.to_string(),
    }
}

/// Builds a two-column table with one `[name, seconds]` row per record.
pub fn to_markdown_table(records: &[Record], headers: &[String; 2], precision: Option<usize>) -> Table {
    let rows = records
        .iter()
        .map(|r| vec![r.name.clone(), format_seconds(r.seconds, precision)])
        .collect();

    Table {
        headers: headers.to_vec(),
        rows,
    }
}
