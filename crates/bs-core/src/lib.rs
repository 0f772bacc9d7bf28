//! Core logic for boot-time statistics.
//!
//! This crate turns the text printed by `systemd-analyze blame` into:
//! - Records: unit names paired with durations normalized to seconds
//! - Tables: markdown tables ready to append to a report file
//! - Chart data: parallel label/value arrays plus pie-slice labelling rules
//!
//! Nothing here performs I/O. Callers read the input, pass the lines in, and
//! persist whatever comes back.

pub mod chart;
pub mod duration;
pub mod record;
mod report;
mod summary;
pub mod table;

pub use chart::{
    ChartArrays, ChartError, PieSlice, conditional_annotation, conditional_label, to_chart_arrays,
};
pub use duration::{DurationError, normalize};
pub use record::{FieldSeparator, ParseErrorKind, Record, RecordParseError, parse, parse_tab_separated};
pub use report::{Report, ReportConfig, ReportError};
pub use summary::Summary;
pub use table::{Table, TableError, to_markdown_table};
