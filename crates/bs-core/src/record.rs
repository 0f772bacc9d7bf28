//! Parsing of `systemd-analyze blame` lines into records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duration::{DurationError, normalize};

/// A single unit and the time it took to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unit name exactly as it appeared in the input (e.g. `foo.service`).
    pub name: String,

    /// Normalized duration in seconds. Always finite and non-negative.
    pub seconds: f64,
}

/// How a line is split into its duration and name fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSeparator {
    /// Split on every occurrence of a single character.
    Char(char),
    /// Split on runs of whitespace. Fits lines with one duration token before
    /// the name, such as `5.123s foo.service`. Multi-part durations like
    /// `1min 2.345s` split into too many fields and are rejected.
    Whitespace,
}

impl FieldSeparator {
    /// Tab, the default separator.
    pub const TAB: Self = Self::Char('\t');

    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Char(c) => line.split(c).collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        }
    }
}

impl Default for FieldSeparator {
    fn default() -> Self {
        Self::TAB
    }
}

/// Why a particular line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line did not split into exactly two fields.
    #[error("expected 2 fields, found {found}")]
    Arity { found: usize },

    /// The name field was empty.
    #[error("unit name is empty")]
    EmptyName,

    /// The duration field could not be normalized.
    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// A line that could not be turned into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("line {line}: {kind} (content: {content:?})")]
pub struct RecordParseError {
    /// 1-based index of the offending line in the input.
    pub line: usize,

    /// The raw line as it was read.
    pub content: String,

    pub kind: ParseErrorKind,
}

fn parse_line(raw: &str, separator: FieldSeparator) -> Result<Record, ParseErrorKind> {
    let fields = separator.split(raw.trim());
    let &[token, name] = fields.as_slice() else {
        return Err(ParseErrorKind::Arity {
            found: fields.len(),
        });
    };

    if name.is_empty() {
        return Err(ParseErrorKind::EmptyName);
    }

    Ok(Record {
        name: name.to_string(),
        seconds: normalize(token)?,
    })
}

/// Parses raw lines into records, keeping input order.
///
/// Blank lines are skipped. The first bad line aborts the whole parse.
pub fn parse<I, S>(lines: I, separator: FieldSeparator) -> Result<Vec<Record>, RecordParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let raw = line.as_ref();
        if raw.trim().is_empty() {
            continue;
        }

        let record = parse_line(raw, separator).map_err(|kind| RecordParseError {
            line: index + 1,
            content: raw.to_string(),
            kind,
        })?;
        records.push(record);
    }

    tracing::debug!(count = records.len(), ?separator, "parsed blame records");
    Ok(records)
}

/// Parses tab-separated lines, the format `systemd-analyze blame` is usually
/// post-processed into.
pub fn parse_tab_separated<I, S>(lines: I) -> Result<Vec<Record>, RecordParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse(lines, FieldSeparator::TAB)
}
