//! One-shot report generation from raw blame lines.

use serde::Serialize;
use thiserror::Error;

use crate::chart::{ChartArrays, ChartError};
use crate::record::{FieldSeparator, Record, RecordParseError, parse};
use crate::summary::Summary;
use crate::table::{Table, to_markdown_table};

/// Errors from any stage of report generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error(transparent)]
    Parse(#[from] RecordParseError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Everything report generation needs to know, passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Table headers, first for the unit column, second for the seconds column.
    pub headers: [String; 2],
    pub separator: FieldSeparator,
    /// Suffix stripped once from chart labels (e.g. `.service`).
    pub label_suffix: Option<String>,
    /// Decimal places for table values; `None` prints the shortest exact form.
    pub precision: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            headers: ["Unit".to_string(), "Time (s)".to_string()],
            separator: FieldSeparator::default(),
            label_suffix: Some(".service".to_string()),
            precision: None,
        }
    }
}

/// Parsed records and every artifact derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub records: Vec<Record>,
    pub table: Table,
    pub chart: ChartArrays,
    pub summary: Summary,
}

impl Report {
    /// Parses `lines` and builds the table, chart arrays and summary.
    pub fn generate<I, S>(lines: I, config: &ReportConfig) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = parse(lines, config.separator)?;
        Self::from_records(records, config)
    }

    /// Builds a report from records that were already parsed.
    pub fn from_records(records: Vec<Record>, config: &ReportConfig) -> Result<Self, ReportError> {
        let chart = ChartArrays::from_records(&records, config.label_suffix.as_deref())?;
        let table = to_markdown_table(&records, &config.headers, config.precision);
        let summary = Summary::from_records(&records);

        Ok(Self {
            records,
            table,
            chart,
            summary,
        })
    }

    /// Markdown text for the table.
    pub fn markdown(&self) -> String {
        self.table.to_markdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ParseErrorKind;
    use insta::assert_snapshot;

    const BLAME: &str = "\
5.123s\tplymouth-quit-wait.service
2.5s\tdev-sda1.device
891ms\tNetworkManager.service
12ms\tsys-kernel-debug.mount
";

    #[test]
    fn generates_all_artifacts() {
        let report = Report::generate(BLAME.lines(), &ReportConfig::default()).unwrap();

        assert_eq!(report.records.len(), 4);
        assert_eq!(report.table.rows().len(), 4);
        assert_eq!(report.chart.len(), 4);
        assert_eq!(report.summary.count, 4);
        assert_eq!(
            report.chart.labels(),
            ["plymouth-quit-wait", "dev-sda1.device", "NetworkManager", "sys-kernel-debug.mount"]
        );
        assert_snapshot!(report.markdown(), @r"
        | Unit | Time (s) |
        |----|----|
        | plymouth-quit-wait.service | 5.123 |
        | dev-sda1.device | 2.5 |
        | NetworkManager.service | 0.891 |
        | sys-kernel-debug.mount | 0.012 |
        ");
    }

    #[test]
    fn honours_config() {
        let config = ReportConfig {
            headers: ["Service".to_string(), "Seconds".to_string()],
            separator: FieldSeparator::Char(','),
            label_suffix: None,
            precision: Some(1),
        };
        let report = Report::generate(["1.26s,a.service", "240ms,b.service"], &config).unwrap();

        assert_eq!(report.chart.labels(), ["a.service", "b.service"]);
        assert_snapshot!(report.markdown(), @r"
        | Service | Seconds |
        |----|----|
        | a.service | 1.3 |
        | b.service | 0.2 |
        ");
    }

    #[test]
    fn parse_errors_propagate() {
        let err = Report::generate(["1s\ta.service", "oops"], &ReportConfig::default()).unwrap_err();
        let parse_err = match err {
            ReportError::Parse(e) => e,
            other => panic!("expected parse error, got {other:?}"),
        };
        assert_eq!(parse_err.line, 2);
        assert_eq!(parse_err.kind, ParseErrorKind::Arity { found: 1 });
    }

    #[test]
    fn zero_durations_cannot_be_charted() {
        let err = Report::generate(["0ms\ta.service", "0s\tb.service"], &ReportConfig::default()).unwrap_err();
        assert_eq!(err, ReportError::Chart(ChartError::EmptyOrZeroData));
    }

    #[test]
    fn empty_input_cannot_be_charted() {
        let err = Report::generate(["", ""], &ReportConfig::default()).unwrap_err();
        assert_eq!(err, ReportError::Chart(ChartError::EmptyOrZeroData));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = Report::generate(["2s\ta.service"], &ReportConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["records"][0]["name"], "a.service");
        assert_eq!(json["chart"]["labels"][0], "a");
        assert_eq!(json["summary"]["count"], 1);
        assert_eq!(json["table"]["rows"][0][1], "2");
    }
}
