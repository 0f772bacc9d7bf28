//! Report command: table, charts, and a summary in one go.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use bs_core::{Report, Summary};

use crate::commands::chart::write_charts;
use crate::commands::util::{append_to_file, read_lines};
use crate::{ChartKind, Config};

/// Formats the summary block printed after a report is written.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();

    writeln!(output, "BOOT TIME SUMMARY").unwrap();
    writeln!(output, "─────────────────").unwrap();
    writeln!(output, "Units:    {}", summary.count).unwrap();
    writeln!(output, "Total:    {:.3}s", summary.total_seconds).unwrap();
    writeln!(output, "Mean:     {:.3}s", summary.mean_seconds).unwrap();
    if let Some(slowest) = &summary.slowest {
        writeln!(output, "Slowest:  {} ({:.3}s)", slowest.name, slowest.seconds).unwrap();
    }

    output
}

/// Runs the report command.
pub fn run<W: Write>(writer: &mut W, config: &Config, input: &Path, json: bool) -> Result<()> {
    let report_config = config.report_config()?;
    let lines = read_lines(input)?;
    let report = Report::generate(&lines, &report_config)
        .with_context(|| format!("failed to build report from {}", input.display()))?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let markdown_path = config.markdown_path();
    append_to_file(&markdown_path, &report.markdown())?;
    writeln!(writer, "Appended {} rows to {}", report.records.len(), markdown_path.display())?;

    for path in write_charts(config, &report.chart, ChartKind::Both)? {
        writeln!(writer, "Wrote {}", path.display())?;
    }

    writeln!(writer)?;
    write!(writer, "{}", format_summary(&report.summary))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bs_core::Record;
    use insta::assert_snapshot;

    #[test]
    fn test_format_summary() {
        let summary = Summary::from_records(&[
            Record {
                name: "slow.service".to_string(),
                seconds: 3.0,
            },
            Record {
                name: "mid.service".to_string(),
                seconds: 2.0,
            },
            Record {
                name: "fast.service".to_string(),
                seconds: 1.0,
            },
        ]);

        assert_snapshot!(format_summary(&summary), @r"
        BOOT TIME SUMMARY
        ─────────────────
        Units:    3
        Total:    6.000s
        Mean:     2.000s
        Slowest:  slow.service (3.000s)
        ");
    }

    #[test]
    fn test_report_writes_all_outputs() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("blame.txt");
        std::fs::write(&input, "3s\tslow.service\n2s\tmid.service\n1s\tfast.service\n").unwrap();
        let config = Config {
            output_dir: temp.path().join("out"),
            ..Config::default()
        };

        let mut output = Vec::new();
        run(&mut output, &config, &input, false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(config.markdown_path().exists());
        assert!(config.bar_chart_path().exists());
        assert!(config.pie_chart_path().exists());
        assert!(output.contains("Appended 3 rows to "));
        assert!(output.contains("Slowest:  slow.service (3.000s)"));
    }

    #[test]
    fn test_report_json_skips_files() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("blame.txt");
        std::fs::write(&input, "1s\ta.service\n").unwrap();
        let config = Config {
            output_dir: temp.path().join("out"),
            ..Config::default()
        };

        let mut output = Vec::new();
        run(&mut output, &config, &input, true).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["summary"]["count"], 1);
        assert_eq!(json["chart"]["labels"][0], "a");
        assert!(!config.output_dir.exists());
    }
}
