//! Chart command: render bar and pie charts as SVG files.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bs_core::ChartArrays;

use crate::commands::util::{read_lines, write_file};
use crate::{ChartKind, Config, svg};

pub fn run<W: Write>(writer: &mut W, config: &Config, input: &Path, kind: ChartKind) -> Result<()> {
    let report_config = config.report_config()?;
    let lines = read_lines(input)?;
    let records = bs_core::parse(&lines, report_config.separator)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    let chart = ChartArrays::from_records(&records, report_config.label_suffix.as_deref())
        .with_context(|| format!("cannot chart {}", input.display()))?;

    for path in write_charts(config, &chart, kind)? {
        writeln!(writer, "Wrote {}", path.display())?;
    }
    Ok(())
}

/// Renders the selected charts into the output directory.
pub fn write_charts(config: &Config, chart: &ChartArrays, kind: ChartKind) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if kind.includes_bar() {
        let path = config.bar_chart_path();
        write_file(&path, &svg::bar_chart(chart, &config.bar_chart)?)?;
        written.push(path);
    }
    if kind.includes_pie() {
        let path = config.pie_chart_path();
        write_file(&path, &svg::pie_chart(chart, &config.pie_chart)?)?;
        written.push(path);
    }

    Ok(written)
}
