//! Table command: render the markdown table and append it to the report file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use bs_core::to_markdown_table;

use crate::Config;
use crate::commands::util::{append_to_file, read_lines};

pub fn run<W: Write>(writer: &mut W, config: &Config, input: &Path, stdout: bool) -> Result<()> {
    let report_config = config.report_config()?;
    let lines = read_lines(input)?;
    let records = bs_core::parse(&lines, report_config.separator)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let table = to_markdown_table(&records, &report_config.headers, report_config.precision);
    let markdown = table.to_markdown();

    if stdout {
        write!(writer, "{markdown}")?;
        return Ok(());
    }

    let path = config.markdown_path();
    append_to_file(&path, &markdown)?;
    writeln!(
        writer,
        "Appended {} rows to {}",
        table.rows().len(),
        path.display()
    )?;
    Ok(())
}
