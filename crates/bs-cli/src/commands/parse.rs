//! Parse command: print the normalized records.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use bs_core::Record;

use crate::Config;
use crate::commands::util::read_lines;

pub fn run<W: Write>(writer: &mut W, config: &Config, input: &Path, json: bool) -> Result<()> {
    let separator = config.separator()?;
    let lines = read_lines(input)?;
    let records = bs_core::parse(&lines, separator)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    write_records(writer, &records, json)
}

/// Writes records one per line as `name<TAB>seconds`, or as a JSON array.
pub fn write_records<W: Write>(writer: &mut W, records: &[Record], json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(records)?)?;
        return Ok(());
    }

    for record in records {
        writeln!(writer, "{}\t{}", record.name, record.seconds)?;
    }
    Ok(())
}
