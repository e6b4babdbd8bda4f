//! Console output formatting.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table,
};

use crate::cli::OutputFormat;
use crate::records::OutputRow;

/// Renders the result rows to stdout in the chosen format.
pub fn print_output(rows: &[OutputRow], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(rows),
        OutputFormat::Csv => print_csv(rows),
    }
}

fn print_table(rows: &[OutputRow]) -> anyhow::Result<()> {
    if rows.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

fn print_json(rows: &[OutputRow]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn print_csv(rows: &[OutputRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
