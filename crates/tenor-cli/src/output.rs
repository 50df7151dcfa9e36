//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use tenor_analytics::tools::{CurveRows, ToolOutput};
use tenor_core::{LabeledResult, LabeledValue};
use tenor_export::ExportedFiles;

use crate::cli::OutputFormat;

/// JSON shape of a command result.
#[derive(Serialize)]
struct Report<'a> {
    result: &'a LabeledResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a ExportedFiles>,
}

/// Formats and prints a tool result in the requested format.
pub fn print_output(
    title: &str,
    output: &ToolOutput,
    files: Option<&ExportedFiles>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(title, output, files, quiet),
        OutputFormat::Json => print_json(&output.result, files),
        OutputFormat::Csv => print_csv(output),
        OutputFormat::Minimal => print_minimal(output),
    }
}

/// Prints scalars as a metric table and any curve as a row table.
fn print_table(
    title: &str,
    output: &ToolOutput,
    files: Option<&ExportedFiles>,
    quiet: bool,
) -> anyhow::Result<()> {
    if !quiet {
        print_header(title);
    }

    let metrics: Vec<KeyValue> = output
        .result
        .iter()
        .filter_map(|(_, entry)| match &entry.value {
            LabeledValue::Scalar(v) => Some(KeyValue::new(&entry.label, format_number(*v))),
            LabeledValue::Series(values) if output.curve.is_none() => Some(KeyValue::new(
                &entry.label,
                values.iter().map(|v| format_number(*v)).collect::<Vec<_>>().join(", "),
            )),
            LabeledValue::Series(_) => None,
        })
        .collect();

    if !metrics.is_empty() {
        let table = Table::new(&metrics)
            .with(Style::rounded())
            .with(Modify::new(Columns::first()).with(Alignment::left()))
            .to_string();
        println!("{}", table);
    }

    if let Some(rows) = &output.curve {
        println!("{}", curve_table(rows));
    }

    if let Some(files) = files {
        if !quiet {
            print_success(&format!("CSV written to {}", files.csv.display()));
            print_success(&format!("XLSX written to {}", files.xlsx.display()));
        }
    }
    Ok(())
}

fn curve_table(rows: &CurveRows) -> String {
    let mut builder = Builder::default();
    builder.push_record(rows.header().iter().copied());
    for record in rows.records() {
        builder.push_record(record.into_iter().map(format_number));
    }
    builder.build().with(Style::rounded()).to_string()
}

/// Prints the labeled result as JSON.
fn print_json(result: &LabeledResult, files: Option<&ExportedFiles>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Report { result, files })?);
    Ok(())
}

/// Prints curve rows, or `key,label,value` rows for scalar results, as CSV.
fn print_csv(output: &ToolOutput) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    if let Some(rows) = &output.curve {
        wtr.write_record(rows.header())?;
        for record in rows.records() {
            wtr.write_record(record.iter().map(f64::to_string))?;
        }
    } else {
        wtr.write_record(["key", "label", "value"])?;
        for (key, entry) in output.result.iter() {
            if let LabeledValue::Scalar(v) = entry.value {
                let value = v.to_string();
                wtr.write_record([key, entry.label.as_str(), value.as_str()])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Prints bare values: one scalar per line, or comma-joined curve rows.
fn print_minimal(output: &ToolOutput) -> anyhow::Result<()> {
    if let Some(rows) = &output.curve {
        for record in rows.records() {
            let line: Vec<String> = record.iter().map(f64::to_string).collect();
            println!("{}", line.join(","));
        }
    } else {
        for (_, entry) in output.result.iter() {
            if let LabeledValue::Scalar(v) = entry.value {
                println!("{v}");
            }
        }
    }
    Ok(())
}

/// Formats a number: rates to 8 places, larger amounts to 4.
pub fn format_number(value: f64) -> String {
    if value.abs() < 1.0 {
        format!("{value:.8}")
    } else {
        format!("{value:.4}")
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0512932944), "0.05129329");
        assert_eq!(format_number(984.2519685), "984.2520");
        assert_eq!(format_number(-0.5), "-0.50000000");
    }
}
