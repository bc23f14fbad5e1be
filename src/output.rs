// src/output.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::{Serialize, Serializer as _};
use stair_ways_core::{CountReport, GridSpec, ScenarioOutcome, SequenceEntry, Verdict, VerificationReport};
use stair_ways_shared_kernel::{InfrastructureError, Result};

use crate::options::OutputFormat;

/// Rows that can be laid out as a table or CSV.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Tabular for CountReport {
    const HEADERS: &'static [&'static str] = &["STAIRS", "MAX_STEP", "STRATEGY", "WAYS"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.stairs.to_string(),
            self.max_step.to_string(),
            self.strategy.to_string(),
            self.ways.to_string(),
        ]
    }
}

impl Tabular for SequenceEntry {
    const HEADERS: &'static [&'static str] = &["STAIRS", "MAX_STEP", "WAYS"];

    fn cells(&self) -> Vec<String> {
        vec![self.stairs.to_string(), self.max_step.to_string(), self.ways.to_string()]
    }
}

impl Tabular for ScenarioOutcome {
    const HEADERS: &'static [&'static str] = &["#", "STAIRS", "MAX_STEP", "EXPECTED", "STRATEGY", "STATUS", "ACTUAL"];

    fn cells(&self) -> Vec<String> {
        let (status, actual) = match &self.verdict {
            Verdict::Passed => ("passed".to_string(), self.expected.to_string()),
            Verdict::Failed { actual } => ("FAILED".to_string(), actual.to_string()),
            Verdict::Skipped { limit } => (format!("skipped (limit {limit})"), "-".to_string()),
        };
        vec![
            self.index.to_string(),
            self.stairs.to_string(),
            self.max_step.to_string(),
            self.expected.to_string(),
            self.strategy.to_string(),
            status,
            actual,
        ]
    }
}

/// Opens the configured destination: a buffered file, or stdout.
///
/// # Errors
///
/// Returns `Err` when the output file cannot be created.
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| InfrastructureError::OutputError {
                message: format!("cannot create '{}'", path.display()),
                source: Some(Box::new(source)),
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(writer)
}

/// Emits a list of rows in `format`.
///
/// # Errors
///
/// Returns `Err` on write or serialization failure.
pub fn emit_rows<T, W>(rows: &[T], format: OutputFormat, out: &mut W) -> Result<()>
where
    T: Tabular + Serialize,
    W: Write + ?Sized,
{
    match format {
        OutputFormat::Table => write_table(T::HEADERS, rows.iter().map(T::cells), out)?,
        OutputFormat::Csv => write_csv(T::HEADERS, rows.iter().map(T::cells), out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for row in rows {
                serde_json::to_writer(&mut *out, row)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Yaml => write_yaml(rows, out)?,
    }
    Ok(())
}

/// Emits rows as they are produced. CSV, JSON and JSONL never hold more than
/// one row; the table and YAML layouts need every row before writing.
///
/// # Errors
///
/// Returns `Err` on write or serialization failure.
pub fn emit_stream<T, I, W>(rows: I, format: OutputFormat, out: &mut W) -> Result<()>
where
    T: Tabular + Serialize,
    I: IntoIterator<Item = T>,
    W: Write + ?Sized,
{
    let rows = rows.into_iter();
    match format {
        OutputFormat::Csv => write_csv(T::HEADERS, rows.map(|row| row.cells()), out)?,
        OutputFormat::Jsonl => {
            for row in rows {
                serde_json::to_writer(&mut *out, &row)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            let mut serializer = serde_json::Serializer::pretty(&mut *out);
            (&mut serializer).collect_seq(rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table | OutputFormat::Yaml => {
            let rows: Vec<T> = rows.collect();
            emit_rows(&rows, format, out)?;
        }
    }
    Ok(())
}

/// Emits a single count. JSON output is an object rather than a one-element array.
///
/// # Errors
///
/// Returns `Err` on write or serialization failure.
pub fn emit_count<W: Write + ?Sized>(report: &CountReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => write_yaml(report, out),
        _ => emit_rows(std::slice::from_ref(report), format, out),
    }
}

#[derive(Serialize)]
struct VerificationDocument<'a> {
    grid: &'a GridSpec,
    clean: bool,
    #[serde(flatten)]
    report: &'a VerificationReport,
}

/// Emits a verification report: a summary plus one row per disagreement.
///
/// # Errors
///
/// Returns `Err` on write or serialization failure.
pub fn emit_verification<W: Write + ?Sized>(
    report: &VerificationReport,
    grid: &GridSpec,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let document = VerificationDocument { grid, clean: report.is_clean(), report };
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => write_yaml(&document, out)?,
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = findings(report);
            if format == OutputFormat::Csv {
                write_csv(FINDING_HEADERS, rows.into_iter(), out)?;
            } else {
                writeln!(
                    out,
                    "grid: stairs 0..={} × max_step 1..={}",
                    grid.max_stairs, grid.max_step
                )?;
                writeln!(
                    out,
                    "cells: {}  compared: {}  skipped evaluations: {}  saturated widths: {}",
                    report.cells, report.compared, report.skipped, report.saturated
                )?;
                if report.is_clean() {
                    writeln!(out, "result: all strategies agree; counts are non-decreasing in max_step")?;
                } else {
                    writeln!(out)?;
                    write_table(FINDING_HEADERS, rows.into_iter(), out)?;
                }
            }
        }
    }
    Ok(())
}

const FINDING_HEADERS: &[&str] = &["KIND", "STAIRS", "MAX_STEP", "DETAIL"];

fn findings(report: &VerificationReport) -> Vec<Vec<String>> {
    let mismatches = report.mismatches.iter().map(|m| {
        let detail = m
            .results
            .iter()
            .map(|r| format!("{}={}", r.strategy, r.ways))
            .collect::<Vec<_>>()
            .join(" ");
        vec!["mismatch".to_string(), m.stairs.to_string(), m.max_step.to_string(), detail]
    });
    let violations = report.violations.iter().map(|v| {
        vec![
            "monotonicity".to_string(),
            v.stairs.to_string(),
            v.max_step.to_string(),
            format!("{} < {}", v.current, v.previous),
        ]
    });
    mismatches.chain(violations).collect()
}

fn write_table<W, I>(headers: &[&str], rows: I, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
    I: Iterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", pad_line(headers.iter().copied(), &widths))?;
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(out, "{}", "-".repeat(total))?;
    for row in &rows {
        writeln!(out, "{}", pad_line(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

fn write_csv<W, I>(headers: &[&str], rows: I, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
    I: Iterator<Item = Vec<String>>,
{
    writeln!(out, "{}", headers.iter().map(|h| h.to_ascii_lowercase()).collect::<Vec<_>>().join(","))?;
    for row in rows {
        let escaped: Vec<String> = row.iter().map(|cell| escape_csv(cell)).collect();
        writeln!(out, "{}", escaped.join(","))?;
    }
    Ok(())
}

fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(feature = "yaml")]
fn write_yaml<T: Serialize + ?Sized, W: Write + ?Sized>(value: &T, out: &mut W) -> Result<()> {
    let yaml = serde_yaml::to_string(value)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml<T: Serialize + ?Sized, W: Write + ?Sized>(_value: &T, _out: &mut W) -> Result<()> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use stair_ways_core::{Limits, Strategy, run_scenarios, sequence, sequence_entries, verify_grid};
    use stair_ways_shared_kernel::{MaxStep, StairCount, WayCount};

    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("renders");
        String::from_utf8(buf).expect("utf-8")
    }

    fn report() -> CountReport {
        CountReport {
            stairs: StairCount::new(7),
            max_step: MaxStep::new(2).unwrap(),
            strategy: Strategy::Fibonacci,
            ways: WayCount::from(21),
        }
    }

    #[test]
    fn count_table_is_right_aligned() {
        let text = render(|buf| emit_count(&report(), OutputFormat::Table, buf));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "STAIRS  MAX_STEP   STRATEGY  WAYS");
        assert_eq!(lines[2], "     7         2  fibonacci    21");
    }

    #[test]
    fn count_json_is_an_object_with_string_ways() {
        let text = render(|buf| emit_count(&report(), OutputFormat::Json, buf));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ways"], "21");
        assert_eq!(value["strategy"], "fibonacci");
        assert_eq!(value["max_step"], 2);
    }

    #[test]
    fn sequence_jsonl_has_one_line_per_height() {
        let rows = sequence(StairCount::new(4), MaxStep::new(2).unwrap());
        let text = render(|buf| emit_rows(&rows, OutputFormat::Jsonl, buf));
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().last().unwrap().contains("\"ways\":\"5\""));
    }

    #[test]
    fn sequence_csv_has_lowercase_header() {
        let rows = sequence(StairCount::new(2), MaxStep::new(2).unwrap());
        let text = render(|buf| emit_rows(&rows, OutputFormat::Csv, buf));
        assert_eq!(text, "stairs,max_step,ways\n0,2,0\n1,2,1\n2,2,2\n");
    }

    #[test]
    fn scenario_table_marks_skips() {
        let outcomes = run_scenarios(&Limits::default());
        let text = render(|buf| emit_rows(&outcomes, OutputFormat::Table, buf));
        assert!(text.contains("skipped (limit 25)"));
        assert!(!text.contains("FAILED"));
    }

    #[test]
    fn clean_verification_summary() {
        let grid = GridSpec { max_stairs: StairCount::new(6), max_step: MaxStep::new(3).unwrap() };
        let report = verify_grid(&grid, &Limits::default()).unwrap();
        let text = render(|buf| emit_verification(&report, &grid, OutputFormat::Table, buf));
        assert!(text.contains("cells: 20"), "{text}");
        assert!(text.contains("saturated widths: 1"), "{text}");
        assert!(text.contains("all strategies agree"));

        let json = render(|buf| emit_verification(&report, &grid, OutputFormat::Json, buf));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["clean"], true);
        assert_eq!(value["grid"]["max_step"], 3);
    }

    #[test]
    fn streamed_rows_match_collected_rows() {
        let max_step = MaxStep::new(3).unwrap();
        for format in [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Table] {
            let collected = sequence(StairCount::new(12), max_step);
            let expected = render(|buf| emit_rows(&collected, format, buf));
            let streamed = render(|buf| emit_stream(sequence_entries(StairCount::new(12), max_step), format, buf));
            assert_eq!(streamed, expected, "{format}");
        }
    }

    #[test]
    fn csv_escapes_separators() {
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("plain"), "plain");
    }
}
