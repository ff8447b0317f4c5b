//! Tabular output as CSV or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// A single output value. Missing numbers are written as an empty CSV cell
/// or JSON `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Num(f64),
}

impl Cell {
    fn to_csv_field(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Num(v) if v.is_nan() => String::new(),
            Cell::Num(v) => v.to_string(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Int(i) => serializer.serialize_i64(*i),
            Cell::Num(v) if v.is_finite() => serializer.serialize_f64(*v),
            Cell::Num(_) => serializer.serialize_none(),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Num(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// Column headers with rows of cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; it must have one cell per header.
    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    fn write_csv<W: Write>(&self, w: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(Cell::to_csv_field))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, mut w: W) -> Result<()> {
        let records: Vec<serde_json::Map<String, serde_json::Value>> = self
            .rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(h, c)| serde_json::to_value(c).map(|v| (h.clone(), v)))
                    .collect::<Result<_, serde_json::Error>>()
            })
            .collect::<Result<_, _>>()?;
        serde_json::to_writer_pretty(&mut w, &records)?;
        writeln!(w)?;
        Ok(())
    }

    /// Writes the table to `path`, or to standard output when `path` is `None`.
    pub fn write(&self, path: Option<&Path>, format: OutputFormat) -> Result<()> {
        let sink: Box<dyn Write> = match path {
            Some(p) => Box::new(BufWriter::new(
                File::create(p).with_context(|| format!("failed to create output: {}", p.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };
        match format {
            OutputFormat::Csv => self.write_csv(sink),
            OutputFormat::Json => self.write_json(sink),
        }
        .context("failed to write output")
    }
}
