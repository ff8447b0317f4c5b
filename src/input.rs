//! CSV readers for daily series and site weights.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use flowstat_runoff::WeightsMatrix;
use flowstat_series::Series;

use crate::config::{IoToml, RunoffToml};

/// Reads a single daily series from `path`.
///
/// Empty value cells are missing values. When `[io].qualifier_column` is set
/// the column must exist and is carried into the series; with
/// `approved_only` the series is then filtered to approved rows.
pub fn read_series(path: &Path, io: &IoToml) -> Result<Series> {
    let (header, records) = read_records(path)?;
    let date_idx = column_index(&header, &io.date_column, path)?;
    let value_idx = column_index(&header, &io.value_column, path)?;
    let qualifier_idx = qualifier_index(&header, io, path)?;

    let mut dates = Vec::with_capacity(records.len());
    let mut values = Vec::with_capacity(records.len());
    let mut qualifiers = Vec::new();
    for (line, record) in records.iter().enumerate() {
        dates.push(parse_date(record, date_idx, &io.date_format, line)?);
        values.push(parse_value(record, value_idx, line)?);
        if let Some(q) = qualifier_idx {
            qualifiers.push(record.get(q).unwrap_or("").trim().to_string());
        }
    }

    let series = match qualifier_idx {
        Some(_) => Series::with_qualifiers(dates, values, qualifiers),
        None => Series::new(dates, values),
    }
    .with_context(|| format!("invalid series in {}", path.display()))?;
    info!(path = %path.display(), n_obs = series.len(), "series loaded");
    keep_approved(series, io)
}

/// Reads one or more site series from `path`.
///
/// When the file has the configured site column, rows are grouped by site;
/// otherwise the whole file is one site named after the file stem. Qualifiers
/// and `approved_only` apply to every site.
pub fn read_site_series(path: &Path, io: &IoToml) -> Result<Vec<(String, Series)>> {
    let (header, records) = read_records(path)?;
    let Some(site_idx) = header.iter().position(|h| h == io.site_column) else {
        let site = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .with_context(|| format!("cannot name site from path: {}", path.display()))?;
        return Ok(vec![(site, read_series(path, io)?)]);
    };
    let date_idx = column_index(&header, &io.date_column, path)?;
    let value_idx = column_index(&header, &io.value_column, path)?;
    let qualifier_idx = qualifier_index(&header, io, path)?;

    let mut by_site: BTreeMap<String, SiteColumns> = BTreeMap::new();
    for (line, record) in records.iter().enumerate() {
        let site = record.get(site_idx).unwrap_or("").trim().to_string();
        let columns = by_site.entry(site).or_default();
        columns
            .dates
            .push(parse_date(record, date_idx, &io.date_format, line)?);
        columns.values.push(parse_value(record, value_idx, line)?);
        if let Some(q) = qualifier_idx {
            columns
                .qualifiers
                .push(record.get(q).unwrap_or("").trim().to_string());
        }
    }

    by_site
        .into_iter()
        .map(|(site, c)| {
            let series = match qualifier_idx {
                Some(_) => Series::with_qualifiers(c.dates, c.values, c.qualifiers),
                None => Series::new(c.dates, c.values),
            }
            .with_context(|| format!("invalid series for site {site} in {}", path.display()))?;
            let series = keep_approved(series, io)
                .with_context(|| format!("site {site} in {}", path.display()))?;
            Ok((site, series))
        })
        .collect()
}

#[derive(Default)]
struct SiteColumns {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    qualifiers: Vec<String>,
}

fn qualifier_index(header: &StringRecord, io: &IoToml, path: &Path) -> Result<Option<usize>> {
    io.qualifier_column
        .as_deref()
        .map(|name| column_index(header, name, path))
        .transpose()
}

/// Applies `[io].approved_only`.
fn keep_approved(series: Series, io: &IoToml) -> Result<Series> {
    if !io.approved_only {
        return Ok(series);
    }
    let approved = series
        .filter_approved()
        .context("approved_only requires [io].qualifier_column")?;
    info!(n_obs = approved.len(), "kept approved observations");
    Ok(approved)
}

/// Reads a weights CSV of (site, geography, weight) rows.
pub fn read_weights(path: &Path, runoff: &RunoffToml) -> Result<WeightsMatrix> {
    let (header, records) = read_records(path)?;
    let site_idx = column_index(&header, &runoff.weights_site_column, path)?;
    let geoid_idx = column_index(&header, &runoff.weights_geoid_column, path)?;
    let weight_idx = column_index(&header, &runoff.weights_value_column, path)?;

    let mut weights = WeightsMatrix::new();
    for (line, record) in records.iter().enumerate() {
        let site = record.get(site_idx).unwrap_or("").trim();
        let geoid = record.get(geoid_idx).unwrap_or("").trim();
        weights.insert(site, geoid, parse_value(record, weight_idx, line)?);
    }
    Ok(weights)
}

fn read_records(path: &Path) -> Result<(StringRecord, Vec<StringRecord>)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("failed to open CSV: {}", path.display()))?;
    let header = rdr
        .headers()
        .with_context(|| format!("failed to read CSV header: {}", path.display()))?
        .clone();
    let records = rdr
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read CSV: {}", path.display()))?;
    Ok((header, records))
}

fn column_index(header: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    match header.iter().position(|h| h == name) {
        Some(i) => Ok(i),
        None => bail!("column {name:?} not found in {}", path.display()),
    }
}

/// `line` is the zero-based record index; messages report the file line,
/// counting the header.
fn parse_date(record: &StringRecord, idx: usize, format: &str, line: usize) -> Result<NaiveDate> {
    let raw = record.get(idx).unwrap_or("").trim();
    NaiveDate::parse_from_str(raw, format)
        .with_context(|| format!("line {}: invalid date {raw:?}", line + 2))
}

fn parse_value(record: &StringRecord, idx: usize, line: usize) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("").trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>()
        .with_context(|| format!("line {}: invalid number {raw:?}", line + 2))
}
