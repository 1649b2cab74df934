//! Delimited numeric tables (CSV/TSV) to and from `Array2<f64>`.
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::math::Array2;

/// A numeric table plus its column names.
#[derive(Debug, Clone)]
pub struct Table {
    pub x: Array2<f64>,
    /// Header names, or `column_0..column_n` when the file has no header row.
    pub column_names: Vec<String>,
}

/// Configuration for reading delimited numeric tables.
#[derive(Debug, Clone)]
pub struct TableReaderConfig {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Optional subset of columns to load (in order). Requires headers.
    pub columns: Option<Vec<String>>,
}

impl Default for TableReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            columns: None,
        }
    }
}

impl TableReaderConfig {
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }
}

/// Read a comma-separated table with a header row.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_table(path, &TableReaderConfig::default())
}

pub fn read_table<P: AsRef<Path>>(path: P, config: &TableReaderConfig) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open table: {}", path.as_ref().display()))?;

    let headers: Option<Vec<String>> = if config.has_headers {
        let record = reader.headers().context("Failed to read header row")?;
        Some(record.iter().map(str::to_string).collect())
    } else {
        None
    };

    let selected = match (&config.columns, &headers) {
        (Some(names), Some(headers)) => Some(resolve_columns(headers, names)?),
        (Some(_), None) => {
            return Err(anyhow!("Selecting columns by name requires a header row"));
        }
        (None, _) => None,
    };

    let mut values = Vec::new();
    let mut n_cols: Option<usize> = selected
        .as_ref()
        .map(Vec::len)
        .or_else(|| headers.as_ref().map(Vec::len));
    let mut n_rows = 0usize;

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let indices: Vec<usize> = match &selected {
            Some(indices) => indices.clone(),
            None => (0..record.len()).collect(),
        };

        if selected.is_none() {
            match n_cols {
                Some(expected) if expected != record.len() => {
                    return Err(anyhow!(
                        "Row {} has {} columns, expected {}",
                        row_idx + 1,
                        record.len(),
                        expected
                    ));
                }
                Some(_) => {}
                None => n_cols = Some(record.len()),
            }
        }

        for idx in indices {
            let cell = record
                .get(idx)
                .ok_or_else(|| anyhow!("Missing value in column {} at row {}", idx, row_idx + 1))?;
            let parsed = cell.parse::<f64>().with_context(|| {
                format!(
                    "Invalid number '{}' in column '{}' at row {}",
                    cell,
                    column_label(headers.as_deref(), idx),
                    row_idx + 1
                )
            })?;
            values.push(parsed);
        }
        n_rows += 1;
    }

    let n_cols = n_cols.unwrap_or(0);
    let x = Array2::from_shape_vec((n_rows, n_cols), values)
        .context("Failed to build feature matrix")?;

    let column_names = match (&selected, &headers) {
        (Some(indices), Some(headers)) => indices.iter().map(|&i| headers[i].clone()).collect(),
        (None, Some(headers)) => headers.clone(),
        _ => (0..n_cols).map(|i| format!("column_{}", i)).collect(),
    };

    log::info!(
        "Read {} rows x {} columns from {}",
        n_rows,
        n_cols,
        path.as_ref().display()
    );
    Ok(Table { x, column_names })
}

/// Write `x` as a delimited table. A header row is written when `column_names` is given.
pub fn write_table<P: AsRef<Path>>(
    path: P,
    x: &Array2<f64>,
    column_names: Option<&[String]>,
    delimiter: u8,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(&path)
        .with_context(|| format!("Failed to create table: {}", path.as_ref().display()))?;

    if let Some(names) = column_names {
        if names.len() != x.ncols() {
            return Err(anyhow!(
                "Got {} column names for a table with {} columns",
                names.len(),
                x.ncols()
            ));
        }
        writer.write_record(names)?;
    }
    for row in x.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush table: {}", path.as_ref().display()))?;

    log::info!(
        "Wrote {} rows x {} columns to {}",
        x.nrows(),
        x.ncols(),
        path.as_ref().display()
    );
    Ok(())
}

fn resolve_columns(headers: &[String], names: &[String]) -> Result<Vec<usize>> {
    names
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow!("Missing column '{}'", name))
        })
        .collect()
}

fn column_label(headers: Option<&[String]>, idx: usize) -> String {
    headers
        .and_then(|h| h.get(idx).cloned())
        .unwrap_or_else(|| format!("column_{}", idx))
}
