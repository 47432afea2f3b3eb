use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{VizError, VizResult};

/// An immutable table of numeric rows sharing one column count.
///
/// Rows are stored row-major in one buffer. A dataset always has at least one row and
/// one column.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    columns: usize,
    values: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from rows; every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> VizResult<Self> {
        let Some(first) = rows.first() else {
            return Err(VizError::data("dataset has no rows"));
        };
        let columns = first.len();
        if columns == 0 {
            return Err(VizError::data("dataset rows have no columns"));
        }

        let mut values = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != columns {
                return Err(VizError::data(format!(
                    "row {i} has {} columns, expected {columns}",
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Self { columns, values })
    }

    /// Number of columns (objectives).
    pub fn dim(&self) -> usize {
        self.columns
    }

    /// Number of rows (solutions).
    pub fn len(&self) -> usize {
        self.values.len() / self.columns
    }

    /// Always false for a constructed dataset; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.columns..(i + 1) * self.columns]
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.columns)
    }

    /// Iterate the values of column `col` in row order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(col).step_by(self.columns).copied()
    }

    /// Minimum and maximum over every cell.
    pub fn extent(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// A new dataset with `f` applied to every cell.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            columns: self.columns,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}

/// Parse whitespace-delimited numeric text. The first line is a header and is skipped;
/// blank lines are ignored.
pub fn parse_dataset(text: &str) -> VizResult<Dataset> {
    let mut rows = Vec::new();
    let mut columns = None;

    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let row = trimmed
            .split_whitespace()
            .map(|field| parse_field(field, line_no))
            .collect::<VizResult<Vec<f64>>>()?;

        match columns {
            None => columns = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(VizError::data(format!(
                    "line {line_no}: expected {n} columns, got {}",
                    row.len()
                )));
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Dataset::from_rows(rows)
}

fn parse_field(field: &str, line_no: usize) -> VizResult<f64> {
    // Some exporters write U+2212 for negative values.
    let normalized;
    let field = if field.contains('\u{2212}') {
        normalized = field.replace('\u{2212}', "-");
        normalized.as_str()
    } else {
        field
    };
    field
        .parse::<f64>()
        .map_err(|_| VizError::data(format!("line {line_no}: invalid number '{field}'")))
}

/// Read and parse a dataset file.
#[tracing::instrument]
pub fn read_dataset(path: &Path) -> VizResult<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read dataset '{}'", path.display()))?;
    let data = parse_dataset(&text).map_err(|e| match e {
        VizError::Data(msg) => VizError::data(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(rows = data.len(), dim = data.dim(), "loaded dataset");
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/data/dataset.rs"]
mod tests;
