use crate::data::dataset::Dataset;

/// Descriptive statistics of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSummary {
    /// Number of non-NaN values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator); NaN for a single value.
    pub std: f64,
    /// Smallest value.
    pub min: f64,
    /// First quartile.
    pub q25: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q75: f64,
    /// Largest value.
    pub max: f64,
}

impl ColumnSummary {
    /// Statistics of a column with no usable values: every field but `count` is NaN.
    const EMPTY: Self = Self {
        count: 0,
        mean: f64::NAN,
        std: f64::NAN,
        min: f64::NAN,
        q25: f64::NAN,
        median: f64::NAN,
        q75: f64::NAN,
        max: f64::NAN,
    };

    /// NaN entries are missing values and are left out of every statistic.
    fn from_values(mut values: Vec<f64>) -> Self {
        values.retain(|v| !v.is_nan());
        if values.is_empty() {
            return Self::EMPTY;
        }
        values.sort_by(f64::total_cmp);
        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std = if count > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            f64::NAN
        };

        Self {
            count,
            mean,
            std,
            min: values[0],
            q25: quantile_sorted(&values, 0.25),
            median: quantile_sorted(&values, 0.5),
            q75: quantile_sorted(&values, 0.75),
            max: values[count - 1],
        }
    }
}

/// Linear-interpolation quantile of an ascending, non-empty slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Per-column summary of a [`Dataset`], derived once per dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    columns: Vec<ColumnSummary>,
}

impl Summary {
    /// Compute the summary of every column.
    pub fn of(data: &Dataset) -> Self {
        let columns = (0..data.dim())
            .map(|c| ColumnSummary::from_values(data.column(c).collect()))
            .collect();
        Self { columns }
    }

    /// Number of summarized columns.
    pub fn dim(&self) -> usize {
        self.columns.len()
    }

    /// Statistics of column `col`.
    pub fn column(&self, col: usize) -> &ColumnSummary {
        &self.columns[col]
    }

    /// All column statistics in order.
    pub fn columns(&self) -> &[ColumnSummary] {
        &self.columns
    }

    /// Per-column minimums.
    pub fn mins(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.min).collect()
    }

    /// Per-column maximums.
    pub fn maxs(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.max).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/summary.rs"]
mod tests;
