use crate::{
    data::summary::Summary,
    scale::round::{quantize_hundredths, round_down, round_up},
};

/// Per-axis display bounds derived from a [`Summary`].
#[derive(Clone, Debug, PartialEq)]
pub struct AxisBounds {
    /// Lower bound per column.
    pub mins: Vec<f64>,
    /// Upper bound per column.
    pub maxs: Vec<f64>,
}

impl AxisBounds {
    /// Lower and upper bound of column `col`.
    pub fn axis(&self, col: usize) -> (f64, f64) {
        (self.mins[col], self.maxs[col])
    }

    /// Mins followed by maxs: the values whose labels size the figure.
    pub fn label_values(&self) -> Vec<f64> {
        self.mins.iter().chain(&self.maxs).copied().collect()
    }
}

/// Column minimums rounded down and maximums rounded up to quarter units, after
/// quantizing each to hundredths.
pub fn axis_bounds(summary: &Summary) -> AxisBounds {
    AxisBounds {
        mins: summary
            .columns()
            .iter()
            .map(|c| round_down(quantize_hundredths(c.min)))
            .collect(),
        maxs: summary
            .columns()
            .iter()
            .map(|c| round_up(quantize_hundredths(c.max)))
            .collect(),
    }
}

/// One shared range for every axis: the smallest minimum and the largest maximum.
pub fn global_bounds(bounds: &AxisBounds) -> (f64, f64) {
    let lo = bounds.mins.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = bounds.maxs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (lo, hi)
}

#[cfg(test)]
#[path = "../../tests/unit/scale/bounds.rs"]
mod tests;
