use crate::scale::round::round_to_base;

/// Upper bound on the number of major ticks on one axis.
pub const MAX_TICKS: usize = 10;
/// Tick count forced when the step table yields too few ticks.
pub const MIN_TICKS: usize = 5;

/// Step table for small ranges: `(max range, step)`, first match wins.
const SMALL_RANGE_STEPS: [(f64, f64); 3] = [(0.05, 0.01), (0.25, 0.05), (0.5, 0.1)];
/// Larger ranges aim for this many intervals before rounding the step.
const TARGET_INTERVALS: f64 = 10.0;
const LARGE_STEP_BASE: f64 = 0.5;
const MIN_LARGE_STEP: f64 = 0.05;

/// Major tick positions of one axis, plus the step they were generated with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    /// Step between consecutive generated ticks (before any down-sampling).
    pub step: f64,
    /// Tick positions in axis order.
    pub values: Vec<f64>,
}

impl TickSet {
    /// A tick set with no ticks; renderers skip tick drawing for it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of ticks.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate tick positions.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Labels as shown on an axis (shortest representation, e.g. `0.5`, `1.25`, `2.0`).
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(|v| format!("{v:?}")).collect()
    }
}

/// Step size for a value range from the fixed threshold table.
pub fn tick_step(range: f64) -> f64 {
    for (max_range, step) in SMALL_RANGE_STEPS {
        if range <= max_range {
            return step;
        }
    }
    let step = round_to_base(range / TARGET_INTERVALS, LARGE_STEP_BASE);
    if step < MIN_LARGE_STEP {
        MIN_LARGE_STEP
    } else {
        step
    }
}

fn usable_step(step: f64) -> bool {
    step.is_finite() && step != 0.0
}

/// Aesthetically spaced tick positions covering `[min_val, max_val]`.
///
/// Returns an empty set when the range is NaN or infinite. A zero-width range still
/// gets [`MIN_TICKS`] ticks, all at 0.
pub fn locate_ticks(min_val: f64, max_val: f64) -> TickSet {
    let range = max_val - min_val;

    let mut step = tick_step(range);
    if !usable_step(step) {
        return TickSet::empty();
    }

    let raw_count = (range / step).round_ties_even() + 1.0;
    let count = if raw_count < MIN_TICKS as f64 {
        // A zero-width range keeps step 0; `round_to_base` then yields 0 for each tick.
        step = range / (MIN_TICKS - 1) as f64;
        MIN_TICKS
    } else {
        raw_count as usize
    };

    let mut values: Vec<f64> = (0..count)
        .map(|i| round_to_base(min_val + i as f64 * step, step))
        .collect();

    while values.len() > MAX_TICKS {
        values = values.into_iter().step_by(2).collect();
    }

    TickSet { step, values }
}

/// Minor tick positions splitting every major interval into `subdivisions` parts.
///
/// Minor ticks are extrapolated past the first and last major tick while they stay
/// within `range`. Major positions are excluded.
pub fn minor_ticks(major: &[f64], subdivisions: usize, range: (f64, f64)) -> Vec<f64> {
    if major.len() < 2 || subdivisions < 2 || !range.0.is_finite() || !range.1.is_finite() {
        return vec![];
    }
    let interval = major[1] - major[0];
    if !(interval > 0.0) {
        return vec![];
    }
    let step = interval / subdivisions as f64;
    let eps = step * 1e-6;
    let (lo, hi) = range;

    let mut minors = Vec::new();

    let mut pos = major[0] - step;
    while pos >= lo - eps {
        minors.push(pos);
        pos -= step;
    }

    for pair in major.windows(2) {
        let local = (pair[1] - pair[0]) / subdivisions as f64;
        for i in 1..subdivisions {
            minors.push(pair[0] + local * i as f64);
        }
    }

    if let Some(&last) = major.last() {
        let mut pos = last + step;
        while pos <= hi + eps {
            minors.push(pos);
            pos += step;
        }
    }

    minors.sort_by(f64::total_cmp);
    minors
}

#[cfg(test)]
#[path = "../../tests/unit/scale/ticks.rs"]
mod tests;
