use crate::foundation::core::FigureSize;

/// Labels up to this many characters need no extra room.
const BASE_LABEL_CHARS: usize = 3;
/// Growth per character beyond [`BASE_LABEL_CHARS`].
const GROWTH_PER_CHAR: f64 = 0.17;

/// Grow `base` so the longest two-decimal label among `label_values` fits.
///
/// Every character beyond three adds 17% to both dimensions; the result is rounded
/// to whole units (ties to even). The base size is returned unchanged when every
/// label is three characters or shorter, so the result is never smaller than `base`.
pub fn fit_figure_size(base: FigureSize, label_values: &[f64]) -> FigureSize {
    let longest = label_values
        .iter()
        .map(|v| format!("{v:.2}").chars().count())
        .max()
        .unwrap_or(0);

    if longest <= BASE_LABEL_CHARS {
        return base;
    }

    let factor = 1.0 + GROWTH_PER_CHAR * (longest - BASE_LABEL_CHARS) as f64;
    FigureSize::new(
        (base.width * factor).round_ties_even(),
        (base.height * factor).round_ties_even(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scale/sizer.rs"]
mod tests;
