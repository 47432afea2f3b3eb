//! Rounding helpers shared by bound derivation and tick location.
//!
//! The lookup tables below are hand-tuned breakpoints. They are kept as ordered
//! `(threshold, output)` pairs; charts depend on the exact values for their look.

/// `round_down` table: the greatest threshold not above the fractional part wins.
const ROUND_DOWN_TABLE: [(f64, f64); 4] = [(0.1, 0.0), (0.251, 0.25), (0.51, 0.5), (0.751, 0.75)];

/// `round_up` table: the threshold nearest to the fractional part wins (first on ties).
const ROUND_UP_TABLE: [(f64, f64); 8] = [
    (0.0, 0.0),
    (0.1, 0.25),
    (0.25, 0.25),
    (0.26, 0.5),
    (0.5, 0.5),
    (0.51, 0.75),
    (0.75, 0.75),
    (0.76, 1.0),
];

/// Round `num` down to a quarter-unit gradation of its integer part.
///
/// `round_down(1.3) == 1.25`, `round_down(1.05) == 1.0`.
pub fn round_down(num: f64) -> f64 {
    let integer = num.floor();
    let frac = num - integer;
    let offset = ROUND_DOWN_TABLE
        .iter()
        .filter(|(threshold, _)| *threshold <= frac)
        .last()
        .map_or(0.0, |&(_, out)| out);
    integer + offset
}

/// Round `num` to the table value nearest to its fractional part.
///
/// `round_up(1.3) == 1.5`. Fractional parts close to zero map down to the integer.
pub fn round_up(num: f64) -> f64 {
    let integer = num.floor();
    let frac = num - integer;
    let mut best = ROUND_UP_TABLE[0];
    for entry in &ROUND_UP_TABLE[1..] {
        if (entry.0 - frac).abs() < (best.0 - frac).abs() {
            best = *entry;
        }
    }
    integer + best.1
}

/// Round `x` to the nearest multiple of `base`, then to two decimals.
///
/// A zero base yields 0 and an overflowing quotient yields +infinity. Ties round to
/// even at both steps.
pub fn round_to_base(x: f64, base: f64) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    let quotient = x / base;
    if quotient.is_nan() {
        return f64::NAN;
    }
    if quotient.is_infinite() {
        return f64::INFINITY;
    }
    round_decimals(base * quotient.round_ties_even(), 2)
}

/// Round to `places` decimals using the exact decimal expansion of `v`.
pub(crate) fn round_decimals(v: f64, places: usize) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{v:.places$}").parse().unwrap_or(v)
}

/// Quantize `x` to hundredths from its shortest decimal representation, ties to even.
///
/// `0.125` becomes `0.12` and `0.135` becomes `0.14`, which is what a decimal quantize
/// of the printed value gives. Values of magnitude 1e15 and above are returned as is.
pub fn quantize_hundredths(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= 1e15 {
        return x;
    }

    let repr = x.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let Ok(int_value) = int_part.parse::<u64>() else {
        return x;
    };

    let frac = frac_part.as_bytes();
    let digit = |i: usize| frac.get(i).map_or(0, |b| u64::from(b - b'0'));
    let mut cents = int_value * 100 + digit(0) * 10 + digit(1);

    if let Some(&first_dropped) = frac.get(2) {
        let rest_nonzero = frac[3..].iter().any(|&b| b != b'0');
        let round_up = match first_dropped.cmp(&b'5') {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => rest_nonzero || cents % 2 == 1,
        };
        if round_up {
            cents += 1;
        }
    }

    (cents as f64 / 100.0).copysign(x)
}

#[cfg(test)]
#[path = "../../tests/unit/scale/round.rs"]
mod tests;
