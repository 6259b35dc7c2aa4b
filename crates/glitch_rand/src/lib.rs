//! Random values inside inclusive ranges.
//!
//! Every helper takes the generator explicitly, so a test can pass a seeded
//! `StdRng` and get the same inputs on every run.

use rand::Rng;

/// An inclusive range with no values in it.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("empty range: min {min} is greater than max {max}")]
    Empty { min: f64, max: f64 },
}

/// Integer in `min..=max`.
pub fn range_int<R: Rng>(rng: &mut R, min: i32, max: i32) -> Result<i32, RangeError> {
    if min > max {
        return Err(RangeError::Empty {
            min: f64::from(min),
            max: f64::from(max),
        });
    }
    Ok(rng.gen_range(min..=max))
}

/// Float in `min..=max`. Non-finite bounds are rejected as empty.
///
/// Any pair of finite bounds is accepted, including spans wider than
/// `f32::MAX` such as `-f32::MAX..=f32::MAX`.
pub fn range_float<R: Rng>(rng: &mut R, min: f32, max: f32) -> Result<f32, RangeError> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(RangeError::Empty {
            min: f64::from(min),
            max: f64::from(max),
        });
    }
    // rand scales the span up slightly, so stay well clear of f32::MAX.
    let span = max - min;
    if span.is_finite() && span <= f32::MAX * 0.5 {
        return Ok(rng.gen_range(min..=max));
    }

    // Interpolate over the halved bounds to keep every step finite.
    let t: f32 = rng.gen();
    let (lo, hi) = (min * 0.5, max * 0.5);
    Ok(((lo + t * (hi - lo)) * 2.0).clamp(min, max))
}

/// Integer in `-max..=max` when `go_negative`, otherwise `0..=max`.
pub fn signed_range_int<R: Rng>(
    rng: &mut R,
    max: i32,
    go_negative: bool,
) -> Result<i32, RangeError> {
    let min = if go_negative { max.saturating_neg() } else { 0 };
    range_int(rng, min, max)
}

/// Float in `-max..=max` when `go_negative`, otherwise `0.0..=max`.
pub fn signed_range_float<R: Rng>(
    rng: &mut R,
    max: f32,
    go_negative: bool,
) -> Result<f32, RangeError> {
    let min = if go_negative { -max } else { 0.0 };
    range_float(rng, min, max)
}
