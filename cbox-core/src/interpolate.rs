//! Piecewise-linear interpolation
//!
//! Used to take coarsely sampled projections (one value per decade) down to
//! annual resolution.

use crate::errors::{CBoxError, CBoxResult};
use crate::timeseries::FloatValue;

/// Subdivide each interval between consecutive knots into `steps` points.
///
/// For every pair of knots $(v_i, v_{i+1})$ this emits the values at the
/// fractional positions $j / steps$ for $j = 0 \ldots steps - 1$:
///
/// $$ v_i (1 - j/steps) + v_{i+1} (j/steps) $$
///
/// The final knot is never emitted on its own, so `n` knots produce
/// `(n - 1) * steps` values.
pub fn subdivide_linear(knots: &[FloatValue], steps: usize) -> CBoxResult<Vec<FloatValue>> {
    if knots.len() < 2 {
        return Err(CBoxError::InvalidArgument(format!(
            "linear interpolation requires at least 2 knots, got {}",
            knots.len()
        )));
    }
    if steps == 0 {
        return Err(CBoxError::InvalidArgument(
            "number of interpolation steps must be positive".to_string(),
        ));
    }

    Ok(subdivide_intervals(knots, steps))
}

/// Unchecked form of [`subdivide_linear`] for tables whose shape is fixed at
/// compile time. Fewer than two knots or zero steps give an empty vector.
pub(crate) fn subdivide_intervals(knots: &[FloatValue], steps: usize) -> Vec<FloatValue> {
    knots
        .windows(2)
        .flat_map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            (0..steps).map(move |j| {
                let fraction = j as FloatValue / steps as FloatValue;
                start * (1.0 - fraction) + end * fraction
            })
        })
        .collect()
}
