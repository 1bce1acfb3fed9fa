// src/validation/mod.rs

//! Invariant checks for amplitude vectors and probability distributions.

use crate::core::{AmplitudeVector, NORM_TOLERANCE, RENORMALIZE_THRESHOLD, RadarError, RadarResult};
use tracing::warn;

/// Checks that the state is normalized (sum of squared magnitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `AmplitudeVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `NORM_TOLERANCE` (1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(RadarError::NumericInstability)` otherwise.
pub fn check_normalization(state: &AmplitudeVector, tolerance: Option<f64>) -> RadarResult<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance || !norm_sq.is_finite() {
        Err(RadarError::NumericInstability { total: norm_sq, tolerance: effective_tolerance })
    } else {
        Ok(())
    }
}

/// Brings a probability list back to a total of 1.
///
/// If the total drifted by more than `RENORMALIZE_THRESHOLD`, every entry is
/// divided by the total once. The result must then sum to 1 within
/// `NORM_TOLERANCE`; there is no second attempt.
///
/// # Errors
/// Returns `RadarError::NumericInstability` if the total is not a positive
/// finite number, if any entry is negative or not finite, or if the
/// renormalized total is still off.
pub fn renormalize(probabilities: &mut [f64]) -> RadarResult<()> {
    let total: f64 = probabilities.iter().sum();
    let invalid_entry = probabilities.iter().any(|p| !p.is_finite() || *p < 0.0);
    if invalid_entry || !total.is_finite() || total <= 0.0 {
        return Err(RadarError::NumericInstability { total, tolerance: NORM_TOLERANCE });
    }

    if (total - 1.0).abs() <= RENORMALIZE_THRESHOLD {
        return Ok(());
    }

    warn!(total, "probability mass drifted from 1, renormalizing");
    for p in probabilities.iter_mut() {
        *p /= total;
    }

    let renormalized: f64 = probabilities.iter().sum();
    if (renormalized - 1.0).abs() > NORM_TOLERANCE {
        return Err(RadarError::NumericInstability { total: renormalized, tolerance: NORM_TOLERANCE });
    }
    Ok(())
}
