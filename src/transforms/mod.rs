// src/transforms/mod.rs

//! The three state transforms a line scan is made of.
//!
//! - [`initialize_uniform`]: equal superposition over every basis index.
//! - [`apply_diagonal`]: the oracle, an exact entrywise sign flip.
//! - [`apply_walsh_hadamard`]: a Hadamard on every qubit, i.e. the interference step.
//!
//! Each one leaves the state normalized.

use crate::core::{AmplitudeVector, RadarError, RadarResult};
use crate::oracle::PhaseVector;
use num_complex::Complex;
use num_traits::Zero;
use tracing::trace;

/// Creates the uniform superposition on `num_qubits` qubits: every amplitude
/// is `1/sqrt(2^n)`.
///
/// Equivalent to a Hadamard on every qubit of |0...0⟩, computed directly.
pub fn initialize_uniform(num_qubits: u32) -> AmplitudeVector {
    let mut state = AmplitudeVector::zero_state(num_qubits);
    let amplitude = Complex::new(1.0 / (state.dim() as f64).sqrt(), 0.0);
    for amp in state.amplitudes_mut() {
        *amp = amplitude;
    }
    trace!(num_qubits, %state, "uniform superposition");
    state
}

/// Multiplies every amplitude by the matching oracle sign.
///
/// # Errors
/// Returns `RadarError::DimensionMismatch` if the diagonal and the state differ in length.
pub fn apply_diagonal(state: &mut AmplitudeVector, phase: &PhaseVector) -> RadarResult<()> {
    if phase.len() != state.dim() {
        return Err(RadarError::DimensionMismatch { expected: state.dim(), found: phase.len() });
    }
    for (amp, sign) in state.amplitudes_mut().iter_mut().zip(phase.phases()) {
        if *sign < 0 {
            *amp = -*amp;
        }
    }
    trace!(%state, "oracle applied");
    Ok(())
}

/// Applies the Walsh–Hadamard transform in place.
///
/// Runs the usual butterfly: for each qubit, every pair of indices differing
/// only in that bit is replaced by `((a + b)/√2, (a - b)/√2)`. The result
/// equals [`walsh_hadamard_direct`] up to rounding. The transform is its own inverse.
pub fn apply_walsh_hadamard(state: &mut AmplitudeVector) {
    let dim = state.dim();
    let sqrt2_inv = std::f64::consts::FRAC_1_SQRT_2;
    let amplitudes = state.amplitudes_mut();

    let mut half = 1;
    while half < dim {
        // `half` is the mask of the qubit being transformed
        for block in (0..dim).step_by(half << 1) {
            for i in block..block + half {
                let j = i | half;
                let a = amplitudes[i];
                let b = amplitudes[j];
                amplitudes[i] = (a + b) * sqrt2_inv;
                amplitudes[j] = (a - b) * sqrt2_inv;
            }
        }
        half <<= 1;
    }
    trace!(%state, "walsh-hadamard applied");
}

/// Computes the Walsh–Hadamard transform from its closed form,
/// `out[j] = 2^(-n/2) · Σ_i (−1)^popcount(i & j) · in[i]`.
///
/// Quadratic in the dimension. Used to cross-check the butterfly.
pub fn walsh_hadamard_direct(state: &AmplitudeVector) -> AmplitudeVector {
    let dim = state.dim();
    let scale = 1.0 / (dim as f64).sqrt();
    let input = state.amplitudes();

    let output: Vec<Complex<f64>> = (0..dim)
        .map(|j| {
            let sum = input.iter().enumerate().fold(Complex::zero(), |acc: Complex<f64>, (i, amp)| {
                if (i & j).count_ones() % 2 == 0 { acc + amp } else { acc - amp }
            });
            sum * scale
        })
        .collect();

    let mut transformed = state.clone();
    transformed.amplitudes_mut().copy_from_slice(&output);
    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Line, NORM_TOLERANCE};
    use crate::oracle::build_phase_vector;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn assert_real_vec_approx_equal(actual: &AmplitudeVector, expected: &[f64], context: &str) {
        assert_eq!(actual.dim(), expected.len(), "Vector length mismatch - {}", context);
        for (i, (a, e)) in actual.amplitudes().iter().zip(expected).enumerate() {
            assert!(
                (a.re - e).abs() < TEST_TOLERANCE && a.im.abs() < TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, a, e, context
            );
        }
    }

    #[test]
    fn test_uniform_superposition() {
        let state = initialize_uniform(2);
        assert_real_vec_approx_equal(&state, &[0.5; 4], "n=2 uniform");
        assert!((state.norm_sqr() - 1.0).abs() < NORM_TOLERANCE);

        let state = initialize_uniform(0);
        assert_real_vec_approx_equal(&state, &[1.0], "n=0 uniform");
    }

    #[test]
    fn test_concrete_line_stages() {
        let line = Line::from_bits(&[0u8, 0, 1, 0]).unwrap();
        let oracle = build_phase_vector(&line).unwrap();

        let mut state = initialize_uniform(2);
        apply_diagonal(&mut state, &oracle).unwrap();
        assert_real_vec_approx_equal(&state, &[0.5, 0.5, -0.5, 0.5], "after oracle");

        apply_walsh_hadamard(&mut state);
        // out[j] = 0.5 * Σ_i (−1)^popcount(i&j) in[i]
        assert_real_vec_approx_equal(&state, &[0.5, -0.5, 0.5, 0.5], "after interference");
        assert!((state.probability_of(0).unwrap() - 0.25).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_butterfly_matches_closed_form() {
        let input = AmplitudeVector::from_real(&[0.1, -0.3, 0.5, 0.2, -0.4, 0.0, 0.6, 0.27]).unwrap();
        let expected = walsh_hadamard_direct(&input);
        let mut actual = input.clone();
        apply_walsh_hadamard(&mut actual);
        let expected_re: Vec<f64> = expected.amplitudes().iter().map(|c| c.re).collect();
        assert_real_vec_approx_equal(&actual, &expected_re, "butterfly vs direct");
    }

    #[test]
    fn test_walsh_hadamard_is_involution() {
        let original = AmplitudeVector::from_real(&[0.8, 0.0, -0.6, 0.0]).unwrap();
        let mut state = original.clone();
        apply_walsh_hadamard(&mut state);
        apply_walsh_hadamard(&mut state);
        let expected: Vec<f64> = original.amplitudes().iter().map(|c| c.re).collect();
        assert_real_vec_approx_equal(&state, &expected, "H·H");
    }

    #[test]
    fn test_empty_oracle_returns_to_zero_state() {
        let oracle = build_phase_vector(&Line::empty(6)).unwrap();
        let mut state = initialize_uniform(oracle.num_qubits());
        apply_diagonal(&mut state, &oracle).unwrap();
        apply_walsh_hadamard(&mut state);
        assert!((state.probability_of(0).unwrap() - 1.0).abs() < NORM_TOLERANCE);
        for index in 1..state.dim() {
            assert_eq!(state.probability_of(index), Some(0.0), "index {}", index);
        }
    }

    #[test]
    fn test_diagonal_dimension_mismatch() {
        let mut state = initialize_uniform(3);
        let oracle = build_phase_vector(&Line::empty(4)).unwrap();
        assert_eq!(
            apply_diagonal(&mut state, &oracle),
            Err(RadarError::DimensionMismatch { expected: 8, found: 4 })
        );
    }

    #[test]
    fn test_norm_preserved_for_all_marked() {
        let oracle = build_phase_vector(&Line::new(vec![true; 8])).unwrap();
        let mut state = initialize_uniform(3);
        apply_diagonal(&mut state, &oracle).unwrap();
        assert!((state.norm_sqr() - 1.0).abs() < NORM_TOLERANCE);
        apply_walsh_hadamard(&mut state);
        assert!((state.norm_sqr() - 1.0).abs() < NORM_TOLERANCE);
        // A global sign flip is undone by interference: all mass back on |000⟩
        assert!((state.probability_of(0).unwrap() - 1.0).abs() < NORM_TOLERANCE);
    }
}
