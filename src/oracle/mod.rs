// src/oracle/mod.rs

//! Builds the phase oracle for a line.
//!
//! The oracle is diagonal in the computational basis: every basis index that
//! corresponds to a marked cell picks up a sign flip, everything else
//! (including the padding past the end of the line) is left alone.

use crate::core::{Line, RadarResult, qubits_for_len};
use std::fmt;

/// Diagonal of the oracle transform: `2^n` entries of `+1` or `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseVector {
    phases: Vec<i8>,
    num_qubits: u32,
}

impl PhaseVector {
    /// The all-`+1` diagonal on `num_qubits` qubits.
    pub fn identity(num_qubits: u32) -> Self {
        Self { phases: vec![1; 1usize << num_qubits], num_qubits }
    }

    /// The sign entries, in basis-index order.
    pub fn phases(&self) -> &[i8] {
        &self.phases
    }

    /// Length of the diagonal, `2^n`.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always `false`; the diagonal has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Returns `true` when no entry is flipped, i.e. the oracle does nothing.
    pub fn is_identity(&self) -> bool {
        self.phases.iter().all(|p| *p == 1)
    }

    /// Basis indices carrying a `-1`.
    pub fn flipped_indices(&self) -> Vec<usize> {
        self.phases
            .iter()
            .enumerate()
            .filter_map(|(i, p)| (*p < 0).then_some(i))
            .collect()
    }

    /// Sign at `index` as a float, ready to multiply an amplitude with.
    pub fn sign(&self, index: usize) -> Option<f64> {
        self.phases.get(index).map(|p| f64::from(*p))
    }
}

impl fmt::Display for PhaseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diag[")?;
        for (i, p) in self.phases.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, if *p < 0 { "-1" } else { "+1" })?;
        }
        write!(f, "]")
    }
}

/// Maps a line to its oracle diagonal.
///
/// An empty line yields the one-entry diagonal `[+1]`. Otherwise the diagonal
/// has `2^n` entries with `n = max(1, ceil(log2 L))`; entry `i` is `-1` exactly
/// when cell `i` is marked.
///
/// # Errors
/// Returns `RadarError::InvalidInput` if the line is too long to be padded to a
/// power of two.
pub fn build_phase_vector(line: &Line) -> RadarResult<PhaseVector> {
    let num_qubits = qubits_for_len(line.len())?;
    let mut oracle = PhaseVector::identity(num_qubits);
    for (phase, marked) in oracle.phases.iter_mut().zip(line.cells()) {
        if *marked {
            *phase = -1;
        }
    }
    Ok(oracle)
}
