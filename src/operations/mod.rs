// src/operations/mod.rs

//! The stages a line scan is built from.
//!
//! A scan circuit is always the same four stages in the same order:
//! superposition, oracle, interference, measurement. They are kept as values
//! so the circuit can be printed and walked through step by step.

use crate::core::{AmplitudeVector, RadarResult};
use crate::oracle::PhaseVector;
use crate::transforms::{apply_diagonal, apply_walsh_hadamard, initialize_uniform};
use std::fmt;

/// One stage of the fixed scan circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Prepare the uniform superposition over every cell position.
    ///
    /// Analogy: a Hadamard on every qubit of |0...0⟩.
    Superposition,

    /// Imprint a sign flip on every marked position.
    Oracle(PhaseVector),

    /// Walsh–Hadamard on the whole register, the interference step.
    Interference,

    /// Sample the register `shots` times.
    /// Does not modify the amplitudes.
    Measure {
        /// Number of samples drawn from the final distribution.
        shots: usize,
    },
}

impl Stage {
    /// Applies the stage to `state`. `Measure` leaves it untouched; sampling
    /// happens on the derived probability distribution instead.
    ///
    /// # Errors
    /// Returns `RadarError::DimensionMismatch` if an oracle does not fit the state.
    pub fn apply(&self, state: &mut AmplitudeVector) -> RadarResult<()> {
        match self {
            Stage::Superposition => {
                *state = initialize_uniform(state.num_qubits());
            }
            Stage::Oracle(phase) => apply_diagonal(state, phase)?,
            Stage::Interference => apply_walsh_hadamard(state),
            Stage::Measure { .. } => {}
        }
        Ok(())
    }

    /// Short symbol used when drawing the circuit.
    pub fn symbol(&self) -> &'static str {
        match self {
            Stage::Superposition | Stage::Interference => "H",
            Stage::Oracle(_) => "Uf",
            Stage::Measure { .. } => "M",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Superposition => write!(f, "Superposition"),
            Stage::Oracle(phase) => write!(f, "Oracle {}", phase),
            Stage::Interference => write!(f, "Interference"),
            Stage::Measure { shots } => write!(f, "Measure x{}", shots),
        }
    }
}
