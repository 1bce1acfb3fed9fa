// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The simulated state of an `n`-qubit register: `2^n` amplitudes indexed by
/// basis state.
///
/// Amplitudes are stored as `Complex<f64>` so the transforms read like gate
/// applications, even though every stage of a line scan keeps the imaginary
/// parts at zero.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: u32,
}

impl AmplitudeVector {
    /// Creates the basis state |0...0⟩ on `num_qubits` qubits.
    pub fn zero_state(num_qubits: u32) -> Self {
        let mut amplitudes = vec![Complex::zero(); 1usize << num_qubits];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes, num_qubits }
    }

    /// Wraps an explicit amplitude list.
    ///
    /// Returns `None` unless the length is a power of two. No normalization
    /// check happens here; see [`crate::validation::check_normalization`].
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Option<Self> {
        if !amplitudes.len().is_power_of_two() {
            return None;
        }
        let num_qubits = amplitudes.len().trailing_zeros();
        Some(Self { amplitudes, num_qubits })
    }

    /// Same as [`AmplitudeVector::from_amplitudes`] for real-valued amplitudes.
    pub fn from_real(values: &[f64]) -> Option<Self> {
        Self::from_amplitudes(values.iter().map(|v| Complex::new(*v, 0.0)).collect())
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of basis states, `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits, `n`.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Sum of squared magnitudes. 1 for any state produced by the transforms.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Squared magnitude of a single basis state, or `None` if out of range.
    pub fn probability_of(&self, index: usize) -> Option<f64> {
        self.amplitudes.get(index).map(|c| c.norm_sqr())
    }

    /// Squared magnitude of every basis state, in index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Renders a basis index as a ket label, most significant qubit first.
    pub fn basis_label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits)
    }
}

/// Formats `index` as `|b...b⟩` with `num_qubits` digits.
pub fn basis_label(index: usize, num_qubits: u32) -> String {
    format!("|{:0width$b}⟩", index, width = num_qubits as usize)
}

impl fmt::Display for AmplitudeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c.re)?;
            if c.im.abs() > 1e-12 {
                write!(f, "{:+.4}i", c.im)?;
            }
        }
        write!(f, "]")
    }
}

/// The outcome of a line scan.
///
/// `Miss` means every shot landed on |0...0⟩; a single shot anywhere else
/// makes it `Detect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// No evidence of a marked cell.
    Miss,
    /// At least one shot left the all-zero state.
    Detect,
}

impl Verdict {
    pub fn is_detect(&self) -> bool {
        matches!(self, Verdict::Detect)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Miss => write!(f, "MISS"),
            Verdict::Detect => write!(f, "DETECT"),
        }
    }
}
