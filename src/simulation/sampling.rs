// src/simulation/sampling.rs

use crate::core::{AmplitudeVector, RadarResult};
use crate::validation::renormalize;
use rand::Rng;
use std::collections::BTreeMap;

/// Measurement distribution over the basis states of a final scan state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityDistribution {
    probabilities: Vec<f64>,
    num_qubits: u32,
}

impl ProbabilityDistribution {
    /// Squares every amplitude and renormalizes once if the total drifted.
    ///
    /// # Errors
    /// Returns `RadarError::NumericInstability` if the total cannot be brought back to 1.
    pub fn from_state(state: &AmplitudeVector) -> RadarResult<Self> {
        let mut probabilities = state.probabilities();
        renormalize(&mut probabilities)?;
        Ok(Self { probabilities, num_qubits: state.num_qubits() })
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Probability of outcome `index`; zero for indices outside the distribution.
    pub fn probability(&self, index: usize) -> f64 {
        self.probabilities.get(index).copied().unwrap_or(0.0)
    }

    /// Draws one outcome.
    ///
    /// Inverse-CDF over the basis indices: a uniform draw `r ∈ [0, 1)` picks
    /// the first index whose cumulative probability exceeds `r`. Outcomes with
    /// zero probability are never returned.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, p) in self.probabilities.iter().enumerate() {
            cumulative += p;
            if r < cumulative && *p > 0.0 {
                return i;
            }
        }

        // Rounding left the total just under r; fall back to the last supported outcome
        self.probabilities.iter().rposition(|p| *p > 0.0).unwrap_or(0)
    }

    /// Draws `shots` outcomes and tallies them by index.
    pub fn sample_counts<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for _ in 0..shots {
            *counts.entry(self.sample(rng)).or_insert(0) += 1;
        }
        counts
    }
}
