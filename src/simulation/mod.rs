// src/simulation/mod.rs

//! Runs the scan circuit for a line and reduces the measurements to a verdict.
//!
//! [`LineScanner`] is the entry point. It owns no state besides its shot
//! setting; randomness is always passed in by the caller, so scans are
//! reproducible with a seeded generator and can run on many threads at once
//! as long as each thread brings its own generator.

mod results;
mod sampling;

pub use results::ScanReport;
pub use sampling::ProbabilityDistribution;

use crate::circuits::{ScanCircuit, resolve_shots};
use crate::core::{Line, RadarResult, Verdict, ZERO_STATE};
use rand::Rng;
use tracing::debug;

/// Interaction-free detector for a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScanner {
    /// `None` means `n + 1` shots, picked per line.
    shots: Option<usize>,
}

impl LineScanner {
    /// Creates a scanner using the default `n + 1` shots per line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner with a fixed shot count.
    ///
    /// A count of zero is accepted here and rejected by the first scan with
    /// `RadarError::InvalidConfiguration`.
    pub fn with_shots(shots: usize) -> Self {
        Self { shots: Some(shots) }
    }

    /// Fixed shot count, if one was set.
    pub fn shots(&self) -> Option<usize> {
        self.shots
    }

    /// Scans `line` and returns only the verdict.
    ///
    /// # Errors
    /// See [`LineScanner::scan_detailed`].
    pub fn scan<R: Rng + ?Sized>(&self, line: &Line, rng: &mut R) -> RadarResult<Verdict> {
        Ok(self.scan_detailed(line, rng)?.verdict())
    }

    /// Scans `line` and returns the verdict along with what was measured.
    ///
    /// 1. An empty line is a `Miss` without running anything.
    /// 2. Otherwise build the circuit, evolve it, and square the amplitudes.
    /// 3. Draw the shots. `Miss` iff every shot landed on |0...0⟩.
    ///
    /// # Errors
    /// * `RadarError::InvalidConfiguration` for a zero shot count, checked
    ///   before anything else.
    /// * `RadarError::InvalidInput` for a line too long to simulate.
    /// * `RadarError::NumericInstability` if the final distribution does not sum to 1.
    pub fn scan_detailed<R: Rng + ?Sized>(&self, line: &Line, rng: &mut R) -> RadarResult<ScanReport> {
        resolve_shots(self.shots, 0)?;

        if line.is_empty() {
            debug!("empty line, reporting MISS without a circuit");
            return Ok(ScanReport::empty_line());
        }

        let circuit = ScanCircuit::for_line(line, self.shots)?;
        let state = circuit.evolve()?;
        let distribution = ProbabilityDistribution::from_state(&state)?;

        let shots = circuit.shots();
        let counts = distribution.sample_counts(shots, rng);
        let report = ScanReport::from_counts(
            line.len(),
            circuit.num_qubits(),
            shots,
            distribution.probability(ZERO_STATE),
            counts,
        );

        debug!(
            cells = line.len(),
            qubits = circuit.num_qubits(),
            shots,
            zero_count = report.zero_count(),
            verdict = %report.verdict(),
            "line scan complete"
        );
        Ok(report)
    }
}

/// Scans `line` with `shots` samples (default `n + 1`).
///
/// Shorthand for `LineScanner` when the shot count is decided per call.
pub fn scan<R: Rng + ?Sized>(line: &Line, shots: Option<usize>, rng: &mut R) -> RadarResult<Verdict> {
    let scanner = match shots {
        Some(k) => LineScanner::with_shots(k),
        None => LineScanner::new(),
    };
    scanner.scan(line, rng)
}
