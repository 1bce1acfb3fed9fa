// src/simulation/results.rs
use crate::core::{Verdict, ZERO_STATE, basis_label};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Everything a single scan observed, not just the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    verdict: Verdict,
    /// Cells in the scanned line.
    line_len: usize,
    num_qubits: u32,
    /// Shots actually drawn. Zero when the line was empty and nothing ran.
    shots: usize,
    /// Probability of landing on |0...0⟩ in a single shot.
    zero_probability: f64,
    /// Outcome index -> number of shots that landed there.
    counts: BTreeMap<usize, usize>,
}

impl ScanReport {
    /// Report for an empty line: nothing simulated, `Miss`.
    pub(crate) fn empty_line() -> Self {
        Self {
            verdict: Verdict::Miss,
            line_len: 0,
            num_qubits: 0,
            shots: 0,
            zero_probability: 1.0,
            counts: BTreeMap::new(),
        }
    }

    /// Builds the report and applies the reduction rule: `Miss` only if every
    /// shot landed on the zero state.
    pub(crate) fn from_counts(
        line_len: usize,
        num_qubits: u32,
        shots: usize,
        zero_probability: f64,
        counts: BTreeMap<usize, usize>,
    ) -> Self {
        let zero_count = counts.get(&ZERO_STATE).copied().unwrap_or(0);
        let verdict = if zero_count == shots { Verdict::Miss } else { Verdict::Detect };
        Self { verdict, line_len, num_qubits, shots, zero_probability, counts }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn line_len(&self) -> usize {
        self.line_len
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn zero_probability(&self) -> f64 {
        self.zero_probability
    }

    /// Shots that landed on |0...0⟩.
    pub fn zero_count(&self) -> usize {
        self.counts.get(&ZERO_STATE).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<usize, usize> {
        &self.counts
    }

    /// Returns `false` for the empty-line short circuit.
    pub fn was_simulated(&self) -> bool {
        self.shots > 0
    }

    /// Chance that a scan with this circuit and shot count returns `Detect`:
    /// `1 - P(0)^shots`.
    pub fn detect_probability(&self) -> f64 {
        if !self.was_simulated() {
            return 0.0;
        }
        1.0 - self.zero_probability.powi(self.shots as i32)
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Report: {}", self.verdict)?;
        if !self.was_simulated() {
            writeln!(f, "  Empty line, no circuit was run.")?;
            return Ok(());
        }
        writeln!(
            f,
            "  {} cells on {} qubits, {} shots, P(zero) = {:.4}",
            self.line_len, self.num_qubits, self.shots, self.zero_probability
        )?;
        writeln!(f, "  Outcomes:")?;
        for (index, count) in &self.counts {
            writeln!(
                f,
                "    {}: {:>3} {}",
                basis_label(*index, self.num_qubits),
                count,
                "#".repeat(*count)
            )?;
        }
        Ok(())
    }
}
