// src/circuits/mod.rs

//! The fixed scan circuit for a line, and its text diagram.
//!
//! There is exactly one circuit shape: `H` on every qubit, the line's oracle,
//! `H` again, then measurement. `ScanCircuit` records that sequence for one
//! concrete line so it can be evolved and printed.

use crate::core::{AmplitudeVector, Line, RadarError, RadarResult};
use crate::operations::Stage;
use crate::oracle::build_phase_vector;
use crate::validation::check_normalization;
use std::fmt;

/// Superposition, oracle, interference and measurement for one line.
#[derive(Clone, PartialEq, Eq)]
pub struct ScanCircuit {
    /// Length of the line the oracle was built from (before padding).
    line_len: usize,
    num_qubits: u32,
    /// Always `[Superposition, Oracle, Interference, Measure]`.
    stages: Vec<Stage>,
}

impl ScanCircuit {
    /// Builds the circuit for `line`.
    ///
    /// `shots` overrides the default measurement count of `n + 1`.
    ///
    /// # Errors
    /// * `RadarError::InvalidInput` if the line is empty or too long to simulate.
    /// * `RadarError::InvalidConfiguration` if `shots` is `Some(0)`.
    pub fn for_line(line: &Line, shots: Option<usize>) -> RadarResult<Self> {
        if line.is_empty() {
            return Err(RadarError::invalid_input("an empty line has no circuit"));
        }
        let oracle = build_phase_vector(line)?;
        let num_qubits = oracle.num_qubits();
        let shots = resolve_shots(shots, num_qubits)?;

        Ok(Self {
            line_len: line.len(),
            num_qubits,
            stages: vec![
                Stage::Superposition,
                Stage::Oracle(oracle),
                Stage::Interference,
                Stage::Measure { shots },
            ],
        })
    }

    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    pub fn line_len(&self) -> usize {
        self.line_len
    }

    /// The ordered stages.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Measurement count of the final stage.
    pub fn shots(&self) -> usize {
        self.stages
            .iter()
            .find_map(|s| match s {
                Stage::Measure { shots } => Some(*shots),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Basis indices flipped by the oracle.
    pub fn marked_indices(&self) -> Vec<usize> {
        self.stages
            .iter()
            .find_map(|s| match s {
                Stage::Oracle(phase) => Some(phase.flipped_indices()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Runs every stage from |0...0⟩ and returns the pre-measurement state.
    ///
    /// # Errors
    /// `RadarError::NumericInstability` if a stage leaves the state off norm 1.
    pub fn evolve(&self) -> RadarResult<AmplitudeVector> {
        let mut state = AmplitudeVector::zero_state(self.num_qubits);
        for stage in &self.stages {
            stage.apply(&mut state)?;
            check_normalization(&state, None)?;
        }
        Ok(state)
    }

    /// Like [`ScanCircuit::evolve`] but keeps a snapshot after each stage.
    pub fn evolve_traced(&self) -> RadarResult<Vec<(Stage, AmplitudeVector)>> {
        let mut state = AmplitudeVector::zero_state(self.num_qubits);
        let mut trace = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            stage.apply(&mut state)?;
            check_normalization(&state, None)?;
            trace.push((stage.clone(), state.clone()));
        }
        Ok(trace)
    }
}

/// Default shot count is `n + 1`; an explicit zero is rejected.
pub(crate) fn resolve_shots(shots: Option<usize>, num_qubits: u32) -> RadarResult<usize> {
    match shots {
        Some(0) => Err(RadarError::invalid_configuration("shot count must be at least 1")),
        Some(k) => Ok(k),
        None => Ok(num_qubits as usize + 1),
    }
}

impl fmt::Display for ScanCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const H_WIRE: char = '─';
        const V_WIRE: char = '│';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total_dashes = GATE_WIDTH.saturating_sub(slen);
            let pre_dashes = total_dashes / 2;
            let post_dashes = total_dashes - pre_dashes;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre_dashes),
                symbol,
                H_WIRE.to_string().repeat(post_dashes)
            )
        }

        let num_wires = self.num_qubits as usize;
        writeln!(
            f,
            "qradar::ScanCircuit[{} cells on {} qubits, marked {:?}, {} shots]",
            self.line_len,
            self.num_qubits,
            self.marked_indices(),
            self.shots()
        )?;

        let label_width = format!("q{}", num_wires.saturating_sub(1)).len() + 2;
        for wire in 0..num_wires {
            write!(f, "{:<width$}", format!("q{}: ", wire), width = label_width)?;
            for stage in &self.stages {
                let symbol = match stage {
                    Stage::Oracle(_) => "[Uf]",
                    other => other.symbol(),
                };
                write!(f, "{}", format_gate(symbol))?;
            }
            writeln!(f)?;

            // The oracle acts on the whole register, so connect it across wires
            if wire + 1 < num_wires {
                write!(f, "{}", " ".repeat(label_width))?;
                for stage in &self.stages {
                    let connector = if matches!(stage, Stage::Oracle(_)) { V_WIRE } else { ' ' };
                    let pre_pad = (GATE_WIDTH - 1) / 2;
                    let post_pad = GATE_WIDTH - 1 - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for ScanCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
