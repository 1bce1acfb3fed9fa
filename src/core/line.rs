// src/core/line.rs

use super::error::{RadarError, RadarResult};
use std::fmt;
use std::str::FromStr;

/// An ordered row or column of binary cells, the input to a single scan.
///
/// A `true` cell is marked (holds part of a ship). The detector never reads
/// individual cells directly; it only folds them into the oracle's phase pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Line {
    cells: Vec<bool>,
}

impl Line {
    /// Creates a line from already-binary flags.
    pub fn new(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// Creates a line of `len` unmarked cells.
    pub fn empty(len: usize) -> Self {
        Self { cells: vec![false; len] }
    }

    /// Creates a line from raw 0/1 values.
    ///
    /// # Errors
    /// Returns `RadarError::InvalidInput` naming the first value that is neither 0 nor 1.
    pub fn from_bits<T>(values: &[T]) -> RadarResult<Self>
    where
        T: Copy + Into<i64>,
    {
        let mut cells = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match (*value).into() {
                0 => cells.push(false),
                1 => cells.push(true),
                other => {
                    return Err(RadarError::invalid_input(format!(
                        "cell {} holds {}, expected 0 or 1",
                        index, other
                    )));
                }
            }
        }
        Ok(Self { cells })
    }

    /// Number of cells, `L`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the line has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only view of the cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Returns `true` if any cell is marked.
    pub fn has_marked(&self) -> bool {
        self.cells.iter().any(|c| *c)
    }

    /// Indices of the marked cells, in ascending order.
    pub fn marked_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, marked)| marked.then_some(i))
            .collect()
    }

    /// Number of qubits needed to index this line. See [`qubits_for_len`].
    pub fn num_qubits(&self) -> RadarResult<u32> {
        qubits_for_len(self.len())
    }
}

/// Qubit count `n` for a line of `len` cells.
///
/// `n = max(1, ceil(log2(len)))` for a non-empty line, so a single cell still
/// gets one qubit. An empty line maps to `n = 0` (a one-entry state), the
/// degenerate case the oracle tolerates but a scan never simulates.
///
/// # Errors
/// Returns `RadarError::InvalidInput` if `2^n` would overflow `usize`.
pub fn qubits_for_len(len: usize) -> RadarResult<u32> {
    if len == 0 {
        return Ok(0);
    }
    let padded = len.checked_next_power_of_two().ok_or_else(|| {
        RadarError::invalid_input(format!("line of {} cells is too long to simulate", len))
    })?;
    Ok(padded.trailing_zeros().max(1))
}

impl From<Vec<bool>> for Line {
    fn from(cells: Vec<bool>) -> Self {
        Self::new(cells)
    }
}

impl TryFrom<&[u8]> for Line {
    type Error = RadarError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Line::from_bits(values)
    }
}

impl TryFrom<Vec<u8>> for Line {
    type Error = RadarError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Line::from_bits(&values)
    }
}

/// Parses comma or whitespace separated cells, e.g. `"0,0,1,0"` or `"0 0 1 0"`.
impl FromStr for Line {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values: Vec<i64> = Vec::new();
        for token in s.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
            let value = token.parse::<i64>().map_err(|_| {
                RadarError::invalid_input(format!("'{}' is not a cell value", token))
            })?;
            values.push(value);
        }
        Line::from_bits(&values)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, marked) in self.cells.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { ", " } else { "" }, u8::from(*marked))?;
        }
        write!(f, "]")
    }
}
