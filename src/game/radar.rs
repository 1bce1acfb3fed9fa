// src/game/radar.rs

use super::board::{Coord, render_grid};
use crate::core::Verdict;
use serde::Serialize;
use std::fmt;

/// What the player knows about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CellMark {
    /// Not ruled out yet.
    Unknown,
    /// Ruled out, by a `Miss` scan or by a failed probe.
    Miss,
    /// Lies on a detected row and a detected column; waiting to be probed.
    Candidate,
    /// Probed and found a ship.
    Hit,
}

impl CellMark {
    pub fn symbol(&self) -> char {
        match self {
            CellMark::Unknown => '?',
            CellMark::Miss => 'O',
            CellMark::Candidate => 'C',
            CellMark::Hit => 'X',
        }
    }
}

impl fmt::Display for CellMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The player's view of the board, built up from scan verdicts and probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarView {
    cells: Vec<Vec<CellMark>>,
    /// `None` until the row has been scanned.
    row_status: Vec<Option<Verdict>>,
    column_status: Vec<Option<Verdict>>,
}

impl RadarView {
    /// A view of a `size x size` board where nothing is known yet.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![vec![CellMark::Unknown; size]; size],
            row_status: vec![None; size],
            column_status: vec![None; size],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, (r, c): Coord) -> Option<CellMark> {
        self.cells.get(r).and_then(|row| row.get(c)).copied()
    }

    /// Sets a single cell. Coordinates off the board are ignored.
    pub fn mark(&mut self, (r, c): Coord, mark: CellMark) {
        if let Some(cell) = self.cells.get_mut(r).and_then(|row| row.get_mut(c)) {
            *cell = mark;
        }
    }

    /// Records a row verdict; a `Miss` rules out the whole row.
    pub fn record_row(&mut self, r: usize, verdict: Verdict) {
        let Some(status) = self.row_status.get_mut(r) else { return };
        *status = Some(verdict);
        if verdict == Verdict::Miss {
            for c in 0..self.size() {
                self.mark((r, c), CellMark::Miss);
            }
        }
    }

    /// Records a column verdict; a `Miss` rules out the whole column.
    pub fn record_column(&mut self, c: usize, verdict: Verdict) {
        let Some(status) = self.column_status.get_mut(c) else { return };
        *status = Some(verdict);
        if verdict == Verdict::Miss {
            for r in 0..self.size() {
                self.mark((r, c), CellMark::Miss);
            }
        }
    }

    pub fn row_status(&self) -> &[Option<Verdict>] {
        &self.row_status
    }

    pub fn column_status(&self) -> &[Option<Verdict>] {
        &self.column_status
    }

    /// Marks every still-unknown cell at the crossing of a detected row and a
    /// detected column as a candidate, and returns them in row-major order.
    pub fn mark_candidates(&mut self) -> Vec<Coord> {
        let mut candidates = Vec::new();
        for r in 0..self.size() {
            for c in 0..self.size() {
                let crossing = self.row_status[r] == Some(Verdict::Detect)
                    && self.column_status[c] == Some(Verdict::Detect);
                if crossing && self.cells[r][c] == CellMark::Unknown {
                    self.cells[r][c] = CellMark::Candidate;
                    candidates.push((r, c));
                }
            }
        }
        candidates
    }

    /// Number of cells carrying `mark`.
    pub fn count(&self, mark: CellMark) -> usize {
        self.cells.iter().flatten().filter(|m| **m == mark).count()
    }

    pub fn render(&self, title: &str) -> String {
        render_grid(title, &self.cells)
    }
}
