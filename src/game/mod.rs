// src/game/mod.rs

//! Quantum battleship: the detector put to work on a hidden board.
//!
//! Every row and every column is scanned once. A `Miss` rules out the whole
//! line; cells where a detected row crosses a detected column become
//! candidates, which are then probed classically. The score counts how many
//! cells had to be touched, compared to probing the board cell by cell.

mod board;
mod radar;

pub use board::{Board, Coord, MAX_PLACEMENT_ATTEMPTS, Orientation, place_ships, render_grid};
pub use radar::{CellMark, RadarView};

use crate::core::{RadarError, RadarResult, Verdict};
use crate::simulation::LineScanner;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Game parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width and height of the square board.
    pub size: usize,
    /// Length of every ship to place.
    pub ship_lengths: Vec<usize>,
    /// Seed for ship placement and scan sampling. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Shot override for every scan. `None` keeps `n + 1`.
    pub shots: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: 8, ship_lengths: vec![4, 3, 3, 2], seed: None, shots: None }
    }
}

impl GameConfig {
    /// Checks the board and fleet make sense together.
    ///
    /// # Errors
    /// Returns `RadarError::InvalidConfiguration` for a zero board size, a zero
    /// shot override, or a ship of length zero or longer than the board.
    pub fn validate(&self) -> RadarResult<()> {
        if self.size == 0 {
            return Err(RadarError::invalid_configuration("board size must be at least 1"));
        }
        if self.shots == Some(0) {
            return Err(RadarError::invalid_configuration("shot count must be at least 1"));
        }
        if let Some(bad) = self.ship_lengths.iter().find(|l| **l == 0 || **l > self.size) {
            return Err(RadarError::invalid_configuration(format!(
                "ship length {} does not fit a {}x{} board",
                bad, self.size, self.size
            )));
        }
        Ok(())
    }

    /// Scanner matching the configured shot count.
    pub fn scanner(&self) -> LineScanner {
        match self.shots {
            Some(k) => LineScanner::with_shots(k),
            None => LineScanner::new(),
        }
    }

    /// Random generator for a game: seeded if a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct QuantumBattleship {
    board: Board,
    radar: RadarView,
    scanner: LineScanner,
    quantum_scans: usize,
}

impl QuantumBattleship {
    /// Validates `config` and places its ships on a fresh board.
    ///
    /// # Errors
    /// `RadarError::InvalidConfiguration` if the config is invalid or no ship could be placed.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> RadarResult<Self> {
        config.validate()?;
        let ships = place_ships(config.size, &config.ship_lengths, rng);
        Self::with_board(config, Board::from_ships(config.size, ships))
    }

    /// Starts a game on a prepared board.
    ///
    /// # Errors
    /// `RadarError::InvalidConfiguration` if the config is invalid, the board
    /// size differs from the config, or the board holds no ships.
    pub fn with_board(config: &GameConfig, board: Board) -> RadarResult<Self> {
        config.validate()?;
        if board.size() != config.size {
            return Err(RadarError::invalid_configuration(format!(
                "board is {}x{} but the config asks for {}x{}",
                board.size(),
                board.size(),
                config.size,
                config.size
            )));
        }
        if board.ship_count() == 0 {
            return Err(RadarError::invalid_configuration("no ships were placed"));
        }
        Ok(Self {
            radar: RadarView::new(board.size()),
            board,
            scanner: config.scanner(),
            quantum_scans: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn radar(&self) -> &RadarView {
        &self.radar
    }

    /// Scans issued so far.
    pub fn quantum_scans(&self) -> usize {
        self.quantum_scans
    }

    /// Scans every row and records the verdicts.
    pub fn scan_rows<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RadarResult<Vec<Verdict>> {
        let mut verdicts = Vec::with_capacity(self.board.size());
        for r in 0..self.board.size() {
            let line = self.board.row(r).unwrap_or_default();
            let verdict = self.scanner.scan(&line, rng)?;
            self.quantum_scans += 1;
            self.radar.record_row(r, verdict);
            info!(row = r, %verdict, "row scan");
            verdicts.push(verdict);
        }
        Ok(verdicts)
    }

    /// Scans every column and records the verdicts.
    pub fn scan_columns<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RadarResult<Vec<Verdict>> {
        let mut verdicts = Vec::with_capacity(self.board.size());
        for c in 0..self.board.size() {
            let line = self.board.column(c).unwrap_or_default();
            let verdict = self.scanner.scan(&line, rng)?;
            self.quantum_scans += 1;
            self.radar.record_column(c, verdict);
            info!(column = c, %verdict, "column scan");
            verdicts.push(verdict);
        }
        Ok(verdicts)
    }

    /// Probes one cell classically. Returns `true` on a ship.
    pub fn probe(&mut self, coord: Coord) -> bool {
        let hit = self.board.is_ship(coord);
        self.radar.mark(coord, if hit { CellMark::Hit } else { CellMark::Miss });
        debug!(row = coord.0, column = coord.1, hit, "classical probe");
        hit
    }

    /// Plays the whole game: scan rows, scan columns, probe candidates.
    pub fn play<R: Rng + ?Sized>(mut self, rng: &mut R) -> RadarResult<GameReport> {
        let size = self.board.size();
        let hidden_board = self.board.render("HIDDEN BOARD (FOR DEBUG)");
        info!(size, ship_cells = self.board.ship_count(), "phase 1: quantum scanning");

        let row_verdicts = self.scan_rows(rng)?;
        let column_verdicts = self.scan_columns(rng)?;
        let after_scans = self.radar.render("RADAR VIEW AFTER ALL SCANS");

        let candidates = self.radar.mark_candidates();
        info!(candidates = candidates.len(), "phase 2: classical pinpointing");
        let candidate_view = self.radar.render("CANDIDATE VIEW");

        let mut ships_found = 0;
        for coord in &candidates {
            if self.probe(*coord) {
                ships_found += 1;
            }
        }

        let total_ships = self.board.ship_count();
        let cells = size * size;
        let total_hits = candidates.len();
        Ok(GameReport {
            size,
            total_ships,
            quantum_scans: self.quantum_scans,
            row_verdicts,
            column_verdicts,
            candidates,
            ships_found,
            total_hits,
            ev_score: total_hits as f64 / cells as f64,
            classical_worst_case: cells,
            classical_average: cells as f64 / 2.0,
            all_found: ships_found == total_ships,
            hidden_board,
            after_scans,
            candidate_view,
            final_board: self.radar.render("FINAL BOARD"),
        })
    }
}

/// Outcome and statistics of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    pub size: usize,
    /// Ship cells on the hidden board.
    pub total_ships: usize,
    pub quantum_scans: usize,
    pub row_verdicts: Vec<Verdict>,
    pub column_verdicts: Vec<Verdict>,
    pub candidates: Vec<Coord>,
    pub ships_found: usize,
    /// Cells probed classically.
    pub total_hits: usize,
    /// Elitzur–Vaidman score: probed cells over board cells. Lower is better.
    pub ev_score: f64,
    pub classical_worst_case: usize,
    pub classical_average: f64,
    pub all_found: bool,
    #[serde(skip)]
    pub hidden_board: String,
    #[serde(skip)]
    pub after_scans: String,
    #[serde(skip)]
    pub candidate_view: String,
    #[serde(skip)]
    pub final_board: String,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- STATISTICS ---")?;
        writeln!(f, "Total Quantum Scans: {}", self.quantum_scans)?;
        writeln!(f, "Ships Found:         {} / {}", self.ships_found, self.total_ships)?;
        writeln!(f, "Elitzur-Vaidman (E.V.) Score (Total 'Hits'): {}", self.ev_score)?;
        if self.all_found {
            writeln!(f, "\nAll ships found! Your Quantum Radar was a success!")?;
        } else {
            writeln!(f, "\nNot all ships found. The classical board may have changed!")?;
        }
        writeln!(f, "\nClassical Comparison:")?;
        writeln!(f, "  - Quantum Strategy Hits: {}", self.total_hits)?;
        writeln!(f, "  - Classical Brute Force (Worst Case): {}", self.classical_worst_case)?;
        writeln!(f, "  - Classical Brute Force (Avg. for this board): ~{}", self.classical_average)
    }
}
