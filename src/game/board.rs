// src/game/board.rs

use crate::core::Line;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;
use tracing::warn;

/// `(row, column)` on the board, zero-based.
pub type Coord = (usize, usize);

/// Attempts per ship before giving up on placing it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// The hidden square board. Only the game engine looks at it directly;
/// the detector sees one row or column at a time as a [`Line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    ships: BTreeSet<Coord>,
}

impl Board {
    /// An empty `size x size` board.
    pub fn new(size: usize) -> Self {
        Self { size, ships: BTreeSet::new() }
    }

    /// A board with ship cells at `coords`. Coordinates off the board are dropped.
    pub fn from_ships<I>(size: usize, coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let ships = coords.into_iter().filter(|(r, c)| *r < size && *c < size).collect();
        Self { size, ships }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Every ship cell, in row-major order.
    pub fn ships(&self) -> &BTreeSet<Coord> {
        &self.ships
    }

    /// Number of ship cells.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn is_ship(&self, coord: Coord) -> bool {
        self.ships.contains(&coord)
    }

    /// Row `r` as a line, or `None` if off the board.
    pub fn row(&self, r: usize) -> Option<Line> {
        (r < self.size).then(|| Line::new((0..self.size).map(|c| self.is_ship((r, c))).collect()))
    }

    /// Column `c` as a line, or `None` if off the board.
    pub fn column(&self, c: usize) -> Option<Line> {
        (c < self.size).then(|| Line::new((0..self.size).map(|r| self.is_ship((r, c))).collect()))
    }

    /// Renders the board as 0/1 cells under `title`.
    pub fn render(&self, title: &str) -> String {
        let rows: Vec<Vec<u8>> = (0..self.size)
            .map(|r| (0..self.size).map(|c| u8::from(self.is_ship((r, c)))).collect())
            .collect();
        render_grid(title, &rows)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) { Orientation::Horizontal } else { Orientation::Vertical }
    }

    fn cells(self, start: Coord, length: usize) -> impl Iterator<Item = Coord> {
        (0..length).map(move |i| match self {
            Orientation::Horizontal => (start.0, start.1 + i),
            Orientation::Vertical => (start.0 + i, start.1),
        })
    }
}

/// Randomly places ships of the given lengths on a `size x size` board.
///
/// Each ship gets up to [`MAX_PLACEMENT_ATTEMPTS`] tries at a random
/// orientation and start that fits on the board; a try that overlaps an
/// already placed ship is thrown away. A ship that never fits is skipped
/// with a warning, as is any ship of length zero or longer than the board.
pub fn place_ships<R: Rng + ?Sized>(size: usize, ship_lengths: &[usize], rng: &mut R) -> BTreeSet<Coord> {
    let mut ship_coords = BTreeSet::new();

    for &length in ship_lengths {
        if length == 0 || length > size {
            warn!(length, size, "ship cannot fit on the board, skipping");
            continue;
        }

        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = Orientation::random(rng);
            let start = match orientation {
                Orientation::Horizontal => (rng.gen_range(0..size), rng.gen_range(0..=size - length)),
                Orientation::Vertical => (rng.gen_range(0..=size - length), rng.gen_range(0..size)),
            };

            let candidate: Vec<Coord> = orientation.cells(start, length).collect();
            if candidate.iter().any(|coord| ship_coords.contains(coord)) {
                continue;
            }
            ship_coords.extend(candidate);
            placed = true;
            break;
        }

        if !placed {
            warn!(length, "could not place ship, board may be too full");
        }
    }

    ship_coords
}

/// Draws a square grid of cells under a title:
///
/// ```text
/// --- TITLE ---
///   | 0 | 1 |
///   - - - - -
/// 0 | ? | O |
/// 1 | X | ? |
///   - - - - -
/// ```
pub fn render_grid<T: fmt::Display>(title: &str, rows: &[Vec<T>]) -> String {
    let size = rows.len();
    let rule = format!(" {}", " -".repeat(size * 2 + 1));
    let header: Vec<String> = (0..size).map(|i| i.to_string()).collect();

    let mut out = String::new();
    out.push_str(&format!("--- {} ---\n", title));
    out.push_str(&format!("  | {} |\n", header.join(" | ")));
    out.push_str(&rule);
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        out.push_str(&format!("{} | {} |\n", i, cells.join(" | ")));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}
