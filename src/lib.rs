// src/lib.rs

//! `qradar` - interaction-free detection on a simulated interference circuit
//!
//! Given a line of cells, some of them marked, the detector decides whether
//! any cell is marked without ever reading a cell. It prepares a uniform
//! superposition over the cell positions, lets an oracle flip the sign of the
//! marked positions, interferes the amplitudes with a second Walsh–Hadamard
//! transform and measures. Landing anywhere but |0...0⟩ is evidence of a mark.
//!
//! The [`game`] module uses the detector to play quantum battleship.

pub mod core;
pub mod oracle;
pub mod transforms;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod game;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudeVector, Line, RadarError, RadarResult, Verdict};
pub use oracle::{PhaseVector, build_phase_vector};
pub use transforms::{apply_diagonal, apply_walsh_hadamard, initialize_uniform, walsh_hadamard_direct};
pub use operations::Stage;
pub use circuits::ScanCircuit;
pub use simulation::{LineScanner, ProbabilityDistribution, ScanReport, scan};
pub use validation::{check_normalization, renormalize};
pub use game::{Board, GameConfig, GameReport, QuantumBattleship};

// Example 1: Scanning a line with one marked cell
// The oracle flips index 2, interference moves 3/4 of the probability away
// from |00⟩, and three shots almost always catch it.
/// ```
/// use qradar::{Line, LineScanner, Verdict, RadarError};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let line = Line::from_bits(&[0u8, 0, 1, 0])?;
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let report = LineScanner::new().scan_detailed(&line, &mut rng)?;
/// println!("{}", report);
/// assert_eq!(report.shots(), 3); // n + 1 with n = 2
/// assert!((report.zero_probability() - 0.25).abs() < 1e-12);
///
/// // An empty row never leaves |00⟩
/// let verdict = LineScanner::new().scan(&Line::empty(4), &mut rng)?;
/// assert_eq!(verdict, Verdict::Miss);
/// # Ok::<(), RadarError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Walking through the circuit by hand
// The transforms are plain functions, so the scan can be replayed stage by stage.
/// ```
/// use qradar::{Line, build_phase_vector, initialize_uniform, apply_diagonal, apply_walsh_hadamard, ScanCircuit};
///
/// let line = Line::from_bits(&[0u8, 1, 0])?;
/// let oracle = build_phase_vector(&line)?;
/// assert_eq!(oracle.phases(), &[1, -1, 1, 1]); // padded to 4 entries
///
/// let mut state = initialize_uniform(oracle.num_qubits());
/// apply_diagonal(&mut state, &oracle)?;
/// apply_walsh_hadamard(&mut state);
/// assert!((state.norm_sqr() - 1.0).abs() < 1e-9);
///
/// println!("{}", ScanCircuit::for_line(&line, None)?);
/// # Ok::<(), qradar::RadarError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
