//! Numeric constants shared by the transforms and the scanner.

/// Tolerances used when checking the amplitude and probability invariants.
pub mod radar_constants {
    /// Allowed deviation of a norm or probability total from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Drift above which the probability distribution gets renormalized once.
    pub const RENORMALIZE_THRESHOLD: f64 = 1e-12;
    /// Index of the all-zero basis state, the only outcome of an empty line.
    pub const ZERO_STATE: usize = 0;
}
