// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod line;
pub mod state;

// Re-export public types for convenient access via `qradar::core::TypeName`
pub use error::{RadarError, RadarResult};
pub use line::{Line, qubits_for_len};
pub use state::{AmplitudeVector, Verdict, basis_label};

pub mod constants;
pub use constants::radar_constants::{NORM_TOLERANCE, RENORMALIZE_THRESHOLD, ZERO_STATE};
