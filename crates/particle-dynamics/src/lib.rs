//! # Particle Dynamics
//!
//! Core numeric types for the drift pipeline: run parameters, the
//! per-particle velocity buffer, and the error taxonomy.

pub mod buffer;
pub mod error;
pub mod params;

pub use buffer::*;
pub use error::*;
pub use params::*;
