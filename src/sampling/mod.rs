//! Stochastic parts of mask generation
//!
//! This module contains:
//! - The seeded random source shared by all draws
//! - Mean selection inside the grid
//! - Signed density mask generation

/// Mask generation over the pixel grid
pub mod mask;
/// Mean selection with branch-dependent generator consumption
pub mod mean;
/// Seeded categorical and sign sampling
pub mod random;
