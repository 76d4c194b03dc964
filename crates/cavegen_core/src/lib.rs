//! # CAVEGEN Core Types
//!
//! Shared leaf types for the cave generation pipeline.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: no randomness lives in this crate
//! 2. **Value semantics**: `Point` hashes and compares structurally
//! 3. **Owned state**: a `Grid` is exclusively owned by its generator
//!
//! ## Core Components
//!
//! - `Point`: integer lattice coordinate, usable as a hash-map key
//! - `Grid`: rectangular boolean occupancy lattice
//! - `GenerationError`: every failure mode of the pipeline

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod grid;
pub mod point;

pub use error::GenerationError;
pub use grid::{Grid, EMPTY, FILLED};
pub use point::Point;
