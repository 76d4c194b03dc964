//! # CAVEGEN Procedural Generation
//!
//! Deterministic cave synthesis: a cellular automaton grows an occupancy
//! grid from a seed, a connectivity pass guarantees traversability, and a
//! marching-squares classifier turns the result into a renderable
//! tile-index layer.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same config and seed always produce the same cave
//! 2. **Pure**: no rendering, no I/O; results are plain data
//! 3. **One-shot**: a generator instance runs exactly one pipeline
//!
//! ## Pipeline
//!
//! `seed -> smooth (phased automaton) -> analyze rooms -> repair
//! connectivity -> classify tiles`, strictly in that order.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cavegen_procedural::{CaveConfig, CaveGenerator, Phase};
//!
//! let config = CaveConfig::new(64, 64, 7, 16, vec![Phase::new(5, 2, 4)])?;
//! let cave = CaveGenerator::new(config).generate();
//!
//! assert!(cave.grid().border_is_filled());
//! println!("{}", cave.grid());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod automaton;
pub mod config;
pub mod connector;
pub mod generator;
pub mod rooms;
pub mod tiles;

pub use config::{CaveConfig, Phase};
pub use connector::RepairFailure;
pub use generator::{CaveGenerator, GeneratedCave, Stage};
pub use rooms::Room;
pub use tiles::{TileAtlas, TileGrid};
