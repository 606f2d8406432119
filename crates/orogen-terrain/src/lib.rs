//! # orogen-terrain
//!
//! Procedural grid terrain generation: a flat regular grid in the XZ
//! plane deformed by iterative randomized fault displacement, heights
//! normalized onto a fixed range, and per-vertex normals accumulated
//! through the adjacency map built during grid construction.
//!
//! The pipeline is pure and deterministic given a seed: same
//! [`TerrainParams`] in, bit-identical mesh out.

pub mod fault;
pub mod generator;
pub mod grid;
pub mod params;

pub use generator::{generate, generate_with};
pub use params::TerrainParams;
