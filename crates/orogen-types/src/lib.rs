//! # orogen-types
//!
//! Shared types, identifiers, error types, and generation constants
//! for the Orogen procedural mesh toolkit.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Orogen crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{OrogenError, OrogenResult};
pub use ids::{TriangleId, VertexId};
pub use scalar::Scalar;
