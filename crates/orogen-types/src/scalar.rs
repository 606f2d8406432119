//! Scalar type alias for mesh generation.
//!
//! Using `f32` to match GPU vertex buffer layouts (positions and normals
//! upload as 32-bit floats). This alias makes it easy to experiment with
//! `f64` precision if needed.

/// The floating-point type used throughout the generators.
pub type Scalar = f32;
