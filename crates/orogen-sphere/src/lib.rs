//! # orogen-sphere
//!
//! Unit sphere approximation by recursive subdivision of a tetrahedral
//! seed. Every subdivision level splits each spherical triangle into
//! four, with edge midpoints re-projected onto the unit sphere.
//!
//! Vertices are deliberately duplicated per triangle (no shared-edge
//! welding): normals equal vertex positions, and keeping each face's
//! corners private preserves that one-normal-per-corner shading.

pub mod subdivide;

pub use subdivide::{sphere_from_faces, unit_sphere, TETRAHEDRON_SEED};
