//! # orogen-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout,
//! the common interchange type between the Orogen generators and the
//! renderer boundary.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — The core mesh type. Positions, normals, and
//!   triangle indices in contiguous SoA buffers.
//! - [`VertexTriangleMap`] — Vertex-to-triangle adjacency used to
//!   accumulate face normals into vertex normals.

pub mod adjacency;
pub mod mesh;
pub mod normals;

pub use adjacency::VertexTriangleMap;
pub use mesh::TriangleMesh;
