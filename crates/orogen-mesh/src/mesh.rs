//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Vertex insertion order is generation order; the position of a value
//! in these arrays is its vertex id.

use serde::{Deserialize, Serialize};
use orogen_types::{OrogenError, OrogenResult};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// Positions and per-vertex normals live in separate per-channel
/// contiguous arrays. Triangle indices reference into these arrays
/// as flat triples with CCW winding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices — each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> orogen_math::Vec3 {
        orogen_math::Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> orogen_math::Vec3 {
        orogen_math::Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Appends a vertex with a zeroed normal, returning its id.
    #[inline]
    pub fn push_vertex(&mut self, x: f32, y: f32, z: f32) -> u32 {
        let id = self.pos_x.len() as u32;
        self.pos_x.push(x);
        self.pos_y.push(y);
        self.pos_z.push(z);
        self.normal_x.push(0.0);
        self.normal_y.push(0.0);
        self.normal_z.push(0.0);
        id
    }

    /// Sets the normal of vertex `i`.
    #[inline]
    pub fn set_normal(&mut self, i: usize, x: f32, y: f32, z: f32) {
        self.normal_x[i] = x;
        self.normal_y[i] = y;
        self.normal_z[i] = z;
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Index count is divisible by 3
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> OrogenResult<()> {
        let n = self.pos_x.len();

        // Check SoA consistency
        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(OrogenError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(OrogenError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        // Check indices
        if self.indices.len() % 3 != 0 {
            return Err(OrogenError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(OrogenError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        // Check for degenerate triangles
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(OrogenError::DegenerateGeometry(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved position and normal data.
    ///
    /// Converts from the renderer-side format `[x0, y0, z0, x1, y1, z1, ...]`
    /// to SoA layout. Pass an empty `normals` slice to leave normals zeroed
    /// for later recomputation.
    pub fn from_interleaved(
        positions: &[f32],
        indices: &[u32],
        normals: &[f32],
    ) -> OrogenResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(OrogenError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        // Deinterleave positions
        for i in 0..n {
            mesh.pos_x.push(positions[i * 3]);
            mesh.pos_y.push(positions[i * 3 + 1]);
            mesh.pos_z.push(positions[i * 3 + 2]);
        }

        // Deinterleave normals (or fill zeros)
        if normals.len() == n * 3 {
            for i in 0..n {
                mesh.normal_x.push(normals[i * 3]);
                mesh.normal_y.push(normals[i * 3 + 1]);
                mesh.normal_z.push(normals[i * 3 + 2]);
            }
        } else {
            mesh.normal_x.resize(n, 0.0);
            mesh.normal_y.resize(n, 0.0);
            mesh.normal_z.resize(n, 0.0);
        }

        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}
