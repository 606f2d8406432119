//! Renderer buffer-upload contract.
//!
//! The renderer consumes flattened, interleaved arrays: 3 floats per
//! vertex position, 3 per normal, and 16-bit element indices. This type
//! is the last stop before GPU upload — conversion validates the mesh
//! and the index range so the upload side never sees garbage.

use serde::{Deserialize, Serialize};
use orogen_mesh::TriangleMesh;
use orogen_types::{OrogenError, OrogenResult};

/// Flattened mesh data ready for buffer upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuMesh {
    /// Interleaved vertex positions `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Interleaved vertex normals, same layout and length as positions.
    pub normals: Vec<f32>,
    /// Triangle indices in 16-bit element range.
    pub indices: Vec<u16>,
}

impl GpuMesh {
    /// Flattens a mesh into upload form.
    ///
    /// Fails with `InvalidMesh` if the mesh is inconsistent or has more
    /// vertices than a 16-bit element index can address.
    pub fn from_mesh(mesh: &TriangleMesh) -> OrogenResult<Self> {
        mesh.validate()?;

        let n = mesh.vertex_count();
        if n > u16::MAX as usize + 1 {
            return Err(OrogenError::InvalidMesh(format!(
                "{} vertices exceed the 16-bit index range ({} max)",
                n,
                u16::MAX as usize + 1
            )));
        }

        let mut positions = Vec::with_capacity(n * 3);
        let mut normals = Vec::with_capacity(n * 3);
        for i in 0..n {
            positions.push(mesh.pos_x[i]);
            positions.push(mesh.pos_y[i]);
            positions.push(mesh.pos_z[i]);
            normals.push(mesh.normal_x[i]);
            normals.push(mesh.normal_y[i]);
            normals.push(mesh.normal_z[i]);
        }

        let indices = mesh.indices.iter().map(|&i| i as u16).collect();

        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    /// Number of vertices in the flattened buffers.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of index triples.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
