//! Flat grid construction and triangulation.
//!
//! Builds the `dim × dim` vertex lattice, the two-triangle-per-cell
//! index list, and the vertex→triangle adjacency map in a single pass
//! over the cells.

use orogen_mesh::{TriangleMesh, VertexTriangleMap};
use orogen_types::VertexId;

use crate::params::TerrainParams;

/// Builds the flat grid mesh and its adjacency map.
///
/// Vertices are laid out row-major, `vertex_id(x, y) = x + y * dim`,
/// at position `(x * cell_size, 0, y * cell_size)`. Each cell is split
/// along the fixed diagonal into `(idx, idx+dim, idx+1)` and
/// `(idx+dim, idx+dim+1, idx+1)` — this diagonal choice determines the
/// mesh's grain under deformation and is not configurable.
///
/// Adjacency recording: each cell records **both** of its triangle
/// start offsets against **all four** corner vertices, and a vertex
/// shared between cells accumulates the entries of every owning cell.
/// Normal accumulation therefore counts some faces more than once per
/// vertex. The terrain's shading is tuned against exactly this bias —
/// keep it when touching the cell loop.
pub fn build(params: &TerrainParams) -> (TriangleMesh, VertexTriangleMap) {
    let dim = params.dim as usize;
    let vertex_count = dim * dim;
    let tri_count = 2 * (dim - 1) * (dim - 1);

    let mut mesh = TriangleMesh::with_capacity(vertex_count, tri_count);
    let mut map = VertexTriangleMap::with_vertex_count(vertex_count);

    // Vertex lattice
    for y in 0..dim {
        for x in 0..dim {
            mesh.push_vertex(x as f32 * params.cell_size, 0.0, y as f32 * params.cell_size);
        }
    }

    // Two triangles per cell, plus adjacency
    let stride = dim as u32;
    for y in 0..dim - 1 {
        for x in 0..dim - 1 {
            let idx = (x + y * dim) as u32;

            mesh.indices.extend([idx, idx + stride, idx + 1]);
            mesh.indices.extend([idx + stride, idx + stride + 1, idx + 1]);

            let second = mesh.indices.len() as u32 - 3;
            let first = mesh.indices.len() as u32 - 6;
            for corner in [idx, idx + stride, idx + stride + 1, idx + 1] {
                map.record(VertexId(corner), second);
                map.record(VertexId(corner), first);
            }
        }
    }

    (mesh, map)
}
