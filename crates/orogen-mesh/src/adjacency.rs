//! Vertex-to-triangle adjacency.
//!
//! Maps each vertex id to the triangles that reference it, recorded as
//! start offsets into the mesh's flat `indices` array. Built once during
//! generation, consumed once by normal accumulation, then dropped.

use orogen_types::VertexId;

use crate::mesh::TriangleMesh;

/// Per-vertex list of adjacent triangle start offsets.
///
/// Entries are offsets into `TriangleMesh::indices` (always multiples
/// of 3); `offset / 3` is the triangle index. The outer array is sized
/// to the vertex count up front, so every insert is an amortized O(1)
/// push with no hashing.
///
/// Generators own what gets recorded: the grid builder records each
/// cell's two triangle offsets against all four cell corners (the
/// accumulation the terrain's shading is tuned against), while
/// [`VertexTriangleMap::from_mesh`] records exactly one entry per
/// incident triangle.
#[derive(Debug, Clone)]
pub struct VertexTriangleMap {
    offsets: Vec<Vec<u32>>,
}

impl VertexTriangleMap {
    /// Creates an empty map covering `vertex_count` vertices.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            offsets: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds the map from a mesh's index buffer, one entry per
    /// incident triangle.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        let mut map = Self::with_vertex_count(mesh.vertex_count());
        for t in 0..mesh.triangle_count() {
            let offset = (t * 3) as u32;
            let [a, b, c] = mesh.triangle(t);
            map.record(VertexId(a), offset);
            map.record(VertexId(b), offset);
            map.record(VertexId(c), offset);
        }
        map
    }

    /// Records a triangle start offset against a vertex.
    #[inline]
    pub fn record(&mut self, vertex: VertexId, triangle_offset: u32) {
        self.offsets[vertex.index()].push(triangle_offset);
    }

    /// Returns the recorded triangle start offsets for a vertex.
    #[inline]
    pub fn triangle_offsets(&self, vertex: VertexId) -> &[u32] {
        &self.offsets[vertex.index()]
    }

    /// Returns the number of vertices the map covers.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }
}
