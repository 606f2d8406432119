//! Vertex normal computation from triangle mesh data.
//!
//! Computes face normals for every triangle, then accumulates them into
//! per-vertex normals through a [`VertexTriangleMap`]. The accumulation
//! follows whatever the map recorded — a vertex listed against a
//! triangle twice counts that face twice.

use orogen_math::geometry::face_normal;
use orogen_math::Vec3;
use orogen_types::constants::{DEGENERATE_NORMAL_THRESHOLD, FALLBACK_NORMAL};
use orogen_types::VertexId;

use crate::adjacency::VertexTriangleMap;
use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry via adjacency.
///
/// Each triangle's unnormalized face normal (magnitude proportional to
/// its area) is computed once; each vertex sums the face normals of the
/// triangles its map entry names, then normalizes. A vertex whose sum is
/// degenerate (unreferenced, or cancelling faces) gets the `(0, 1, 0)`
/// fallback instead of a NaN.
///
/// This modifies the mesh's `normal_x`, `normal_y`, `normal_z` arrays
/// in place.
pub fn accumulate_vertex_normals(mesh: &mut TriangleMesh, map: &VertexTriangleMap) {
    let face_normals = compute_face_normals(mesh);

    for v in 0..mesh.vertex_count() {
        let mut sum = Vec3::ZERO;
        for &offset in map.triangle_offsets(VertexId(v as u32)) {
            sum += face_normals[offset as usize / 3];
        }

        let len = sum.length();
        if len > DEGENERATE_NORMAL_THRESHOLD {
            let n = sum / len;
            mesh.set_normal(v, n.x, n.y, n.z);
        } else {
            let [x, y, z] = FALLBACK_NORMAL;
            mesh.set_normal(v, x, y, z);
        }
    }
}

/// Unnormalized face normal of every triangle, in triangle order.
pub fn compute_face_normals(mesh: &TriangleMesh) -> Vec<Vec3> {
    let tri_count = mesh.triangle_count();
    let mut face_normals = Vec::with_capacity(tri_count);

    for t in 0..tri_count {
        let [a, b, c] = mesh.triangle(t);
        face_normals.push(face_normal(
            mesh.position_vec3(a as usize),
            mesh.position_vec3(b as usize),
            mesh.position_vec3(c as usize),
        ));
    }

    face_normals
}
