//! Recursive tetrahedral sphere subdivision.

use orogen_math::geometry::unit_midpoint;
use orogen_math::Vec3;
use orogen_mesh::TriangleMesh;
use orogen_types::{OrogenError, OrogenResult};

/// Unit vectors of the regular tetrahedron the subdivision starts from.
pub const TETRAHEDRON_SEED: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.0, 0.942809, 0.333333),
    Vec3::new(-0.816497, -0.471405, 0.333333),
    Vec3::new(0.816497, -0.471405, 0.333333),
];

/// Generates a unit sphere approximation at the given subdivision depth.
///
/// Each of the four seed faces becomes `4^depth` triangles, every vertex
/// lies on the unit sphere, and normals equal positions. Vertices are
/// duplicated per triangle, so the mesh holds `3 * 4 * 4^depth` vertices
/// for `4 * 4^depth` triangles.
///
/// Cost is `O(4^depth)` with no internal guard; callers bound the depth.
pub fn unit_sphere(depth: u32) -> OrogenResult<TriangleMesh> {
    let [a, b, c, d] = TETRAHEDRON_SEED;
    // CCW outward-facing seed faces; every edge appears once in each
    // direction, so the subdivided surface winds consistently.
    sphere_from_faces(&[[a, c, b], [d, b, c], [a, b, d], [a, d, c]], depth)
}

/// Subdivides an arbitrary convex seed solid's faces onto the unit
/// sphere.
///
/// Faces are CCW triangles of unit vectors; each contributes `4^depth`
/// triangles. Non-unit seed vectors fail fast — midpoint re-projection
/// assumes the corners already sit on the sphere.
pub fn sphere_from_faces(faces: &[[Vec3; 3]], depth: u32) -> OrogenResult<TriangleMesh> {
    for face in faces {
        for v in face {
            if (v.length() - 1.0).abs() > 1e-4 {
                return Err(OrogenError::InvalidParameter(format!(
                    "seed vector {v} is not unit length"
                )));
            }
        }
    }

    let tri_count = triangle_count(faces.len(), depth)?;
    let mut mesh = TriangleMesh::with_capacity(3 * tri_count, tri_count);

    for &[a, b, c] in faces {
        divide_triangle(a, b, c, depth, &mut mesh);
    }

    tracing::debug!(
        depth,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "sphere subdivided"
    );

    Ok(mesh)
}

/// Total triangle count `faces * 4^depth`, failing fast when the count
/// overflows instead of wrapping into a bogus allocation size.
fn triangle_count(faces: usize, depth: u32) -> OrogenResult<usize> {
    4usize
        .checked_pow(depth)
        .and_then(|per_face| per_face.checked_mul(faces))
        .ok_or_else(|| {
            OrogenError::InvalidParameter(format!(
                "subdivision depth {} overflows the triangle count",
                depth
            ))
        })
}

/// Recursively subdivides one spherical triangle `(a, b, c)`.
///
/// At depth 0 the triangle is emitted: three fresh vertices in winding
/// order, a sequential index triple, and the positions copied again as
/// normals (unit length by construction).
fn divide_triangle(a: Vec3, b: Vec3, c: Vec3, depth: u32, mesh: &mut TriangleMesh) {
    if depth == 0 {
        let base = mesh.vertex_count() as u32;
        mesh.indices.extend([base, base + 1, base + 2]);
        for v in [a, b, c] {
            let id = mesh.push_vertex(v.x, v.y, v.z) as usize;
            mesh.set_normal(id, v.x, v.y, v.z);
        }
    } else {
        let ab = unit_midpoint(a, b);
        let ac = unit_midpoint(a, c);
        let bc = unit_midpoint(b, c);

        divide_triangle(a, ab, ac, depth - 1, mesh);
        divide_triangle(ab, b, bc, depth - 1, mesh);
        divide_triangle(bc, c, ac, depth - 1, mesh);
        divide_triangle(ab, bc, ac, depth - 1, mesh);
    }
}
