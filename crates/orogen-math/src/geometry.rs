//! Triangle and sphere-surface helpers.

use glam::Vec3;

/// Unnormalized face normal of triangle `(a, b, c)` in winding order.
///
/// `cross(b - a, c - a)` — magnitude is twice the triangle area, so
/// accumulating these weights vertex normals by adjacent face area.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// Midpoint of `a` and `b` projected back onto the unit sphere.
///
/// Both inputs must be unit length and non-antipodal; the subdivision
/// recursion only ever feeds it vertices of the same spherical triangle.
#[inline]
pub fn unit_midpoint(a: Vec3, b: Vec3) -> Vec3 {
    a.lerp(b, 0.5).normalize()
}
