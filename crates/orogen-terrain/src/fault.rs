//! Iterative fault displacement and height normalization.
//!
//! Each pass draws a random line through the unit square and pushes
//! vertices up on one side, down on the other, smoothed through an
//! arctangent profile. The schedule couples sharpness and amplitude
//! inversely over the pass count: early passes are broad and soft
//! (small `atan` argument, large amplitude), late passes are sharp,
//! fault-like steps of small amplitude (saturated `atan`, small
//! amplitude).

use rand::Rng;
use orogen_mesh::TriangleMesh;
use orogen_types::constants::{EPSILON, FAULT_AMPLITUDE, FAULT_SHARPNESS, HEIGHT_RANGE};

use crate::params::TerrainParams;

/// Applies `params.iterations` fault displacement passes in place.
///
/// Pass `i` draws a point `p` in `[0,1)²` and a direction
/// `d = (cos θ, sin θ)` (point x, point z, then angle — the draw order
/// defines the seeded stream), then for every vertex offsets Y by
///
/// ```text
/// 0.1 * ((iterations - i) / iterations)
///     * atan((i / iterations)² * 400 * s)
/// ```
///
/// where `s = ((x, z) / (dim * cell_size) - p) · d`, the vertex's signed
/// distance to the fault line in unit-square space. Only Y is touched.
pub fn displace(mesh: &mut TriangleMesh, params: &TerrainParams, rng: &mut impl Rng) {
    let iterations = params.iterations;
    let extent = params.extent();

    for i in 0..iterations {
        let px: f32 = rng.random();
        let pz: f32 = rng.random();
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let (dx, dz) = (theta.cos(), theta.sin());

        let amplitude = (iterations - i) as f32 / iterations as f32;
        let sharpness = (i as f32 / iterations as f32).powi(2) * FAULT_SHARPNESS;

        for v in 0..mesh.vertex_count() {
            let vx = mesh.pos_x[v] / extent;
            let vz = mesh.pos_z[v] / extent;
            let s = (vx - px) * dx + (vz - pz) * dz;
            mesh.pos_y[v] += FAULT_AMPLITUDE * amplitude * (sharpness * s).atan();
        }
    }
}

/// Remaps vertex heights linearly onto `[0, HEIGHT_RANGE]` in place.
///
/// When the height range is degenerate (zero iterations, or passes that
/// cancelled out), every height becomes 0 instead of dividing by zero.
pub fn normalize_heights(mesh: &mut TriangleMesh) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &y in &mesh.pos_y {
        min = min.min(y);
        max = max.max(y);
    }

    let range = max - min;
    if !range.is_finite() || range <= EPSILON {
        for y in &mut mesh.pos_y {
            *y = 0.0;
        }
        return;
    }

    for y in &mut mesh.pos_y {
        *y = (*y - min) / range * HEIGHT_RANGE;
    }
}
