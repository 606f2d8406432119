//! Terrain generation pipeline.
//!
//! Wires grid construction, fault displacement, height normalization,
//! and normal accumulation into a single all-or-nothing call.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use orogen_mesh::normals::accumulate_vertex_normals;
use orogen_mesh::TriangleMesh;
use orogen_types::OrogenResult;

use crate::{fault, grid, params::TerrainParams};

/// Generates a terrain mesh from seeded parameters.
///
/// Deterministic: the same parameters (including `seed`) always produce
/// a bit-identical mesh.
pub fn generate(params: &TerrainParams) -> OrogenResult<TriangleMesh> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    generate_with(params, &mut rng)
}

/// Generates a terrain mesh drawing fault lines from the given source.
///
/// Validation happens before any allocation; a parameter error aborts
/// the whole run with nothing built.
pub fn generate_with(params: &TerrainParams, rng: &mut impl Rng) -> OrogenResult<TriangleMesh> {
    params.validate()?;

    let (mut mesh, adjacency) = grid::build(params);
    fault::displace(&mut mesh, params, rng);
    fault::normalize_heights(&mut mesh);
    accumulate_vertex_normals(&mut mesh, &adjacency);

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        iterations = params.iterations,
        "terrain generated"
    );

    Ok(mesh)
}
