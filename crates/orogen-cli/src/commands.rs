//! CLI command implementations.

use std::path::Path;

use orogen_io::GpuMesh;
use orogen_mesh::TriangleMesh;
use orogen_terrain::TerrainParams;

/// Flag-level terrain arguments; unset fields fall back to the config
/// file (when given) or the defaults.
pub struct TerrainArgs {
    pub dim: Option<u32>,
    pub cell_size: Option<f32>,
    pub iterations: Option<u32>,
    pub seed: Option<u64>,
    pub config: Option<String>,
}

/// Generate a terrain mesh and report its shape.
pub fn terrain(
    args: TerrainArgs,
    output_path: Option<&str>,
    interleaved: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut params = if let Some(ref path) = args.config {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str::<TerrainParams>(&content)
            .map_err(|e| format!("Failed to read config {path}: {e}"))?
    } else {
        TerrainParams::default()
    };

    if let Some(dim) = args.dim {
        params.dim = dim;
    }
    if let Some(cell_size) = args.cell_size {
        params.cell_size = cell_size;
    }
    if let Some(iterations) = args.iterations {
        params.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        params.seed = seed;
    }

    println!("Orogen Terrain");
    println!("──────────────");
    println!("Grid:        {}×{} @ {}", params.dim, params.dim, params.cell_size);
    println!("Iterations:  {}", params.iterations);
    println!("Seed:        {}", params.seed);
    println!();

    let mesh = orogen_terrain::generate(&params)?;
    print_mesh_stats(&mesh);

    write_output(&mesh, output_path, interleaved)
}

/// Generate a subdivided unit sphere and report its shape.
pub fn sphere(
    depth: u32,
    output_path: Option<&str>,
    interleaved: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Orogen Sphere");
    println!("─────────────");
    println!("Depth:       {depth}");
    println!();

    let mesh = orogen_sphere::unit_sphere(depth)?;
    print_mesh_stats(&mesh);

    write_output(&mesh, output_path, interleaved)
}

/// Validate a mesh or model file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Orogen Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: TriangleMesh = serde_json::from_str(&content)?;
        match mesh.validate() {
            Ok(()) => println!(
                "Mesh is valid ({} verts, {} tris).",
                mesh.vertex_count(),
                mesh.triangle_count()
            ),
            Err(e) => return Err(format!("Mesh validation failed: {e}").into()),
        }
    } else if path.ends_with(".obj") {
        println!("Validating model: {path}");
        let mesh = orogen_io::load_model(Path::new(path))?;
        println!(
            "Model is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    } else {
        return Err("Unsupported file format. Use .json (mesh) or .obj (model).".into());
    }

    Ok(())
}

fn print_mesh_stats(mesh: &TriangleMesh) {
    let min_y = mesh.pos_y.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_y = mesh.pos_y.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    println!("Vertices:    {}", mesh.vertex_count());
    println!("Triangles:   {}", mesh.triangle_count());
    println!("Y range:     [{:.4}, {:.4}]", min_y, max_y);
}

fn write_output(
    mesh: &TriangleMesh,
    output_path: Option<&str>,
    interleaved: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = output_path else {
        return Ok(());
    };

    let json = if interleaved {
        let gpu = GpuMesh::from_mesh(mesh)?;
        serde_json::to_string(&gpu)?
    } else {
        serde_json::to_string(mesh)?
    };

    std::fs::write(path, json)?;
    println!();
    println!("Mesh written to: {path}");
    Ok(())
}
