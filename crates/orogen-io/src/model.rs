//! Wavefront-style model parsing.
//!
//! Line-oriented parser for the `v` / `vn` / `f` subset the demo models
//! use. Face entries may carry `/`-separated attribute references; only
//! the leading (1-based) position index is read. Anything else —
//! comments, object names, texture coordinates — is skipped.

use std::path::Path;

use orogen_mesh::normals::accumulate_vertex_normals;
use orogen_mesh::{TriangleMesh, VertexTriangleMap};
use orogen_types::{OrogenError, OrogenResult};

/// Reads and parses a model file.
pub fn load_model(path: &Path) -> OrogenResult<TriangleMesh> {
    let source = std::fs::read_to_string(path)?;
    parse_model(&source)
}

/// Parses model text into a mesh.
///
/// If the file carries no `vn` lines (or a count that does not match the
/// vertex count), normals are recomputed from the face geometry, one
/// adjacency entry per incident triangle.
pub fn parse_model(source: &str) -> OrogenResult<TriangleMesh> {
    let mut positions: Vec<f32> = Vec::new();
    let mut normals: Vec<f32> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        let line_no = line_no + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let [x, y, z] = parse_triple(&mut tokens, line_no, "vertex")?;
                positions.extend([x, y, z]);
            }
            Some("vn") => {
                let [x, y, z] = parse_triple(&mut tokens, line_no, "normal")?;
                normals.extend([x, y, z]);
            }
            Some("f") => {
                for _ in 0..3 {
                    let entry = tokens.next().ok_or_else(|| OrogenError::Parse {
                        line: line_no,
                        message: "face needs 3 vertex references".into(),
                    })?;
                    indices.push(parse_face_index(entry, line_no)?);
                }
            }
            // Comments, groups, materials, trailing attributes: skipped.
            _ => {}
        }
    }

    let have_normals = normals.len() == positions.len() && !normals.is_empty();
    let normal_data: &[f32] = if have_normals { &normals } else { &[] };
    let mut mesh = TriangleMesh::from_interleaved(&positions, &indices, normal_data)?;

    if !have_normals {
        let map = VertexTriangleMap::from_mesh(&mesh);
        accumulate_vertex_normals(&mut mesh, &map);
    }

    Ok(mesh)
}

/// Parses three whitespace-separated floats from the rest of a line.
fn parse_triple<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_no: usize,
    what: &str,
) -> OrogenResult<[f32; 3]> {
    let mut out = [0.0f32; 3];
    for slot in &mut out {
        let token = tokens.next().ok_or_else(|| OrogenError::Parse {
            line: line_no,
            message: format!("{what} needs 3 coordinates"),
        })?;
        *slot = token.parse().map_err(|_| OrogenError::Parse {
            line: line_no,
            message: format!("invalid {what} coordinate '{token}'"),
        })?;
    }
    Ok(out)
}

/// Parses one face entry (`7`, `7/1`, `7/1/3`, `7//3`) into a 0-based
/// position index.
fn parse_face_index(entry: &str, line_no: usize) -> OrogenResult<u32> {
    let leading = entry.split('/').next().unwrap_or(entry);
    let one_based: u32 = leading.parse().map_err(|_| OrogenError::Parse {
        line: line_no,
        message: format!("invalid face index '{entry}'"),
    })?;
    if one_based == 0 {
        return Err(OrogenError::Parse {
            line: line_no,
            message: "face indices are 1-based".into(),
        });
    }
    Ok(one_based - 1)
}
