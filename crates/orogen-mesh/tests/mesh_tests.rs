//! Integration tests for orogen-mesh.

use orogen_mesh::normals::accumulate_vertex_normals;
use orogen_mesh::{TriangleMesh, VertexTriangleMap};
use orogen_types::VertexId;

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0, 0.0, 0.0],
        normal_y: vec![0.0, 0.0, 0.0],
        normal_z: vec![1.0, 1.0, 1.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn triangle_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
}

#[test]
fn push_vertex_assigns_sequential_ids() {
    let mut mesh = TriangleMesh::with_capacity(2, 0);
    assert_eq!(mesh.push_vertex(1.0, 2.0, 3.0), 0);
    assert_eq!(mesh.push_vertex(4.0, 5.0, 6.0), 1);
    assert_eq!(mesh.position(1), [4.0, 5.0, 6.0]);
    // Normals start zeroed.
    assert_eq!(mesh.normal_vec3(0).length(), 0.0);
}

#[test]
fn validate_ok() {
    let mesh = make_single_triangle();
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_ragged_indices() {
    let mut mesh = make_single_triangle();
    mesh.indices.push(2);
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = vec![0, 1, 2];
    let normals = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &indices, &normals).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.normal_z, vec![1.0, 1.0, 1.0]);
}

#[test]
fn from_interleaved_without_normals_zeroes_them() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2], &[]).unwrap();
    assert_eq!(mesh.normal_x, vec![0.0, 0.0, 0.0]);
}

// ─── Adjacency Tests ──────────────────────────────────────────

fn make_two_triangles() -> TriangleMesh {
    // A unit quad in the XZ plane split along the diagonal 1–2.
    let positions = vec![
        0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, //
        1.0, 0.0, 0.0, //
        1.0, 0.0, 1.0,
    ];
    TriangleMesh::from_interleaved(&positions, &[0, 1, 2, 1, 3, 2], &[]).unwrap()
}

#[test]
fn from_mesh_records_one_entry_per_incident_triangle() {
    let mesh = make_two_triangles();
    let map = VertexTriangleMap::from_mesh(&mesh);
    assert_eq!(map.vertex_count(), 4);
    assert_eq!(map.triangle_offsets(VertexId(0)), &[0]);
    assert_eq!(map.triangle_offsets(VertexId(3)), &[3]);
    // Diagonal vertices touch both triangles.
    assert_eq!(map.triangle_offsets(VertexId(1)), &[0, 3]);
    assert_eq!(map.triangle_offsets(VertexId(2)), &[0, 3]);
}

#[test]
fn record_accumulates_duplicates() {
    let mut map = VertexTriangleMap::with_vertex_count(1);
    map.record(VertexId(0), 0);
    map.record(VertexId(0), 0);
    map.record(VertexId(0), 3);
    assert_eq!(map.triangle_offsets(VertexId(0)), &[0, 0, 3]);
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_quad_normals_point_up() {
    let mut mesh = make_two_triangles();
    let map = VertexTriangleMap::from_mesh(&mesh);
    accumulate_vertex_normals(&mut mesh, &map);
    for i in 0..mesh.vertex_count() {
        assert!(mesh.normal_x[i].abs() < 1e-6);
        assert!((mesh.normal_y[i] - 1.0).abs() < 1e-6);
        assert!(mesh.normal_z[i].abs() < 1e-6);
    }
}

#[test]
fn normals_are_unit_length() {
    // Tilt one vertex of the quad so the faces disagree.
    let mut mesh = make_two_triangles();
    mesh.pos_y[3] = 0.7;
    let map = VertexTriangleMap::from_mesh(&mesh);
    accumulate_vertex_normals(&mut mesh, &map);
    for i in 0..mesh.vertex_count() {
        let len = mesh.normal_vec3(i).length();
        assert!((len - 1.0).abs() < 1e-5, "Normal at {} has length {}", i, len);
    }
}

#[test]
fn unreferenced_vertex_gets_fallback_normal() {
    let mut mesh = make_two_triangles();
    mesh.push_vertex(5.0, 5.0, 5.0);
    let map = VertexTriangleMap::from_mesh(&mesh);
    accumulate_vertex_normals(&mut mesh, &map);
    let orphan = mesh.vertex_count() - 1;
    assert_eq!(
        [mesh.normal_x[orphan], mesh.normal_y[orphan], mesh.normal_z[orphan]],
        [0.0, 1.0, 0.0]
    );
}

#[test]
fn duplicate_map_entries_bias_but_stay_unit() {
    // Record one face twice for a shared vertex; the sum doubles but the
    // normalized result must still be unit length.
    let mut mesh = make_two_triangles();
    mesh.pos_y[0] = 0.3;
    let mut map = VertexTriangleMap::from_mesh(&mesh);
    map.record(VertexId(1), 0);
    accumulate_vertex_normals(&mut mesh, &map);
    let len = mesh.normal_vec3(1).length();
    assert!((len - 1.0).abs() < 1e-5);
}
