//! Integration tests for orogen-types.

use orogen_types::{OrogenError, TriangleId, VertexId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn vertex_id_index() {
    let id = VertexId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn triangle_id_index() {
    let id = TriangleId(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_not_interchangeable() {
    // Compile-time guarantee — these types are distinct.
    let _v = VertexId(0);
    let _t = TriangleId(0);
}

#[test]
fn ids_are_serializable() {
    let id = VertexId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: VertexId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = OrogenError::InvalidMesh("index 9 out of range".into());
    assert!(err.to_string().contains("index 9 out of range"));
}

#[test]
fn parse_error_names_line() {
    let err = OrogenError::Parse {
        line: 12,
        message: "expected 3 coordinates".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains("expected 3 coordinates"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: OrogenError = io.into();
    assert!(err.to_string().contains("missing"));
}
