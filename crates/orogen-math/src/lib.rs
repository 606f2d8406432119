//! # orogen-math
//!
//! Linear algebra primitives for the Orogen mesh generators.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, etc.)
//! - Triangle and sphere-surface helpers shared by the generators

pub mod geometry;

// Re-export glam types as the canonical math types for Orogen.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
