//! # orogen-io
//!
//! The I/O boundary of the Orogen toolkit.
//!
//! Defines the flattened buffer contract the renderer uploads from
//! ([`GpuMesh`]) and a line-oriented Wavefront-style model parser.
//! The core generators never touch a graphics context; everything
//! crosses this boundary as plain arrays.

pub mod contract;
pub mod model;

pub use contract::GpuMesh;
pub use model::{load_model, parse_model};
