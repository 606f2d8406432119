//! Generation constants and numeric thresholds.

/// Height range the terrain is normalized onto: `[0, HEIGHT_RANGE]`.
pub const HEIGHT_RANGE: f32 = 3.0;

/// Base amplitude of a single fault displacement pass.
pub const FAULT_AMPLITUDE: f32 = 0.1;

/// Steepness multiplier inside the arctangent fault profile.
/// Scales the signed line distance before `atan` saturation.
pub const FAULT_SHARPNESS: f32 = 400.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Threshold below which an accumulated normal sum counts as degenerate.
pub const DEGENERATE_NORMAL_THRESHOLD: f32 = 1.0e-10;

/// Fallback normal for vertices whose accumulated normal sum is degenerate.
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];
