//! Terrain generation parameters.

use serde::{Deserialize, Serialize};
use orogen_types::{OrogenError, OrogenResult, Scalar};

/// Parameters for one terrain generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Vertices per grid edge. The mesh has `dim * dim` vertices.
    pub dim: u32,

    /// Spacing between adjacent grid vertices.
    pub cell_size: Scalar,

    /// Number of fault displacement passes. Zero leaves the grid flat.
    pub iterations: u32,

    /// Seed for the displacement random stream.
    pub seed: u64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            dim: 128,
            cell_size: 0.1,
            iterations: 1024,
            seed: 0,
        }
    }
}

impl TerrainParams {
    /// Fails fast on parameters that cannot produce a valid grid.
    pub fn validate(&self) -> OrogenResult<()> {
        if self.dim < 2 {
            return Err(OrogenError::InvalidParameter(format!(
                "dim must be >= 2 (got {})",
                self.dim
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(OrogenError::InvalidParameter(format!(
                "cell_size must be finite and positive (got {})",
                self.cell_size
            )));
        }
        Ok(())
    }

    /// Side length of the grid in world units (`dim * cell_size`),
    /// the divisor that maps vertex XZ into fault space.
    #[inline]
    pub fn extent(&self) -> Scalar {
        self.dim as Scalar * self.cell_size
    }
}
