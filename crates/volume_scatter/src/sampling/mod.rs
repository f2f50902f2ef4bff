//! Poisson disk sampling over cuboids and rectangles.
//!
//! Both engines grow a blue-noise point set by dart throwing: an active sample is picked
//! at random, candidates are drawn in the shell `[r, 2r]` around it, and a background
//! [`SamplingGrid`] rejects candidates closer than `r` to an existing point. A sample is
//! retired from the [`ActiveSampleList`] once it fails `max_sample_attempts` times in a row.
//!
//! - [`PoissonDiskSampling`]: one radius everywhere.
//! - [`GradientPoissonDiskSampling`]: radius interpolated per sample from a gradient field.
use mint::{Vector2, Vector3};
use rand::Rng as RngCore;

use crate::error::{Error, Result};
use crate::random::with_default_rng;

pub mod active;
pub mod gradient_poisson_disk;
pub mod grid;
pub mod poisson_disk;

pub use active::ActiveSampleList;
pub use gradient_poisson_disk::{
    poisson_disk_sample_graded, poisson_disk_sample_graded_2d, GradientPoissonDiskSampling,
    RadiusRange,
};
pub use grid::{SamplingGrid, MAX_GRID_CELLS};
pub use poisson_disk::{poisson_disk_sample, poisson_disk_sample_2d, PoissonDiskSampling};

/// Candidate draws per active sample before it is retired.
pub const DEFAULT_MAX_SAMPLE_ATTEMPTS: usize = 30;

/// Point sampling inside a cuboid of the given extent, centered on the origin.
pub trait VolumeSampling: Send + Sync {
    fn generate(
        &self,
        volume_extent: Vector3<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector3<f32>>>;

    /// Same as [`VolumeSampling::generate`] with the thread-local generator. Not reproducible.
    fn generate_with_default_rng(&self, volume_extent: Vector3<f32>) -> Result<Vec<Vector3<f32>>> {
        with_default_rng(|rng| self.generate(volume_extent, rng))
    }
}

/// Point sampling inside a rectangle of the given extent, centered on the origin.
pub trait PlanarSampling: Send + Sync {
    fn generate(
        &self,
        domain_extent: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector2<f32>>>;

    /// Same as [`PlanarSampling::generate`] with the thread-local generator. Not reproducible.
    fn generate_with_default_rng(&self, domain_extent: Vector2<f32>) -> Result<Vec<Vector2<f32>>> {
        with_default_rng(|rng| self.generate(domain_extent, rng))
    }
}

/// Candidates are drawn up to `2 * radius` away, and rejection samplers span a cube of
/// twice that. Rejects radii for which either is not representable.
pub(crate) fn validate_spawn_radius(name: &str, radius: f32) -> Result<()> {
    if (4.0 * radius).is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(format!(
            "{name} is too large to draw candidates around a sample (got {radius})"
        )))
    }
}

pub(crate) fn validate_attempts(max_sample_attempts: usize) -> Result<()> {
    if max_sample_attempts == 0 {
        return Err(Error::invalid("max_sample_attempts must be > 0"));
    }
    Ok(())
}
