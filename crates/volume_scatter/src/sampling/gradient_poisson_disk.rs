//! Poisson disk sampling with a radius that varies over space.
//!
//! The caller supplies a gradient field `f(position) -> [0, 1]`. When an active sample is
//! picked, its local radius is `minimal + f(sample) * (maximal - minimal)`, and candidates
//! spawned from it are drawn in the shell `[local, 2 local]`.
//!
//! A candidate is checked against existing points with the spawning sample's local radius
//! only, not with the radius each existing point was placed with. Near steep gradients a
//! point can therefore sit closer to a neighbour than that neighbour's own radius. Every
//! pair is still at least `minimal` apart.
//!
//! The background grid is sized for `maximal`. Since no local radius exceeds it, the
//! two-cell query window always covers the query radius; cells may hold several points.
use glam::{Vec2, Vec3};
use mint::Vector3;
use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ensure_positive, Error, Result};
use crate::sampling::grid::SamplingGrid;
use crate::sampling::poisson_disk::{PoissonDiskSampler, Region};
use crate::sampling::{
    validate_attempts, validate_spawn_radius, VolumeSampling, DEFAULT_MAX_SAMPLE_ATTEMPTS,
};
use crate::volume::{Annulus, Cuboid, SphericalShell};

/// Bounds of the local minimum distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadiusRange {
    /// Local radius where the gradient is 0.
    pub minimal: f32,
    /// Local radius where the gradient is 1.
    pub maximal: f32,
}

impl RadiusRange {
    pub fn new(minimal: f32, maximal: f32) -> Self {
        Self { minimal, maximal }
    }

    /// Both bounds strictly positive and `minimal < maximal`.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("minimal radius", self.minimal)?;
        ensure_positive("maximal radius", self.maximal)?;
        validate_spawn_radius("maximal radius", self.maximal)?;
        if self.minimal == self.maximal {
            return Err(Error::invalid(
                "maximal radius must be > minimal radius; use PoissonDiskSampling for a constant radius",
            ));
        }
        if self.minimal > self.maximal {
            return Err(Error::invalid(format!(
                "maximal radius must be > minimal radius (got {} < {})",
                self.maximal, self.minimal
            )));
        }
        Ok(())
    }

    /// Linear interpolation between the bounds for `t` in `[0, 1]`.
    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        self.minimal + t * (self.maximal - self.minimal)
    }
}

/// Poisson disk sampling strategy whose minimum distance follows a gradient field.
#[derive(Debug, Clone)]
pub struct GradientPoissonDiskSampling<G> {
    /// Radius bounds mapped from gradient values 0 and 1.
    pub radii: RadiusRange,
    /// Gradient field evaluated at each picked sample.
    pub gradient: G,
    /// Candidate draws per active sample before it is retired.
    pub max_sample_attempts: usize,
}

impl<G> GradientPoissonDiskSampling<G>
where
    G: Fn(Vec3) -> f32,
{
    pub fn new(radii: RadiusRange, gradient: G) -> Self {
        Self {
            radii,
            gradient,
            max_sample_attempts: DEFAULT_MAX_SAMPLE_ATTEMPTS,
        }
    }

    /// Sets the number of candidate draws per active sample.
    pub fn with_max_sample_attempts(mut self, max_sample_attempts: usize) -> Self {
        self.max_sample_attempts = max_sample_attempts;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.radii.validate()?;
        validate_attempts(self.max_sample_attempts)
    }
}

impl<G> VolumeSampling for GradientPoissonDiskSampling<G>
where
    G: Fn(Vec3) -> f32 + Send + Sync,
{
    fn generate(
        &self,
        volume_extent: Vector3<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector3<f32>>> {
        let points = poisson_disk_sample_graded(
            Vec3::from(volume_extent),
            self.radii.minimal,
            self.radii.maximal,
            &self.gradient,
            rng,
            self.max_sample_attempts,
        )?;
        Ok(points.into_iter().map(Into::into).collect())
    }
}

/// Poisson disk sampling inside the cuboid `[-extent/2, extent/2)` with a local radius
/// interpolated from `gradient` between `min_radius_minimal` and `min_radius_maximal`.
///
/// Candidate offsets come from the spherical shell sampler that discards cube draws; it
/// can fail with [`Error::SamplingExhausted`], which is passed through.
pub fn poisson_disk_sample_graded<G>(
    extent: Vec3,
    min_radius_minimal: f32,
    min_radius_maximal: f32,
    gradient: G,
    rng: &mut dyn RngCore,
    max_sample_attempts: usize,
) -> Result<Vec<Vec3>>
where
    G: Fn(Vec3) -> f32,
{
    let bounds = Cuboid::try_new(extent)?;
    let radii = RadiusRange::new(min_radius_minimal, min_radius_maximal);
    radii.validate()?;
    validate_attempts(max_sample_attempts)?;

    let grid = SamplingGrid::volumetric(extent, radii.maximal)?;
    let sampler = PoissonDiskSampler::new(Region::Volume(bounds), grid, max_sample_attempts);
    let mut weight = GradientWeight::default();
    sampler.run(
        rng,
        |sample| radii.at(weight.clamp(gradient(sample))),
        |radius, rng| SphericalShell::try_new(radius, 2.0 * radius)?.sample_by_discarding(rng),
    )
}

/// Planar counterpart of [`poisson_disk_sample_graded`], drawing offsets from the annulus
/// `[local, 2 local]`.
pub fn poisson_disk_sample_graded_2d<G>(
    extent: Vec2,
    min_radius_minimal: f32,
    min_radius_maximal: f32,
    gradient: G,
    rng: &mut dyn RngCore,
    max_sample_attempts: usize,
) -> Result<Vec<Vec2>>
where
    G: Fn(Vec2) -> f32,
{
    let region = Region::plane(extent)?;
    let radii = RadiusRange::new(min_radius_minimal, min_radius_maximal);
    radii.validate()?;
    validate_attempts(max_sample_attempts)?;

    let grid = SamplingGrid::planar(extent, radii.maximal)?;
    let sampler = PoissonDiskSampler::new(region, grid, max_sample_attempts);
    let mut weight = GradientWeight::default();
    let points = sampler.run(
        rng,
        |sample| radii.at(weight.clamp(gradient(sample.truncate()))),
        |radius, rng| Ok(Annulus::try_new(radius, 2.0 * radius)?.sample(rng).extend(0.0)),
    )?;
    Ok(points.into_iter().map(|p| p.truncate()).collect())
}

/// Clamps gradient values into `[0, 1]`. Non-finite values count as 0 and are reported
/// once per run.
#[derive(Debug, Default)]
struct GradientWeight {
    warned: bool,
}

impl GradientWeight {
    fn clamp(&mut self, value: f32) -> f32 {
        if value.is_finite() {
            return value.clamp(0.0, 1.0);
        }
        if !self.warned {
            warn!(
                "Gradient returned a non-finite value ({}); using the minimal radius.",
                value
            );
            self.warned = true;
        }
        0.0
    }
}
