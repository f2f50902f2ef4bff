//! Spherical shell (a sphere with a concentric hole).
use glam::Vec3;
use rand::Rng as RngCore;

use crate::error::{Error, Result};
use crate::random::{deviate, deviates};
use crate::volume::cuboid::cuboid_from_deviates;
use crate::volume::sphere::direction_scaled;
use crate::volume::validate_radii;

/// Attempt budget for the radial deviate in [`SphericalShell::sample`].
pub const SHELL_RADIUS_ATTEMPTS: usize = 100;

/// Attempt budget for [`SphericalShell::sample_by_discarding`].
pub const SHELL_DISCARD_ATTEMPTS: usize = 100;

/// Region between two concentric spheres, `inner <= |p| <= outer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalShell {
    inner: f32,
    outer: f32,
    /// `(inner / outer)^3`: radial deviates below it would land in the hole.
    min_radial_deviate: f32,
}

impl SphericalShell {
    pub fn try_new(inner: f32, outer: f32) -> Result<Self> {
        validate_radii(inner, outer)?;
        Ok(Self {
            inner,
            outer,
            min_radial_deviate: (inner / outer).powi(3),
        })
    }

    pub fn inner(&self) -> f32 {
        self.inner
    }

    pub fn outer(&self) -> f32 {
        self.outer
    }

    /// Inverse-CDF sampling on the enclosed volume.
    ///
    /// Radial deviates are redrawn until one reaches `(inner / outer)^3`, then
    /// `r = outer * u^(1/3)` followed by the azimuth and polar deviates.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Result<Vec3> {
        for _ in 0..SHELL_RADIUS_ATTEMPTS {
            let u = deviate(rng);
            if u >= self.min_radial_deviate {
                let r = u.cbrt() * self.outer;
                return Ok(direction_scaled(r, deviate(rng), deviate(rng)));
            }
        }
        Err(Error::exhausted(
            SHELL_RADIUS_ATTEMPTS,
            format!(
                "no radius in shell [{}, {}] from the radial deviate",
                self.inner, self.outer
            ),
        ))
    }

    /// Rejection sampling from the bounding cube `[-outer, outer)^3`.
    pub fn sample_by_discarding(&self, rng: &mut dyn RngCore) -> Result<Vec3> {
        let extent = Vec3::splat(2.0 * self.outer);
        let sqr_inner = self.inner * self.inner;
        let sqr_outer = self.outer * self.outer;
        for _ in 0..SHELL_DISCARD_ATTEMPTS {
            let point = cuboid_from_deviates(extent, deviates(rng));
            let sqr = point.length_squared();
            if sqr >= sqr_inner && sqr <= sqr_outer {
                return Ok(point);
            }
        }
        Err(Error::exhausted(
            SHELL_DISCARD_ATTEMPTS,
            format!("no point inside shell [{}, {}]", self.inner, self.outer),
        ))
    }
}

/// Uniform point in the shell `inner <= |p| <= outer`.
pub fn uniform_in_spherical_shell(inner: f32, outer: f32, rng: &mut dyn RngCore) -> Result<Vec3> {
    SphericalShell::try_new(inner, outer)?.sample(rng)
}

/// Uniform point in the shell `inner <= |p| <= outer`, by rejection from the bounding cube.
pub fn uniform_in_spherical_shell_by_discarding(
    inner: f32,
    outer: f32,
    rng: &mut dyn RngCore,
) -> Result<Vec3> {
    SphericalShell::try_new(inner, outer)?.sample_by_discarding(rng)
}
