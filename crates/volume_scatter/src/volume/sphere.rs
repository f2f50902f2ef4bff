//! Solid sphere centered on the origin.
use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng as RngCore;

use crate::error::{ensure_positive, Error, Result};
use crate::random::{deviate, deviates};
use crate::volume::cuboid::cuboid_from_deviates;

/// Attempt budget for [`Sphere::sample_by_discarding`]. A sphere fills ~52% of its
/// bounding cube, so 20 tries fail with probability below 1e-6.
pub const SPHERE_DISCARD_ATTEMPTS: usize = 20;

/// Solid sphere of a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    pub fn try_new(radius: f32) -> Result<Self> {
        ensure_positive("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inverse-CDF sampling: radius, then azimuth, then polar deviate.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        sphere_from_deviates(self.radius, deviates(rng))
    }

    /// Rejection sampling from the bounding cube `[-r, r)^3`.
    pub fn sample_by_discarding(&self, rng: &mut dyn RngCore) -> Result<Vec3> {
        let extent = Vec3::splat(2.0 * self.radius);
        let sqr_radius = self.radius * self.radius;
        for _ in 0..SPHERE_DISCARD_ATTEMPTS {
            let point = cuboid_from_deviates(extent, deviates(rng));
            if point.length_squared() <= sqr_radius {
                return Ok(point);
            }
        }
        Err(Error::exhausted(
            SPHERE_DISCARD_ATTEMPTS,
            format!("no point inside sphere of radius {}", self.radius),
        ))
    }

    /// Radius drawn linearly instead of by cube root: NOT uniform, points crowd the center.
    pub fn sample_biased(&self, rng: &mut dyn RngCore) -> Vec3 {
        let r = deviate(rng) * self.radius;
        direction_scaled(r, deviate(rng), deviate(rng))
    }
}

/// `r = radius * u0^(1/3)`, `theta = 2 pi u1`, `phi = acos(2 u2 - 1)`.
pub fn sphere_from_deviates(radius: f32, u: [f32; 3]) -> Vec3 {
    let r = u[0].cbrt() * radius;
    direction_scaled(r, u[1], u[2])
}

/// Converts a radius and two angle deviates to Cartesian coordinates.
///
/// The polar angle goes through `acos(2u - 1)` so directions do not bunch at the poles.
#[inline]
pub(crate) fn direction_scaled(r: f32, u_theta: f32, u_phi: f32) -> Vec3 {
    let theta = u_theta * TAU;
    let phi = (2.0 * u_phi - 1.0).clamp(-1.0, 1.0).acos();
    let sin_phi = phi.sin();
    Vec3::new(
        r * theta.cos() * sin_phi,
        r * theta.sin() * sin_phi,
        r * phi.cos(),
    )
}

/// Uniform point inside a sphere of `radius`.
pub fn uniform_in_sphere(radius: f32, rng: &mut dyn RngCore) -> Result<Vec3> {
    Ok(Sphere::try_new(radius)?.sample(rng))
}

/// Uniform point inside a sphere of `radius`, by rejection from the bounding cube.
pub fn uniform_in_sphere_by_discarding(radius: f32, rng: &mut dyn RngCore) -> Result<Vec3> {
    Sphere::try_new(radius)?.sample_by_discarding(rng)
}

/// Point inside a sphere of `radius`, biased towards the center. See [`Sphere::sample_biased`].
pub fn biased_in_sphere(radius: f32, rng: &mut dyn RngCore) -> Result<Vec3> {
    Ok(Sphere::try_new(radius)?.sample_biased(rng))
}
