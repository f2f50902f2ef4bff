//! Planar annulus (ring) centered on the origin.
use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng as RngCore;

use crate::error::Result;
use crate::random::deviate;
use crate::volume::validate_radii;

/// Ring between two concentric circles, `inner <= |p| <= outer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    inner: f32,
    outer: f32,
}

impl Annulus {
    pub fn try_new(inner: f32, outer: f32) -> Result<Self> {
        validate_radii(inner, outer)?;
        Ok(Self { inner, outer })
    }

    pub fn inner(&self) -> f32 {
        self.inner
    }

    pub fn outer(&self) -> f32 {
        self.outer
    }

    /// Radius deviate first, then angle deviate.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec2 {
        let u_radius = deviate(rng);
        let u_angle = deviate(rng);
        self.map(u_radius, u_angle)
    }

    #[inline]
    fn map(&self, u_radius: f32, u_angle: f32) -> Vec2 {
        let sqr_inner = self.inner * self.inner;
        let sqr_outer = self.outer * self.outer;
        let r = (u_radius * (sqr_outer - sqr_inner) + sqr_inner).sqrt();
        let theta = u_angle * TAU;
        Vec2::new(r * theta.cos(), r * theta.sin())
    }
}

/// `r^2` uniform in `[inner^2, outer^2]`, `theta = 2 pi u_angle`.
pub fn annulus_from_deviates(inner: f32, outer: f32, u_radius: f32, u_angle: f32) -> Result<Vec2> {
    Ok(Annulus::try_new(inner, outer)?.map(u_radius, u_angle))
}

/// Uniform point in the annulus `inner <= |p| <= outer`.
pub fn uniform_in_annulus(inner: f32, outer: f32, rng: &mut dyn RngCore) -> Result<Vec2> {
    Ok(Annulus::try_new(inner, outer)?.sample(rng))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;

    #[test]
    fn invalid_radii_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            uniform_in_annulus(1.0, -1.0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(uniform_in_annulus(-1.0, 1.0, &mut rng).is_err());
        assert!(uniform_in_annulus(1.0, 1.0, &mut rng).is_err());
        assert!(annulus_from_deviates(2.0, 1.0, 0.5, 0.5).is_err());
    }

    #[test]
    fn magnitude_stays_between_one_and_two() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let m = uniform_in_annulus(1.0, 2.0, &mut rng).unwrap().length();
            assert!((1.0 - 1e-5..=2.0 + 1e-5).contains(&m), "magnitude {m}");
        }
    }

    #[test]
    fn deviate_extremes_land_on_the_rims() {
        let inner = annulus_from_deviates(1.0, 2.0, 0.0, 0.0).unwrap();
        assert!((inner - Vec2::new(1.0, 0.0)).length() < 1e-6);

        let quarter = annulus_from_deviates(1.0, 2.0, 1.0, 0.25).unwrap();
        assert!((quarter - Vec2::new(0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn seeded_generators_reproduce_and_differ() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let mut c = StdRng::seed_from_u64(43);
        let pa = uniform_in_annulus(1.0, 2.0, &mut a).unwrap();
        let pb = uniform_in_annulus(1.0, 2.0, &mut b).unwrap();
        let pc = uniform_in_annulus(1.0, 2.0, &mut c).unwrap();
        assert_eq!(pa, pb);
        assert_ne!(pa, pc);
    }
}
