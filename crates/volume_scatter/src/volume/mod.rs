//! Uniform random points inside canonical shapes.
//!
//! Each shape comes as a validated descriptor ([`Cuboid`], [`Sphere`], [`SphericalShell`],
//! [`Annulus`]) with sampling methods, plus free functions that validate and sample in one
//! call. Shapes are centered on the origin. The deviate-level functions
//! ([`cuboid_from_deviates`], [`sphere_from_deviates`], [`annulus_from_deviates`]) are pure
//! mappings from uniform deviates in `[0, 1)` to points.
//!
//! Deviates are always consumed in the documented order, so two generators in the same
//! state produce the same points.
pub mod annulus;
pub mod cuboid;
pub mod shell;
pub mod sphere;

pub use annulus::{annulus_from_deviates, uniform_in_annulus, Annulus};
pub use cuboid::{cuboid_from_deviates, uniform_in_cuboid, Cuboid};
pub use shell::{
    uniform_in_spherical_shell, uniform_in_spherical_shell_by_discarding, SphericalShell,
    SHELL_DISCARD_ATTEMPTS, SHELL_RADIUS_ATTEMPTS,
};
pub use sphere::{
    biased_in_sphere, sphere_from_deviates, uniform_in_sphere, uniform_in_sphere_by_discarding,
    Sphere, SPHERE_DISCARD_ATTEMPTS,
};

use crate::error::{ensure_positive, Error, Result};

/// Checks the radius pair of a holed shape: both strictly positive, `inner < outer`.
pub(crate) fn validate_radii(inner: f32, outer: f32) -> Result<()> {
    ensure_positive("outer radius", outer)?;
    ensure_positive("inner radius", inner)?;
    if inner >= outer {
        return Err(Error::invalid(format!(
            "inner radius must be < outer radius (got {inner} >= {outer})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_radii_rejects_inverted_and_equal_pairs() {
        assert!(validate_radii(2.0, 1.0).is_err());
        assert!(validate_radii(1.0, 1.0).is_err());
        assert!(validate_radii(0.0, 1.0).is_err());
        assert!(validate_radii(1.0, -1.0).is_err());
        assert!(validate_radii(0.5, 1.0).is_ok());
    }
}
