//! Axis-aligned box centered on the origin.
use glam::Vec3;
use rand::Rng as RngCore;

use crate::error::{ensure_positive, Result};
use crate::random::{deviates, next_down};

/// Axis-aligned cuboid centered on the origin, covering `[-extent/2, extent/2)` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    extent: Vec3,
}

impl Cuboid {
    /// Creates a cuboid, rejecting non-positive or non-finite extents.
    pub fn try_new(extent: Vec3) -> Result<Self> {
        ensure_positive("extent.x", extent.x)?;
        ensure_positive("extent.y", extent.y)?;
        ensure_positive("extent.z", extent.z)?;
        Ok(Self { extent })
    }

    pub fn extent(&self) -> Vec3 {
        self.extent
    }

    pub fn half_extent(&self) -> Vec3 {
        self.extent * 0.5
    }

    /// True if `point` lies in the half-open box `[-extent/2, extent/2)`.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        let half = self.half_extent();
        point.cmpge(-half).all() && point.cmplt(half).all()
    }

    /// Draws a uniform point using three deviates (x, y, z).
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        cuboid_from_deviates(self.extent, deviates(rng))
    }
}

/// Maps three deviates to `(u - 0.5) * extent` per axis.
///
/// Coordinates that round up onto the positive face are pulled back below it.
pub fn cuboid_from_deviates(extent: Vec3, u: [f32; 3]) -> Vec3 {
    let half = extent * 0.5;
    Vec3::new(
        keep_below((u[0] - 0.5) * extent.x, half.x),
        keep_below((u[1] - 0.5) * extent.y, half.y),
        keep_below((u[2] - 0.5) * extent.z, half.z),
    )
}

/// Uniform point in the `width x length x depth` cuboid centered on the origin.
pub fn uniform_in_cuboid(width: f32, length: f32, depth: f32, rng: &mut dyn RngCore) -> Vec3 {
    cuboid_from_deviates(Vec3::new(width, length, depth), deviates(rng))
}

#[inline]
fn keep_below(value: f32, half: f32) -> f32 {
    if half > 0.0 && value >= half {
        next_down(half)
    } else {
        value
    }
}
