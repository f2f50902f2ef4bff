#![forbid(unsafe_code)]
//! volume_scatter: blue-noise point placement in 2D and 3D volumes.
//!
//! Modules:
//! - volume: uniform random points in cuboids, spheres, spherical shells and annuli
//! - sampling: Poisson disk sampling with a fixed or gradient-driven minimum distance
//! - random: deviate extraction and the boundary-level default generator
//!
//! Every sampling call takes the generator explicitly; identical generator state and
//! parameters give identical output.
pub mod error;
pub mod random;
pub mod sampling;
pub mod volume;

/// Convenient re-exports for common types. Import with `use volume_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::random::{deviate, with_default_rng};
    pub use crate::sampling::{
        poisson_disk_sample, poisson_disk_sample_2d, poisson_disk_sample_graded,
        poisson_disk_sample_graded_2d, ActiveSampleList, GradientPoissonDiskSampling,
        PlanarSampling, PoissonDiskSampling, RadiusRange, SamplingGrid, VolumeSampling,
        DEFAULT_MAX_SAMPLE_ATTEMPTS,
    };
    pub use crate::volume::{
        biased_in_sphere, uniform_in_annulus, uniform_in_cuboid, uniform_in_sphere,
        uniform_in_sphere_by_discarding, uniform_in_spherical_shell,
        uniform_in_spherical_shell_by_discarding, Annulus, Cuboid, Sphere, SphericalShell,
    };
}
