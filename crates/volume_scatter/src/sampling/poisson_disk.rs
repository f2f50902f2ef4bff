//! Fixed-radius Poisson disk sampling strategy.
use glam::{Vec2, Vec3};
use mint::{Vector2, Vector3};
use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive, Result};
use crate::random::deviates;
use crate::sampling::active::ActiveSampleList;
use crate::sampling::grid::SamplingGrid;
use crate::sampling::{
    validate_attempts, validate_spawn_radius, PlanarSampling, VolumeSampling,
    DEFAULT_MAX_SAMPLE_ATTEMPTS,
};
use crate::volume::{cuboid_from_deviates, Annulus, Cuboid, SphericalShell};

/// Poisson disk sampling strategy with one minimum distance everywhere.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidate draws per active sample before it is retired.
    pub max_sample_attempts: usize,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with specified radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            max_sample_attempts: DEFAULT_MAX_SAMPLE_ATTEMPTS,
        }
    }

    /// Sets the number of candidate draws per active sample.
    pub fn with_max_sample_attempts(mut self, max_sample_attempts: usize) -> Self {
        self.max_sample_attempts = max_sample_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("radius", self.radius)?;
        validate_spawn_radius("radius", self.radius)?;
        validate_attempts(self.max_sample_attempts)
    }
}

impl VolumeSampling for PoissonDiskSampling {
    fn generate(
        &self,
        volume_extent: Vector3<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector3<f32>>> {
        let points = poisson_disk_sample(
            Vec3::from(volume_extent),
            self.radius,
            rng,
            self.max_sample_attempts,
        )?;
        Ok(points.into_iter().map(Into::into).collect())
    }
}

impl PlanarSampling for PoissonDiskSampling {
    fn generate(
        &self,
        domain_extent: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector2<f32>>> {
        let points = poisson_disk_sample_2d(
            Vec2::from(domain_extent),
            self.radius,
            rng,
            self.max_sample_attempts,
        )?;
        Ok(points.into_iter().map(Into::into).collect())
    }
}

/// Poisson disk sampling inside the cuboid `[-extent/2, extent/2)`.
///
/// Every pair of returned points is at least `min_radius` apart. The first point is the
/// uniformly drawn seed. Candidates come from the spherical shell `[r, 2r]` around a
/// randomly picked active sample.
pub fn poisson_disk_sample(
    extent: Vec3,
    min_radius: f32,
    rng: &mut dyn RngCore,
    max_sample_attempts: usize,
) -> Result<Vec<Vec3>> {
    let bounds = Cuboid::try_new(extent)?;
    ensure_positive("min_radius", min_radius)?;
    validate_spawn_radius("min_radius", min_radius)?;
    validate_attempts(max_sample_attempts)?;

    let shell = SphericalShell::try_new(min_radius, 2.0 * min_radius)?;
    let grid = SamplingGrid::volumetric(extent, min_radius)?;
    let sampler = PoissonDiskSampler::new(Region::Volume(bounds), grid, max_sample_attempts);
    sampler.run(rng, |_| min_radius, |_, rng| shell.sample(rng))
}

/// Poisson disk sampling inside the rectangle `[-extent/2, extent/2)`.
///
/// Candidates come from the annulus `[r, 2r]` around a randomly picked active sample.
pub fn poisson_disk_sample_2d(
    extent: Vec2,
    min_radius: f32,
    rng: &mut dyn RngCore,
    max_sample_attempts: usize,
) -> Result<Vec<Vec2>> {
    let region = Region::plane(extent)?;
    ensure_positive("min_radius", min_radius)?;
    validate_spawn_radius("min_radius", min_radius)?;
    validate_attempts(max_sample_attempts)?;

    let annulus = Annulus::try_new(min_radius, 2.0 * min_radius)?;
    let grid = SamplingGrid::planar(extent, min_radius)?;
    let sampler = PoissonDiskSampler::new(region, grid, max_sample_attempts);
    let points = sampler.run(
        rng,
        |_| min_radius,
        |_, rng| Ok(annulus.sample(rng).extend(0.0)),
    )?;
    Ok(points.into_iter().map(|p| p.truncate()).collect())
}

/// Bounding region of a run. Planar points live in `z = 0`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Region {
    Volume(Cuboid),
    Plane { half_extent: Vec2, extent: Vec2 },
}

impl Region {
    pub(crate) fn plane(extent: Vec2) -> Result<Self> {
        ensure_positive("extent.x", extent.x)?;
        ensure_positive("extent.y", extent.y)?;
        Ok(Region::Plane {
            half_extent: extent * 0.5,
            extent,
        })
    }

    #[inline]
    fn contains(&self, point: Vec3) -> bool {
        match self {
            Region::Volume(cuboid) => cuboid.contains(point),
            Region::Plane { half_extent, .. } => {
                let p = point.truncate();
                p.cmpge(-*half_extent).all() && p.cmplt(*half_extent).all()
            }
        }
    }

    /// Uniform seed: three deviates in a volume, two in a plane.
    fn seed(&self, rng: &mut dyn RngCore) -> Vec3 {
        match self {
            Region::Volume(cuboid) => cuboid.sample(rng),
            Region::Plane { extent, .. } => {
                let [u, v] = deviates(rng);
                cuboid_from_deviates(extent.extend(0.0), [u, v, 0.5])
            }
        }
    }
}

/// Dart-throwing state for one run: grid, active list and output.
///
/// The radius policy and the offset distribution are supplied per run, so the fixed and
/// gradient engines share this loop.
pub(crate) struct PoissonDiskSampler {
    region: Region,
    grid: SamplingGrid,
    active_list: ActiveSampleList,
    points: Vec<Vec3>,
    max_sample_attempts: usize,
    retired: usize,
}

impl PoissonDiskSampler {
    pub(crate) fn new(region: Region, grid: SamplingGrid, max_sample_attempts: usize) -> Self {
        debug_assert!(max_sample_attempts > 0);
        Self {
            region,
            grid,
            active_list: ActiveSampleList::new(),
            points: Vec::new(),
            max_sample_attempts,
            retired: 0,
        }
    }

    fn add_point(&mut self, point: Vec3) {
        self.grid.insert(point);
        self.active_list.push(point);
        self.points.push(point);
    }

    fn generate_around_point<O>(
        &self,
        rng: &mut dyn RngCore,
        sample: Vec3,
        radius: f32,
        offset: &mut O,
    ) -> Result<Option<Vec3>>
    where
        O: FnMut(f32, &mut dyn RngCore) -> Result<Vec3>,
    {
        for _ in 0..self.max_sample_attempts {
            let candidate = sample + offset(radius, &mut *rng)?;
            if self.region.contains(candidate) && self.grid.is_far_enough(candidate, radius) {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// Runs until no active sample is left.
    ///
    /// `local_radius` is evaluated each time a sample is picked. `offset` draws a
    /// displacement for a given radius. Only `offset` can fail.
    pub(crate) fn run<R, O>(
        mut self,
        rng: &mut dyn RngCore,
        mut local_radius: R,
        mut offset: O,
    ) -> Result<Vec<Vec3>>
    where
        R: FnMut(Vec3) -> f32,
        O: FnMut(f32, &mut dyn RngCore) -> Result<Vec3>,
    {
        let seed = self.region.seed(rng);
        self.add_point(seed);

        while let Some((index, sample)) = self.active_list.pick(rng) {
            let radius = local_radius(sample);
            match self.generate_around_point(rng, sample, radius, &mut offset)? {
                Some(candidate) => self.add_point(candidate),
                None => {
                    self.active_list.retire(index);
                    self.retired += 1;
                }
            }
        }

        debug!(
            "Poisson disk sampling produced {} points ({} samples retired, grid {:?} cells of {:.4}).",
            self.points.len(),
            self.retired,
            self.grid.dims(),
            self.grid.cell_size()
        );
        Ok(self.points)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::random::tests::FixedRng;

    pub(crate) fn pairwise_min_distance(points: &[Vec3]) -> f32 {
        let mut min = f32::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dist = points[i].distance(points[j]);
                if dist < min {
                    min = dist;
                }
            }
        }
        min
    }

    #[test]
    fn ten_cube_with_unit_radius_respects_distance_and_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = poisson_disk_sample(Vec3::splat(10.0), 1.0, &mut rng, 30).unwrap();

        assert!(!points.is_empty());
        for p in &points {
            assert!(p.cmpge(Vec3::splat(-5.0)).all() && p.cmplt(Vec3::splat(5.0)).all());
        }
        assert!(pairwise_min_distance(&points) >= 1.0 - 1e-4);
    }

    #[test]
    fn dense_packing_is_reached() {
        // A maximal unit-radius set in a 10^3 box holds several hundred points.
        let mut rng = StdRng::seed_from_u64(7);
        let points = poisson_disk_sample(Vec3::splat(10.0), 1.0, &mut rng, 30).unwrap();
        assert!(points.len() > 300, "only {} points", points.len());
    }

    #[test]
    fn same_seed_same_points_and_different_seed_different_start() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            poisson_disk_sample(Vec3::new(6.0, 4.0, 3.0), 0.8, &mut rng, 30).unwrap()
        };
        let a = run(42);
        let b = run(42);
        let c = run(43);
        assert_eq!(a, b);
        assert_ne!(a[0], c[0]);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            poisson_disk_sample(Vec3::new(-1.0, 1.0, 1.0), 1.0, &mut rng, 30),
            Err(Error::InvalidArgument(_))
        ));
        assert!(poisson_disk_sample(Vec3::ONE, 0.0, &mut rng, 30).is_err());
        assert!(poisson_disk_sample(Vec3::ONE, 1.0, &mut rng, 0).is_err());
        assert!(poisson_disk_sample_2d(Vec2::new(1.0, 0.0), 1.0, &mut rng, 30).is_err());
    }

    #[test]
    fn huge_extent_with_tiny_radius_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            poisson_disk_sample(Vec3::splat(1.0e6), 1.0e-3, &mut rng, 30),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            poisson_disk_sample_2d(Vec2::splat(1.0e9), 1.0, &mut rng, 30),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn radius_too_large_to_spawn_names_the_argument() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = poisson_disk_sample(Vec3::ONE, f32::MAX / 3.0, &mut rng, 30).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("min_radius")));

        let err = poisson_disk_sample_2d(Vec2::ONE, f32::MAX, &mut rng, 30).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("min_radius")));

        assert!(PoissonDiskSampling::new(f32::MAX / 3.0).validate().is_err());
    }

    #[test]
    fn exhausted_offset_sampler_is_passed_through() {
        // All-zero words keep the radial deviate inside the shell's hole.
        let mut rng = FixedRng { value: 0 };
        let result = poisson_disk_sample(Vec3::splat(4.0), 1.0, &mut rng, 30);
        assert!(matches!(result, Err(ref e) if e.is_exhausted()), "{result:?}");
    }

    #[test]
    fn sample_out_of_attempts_is_retired_and_run_succeeds() {
        let bounds = Cuboid::try_new(Vec3::splat(4.0)).unwrap();
        let grid = SamplingGrid::volumetric(bounds.extent(), 1.0).unwrap();
        let sampler = PoissonDiskSampler::new(Region::Volume(bounds), grid, 7);

        let mut draws = 0;
        let points = sampler
            .run(
                &mut StdRng::seed_from_u64(2),
                |_| 1.0,
                |_, _| {
                    draws += 1;
                    Ok(Vec3::splat(100.0))
                },
            )
            .unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(draws, 7);
    }

    #[test]
    fn radius_larger_than_volume_yields_only_the_seed() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = poisson_disk_sample(Vec3::splat(0.5), 5.0, &mut rng, 30).unwrap();
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn single_attempt_still_terminates_with_valid_points() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = poisson_disk_sample(Vec3::splat(4.0), 0.7, &mut rng, 1).unwrap();
        assert!(!points.is_empty());
        assert!(pairwise_min_distance(&points) >= 0.7 - 1e-4);
    }

    #[test]
    fn planar_points_respect_radius_and_bounds() {
        let mut rng = StdRng::seed_from_u64(123);
        let points = poisson_disk_sample_2d(Vec2::new(8.0, 5.0), 0.5, &mut rng, 30).unwrap();

        assert!(points.len() > 50);
        for p in &points {
            assert!(p.x >= -4.0 && p.x < 4.0);
            assert!(p.y >= -2.5 && p.y < 2.5);
        }
        let lifted: Vec<Vec3> = points.iter().map(|p| p.extend(0.0)).collect();
        assert!(pairwise_min_distance(&lifted) >= 0.5 - 1e-4);
    }

    #[test]
    fn strategy_matches_free_function() {
        let sampling = PoissonDiskSampling::new(1.2).with_max_sample_attempts(20);
        assert!(sampling.validate().is_ok());

        let mut rng_a = StdRng::seed_from_u64(5);
        let mut rng_b = StdRng::seed_from_u64(5);
        let via_trait =
            VolumeSampling::generate(&sampling, Vec3::splat(5.0).into(), &mut rng_a).unwrap();
        let direct = poisson_disk_sample(Vec3::splat(5.0), 1.2, &mut rng_b, 20).unwrap();

        assert_eq!(via_trait.len(), direct.len());
        for (m, g) in via_trait.iter().zip(&direct) {
            assert_eq!(Vec3::from(*m), *g);
        }
    }

    #[test]
    fn validate_flags_bad_configuration() {
        assert!(PoissonDiskSampling::new(0.0).validate().is_err());
        assert!(PoissonDiskSampling::new(1.0)
            .with_max_sample_attempts(0)
            .validate()
            .is_err());
    }

    #[test]
    fn default_rng_generation_is_valid() {
        let sampling = PoissonDiskSampling::new(1.0);
        let points = PlanarSampling::generate_with_default_rng(&sampling, Vec2::splat(6.0).into())
            .unwrap();
        assert!(!points.is_empty());
    }
}
