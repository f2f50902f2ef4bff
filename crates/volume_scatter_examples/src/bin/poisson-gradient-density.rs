use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use volume_scatter::prelude::*;
use volume_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let extent = Vec3::new(120.0, 60.0, 4.0);
    let mut rng = StdRng::seed_from_u64(7);

    // Dense on the left, sparse on the right.
    let half = extent.x * 0.5;
    let gradient = move |p: Vec3| (p.x + half) / extent.x;

    let strategy = GradientPoissonDiskSampling::new(RadiusRange::new(1.0, 6.0), gradient);
    strategy.validate()?;

    let points: Vec<Vec3> = strategy
        .generate(extent.into(), &mut rng)?
        .into_iter()
        .map(Vec3::from)
        .collect();
    info!(count = points.len(), "sampled gradient slab");

    let config = RenderConfig::new((1200, 600), Vec2::new(extent.x, extent.y))
        .with_background([245, 245, 240])
        .with_dot([40, 90, 40], 3);

    render_points_to_png(&points, &config, "poisson-gradient-density.png")?;
    Ok(())
}
