use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use volume_scatter::prelude::*;
use volume_scatter_examples::{init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let extent = Vec2::new(100.0, 100.0);
    let mut rng = StdRng::seed_from_u64(2025);

    let blue = poisson_disk_sample_2d(extent, 2.5, &mut rng, DEFAULT_MAX_SAMPLE_ATTEMPTS)?;
    info!(count = blue.len(), "poisson disk");

    // Same count of independent uniform points for comparison.
    let white: Vec<Vec3> = (0..blue.len())
        .map(|_| uniform_in_cuboid(extent.x, extent.y, 0.0, &mut rng))
        .collect();

    let config = RenderConfig::new((800, 800), extent)
        .with_background([26, 26, 26])
        .with_dot([235, 235, 235], 2);

    let blue: Vec<Vec3> = blue.into_iter().map(|p| p.extend(0.0)).collect();
    render_points_to_png(&blue, &config, "poisson-planar.png")?;
    render_points_to_png(&white, &config, "uniform-planar.png")?;
    Ok(())
}
