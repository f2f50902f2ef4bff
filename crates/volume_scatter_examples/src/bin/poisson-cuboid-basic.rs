use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use volume_scatter::prelude::*;
use volume_scatter_examples::{init_tracing, render_points_to_png, Projection, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // A flat slab so the top-down projection stays readable.
    let extent = Vec3::new(100.0, 100.0, 10.0);
    let mut rng = StdRng::seed_from_u64(42);

    let points = poisson_disk_sample(extent, 3.0, &mut rng, DEFAULT_MAX_SAMPLE_ATTEMPTS)?;
    info!(count = points.len(), "sampled slab");

    let config = RenderConfig::new((1000, 1000), Vec2::new(extent.x, extent.y))
        .with_background([20, 24, 32])
        .with_dot([120, 200, 255], 4)
        .with_projection(Projection::Xy)
        .with_depth_shading(true);

    render_points_to_png(&points, &config, "poisson-cuboid-basic.png")?;
    Ok(())
}
