use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use volume_scatter::prelude::*;
use volume_scatter_examples::{init_tracing, render_points_to_png, Projection, RenderConfig};

const COUNT: usize = 4000;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(11);

    let sphere = Sphere::try_new(1.0)?;
    let shell = SphericalShell::try_new(0.7, 1.0)?;
    let annulus = Annulus::try_new(0.5, 1.0)?;

    let uniform: Vec<Vec3> = (0..COUNT).map(|_| sphere.sample(&mut rng)).collect();
    let biased: Vec<Vec3> = (0..COUNT).map(|_| sphere.sample_biased(&mut rng)).collect();
    let shell_points = (0..COUNT)
        .map(|_| shell.sample(&mut rng))
        .collect::<Result<Vec<Vec3>>>()?;
    let ring: Vec<Vec3> = (0..COUNT)
        .map(|_| annulus.sample(&mut rng).extend(0.0))
        .collect();

    let config = RenderConfig::new((600, 600), Vec2::splat(2.2))
        .with_dot([200, 60, 60], 1)
        .with_projection(Projection::Xz)
        .with_depth_shading(true);

    render_points_to_png(&uniform, &config, "sphere-uniform.png")?;
    render_points_to_png(&biased, &config, "sphere-biased.png")?;
    render_points_to_png(&shell_points, &config, "spherical-shell.png")?;
    render_points_to_png(
        &ring,
        &config.clone().with_projection(Projection::Xy).with_depth_shading(false),
        "annulus.png",
    )?;
    Ok(())
}
