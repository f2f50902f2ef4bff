use std::path::Path;

use anyhow::Context;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Which plane 3D points are flattened onto. The dropped axis drives depth shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Xy,
    Xz,
    Yz,
}

impl Projection {
    fn split(self, p: Vec3) -> (Vec2, f32) {
        match self {
            Projection::Xy => (Vec2::new(p.x, p.y), p.z),
            Projection::Xz => (Vec2::new(p.x, p.z), p.y),
            Projection::Yz => (Vec2::new(p.y, p.z), p.x),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DotStyle {
    pub color: [u8; 3],
    pub radius: u32,
}

/// Image size, the world rectangle it covers (centered on the origin) and styling.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub domain_extent: Vec2,
    pub background: [u8; 3],
    pub dot: DotStyle,
    pub projection: Projection,
    /// Fade dots towards the background the lower they sit along the dropped axis.
    pub depth_shading: bool,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_extent: Vec2) -> Self {
        Self {
            image_size,
            domain_extent,
            background: [255, 255, 255],
            dot: DotStyle {
                color: [0, 0, 0],
                radius: 2,
            },
            projection: Projection::Xy,
            depth_shading: false,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_dot(mut self, color: [u8; 3], radius: u32) -> Self {
        self.dot = DotStyle { color, radius };
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_depth_shading(mut self, depth_shading: bool) -> Self {
        self.depth_shading = depth_shading;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (i64, i64) {
        let (w, h) = self.image_size;
        let uv = p / self.domain_extent + Vec2::splat(0.5);
        let x = (uv.x * w as f32).floor() as i64;
        // Image rows grow downwards.
        let y = ((1.0 - uv.y) * h as f32).floor() as i64;
        (x, y)
    }
}

/// Draws `points` as filled dots and writes the PNG to `out`.
pub fn render_points_to_png(
    points: &[Vec3],
    config: &RenderConfig,
    out: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let projected: Vec<(Vec2, f32)> = points
        .iter()
        .map(|&p| config.projection.split(p))
        .collect();
    let (depth_min, depth_max) = projected
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, d)| {
            (lo.min(d), hi.max(d))
        });
    let depth_span = (depth_max - depth_min).max(f32::EPSILON);

    // Low depth first so higher points end up on top.
    let mut order: Vec<usize> = (0..projected.len()).collect();
    if config.depth_shading {
        order.sort_by(|&a, &b| projected[a].1.total_cmp(&projected[b].1));
    }

    for index in order {
        let (p, depth) = projected[index];
        let color = if config.depth_shading {
            let t = (depth - depth_min) / depth_span;
            blend(config.background, config.dot.color, 0.25 + 0.75 * t)
        } else {
            config.dot.color
        };
        draw_disk(&mut img, config.to_pixel(p), config.dot.radius, Rgb(color));
    }

    let out = out.as_ref();
    img.save(out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!(points = points.len(), path = %out.display(), "rendered");
    Ok(())
}

fn blend(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let mut mixed = [0u8; 3];
    for (i, slot) in mixed.iter_mut().enumerate() {
        let c = from[i] as f32 + (to[i] as f32 - from[i] as f32) * t;
        *slot = c.round().clamp(0.0, 255.0) as u8;
    }
    mixed
}

fn draw_disk(img: &mut RgbImage, center: (i64, i64), radius: u32, color: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (x, y) = (center.0 + dx, center.1 + dy);
            if x >= 0 && y >= 0 && x < w && y < h {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
