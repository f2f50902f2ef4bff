// Each bench binary uses a subset of these helpers.
#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Point draws per iteration for the single-point volume samplers.
pub const DRAWS_PER_ITER: usize = 1024;

/// Radii swept by the engine benches, coarse to fine.
pub const RADII: [f32; 4] = [4.0, 2.0, 1.0, 0.5];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(2))
}

/// Points per iteration; clamped to one so empty runs still report a rate.
pub fn points_throughput(points: usize) -> Throughput {
    Throughput::Elements(points.max(1) as u64)
}

/// Generator for one bench case, distinct per `stream` and `radius`.
pub fn case_rng(stream: u64, radius: f32) -> StdRng {
    StdRng::seed_from_u64(stream ^ u64::from(radius.to_bits()))
}

/// Generator for a bench case without a radius.
pub fn stream_rng(stream: u64) -> StdRng {
    StdRng::seed_from_u64(stream)
}
