//! Uniform deviates and the boundary-level default generator.
//!
//! Everything in the crate consumes randomness as `&mut dyn RngCore` supplied by the
//! caller. [`with_default_rng`] is the only place a process-wide generator is touched.
use rand::Rng as RngCore;

const DEVIATE_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Draws a uniform deviate in `[0, 1)`.
///
/// Only the top 24 bits of one `u32` are used so the result is exactly representable
/// as an `f32` and can never round up to `1.0`.
#[inline]
pub fn deviate(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * DEVIATE_SCALE
}

/// Draws `N` deviates in order.
#[inline]
pub(crate) fn deviates<const N: usize>(rng: &mut dyn RngCore) -> [f32; N] {
    let mut out = [0.0; N];
    for value in &mut out {
        *value = deviate(rng);
    }
    out
}

/// Runs `f` with the thread-local default generator.
///
/// Output is not reproducible. Pass a seeded generator to the sampling functions
/// directly when determinism matters.
pub fn with_default_rng<T>(f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    let mut rng = rand::rng();
    f(&mut rng)
}

/// Compute the next smaller representable float value.
///
/// Used to keep coordinates strictly below the positive half-extent of a volume.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}
