//! Working set of samples that may still spawn neighbours.
use glam::Vec3;
use rand::Rng as RngCore;

/// Ordered list of active samples.
///
/// Samples are picked uniformly from one generator word and retired in place, so the
/// order of the remaining samples (and with it every later pick) only depends on the
/// generator stream.
#[derive(Debug, Clone, Default)]
pub struct ActiveSampleList {
    samples: Vec<Vec3>,
}

impl ActiveSampleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding just the seed sample.
    pub fn seeded(seed: Vec3) -> Self {
        Self {
            samples: vec![seed],
        }
    }

    pub fn push(&mut self, sample: Vec3) {
        self.samples.push(sample);
    }

    /// Picks a uniformly random sample as `(index, sample)`, or `None` when empty.
    ///
    /// Consumes one `u32` only when the list is non-empty.
    pub fn pick(&self, rng: &mut dyn RngCore) -> Option<(usize, Vec3)> {
        if self.samples.is_empty() {
            return None;
        }
        let index = scale_index(rng.next_u32(), self.samples.len());
        Some((index, self.samples[index]))
    }

    /// Removes the sample at `index` for good, keeping the order of the others.
    pub fn retire(&mut self, index: usize) -> Vec3 {
        self.samples.remove(index)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// `floor(word / 2^32 * len)` in integer arithmetic, so every index below `2^32` is
/// reachable.
#[inline]
fn scale_index(word: u32, len: usize) -> usize {
    let index = ((word as u128 * len as u128) >> 32) as usize;
    index.min(len - 1)
}
