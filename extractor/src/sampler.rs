//! Down-sampling strategies. The converter asks its sampler once per input
//! line, before the line is parsed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Sampler {
    /// Whether the next input line should be kept.
    fn keep(&mut self) -> bool;
}

/// Keeps each line independently with probability `1 / rate`.
pub struct RandomSampler {
    rng: StdRng,
    rate: u32,
}

impl RandomSampler {
    pub fn new(rate: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            rate: rate.max(1),
        }
    }
}

impl Sampler for RandomSampler {
    #[inline]
    fn keep(&mut self) -> bool {
        self.rng.gen_range(1..=self.rate) == 1
    }
}

/// Keeps lines 0, rate, 2 * rate, ...
pub struct StrideSampler {
    rate: u32,
    position: u32,
}

impl StrideSampler {
    pub fn new(rate: u32) -> Self {
        Self {
            rate: rate.max(1),
            position: 0,
        }
    }
}

impl Sampler for StrideSampler {
    #[inline]
    fn keep(&mut self) -> bool {
        let keep = self.position == 0;
        self.position = (self.position + 1) % self.rate;
        keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_one_keeps_everything() {
        let mut random = RandomSampler::new(1, None);
        let mut stride = StrideSampler::new(1);
        assert!((0..1000).all(|_| random.keep()));
        assert!((0..1000).all(|_| stride.keep()));
    }

    #[test]
    fn test_stride_pattern() {
        let mut sampler = StrideSampler::new(3);
        let kept: Vec<bool> = (0..7).map(|_| sampler.keep()).collect();
        assert_eq!(kept, [true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let mut a = RandomSampler::new(60, Some(42));
        let mut b = RandomSampler::new(60, Some(42));
        let run_a: Vec<bool> = (0..10_000).map(|_| a.keep()).collect();
        let run_b: Vec<bool> = (0..10_000).map(|_| b.keep()).collect();
        assert_eq!(run_a, run_b);
    }

    #[test]
    fn test_random_keep_rate() {
        let mut sampler = RandomSampler::new(10, Some(7));
        let kept = (0..100_000).filter(|_| sampler.keep()).count();
        // Expected 10_000, allow a generous margin
        assert!((9_000..11_000).contains(&kept), "kept {}", kept);
    }
}
