use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

/// Source of pivot positions for [`qsort_with`](super::normal::qsort_with) and
/// [`sort_range`](super::normal::sort_range).
pub trait PivotPicker {
    /// Returns an index in `low..=high`. `v` is the whole slice being sorted.
    fn pick<T: Ord>(&mut self, v: &[T], low: usize, high: usize) -> usize;
}

/// Draws pivots uniformly at random from the range.
#[derive(Debug, Clone)]
pub struct RandomPivot<R>(R);

impl<R: Rng> RandomPivot<R> {
    /// Draws from a caller-supplied generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RandomPivot<ThreadRng> {
    pub fn thread() -> Self {
        Self(thread_rng())
    }
}

impl RandomPivot<StdRng> {
    /// Same seed, same pivot sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PivotPicker for RandomPivot<R> {
    #[inline]
    fn pick<T: Ord>(&mut self, _v: &[T], low: usize, high: usize) -> usize {
        self.0.gen_range(low..=high)
    }
}

/// Always picks the first element of the range.
///
/// Deterministic, so an adversarial ordering can drive it far past `n log n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leftmost;

impl PivotPicker for Leftmost {
    #[inline]
    fn pick<T: Ord>(&mut self, _v: &[T], low: usize, _high: usize) -> usize {
        low
    }
}

/// Always picks the last element of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

impl PivotPicker for Last {
    #[inline]
    fn pick<T: Ord>(&mut self, _v: &[T], _low: usize, high: usize) -> usize {
        high
    }
}

/// Picks the median of the first, middle and last elements of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfThree;

impl PivotPicker for MedianOfThree {
    fn pick<T: Ord>(&mut self, v: &[T], low: usize, high: usize) -> usize {
        let (mut a, mut b, mut c) = (low, low + (high - low) / 2, high);

        if v[b] < v[a] {
            std::mem::swap(&mut a, &mut b);
        }
        if v[c] < v[b] {
            std::mem::swap(&mut b, &mut c);
            if v[b] < v[a] {
                std::mem::swap(&mut a, &mut b);
            }
        }

        b
    }
}
