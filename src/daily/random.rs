//! Randomness source for word selection

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Picks an index into a list of `len` candidates
///
/// Callers never pass `len == 0`.
pub trait RandomIndex: Send + Sync {
    fn index(&self, len: usize) -> usize;
}

/// Uniform selection from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomIndex for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always the same index (wrapped to the list length)
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl RandomIndex for FixedIndex {
    fn index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Walks the list in order, one step per call
#[derive(Debug, Default)]
pub struct CyclingIndex {
    next: AtomicUsize,
}

impl RandomIndex for CyclingIndex {
    fn index(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::SeqCst) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_in_range() {
        let random = ThreadRandom;
        for _ in 0..100 {
            assert!(random.index(7) < 7);
        }
        assert_eq!(random.index(1), 0);
    }

    #[test]
    fn fixed_index_wraps() {
        assert_eq!(FixedIndex(2).index(5), 2);
        assert_eq!(FixedIndex(7).index(5), 2);
    }

    #[test]
    fn cycling_index_steps() {
        let random = CyclingIndex::default();
        let picks: Vec<usize> = (0..4).map(|_| random.index(3)).collect();
        assert_eq!(picks, vec![0, 1, 2, 0]);
    }
}
