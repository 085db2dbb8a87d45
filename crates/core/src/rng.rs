use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

/// Seed-tracked randomness source, so any run can be replayed exactly.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// `count` distinct indices into `0..len`, sorted descending so callers
    /// can remove by index without shifting later picks.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices.truncate(count.min(len));
        indices.sort_unstable_by(|a, b| b.cmp(a));
        indices
    }
}
