use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the scanner and generator.
///
/// Injected rather than global so tests can script exact picks.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass `upper == 0`.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// Production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Reproducible sequence, used by `--seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandom {
    fn index_below(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Uniform pick, `None` for an empty slice.
pub fn choose<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index_below(items.len()))
}

/// Replays a fixed list of picks (modulo the requested bound), cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn index_below(&mut self, upper: usize) -> usize {
        let pick = self.picks.get(self.cursor).copied().unwrap_or(0);
        self.cursor = (self.cursor + 1) % self.picks.len().max(1);
        pick % upper
    }
}
