//! # Solace Reply Rotation
//!
//! File: cli/src/responder/usage.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Keeps replies from repeating. For each key (a category) the `UsageState`
//! remembers which indices of that key's bank have already been handed out.
//! A pick only considers the unused indices; once every index is used the set
//! is cleared and the bank starts over. A bank of size `n` therefore shows all
//! `n` replies before any of them repeats.
//!
//! Which unused index is taken is up to the `Selector`:
//! - `Selector::Lowest` always takes the smallest candidate (deterministic mode)
//! - `Selector::Random` draws uniformly from a seedable `StdRng`
//!
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// Strategy for choosing one index among the candidates.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Always the lowest candidate index.
    Lowest,
    /// Uniformly random candidate.
    Random(StdRng),
}

impl Selector {
    /// Builds the selector for a responder: `Lowest` when deterministic,
    /// otherwise a `StdRng` seeded from `seed` or from system entropy.
    pub fn new(deterministic: bool, seed: Option<u64>) -> Self {
        if deterministic {
            return Selector::Lowest;
        }
        match seed {
            Some(seed) => Selector::Random(StdRng::seed_from_u64(seed)),
            None => Selector::Random(StdRng::from_entropy()),
        }
    }

    /// Picks one of `candidates`. Returns `None` only when `candidates` is empty.
    pub fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        match self {
            Selector::Lowest => candidates.iter().min().copied(),
            Selector::Random(rng) => candidates.choose(rng).copied(),
        }
    }
}

/// Indices already handed out, per key, since that key's last reset.
#[derive(Debug, Clone)]
pub struct UsageState<K> {
    used: HashMap<K, BTreeSet<usize>>,
}

impl<K> Default for UsageState<K> {
    fn default() -> Self {
        Self {
            used: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> UsageState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses an index into a bank of `bank_len` entries for `key`, never
    /// repeating an index until all of them have been used. Returns `None`
    /// only for an empty bank.
    pub fn pick(&mut self, key: K, bank_len: usize, selector: &mut Selector) -> Option<usize> {
        if bank_len == 0 {
            return None;
        }
        let used = self.used.entry(key).or_default();
        let mut candidates: Vec<usize> = (0..bank_len).filter(|i| !used.contains(i)).collect();
        if candidates.is_empty() {
            used.clear();
            candidates = (0..bank_len).collect();
        }
        let idx = selector.choose(&candidates)?;
        used.insert(idx);
        Some(idx)
    }

    /// Number of indices consumed for `key` since its last reset.
    pub fn used_count(&self, key: K) -> usize {
        self.used.get(&key).map_or(0, BTreeSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_cycles_in_order() {
        let mut state = UsageState::new();
        let mut selector = Selector::Lowest;
        let picks: Vec<usize> = (0..7)
            .map(|_| state.pick("greeting", 3, &mut selector).unwrap())
            .collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_random_exhausts_bank_before_repeating() {
        let mut state = UsageState::new();
        let mut selector = Selector::new(false, Some(7));
        for _ in 0..5 {
            let mut round: Vec<usize> = (0..4)
                .map(|_| state.pick('k', 4, &mut selector).unwrap())
                .collect();
            round.sort_unstable();
            assert_eq!(round, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_keys_are_tracked_independently() {
        let mut state = UsageState::new();
        let mut selector = Selector::Lowest;
        assert_eq!(state.pick(1u8, 3, &mut selector), Some(0));
        assert_eq!(state.pick(1u8, 3, &mut selector), Some(1));
        assert_eq!(state.pick(2u8, 3, &mut selector), Some(0));
        assert_eq!(state.used_count(1u8), 2);
        assert_eq!(state.used_count(2u8), 1);
    }

    #[test]
    fn test_single_entry_bank_always_available() {
        let mut state = UsageState::new();
        let mut selector = Selector::new(false, None);
        for _ in 0..3 {
            assert_eq!(state.pick("crisis", 1, &mut selector), Some(0));
            assert_eq!(state.used_count("crisis"), 1);
        }
    }

    #[test]
    fn test_empty_bank_yields_nothing() {
        let mut state = UsageState::new();
        assert_eq!(state.pick("none", 0, &mut Selector::Lowest), None);
        assert_eq!(state.used_count("none"), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let run = |seed| {
            let mut state = UsageState::new();
            let mut selector = Selector::new(false, Some(seed));
            (0..9)
                .map(|_| state.pick(0u8, 3, &mut selector).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
