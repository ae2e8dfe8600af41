//! Random sources for the computer opponent.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws through the `RandomSource` trait,
//!   never from a global generator
//! - **Deterministic**: `GameRng` with the same seed produces the same choices
//! - **Resumable**: `GameRng::state` captures the stream position
//! - **Scriptable**: `SequenceSource` replays fixed indices for tests
//!
//! ```
//! use rust_ttt::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_index(9), b.pick_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Capability to make a uniform choice.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniformly chosen element, or `None` for an empty slice.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.pick_index(items.len())).copied()
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is still recorded, so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Position in the stream, for saving a game mid-play.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume exactly where [`GameRng::state`] left off.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner, seed: state.seed }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Saved `GameRng` position: the seed plus how far into the stream it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

/// Replays a fixed cycle of indices, each reduced modulo the requested length.
///
/// ```
/// use rust_ttt::core::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new(vec![0, 5]);
/// assert_eq!(source.pick_index(4), 0);
/// assert_eq!(source.pick_index(4), 1); // 5 % 4
/// assert_eq!(source.pick_index(4), 0); // wraps around
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    /// Cycle through `values`. An empty sequence always yields index 0.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, position: 0 }
    }

    /// Always pick the first candidate.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// Number of picks made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let raw = if self.values.is_empty() {
            0
        } else {
            self.values[self.position % self.values.len()]
        };
        self.position += 1;
        raw % len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for len in 1..=9 {
            assert_eq!(a.pick_index(len), b.pick_index(len));
        }

        let mut c = GameRng::new(1);
        let mut d = GameRng::new(2);
        let seq_c: Vec<_> = (0..20).map(|_| c.pick_index(1000)).collect();
        let seq_d: Vec<_> = (0..20).map(|_| d.pick_index(1000)).collect();
        assert_ne!(seq_c, seq_d);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = GameRng::new(7);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_pick_covers_all_candidates() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.pick_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [10, 20, 30];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(&c)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_resume_mid_game() {
        let mut rng = GameRng::new(42);
        for len in (1..=9).rev() {
            rng.pick_index(len);
        }

        let saved = serde_json::to_string(&rng.state()).unwrap();
        let expected: Vec<_> = (0..10).map(|_| rng.pick_index(9)).collect();

        let state: GameRngState = serde_json::from_str(&saved).unwrap();
        let mut resumed = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| resumed.pick_index(9)).collect();

        assert_eq!(expected, actual);
        assert_eq!(resumed.seed(), 42);
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new(vec![2, 0, 7]);
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.pick_index(3), 0);
        assert_eq!(source.pick_index(3), 1);
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.draws(), 4);
    }

    #[test]
    fn test_sequence_source_empty_picks_first() {
        let mut source = SequenceSource::first();
        assert_eq!(source.pick_index(5), 0);
        assert_eq!(source.choose(&['a', 'b']), Some('a'));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw(mut source: impl RandomSource) -> usize {
            source.pick_index(2)
        }

        let mut source = SequenceSource::new(vec![1]);
        assert_eq!(draw(&mut source), 1);
        assert_eq!(source.draws(), 1);
    }
}
