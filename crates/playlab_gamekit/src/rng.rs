//! Deterministic random number generator for reproducible games.
//!
//! Mulberry32 over a single 32-bit state word. Two generators holding the
//! same state produce bit-identical streams, which is what replay and audit
//! rely on. The state is a bare integer so it persists as plain JSON.

use crate::error::EmptyInputError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Per-call increment of the Mulberry32 state.
const GOLDEN_STEP: u32 = 0x6D2B_79F5;

/// 2^32 as a float, the divisor mapping a `u32` into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A reproducible stream of pseudo-random values.
///
/// Not shared between callers: give each game or player its own instance.
/// `Clone` yields an independent generator with identical state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Creates a generator from a seed, keeping `seed mod 2^32`.
    #[instrument]
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed & 0xFFFF_FFFF) as u32,
        }
    }

    /// Restores a generator from a value returned by [`SeededRandom::state`].
    #[instrument]
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Returns the current internal state, suitable for persistence.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the stream and returns the next mixed 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_STEP);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Returns a float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Returns an integer in `[min, max]`, both ends inclusive.
    ///
    /// The caller must ensure `min <= max`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "int() requires min <= max");
        let span = (max - min + 1) as f64;
        (self.random() * span).floor() as i64 + min
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when `items` is empty.
    #[instrument(skip(self, items), fields(len = items.len()))]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, EmptyInputError> {
        if items.is_empty() {
            return Err(EmptyInputError::new());
        }
        let idx = self.int(0, items.len() as i64 - 1) as usize;
        Ok(&items[idx])
    }

    /// Shuffles `items` in place (Fisher-Yates) and hands the slice back.
    #[instrument(skip(self, items), fields(len = items.len()))]
    pub fn shuffle<'a, T>(&mut self, items: &'a mut [T]) -> &'a mut [T] {
        for i in (1..items.len()).rev() {
            let j = self.int(0, i as i64) as usize;
            items.swap(i, j);
        }
        items
    }

    /// Returns `true` with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.random() < probability
    }
}
