//! Single-slot memoization for layout results.
//!
//! Every layout function is a pure recomputation. Callers that redraw
//! often (a UI render loop) hold a `Memo` per derived value and ask it
//! for the result; the value is recomputed only when the hash of the
//! input changes.
//!
//! The key is a 64-bit hash of the input, not the input itself. Two
//! distinct inputs colliding would return a stale value; at 64 bits this
//! is accepted.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Caches the most recent result of one computation.
#[derive(Debug, Clone)]
pub struct Memo<V> {
    slot: Option<(u64, V)>,
    hits: u64,
    misses: u64,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<V> Memo<V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `input`, computing it on a key change.
    pub fn get_or_compute<I, F>(&mut self, input: &I, compute: F) -> &V
    where
        I: Hash + ?Sized,
        F: FnOnce(&I) -> V,
    {
        let key = input_key(input);
        let entry = match self.slot.take() {
            Some((cached, value)) if cached == key => {
                self.hits += 1;
                (cached, value)
            }
            _ => {
                self.misses += 1;
                (key, compute(input))
            }
        };
        &self.slot.insert(entry).1
    }

    /// The cached value, if any, regardless of input.
    pub fn peek(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, v)| v)
    }

    /// Drops the cached value.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

/// Hash key of an input value.
pub fn input_key<I: Hash + ?Sized>(input: &I) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}
