//! Uniform random permutation of a sequence.
//!
//! This is the contact-pairing shuffler: each step the engine shuffles the
//! living agents so that pairing is not biased by agent id or grid position.
//! It is a generic utility with no disease knowledge — any clonable sequence
//! can be shuffled.

use crate::SimRng;

/// Return a new `Vec` containing the elements of `input` in a uniformly
/// random permutation, leaving `input` unmodified.
///
/// Sequences of length 0 or 1 are returned unchanged (no RNG draws occur —
/// `SliceRandom::shuffle` is a no-op below length 2).
pub fn shuffled<T: Clone>(input: &[T], rng: &mut SimRng) -> Vec<T> {
    let mut out = input.to_vec();
    rng.shuffle(&mut out);
    out
}
