//! Shuffle for playback order randomization
//!
//! Pure random Fisher-Yates over library positions. Callers pass only the
//! subset that is allowed to move: the newly added block, or every position
//! except the one currently playing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffle a subset of library positions in place
///
/// Each position has equal probability of landing in any slot of the
/// subset. Slices with fewer than two positions are left untouched.
pub fn shuffle_positions<R: Rng + ?Sized>(positions: &mut [usize], rng: &mut R) {
    if positions.len() < 2 {
        return;
    }
    positions.shuffle(rng);
}

/// Random source for a queue
///
/// A fixed seed gives reproducible sessions; without one the generator is
/// seeded from the operating system.
pub fn queue_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
