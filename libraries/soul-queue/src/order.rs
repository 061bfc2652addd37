//! Playback order
//!
//! A sequence of library positions describing the order entries are played
//! in. It is always a permutation of `0..N` where N is the library size.
//!
//! Every mutation takes the cursor as it was before the call and returns the
//! cursor as it must be after, so callers never patch the cursor by hand.
//!
//! ```text
//! library:  [A, B, C, D]      positions 0..4
//! order:    [2, 0, 3, 1]      plays C, A, D, B
//! cursor:   (1, 0)            order[1] == 0, now playing A
//! ```

use crate::cursor::PlaybackCursor;
use crate::shuffle::shuffle_positions;
use rand::Rng;

/// Permutation of library positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackOrder {
    positions: Vec<usize>,
}

impl PlaybackOrder {
    /// `[0, 1, .., len - 1]`: play in display order
    pub(crate) fn identity(len: usize) -> Self {
        Self {
            positions: (0..len).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_positions(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    /// Library position at `order_index`
    pub fn get(&self, order_index: usize) -> Option<usize> {
        self.positions.get(order_index).copied()
    }

    /// Slot holding library position `position`
    pub fn index_of(&self, position: usize) -> Option<usize> {
        self.positions.iter().position(|&p| p == position)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.positions.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// No duplicates, no gaps, no stale positions for a library of `len`
    pub fn is_permutation_of(&self, len: usize) -> bool {
        if self.positions.len() != len {
            return false;
        }

        let mut seen = vec![false; len];
        for &position in &self.positions {
            match seen.get_mut(position) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }

    /// Reset to display order, keeping the same entry current
    ///
    /// The order index becomes the current library position. A cursor that
    /// no longer fits the library falls back to the first slot.
    pub(crate) fn rebuild_identity(
        &mut self,
        len: usize,
        cursor: Option<PlaybackCursor>,
    ) -> Option<PlaybackCursor> {
        *self = Self::identity(len);

        cursor
            .and_then(|c| PlaybackCursor::on_position(self, c.position))
            .or_else(|| PlaybackCursor::at(self, 0))
    }

    /// Queue a block after everything already queued
    pub(crate) fn append_block(&mut self, block: &[usize]) {
        self.positions.extend_from_slice(block);
    }

    /// Insert `first` and then `rest` at the cursor's slot
    ///
    /// The previously current entry and every slot after it move later by
    /// `1 + rest.len()`. The returned cursor points at `first`.
    pub(crate) fn splice_play_now(
        &mut self,
        first: usize,
        rest: &[usize],
        cursor: Option<PlaybackCursor>,
    ) -> PlaybackCursor {
        let at = cursor
            .map_or(0, |c| c.order_index)
            .min(self.positions.len());

        self.positions.splice(
            at..at,
            std::iter::once(first).chain(rest.iter().copied()),
        );

        PlaybackCursor {
            order_index: at,
            position: first,
        }
    }

    /// Drop `position` and renumber everything above it
    ///
    /// Returns the cursor for the same entry after renumbering, or `None` if
    /// the cursor was on the removed position. Callers move the cursor off a
    /// position before removing it.
    pub(crate) fn remove_position(
        &mut self,
        position: usize,
        cursor: Option<PlaybackCursor>,
    ) -> Option<PlaybackCursor> {
        let Some(slot) = self.index_of(position) else {
            return cursor;
        };

        self.positions.remove(slot);
        for p in &mut self.positions {
            if *p > position {
                *p -= 1;
            }
        }

        let cursor = cursor?;
        if cursor.position == position {
            return None;
        }

        Some(PlaybackCursor {
            order_index: if slot < cursor.order_index {
                cursor.order_index - 1
            } else {
                cursor.order_index
            },
            position: if cursor.position > position {
                cursor.position - 1
            } else {
                cursor.position
            },
        })
    }

    /// Fresh shuffle of everything but the current entry, which goes first
    pub(crate) fn anchor_shuffle<R: Rng + ?Sized>(
        &mut self,
        cursor: PlaybackCursor,
        rng: &mut R,
    ) -> PlaybackCursor {
        self.positions.retain(|&p| p != cursor.position);
        shuffle_positions(&mut self.positions, rng);
        self.positions.insert(0, cursor.position);

        PlaybackCursor {
            order_index: 0,
            position: cursor.position,
        }
    }
}
