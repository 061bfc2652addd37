//! Playback cursor
//!
//! The cursor is a plain value: an index into the playback order plus the
//! library position found there. Navigation never mutates a cursor in place;
//! it computes the next value from the order so continuity can be checked by
//! comparing the cursor before and after a call.

use crate::order::PlaybackOrder;

/// What is playing now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackCursor {
    /// Slot in the playback order
    pub order_index: usize,

    /// Library position stored in that slot
    pub position: usize,
}

impl PlaybackCursor {
    /// Cursor at `order_index`, or `None` if the slot does not exist
    pub fn at(order: &PlaybackOrder, order_index: usize) -> Option<Self> {
        order.get(order_index).map(|position| Self {
            order_index,
            position,
        })
    }

    /// Cursor on the slot holding `position`
    pub fn on_position(order: &PlaybackOrder, position: usize) -> Option<Self> {
        order.index_of(position).map(|order_index| Self {
            order_index,
            position,
        })
    }

    /// Next slot, wrapping from the last slot to the first
    pub fn next_in(self, order: &PlaybackOrder) -> Option<Self> {
        if order.is_empty() {
            return None;
        }

        let index = if self.order_index + 1 >= order.len() {
            0
        } else {
            self.order_index + 1
        };

        Self::at(order, index)
    }

    /// Previous slot, wrapping from the first slot to the last
    pub fn previous_in(self, order: &PlaybackOrder) -> Option<Self> {
        if order.is_empty() {
            return None;
        }

        let index = if self.order_index == 0 || self.order_index >= order.len() {
            order.len() - 1
        } else {
            self.order_index - 1
        };

        Self::at(order, index)
    }

    pub fn is_last_in(self, order: &PlaybackOrder) -> bool {
        self.order_index + 1 == order.len()
    }

    /// `order[order_index] == position`
    pub fn is_consistent_with(self, order: &PlaybackOrder) -> bool {
        order.get(self.order_index) == Some(self.position)
    }
}
