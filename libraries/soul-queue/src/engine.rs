//! Play queue - core orchestration
//!
//! Owns the library store, the playback order and the cursor. Every
//! operation that touches more than one of them goes through `PlayQueue`,
//! validates its input first, and only then mutates, so a rejected call
//! leaves the queue exactly as it was.

use crate::{
    config::QueueConfig,
    cursor::PlaybackCursor,
    entry::LibraryEntry,
    error::{QueueError, Result},
    events::QueueEvent,
    library::LibraryStore,
    order::PlaybackOrder,
    shuffle::{queue_rng, shuffle_positions},
};
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, error, warn};

/// Playback queue engine
///
/// ```text
/// Library (display order):  A  B  C  D
/// Playback order:           2  0  3  1     C, A, D, B
/// Cursor:                   ^ order_index 1, position 0 (A)
/// ```
#[derive(Debug)]
pub struct PlayQueue {
    library: LibraryStore,
    order: PlaybackOrder,

    // None iff the queue is empty
    cursor: Option<PlaybackCursor>,

    random: bool,
    rng: StdRng,

    // Event queue for the host
    pending_events: Vec<QueueEvent>,
}

impl PlayQueue {
    /// Create an empty queue
    pub fn new(config: QueueConfig) -> Self {
        Self {
            library: LibraryStore::new(),
            order: PlaybackOrder::default(),
            cursor: None,
            random: config.random,
            rng: queue_rng(config.shuffle_seed),
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Mutation =====

    /// Add entries to the library and the playback order
    ///
    /// With `play_immediately`, the first entry plays now and the rest are
    /// queued right after it, ahead of what was current. Otherwise the block
    /// is queued at the end and nothing is interrupted. Under random mode the
    /// new entries are shuffled among themselves only.
    pub fn add_entries(
        &mut self,
        entries: Vec<LibraryEntry>,
        play_immediately: bool,
    ) -> Result<()> {
        if entries.is_empty() {
            warn!("Ignoring add with no entries");
            return Err(QueueError::NoEntries);
        }

        let added = entries.len();
        let mut block: Vec<usize> = self.library.append(entries).collect();

        if play_immediately {
            let first = block.remove(0);
            if self.random {
                shuffle_positions(&mut block, &mut self.rng);
            }

            let cursor = self.order.splice_play_now(first, &block, self.cursor);
            self.cursor = Some(cursor);
            self.emit_entry_selected(cursor.position);
        } else {
            if self.random {
                shuffle_positions(&mut block, &mut self.rng);
            }

            self.order.append_block(&block);
            if self.cursor.is_none() {
                self.cursor = PlaybackCursor::at(&self.order, 0);
            }
        }

        debug!(
            "Added {} entries (play now: {}), queue length {}",
            added,
            play_immediately,
            self.len()
        );

        self.emit_queue_changed();
        self.ensure_consistent();
        Ok(())
    }

    /// Remove entries by library position
    ///
    /// If the current entry is among them, the cursor moves to the next
    /// surviving slot without starting it and `CurrentEntryRemoved` is
    /// raised once. Returns the removed entries in display order.
    pub fn remove_entries(
        &mut self,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<Vec<LibraryEntry>> {
        let selected: BTreeSet<usize> = positions.into_iter().collect();

        if selected.is_empty() {
            return Err(QueueError::NothingToRemove);
        }

        let len = self.len();
        if let Some(&position) = selected.iter().find(|&&p| p >= len) {
            warn!(
                "Rejecting removal of position {} (queue length {})",
                position, len
            );
            return Err(QueueError::PositionOutOfBounds { position, len });
        }

        let mut cursor = self.cursor;
        let current_removed = cursor.is_some_and(|c| selected.contains(&c.position));

        if current_removed {
            cursor = self.next_surviving(&selected);
        }

        let mut removed = Vec::with_capacity(selected.len());
        for &position in selected.iter().rev() {
            cursor = self.order.remove_position(position, cursor);
            if let Some(entry) = self.library.remove(position) {
                removed.push(entry);
            }
        }
        removed.reverse();

        self.cursor = cursor;

        debug!(
            "Removed {} entries (current removed: {}), queue length {}",
            removed.len(),
            current_removed,
            self.len()
        );

        if current_removed {
            self.pending_events.push(QueueEvent::CurrentEntryRemoved);
        }
        self.emit_queue_changed();
        self.ensure_consistent();
        Ok(removed)
    }

    /// Move a block of rows in display order
    ///
    /// `from` is a range of library positions and `to` the row it is dropped
    /// before, counted before the move. The current entry stays current
    /// wherever it lands. The playback order is then rebuilt: display order
    /// when random mode is off, a fresh shuffle anchored on the current
    /// entry when it is on.
    pub fn move_entries(&mut self, from: Range<usize>, to: usize) -> Result<()> {
        let len = self.len();
        let (start, end) = (from.start, from.end);

        let Some(slots) = self.library.move_block(from, to) else {
            warn!(
                "Rejecting move {}..{} -> {} (queue length {})",
                start, end, to, len
            );
            return Err(QueueError::RangeOutOfBounds {
                start,
                end,
                to,
                len,
            });
        };

        // slots maps new position -> old position
        self.cursor = self.cursor.and_then(|c| {
            slots
                .iter()
                .position(|&old| old == c.position)
                .map(|position| PlaybackCursor {
                    order_index: c.order_index,
                    position,
                })
        });

        debug!("Moved {}..{} before row {}", start, end, to);

        self.rebuild();
        self.emit_queue_changed();
        self.ensure_consistent();
        Ok(())
    }

    /// Remove everything
    pub fn clear(&mut self) {
        let had_current = self.cursor.is_some();

        self.library.clear();
        self.order.clear();
        self.cursor = None;

        debug!("Cleared queue");

        if had_current {
            self.pending_events.push(QueueEvent::CurrentEntryRemoved);
        }
        self.emit_queue_changed();
    }

    // ===== Random Mode =====

    /// Switch random mode
    ///
    /// On: the current entry becomes the head of a freshly shuffled order.
    /// Off: back to display order, same entry current. Never starts or stops
    /// playback; raises `RandomModeChanged` so the host can persist it.
    pub fn set_random_mode(&mut self, enabled: bool) {
        self.random = enabled;
        self.rebuild();

        debug!("Random mode {}", if enabled { "on" } else { "off" });

        self.pending_events
            .push(QueueEvent::RandomModeChanged { enabled });
        self.ensure_consistent();
    }

    pub fn is_random(&self) -> bool {
        self.random
    }

    /// Regenerate the playback order for the current mode
    fn rebuild(&mut self) {
        let len = self.library.len();

        if !self.random {
            self.cursor = self.order.rebuild_identity(len, self.cursor);
            return;
        }

        // Anchor on the current entry; identity first so the shuffle always
        // starts from a full permutation
        let cursor = self.order.rebuild_identity(len, self.cursor);
        self.cursor = cursor.map(|c| self.order.anchor_shuffle(c, &mut self.rng));
    }

    // ===== Navigation =====

    /// Move to the next slot (wrapping) and start it
    pub fn play_next(&mut self) -> Result<&LibraryEntry> {
        self.advance()?;
        self.play_current()
    }

    /// Move to the next slot (wrapping) without starting it
    pub fn advance(&mut self) -> Result<PlaybackCursor> {
        let cursor = self
            .cursor
            .and_then(|c| c.next_in(&self.order))
            .ok_or(QueueError::QueueEmpty)?;

        self.cursor = Some(cursor);
        Ok(cursor)
    }

    /// Move to the previous slot (wrapping) and start it
    pub fn play_previous(&mut self) -> Result<&LibraryEntry> {
        let cursor = self
            .cursor
            .and_then(|c| c.previous_in(&self.order))
            .ok_or(QueueError::QueueEmpty)?;

        self.cursor = Some(cursor);
        self.play_current()
    }

    /// Start the current entry again
    pub fn play_current(&mut self) -> Result<&LibraryEntry> {
        let cursor = self.cursor.ok_or(QueueError::QueueEmpty)?;

        self.emit_entry_selected(cursor.position);
        let Some(entry) = self.library.get(cursor.position) else {
            return Err(QueueError::InvariantViolation(
                "cursor on a missing library position".to_string(),
            ));
        };
        Ok(entry)
    }

    /// Play the entry at a library position (row activated in the list)
    ///
    /// Under random mode the order is reshuffled with this entry first.
    pub fn play_entry_at(&mut self, position: usize) -> Result<&LibraryEntry> {
        let len = self.len();
        if position >= len {
            warn!(
                "Rejecting play of position {} (queue length {})",
                position, len
            );
            return Err(QueueError::PositionOutOfBounds { position, len });
        }

        self.cursor = PlaybackCursor::on_position(&self.order, position);
        if self.random {
            self.rebuild();
        }
        self.ensure_consistent();

        self.play_current()
    }

    /// On the last slot, or nothing queued
    pub fn is_at_end(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor.is_last_in(&self.order),
            None => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty()
    }

    pub fn len(&self) -> usize {
        self.library.len()
    }

    // ===== State Queries =====

    pub fn current_entry(&self) -> Option<&LibraryEntry> {
        self.cursor.and_then(|c| self.library.get(c.position))
    }

    pub fn current_entry_path(&self) -> Option<&Path> {
        self.current_entry().map(LibraryEntry::path)
    }

    /// Library position of the current entry (its display row)
    pub fn current_position(&self) -> Option<usize> {
        self.cursor.map(|c| c.position)
    }

    pub fn cursor(&self) -> Option<PlaybackCursor> {
        self.cursor
    }

    pub fn entry_at(&self, position: usize) -> Option<&LibraryEntry> {
        self.library.get(position)
    }

    pub fn position_of(&self, entry: &LibraryEntry) -> Option<usize> {
        self.library.position_of(entry)
    }

    /// Entries in display order
    pub fn entries(&self) -> &[LibraryEntry] {
        self.library.as_slice()
    }

    pub fn playback_order(&self) -> &PlaybackOrder {
        &self.order
    }

    /// Entries in the order they will be played
    pub fn entries_in_play_order(&self) -> Vec<&LibraryEntry> {
        self.order
            .as_slice()
            .iter()
            .filter_map(|&p| self.library.get(p))
            .collect()
    }

    // ===== Invariants =====

    /// Verify the permutation and cursor invariants
    ///
    /// Display order is not checked here: a play-now add splices new entries
    /// at the cursor even with random mode off.
    pub fn check_invariants(&self) -> Result<()> {
        let len = self.library.len();

        if !self.order.is_permutation_of(len) {
            return Err(QueueError::InvariantViolation(format!(
                "playback order {:?} is not a permutation of 0..{}",
                self.order.as_slice(),
                len
            )));
        }

        match self.cursor {
            None if len > 0 => Err(QueueError::InvariantViolation(
                "non-empty queue without a cursor".to_string(),
            )),
            Some(c) if !c.is_consistent_with(&self.order) => Err(QueueError::InvariantViolation(
                format!("cursor {:?} does not match playback order", c),
            )),
            _ => Ok(()),
        }
    }

    /// Assert in debug builds; rebuild from display order in release builds
    fn ensure_consistent(&mut self) {
        let checked = self.check_invariants();
        debug_assert!(checked.is_ok(), "{:?}", checked);

        if let Err(err) = checked {
            error!("{}; rebuilding playback order", err);
            self.recover();
        }
    }

    /// Full rebuild: display order, cursor re-resolved by library position,
    /// then re-anchored when random mode is on
    fn recover(&mut self) {
        let len = self.library.len();
        self.cursor = self.order.rebuild_identity(len, self.cursor);
        if self.random {
            self.rebuild();
        }
    }

    /// First slot after the cursor whose entry is not in `removed`
    fn next_surviving(&self, removed: &BTreeSet<usize>) -> Option<PlaybackCursor> {
        let mut cursor = self.cursor?;
        for _ in 0..self.order.len() {
            cursor = cursor.next_in(&self.order)?;
            if !removed.contains(&cursor.position) {
                return Some(cursor);
            }
        }
        None
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The host should call
    /// this after every queue operation.
    pub fn drain_events(&mut self) -> Vec<QueueEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_entry_selected(&mut self, position: usize) {
        if let Some(entry) = self.library.get(position) {
            debug!("Selected for playback: {}", entry);
            self.pending_events.push(QueueEvent::EntrySelected {
                entry: entry.clone(),
            });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(QueueEvent::QueueChanged {
            length: self.library.len(),
        });
    }
}

impl Default for PlayQueue {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}
