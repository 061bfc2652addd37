//! Library store
//!
//! Ordered collection of every known entry. The index of an entry in this
//! store is its library position, which is also its row in the display list.
//! Positions are contiguous and are reassigned on removal and on move.

use crate::entry::LibraryEntry;
use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub(crate) struct LibraryStore {
    entries: Vec<LibraryEntry>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries, returning the library positions they were given
    pub fn append(&mut self, entries: Vec<LibraryEntry>) -> Range<usize> {
        let start = self.entries.len();
        self.entries.extend(entries);
        start..self.entries.len()
    }

    /// Remove the entry at `position`; later positions shift down by one
    pub fn remove(&mut self, position: usize) -> Option<LibraryEntry> {
        if position < self.entries.len() {
            Some(self.entries.remove(position))
        } else {
            None
        }
    }

    /// Move the block `range` so it lands before slot `to`
    ///
    /// `to` is expressed in pre-move slots, the way a list view reports a
    /// drop row. Returns the permutation `new slot -> old position`, or
    /// `None` when the range or destination is out of bounds.
    pub fn move_block(&mut self, range: Range<usize>, to: usize) -> Option<Vec<usize>> {
        let len = self.entries.len();
        if range.start >= range.end || range.end > len || to > len {
            return None;
        }

        let mut slots: Vec<usize> = (0..len).collect();

        // Dropping a block inside itself leaves everything in place
        if (range.start..=range.end).contains(&to) {
            return Some(slots);
        }

        let dest = if to > range.end {
            to - range.len()
        } else {
            to
        };

        let moved: Vec<usize> = slots.drain(range.clone()).collect();
        slots.splice(dest..dest, moved);

        let moved: Vec<LibraryEntry> = self.entries.drain(range).collect();
        self.entries.splice(dest..dest, moved);

        Some(slots)
    }

    pub fn get(&self, position: usize) -> Option<&LibraryEntry> {
        self.entries.get(position)
    }

    pub fn position_of(&self, entry: &LibraryEntry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    pub fn as_slice(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(names: &[&str]) -> LibraryStore {
        let mut store = LibraryStore::new();
        store.append(
            names
                .iter()
                .map(|n| LibraryEntry::from_path(format!("/music/{}.mp3", n)))
                .collect(),
        );
        store
    }

    fn names(store: &LibraryStore) -> Vec<&str> {
        store
            .as_slice()
            .iter()
            .map(|e| e.name().trim_end_matches(".mp3"))
            .collect()
    }

    #[test]
    fn append_returns_new_positions() {
        let mut store = store(&["a", "b"]);
        let positions = store.append(vec![
            LibraryEntry::from_path("/music/c.mp3"),
            LibraryEntry::from_path("/music/d.mp3"),
        ]);
        assert_eq!(positions, 2..4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_shifts_later_positions() {
        let mut store = store(&["a", "b", "c"]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name(), "b.mp3");
        assert_eq!(names(&store), ["a", "c"]);
        assert!(store.remove(5).is_none());
    }

    #[test]
    fn move_single_entry_down() {
        let mut store = store(&["a", "b", "c", "d"]);
        // Drag "a" and drop it before "d"
        let slots = store.move_block(0..1, 3).unwrap();
        assert_eq!(names(&store), ["b", "c", "a", "d"]);
        assert_eq!(slots, [1, 2, 0, 3]);
    }

    #[test]
    fn move_block_up() {
        let mut store = store(&["a", "b", "c", "d", "e"]);
        let slots = store.move_block(2..4, 0).unwrap();
        assert_eq!(names(&store), ["c", "d", "a", "b", "e"]);
        assert_eq!(slots, [2, 3, 0, 1, 4]);
    }

    #[test]
    fn move_to_end() {
        let mut store = store(&["a", "b", "c"]);
        store.move_block(0..1, 3).unwrap();
        assert_eq!(names(&store), ["b", "c", "a"]);
    }

    #[test]
    fn drop_inside_block_is_noop() {
        let mut store = store(&["a", "b", "c"]);
        let slots = store.move_block(0..2, 1).unwrap();
        assert_eq!(slots, [0, 1, 2]);
        assert_eq!(names(&store), ["a", "b", "c"]);
    }

    #[test]
    fn move_out_of_bounds_rejected() {
        let mut store = store(&["a", "b", "c"]);
        assert!(store.move_block(2..4, 0).is_none());
        assert!(store.move_block(0..1, 4).is_none());
        assert!(store.move_block(1..1, 0).is_none());
        assert_eq!(names(&store), ["a", "b", "c"]);
    }
}
