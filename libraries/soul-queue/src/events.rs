//! Queue Events
//!
//! Notifications for the host application. The queue buffers them; the host
//! drains them after each call and forwards them to the playback engine,
//! the list view and the settings store.

use crate::entry::LibraryEntry;
use serde::{Deserialize, Serialize};

/// Events emitted by the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueEvent {
    /// Start playing this entry now, interrupting whatever is playing
    EntrySelected {
        /// The entry to hand to the playback engine
        entry: LibraryEntry,
    },

    /// The entry that was current has been removed
    ///
    /// The host decides whether to stop or to start the new current entry.
    CurrentEntryRemoved,

    /// Entries were added, removed or reordered
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Random mode was switched; hosts persist the preference on this
    RandomModeChanged {
        /// New random mode
        enabled: bool,
    },
}

impl QueueEvent {
    /// Whether the host must (re)start or stop the playback engine
    pub fn affects_playback(&self) -> bool {
        matches!(
            self,
            QueueEvent::EntrySelected { .. } | QueueEvent::CurrentEntryRemoved
        )
    }
}
