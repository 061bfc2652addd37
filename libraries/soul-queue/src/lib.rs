//! Soul Player - Playback Queue
//!
//! Platform-agnostic playback queue engine for Soul Player.
//!
//! This crate provides:
//! - Library store (display order of every known entry)
//! - Playback order (permutation of library positions)
//! - Playback cursor (what is playing now, as a value)
//! - Random mode with the current entry anchored at the head
//! - Add / remove / drag-reorder that keep all three consistent
//! - Wraparound next/previous navigation
//!
//! # Architecture
//!
//! `soul-queue` never touches media bytes, timers or pixels:
//! - No dependency on an audio backend
//! - No dependency on a UI toolkit
//! - No dependency on settings storage
//!
//! The host feeds it UI actions and forwards the drained [`QueueEvent`]s to
//! its playback engine, list view and settings store. The queue is
//! single-threaded; hosts that share it across threads wrap the whole
//! [`PlayQueue`] in one mutex.
//!
//! # Example: Add and navigate
//!
//! ```rust
//! use soul_queue::{LibraryEntry, PlayQueue, QueueEvent};
//!
//! let mut queue = PlayQueue::default();
//!
//! // Files dropped onto the player: play the first one now
//! queue
//!     .add_entries(
//!         vec![
//!             LibraryEntry::from_path("/music/a.flac"),
//!             LibraryEntry::from_path("/music/b.flac"),
//!         ],
//!         true,
//!     )
//!     .unwrap();
//!
//! for event in queue.drain_events() {
//!     if let QueueEvent::EntrySelected { entry } = event {
//!         // hand entry.path() to the playback engine
//!         assert_eq!(entry.name(), "a.flac");
//!     }
//! }
//!
//! queue.play_next().unwrap();
//! assert_eq!(queue.current_entry().unwrap().name(), "b.flac");
//!
//! // Wraps around
//! queue.play_next().unwrap();
//! assert_eq!(queue.current_entry().unwrap().name(), "a.flac");
//! ```
//!
//! # Example: Random mode
//!
//! ```rust
//! use soul_queue::{LibraryEntry, PlayQueue, QueueConfig};
//!
//! let mut queue = PlayQueue::new(QueueConfig {
//!     random: false,
//!     shuffle_seed: Some(7),
//! });
//! let files = (0..5).map(|i| LibraryEntry::from_path(format!("/music/{}.mp3", i)));
//! queue.add_entries(files.collect(), false).unwrap();
//! queue.play_entry_at(2).unwrap();
//!
//! queue.set_random_mode(true);
//! assert_eq!(queue.cursor().unwrap().order_index, 0);
//! assert_eq!(queue.current_position(), Some(2));
//!
//! queue.set_random_mode(false);
//! assert!(queue.playback_order().is_identity());
//! assert_eq!(queue.current_position(), Some(2));
//! ```

mod config;
mod cursor;
mod engine;
mod entry;
mod error;
mod events;
mod library;
mod order;
mod shuffle;

// Public exports
pub use config::QueueConfig;
pub use cursor::PlaybackCursor;
pub use engine::PlayQueue;
pub use entry::LibraryEntry;
pub use error::{QueueError, Result};
pub use events::QueueEvent;
pub use order::PlaybackOrder;
