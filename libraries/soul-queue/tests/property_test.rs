//! Property-based tests for the play queue
//!
//! Uses proptest to drive random sequences of UI actions and checks the
//! permutation, cursor and continuity invariants after every step.

use proptest::prelude::*;
use soul_queue::{LibraryEntry, PlayQueue, QueueConfig};

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Action {
    Add { count: usize, play_now: bool },
    Remove { selection: Vec<usize> },
    Move { start: usize, len: usize, to: usize },
    SetRandom(bool),
    Next,
    Previous,
    PlayAt(usize),
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (1usize..5, any::<bool>()).prop_map(|(count, play_now)| Action::Add { count, play_now }),
        prop::collection::vec(0usize..40, 1..4).prop_map(|selection| Action::Remove { selection }),
        (0usize..40, 1usize..4, 0usize..40).prop_map(|(start, len, to)| Action::Move {
            start,
            len,
            to
        }),
        any::<bool>().prop_map(Action::SetRandom),
        Just(Action::Next),
        Just(Action::Previous),
        (0usize..40).prop_map(Action::PlayAt),
    ]
}

fn seeded_queue(seed: u64, random: bool) -> PlayQueue {
    PlayQueue::new(QueueConfig {
        random,
        shuffle_seed: Some(seed),
    })
}

fn numbered_entries(next_id: &mut usize, count: usize) -> Vec<LibraryEntry> {
    (0..count)
        .map(|_| {
            *next_id += 1;
            LibraryEntry::from_path(format!("/music/{:04}.mp3", *next_id))
        })
        .collect()
}

/// Apply an action, returning the entry that must still be current afterwards
/// when the action is not allowed to change it
fn apply(queue: &mut PlayQueue, action: &Action, next_id: &mut usize) -> Option<LibraryEntry> {
    let current = queue.current_entry().cloned();

    match action {
        Action::Add { count, play_now } => {
            queue
                .add_entries(numbered_entries(next_id, *count), *play_now)
                .ok();
            if *play_now {
                None
            } else {
                current
            }
        }
        Action::Remove { selection } => {
            let len = queue.len();
            let removes_current = queue
                .current_position()
                .is_some_and(|p| selection.contains(&p));
            queue.remove_entries(selection.iter().copied()).ok();
            // A rejected removal changes nothing
            if removes_current && selection.iter().all(|&p| p < len) {
                None
            } else {
                current
            }
        }
        Action::Move { start, len, to } => {
            queue.move_entries(*start..*start + *len, *to).ok();
            current
        }
        Action::SetRandom(enabled) => {
            queue.set_random_mode(*enabled);
            current
        }
        Action::Next => {
            queue.play_next().ok();
            None
        }
        Action::Previous => {
            queue.play_previous().ok();
            None
        }
        Action::PlayAt(position) => {
            queue.play_entry_at(*position).ok();
            None
        }
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: permutation (P1) and cursor (P2) invariants hold after every action
    #[test]
    fn invariants_hold_for_any_action_sequence(
        seed in any::<u64>(),
        random in any::<bool>(),
        initial in 0usize..12,
        actions in prop::collection::vec(arbitrary_action(), 1..40)
    ) {
        let mut queue = seeded_queue(seed, random);
        let mut next_id = 0;
        if initial > 0 {
            queue.add_entries(numbered_entries(&mut next_id, initial), false).unwrap();
        }

        for action in &actions {
            apply(&mut queue, action, &mut next_id);

            prop_assert!(
                queue.check_invariants().is_ok(),
                "after {:?}: {:?}",
                action,
                queue.check_invariants()
            );

            let order = queue.playback_order();
            let mut sorted = order.as_slice().to_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..queue.len()).collect::<Vec<_>>());

            match queue.cursor() {
                Some(cursor) => {
                    prop_assert_eq!(order.get(cursor.order_index), Some(cursor.position));
                }
                None => prop_assert!(queue.is_empty()),
            }
        }
    }

    /// Property: structural changes that keep the current entry keep it current (P3)
    #[test]
    fn continuity_for_non_removing_mutations(
        seed in any::<u64>(),
        random in any::<bool>(),
        actions in prop::collection::vec(arbitrary_action(), 1..40)
    ) {
        let mut queue = seeded_queue(seed, random);
        let mut next_id = 0;
        queue.add_entries(numbered_entries(&mut next_id, 5), false).unwrap();

        for action in &actions {
            let expected = apply(&mut queue, action, &mut next_id);
            if let Some(expected) = expected {
                prop_assert_eq!(queue.current_entry(), Some(&expected), "after {:?}", action);
            }
        }
    }

    /// Property: random on then off returns to display order with the same entry current
    #[test]
    fn random_toggle_round_trip(
        seed in any::<u64>(),
        size in 1usize..30,
        start in 0usize..30
    ) {
        let mut queue = seeded_queue(seed, false);
        let mut next_id = 0;
        queue.add_entries(numbered_entries(&mut next_id, size), false).unwrap();
        queue.play_entry_at(start % size).unwrap();
        let before = queue.current_entry().cloned();

        queue.set_random_mode(true);
        prop_assert_eq!(queue.cursor().map(|c| c.order_index), Some(0));
        prop_assert_eq!(queue.current_entry().cloned(), before.clone());

        queue.set_random_mode(false);
        prop_assert!(queue.playback_order().is_identity());
        prop_assert_eq!(queue.current_entry().cloned(), before);
    }

    /// Property: N steps of next (or previous) return to the starting entry
    #[test]
    fn wraparound_returns_to_start(
        seed in any::<u64>(),
        random in any::<bool>(),
        size in 1usize..25,
        start in 0usize..25
    ) {
        let mut queue = seeded_queue(seed, random);
        let mut next_id = 0;
        queue.add_entries(numbered_entries(&mut next_id, size), false).unwrap();
        queue.play_entry_at(start % size).unwrap();
        let origin = queue.current_position();

        for _ in 0..size {
            queue.play_next().unwrap();
        }
        prop_assert_eq!(queue.current_position(), origin);

        for _ in 0..size {
            queue.play_previous().unwrap();
        }
        prop_assert_eq!(queue.current_position(), origin);
    }
}
