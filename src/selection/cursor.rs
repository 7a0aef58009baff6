//! Per-hand cursors and the collision-stepping index allocator.
use bevy::prelude::*;

use crate::{
    input::{CursorDirection, Hand},
    tasks::TaskId,
};

/// One hand's pointer into the task board.
#[derive(Debug, Clone)]
pub struct SelectionCursor {
    index: usize,
    enabled: bool,
    pending_task: Option<TaskId>,
}

impl SelectionCursor {
    fn new(index: usize) -> Self {
        Self {
            index,
            enabled: true,
            pending_task: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// False while this hand's chosen task is still playing.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The task this hand committed to, if any.
    pub fn pending_task(&self) -> Option<TaskId> {
        self.pending_task
    }
}

/// Both hands' cursors plus the set-wide suspension flag.
///
/// Two layers of gating: a hand disables itself while its chosen task plays
/// and re-enables on that task's completion; the whole set is suspended
/// while a focus task holds the floor. Keeping the flags separate means a
/// completing focus task never resurrects a hand whose own task is still in
/// progress.
///
/// Allocator rule: while both hands are enabled their indices are never
/// equal. A move that lands on the other hand's slot steps once more in
/// its travel direction.
#[derive(Resource, Debug)]
pub struct SelectionCursors {
    left: SelectionCursor,
    right: SelectionCursor,
    suspended: bool,
}

impl SelectionCursors {
    /// Fresh allocation: left on 0, right on the next distinct slot, both
    /// hands suspended until a run starts.
    pub fn new(board_len: usize) -> Self {
        Self {
            left: SelectionCursor::new(0),
            right: SelectionCursor::new(if board_len > 1 { 1 } else { 0 }),
            suspended: true,
        }
    }

    pub fn hand(&self, hand: Hand) -> &SelectionCursor {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    fn hand_mut(&mut self, hand: Hand) -> &mut SelectionCursor {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Whether the hand currently reacts to move/select input.
    pub fn is_active(&self, hand: Hand) -> bool {
        !self.suspended && self.hand(hand).enabled
    }

    /// Freezes both hands while a focus task holds the floor.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn lift_suspension(&mut self) {
        self.suspended = false;
    }

    /// Circular move over the whole board, stepping past the other hand's
    /// slot when both hands are enabled. Returns the new index, or None if
    /// the hand is inactive or the board is empty.
    pub fn move_cursor(
        &mut self,
        hand: Hand,
        direction: CursorDirection,
        board_len: usize,
    ) -> Option<usize> {
        if board_len == 0 || !self.is_active(hand) {
            return None;
        }

        let step = match direction {
            CursorDirection::Prev => board_len - 1,
            CursorDirection::Next => 1,
        };

        let other = self.hand(hand.other());
        let blocked = other.enabled.then_some(other.index);

        let cursor = self.hand_mut(hand);
        let mut next = (cursor.index + step) % board_len;
        if Some(next) == blocked {
            next = (next + step) % board_len;
        }
        cursor.index = next;
        Some(next)
    }

    /// Commits the hand to a task: disabled until that task completes.
    pub fn begin_play(&mut self, hand: Hand, task: TaskId) {
        let cursor = self.hand_mut(hand);
        cursor.enabled = false;
        cursor.pending_task = Some(task);
    }

    /// Re-enables any hand that was waiting on this task.
    pub fn complete_task(&mut self, task: TaskId) {
        for cursor in [&mut self.left, &mut self.right] {
            if cursor.pending_task == Some(task) {
                cursor.pending_task = None;
                cursor.enabled = true;
            }
        }
    }

    /// Returns to the fresh suspended allocation for a new round.
    pub fn reset(&mut self, board_len: usize) {
        *self = Self::new(board_len);
    }
}

impl Default for SelectionCursors {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(board_len: usize) -> SelectionCursors {
        let mut cursors = SelectionCursors::new(board_len);
        cursors.lift_suspension();
        cursors
    }

    #[test]
    fn fresh_allocation_is_distinct_and_suspended() {
        let cursors = SelectionCursors::new(4);
        assert_eq!(cursors.hand(Hand::Left).index(), 0);
        assert_eq!(cursors.hand(Hand::Right).index(), 1);
        assert!(cursors.is_suspended());
        assert!(!cursors.is_active(Hand::Left));
    }

    #[test]
    fn moves_are_circular_over_the_reachable_ring() {
        let mut cursors = active(4);
        // Park the right hand on a task so only the left ring matters.
        cursors.begin_play(Hand::Right, TaskId::new(9));

        let mut trail = Vec::new();
        for _ in 0..4 {
            trail.push(cursors.move_cursor(Hand::Left, CursorDirection::Next, 4));
        }
        assert_eq!(trail, vec![Some(1), Some(2), Some(3), Some(0)]);
    }

    #[test]
    fn prev_and_next_are_inverse_moves() {
        let mut cursors = active(5);
        cursors.begin_play(Hand::Right, TaskId::new(9));

        cursors.move_cursor(Hand::Left, CursorDirection::Next, 5);
        cursors.move_cursor(Hand::Left, CursorDirection::Prev, 5);
        assert_eq!(cursors.hand(Hand::Left).index(), 0);
    }

    #[test]
    fn enabled_hands_never_share_an_index() {
        let mut cursors = active(4);

        for direction in [CursorDirection::Next, CursorDirection::Prev] {
            for _ in 0..16 {
                cursors.move_cursor(Hand::Left, direction, 4);
                cursors.move_cursor(Hand::Right, direction, 4);
                assert_ne!(
                    cursors.hand(Hand::Left).index(),
                    cursors.hand(Hand::Right).index()
                );
            }
        }
    }

    #[test]
    fn collision_steps_in_the_travel_direction() {
        let mut cursors = active(4);
        // Left sits on 0, right on 1: moving left Next skips 1 onto 2.
        let landed = cursors.move_cursor(Hand::Left, CursorDirection::Next, 4);
        assert_eq!(landed, Some(2));
    }

    #[test]
    fn a_parked_hand_does_not_block() {
        let mut cursors = active(4);
        cursors.begin_play(Hand::Right, TaskId::new(9));

        // Right is disabled on index 1, so left may pass through it.
        let landed = cursors.move_cursor(Hand::Left, CursorDirection::Next, 4);
        assert_eq!(landed, Some(1));
    }

    #[test]
    fn moves_are_ignored_while_disabled_or_suspended() {
        let mut cursors = active(4);
        cursors.begin_play(Hand::Left, TaskId::new(3));
        assert_eq!(cursors.move_cursor(Hand::Left, CursorDirection::Next, 4), None);

        let mut suspended = active(4);
        suspended.suspend();
        assert_eq!(
            suspended.move_cursor(Hand::Right, CursorDirection::Next, 4),
            None
        );
    }

    #[test]
    fn completion_reenables_only_the_waiting_hand() {
        let mut cursors = active(4);
        cursors.begin_play(Hand::Left, TaskId::new(3));
        cursors.begin_play(Hand::Right, TaskId::new(7));

        cursors.complete_task(TaskId::new(3));
        assert!(cursors.is_active(Hand::Left));
        assert!(!cursors.is_active(Hand::Right));
        assert!(!cursors.hand(Hand::Right).is_enabled());
        assert_eq!(cursors.hand(Hand::Right).pending_task(), Some(TaskId::new(7)));
    }

    #[test]
    fn suspension_outlives_a_hand_completion() {
        let mut cursors = active(4);
        cursors.begin_play(Hand::Left, TaskId::new(3));
        cursors.suspend();

        cursors.complete_task(TaskId::new(3));
        // The hand is enabled again but stays frozen until the focus lifts.
        assert!(!cursors.is_active(Hand::Left));
        cursors.lift_suspension();
        assert!(cursors.is_active(Hand::Left));
    }

    #[test]
    fn reset_restores_the_fresh_allocation() {
        let mut cursors = active(4);
        cursors.move_cursor(Hand::Left, CursorDirection::Next, 4);
        cursors.begin_play(Hand::Right, TaskId::new(2));

        cursors.reset(4);
        assert_eq!(cursors.hand(Hand::Left).index(), 0);
        assert_eq!(cursors.hand(Hand::Right).index(), 1);
        assert!(cursors.is_suspended());
        assert_eq!(cursors.hand(Hand::Right).pending_task(), None);
    }
}
