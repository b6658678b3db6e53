use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the terminal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head first, tail last
    pub(super) segments: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake facing in `direction` from its cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub(super) fn new<I: IntoIterator<Item = Position>>(segments: I, direction: Direction) -> Snake {
        let segments = segments.into_iter().collect::<VecDeque<_>>();
        assert!(!segments.is_empty(), "a snake needs at least a head");
        Snake {
            segments,
            direction,
        }
    }

    pub(super) fn head(&self) -> Position {
        self.segments[0]
    }

    pub(super) fn direction(&self) -> Direction {
        self.direction
    }

    pub(super) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(super) fn contains(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Does any segment other than the tail occupy `pos`?
    pub(super) fn contains_ahead_of_tail(&self, pos: Position) -> bool {
        self.segments
            .iter()
            .take(self.len().saturating_sub(1))
            .any(|&p| p == pos)
    }

    /// Face `direction`, unless that would mean turning back on itself.
    /// Returns whether the direction changed.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() || direction == self.direction {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the head to `pos`, leaving the rest of the body in place
    pub(super) fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Remove the last segment and return the cell it vacated
    pub(super) fn pop_tail(&mut self) -> Option<Position> {
        self.segments.pop_back()
    }
}
