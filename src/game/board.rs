use super::direction::Direction;
use ratatui::layout::{Position, Positions, Rect, Size};
use serde::Deserialize;

/// What happens when the snake's head leaves the grid
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum CollisionPolicy {
    /// Leaving one edge re-enters from the opposite edge; only running into
    /// itself ends the game.
    #[default]
    Wrap,

    /// Row 0, column 0, and anything past the bottom & right edges are
    /// walls.  The cell the tail is about to leave is safe to enter.
    Wall,
}

impl CollisionPolicy {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            CollisionPolicy::Wrap => "wrap",
            CollisionPolicy::Wall => "wall",
        }
    }
}

/// The grid a session is played on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Board {
    pub(super) width: u16,
    pub(super) height: u16,
    pub(super) policy: CollisionPolicy,
}

impl Board {
    pub(super) fn new(size: Size, policy: CollisionPolicy) -> Board {
        Board {
            width: size.width,
            height: size.height,
            policy,
        }
    }

    /// Return the cell one step from `pos` in direction `dir`, or `None` if
    /// that step runs into a wall.  Under [`CollisionPolicy::Wall`], a cell is
    /// open only if its column is in `1..width` and its row is in `1..height`.
    pub(super) fn step(self, pos: Position, dir: Direction) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match dir {
            Direction::Up => y = self.decrement(y, self.height)?,
            Direction::Down => y = self.increment(y, self.height)?,
            Direction::Left => x = self.decrement(x, self.width)?,
            Direction::Right => x = self.increment(x, self.width)?,
        }
        Some(Position { x, y })
    }

    /// Iterate over the cells that food may be placed in: everything but the
    /// outermost rows & columns
    pub(super) fn interior(self) -> Positions {
        Rect::new(
            1,
            1,
            self.width.saturating_sub(2),
            self.height.saturating_sub(2),
        )
        .positions()
    }

    fn decrement(self, v: u16, max: u16) -> Option<u16> {
        match self.policy {
            CollisionPolicy::Wrap => Some(if v == 0 { max.saturating_sub(1) } else { v - 1 }),
            CollisionPolicy::Wall => v.checked_sub(1).filter(|&v2| v2 > 0),
        }
    }

    fn increment(self, v: u16, max: u16) -> Option<u16> {
        let next = v.checked_add(1).filter(|&v2| v2 < max);
        match self.policy {
            CollisionPolicy::Wrap => Some(next.unwrap_or(0)),
            CollisionPolicy::Wall => next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SIZE: Size = Size {
        width: 20,
        height: 10,
    };

    #[rstest]
    #[case(Direction::Up, Position::new(4, 5), Some(Position::new(4, 4)))]
    #[case(Direction::Down, Position::new(4, 5), Some(Position::new(4, 6)))]
    #[case(Direction::Left, Position::new(4, 5), Some(Position::new(3, 5)))]
    #[case(Direction::Right, Position::new(4, 5), Some(Position::new(5, 5)))]
    #[case(Direction::Up, Position::new(4, 0), Some(Position::new(4, 9)))]
    #[case(Direction::Down, Position::new(4, 9), Some(Position::new(4, 0)))]
    #[case(Direction::Left, Position::new(0, 5), Some(Position::new(19, 5)))]
    #[case(Direction::Right, Position::new(19, 5), Some(Position::new(0, 5)))]
    fn test_wrap_step(#[case] d: Direction, #[case] pos: Position, #[case] r: Option<Position>) {
        let board = Board::new(SIZE, CollisionPolicy::Wrap);
        assert_eq!(board.step(pos, d), r);
    }

    #[rstest]
    #[case(Direction::Up, Position::new(4, 5), Some(Position::new(4, 4)))]
    #[case(Direction::Up, Position::new(4, 2), Some(Position::new(4, 1)))]
    #[case(Direction::Up, Position::new(4, 1), None)]
    #[case(Direction::Down, Position::new(4, 8), Some(Position::new(4, 9)))]
    #[case(Direction::Down, Position::new(4, 9), None)]
    #[case(Direction::Left, Position::new(2, 5), Some(Position::new(1, 5)))]
    #[case(Direction::Left, Position::new(1, 5), None)]
    #[case(Direction::Right, Position::new(18, 5), Some(Position::new(19, 5)))]
    #[case(Direction::Right, Position::new(19, 5), None)]
    fn test_wall_step(#[case] d: Direction, #[case] pos: Position, #[case] r: Option<Position>) {
        let board = Board::new(SIZE, CollisionPolicy::Wall);
        assert_eq!(board.step(pos, d), r);
    }

    #[test]
    fn interior_excludes_border() {
        let board = Board::new(SIZE, CollisionPolicy::Wrap);
        let cells = board.interior().collect::<Vec<_>>();
        assert_eq!(cells.len(), 18 * 8);
        assert!(cells
            .iter()
            .all(|p| (1..19).contains(&p.x) && (1..9).contains(&p.y)));
    }

    #[test]
    fn tiny_board_has_no_interior() {
        let board = Board::new(Size::new(2, 2), CollisionPolicy::Wall);
        assert_eq!(board.interior().count(), 0);
    }

    #[test]
    fn deserialize_policy() {
        #[derive(Deserialize)]
        struct Wrapper {
            collision: CollisionPolicy,
        }
        let w: Wrapper = toml::from_str("collision = \"wall\"").unwrap();
        assert_eq!(w.collision, CollisionPolicy::Wall);
        let w: Wrapper = toml::from_str("collision = \"wrap\"").unwrap();
        assert_eq!(w.collision, CollisionPolicy::Wrap);
        assert!(toml::from_str::<Wrapper>("collision = \"bounce\"").is_err());
    }
}
