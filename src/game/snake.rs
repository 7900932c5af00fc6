use super::direction::Direction;
use super::grid::{Cell, Grid};
use crate::consts;
use std::collections::VecDeque;
use thiserror::Error;

/// Snake state plus the per-tick movement rules.
///
/// All cells are in board units relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells occupied by the snake, head at the front, tail at the back.
    /// Never empty; never contains duplicates.
    pub(super) cells: VecDeque<Cell>,

    /// The direction committed at the last tick
    pub(super) direction: Direction,

    /// A requested direction change, applied at the start of the next tick.
    /// Latched rather than applied immediately so that several key presses
    /// between two ticks cannot turn the snake more than once.
    pub(super) pending: Option<Direction>,
}

impl Snake {
    /// Create a new snake of length one with its head at `head`, moving right
    pub(super) fn new(head: Cell) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
            direction: Direction::Right,
            pending: None,
        }
    }

    pub(super) fn head(&self) -> Cell {
        self.cells
            .front()
            .copied()
            .expect("snake should never be empty")
    }

    pub(super) fn cells(&self) -> &VecDeque<Cell> {
        &self.cells
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }

    /// Request a direction change for the next tick.  Ignored if `direction`
    /// is the exact reverse of the committed direction, which would steer the
    /// head straight into its own neck.  A later request before the next tick
    /// overwrites an earlier one.
    pub(super) fn request_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = Some(direction);
        }
    }

    /// Move the snake one cell forward: commit the pending direction, then
    /// either advance (returning whether `food` was eaten) or report the
    /// terminal collision that prevented the move.
    ///
    /// The candidate head is checked against the full pre-move body, so
    /// moving into the cell the tail is about to vacate still counts as a
    /// collision.
    pub(super) fn advance(&mut self, grid: Grid, food: Cell) -> Result<Advance, Collision> {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        let candidate = self.direction.step(self.head(), grid.cell_size());
        if !grid.contains(candidate) {
            return Err(Collision::Wall);
        }
        if self.cells.contains(&candidate) {
            return Err(Collision::SelfHit);
        }
        self.cells.push_front(candidate);
        if candidate == food {
            Ok(Advance::Ate)
        } else {
            let _ = self.cells.pop_back();
            Ok(Advance::Moved)
        }
    }
}

/// The outcome of a successful [`Snake::advance()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Advance {
    /// The snake moved one cell; its length is unchanged
    Moved,

    /// The snake's head landed on the food; the tail was kept, so the snake
    /// grew by one cell
    Ate,
}

/// A terminal collision, ending the current game
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(super) enum Collision {
    #[error("the snake hit a wall")]
    Wall,
    #[error("the snake ran into itself")]
    SelfHit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(400, 400, 20)
    }

    // Food somewhere the tests below never step on
    const FOOD: Cell = Cell::new(0, 380);

    #[test]
    fn advance_moves_one_cell_right() {
        let mut snake = Snake::new(Cell::new(200, 200));
        assert_eq!(snake.advance(grid(), FOOD), Ok(Advance::Moved));
        assert_eq!(snake.cells(), &VecDeque::from([Cell::new(220, 200)]));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_onto_food_grows() {
        let mut snake = Snake::new(Cell::new(200, 200));
        assert_eq!(snake.advance(grid(), Cell::new(220, 200)), Ok(Advance::Ate));
        assert_eq!(
            snake.cells(),
            &VecDeque::from([Cell::new(220, 200), Cell::new(200, 200)])
        );
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn pending_direction_applies_at_next_tick() {
        let mut snake = Snake::new(Cell::new(200, 200));
        snake.request_direction(Direction::Up);
        assert_eq!(snake.advance(grid(), FOOD), Ok(Advance::Moved));
        assert_eq!(snake.head(), Cell::new(200, 180));
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn reverse_request_is_ignored() {
        let mut snake = Snake::new(Cell::new(200, 200));
        snake.request_direction(Direction::Left);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.advance(grid(), FOOD), Ok(Advance::Moved));
        assert_eq!(snake.head(), Cell::new(220, 200));
    }

    #[test]
    fn latest_request_before_a_tick_wins() {
        let mut snake = Snake::new(Cell::new(200, 200));
        snake.request_direction(Direction::Up);
        snake.request_direction(Direction::Down);
        assert_eq!(snake.advance(grid(), FOOD), Ok(Advance::Moved));
        assert_eq!(snake.head(), Cell::new(200, 220));
    }

    #[test]
    fn wall_collision_on_left_edge() {
        let mut snake = Snake {
            cells: VecDeque::from([Cell::new(0, 200), Cell::new(20, 200)]),
            direction: Direction::Left,
            pending: None,
        };
        let before = snake.clone();
        assert_eq!(snake.advance(grid(), FOOD), Err(Collision::Wall));
        // A terminal collision leaves the body where it was
        assert_eq!(snake, before);
    }

    #[test]
    fn wall_collision_on_right_edge() {
        let mut snake = Snake::new(Cell::new(380, 200));
        assert_eq!(snake.advance(grid(), FOOD), Err(Collision::Wall));
    }

    #[test]
    fn self_collision_on_own_segment() {
        // Head doubling back into the middle of its own body
        let mut snake = Snake {
            cells: VecDeque::from([
                Cell::new(40, 20),
                Cell::new(60, 20),
                Cell::new(60, 40),
                Cell::new(40, 40),
                Cell::new(20, 40),
            ]),
            direction: Direction::Left,
            pending: None,
        };
        snake.request_direction(Direction::Down);
        assert_eq!(snake.advance(grid(), FOOD), Err(Collision::SelfHit));
    }

    #[test]
    fn cannot_chase_own_tail() {
        // The head steps onto the cell the tail would vacate this tick.  The
        // strict rule applies: the full pre-move body counts, so this is a
        // collision rather than a legal move.
        let mut snake = Snake {
            cells: VecDeque::from([
                Cell::new(40, 20),
                Cell::new(40, 40),
                Cell::new(20, 40),
                Cell::new(20, 20),
            ]),
            direction: Direction::Up,
            pending: None,
        };
        snake.request_direction(Direction::Left);
        assert_eq!(snake.advance(grid(), FOOD), Err(Collision::SelfHit));
    }

    #[test]
    fn length_never_changes_by_more_than_one() {
        let mut snake = Snake::new(Cell::new(200, 200));
        let mut food = Cell::new(220, 200);
        for step in 0..8 {
            let before = snake.len();
            let r = snake.advance(grid(), food);
            assert!(r.is_ok(), "unexpected collision at step {step}: {r:?}");
            assert!(snake.len() == before || snake.len() == before + 1);
            assert!(snake.len() >= 1);
            if r == Ok(Advance::Ate) {
                // park the food out of the way for the remaining steps
                food = FOOD;
            }
        }
    }
}
