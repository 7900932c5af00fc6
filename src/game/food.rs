use super::grid::{Cell, Grid};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use thiserror::Error;

/// The snake occupies every cell of the board, so there is nowhere left to
/// place food
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left to place food on")]
pub(super) struct NoSpaceAvailable;

/// Choose a cell for the food, uniformly at random among the cells not
/// occupied by the snake.
///
/// Random cells are sampled a bounded number of times; once they keep landing
/// on the snake, the free cells are enumerated exhaustively instead, so this
/// always terminates even on a nearly-full board.
pub(super) fn place<R: Rng>(rng: &mut R, snake: &Snake, grid: Grid) -> Result<Cell, NoSpaceAvailable> {
    if grid.cols() == 0 || grid.rows() == 0 {
        return Err(NoSpaceAvailable);
    }
    for _ in 0..consts::FOOD_SAMPLE_ATTEMPTS {
        let cell = grid.cell_at(
            rng.random_range(0..grid.cols()),
            rng.random_range(0..grid.rows()),
        );
        if !snake.occupies(cell) {
            return Ok(cell);
        }
    }
    grid.cells()
        .filter(|&cell| !snake.occupies(cell))
        .choose(rng)
        .ok_or(NoSpaceAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::direction::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn snake_on(cells: &[Cell]) -> Snake {
        Snake {
            cells: VecDeque::from_iter(cells.iter().copied()),
            direction: Direction::Right,
            pending: None,
        }
    }

    #[test]
    fn never_lands_on_the_snake() {
        let grid = Grid::new(80, 80, 20);
        let snake = snake_on(&[
            Cell::new(0, 0),
            Cell::new(20, 0),
            Cell::new(40, 0),
            Cell::new(60, 0),
            Cell::new(60, 20),
            Cell::new(40, 20),
            Cell::new(20, 20),
            Cell::new(0, 20),
        ]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..100 {
            let cell = place(&mut rng, &snake, grid).unwrap();
            assert!(!snake.occupies(cell));
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn finds_the_single_free_cell() {
        let grid = Grid::new(40, 40, 20);
        let snake = snake_on(&[Cell::new(0, 0), Cell::new(20, 0), Cell::new(0, 20)]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place(&mut rng, &snake, grid), Ok(Cell::new(20, 20)));
    }

    #[test]
    fn full_board_reports_no_space() {
        let grid = Grid::new(40, 40, 20);
        let snake = snake_on(&[
            Cell::new(0, 0),
            Cell::new(20, 0),
            Cell::new(20, 20),
            Cell::new(0, 20),
        ]);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        assert_eq!(place(&mut rng, &snake, grid), Err(NoSpaceAvailable));
    }
}
