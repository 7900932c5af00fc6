use super::grid::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The cell one grid step from `cell` in this direction.  The result may
    /// lie outside the board; callers bounds-check it against the grid.
    pub(super) fn step(self, cell: Cell, cell_size: u16) -> Cell {
        let step = i32::from(cell_size);
        match self {
            Direction::Up => Cell::new(cell.x, cell.y - step),
            Direction::Down => Cell::new(cell.x, cell.y + step),
            Direction::Left => Cell::new(cell.x - step, cell.y),
            Direction::Right => Cell::new(cell.x + step, cell.y),
        }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(200, 200), Cell::new(200, 180))]
    #[case(Direction::Down, Cell::new(200, 200), Cell::new(200, 220))]
    #[case(Direction::Left, Cell::new(200, 200), Cell::new(180, 200))]
    #[case(Direction::Right, Cell::new(200, 200), Cell::new(220, 200))]
    #[case(Direction::Left, Cell::new(0, 200), Cell::new(-20, 200))]
    #[case(Direction::Up, Cell::new(200, 0), Cell::new(200, -20))]
    fn test_step(#[case] d: Direction, #[case] from: Cell, #[case] to: Cell) {
        assert_eq!(d.step(from, 20), to);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
    }
}
