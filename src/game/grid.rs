/// A single grid-aligned position on the board, in board units.  Both
/// coordinates of a cell on the board are multiples of the grid's cell size;
/// coordinates outside the board (including negative ones) are representable
/// so that a candidate move can be computed first and bounds-checked after.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) struct Cell {
    pub(super) x: i32,
    pub(super) y: i32,
}

impl Cell {
    pub(super) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

/// The board's coordinate space: width & height in board units plus the fixed
/// cell size.  Pure data; knows nothing about what occupies the cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    width: u16,
    height: u16,
    cell: u16,
}

impl Grid {
    pub(super) fn new(width: u16, height: u16, cell: u16) -> Grid {
        debug_assert!(cell > 0, "cell size must be positive");
        Grid {
            width,
            height,
            cell,
        }
    }

    pub(super) fn cell_size(self) -> u16 {
        self.cell
    }

    pub(super) fn cols(self) -> u16 {
        self.width / self.cell
    }

    pub(super) fn rows(self) -> u16 {
        self.height / self.cell
    }

    /// Is `cell` within the bounds of the board?
    pub(super) fn contains(self, cell: Cell) -> bool {
        (0..i32::from(self.width)).contains(&cell.x) && (0..i32::from(self.height)).contains(&cell.y)
    }

    /// The cell in column `col`, row `row`
    pub(super) fn cell_at(self, col: u16, row: u16) -> Cell {
        Cell {
            x: i32::from(col) * i32::from(self.cell),
            y: i32::from(row) * i32::from(self.cell),
        }
    }

    /// The (column, row) of an in-bounds cell, for drawing
    pub(super) fn col_row_of(self, cell: Cell) -> Option<(u16, u16)> {
        if !self.contains(cell) {
            return None;
        }
        let step = i32::from(self.cell);
        let col = u16::try_from(cell.x / step).ok()?;
        let row = u16::try_from(cell.y / step).ok()?;
        Some((col, row))
    }

    /// The cell closest to the middle of the board
    pub(super) fn center(self) -> Cell {
        self.cell_at(self.cols() / 2, self.rows() / 2)
    }

    /// Iterate over every cell of the board in row-major order
    pub(super) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| self.cell_at(col, row)))
    }
}
