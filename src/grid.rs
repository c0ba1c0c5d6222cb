use crate::input::Direction;

/// Board position in pixel coordinates, always a multiple of the cell size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step along `direction`.
    ///
    /// `Direction::None` yields the same cell.
    #[must_use]
    pub fn step(self, direction: Direction, cell_size: u32) -> Self {
        let (dx, dy) = direction.unit();
        let size = cell_size as i32;
        Self {
            x: self.x + dx * size,
            y: self.y + dy * size,
        }
    }
}

/// Square playing field measured in pixels and divided into equal cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    size: u32,
    cell_size: u32,
}

impl Board {
    /// Creates a board `size` pixels wide and tall.
    ///
    /// `size` is expected to be a positive multiple of `cell_size`; see
    /// [`crate::config::GameConfig::validate`].
    #[must_use]
    pub fn new(size: u32, cell_size: u32) -> Self {
        debug_assert!(cell_size > 0 && size % cell_size == 0);
        Self { size, cell_size }
    }

    #[must_use]
    pub fn cell_size(self) -> u32 {
        self.cell_size
    }

    /// Number of cells along either axis.
    #[must_use]
    pub fn columns(self) -> u32 {
        self.size / self.cell_size
    }

    #[must_use]
    pub fn cell_count(self) -> usize {
        let columns = self.columns() as usize;
        columns * columns
    }

    /// Returns true when both coordinates lie in `[0, size)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        let size = self.size as i32;
        (0..size).contains(&cell.x) && (0..size).contains(&cell.y)
    }

    /// Cell at the given column and row.
    #[must_use]
    pub fn cell_at(self, column: u32, row: u32) -> Cell {
        Cell {
            x: (column * self.cell_size) as i32,
            y: (row * self.cell_size) as i32,
        }
    }

    /// Column and row of `cell`, or `None` when it is off the board.
    #[must_use]
    pub fn column_row(self, cell: Cell) -> Option<(u32, u32)> {
        if !self.contains(cell) {
            return None;
        }
        let size = self.cell_size as i32;
        Some(((cell.x / size) as u32, (cell.y / size) as u32))
    }

    /// Starting cell of a fresh snake.
    #[must_use]
    pub fn center(self) -> Cell {
        let middle = self.columns() / 2;
        self.cell_at(middle, middle)
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Cell};
    use crate::input::Direction;

    #[test]
    fn step_moves_by_whole_cells() {
        let start = Cell::new(200, 200);

        assert_eq!(start.step(Direction::Up, 20), Cell::new(200, 180));
        assert_eq!(start.step(Direction::Down, 20), Cell::new(200, 220));
        assert_eq!(start.step(Direction::Left, 20), Cell::new(180, 200));
        assert_eq!(start.step(Direction::Right, 20), Cell::new(220, 200));
        assert_eq!(start.step(Direction::None, 20), start);
    }

    #[test]
    fn contains_is_half_open() {
        let board = Board::new(400, 20);

        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(380, 380)));
        assert!(!board.contains(Cell::new(400, 200)));
        assert!(!board.contains(Cell::new(-20, 200)));
        assert!(!board.contains(Cell::new(200, 400)));
    }

    #[test]
    fn classic_board_geometry() {
        let board = Board::new(400, 20);

        assert_eq!(board.columns(), 20);
        assert_eq!(board.cell_count(), 400);
        assert_eq!(board.center(), Cell::new(200, 200));
        assert_eq!(board.cell_at(3, 4), Cell::new(60, 80));
        assert_eq!(board.column_row(Cell::new(60, 80)), Some((3, 4)));
        assert_eq!(board.column_row(Cell::new(-20, 80)), None);
    }
}
