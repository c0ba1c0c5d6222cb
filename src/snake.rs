use std::collections::VecDeque;

use crate::grid::Cell;
use crate::input::Direction;

/// Ordered snake body, head first.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves one cell along `direction` and returns whether the snake grew.
    ///
    /// The new head is prepended. When it lands on `food` the tail is kept,
    /// otherwise the tail is dropped so the length is unchanged. A resting
    /// direction leaves the body untouched.
    pub fn advance(&mut self, direction: Direction, cell_size: u32, food: Cell) -> bool {
        if direction.is_none() {
            return false;
        }

        let next_head = self.head().step(direction, cell_size);
        self.body.push_front(next_head);

        let grew = next_head == food;
        if !grew {
            let _ = self.body.pop_back();
        }
        grew
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if a segment other than the head occupies `cell`.
    #[must_use]
    pub fn occupies_body(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        self.occupies_body(self.head())
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Snake;
    use crate::grid::Cell;
    use crate::input::Direction;

    const FAR_AWAY: Cell = Cell::new(0, 0);

    #[test]
    fn snake_moves_one_cell_per_advance() {
        let mut snake = Snake::new(Cell::new(200, 200));

        let grew = snake.advance(Direction::Right, 20, FAR_AWAY);

        assert!(!grew);
        assert_eq!(snake.head(), Cell::new(220, 200));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn eating_keeps_previous_tail() {
        let mut snake = Snake::from_segments(vec![Cell::new(200, 200), Cell::new(180, 200)]);

        let grew = snake.advance(Direction::Right, 20, Cell::new(220, 200));

        assert!(grew);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Cell::new(220, 200), Cell::new(200, 200), Cell::new(180, 200)]
        );
    }

    #[test]
    fn resting_direction_does_not_move() {
        let mut snake = Snake::new(Cell::new(200, 200));

        assert!(!snake.advance(Direction::None, 20, Cell::new(200, 200)));
        assert_eq!(snake.head(), Cell::new(200, 200));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn empty_segments_are_refused() {
        let _ = Snake::from_segments(Vec::new());
    }

    #[test]
    fn occupancy_checks_include_or_skip_head() {
        let snake = Snake::from_segments(vec![Cell::new(40, 0), Cell::new(20, 0)]);

        assert!(snake.occupies(Cell::new(40, 0)));
        assert!(!snake.occupies_body(Cell::new(40, 0)));
        assert!(snake.occupies_body(Cell::new(20, 0)));
        assert!(!snake.head_overlaps_body());
    }
}
