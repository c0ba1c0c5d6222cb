use rand::Rng;

use crate::grid::{Board, Cell};
use crate::snake::Snake;

/// Picks a uniformly random cell that the snake does not occupy.
///
/// Uses rejection sampling over the whole board, so it never returns when the
/// snake fills every cell. On a 20x20 board that takes a 400-cell snake.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, board: Board, snake: &Snake) -> Cell {
    place_avoiding(rng, board, |cell| snake.occupies(cell))
}

/// Rejection-samples a cell for which `forbidden` returns false.
#[must_use]
pub fn place_avoiding<R, F>(rng: &mut R, board: Board, forbidden: F) -> Cell
where
    R: Rng + ?Sized,
    F: Fn(Cell) -> bool,
{
    let columns = board.columns();
    loop {
        let candidate = board.cell_at(rng.gen_range(0..columns), rng.gen_range(0..columns));
        if !forbidden(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{place, place_avoiding};
    use crate::grid::{Board, Cell};
    use crate::snake::Snake;

    #[test]
    fn food_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(100, 20);
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(20, 0),
            Cell::new(40, 0),
            Cell::new(60, 0),
            Cell::new(80, 0),
        ]);

        for _ in 0..200 {
            let food = place(&mut rng, board, &snake);
            assert!(!snake.occupies(food));
            assert!(board.contains(food));
        }
    }

    #[test]
    fn food_is_grid_aligned() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::new(400, 20);
        let snake = Snake::new(board.center());

        for _ in 0..100 {
            let food = place(&mut rng, board, &snake);
            assert_eq!(food.x % 20, 0);
            assert_eq!(food.y % 20, 0);
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::new(60, 20);
        let free = Cell::new(40, 20);

        let food = place_avoiding(&mut rng, board, |cell| cell != free);

        assert_eq!(food, free);
    }
}
