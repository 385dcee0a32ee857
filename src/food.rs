use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random samples tried before falling back to a free-cell scan.
const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    ///
    /// Rejection-samples random cells up to a fixed cap, then scans for the
    /// remaining free cells so a crowded board still spawns. Returns `None`
    /// exactly when the snake covers the whole grid.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        spawn_position(rng, bounds, snake).map(Self::at)
    }
}

/// Picks a uniformly random position not occupied by the snake, or `None`
/// when no free cell exists.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    // The board is nearly (or fully) covered; enumerate what is left.
    let mut candidates = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{spawn_position, Food};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, bounds, &snake).expect("board has free cells");
            assert!(!snake.occupies(food.position));
        }
    }

    #[test]
    fn spawn_finds_the_single_free_cell() {
        // 2x2 board with three cells occupied: random sampling may miss the
        // last free cell, the fallback scan must not.
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        for _ in 0..50 {
            let position = spawn_position(&mut rng, bounds, &snake);
            assert_eq!(position, Some(Position { x: 0, y: 1 }));
        }
    }

    #[test]
    fn spawn_on_a_full_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(13);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        assert_eq!(spawn_position(&mut rng, bounds, &snake), None);
    }
}
