use std::collections::VecDeque;

use crate::config::{GridSize, START_HEADING};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates may lie outside the grid; that is how a wall collision is
/// represented after a move.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

/// Mutable snake state: body segments, heading, and one-shot growth.
///
/// The body is ordered tail-first: front of the deque is the oldest segment
/// (tail), back is the head. Movement appends a head and pops the tail, so
/// each tick is O(1) regardless of length.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    grow_pending: bool,
}

impl Snake {
    /// Creates a snake of `initial_length` segments ending at the grid
    /// center, heading right.
    #[must_use]
    pub fn new(bounds: GridSize, initial_length: u16) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(usize::from(initial_length) + 1),
            heading: START_HEADING,
            grow_pending: false,
        };
        snake.reset(bounds, initial_length);
        snake
    }

    /// Creates a snake from explicit segments in tail-to-head order.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            heading,
            grow_pending: false,
        }
    }

    /// Rebuilds the starting body: `initial_length` consecutive cells laid
    /// out tail to head, with the head at the grid center and the tail
    /// trailing off to the left.
    pub fn reset(&mut self, bounds: GridSize, initial_length: u16) {
        let center = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };

        self.body.clear();
        for offset in (0..i32::from(initial_length)).rev() {
            self.body.push_back(Position {
                x: center.x - offset,
                y: center.y,
            });
        }

        self.heading = START_HEADING;
        self.grow_pending = false;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Sets the heading unless the request would reverse the snake onto
    /// itself; a reversing request is silently dropped.
    pub fn turn(&mut self, requested: Direction) {
        if requested != self.heading.opposite() {
            self.heading = requested;
        }
    }

    /// Advances one cell in the current heading.
    ///
    /// The new head is appended before the tail is trimmed; a pending
    /// growth skips the trim and is consumed.
    pub fn move_forward(&mut self) {
        let next_head = self.head().step(self.heading);
        self.body.push_back(next_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            let _ = self.body.pop_front();
        }
    }

    /// Queues growth for the next move. Not stacked: calling this twice
    /// before the next move still grows by a single segment.
    pub fn grow_next(&mut self) {
        self.grow_pending = true;
    }

    /// Returns true if the head left the grid or landed on another segment.
    #[must_use]
    pub fn check_collision(&self, bounds: GridSize) -> bool {
        !self.head().is_within_bounds(bounds) || self.head_overlaps_body()
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        let non_head = self.body.len() - 1;
        self.body.iter().take(non_head).any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
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

    /// Returns the current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 40,
        height: 30,
    };

    fn segments_of(snake: &Snake) -> Vec<Position> {
        snake.segments().copied().collect()
    }

    #[test]
    fn new_snake_is_centered_tail_to_head_heading_right() {
        let snake = Snake::new(BOUNDS, 3);

        assert_eq!(
            segments_of(&snake),
            vec![
                Position { x: 18, y: 15 },
                Position { x: 19, y: 15 },
                Position { x: 20, y: 15 },
            ]
        );
        assert_eq!(snake.head(), Position { x: 20, y: 15 });
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn move_preserves_length_without_pending_growth() {
        let mut snake = Snake::new(BOUNDS, 3);

        snake.move_forward();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 21, y: 15 });
        // Oldest segment was trimmed.
        assert!(!snake.occupies(Position { x: 18, y: 15 }));
    }

    #[test]
    fn move_with_pending_growth_adds_one_segment_and_clears_flag() {
        let mut snake = Snake::new(BOUNDS, 3);

        snake.grow_next();
        snake.grow_next();
        snake.move_forward();
        assert_eq!(snake.len(), 4);

        // The flag was consumed, so the next move trims again.
        snake.move_forward();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn body_cells_stay_distinct_after_non_fatal_moves() {
        let mut snake = Snake::new(BOUNDS, 3);

        for direction in [Direction::Down, Direction::Left, Direction::Up] {
            snake.turn(direction);
            snake.move_forward();
            assert!(!snake.check_collision(BOUNDS));

            let segments = segments_of(&snake);
            for (i, a) in segments.iter().enumerate() {
                assert!(!segments[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn turn_rejects_direct_reversal_only() {
        let mut snake = Snake::new(BOUNDS, 3);

        snake.turn(Direction::Left);
        assert_eq!(snake.heading(), Direction::Right);

        snake.turn(Direction::Up);
        assert_eq!(snake.heading(), Direction::Up);

        snake.turn(Direction::Down);
        assert_eq!(snake.heading(), Direction::Up);

        snake.turn(Direction::Right);
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn wall_collision_is_detected_on_each_edge() {
        let bounds = GridSize {
            width: 4,
            height: 4,
        };

        let mut left = Snake::from_segments(vec![Position { x: 0, y: 2 }], Direction::Left);
        left.move_forward();
        assert!(left.check_collision(bounds));

        let mut bottom = Snake::from_segments(vec![Position { x: 2, y: 3 }], Direction::Down);
        bottom.move_forward();
        assert!(bottom.check_collision(bounds));

        let mut inside = Snake::from_segments(vec![Position { x: 2, y: 2 }], Direction::Up);
        inside.move_forward();
        assert!(!inside.check_collision(bounds));
    }

    #[test]
    fn self_collision_is_detected_when_head_reenters_body() {
        // Coiled snake whose next step right lands on a mid-body cell.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 6 },
                Position { x: 6, y: 6 },
                Position { x: 7, y: 6 },
                Position { x: 7, y: 5 },
                Position { x: 6, y: 5 },
                Position { x: 5, y: 5 },
            ],
            Direction::Right,
        );

        snake.move_forward();

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert!(snake.check_collision(BOUNDS));
    }

    #[test]
    fn moving_into_the_vacated_tail_cell_is_not_a_collision() {
        // Head steps onto the cell the tail leaves in the same tick; the
        // trim happens as part of the move, so this is legal.
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 6, y: 5 },
                Position { x: 6, y: 6 },
                Position { x: 5, y: 6 },
            ],
            Direction::Up,
        );

        snake.move_forward();

        assert_eq!(snake.head(), Position { x: 5, y: 5 });
        assert!(!snake.check_collision(BOUNDS));
    }

    #[test]
    fn reset_restores_the_starting_state() {
        let mut snake = Snake::new(BOUNDS, 3);

        snake.turn(Direction::Down);
        snake.grow_next();
        snake.move_forward();
        snake.move_forward();

        snake.reset(BOUNDS, 3);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.head(), Position { x: 20, y: 15 });

        // No growth pending after reset.
        snake.move_forward();
        assert_eq!(snake.len(), 3);
    }
}
