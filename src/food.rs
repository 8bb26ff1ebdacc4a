use rand::Rng;

use crate::config::GRID_SIZE;
use crate::snake::{Position, Snake};

/// Picks a food cell by rejection sampling: draw a uniformly random cell
/// and redraw while it lands on the snake.
///
/// Terminates as long as the snake covers fewer cells than the board has,
/// which the simulation guarantees for any reachable snake length.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Position {
    debug_assert!(
        snake.len() < (GRID_SIZE * GRID_SIZE) as usize,
        "no free cell left for food on a {GRID_SIZE}x{GRID_SIZE} board"
    );

    loop {
        let candidate = Position {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}
