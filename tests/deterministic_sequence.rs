use glitch_snake::game::{GameState, GameStatus};
use glitch_snake::input::{Direction, GameInput};
use glitch_snake::snake::{Position, Snake};

#[test]
fn stepwise_eating_pausing_and_wall_collision() {
    let mut state = GameState::new_with_seed(42);

    // The first arrow key starts the session.
    state.apply_input(GameInput::Direction(Direction::Right));
    assert_eq!(state.status, GameStatus::Running);

    state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
    state.food = Position { x: 2, y: 1 };

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 10);
    assert_eq!(state.high_score, 10);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    assert!(!state.snake.occupies(state.food));

    // Park the respawned food away from the scripted path.
    state.food = Position { x: 9, y: 9 };

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    // Space halts the simulation; ticks are inert until resumed.
    state.apply_input(GameInput::Pause);
    assert_eq!(state.status, GameStatus::Paused);
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    state.apply_input(GameInput::Pause);
    assert_eq!(state.status, GameStatus::Running);

    // The next step leaves the board; the body stays where it was.
    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(state.snake.len(), 2);

    // Space reboots the session with the high score kept.
    state.apply_input(GameInput::Pause);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 10);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
}
