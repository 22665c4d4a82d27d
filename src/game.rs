use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, SNAKE_START_X, SNAKE_START_Y};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::score::Scoreboard;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// The session owns the snake, the food, and the scoreboard. The high score
/// lives inside the scoreboard and survives restarts for as long as this
/// session object does.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from system entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let start = start_position();
        debug_assert!(start.is_within_bounds(bounds));

        let snake = Snake::new(start, Direction::Right);
        let food = Food::spawn(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            scoreboard: Scoreboard::new(),
            status: GameStatus::Running,
            bounds,
            rng,
        }
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the tick interval the scheduler should currently run at.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.scoreboard.tick_interval()
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// A no-op unless the session is running. Collision checks run against
    /// the body as stored before this tick's shift, so moving onto the cell
    /// the tail is about to vacate ends the game.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        let next_head = self.snake.next_head();

        if !next_head.is_within_bounds(self.bounds) {
            self.enter_game_over();
            return;
        }

        if self.snake.body_blocks(next_head) {
            self.enter_game_over();
            return;
        }

        let consumed = next_head == self.food.position;
        self.snake.advance(next_head, consumed);

        if consumed {
            self.scoreboard.record_consumption();
            self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        }
    }

    /// Applies one external input event.
    ///
    /// Out-of-context events are silent no-ops: turns after game over,
    /// pause toggles after game over, restarts while still playing.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Turn(direction) => {
                if matches!(self.status, GameStatus::Running | GameStatus::Paused) {
                    self.snake.turn(direction);
                }
            }
            GameInput::TogglePause => {
                self.status = match self.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    GameStatus::GameOver => GameStatus::GameOver,
                };
            }
            GameInput::Restart => {
                if self.status == GameStatus::GameOver {
                    self.restart();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Begins a fresh run: snake back to one segment at the start cell,
    /// fresh food, score and interval reset. The high score carries over.
    pub fn restart(&mut self) {
        self.snake = Snake::new(start_position(), Direction::Right);
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        self.scoreboard.reset_for_new_run();
        self.status = GameStatus::Running;
    }

    fn enter_game_over(&mut self) {
        self.status = GameStatus::GameOver;
        self.scoreboard.record_game_over();
    }
}

fn start_position() -> Position {
    Position {
        x: SNAKE_START_X,
        y: SNAKE_START_Y,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus};

    fn grid(width: u16, height: u16) -> GridSize {
        GridSize { width, height }
    }

    #[test]
    fn fresh_session_moves_right_one_cell_per_tick() {
        let mut state = GameState::new_with_seed(grid(20, 20), 1);
        state.food = Food::new(Position { x: 19, y: 19 });

        for _ in 0..5 {
            state.tick();
        }

        assert_eq!(state.snake.head(), Position { x: 10, y: 5 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn consumption_at_length_one_grows_and_scores() {
        let mut state = GameState::new_with_seed(grid(20, 20), 2);
        state.food = Food::new(Position { x: 6, y: 5 });

        state.tick();

        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.scoreboard.score(), 1);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn wall_collision_off_left_edge_sets_game_over() {
        let mut state = GameState::new_with_seed(grid(20, 20), 3);
        state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Left);
        state.food = Food::new(Position { x: 2, y: 1 });

        // One tick to eat nothing, reach x = 0; the next walks off the edge.
        state.tick();
        assert_eq!(state.status, GameStatus::Running);

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.head(), Position { x: 0, y: 1 });
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut state = GameState::new_with_seed(grid(8, 8), 4);
        // Head at (2,2) moving left into (1,2), which is body.
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Left,
        );
        state.food = Food::new(Position { x: 7, y: 7 });

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn moving_onto_vacating_tail_cell_ends_the_game() {
        // The collision check runs against the pre-shift body, so the cell
        // the tail would vacate this tick still counts as occupied.
        let mut state = GameState::new_with_seed(grid(8, 8), 5);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Down,
        );
        state.food = Food::new(Position { x: 7, y: 7 });

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn tick_is_a_no_op_while_paused_or_over() {
        let mut state = GameState::new_with_seed(grid(20, 20), 6);
        state.apply_input(GameInput::TogglePause);

        let head_before = state.snake.head();
        let food_before = state.food;
        state.tick();

        assert_eq!(state.snake.head(), head_before);
        assert_eq!(state.food, food_before);
        assert_eq!(state.scoreboard.score(), 0);

        state.status = GameStatus::GameOver;
        state.tick();
        assert_eq!(state.snake.head(), head_before);
    }

    #[test]
    fn reverse_turn_is_ignored() {
        let mut state = GameState::new_with_seed(grid(20, 20), 7);

        state.apply_input(GameInput::Turn(Direction::Left));

        assert_eq!(state.snake.heading(), Direction::Right);
    }

    #[test]
    fn heading_may_change_while_paused() {
        let mut state = GameState::new_with_seed(grid(20, 20), 8);
        state.apply_input(GameInput::TogglePause);

        state.apply_input(GameInput::Turn(Direction::Down));

        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.snake.heading(), Direction::Down);
    }

    #[test]
    fn turns_are_rejected_after_game_over() {
        let mut state = GameState::new_with_seed(grid(20, 20), 9);
        state.status = GameStatus::GameOver;

        state.apply_input(GameInput::Turn(Direction::Down));

        assert_eq!(state.snake.heading(), Direction::Right);
    }

    #[test]
    fn pause_toggle_never_leaves_game_over() {
        let mut state = GameState::new_with_seed(grid(20, 20), 10);
        state.status = GameStatus::GameOver;

        state.apply_input(GameInput::TogglePause);

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn restart_is_ignored_while_running() {
        let mut state = GameState::new_with_seed(grid(20, 20), 11);
        state.food = Food::new(Position { x: 6, y: 5 });
        state.tick();
        assert_eq!(state.scoreboard.score(), 1);

        state.apply_input(GameInput::Restart);

        assert_eq!(state.scoreboard.score(), 1);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn restart_after_game_over_keeps_high_score() {
        let mut state = GameState::new_with_seed(grid(20, 20), 12);
        state.food = Food::new(Position { x: 6, y: 5 });
        state.tick();
        assert_eq!(state.scoreboard.score(), 1);

        state.snake = Snake::new(Position { x: 0, y: 0 }, Direction::Left);
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        state.apply_input(GameInput::Restart);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.scoreboard.score(), 0);
        assert_eq!(state.scoreboard.high_score(), 1);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.heading(), Direction::Right);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn snake_cells_stay_distinct_through_a_long_run() {
        let mut state = GameState::new_with_seed(grid(10, 10), 13);

        // Drive the snake in a rectangle for a while, eating whatever food
        // happens to land on the path.
        let turns = [
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
        ];
        let mut turn_index = 0;

        for tick in 0..200 {
            if state.status != GameStatus::Running {
                break;
            }
            if tick % 4 == 3 {
                state.apply_input(GameInput::Turn(turns[turn_index % turns.len()]));
                turn_index += 1;
            }
            state.tick();

            if state.status == GameStatus::Running {
                let unique: HashSet<_> = state.snake.segments().copied().collect();
                assert_eq!(unique.len(), state.snake.len());
                assert!(!state.snake.occupies(state.food.position));
            }
        }
    }

    #[test]
    fn high_score_is_monotonic_across_restarts() {
        let mut state = GameState::new_with_seed(grid(20, 20), 14);
        let mut best_seen = 0;

        for _ in 0..3 {
            state.food = Food::new(Position {
                x: state.snake.head().x + 1,
                y: state.snake.head().y,
            });
            state.tick();

            assert!(state.scoreboard.high_score() >= best_seen);
            best_seen = state.scoreboard.high_score();

            state.snake = Snake::new(Position { x: 0, y: 0 }, Direction::Left);
            state.tick();
            assert_eq!(state.status, GameStatus::GameOver);
            assert!(state.scoreboard.high_score() >= best_seen);

            state.apply_input(GameInput::Restart);
        }
    }
}
