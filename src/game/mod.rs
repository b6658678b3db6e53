mod board;
mod direction;
mod snake;
pub(crate) use self::board::CollisionPolicy;
use self::board::Board;
use self::direction::Direction;
use self::snake::Snake;
use crate::command::Command;
use crate::console::{Console, Timeout};
use crate::consts;
use crate::util::centered_col;
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    layout::{Position, Size},
    style::Style,
};

/// One play session, from leaving the start screen until the snake crashes
#[derive(Clone, Debug)]
pub(crate) struct Game<R> {
    rng: R,
    board: Board,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    /// Milliseconds between ticks while running
    speed: u64,
    state: GameState,
    /// Set on unpausing; the following tick is discarded so that the key
    /// press that resumed the game can't also steer the snake.
    skip_tick: bool,
}

impl<R: Rng> Game<R> {
    /// Start a session on a grid of the given size.  The snake starts at
    /// mid-height a quarter of the way across (but never so close to the left
    /// edge that its tail would touch column 0), heading right towards the
    /// first food in the center.
    ///
    /// # Panics
    ///
    /// Panics if the grid is too narrow to hold the starting snake, which
    /// cannot happen on a grid of at least [`consts::MIN_GRID`].
    pub(crate) fn new(size: Size, policy: CollisionPolicy, rng: R) -> Game<R> {
        let board = Board::new(size, policy);
        let head_x = (size.width / 4).max(consts::INITIAL_SNAKE_LENGTH);
        let head = Position::new(head_x, size.height / 2);
        let direction = Direction::Right;
        let tailwards = direction.reverse();
        let snake = Snake::new(
            std::iter::successors(Some(head), |&p| board.step(p, tailwards))
                .take(usize::from(consts::INITIAL_SNAKE_LENGTH)),
            direction,
        );
        assert_eq!(
            snake.len(),
            usize::from(consts::INITIAL_SNAKE_LENGTH),
            "starting snake does not fit on a {}x{} grid",
            size.width,
            size.height
        );
        let food = Position::new(size.width / 2, size.height / 2);
        Game {
            rng,
            board,
            snake,
            food: Some(food),
            score: 0,
            speed: consts::INITIAL_TICK_MS,
            state: GameState::Running,
            skip_tick: false,
        }
    }

    /// Advance the session by one tick in response to `input`, the key that
    /// was pressed (if any) before the tick interval ran out
    pub(crate) fn tick(&mut self, input: Option<Command>) -> Tick {
        match self.state {
            GameState::Over => return Tick::Idle,
            GameState::Paused => {
                if input == Some(Command::Space) {
                    log::debug!("Resuming game");
                    self.state = GameState::Running;
                    self.skip_tick = true;
                    return Tick::Resumed;
                }
                return Tick::Idle;
            }
            GameState::Running => (),
        }
        if std::mem::take(&mut self.skip_tick) {
            return Tick::Idle;
        }
        match input {
            Some(Command::Space) => {
                log::debug!("Pausing game");
                self.state = GameState::Paused;
                return Tick::Paused;
            }
            Some(cmd) if cmd.is_quit() => return Tick::Ended(SessionEnd::Quit),
            Some(cmd) if cmd.is_restart() => return Tick::Ended(SessionEnd::Restart),
            Some(cmd) => {
                if let Some(d) = Direction::from_command(cmd) {
                    if self.snake.turn(d) {
                        log::debug!("Snake turned {d:?}");
                    }
                }
            }
            None => (),
        }
        self.advance()
    }

    fn advance(&mut self) -> Tick {
        let Some(head) = self.board.step(self.snake.head(), self.snake.direction()) else {
            return self.game_over();
        };
        let bitten = match self.board.policy {
            CollisionPolicy::Wrap => self.snake.contains(head),
            CollisionPolicy::Wall => self.snake.contains_ahead_of_tail(head),
        };
        if bitten {
            return self.game_over();
        }
        self.snake.push_head(head);
        if self.food == Some(head) {
            self.score += 1;
            self.speed = self
                .speed
                .saturating_sub(consts::TICK_STEP_MS)
                .max(consts::MIN_TICK_MS);
            self.place_food();
            log::debug!(
                "Food eaten; score = {}, tick interval = {} ms",
                self.score,
                self.speed
            );
            Tick::Moved { vacated: None }
        } else {
            Tick::Moved {
                vacated: self.snake.pop_tail(),
            }
        }
    }

    fn game_over(&mut self) -> Tick {
        log::info!(
            "Game over at {:?} with score {}",
            self.snake.head(),
            self.score
        );
        self.state = GameState::Over;
        Tick::Ended(SessionEnd::GameOver { score: self.score })
    }

    /// Choose a new food cell uniformly at random from the interior cells
    /// not covered by the snake.  If there are none, the board is left
    /// without food.
    fn place_food(&mut self) {
        let snake = &self.snake;
        self.food = self
            .board
            .interior()
            .filter(|&p| !snake.contains(p))
            .choose(&mut self.rng);
    }
}

impl<R> Game<R> {
    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// How long the screen controller should wait for input before the next
    /// tick
    pub(crate) fn tick_interval(&self) -> Timeout {
        if self.state == GameState::Paused {
            Timeout::Forever
        } else {
            Timeout::from_millis(self.speed)
        }
    }

    /// Draw the whole session from scratch
    pub(crate) fn draw<C: Console>(&self, console: &mut C) {
        console.clear();
        for &p in self.snake.segments() {
            console.draw_char(p, consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
        }
        self.draw_food_and_score(console);
    }

    /// Update the screen to reflect the outcome of a tick
    pub(crate) fn paint<C: Console>(&self, tick: Tick, console: &mut C) {
        match tick {
            Tick::Moved { vacated } => {
                if let Some(p) = vacated {
                    console.draw_char(p, ' ', Style::new());
                }
                console.draw_char(self.snake.head(), consts::SNAKE_SYMBOL, consts::SNAKE_STYLE);
                self.draw_food_and_score(console);
            }
            Tick::Paused => {
                let size = console.grid_size();
                let y = size.height / 2;
                let x = centered_col(size.width, PAUSE_BANNER);
                console.draw_text(Position::new(x, y), PAUSE_BANNER, Style::new());
            }
            Tick::Resumed => self.draw(console),
            Tick::Idle | Tick::Ended(_) => (),
        }
    }

    fn draw_food_and_score<C: Console>(&self, console: &mut C) {
        if let Some(food) = self.food {
            console.draw_char(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        console.draw_text(
            Position::new(2, 0),
            &format!("Score: {}", self.score),
            consts::SCORE_STYLE,
        );
    }
}

static PAUSE_BANNER: &str = "Game Paused - Press Space to Resume";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,
    Over,
}

/// What a single tick did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// Nothing changed
    Idle,
    /// The snake moved one cell.  `vacated` is the cell the tail left, or
    /// `None` if the snake ate and grew instead.
    Moved { vacated: Option<Position> },
    Paused,
    /// The game was unpaused and needs to be redrawn in full
    Resumed,
    Ended(SessionEnd),
}

/// How a session finished
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionEnd {
    Quit,
    Restart,
    GameOver { score: u32 },
}
