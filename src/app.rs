use crate::console::{Console, Timeout};
use crate::consts;
use crate::game::{CollisionPolicy, Game, SessionEnd, Tick};
use crate::highscores::{HighScoreStore, LoadError, SaveError};
use crate::screens::{EndAction, EndScreen, StartAction, StartScreen};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io;
use thiserror::Error;

/// Moves the player between the start screen, the game, and the end screen
#[derive(Debug)]
pub(crate) struct App<C, R> {
    console: C,
    store: HighScoreStore,
    policy: CollisionPolicy,
    /// Seeds the random number generator of each new game
    rng: R,
    screen: Screen,
}

impl<C: Console, R: Rng> App<C, R> {
    pub(crate) fn new(console: C, store: HighScoreStore, policy: CollisionPolicy, rng: R) -> Self {
        App {
            console,
            store,
            policy,
            rng,
            screen: Screen::Quit,
        }
    }

    /// Run until the player quits
    pub(crate) fn run(&mut self) -> Result<(), AppError> {
        let size = self.console.grid_size();
        if size.width < consts::MIN_GRID.width || size.height < consts::MIN_GRID.height {
            return Err(AppError::TooSmall {
                width: size.width,
                height: size.height,
            });
        }
        self.enter(Next::Start)?;
        while !self.quitting() {
            self.process_input()?;
        }
        log::info!("Quitting");
        Ok(())
    }

    fn process_input(&mut self) -> Result<(), AppError> {
        let next = match self.screen {
            Screen::Start(ref start) => self
                .console
                .poll_key(Timeout::Forever)?
                .and_then(|cmd| start.handle_command(cmd))
                .map(|action| match action {
                    StartAction::Play => Next::Play,
                    StartAction::Quit => Next::Quit,
                }),
            Screen::Game(ref mut game) => {
                let input = self.console.poll_key(game.tick_interval())?;
                let tick = game.tick(input);
                game.paint(tick, &mut self.console);
                self.console.present()?;
                match tick {
                    Tick::Ended(SessionEnd::Quit) => {
                        log::info!("Quit mid-game with score {}", game.score());
                        Some(Next::Quit)
                    }
                    Tick::Ended(SessionEnd::Restart) => {
                        log::info!("Restarted mid-game with score {}", game.score());
                        Some(Next::Play)
                    }
                    Tick::Ended(SessionEnd::GameOver { score }) => Some(Next::End(score)),
                    _ => None,
                }
            }
            Screen::End(ref mut end) => {
                let Some(cmd) = self.console.poll_key(Timeout::Forever)? else {
                    return Ok(());
                };
                match end.handle_command(cmd) {
                    Some(EndAction::Replay) => Some(Next::Play),
                    Some(EndAction::Quit) => Some(Next::Quit),
                    submit_or_edit => {
                        if let Some(EndAction::Submit(name)) = submit_or_edit {
                            let scores = self.store.add(&name, end.score())?;
                            end.record_saved(scores);
                        }
                        end.draw(&mut self.console);
                        self.console.present()?;
                        None
                    }
                }
            }
            Screen::Quit => None,
        };
        if let Some(next) = next {
            self.enter(next)?;
        }
        Ok(())
    }

    /// Switch to the screen `next` and draw it.  Quitting leaves the last
    /// screen in place.
    fn enter(&mut self, next: Next) -> Result<(), AppError> {
        if next == Next::Quit {
            self.screen = Screen::Quit;
            return Ok(());
        }
        self.console.clear();
        match next {
            Next::Start => {
                let start = StartScreen::new(self.store.load()?);
                start.draw(&mut self.console);
                self.screen = Screen::Start(start);
            }
            Next::Play => {
                let size = self.console.grid_size();
                log::info!(
                    "Starting game on {}x{} grid, collision policy {}",
                    size.width,
                    size.height,
                    self.policy.as_str()
                );
                let game = Game::new(size, self.policy, StdRng::from_rng(&mut self.rng));
                game.draw(&mut self.console);
                self.screen = Screen::Game(game);
            }
            Next::End(score) => {
                let is_high_score = self.store.is_high_score(score)?;
                let end = EndScreen::new(score, is_high_score, self.store.load()?);
                end.draw(&mut self.console);
                self.screen = Screen::End(end);
            }
            Next::Quit => (),
        }
        self.console.present()?;
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }

    #[cfg(test)]
    fn console(&self) -> &C {
        &self.console
    }
}

#[derive(Clone, Debug)]
enum Screen {
    Start(StartScreen),
    Game(Game<StdRng>),
    End(EndScreen),
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Next {
    Start,
    Play,
    End(u32),
    Quit,
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error(
        "terminal is only {width}x{height}; at least {}x{} is needed",
        consts::MIN_GRID.width,
        consts::MIN_GRID.height
    )]
    TooSmall { width: u16, height: u16 },
}
