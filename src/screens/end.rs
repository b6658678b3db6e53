use super::{art, draw_art, draw_centered, draw_high_scores, row};
use crate::command::Command;
use crate::console::Console;
use crate::consts;
use crate::highscores::HighScoreEntry;
use ratatui::{layout::Position, style::Style};
use unicode_segmentation::UnicodeSegmentation;

/// The "Game Over" screen.  If the score made the table, the player is first
/// asked for a name to record it under.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EndScreen {
    score: u32,
    phase: Phase,
    scores: Vec<HighScoreEntry>,
}

impl EndScreen {
    pub(crate) fn new(score: u32, is_high_score: bool, scores: Vec<HighScoreEntry>) -> EndScreen {
        let phase = if is_high_score {
            Phase::EnteringName(String::new())
        } else {
            Phase::NotHighScore
        };
        EndScreen {
            score,
            phase,
            scores,
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<EndAction> {
        match self.phase {
            Phase::EnteringName(ref mut name) => match cmd {
                Command::Quit => return Some(EndAction::Quit),
                Command::Enter => return Some(EndAction::Submit(name.clone())),
                Command::Backspace => {
                    if let Some((i, _)) = name.grapheme_indices(true).next_back() {
                        name.truncate(i);
                    }
                }
                Command::Space => push_name_char(name, ' '),
                Command::Char(c) => push_name_char(name, c),
                _ => (),
            },
            Phase::Saved(_) | Phase::NotHighScore => {
                if cmd.is_quit() {
                    return Some(EndAction::Quit);
                } else if cmd.is_restart() {
                    return Some(EndAction::Replay);
                }
            }
        }
        None
    }

    /// Note that the name has been stored and `scores` is the resulting
    /// table
    pub(crate) fn record_saved(&mut self, scores: Vec<HighScoreEntry>) {
        if let Phase::EnteringName(ref mut name) = self.phase {
            self.phase = Phase::Saved(std::mem::take(name));
        }
        self.scores = scores;
    }

    pub(crate) fn draw<C: Console>(&self, console: &mut C) {
        console.clear();
        draw_centered(console, -1, "Game Over", consts::HEADING_STYLE);
        draw_centered(
            console,
            0,
            &format!("Your Score: {}", self.score),
            Style::new(),
        );
        let name = match self.phase {
            Phase::EnteringName(ref name) | Phase::Saved(ref name) => Some(name),
            Phase::NotHighScore => None,
        };
        if let Some(name) = name {
            draw_art(console, -11, art::TROPHY, consts::TROPHY_STYLE);
            draw_centered(console, 1, "New Highscore! Enter your name:", Style::new());
            let size = console.grid_size();
            if let Some(y) = row(size, 2) {
                let field_width = u16::try_from(consts::MAX_NAME_LENGTH).unwrap_or(u16::MAX);
                let x = size.width.saturating_sub(field_width) / 2;
                console.draw_text(
                    Position::new(x, y),
                    &format!("{name:<width$}", width = consts::MAX_NAME_LENGTH),
                    consts::NAME_FIELD_STYLE,
                );
            }
        }
        if matches!(self.phase, Phase::Saved(_)) {
            draw_centered(console, 3, "Congratulations!", Style::new());
        }
        if !matches!(self.phase, Phase::EnteringName(_)) {
            draw_centered(
                console,
                5,
                "Press R to replay or Q to quit",
                consts::KEY_HINT_STYLE,
            );
            draw_high_scores(console, 7, &self.scores);
        }
    }
}

fn push_name_char(name: &mut String, c: char) {
    if !c.is_control() && name.chars().count() < consts::MAX_NAME_LENGTH {
        name.push(c);
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Phase {
    /// Waiting for the player to type a name and press Enter
    EnteringName(String),
    /// The score was recorded under the given name
    Saved(String),
    NotHighScore,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum EndAction {
    /// Record the score under this name
    Submit(String),
    Replay,
    Quit,
}
