//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Tick interval, in milliseconds, at the start of a session
pub(crate) const INITIAL_TICK_MS: u64 = 150;

/// How much the tick interval shrinks each time the snake eats
pub(crate) const TICK_STEP_MS: u64 = 5;

/// The tick interval never drops below this many milliseconds
pub(crate) const MIN_TICK_MS: u64 = 20;

/// Number of cells in a freshly-spawned snake
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Smallest terminal (in cells) that a session can be played in
pub(crate) const MIN_GRID: Size = Size {
    width: 10,
    height: 5,
};

/// Number of entries kept in the high score table
pub(crate) const HIGH_SCORE_SLOTS: usize = 3;

/// Maximum length, in characters, of a name in the high score table
pub(crate) const MAX_NAME_LENGTH: usize = 20;

/// Name recorded when the player submits an empty name
pub(crate) const ANONYMOUS: &str = "Anonymous";

/// Default location of the high score table, relative to the working
/// directory
pub(crate) const HIGH_SCORES_FILE: &str = "highscores.txt";

/// Glyph for every segment of the snake
pub(crate) const SNAKE_SYMBOL: char = '▒';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '@';

/// Style for the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the score counter in the top row of the board
pub(crate) const SCORE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for the title art on the start screen
pub(crate) const TITLE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the trophy shown for a new high score
pub(crate) const TROPHY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for headings such as "Highest Scores:"
pub(crate) const HEADING_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for the name being typed on the end screen
pub(crate) const NAME_FIELD_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for lines telling the player which keys to press
pub(crate) const KEY_HINT_STYLE: Style = Style::new().fg(Color::Cyan);
