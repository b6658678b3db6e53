//! The screens shown before and after a game
mod art;
mod end;
mod start;
pub(crate) use self::end::{EndAction, EndScreen};
pub(crate) use self::start::{StartAction, StartScreen};
use crate::console::Console;
use crate::consts;
use crate::highscores::HighScoreEntry;
use crate::util::{centered_col, text_width};
use ratatui::{
    layout::{Position, Size},
    style::Style,
};

/// Return the row `offset` rows below (or, if negative, above) the middle
/// row of the grid, or `None` if that is above the top
fn row(size: Size, offset: i16) -> Option<u16> {
    (size.height / 2).checked_add_signed(offset)
}

fn draw_centered<C: Console>(console: &mut C, offset: i16, text: &str, style: Style) {
    let size = console.grid_size();
    if let Some(y) = row(size, offset) {
        let x = centered_col(size.width, text);
        console.draw_text(Position::new(x, y), text, style);
    }
}

/// Draw a block of lines starting at row `offset`, with the block as a whole
/// centered horizontally and each line left-aligned within it
fn draw_art<C: Console>(console: &mut C, offset: i16, lines: &[&str], style: Style) {
    let size = console.grid_size();
    let art_width = lines.iter().map(|ln| text_width(ln)).max().unwrap_or(0);
    let x = size.width.saturating_sub(art_width) / 2;
    for (ln, dy) in lines.iter().zip(offset..) {
        if let Some(y) = row(size, dy) {
            console.draw_text(Position::new(x, y), ln, style);
        }
    }
}

/// Draw the "Highest Scores:" heading at row `offset` and the table two rows
/// below it
fn draw_high_scores<C: Console>(console: &mut C, offset: i16, scores: &[HighScoreEntry]) {
    draw_centered(console, offset, "Highest Scores:", consts::HEADING_STYLE);
    for ((i, entry), dy) in scores
        .iter()
        .take(consts::HIGH_SCORE_SLOTS)
        .enumerate()
        .zip(offset.saturating_add(2)..)
    {
        let text = format!("{}. {} - {}", i + 1, entry.name, entry.score);
        draw_centered(console, dy, &text, Style::new());
    }
}
