//! The character-grid terminal that the game draws on and reads keys from
use crate::command::Command;
use crossterm::event::{poll, read, Event};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::Style,
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How long [`Console::poll_key()`] may wait for a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Timeout {
    After(Duration),
    Forever,
}

impl Timeout {
    pub(crate) fn from_millis(ms: u64) -> Timeout {
        Timeout::After(Duration::from_millis(ms))
    }
}

/// A fixed-size grid of character cells plus a keyboard.
///
/// Positions use `x` for the column and `y` for the row, counting from the
/// top-left corner.  Anything drawn outside the grid is silently dropped.
/// Nothing drawn becomes visible until [`Console::present()`] is called.
pub(crate) trait Console {
    /// Wait up to `timeout` for a recognized key press.  Returns `None` if
    /// the time ran out first.
    fn poll_key(&mut self, timeout: Timeout) -> io::Result<Option<Command>>;

    fn draw_char(&mut self, pos: Position, glyph: char, style: Style);

    /// Draw `text` starting at `pos`, clipped at the right edge of the grid
    fn draw_text(&mut self, pos: Position, text: &str, style: Style);

    fn clear(&mut self);

    fn grid_size(&self) -> Size;

    fn present(&mut self) -> io::Result<()>;
}

/// A source of terminal events
pub(crate) trait EventSource {
    /// Wait up to `timeout` for the next event
    fn next_event(&mut self, timeout: Timeout) -> io::Result<Option<Event>>;
}

/// Events read from the real terminal via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Timeout) -> io::Result<Option<Event>> {
        match timeout {
            Timeout::Forever => read().map(Some),
            Timeout::After(wait) => {
                if poll(wait)? {
                    read().map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// A [`Console`] that draws into an off-screen buffer and copies it to a
/// ratatui [`Terminal`] on [`Console::present()`].
///
/// The grid size is fixed to the terminal's size at construction; later
/// resizes clip the grid rather than changing it.
#[derive(Debug)]
pub(crate) struct TuiConsole<B: Backend, E> {
    terminal: Terminal<B>,
    events: E,
    canvas: Buffer,
}

impl<B: Backend, E: EventSource> TuiConsole<B, E> {
    pub(crate) fn new(terminal: Terminal<B>, events: E) -> io::Result<Self> {
        let size = terminal.size()?;
        Ok(TuiConsole {
            terminal,
            events,
            canvas: Buffer::empty(Rect::from((Position::ORIGIN, size))),
        })
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend, E: EventSource> Console for TuiConsole<B, E> {
    fn poll_key(&mut self, timeout: Timeout) -> io::Result<Option<Command>> {
        let deadline = match timeout {
            Timeout::After(wait) => Some(Instant::now() + wait),
            Timeout::Forever => None,
        };
        loop {
            let remaining = match deadline {
                Some(when) => Timeout::After(when.saturating_duration_since(Instant::now())),
                None => Timeout::Forever,
            };
            let Some(event) = self.events.next_event(remaining)? else {
                return Ok(None);
            };
            if let Some(cmd) = event
                .as_key_press_event()
                .and_then(Command::from_key_event)
            {
                return Ok(Some(cmd));
            }
            // Resizes, focus changes, key releases & unbound keys don't end
            // the wait.
            if deadline.is_some_and(|when| Instant::now() >= when) {
                return Ok(None);
            }
        }
    }

    fn draw_char(&mut self, pos: Position, glyph: char, style: Style) {
        if let Some(cell) = self.canvas.cell_mut(pos) {
            cell.set_char(glyph);
            cell.set_style(Style::reset().patch(style));
        }
    }

    fn draw_text(&mut self, pos: Position, text: &str, style: Style) {
        if self.canvas.area.contains(pos) {
            let _ = self.canvas.set_stringn(
                pos.x,
                pos.y,
                text,
                usize::from(u16::MAX),
                Style::reset().patch(style),
            );
        }
    }

    fn clear(&mut self) {
        self.canvas.reset();
    }

    fn grid_size(&self) -> Size {
        self.canvas.area.as_size()
    }

    fn present(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            for pos in canvas.area.intersection(buf.area).positions() {
                if let (Some(src), Some(dest)) = (canvas.cell(pos), buf.cell_mut(pos)) {
                    *dest = src.clone();
                }
            }
        })?;
        Ok(())
    }
}

/// An [`EventSource`] that replays a fixed script.  A `None` entry stands for
/// a poll that times out; it is skipped when waiting forever.  Once the
/// script runs out, every read fails with `UnexpectedEof`.
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScriptedEvents(std::collections::VecDeque<Option<Event>>);

#[cfg(test)]
impl ScriptedEvents {
    pub(crate) fn new<I: IntoIterator<Item = Option<Event>>>(script: I) -> Self {
        ScriptedEvents(script.into_iter().collect())
    }

    /// Build a script of plain (unmodified) key presses and timeouts
    pub(crate) fn keys<I: IntoIterator<Item = Option<crossterm::event::KeyCode>>>(
        script: I,
    ) -> Self {
        ScriptedEvents::new(
            script
                .into_iter()
                .map(|code| code.map(|c| Event::Key(c.into()))),
        )
    }

    pub(crate) fn remaining(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next_event(&mut self, timeout: Timeout) -> io::Result<Option<Event>> {
        loop {
            match self.0.pop_front() {
                Some(Some(ev)) => return Ok(Some(ev)),
                Some(None) if timeout != Timeout::Forever => return Ok(None),
                Some(None) => (),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "event script exhausted",
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn console(
        width: u16,
        height: u16,
        events: ScriptedEvents,
    ) -> TuiConsole<TestBackend, ScriptedEvents> {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        TuiConsole::new(terminal, events).unwrap()
    }

    #[test]
    fn grid_size_is_terminal_size() {
        let con = console(12, 4, ScriptedEvents::default());
        assert_eq!(con.grid_size(), Size::new(12, 4));
    }

    #[test]
    fn nothing_visible_until_present() {
        let mut con = console(6, 2, ScriptedEvents::default());
        con.draw_text(Position::new(1, 0), "Hi", Style::new());
        assert_eq!(*con.backend().buffer(), Buffer::with_lines(["      ", "      "]));
        con.present().unwrap();
        assert_eq!(*con.backend().buffer(), Buffer::with_lines([" Hi   ", "      "]));
    }

    #[test]
    fn draws_are_clipped() {
        let mut con = console(6, 2, ScriptedEvents::default());
        con.draw_text(Position::new(3, 1), "Score: 10", Style::new());
        con.draw_text(Position::new(0, 2), "off the bottom", Style::new());
        con.draw_char(Position::new(6, 0), 'x', Style::new());
        con.draw_char(Position::new(0, 0), '@', Style::new());
        con.present().unwrap();
        assert_eq!(*con.backend().buffer(), Buffer::with_lines(["@     ", "   Sco"]));
    }

    #[test]
    fn styled_glyph() {
        let mut con = console(3, 1, ScriptedEvents::default());
        con.draw_char(Position::new(1, 0), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        con.present().unwrap();
        let mut expected = Buffer::with_lines([" @ "]);
        expected.set_style(Rect::new(1, 0, 1, 1), consts::FOOD_STYLE);
        pretty_assertions::assert_eq!(*con.backend().buffer(), expected);
    }

    #[test]
    fn clear_blanks_the_grid() {
        let mut con = console(4, 1, ScriptedEvents::default());
        con.draw_text(Position::ORIGIN, "abcd", Style::new());
        con.present().unwrap();
        con.clear();
        con.present().unwrap();
        assert_eq!(*con.backend().buffer(), Buffer::with_lines(["    "]));
    }

    #[test]
    fn poll_skips_uninteresting_events() {
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
        };
        let mut con = console(
            4,
            1,
            ScriptedEvents::new([
                Some(Event::FocusLost),
                Some(Event::Resize(100, 100)),
                Some(Event::Key(release)),
                Some(Event::Key(KeyCode::Esc.into())),
                Some(Event::Key(KeyCode::Up.into())),
                None,
            ]),
        );
        assert_eq!(con.poll_key(Timeout::Forever).unwrap(), Some(Command::Up));
        assert_eq!(con.poll_key(Timeout::from_millis(150)).unwrap(), None);
    }

    #[test]
    fn forever_skips_timeouts() {
        let mut con = console(
            4,
            1,
            ScriptedEvents::keys([None, None, Some(KeyCode::Char(' '))]),
        );
        assert_eq!(con.poll_key(Timeout::Forever).unwrap(), Some(Command::Space));
        assert_eq!(con.events.remaining(), 0);
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let mut con = console(4, 1, ScriptedEvents::default());
        let e = con.poll_key(Timeout::Forever).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
    }
}
