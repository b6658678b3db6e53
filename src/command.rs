use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press that means something to one of the screens
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Ctrl-C; leaves the program from anywhere but a paused game
    Quit,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Backspace,
    Char(char),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (_, KeyCode::Backspace) => Some(Command::Backspace),
            (m, KeyCode::Char(c)) if normal.contains(m) => Some(Command::Char(c)),
            _ => None,
        }
    }

    /// Is this `q`, `Q`, or Ctrl-C?
    pub(crate) fn is_quit(self) -> bool {
        matches!(self, Command::Quit | Command::Char('q' | 'Q'))
    }

    pub(crate) fn is_restart(self) -> bool {
        matches!(self, Command::Char('r' | 'R'))
    }
}
