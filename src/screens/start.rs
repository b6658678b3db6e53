use super::{art, draw_art, draw_centered, draw_high_scores};
use crate::command::Command;
use crate::console::Console;
use crate::consts;
use crate::highscores::HighScoreEntry;

/// The title screen, shown once at startup
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct StartScreen {
    scores: Vec<HighScoreEntry>,
}

impl StartScreen {
    pub(crate) fn new(scores: Vec<HighScoreEntry>) -> StartScreen {
        StartScreen { scores }
    }

    pub(crate) fn draw<C: Console>(&self, console: &mut C) {
        console.clear();
        draw_art(console, -7, art::TITLE, consts::TITLE_STYLE);
        draw_centered(console, 4, "Press Space to start", consts::KEY_HINT_STYLE);
        draw_high_scores(console, 6, &self.scores);
    }

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<StartAction> {
        match cmd {
            Command::Space => Some(StartAction::Play),
            c if c.is_quit() => Some(StartAction::Quit),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StartAction {
    Play,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ScriptedEvents, TuiConsole};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
    use rstest::rstest;

    #[rstest]
    #[case(Command::Space, Some(StartAction::Play))]
    #[case(Command::Char('q'), Some(StartAction::Quit))]
    #[case(Command::Char('Q'), Some(StartAction::Quit))]
    #[case(Command::Quit, Some(StartAction::Quit))]
    #[case(Command::Enter, None)]
    #[case(Command::Char('r'), None)]
    #[case(Command::Up, None)]
    fn test_handle_command(#[case] cmd: Command, #[case] action: Option<StartAction>) {
        let screen = StartScreen::new(Vec::new());
        assert_eq!(screen.handle_command(cmd), action);
    }

    #[test]
    fn draw() {
        let screen = StartScreen::new(vec![
            HighScoreEntry::new("Bo", 30),
            HighScoreEntry::new("Cy", 20),
        ]);
        let terminal = Terminal::new(TestBackend::new(41, 24)).unwrap();
        let mut con = TuiConsole::new(terminal, ScriptedEvents::default()).unwrap();
        screen.draw(&mut con);
        con.present().unwrap();
        let mut expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "░██████╗███╗░░██╗░█████╗░██╗░░██╗███████╗",
            "██╔════╝████╗░██║██╔══██╗██║░██╔╝██╔════╝",
            "╚█████╗░██╔██╗██║███████║█████═╝░█████╗░░",
            "░╚═══██╗██║╚████║██╔══██║██╔═██╗░██╔══╝░░",
            "██████╔╝██║░╚███║██║░░██║██║░╚██╗███████╗",
            "╚═════╝░╚═╝░░╚══╝╚═╝░░╚═╝╚═╝░░╚═╝╚══════╝",
            "",
            "",
            "",
            "",
            "",
            "          Press Space to start",
            "",
            "             Highest Scores:",
            "",
            "               1. Bo - 30",
            "               2. Cy - 20",
            "",
            "",
        ]);
        expected.set_style(Rect::new(0, 5, 41, 6), consts::TITLE_STYLE);
        expected.set_style(Rect::new(10, 16, 20, 1), consts::KEY_HINT_STYLE);
        expected.set_style(Rect::new(13, 18, 15, 1), consts::HEADING_STYLE);
        assert_eq!(*con.backend().buffer(), expected);
    }
}
