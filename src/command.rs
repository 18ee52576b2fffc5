use crate::game::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    P,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::P),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }

    /// The game intent this command stands for, if any.  Quitting is handled
    /// by the application rather than the game.
    pub(crate) fn intent(self) -> Option<Intent> {
        match self {
            Command::Up => Some(Intent::TurnUp),
            Command::Down => Some(Intent::TurnDown),
            Command::Left => Some(Intent::TurnLeft),
            Command::Right => Some(Intent::TurnRight),
            Command::P | Command::Esc => Some(Intent::TogglePause),
            Command::Enter | Command::Space => Some(Intent::Confirm),
            Command::Quit | Command::Q => None,
        }
    }

    pub(crate) fn quits(self) -> bool {
        matches!(self, Command::Quit | Command::Q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up.into(), Some(Command::Up))]
    #[case(KeyCode::Char('w').into(), Some(Command::Up))]
    #[case(KeyCode::Char('k').into(), Some(Command::Up))]
    #[case(KeyCode::Char('s').into(), Some(Command::Down))]
    #[case(KeyCode::Char('a').into(), Some(Command::Left))]
    #[case(KeyCode::Char('l').into(), Some(Command::Right))]
    #[case(KeyCode::Enter.into(), Some(Command::Enter))]
    #[case(KeyCode::Char(' ').into(), Some(Command::Space))]
    #[case(KeyCode::Esc.into(), Some(Command::Esc))]
    #[case(KeyCode::Char('p').into(), Some(Command::P))]
    #[case(KeyCode::Char('q').into(), Some(Command::Q))]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT), None)]
    #[case(KeyCode::Char('x').into(), None)]
    #[case(KeyCode::Tab.into(), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }

    #[rstest]
    #[case(Command::Up, Some(Intent::TurnUp))]
    #[case(Command::Down, Some(Intent::TurnDown))]
    #[case(Command::Left, Some(Intent::TurnLeft))]
    #[case(Command::Right, Some(Intent::TurnRight))]
    #[case(Command::P, Some(Intent::TogglePause))]
    #[case(Command::Esc, Some(Intent::TogglePause))]
    #[case(Command::Enter, Some(Intent::Confirm))]
    #[case(Command::Space, Some(Intent::Confirm))]
    #[case(Command::Q, None)]
    #[case(Command::Quit, None)]
    fn test_intent(#[case] cmd: Command, #[case] intent: Option<Intent>) {
        assert_eq!(cmd.intent(), intent);
        assert_eq!(cmd.quits(), intent.is_none());
    }
}
