use crate::difficulty::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// Toggle pause (Space)
    Pause,
    /// Start or resume playing (`p` or Enter)
    Play,
    /// Start a fresh game, accepted in any state (`r`)
    Restart,
    /// Return to the start screen (`m`)
    Menu,
    /// Switch difficulty (`1`/`2`/`3`)
    Speed(Difficulty),
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
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Pause),
            (_, KeyCode::Enter) => Some(Command::Play),
            (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::Play),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('m')) => Some(Command::Menu),
            (KeyModifiers::NONE, KeyCode::Char('1')) => Some(Command::Speed(Difficulty::Easy)),
            (KeyModifiers::NONE, KeyCode::Char('2')) => Some(Command::Speed(Difficulty::Normal)),
            (KeyModifiers::NONE, KeyCode::Char('3')) => Some(Command::Speed(Difficulty::Hard)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}
