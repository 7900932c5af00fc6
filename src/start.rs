use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::util::{get_display_area, Globals};
use crossterm::event::{read, Event};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
    Frame,
};
use std::io;

static TITLE: &[&str] = &[
    r" _____ ___ ___ __  __ ___ _  _   _   _  _____ ",
    r"|_   _| __| _ \  \/  / __| \| | /_\ | |/ / __|",
    r"  | | | _||   / |\/| \__ \ .` |/ _ \| ' <| _| ",
    r"  |_| |___|_|_\_|  |_|___/_|\_/_/ \_\_|\_\___|",
];

static INSTRUCTIONS: &[&str] = &[
    "Steer with ← ↓ ↑ →  (or h j k l / w a s d)",
    "Space pauses, r restarts at any time",
    "Eat the food; avoid the walls and yourself!",
];

/// The screen shown before a game starts: title, instructions, the score
/// history, and the difficulty picker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct StartScreen {
    globals: Globals,
}

impl StartScreen {
    pub(crate) fn new(globals: Globals) -> StartScreen {
        StartScreen { globals }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Play => Some(Screen::Game(Game::new(self.globals.clone()))),
            Command::Quit | Command::Q => Some(Screen::Quit),
            Command::Speed(difficulty) => {
                self.globals.difficulty = difficulty;
                None
            }
            _ => None,
        }
    }
}

impl Widget for &StartScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let row = |y: u16| Rect {
            y: display.y.saturating_add(y),
            height: 1,
            ..display
        };
        let mut y = 1;
        for &line in TITLE {
            Line::from(line).centered().render(row(y), buf);
            y += 1;
        }
        y += 1;
        for &line in INSTRUCTIONS {
            Line::from(line).centered().render(row(y), buf);
            y += 1;
        }
        y += 1;
        Line::from_iter([
            Span::raw("Difficulty: "),
            Span::styled(self.globals.difficulty.as_str(), consts::KEY_STYLE),
            Span::raw("  (1 easy / 2 normal / 3 hard)"),
        ])
        .centered()
        .render(row(y), buf);
        y += 2;
        Line::from(format!("Highest Score: {}", self.globals.history.highest()))
            .centered()
            .render(row(y), buf);
        y += 1;
        // The most recent games, numbered the way they were played
        let scores = self.globals.history.scores();
        let skipped = scores.len().saturating_sub(5);
        for (i, &score) in scores.iter().enumerate().skip(skipped) {
            Line::from(format!("Game {}: {score}", i + 1))
                .centered()
                .render(row(y), buf);
            y += 1;
        }
        y += 1;
        Line::from_iter([
            Span::raw("[Play ("),
            Span::styled("p", consts::KEY_STYLE),
            Span::raw(")]   [Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")]"),
        ])
        .centered()
        .render(row(y), buf);
        if let Some(notice) = &self.globals.notice {
            Line::styled(notice.as_str(), consts::NOTICE_STYLE)
                .centered()
                .render(row(display.height.saturating_sub(1)), buf);
        }
    }
}
