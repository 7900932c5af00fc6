use crate::game::Game;
use crate::start::StartScreen;
use crate::util::Globals;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    state: Screen,
}

impl App {
    pub(crate) fn new(globals: Globals) -> App {
        let state = Screen::Start(StartScreen::new(globals));
        App { state }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        match self.state {
            Screen::Start(ref screen) => {
                terminal.draw(|frame| screen.draw(frame))?;
            }
            Screen::Game(ref game) => {
                terminal.draw(|frame| game.draw(frame))?;
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        match self.state {
            Screen::Start(ref mut screen) => {
                if let Some(state) = screen.process_input()? {
                    self.state = state;
                }
            }
            Screen::Game(ref mut game) => {
                if let Some(state) = game.process_input()? {
                    self.state = state;
                }
            }
            Screen::Quit => (),
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.state, Screen::Quit)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Start(StartScreen),
    Game(Game),
    Quit,
}
