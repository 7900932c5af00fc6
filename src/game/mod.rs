mod direction;
mod food;
mod grid;
mod snake;
use self::direction::Direction;
use self::grid::{Cell, Grid};
use self::snake::{Advance, Collision, Snake};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::util::{center_rect, get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// One game of snake: the entity state plus the running/paused/game-over
/// state machine that drives it.
///
/// While running, ticks are scheduled cooperatively: the event loop waits for
/// input with a deadline of one tick period, and advances the snake whenever
/// the deadline passes first.  Each tick completes in full before the next
/// one can be scheduled, and no tick fires while paused or after a terminal
/// collision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Cell,
    score: u32,
    state: GameState,
    globals: Globals,

    /// Deadline for the next tick; `None` whenever a tick is not scheduled
    next_tick: Option<Instant>,

    /// One-shot diagnostic shown when the score history could not be saved
    notice: Option<String>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let board = globals.config.board;
        let grid = Grid::new(board.width, board.height, board.cell);
        let snake = Snake::new(grid.center());
        let mut game = Game {
            rng,
            grid,
            snake,
            food: Cell::new(0, 0),
            score: 0,
            state: GameState::Running,
            globals,
            next_tick: None,
            notice: None,
        };
        game.replenish_food();
        game
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.globals.difficulty.tick_period());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// The per-tick transition: commit the pending direction and move the
    /// snake, growing it and replacing the food when it eats.  A terminal
    /// collision ends the game.
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        match self.snake.advance(self.grid, self.food) {
            Ok(Advance::Moved) => (),
            Ok(Advance::Ate) => {
                self.score += 1;
                self.replenish_food();
            }
            Err(collision) => self.finish(Some(collision)),
        }
    }

    fn replenish_food(&mut self) {
        match food::place(&mut self.rng, &self.snake, self.grid) {
            Ok(cell) => self.food = cell,
            // The snake has filled the board; there is nowhere left to place
            // food, so the game is over.
            Err(food::NoSpaceAvailable) => self.finish(None),
        }
    }

    /// Transition to game over and report the final score to the history
    /// store.  A failed save is non-fatal; it is surfaced once as a notice.
    fn finish(&mut self, collision: Option<Collision>) {
        self.state = GameState::Over { collision };
        self.next_tick = None;
        if self.globals.history.record(self.score) {
            if let Err(e) = self.globals.config.save_history(&self.globals.history) {
                self.notice = Some(e.to_string());
            }
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if event == Event::FocusLost {
            self.pause();
            return None;
        }
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        // Restart is accepted unconditionally, whatever the current state
        if cmd == Command::Restart {
            return Some(Screen::Game(Game::new(self.globals.clone())));
        }
        match self.state {
            GameState::Running => match cmd {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.snake.request_direction(Direction::Up),
                Command::Down => self.snake.request_direction(Direction::Down),
                Command::Left => self.snake.request_direction(Direction::Left),
                Command::Right => self.snake.request_direction(Direction::Right),
                Command::Pause => self.pause(),
                Command::Speed(difficulty) => self.set_difficulty(difficulty),
                _ => (),
            },
            GameState::Paused => match cmd {
                Command::Quit | Command::Q => return Some(Screen::Quit),
                Command::Pause | Command::Play => self.resume(),
                Command::Speed(difficulty) => self.set_difficulty(difficulty),
                Command::Menu => {
                    return Some(Screen::Start(crate::start::StartScreen::new(
                        self.globals.clone(),
                    )))
                }
                _ => (),
            },
            GameState::Over { .. } => match cmd {
                Command::Quit | Command::Q => return Some(Screen::Quit),
                Command::Play => return Some(Screen::Game(Game::new(self.globals.clone()))),
                Command::Menu => {
                    return Some(Screen::Start(crate::start::StartScreen::new(
                        self.globals.clone(),
                    )))
                }
                _ => (),
            },
        }
        None
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Stop scheduling ticks.  Entity state is untouched; pausing while
    /// already paused (or after game over) changes nothing.
    fn pause(&mut self) {
        if self.running() {
            self.state = GameState::Paused;
            self.next_tick = None;
        }
    }

    fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Running;
        }
    }

    /// Switch the tick period.  Takes effect immediately: the scheduled
    /// deadline is dropped so the next tick is scheduled at the new period.
    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.globals.difficulty = difficulty;
        self.next_tick = None;
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        if let Some(notice) = &self.notice {
            let width = u16::try_from(notice.chars().count())
                .unwrap_or(score_area.width)
                .min(score_area.width);
            let right = Rect {
                x: score_area.right().saturating_sub(width),
                width,
                ..score_area
            };
            Span::styled(notice.as_str(), consts::NOTICE_STYLE).render(right, buf);
        }

        let block_size = Size {
            width: self.grid.cols().saturating_add(2),
            height: self.grid.rows().saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            grid: self.grid,
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &cell in self.snake.cells().iter().skip(1) {
            board.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        board.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // Draw the head last so that, if the game ended in a collision, the
        // crash site is marked
        if let GameState::Over {
            collision: Some(_),
        } = self.state
        {
            board.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        match self.state {
            GameState::Running => (),
            GameState::Paused => {
                Span::from(" — PAUSED —").render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Resume ("),
                    Span::styled("Space", consts::KEY_STYLE),
                    Span::raw(") — Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
            GameState::Over { .. } => {
                Span::from(format!(
                    " — GAME OVER — Score: {} — Best: {}",
                    self.score,
                    self.globals.history.highest()
                ))
                .render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Choose One: Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Main Menu ("),
                    Span::styled("m", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

/// Draws board cells into the buffer rectangle holding the playing field
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    grid: Grid,
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Some((col, row)) = self.grid.col_row_of(cell) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(col) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if let Some(buf_cell) = self.buf.cell_mut((x, y)) {
            buf_cell.set_char(symbol);
            buf_cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,

    /// The game has ended: either a terminal collision, or (with `collision`
    /// of `None`) the snake filled the board and no food could be placed.
    Over { collision: Option<Collision> },
}
