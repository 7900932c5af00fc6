use crate::config::Config;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::history::ScoreHistory;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// State shared by & passed between the screens of the application
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) config: Config,
    pub(crate) history: ScoreHistory,
    pub(crate) difficulty: Difficulty,

    /// A one-shot diagnostic message (e.g. the score history could not be
    /// read at startup), shown on the start screen
    pub(crate) notice: Option<String>,
}

impl Globals {
    pub(crate) fn new(config: Config, history: ScoreHistory, notice: Option<String>) -> Globals {
        let difficulty = config.difficulty;
        Globals {
            config,
            history,
            difficulty,
            notice,
        }
    }
}

/// Return the default filepath for the score history
pub(crate) fn history_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("termsnake").join("history.json"))
}

/// Center a `size`-sized rectangle inside `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([size.height]).flex(Flex::Center).areas(area);
    area
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(10, 4), Rect::new(35, 10, 10, 4))]
    #[case(Rect::new(10, 5, 20, 10), Size::new(20, 10), Rect::new(10, 5, 20, 10))]
    #[case(Rect::new(0, 0, 10, 4), Size::new(20, 10), Rect::new(0, 0, 10, 4))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] expected: Rect) {
        assert_eq!(center_rect(area, size), expected);
    }

    #[test]
    fn display_area_centers_in_large_terminal() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(get_display_area(area), Rect::new(20, 8, 80, 24));
    }

    #[test]
    fn display_area_clamps_to_small_terminal() {
        let area = Rect::new(0, 0, 50, 16);
        assert_eq!(get_display_area(area), Rect::new(0, 0, 50, 16));
    }
}
