use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Game speed setting.  Each difficulty maps to a fixed tick period; a
/// smaller period means a faster snake.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Time between movements of the snake at this difficulty
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(180),
            Difficulty::Normal => Duration::from_millis(120),
            Difficulty::Hard => Duration::from_millis(70),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Difficulty::Easy, 180)]
    #[case(Difficulty::Normal, 120)]
    #[case(Difficulty::Hard, 70)]
    fn tick_periods(#[case] difficulty: Difficulty, #[case] millis: u64) {
        assert_eq!(difficulty.tick_period(), Duration::from_millis(millis));
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn fmt_pads() {
        assert_eq!(format!("{:8}", Difficulty::Hard), "Hard    ");
    }
}
