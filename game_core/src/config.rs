use crate::Params;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a [`Config`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("winning score must be one of 3, 5 or 7 (got {0})")]
    InvalidWinningScore(u8),
    #[error("winning score is not a number: {0:?}")]
    UnparsableWinningScore(String),
}

/// Score that ends a match, restricted to the replay menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningScore(u8);

impl WinningScore {
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if Params::WIN_SCORE_OPTIONS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidWinningScore(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for WinningScore {
    fn default() -> Self {
        Self(Params::WIN_SCORE)
    }
}

impl TryFrom<u8> for WinningScore {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for WinningScore {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::UnparsableWinningScore(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for WinningScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub winning_score: WinningScore,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            winning_score: WinningScore::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_winning_score(mut self, winning_score: WinningScore) -> Self {
        self.winning_score = winning_score;
        self
    }

    /// Left edge of the player's (left) paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left edge of the AI's (right) paddle
    pub fn ai_paddle_x(&self) -> f32 {
        self.screen_width - self.paddle_margin - self.paddle_width
    }

    /// Top edge of a paddle resting at vertical center
    pub fn paddle_start_y(&self) -> f32 {
        (self.screen_height / 2.0 - self.paddle_height / 2.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.player_paddle_x(), 10.0, "Left paddle X position");
        assert_eq!(config.ai_paddle_x(), 780.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_start_y() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(), 250.0);
    }

    #[test]
    fn test_winning_score_accepts_menu_options() {
        for value in [3, 5, 7] {
            assert_eq!(WinningScore::new(value).map(WinningScore::get), Ok(value));
        }
    }

    #[test]
    fn test_winning_score_rejects_other_values() {
        assert_eq!(
            WinningScore::new(4),
            Err(ConfigError::InvalidWinningScore(4))
        );
        assert_eq!(
            WinningScore::try_from(0),
            Err(ConfigError::InvalidWinningScore(0))
        );
    }

    #[test]
    fn test_winning_score_from_str() {
        assert_eq!("7".parse::<WinningScore>().map(WinningScore::get), Ok(7));
        assert!(matches!(
            "seven".parse::<WinningScore>(),
            Err(ConfigError::UnparsableWinningScore(_))
        ));
    }

    #[test]
    fn test_default_winning_score_is_five() {
        assert_eq!(Config::new().winning_score.get(), 5);
    }
}
