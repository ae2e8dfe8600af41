//! Error types.
//!
//! Move rejection is an ordinary outcome, not a failure of the engine:
//! every variant of [`MoveError`] leaves the state untouched.

use super::board::Coord;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell {0} is already occupied")]
    Occupied(Coord),
}

/// Configuration loading or parsing failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
        assert_eq!(
            MoveError::OutOfBounds { row: 3, col: 0 }.to_string(),
            "(3, 0) is off the board"
        );
        let c = Coord::new(1, 2).unwrap();
        assert_eq!(MoveError::Occupied(c).to_string(), "cell (1, 2) is already occupied");
    }

    #[test]
    fn test_config_error_from_toml() {
        let err: ConfigError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
