use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Simulation ticks per second; one tick moves the snake one cell
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            ticks_per_second: 10,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    /// Time between two ticks at the configured rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }

    /// Reject configurations the game cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if i32::try_from(self.grid_width).is_err() || i32::try_from(self.grid_height).is_err() {
            return Err(ConfigError::DimensionTooLarge {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        // The snake fills a single-cell board, leaving nowhere for the apple
        if self.grid_width == 1 && self.grid_height == 1 {
            return Err(ConfigError::BoardTooSmall);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

/// Error type for invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board width or height is zero
    ZeroDimension { width: usize, height: usize },
    /// Board width or height does not fit a grid coordinate
    DimensionTooLarge { width: usize, height: usize },
    /// Board has fewer than two cells
    BoardTooSmall,
    /// Tick rate is zero
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension { width, height } => {
                write!(f, "Board dimensions must be positive, got {}x{}", width, height)
            }
            ConfigError::DimensionTooLarge { width, height } => {
                write!(f, "Board dimensions {}x{} are too large", width, height)
            }
            ConfigError::BoardTooSmall => write!(f, "Board needs at least two cells"),
            ConfigError::ZeroTickRate => write!(f, "Ticks per second must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.ticks_per_second, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12).with_ticks_per_second(20);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            GameConfig::new(0, 10).validate(),
            Err(ConfigError::ZeroDimension {
                width: 0,
                height: 10
            })
        );
        assert!(GameConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let config = GameConfig::new(usize::MAX, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn test_single_cell_board_rejected() {
        assert_eq!(
            GameConfig::new(1, 1).validate(),
            Err(ConfigError::BoardTooSmall)
        );
        assert!(GameConfig::new(2, 1).validate().is_ok());
        assert!(GameConfig::new(1, 2).validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = GameConfig::small().with_ticks_per_second(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(8, 6).with_ticks_per_second(15);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ZeroDimension {
            width: 0,
            height: 5,
        };
        assert_eq!(err.to_string(), "Board dimensions must be positive, got 0x5");
    }
}
