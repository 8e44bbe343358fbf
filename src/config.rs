//! Engine and game configuration

use crate::board::MAX_DEPTH;
use crate::error::{Error, Result};
use crate::players::PlayerKind;

/// Search settings, validated at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_depth: u8,
}

impl EngineConfig {
    /// Depth used when nothing else is configured
    pub const DEFAULT_DEPTH: u8 = 5;

    /// Create a configuration searching `max_depth` plies (1-81).
    ///
    /// # Example
    ///
    /// ```
    /// use uttt::config::EngineConfig;
    ///
    /// assert!(EngineConfig::new(4).is_ok());
    /// assert!(EngineConfig::new(0).is_err());
    /// ```
    pub fn new(max_depth: u8) -> Result<Self> {
        if max_depth == 0 || usize::from(max_depth) > MAX_DEPTH {
            return Err(Error::InvalidDepth {
                depth: usize::from(max_depth),
                max: MAX_DEPTH,
            });
        }
        Ok(Self { max_depth })
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_DEPTH,
        }
    }
}

/// Who plays each side and how deep the engine searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub player_o: PlayerKind,
    pub player_x: PlayerKind,
    pub engine: EngineConfig,
}

impl GameConfig {
    /// Parse `[player_o] [player_x] [depth]` from command-line arguments.
    ///
    /// Missing values fall back to [`GameConfig::default`]. The returned
    /// flags tell which sides were given, so the caller can ask for the rest.
    pub fn from_args<I>(args: I) -> Result<(Self, [bool; 2])>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Self::default();
        let mut given = [false; 2];
        let mut args = args.into_iter();

        if let Some(arg) = args.next() {
            config.player_o = arg.as_ref().parse()?;
            given[0] = true;
        }
        if let Some(arg) = args.next() {
            config.player_x = arg.as_ref().parse()?;
            given[1] = true;
        }
        if let Some(arg) = args.next() {
            let raw = arg.as_ref();
            let depth = raw.parse::<u8>().map_err(|e| Error::ParseInput {
                input: raw.to_string(),
                reason: e.to_string(),
            })?;
            config.engine = EngineConfig::new(depth)?;
        }
        Ok((config, given))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_o: PlayerKind::Human,
            player_x: PlayerKind::Minimax,
            engine: EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_bounds() {
        assert_eq!(EngineConfig::default().max_depth(), 5);
        assert_eq!(EngineConfig::new(81).unwrap().max_depth(), 81);
        assert_eq!(
            EngineConfig::new(0),
            Err(Error::InvalidDepth { depth: 0, max: 81 })
        );
        assert!(EngineConfig::new(200).is_err());
    }

    #[test]
    fn test_from_args_full() {
        let (config, given) = GameConfig::from_args(["random", "2", "3"]).unwrap();
        assert_eq!(config.player_o, PlayerKind::Random);
        assert_eq!(config.player_x, PlayerKind::Minimax);
        assert_eq!(config.engine.max_depth(), 3);
        assert_eq!(given, [true, true]);
    }

    #[test]
    fn test_from_args_empty() {
        let (config, given) = GameConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(given, [false, false]);
    }

    #[test]
    fn test_from_args_rejects_bad_depth() {
        assert!(matches!(
            GameConfig::from_args(["human", "human", "deep"]),
            Err(Error::ParseInput { .. })
        ));
        assert!(matches!(
            GameConfig::from_args(["human", "human", "0"]),
            Err(Error::InvalidDepth { .. })
        ));
    }
}
