use crate::{RulesError, MAX_LEVEL, MIN_LEVEL};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Longest whole-game limit, in seconds, whose milliseconds fit an `i64`.
pub const MAX_TIME_LIMIT: u64 = (i64::MAX / 1000) as u64;

/// Per-game settings. Every recognised option has a default and unknown keys
/// are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GameOptions {
    pub start_level: u8,
    pub allow_spectators: bool,
    /// Advisory only; nothing in the engine restarts a finished game.
    pub auto_restart: bool,
    /// Advisory cap on a team's points in one round.
    pub max_score: i16,
    /// Whole-game limit in seconds, 0 for none.
    pub time_limit: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            start_level: MIN_LEVEL,
            allow_spectators: true,
            auto_restart: false,
            max_score: 200,
            time_limit: 0,
        }
    }
}

impl GameOptions {
    pub fn validate(&self) -> Result<(), RulesError> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&self.start_level) {
            return Err(RulesError::InvalidOptions(format!(
                "startLevel must be between {} and {}, got {}",
                MIN_LEVEL, MAX_LEVEL, self.start_level
            )));
        }
        if self.max_score < 0 {
            return Err(RulesError::InvalidOptions(format!(
                "maxScore must not be negative, got {}",
                self.max_score
            )));
        }
        if self.time_limit > MAX_TIME_LIMIT {
            return Err(RulesError::InvalidOptions(format!(
                "timeLimit must be at most {} seconds, got {}",
                MAX_TIME_LIMIT, self.time_limit
            )));
        }
        Ok(())
    }

    /// The limit in milliseconds. Zero, and limits too large to represent,
    /// mean no limit.
    pub fn time_limit_millis(&self) -> Option<i64> {
        if self.time_limit == 0 {
            return None;
        }
        i64::try_from(self.time_limit)
            .ok()
            .and_then(|seconds| seconds.checked_mul(1000))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options: GameOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, GameOptions::default());
        assert_eq!(options.start_level, 2);
        assert!(options.allow_spectators);
        assert!(!options.auto_restart);
        assert_eq!(options.max_score, 200);
        assert_eq!(options.time_limit_millis(), None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_camel_case() {
        let options: GameOptions =
            serde_json::from_str(r#"{"startLevel": 10, "allowSpectators": false, "timeLimit": 90}"#)
                .unwrap();
        assert_eq!(options.start_level, 10);
        assert!(!options.allow_spectators);
        assert_eq!(options.time_limit_millis(), Some(90_000));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(serde_json::from_str::<GameOptions>(r#"{"start_level": 3}"#).is_err());
        assert!(serde_json::from_str::<GameOptions>(r#"{"maxPlayers": 6}"#).is_err());
    }

    #[test]
    fn test_validate() {
        for &level in &[0, 1, 15, 200] {
            let options = GameOptions {
                start_level: level,
                ..GameOptions::default()
            };
            assert!(matches!(
                options.validate(),
                Err(RulesError::InvalidOptions(_))
            ));
        }
        let options = GameOptions {
            start_level: 14,
            ..GameOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_huge_time_limit() {
        let options: GameOptions =
            serde_json::from_str(r#"{"timeLimit": 18446744073709551615}"#).unwrap();
        assert_eq!(options.time_limit_millis(), None);
        assert!(matches!(
            options.validate(),
            Err(RulesError::InvalidOptions(_))
        ));
        let options = GameOptions {
            time_limit: 10_000_000_000_000_000,
            ..GameOptions::default()
        };
        assert_eq!(options.time_limit_millis(), None);
        assert!(options.validate().is_err());
        let options = GameOptions {
            time_limit: MAX_TIME_LIMIT,
            ..GameOptions::default()
        };
        assert!(options.validate().is_ok());
        assert_eq!(options.time_limit_millis(), Some(MAX_TIME_LIMIT as i64 * 1000));
    }
}
