use crate::{Cards, GameId, GamePhase, PlayerId, Shape, Suit};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0} is not a recognised card")]
    UnknownCard(String),
    #[error("{0} is not a recognised rank")]
    UnknownRank(String),
    #[error("{0} is not a recognised suit")]
    UnknownSuit(String),
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("{0} has already bid this round")]
    AlreadyBid(PlayerId),
    #[error("a {0:?} bid cannot be made with {1}")]
    BidSuitMismatch(Suit, Cards),
    #[error("the game is already paused")]
    AlreadyPaused,
    #[error("{0} is already a player in this room")]
    AlreadySeated(PlayerId),
    #[error("a play must contain at least one card")]
    EmptyPlay,
    #[error("cannot {0}, current phase is {1:?}")]
    IllegalAction(&'static str, GamePhase),
    #[error("invalid game options: {0}")]
    InvalidOptions(String),
    #[error("a bid that is not a skip must name a trump suit")]
    MissingBidSuit,
    #[error("games need exactly 4 distinct players, got {0}")]
    WrongPlayerCount(usize),
    #[error("the game is not paused")]
    NotPaused,
    #[error("rooms need 4 players to start a game, {0} are seated")]
    NotEnoughPlayers(usize),
    #[error("your hand does not contain {0}")]
    NotYourCards(Cards),
    #[error("player {0} plays next")]
    NotYourTurn(PlayerId),
    #[error("unexpected parse error")]
    Parse {
        #[from]
        source: ParseError,
    },
    #[error("the trick was led with {led}, {played} cards do not match it")]
    PatternMismatch { led: Lead, played: usize },
    #[error("{0} is not a player in this game")]
    PlayerNotFound(PlayerId),
    #[error("room {0} already has 4 players")]
    RoomFull(GameId),
    #[error("{0} is not a known room")]
    RoomNotFound(GameId),
    #[error("spectating is disabled for this game")]
    SpectatingDisabled,
}

/// Shape and card count of a trick's opening play, for error messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Lead {
    pub shape: Option<Shape>,
    pub len: usize,
}

impl std::fmt::Display for Lead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shape {
            Some(shape) => write!(f, "a {} of {} cards", shape, self.len),
            None => write!(f, "{} unmatched cards", self.len),
        }
    }
}

/// The broad categories callers branch on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AlreadyPaused,
    IllegalPlay,
    InvalidBid,
    InvalidConfig,
    InvalidPhase,
    NotPaused,
    NotYourTurn,
    Parse,
    PlayerNotFound,
    RoomFull,
    RoomNotFound,
    SpectatingDisabled,
}

/// A rejected action, kept in the game's diagnostic log.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub timestamp: i64,
    pub operation: &'static str,
    pub message: String,
    pub kind: ErrorKind,
    pub phase: GamePhase,
    pub current_player: Option<PlayerId>,
    pub round_number: u32,
}

impl RulesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RulesError::AlreadyBid(_)
            | RulesError::BidSuitMismatch(..)
            | RulesError::MissingBidSuit => ErrorKind::InvalidBid,
            RulesError::AlreadyPaused => ErrorKind::AlreadyPaused,
            RulesError::AlreadySeated(_) | RulesError::NotEnoughPlayers(_) => {
                ErrorKind::InvalidConfig
            }
            RulesError::EmptyPlay
            | RulesError::NotYourCards(_)
            | RulesError::PatternMismatch { .. } => ErrorKind::IllegalPlay,
            RulesError::IllegalAction(..) => ErrorKind::InvalidPhase,
            RulesError::InvalidOptions(_) | RulesError::WrongPlayerCount(_) => {
                ErrorKind::InvalidConfig
            }
            RulesError::NotPaused => ErrorKind::NotPaused,
            RulesError::NotYourTurn(_) => ErrorKind::NotYourTurn,
            RulesError::Parse { .. } => ErrorKind::Parse,
            RulesError::PlayerNotFound(_) => ErrorKind::PlayerNotFound,
            RulesError::RoomFull(_) => ErrorKind::RoomFull,
            RulesError::RoomNotFound(_) => ErrorKind::RoomNotFound,
            RulesError::SpectatingDisabled => ErrorKind::SpectatingDisabled,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(RulesError::EmptyPlay.kind(), ErrorKind::IllegalPlay);
        assert_eq!(
            RulesError::NotYourCards(Cards::new()).kind(),
            ErrorKind::IllegalPlay
        );
        assert_eq!(
            RulesError::IllegalAction("bid", GamePhase::Playing).kind(),
            ErrorKind::InvalidPhase
        );
        assert_eq!(
            RulesError::from(ParseError::UnknownSuit("X".to_string())).kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_messages() {
        let err = RulesError::PatternMismatch {
            led: Lead {
                shape: Some(Shape::Pair),
                len: 2,
            },
            played: 1,
        };
        assert_eq!(
            err.to_string(),
            "the trick was led with a pair of 2 cards, 1 cards do not match it"
        );
        assert_eq!(
            RulesError::IllegalAction("play", GamePhase::Bidding).to_string(),
            "cannot play, current phase is Bidding"
        );
    }
}
