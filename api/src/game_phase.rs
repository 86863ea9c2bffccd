use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Bidding,
    Playing,
    Finished,
}

impl GamePhase {
    /// Bidding leads to play, play leads to the next round's bidding or to
    /// the end of the game. Nothing leaves `Finished`.
    pub fn can_transition(&self, to: GamePhase) -> bool {
        use GamePhase::*;
        matches!(
            (self, to),
            (Bidding, Playing) | (Playing, Bidding) | (Playing, Finished)
        )
    }

    #[must_use]
    pub fn transition(self, to: GamePhase) -> Self {
        debug_assert!(self.can_transition(to), "{:?} -> {:?}", self, to);
        to
    }

    pub fn is_bidding(&self) -> bool {
        *self == GamePhase::Bidding
    }

    pub fn is_playing(&self) -> bool {
        *self == GamePhase::Playing
    }

    pub fn is_complete(&self) -> bool {
        *self == GamePhase::Finished
    }
}
