use crate::{Bid, Cards, Deal, Seat};
use serde::{Deserialize, Serialize};

/// Everything that changes a `GameState`. Events are only created after the
/// action they describe has been verified.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Deal {
        round: u32,
        north: Cards,
        east: Cards,
        south: Cards,
        west: Cards,
        bottom: Cards,
    },
    Bid {
        bid: Bid,
    },
    Play {
        seat: Seat,
        cards: Cards,
        timestamp: i64,
    },
}

impl GameEvent {
    pub fn deal(round: u32, deal: Deal) -> Self {
        let Deal { hands, bottom } = deal;
        let [north, east, south, west] = hands;
        GameEvent::Deal {
            round,
            north,
            east,
            south,
            west,
            bottom,
        }
    }

    pub fn is_deal(&self) -> bool {
        matches!(self, GameEvent::Deal { .. })
    }
}
