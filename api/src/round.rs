use crate::{Scores, Seat, Suit};
use serde::{Deserialize, Serialize};

pub const MIN_LEVEL: u8 = 2;
pub const MAX_LEVEL: u8 = 14;
/// The level a finished game is left at.
pub const FINAL_LEVEL: u8 = MAX_LEVEL + 1;

/// A non-dealer team at or below this keeps the deal on the dealer's team.
pub const PASS_THRESHOLD: i16 = 35;

/// One completed round, recorded with the dealer and level it was played at.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub round_number: u32,
    pub dealer: Seat,
    pub level: u8,
    pub scores: Scores,
    pub trump: Option<Suit>,
    pub timestamp: i64,
}

/// Levels gained from the non-dealer team's score for the round.
pub fn escalation(non_dealer_score: i16) -> u8 {
    match non_dealer_score {
        s if s <= -40 => 4,
        0 => 3,
        s if s <= PASS_THRESHOLD => 2,
        s if s <= 75 => 1,
        s if s <= 115 => 0,
        s if s <= 155 => 1,
        s if s <= 195 => 2,
        _ => 3,
    }
}

pub fn next_dealer(dealer: Seat, non_dealer_score: i16) -> Seat {
    if non_dealer_score <= PASS_THRESHOLD {
        dealer.across()
    } else {
        dealer.left()
    }
}

/// The level after escalation, capped at `FINAL_LEVEL` once it passes aces.
pub fn next_level(level: u8, non_dealer_score: i16) -> u8 {
    (level + escalation(non_dealer_score)).min(FINAL_LEVEL)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escalation_table() {
        assert_eq!(escalation(-40), 4);
        assert_eq!(escalation(0), 3);
        assert_eq!(escalation(5), 2);
        assert_eq!(escalation(35), 2);
        assert_eq!(escalation(36), 1);
        assert_eq!(escalation(75), 1);
        assert_eq!(escalation(80), 0);
        assert_eq!(escalation(115), 0);
        assert_eq!(escalation(120), 1);
        assert_eq!(escalation(155), 1);
        assert_eq!(escalation(160), 2);
        assert_eq!(escalation(195), 2);
        assert_eq!(escalation(200), 3);
        assert_eq!(escalation(400), 3);
    }

    #[test]
    fn test_next_dealer() {
        assert_eq!(next_dealer(Seat::North, 0), Seat::South);
        assert_eq!(next_dealer(Seat::North, 35), Seat::South);
        assert_eq!(next_dealer(Seat::North, 40), Seat::East);
        assert_eq!(next_dealer(Seat::West, 120), Seat::North);
    }

    #[test]
    fn test_next_level() {
        assert_eq!(next_level(2, 0), 5);
        assert_eq!(next_level(2, 36), 3);
        assert_eq!(next_level(13, 10), FINAL_LEVEL);
        assert_eq!(next_level(13, 0), FINAL_LEVEL);
        assert_eq!(next_level(14, 100), 14);
    }
}
