use crate::{Cards, Lead, Pattern, Seat, Shape, Suit};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub cards: Cards,
}

/// The plays of the trick in progress, leader first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    pub fn new() -> Self {
        Self { plays: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn leader(&self) -> Option<&Play> {
        self.plays.first()
    }

    /// Shape and count every follower must match.
    pub fn lead(&self) -> Option<Lead> {
        self.leader().map(|play| Lead {
            shape: Pattern::classify(&play.cards).map(|p| p.shape),
            len: play.cards.len(),
        })
    }

    pub fn push(&mut self, seat: Seat, cards: Cards) {
        debug_assert!(!self.is_complete());
        self.plays.push(Play { seat, cards });
    }

    pub fn cards(&self) -> Cards {
        let mut cards = Cards::new();
        for play in &self.plays {
            cards += &play.cards;
        }
        cards
    }

    pub fn points(&self) -> i16 {
        self.plays.iter().map(|play| play.cards.points()).sum()
    }

    /// The play holding the trick: a challenger takes over only when it
    /// strictly beats the current holder.
    pub fn winner(&self, trump: Option<Suit>) -> Option<&Play> {
        let mut plays = self.plays.iter();
        let mut best = plays.next()?;
        let mut best_pattern = Pattern::classify(&best.cards);
        for play in plays {
            let pattern = Pattern::classify(&play.cards);
            if let (Some(challenger), Some(holder)) = (&pattern, &best_pattern) {
                if challenger.beats(holder, trump) {
                    best = play;
                    best_pattern = pattern;
                }
            }
        }
        Some(best)
    }
}

/// A resolved trick, kept so callers can show who took it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickResult {
    pub plays: Vec<Play>,
    pub winner: Seat,
    pub points: i16,
}

/// Multiplier applied to the bottom cards when the last trick is taken away
/// from the dealer's team.
pub fn koudi_multiplier(cards: &Cards) -> i16 {
    match Pattern::classify(cards) {
        Some(Pattern {
            shape: Shape::Pair, ..
        }) => 4,
        Some(pattern) if pattern.shape == Shape::Tractor => 6 + 2 * (pattern.pairs() as i16 - 2),
        _ => 2,
    }
}
