use crate::{Card, Cards, PlayerId, Rank, Seat, Suit};
use log::debug;
use serde::{Deserialize, Serialize};

pub const INVALID_BID: i8 = -1;
pub const DEFAULT_TRUMP: Suit = Suit::Diamonds;

/// A declaration as submitted by a player. Missing fields default, so `{}`
/// is a skip-less empty bid and `{"skip": true}` is a pass.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidRequest {
    pub suit: Option<Suit>,
    pub cards: Cards,
    pub skip: bool,
}

impl BidRequest {
    pub fn skip() -> Self {
        Self {
            skip: true,
            ..Self::default()
        }
    }

    pub fn declare(suit: Suit, cards: Cards) -> Self {
        Self {
            suit: Some(suit),
            cards,
            skip: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub player: PlayerId,
    pub seat: Seat,
    pub suit: Option<Suit>,
    pub cards: Cards,
    pub strength: i8,
    pub skip: bool,
    pub timestamp: i64,
}

impl Bid {
    /// Builds the bid for the `order`th submission of the phase.
    pub fn new(
        player: PlayerId,
        seat: Seat,
        request: BidRequest,
        order: usize,
        level: Rank,
        timestamp: i64,
    ) -> Self {
        let strength = if request.skip {
            INVALID_BID
        } else {
            evaluate(&request.cards, order, level)
        };
        Self {
            player,
            seat,
            suit: request.suit,
            cards: request.cards,
            strength,
            skip: request.skip,
            timestamp,
        }
    }

    /// Stands in when nobody made a valid declaration: the first submitter
    /// deals with diamonds as trump.
    pub fn default_for(first: &Bid) -> Self {
        Self {
            player: first.player,
            seat: first.seat,
            suit: Some(DEFAULT_TRUMP),
            cards: Cards::new(),
            strength: 0,
            skip: true,
            timestamp: first.timestamp,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.strength >= 0
    }

    pub fn trump(&self) -> Suit {
        self.suit.unwrap_or(DEFAULT_TRUMP)
    }
}

/// Scores a declaration. Only two big jokers (40), two small jokers (30), two
/// identical level cards (20) and a single level card (10) are valid; earlier
/// submissions get a bonus of up to 3. Anything else is `INVALID_BID`.
pub fn evaluate(cards: &Cards, order: usize, level: Rank) -> i8 {
    let base = match cards.as_slice() {
        [a, b] if *a == Card::BIG_JOKER && *b == Card::BIG_JOKER => 40,
        [a, b] if *a == Card::SMALL_JOKER && *b == Card::SMALL_JOKER => 30,
        [a, b] if a == b && a.rank() == level => 20,
        [a] if a.rank() == level => 10,
        _ => 0,
    };
    let bonus = 3usize.saturating_sub(order) as i8;
    debug!(
        "bid {} at order {} and level {}: base {}, bonus {}",
        cards, order, level, base, bonus
    );
    if base == 0 {
        INVALID_BID
    } else {
        base + bonus
    }
}

/// The strongest bid, earliest first on ties.
pub fn winning_bid(bids: &[Bid]) -> Option<&Bid> {
    bids.iter().fold(None, |best, bid| match best {
        Some(best) if best.strength >= bid.strength => Some(best),
        _ => Some(bid),
    })
}
