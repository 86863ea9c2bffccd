use crate::{Cards, ParseError, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display, Write},
    ops::Add,
    str::FromStr,
};

/// A single card. Ordered by rank first, then by the suit tie-break order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "WireCard", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const BIG_JOKER: Card = Card {
        rank: Rank::BigJoker,
        suit: Suit::Joker,
    };
    pub const SMALL_JOKER: Card = Card {
        rank: Rank::SmallJoker,
        suit: Suit::Joker,
    };

    pub fn new(rank: Rank, suit: Suit) -> Self {
        debug_assert_eq!(rank.is_joker(), suit.is_joker(), "{}{}", rank, suit);
        Self { rank, suit }
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn is_joker(self) -> bool {
        self.suit.is_joker()
    }

    pub fn points(self) -> i16 {
        self.rank.points()
    }

    fn from_parts(suit: &str, rank: &str) -> Result<Self, ParseError> {
        match (suit, rank) {
            ("J", "OKERJOKER") => return Ok(Card::BIG_JOKER),
            ("j", "okerjoker") => return Ok(Card::SMALL_JOKER),
            _ => {}
        }
        if suit == "JOKER" || rank == "JOKER" {
            return Ok(Card::BIG_JOKER);
        }
        if suit == "joker" || rank == "joker" {
            return Ok(Card::SMALL_JOKER);
        }
        let parsed_suit = suit.parse::<Suit>()?;
        if parsed_suit.is_joker() {
            return Err(ParseError::UnknownCard(format!("{}-{}", suit, rank)));
        }
        Ok(Card::new(rank.parse()?, parsed_suit))
    }
}

/// The parser for every card encoding accepted on the wire: compact (`9S`,
/// `10H`, `BJ`), delimited suit-rank (`♠-10`, `S-Q`), or any string naming a
/// joker (`JOKER` is big, `joker` is small).
impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains("JOKER") {
            return Ok(Card::BIG_JOKER);
        }
        if s.contains("joker") {
            return Ok(Card::SMALL_JOKER);
        }
        if let Some((suit, rank)) = s.split_once('-') {
            return Card::from_parts(suit, rank);
        }
        match s {
            "BJ" => return Ok(Card::BIG_JOKER),
            "SJ" => return Ok(Card::SMALL_JOKER),
            _ => {}
        }
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .and_then(|c| Suit::try_from(c).ok())
            .filter(|suit| !suit.is_joker())
            .ok_or_else(|| ParseError::UnknownCard(s.to_string()))?;
        let rank = chars
            .as_str()
            .parse::<Rank>()
            .map_err(|_| ParseError::UnknownCard(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// A card as it arrives from a client, before normalization.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum WireCard {
    Text(String),
    Parts { suit: String, rank: String },
}

impl TryFrom<WireCard> for Card {
    type Error = ParseError;

    fn try_from(wire: WireCard) -> Result<Self, Self::Error> {
        match wire {
            WireCard::Text(s) => s.parse(),
            WireCard::Parts { suit, rank } => Card::from_parts(&suit, &rank),
        }
    }
}

impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.rank.char())?;
        f.write_char(self.suit.char())
    }
}

impl Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Add<Card> for Card {
    type Output = Cards;

    fn add(self, rhs: Card) -> Self::Output {
        Cards::from(self) + rhs
    }
}
