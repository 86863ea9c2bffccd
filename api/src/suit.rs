use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display, Write},
    str::FromStr,
};

const SUITS: [char; 5] = ['D', 'C', 'H', 'S', 'J'];

/// Suits in tie-break order, lowest first.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Suit {
    Diamonds,
    Clubs,
    Hearts,
    Spades,
    Joker,
}

impl Suit {
    pub const VALUES: [Suit; 5] = [
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Hearts,
        Suit::Spades,
        Suit::Joker,
    ];

    pub const STANDARD: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn char(self) -> char {
        SUITS[self.idx()]
    }

    pub fn is_joker(self) -> bool {
        self == Suit::Joker
    }
}

impl TryFrom<char> for Suit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'S' | 's' | '♠' => Ok(Suit::Spades),
            'H' | 'h' | '♥' => Ok(Suit::Hearts),
            'C' | 'c' | '♣' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' => Ok(Suit::Diamonds),
            'J' | 'j' | '🃏' => Ok(Suit::Joker),
            _ => Err(c),
        }
    }
}

/// Accepts a single suit character or symbol, an English suit name, or any
/// of the joker spellings seen on the wire (`J`, `JOKER`, `j`, `joker`, 🃏).
impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c).map_err(|_| ParseError::UnknownSuit(s.to_string()));
        }
        match s {
            "JOKER" | "joker" => Ok(Suit::Joker),
            _ => match s.to_ascii_lowercase().trim_end_matches('s') {
                "spade" => Ok(Suit::Spades),
                "heart" => Ok(Suit::Hearts),
                "club" => Ok(Suit::Clubs),
                "diamond" => Ok(Suit::Diamonds),
                _ => Err(ParseError::UnknownSuit(s.to_string())),
            },
        }
    }
}

impl TryFrom<String> for Suit {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Suit> for String {
    fn from(suit: Suit) -> Self {
        suit.to_string()
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.char())
    }
}

impl Debug for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
