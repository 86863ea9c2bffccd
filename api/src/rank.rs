use crate::ParseError;
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display, Write},
    str::FromStr,
};

const RANKS: [char; 15] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A', 'S', 'B',
];

/// Ranks in canonical order, two lowest and the big joker highest.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    SmallJoker,
    BigJoker,
}

impl Rank {
    const ALL: [Rank; 15] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::SmallJoker,
        Rank::BigJoker,
    ];

    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn char(self) -> char {
        RANKS[self.idx()]
    }

    pub fn is_joker(self) -> bool {
        self >= Rank::SmallJoker
    }

    /// The level at which this rank is privileged, 2 through 14 (ace).
    pub fn level(self) -> Option<u8> {
        if self.is_joker() {
            None
        } else {
            Some(self as u8 + 2)
        }
    }

    pub fn from_level(level: u8) -> Option<Rank> {
        match level {
            2..=14 => Some(Rank::STANDARD[(level - 2) as usize]),
            _ => None,
        }
    }

    pub fn points(self) -> i16 {
        match self {
            Rank::Five => 5,
            Rank::Ten | Rank::King => 10,
            _ => 0,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        RANKS
            .iter()
            .position(|&r| r == c)
            .map(|n| Rank::ALL[n])
            .ok_or(c)
    }
}

/// Parses the standard ranks as written on cards: `2`..`10`, `J`, `Q`, `K`,
/// `A` (and `T` for ten). Jokers are recognised by the card parser.
impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match Rank::try_from(c.to_ascii_uppercase()) {
                Ok(rank) if !rank.is_joker() => Ok(rank),
                _ => Err(ParseError::UnknownRank(s.to_string())),
            },
            _ => Err(ParseError::UnknownRank(s.to_string())),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.char())
    }
}

impl Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
