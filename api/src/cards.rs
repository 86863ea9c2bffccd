use crate::{Card, ParseError, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::{Debug, Display, Write},
    iter::{Copied, FromIterator},
    ops::{Add, AddAssign, Sub, SubAssign},
    slice,
    str::FromStr,
    vec,
};

/// A sorted multiset of cards. With two decks in play every card value may
/// appear twice, so hands, plays and the bottom stack are all `Cards`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct Cards {
    cards: Vec<Card>,
}

impl Cards {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, Card>> {
        self.cards.iter().copied()
    }

    pub fn max(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn min(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn count(&self, card: Card) -> usize {
        let start = self.cards.partition_point(|&c| c < card);
        self.cards[start..].iter().take_while(|&&c| c == card).count()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Whether every card of `other` is held, counting duplicates.
    pub fn contains_all(&self, other: &Cards) -> bool {
        let mut mine = self.cards.iter();
        for card in other.iter() {
            loop {
                match mine.next() {
                    Some(&c) if c < card => continue,
                    Some(&c) if c == card => break,
                    _ => return false,
                }
            }
        }
        true
    }

    pub fn points(&self) -> i16 {
        self.iter().map(Card::points).sum()
    }

    pub fn of_suit(&self, suit: Suit) -> Cards {
        self.iter().filter(|c| c.suit() == suit).collect()
    }

    pub fn of_rank(&self, rank: Rank) -> Cards {
        self.iter().filter(|c| c.rank() == rank).collect()
    }

    /// Distinct ranks held, with how many cards of each, lowest rank first.
    pub fn rank_counts(&self) -> Vec<(Rank, usize)> {
        let mut counts: Vec<(Rank, usize)> = Vec::new();
        for card in self.iter() {
            match counts.iter_mut().find(|(rank, _)| *rank == card.rank()) {
                Some((_, n)) => *n += 1,
                None => counts.push((card.rank(), 1)),
            }
        }
        counts
    }

    pub fn insert(&mut self, card: Card) {
        let idx = self.cards.partition_point(|&c| c <= card);
        self.cards.insert(idx, card);
    }

    /// Removes one copy of `card`, returning whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.binary_search(&card) {
            Ok(idx) => {
                self.cards.remove(idx);
                true
            }
            Err(_) => false,
        }
    }
}

impl From<Vec<Card>> for Cards {
    fn from(mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self { cards }
    }
}

impl From<Cards> for Vec<Card> {
    fn from(cards: Cards) -> Self {
        cards.cards
    }
}

impl From<Card> for Cards {
    fn from(card: Card) -> Self {
        Self { cards: vec![card] }
    }
}

impl From<&[Card]> for Cards {
    fn from(cards: &[Card]) -> Self {
        Cards::from(cards.to_vec())
    }
}

impl Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(card) = iter.next() {
            Display::fmt(&card, f)?;
        }
        for card in iter {
            f.write_char(' ')?;
            Display::fmt(&card, f)?;
        }
        Ok(())
    }
}

impl Debug for Cards {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char('[')?;
        Display::fmt(self, f)?;
        f.write_char(']')
    }
}

/// Whitespace separated cards in any accepted card encoding.
impl FromStr for Cards {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl Add<Card> for Cards {
    type Output = Self;

    fn add(mut self, rhs: Card) -> Self::Output {
        self.insert(rhs);
        self
    }
}

impl Add<&Cards> for Cards {
    type Output = Self;

    fn add(mut self, rhs: &Cards) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Card> for Cards {
    fn add_assign(&mut self, rhs: Card) {
        self.insert(rhs);
    }
}

impl AddAssign<&Cards> for Cards {
    fn add_assign(&mut self, rhs: &Cards) {
        self.cards.extend_from_slice(&rhs.cards);
        self.cards.sort();
    }
}

/// Removes one copy per card of `rhs`; cards that are not held are ignored.
impl Sub<&Cards> for Cards {
    type Output = Self;

    fn sub(mut self, rhs: &Cards) -> Self::Output {
        self -= rhs;
        self
    }
}

impl SubAssign<&Cards> for Cards {
    fn sub_assign(&mut self, rhs: &Cards) {
        for card in rhs.iter() {
            self.remove(card);
        }
    }
}

impl SubAssign<Card> for Cards {
    fn sub_assign(&mut self, rhs: Card) {
        self.remove(rhs);
    }
}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = Card;
    type IntoIter = Copied<slice::Iter<'a, Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Cards::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Card> for Cards {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
        self.cards.sort();
    }
}
