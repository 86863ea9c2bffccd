use crate::{Cards, Rank, Suit, Suits};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Single,
    Pair,
    Tractor,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Single => "single",
            Shape::Pair => "pair",
            Shape::Tractor => "tractor",
        })
    }
}

/// A classified play. `rank` is the card's rank for singles and pairs and
/// the lowest rank of the run for tractors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pattern {
    pub shape: Shape,
    pub rank: Rank,
    pub suits: Suits,
    pub len: usize,
}

impl Pattern {
    pub fn classify(cards: &Cards) -> Option<Pattern> {
        let (first, len) = (cards.min()?, cards.len());
        let suits = cards.iter().fold(Suits::NONE, |suits, c| suits | c.suit());
        let shape = match len {
            1 => Shape::Single,
            2 if cards.max()?.rank() == first.rank() => Shape::Pair,
            n if n >= 4 && n % 2 == 0 && is_tractor(cards) => Shape::Tractor,
            _ => return None,
        };
        Some(Pattern {
            shape,
            rank: first.rank(),
            suits,
            len,
        })
    }

    pub fn pairs(&self) -> usize {
        match self.shape {
            Shape::Single => 0,
            Shape::Pair => 1,
            Shape::Tractor => self.len / 2,
        }
    }

    /// Orders two plays of the same shape and length. Singles and pairs
    /// holding the trump suit outrank those that do not; tractors compare on
    /// rank alone. Plays of different shapes or lengths are incomparable.
    pub fn compare(&self, other: &Pattern, trump: Option<Suit>) -> Option<Ordering> {
        if self.shape != other.shape || self.len != other.len {
            return None;
        }
        Some(match self.shape {
            Shape::Single | Shape::Pair => self
                .suits
                .has_trump(trump)
                .cmp(&other.suits.has_trump(trump))
                .then(self.rank.cmp(&other.rank)),
            Shape::Tractor => self.rank.cmp(&other.rank),
        })
    }

    pub fn beats(&self, other: &Pattern, trump: Option<Suit>) -> bool {
        self.compare(other, trump) == Some(Ordering::Greater)
    }
}

fn is_tractor(cards: &Cards) -> bool {
    let counts = cards.rank_counts();
    counts.iter().all(|&(rank, n)| n == 2 && !rank.is_joker())
        && counts
            .windows(2)
            .all(|w| w[1].0.idx() == w[0].0.idx() + 1)
}

impl Cards {
    /// Whether some subset of these cards forms the given shape and length.
    pub fn can_form(&self, shape: Shape, len: usize) -> bool {
        match shape {
            Shape::Single => len == 1 && !self.is_empty(),
            Shape::Pair => len == 2 && self.rank_counts().iter().any(|&(_, n)| n >= 2),
            Shape::Tractor => !self.tractors(len / 2).is_empty(),
        }
    }

    /// One play for every distinct way of forming the shape and length, with
    /// tractors built from the lowest cards of each rank.
    pub fn plays(&self, shape: Shape, len: usize) -> Vec<Cards> {
        match shape {
            Shape::Single if len == 1 => {
                let mut singles: Vec<Cards> = self.iter().map(Cards::from).collect();
                singles.dedup();
                singles
            }
            Shape::Pair if len == 2 => {
                let mut pairs = Vec::new();
                for (rank, _) in self.rank_counts() {
                    let of_rank = self.of_rank(rank);
                    for i in 0..of_rank.len() {
                        for j in i + 1..of_rank.len() {
                            pairs.push(Cards::from(vec![
                                of_rank.as_slice()[i],
                                of_rank.as_slice()[j],
                            ]));
                        }
                    }
                }
                pairs.dedup();
                pairs
            }
            Shape::Tractor if len >= 4 && len % 2 == 0 => self.tractors(len / 2),
            _ => Vec::new(),
        }
    }

    /// Every single, pair and tractor that could open a trick.
    pub fn leads(&self) -> Vec<Cards> {
        let mut leads = self.plays(Shape::Single, 1);
        leads.extend(self.plays(Shape::Pair, 2));
        let mut pairs = 2;
        loop {
            let tractors = self.tractors(pairs);
            if tractors.is_empty() {
                break;
            }
            leads.extend(tractors);
            pairs += 1;
        }
        leads
    }

    fn tractors(&self, pairs: usize) -> Vec<Cards> {
        if pairs < 2 {
            return Vec::new();
        }
        let paired = self
            .rank_counts()
            .into_iter()
            .filter(|&(rank, n)| n >= 2 && !rank.is_joker())
            .map(|(rank, _)| rank)
            .collect::<Vec<_>>();
        let mut tractors = Vec::new();
        for run in paired.windows(pairs) {
            if run.windows(2).all(|w| w[1].idx() == w[0].idx() + 1) {
                let mut cards = Cards::new();
                for &rank in run {
                    cards.extend(self.of_rank(rank).iter().take(2));
                }
                tractors.push(cards);
            }
        }
        tractors
    }
}
