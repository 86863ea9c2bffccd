use crate::{Card, Cards, Rank, Seat, Suit};

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 25;
pub const BOTTOM_SIZE: usize = 8;

/// Produces the card order for a round's deal.
pub trait Shuffle {
    fn shuffle(&mut self, round: u32, deck: &mut [Card]);
}

/// Two standard decks with their jokers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..2 {
            for &suit in &Suit::STANDARD {
                for &rank in &Rank::STANDARD {
                    cards.push(Card::new(rank, suit));
                }
            }
            cards.push(Card::BIG_JOKER);
            cards.push(Card::SMALL_JOKER);
        }
        Self { cards }
    }

    pub fn shuffled<S: Shuffle + ?Sized>(shuffle: &mut S, round: u32) -> Self {
        let mut deck = Deck::new();
        shuffle.shuffle(round, &mut deck.cards);
        deck
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Four hands of 25 in seat order, then the 8 bottom cards.
    pub fn deal(&self) -> Deal {
        let hand = |seat: Seat| -> Cards {
            let start = seat.idx() * HAND_SIZE;
            Cards::from(&self.cards[start..start + HAND_SIZE])
        };
        Deal {
            hands: [
                hand(Seat::North),
                hand(Seat::East),
                hand(Seat::South),
                hand(Seat::West),
            ],
            bottom: Cards::from(&self.cards[4 * HAND_SIZE..]),
        }
    }

    /// Whether `cards` is exactly one full double deck.
    pub fn is_complete(cards: &Cards) -> bool {
        cards.len() == DECK_SIZE && Deck::new().cards.into_iter().all(|c| cards.count(c) == 2)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deal {
    pub hands: [Cards; 4],
    pub bottom: Cards,
}

impl Deal {
    pub fn all_cards(&self) -> Cards {
        let mut all = self.bottom.clone();
        for hand in &self.hands {
            all += hand;
        }
        all
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Seed;

    #[test]
    fn test_new_deck() {
        let deck = Deck::new();
        assert_eq!(deck.as_slice().len(), DECK_SIZE);
        let cards = Cards::from(deck.as_slice());
        assert!(Deck::is_complete(&cards));
        assert_eq!(cards.count(Card::BIG_JOKER), 2);
        assert_eq!(cards.count(Card::SMALL_JOKER), 2);
        assert_eq!(cards.points(), 200);
    }

    #[test]
    fn test_shuffles_keep_every_card() {
        for i in 0..20 {
            let mut seed = Seed::chosen(format!("deck {}", i));
            let deck = Deck::shuffled(&mut seed, 1);
            let cards = Cards::from(deck.as_slice());
            assert!(Deck::is_complete(&cards));
            for &suit in &Suit::STANDARD {
                for &rank in &Rank::STANDARD {
                    assert_eq!(cards.count(Card::new(rank, suit)), 2);
                }
            }
        }
    }

    #[test]
    fn test_deal() {
        let deal = Deck::shuffled(&mut Seed::chosen("deal"), 3).deal();
        for hand in &deal.hands {
            assert_eq!(hand.len(), HAND_SIZE);
        }
        assert_eq!(deal.bottom.len(), BOTTOM_SIZE);
        assert!(Deck::is_complete(&deal.all_cards()));
    }

    #[test]
    fn test_incomplete() {
        let mut cards = Cards::from(Deck::new().as_slice());
        cards -= Card::BIG_JOKER;
        assert!(!Deck::is_complete(&cards));
        cards += Card::SMALL_JOKER;
        assert!(!Deck::is_complete(&cards));
    }
}
