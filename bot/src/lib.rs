mod greedy;
mod random;

pub use greedy::*;
pub use random::*;

use tractor_api::{evaluate, BidRequest, Card, Cards, GameState, Rank, Seat, Suit};

pub enum Bot {
    Greedy(GreedyBot),
    Random(RandomBot),
}

impl Bot {
    pub fn bid(&mut self, seat: Seat, state: &GameState) -> BidRequest {
        match self {
            Bot::Greedy(bot) => bot.bid(seat, state),
            Bot::Random(bot) => bot.bid(seat, state),
        }
    }

    pub fn play(&mut self, seat: Seat, state: &GameState) -> Cards {
        match self {
            Bot::Greedy(bot) => bot.play(seat, state),
            Bot::Random(bot) => bot.play(seat, state),
        }
    }
}

/// Every declaration `hand` can back at `level`, strongest first.
pub fn bid_options(hand: &Cards, level: Rank) -> Vec<BidRequest> {
    let mut options = Vec::new();
    for &joker in &[Card::BIG_JOKER, Card::SMALL_JOKER] {
        if hand.count(joker) >= 2 {
            options.push(BidRequest::declare(
                Suit::Joker,
                Cards::from(vec![joker, joker]),
            ));
        }
    }
    for &suit in &Suit::STANDARD {
        let card = Card::new(level, suit);
        if hand.count(card) >= 2 {
            options.push(BidRequest::declare(suit, Cards::from(vec![card, card])));
        }
    }
    for &suit in &Suit::STANDARD {
        let card = Card::new(level, suit);
        if hand.contains(card) {
            options.push(BidRequest::declare(suit, Cards::from(card)));
        }
    }
    options.sort_by_key(|request| -evaluate(&request.cards, 0, level));
    options
}

/// The strongest declaration `seat` holds, or a pass.
pub fn strongest_bid(seat: Seat, state: &GameState) -> BidRequest {
    bid_options(state.hand(seat), state.level_rank())
        .into_iter()
        .next()
        .unwrap_or_else(BidRequest::skip)
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! c {
        ($($cards:tt)*) => {
            stringify!($($cards)*).parse::<Cards>().unwrap()
        };
    }

    #[test]
    fn test_bid_options() {
        let options = bid_options(&c!(2D 2C 2C SJ SJ BJ 5H), Rank::Two);
        assert_eq!(
            options,
            vec![
                BidRequest::declare(Suit::Joker, c!(SJ SJ)),
                BidRequest::declare(Suit::Clubs, c!(2C 2C)),
                BidRequest::declare(Suit::Diamonds, c!(2D)),
                BidRequest::declare(Suit::Clubs, c!(2C)),
            ]
        );
    }

    #[test]
    fn test_no_options() {
        assert!(bid_options(&c!(3D 4D 5H BJ), Rank::Two).is_empty());
        assert_eq!(bid_options(&c!(3D 3D), Rank::Three).len(), 2);
    }
}
