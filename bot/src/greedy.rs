use crate::strongest_bid;
use std::cmp::Reverse;
use tractor_api::{BidRequest, Cards, GameState, Seat};

/// Declares whenever it can. Takes the trick with its longest, cheapest
/// winning play, otherwise throws its cheapest cards.
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> Self {
        Self
    }

    pub fn bid(&mut self, seat: Seat, state: &GameState) -> BidRequest {
        strongest_bid(seat, state)
    }

    pub fn play(&mut self, seat: Seat, state: &GameState) -> Cards {
        let plays = state.candidate_plays(seat);
        let winning = plays
            .iter()
            .filter(|&cards| wins(seat, cards, state))
            .min_by_key(|cards| (Reverse(cards.len()), cards.points(), cards.max()));
        match winning {
            Some(cards) => cards.clone(),
            None => plays
                .into_iter()
                .min_by_key(|cards| (cards.points(), cards.max()))
                .unwrap_or_default(),
        }
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

fn wins(seat: Seat, cards: &Cards, state: &GameState) -> bool {
    let mut trick = state.current_trick.clone();
    trick.push(seat, cards.clone());
    trick
        .winner(state.trump)
        .map_or(false, |play| play.seat == seat)
}
