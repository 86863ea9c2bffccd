use crate::strongest_bid;
use log::debug;
use rand::{seq::SliceRandom, Rng};
use tractor_api::{BidRequest, Cards, GameState, Seat};

pub struct RandomBot;

impl RandomBot {
    pub fn new() -> Self {
        Self
    }

    pub fn bid(&mut self, seat: Seat, state: &GameState) -> BidRequest {
        if rand::thread_rng().gen_bool(0.5) {
            strongest_bid(seat, state)
        } else {
            BidRequest::skip()
        }
    }

    pub fn play(&mut self, seat: Seat, state: &GameState) -> Cards {
        let plays = state.candidate_plays(seat);
        debug!("{} choosing among {} plays", seat, plays.len());
        plays
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}
