use crate::{
    koudi_multiplier, next_dealer, next_level, winning_bid, Bid, Card, Cards, GameEvent,
    GamePhase, Lead, Pattern, Rank, RoundRecord, RulesError, Scores, Seat, Suit, Trick,
    TrickResult, MAX_LEVEL,
};
use log::info;
use serde::{Deserialize, Serialize};

/// The authoritative state of a game, changed only by `apply`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: GamePhase,
    pub level: u8,
    pub trump: Option<Suit>,
    pub scores: Scores,
    pub dealer: Option<Seat>,
    pub next_actor: Option<Seat>,
    pub round: u32,
    pub hands: [Cards; 4],
    pub bottom: Cards,
    pub bids: Vec<Bid>,
    pub current_trick: Trick,
    pub last_trick: Option<TrickResult>,
    pub history: Vec<RoundRecord>,
}

impl GameState {
    pub fn new(level: u8) -> Self {
        Self {
            phase: GamePhase::Bidding,
            level,
            trump: None,
            scores: Scores::default(),
            dealer: None,
            next_actor: None,
            round: 1,
            hands: Default::default(),
            bottom: Cards::new(),
            bids: Vec::new(),
            current_trick: Trick::new(),
            last_trick: None,
            history: Vec::new(),
        }
    }

    pub fn level_rank(&self) -> Rank {
        Rank::from_level(self.level).unwrap_or(Rank::Ace)
    }

    pub fn hand(&self, seat: Seat) -> &Cards {
        &self.hands[seat.idx()]
    }

    /// A round is waiting for its cards.
    pub fn needs_deal(&self) -> bool {
        self.phase.is_bidding()
            && self.bids.is_empty()
            && self.bottom.is_empty()
            && self.hands.iter().all(Cards::is_empty)
    }

    pub fn has_bid(&self, seat: Seat) -> bool {
        self.bids.iter().any(|bid| bid.seat == seat)
    }

    /// The bottom cards become visible once the last trick is under way.
    pub fn is_last_trick(&self) -> bool {
        self.phase.is_playing() && self.hands.iter().any(Cards::is_empty)
    }

    /// Cards still in hands, on the table and in the bottom stack.
    pub fn cards_in_play(&self) -> usize {
        self.hands.iter().map(Cards::len).sum::<usize>()
            + self.current_trick.cards().len()
            + self.bottom.len()
    }

    pub fn non_dealer_score(&self) -> Option<i16> {
        self.dealer
            .map(|dealer| self.scores.score(dealer.team().other()))
    }

    /// Checks `cards` against the trick's lead: same count always, and the
    /// led shape unless the hand cannot form it. A follower without the led
    /// shape may play any cards of the led count rather than be stuck; such
    /// a play never takes the trick.
    pub fn follows_lead(&self, seat: Seat, cards: &Cards) -> Result<(), RulesError> {
        let lead = match self.current_trick.lead() {
            Some(lead) => lead,
            None => return Ok(()),
        };
        let mismatch = RulesError::PatternMismatch {
            led: lead,
            played: cards.len(),
        };
        if cards.len() != lead.len {
            return Err(mismatch);
        }
        let shape = match lead.shape {
            Some(shape) => shape,
            None => return Ok(()),
        };
        match Pattern::classify(cards) {
            Some(pattern) if pattern.shape == shape => Ok(()),
            _ if self.hand(seat).can_form(shape, lead.len) => Err(mismatch),
            _ => Ok(()),
        }
    }

    /// Legal plays for `seat`, one per distinct combination.
    pub fn candidate_plays(&self, seat: Seat) -> Vec<Cards> {
        let hand = self.hand(seat);
        match self.current_trick.lead() {
            None => hand.leads(),
            Some(Lead {
                shape: Some(shape),
                len,
            }) if hand.can_form(shape, len) => hand.plays(shape, len),
            Some(Lead { len, .. }) => vec![cheapest(hand, len)],
        }
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Deal {
                round,
                north,
                east,
                south,
                west,
                bottom,
            } => {
                self.round = *round;
                self.hands = [north.clone(), east.clone(), south.clone(), west.clone()];
                self.bottom = bottom.clone();
                self.trump = None;
                self.scores = Scores::default();
                self.next_actor = None;
                self.bids.clear();
                self.current_trick = Trick::new();
                self.last_trick = None;
            }
            GameEvent::Bid { bid } => {
                self.bids.push(bid.clone());
                if self.bids.len() == 4 {
                    self.finish_bidding();
                }
            }
            GameEvent::Play {
                seat,
                cards,
                timestamp,
            } => {
                self.hands[seat.idx()] -= cards;
                self.current_trick.push(*seat, cards.clone());
                self.next_actor = Some(seat.left());
                if self.current_trick.is_complete() {
                    self.finish_trick(*timestamp);
                }
            }
        }
    }

    fn finish_bidding(&mut self) {
        if !self.bids.iter().any(Bid::is_valid) {
            let default = Bid::default_for(&self.bids[0]);
            self.bids.push(default);
        }
        let winner = match winning_bid(&self.bids) {
            Some(bid) => bid.clone(),
            None => return,
        };
        info!(
            "round {} bidding won by {} ({}) with strength {}, trump {}",
            self.round,
            winner.seat,
            winner.player,
            winner.strength,
            winner.trump()
        );
        self.trump = Some(winner.trump());
        self.dealer = Some(winner.seat);
        self.next_actor = Some(winner.seat);
        self.phase = self.phase.transition(GamePhase::Playing);
    }

    fn finish_trick(&mut self, timestamp: i64) {
        let (winner, cards) = match self.current_trick.winner(self.trump) {
            Some(play) => (play.seat, play.cards.clone()),
            None => return,
        };
        let mut points = self.current_trick.points();
        let last = self.hands.iter().all(Cards::is_empty);
        if last {
            let bottom = self.bottom.points();
            if self.dealer.map(|dealer| dealer.team()) == Some(winner.team()) {
                points += bottom;
            } else {
                points += bottom * koudi_multiplier(&cards);
            }
        }
        self.scores = self.scores.win(winner.team(), points);
        self.last_trick = Some(TrickResult {
            plays: self.current_trick.plays().to_vec(),
            winner,
            points,
        });
        self.current_trick = Trick::new();
        if last {
            self.finish_round(timestamp);
        }
    }

    fn finish_round(&mut self, timestamp: i64) {
        let dealer = match self.dealer {
            Some(dealer) => dealer,
            None => return,
        };
        let non_dealer = self.scores.score(dealer.team().other());
        self.history.push(RoundRecord {
            round_number: self.round,
            dealer,
            level: self.level,
            scores: self.scores,
            trump: self.trump,
            timestamp,
        });
        let level = next_level(self.level, non_dealer);
        info!(
            "round {} over: dealer {} at level {}, non-dealer score {}, next level {}",
            self.round, dealer, self.level, non_dealer, level
        );
        self.round += 1;
        self.dealer = Some(next_dealer(dealer, non_dealer));
        self.level = level;
        self.next_actor = None;
        self.bottom = Cards::new();
        if self.level > MAX_LEVEL {
            self.phase = self.phase.transition(GamePhase::Finished);
            info!(
                "game finished after {} rounds, {} reached level {}",
                self.history.len(),
                dealer.team(),
                self.level
            );
            return;
        }
        self.phase = self.phase.transition(GamePhase::Bidding);
        self.scores = Scores::default();
        self.trump = None;
        self.bids.clear();
    }
}

/// The lowest-valued `len` cards, point cards last.
fn cheapest(hand: &Cards, len: usize) -> Cards {
    let mut cards = hand.iter().collect::<Vec<Card>>();
    cards.sort_by_key(|&card| (card.points(), card));
    cards.into_iter().take(len).collect()
}
