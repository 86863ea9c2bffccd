use crate::{
    now_millis, Bid, BidRequest, Cards, Deck, EndStats, ErrorRecord, GameEvent, GameId,
    GameOptions, GamePhase, GameSnapshot, GameState, PlayerId, PlayerView, RoundRecord,
    RulesError, Scores, Seat, SeatView, Seed, Shuffle, SpectatorSnapshot, Suit, TableView, Team,
    Trick, TrickResult, MAX_LEVEL,
};
use log::{info, warn};
use serde::Serialize;
use std::collections::HashSet;

pub const TIME_LIMIT_REASON: &str = "time limit reached";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pause {
    pub reason: String,
    pub since: i64,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidResponse {
    #[serde(rename_all = "camelCase")]
    Bidding { bids: Vec<Bid>, current_bid: Bid },
    #[serde(rename = "PLAYING", rename_all = "camelCase")]
    Complete {
        trump_suit: Suit,
        dealer: PlayerId,
        current_player: PlayerId,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub phase: GamePhase,
    pub current_player: Option<PlayerId>,
    pub current_trick: Trick,
    pub completed_trick: Option<TrickResult>,
    pub completed_round: Option<RoundRecord>,
    pub scores: Scores,
}

/// One game between four seated players. The state only changes through
/// verified events; everything else here is bookkeeping around it.
#[derive(Clone, Debug)]
pub struct Game<S = Seed> {
    pub id: GameId,
    pub options: GameOptions,
    pub players: [PlayerId; 4],
    pub state: GameState,
    pub events: Vec<GameEvent>,
    pub errors: Vec<ErrorRecord>,
    pub spectators: HashSet<PlayerId>,
    pub pause: Option<Pause>,
    pub started_at: i64,
    shuffle: S,
}

impl<S: Shuffle> Game<S> {
    pub fn new(
        players: Vec<PlayerId>,
        options: GameOptions,
        shuffle: S,
    ) -> Result<Self, RulesError> {
        Self::new_at(GameId::new(), players, options, shuffle, now_millis())
    }

    pub fn new_at(
        id: GameId,
        players: Vec<PlayerId>,
        options: GameOptions,
        shuffle: S,
        now: i64,
    ) -> Result<Self, RulesError> {
        options.validate()?;
        let players = match *players.as_slice() {
            [north, east, south, west] => [north, east, south, west],
            _ => return Err(RulesError::WrongPlayerCount(players.len())),
        };
        let distinct = players.iter().collect::<HashSet<_>>().len();
        if distinct != 4 {
            return Err(RulesError::WrongPlayerCount(distinct));
        }
        let mut game = Self {
            id,
            state: GameState::new(options.start_level),
            options,
            players,
            events: Vec::new(),
            errors: Vec::new(),
            spectators: HashSet::new(),
            pause: None,
            started_at: now,
            shuffle,
        };
        game.deal();
        Ok(game)
    }

    pub fn seat(&self, player: PlayerId) -> Result<Seat, RulesError> {
        self.players
            .iter()
            .position(|&id| id == player)
            .map(|idx| Seat::VALUES[idx])
            .ok_or(RulesError::PlayerNotFound(player))
    }

    pub fn player(&self, seat: Seat) -> PlayerId {
        self.players[seat.idx()]
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.next_actor.map(|seat| self.player(seat))
    }

    fn apply(&mut self, event: GameEvent) {
        self.state.apply(&event);
        self.events.push(event);
    }

    fn deal(&mut self) {
        if self.state.needs_deal() {
            let round = self.state.round;
            let deal = Deck::shuffled(&mut self.shuffle, round).deal();
            self.apply(GameEvent::deal(round, deal));
        }
    }

    pub fn verify_bid(&self, seat: Seat, request: &BidRequest) -> Result<(), RulesError> {
        if !self.state.phase.is_bidding() {
            return Err(RulesError::IllegalAction("bid", self.state.phase));
        }
        if self.state.has_bid(seat) {
            return Err(RulesError::AlreadyBid(self.player(seat)));
        }
        if !request.skip {
            let suit = request.suit.ok_or(RulesError::MissingBidSuit)?;
            if request.cards.iter().any(|card| card.suit() != suit) {
                return Err(RulesError::BidSuitMismatch(suit, request.cards.clone()));
            }
            let hand = self.state.hand(seat);
            if !hand.contains_all(&request.cards) {
                return Err(RulesError::NotYourCards(request.cards.clone() - hand));
            }
        }
        Ok(())
    }

    pub fn verify_play(&self, seat: Seat, cards: &Cards) -> Result<(), RulesError> {
        if !self.state.phase.is_playing() {
            return Err(RulesError::IllegalAction("play", self.state.phase));
        }
        match self.state.next_actor {
            Some(next) if next != seat => {
                return Err(RulesError::NotYourTurn(self.player(next)));
            }
            _ => {}
        }
        if cards.is_empty() {
            return Err(RulesError::EmptyPlay);
        }
        let hand = self.state.hand(seat);
        if !hand.contains_all(cards) {
            return Err(RulesError::NotYourCards(cards.clone() - hand));
        }
        self.state.follows_lead(seat, cards)
    }

    pub fn bid(&mut self, player: PlayerId, request: BidRequest) -> Result<BidResponse, RulesError> {
        self.bid_at(player, request, now_millis())
    }

    pub fn bid_at(
        &mut self,
        player: PlayerId,
        request: BidRequest,
        now: i64,
    ) -> Result<BidResponse, RulesError> {
        let result = self.try_bid(player, request, now);
        self.record("bid", now, result)
    }

    fn try_bid(
        &mut self,
        player: PlayerId,
        request: BidRequest,
        now: i64,
    ) -> Result<BidResponse, RulesError> {
        let seat = self.seat(player)?;
        self.verify_bid(seat, &request)?;
        let bid = Bid::new(
            player,
            seat,
            request,
            self.state.bids.len(),
            self.state.level_rank(),
            now,
        );
        self.apply(GameEvent::Bid { bid: bid.clone() });
        Ok(match (self.state.trump, self.state.dealer) {
            (Some(trump_suit), Some(dealer)) if self.state.phase.is_playing() => {
                BidResponse::Complete {
                    trump_suit,
                    dealer: self.player(dealer),
                    current_player: self.player(dealer),
                }
            }
            _ => BidResponse::Bidding {
                bids: self.state.bids.clone(),
                current_bid: bid,
            },
        })
    }

    pub fn play_cards(
        &mut self,
        player: PlayerId,
        cards: Cards,
    ) -> Result<PlayResponse, RulesError> {
        self.play_cards_at(player, cards, now_millis())
    }

    pub fn play_cards_at(
        &mut self,
        player: PlayerId,
        cards: Cards,
        now: i64,
    ) -> Result<PlayResponse, RulesError> {
        let result = self.try_play(player, cards, now);
        self.record("play", now, result)
    }

    fn try_play(
        &mut self,
        player: PlayerId,
        cards: Cards,
        now: i64,
    ) -> Result<PlayResponse, RulesError> {
        let seat = self.seat(player)?;
        self.verify_play(seat, &cards)?;
        let before = self.state.scores;
        let rounds = self.state.history.len();
        self.apply(GameEvent::Play {
            seat,
            cards,
            timestamp: now,
        });
        let completed_round = self.state.history.get(rounds).cloned();
        let completed_trick = if self.state.current_trick.is_empty() {
            self.state.last_trick.clone()
        } else {
            None
        };
        if completed_trick.is_some() {
            let after = completed_round
                .as_ref()
                .map_or(self.state.scores, |record| record.scores);
            self.check_max_score(before, after);
        }
        self.deal();
        Ok(PlayResponse {
            phase: self.state.phase,
            current_player: self.current_player(),
            current_trick: self.state.current_trick.clone(),
            completed_trick,
            completed_round,
            scores: self.state.scores,
        })
    }

    fn check_max_score(&self, before: Scores, after: Scores) {
        let max = self.options.max_score;
        for &team in &[Team::NorthSouth, Team::EastWest] {
            if before.score(team) <= max && after.score(team) > max {
                warn!(
                    "game {}: {} scored {} in round {}, above the maximum of {}",
                    self.id,
                    team,
                    after.score(team),
                    self.state.round,
                    max
                );
            }
        }
    }

    fn record<T>(
        &mut self,
        operation: &'static str,
        now: i64,
        result: Result<T, RulesError>,
    ) -> Result<T, RulesError> {
        if let Err(e) = &result {
            warn!("game {}: {} rejected: {}", self.id, operation, e);
            self.errors.push(ErrorRecord {
                timestamp: now,
                operation,
                message: e.to_string(),
                kind: e.kind(),
                phase: self.state.phase,
                current_player: self.current_player(),
                round_number: self.state.round,
            });
        }
        result
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_some()
    }

    pub fn pause<R: Into<String>>(&mut self, reason: R) -> Result<(), RulesError> {
        self.pause_at(reason, now_millis())
    }

    pub fn pause_at<R: Into<String>>(&mut self, reason: R, now: i64) -> Result<(), RulesError> {
        let result = if self.pause.is_some() {
            Err(RulesError::AlreadyPaused)
        } else {
            let reason = reason.into();
            info!("game {} paused: {}", self.id, reason);
            self.pause = Some(Pause { reason, since: now });
            Ok(())
        };
        self.record("pause", now, result)
    }

    pub fn resume(&mut self) -> Result<(), RulesError> {
        self.resume_at(now_millis())
    }

    /// Shifts the start time by the paused duration, so time spent paused
    /// does not count against the time limit.
    pub fn resume_at(&mut self, now: i64) -> Result<(), RulesError> {
        let result = match self.pause.take() {
            Some(pause) => {
                self.started_at += now - pause.since;
                info!("game {} resumed", self.id);
                Ok(())
            }
            None => Err(RulesError::NotPaused),
        };
        self.record("resume", now, result)
    }

    pub fn add_spectator(&mut self, spectator: PlayerId) -> Result<(), RulesError> {
        let result = if self.options.allow_spectators {
            self.spectators.insert(spectator);
            Ok(())
        } else {
            Err(RulesError::SpectatingDisabled)
        };
        self.record("add spectator", now_millis(), result)
    }

    pub fn remove_spectator(&mut self, spectator: PlayerId) {
        self.spectators.remove(&spectator);
    }

    pub fn can_continue(&mut self) -> bool {
        self.can_continue_at(now_millis())
    }

    /// False while paused. Once the time limit has passed the game pauses
    /// itself.
    pub fn can_continue_at(&mut self, now: i64) -> bool {
        if self.pause.is_some() {
            return false;
        }
        if let Some(limit) = self.options.time_limit_millis() {
            if now - self.started_at > limit {
                info!("game {} paused: {}", self.id, TIME_LIMIT_REASON);
                self.pause = Some(Pause {
                    reason: TIME_LIMIT_REASON.to_string(),
                    since: now,
                });
                return false;
            }
        }
        true
    }

    pub fn game_state(&mut self) -> GameSnapshot {
        self.game_state_at(now_millis())
    }

    pub fn game_state_at(&mut self, now: i64) -> GameSnapshot {
        let table = self.table_view(now);
        let bottom_cards = if self.state.is_last_trick() {
            self.state.bottom.clone()
        } else {
            Cards::new()
        };
        GameSnapshot {
            table,
            players: Seat::VALUES
                .iter()
                .map(|&seat| PlayerView {
                    seat: self.seat_view(seat),
                    hand: self.state.hand(seat).clone(),
                })
                .collect(),
            bottom_cards,
        }
    }

    pub fn spectator_state(&mut self) -> SpectatorSnapshot {
        self.spectator_state_at(now_millis())
    }

    pub fn spectator_state_at(&mut self, now: i64) -> SpectatorSnapshot {
        SpectatorSnapshot {
            table: self.table_view(now),
            players: Seat::VALUES
                .iter()
                .map(|&seat| self.seat_view(seat))
                .collect(),
        }
    }

    fn seat_view(&self, seat: Seat) -> SeatView {
        SeatView {
            id: self.player(seat),
            seat,
            team: seat.team(),
            hand_size: self.state.hand(seat).len(),
            is_dealer: self.state.dealer == Some(seat),
        }
    }

    fn table_view(&mut self, now: i64) -> TableView {
        let can_continue = self.can_continue_at(now);
        let elapsed_time = now - self.started_at;
        TableView {
            game_id: self.id,
            phase: self.state.phase,
            current_player: self.current_player(),
            current_level: self.state.level,
            trump_suit: self.state.trump,
            scores: self.state.scores,
            current_trick: self.state.current_trick.clone(),
            last_trick: self.state.last_trick.clone(),
            dealer: self.state.dealer.map(|seat| self.player(seat)),
            bids: self.state.bids.clone(),
            bottom_cards_size: self.state.bottom.len(),
            round_number: self.state.round,
            round_history: self.state.history.clone(),
            end_stats: self.end_stats(now),
            options: self.options.clone(),
            is_paused: self.pause.is_some(),
            pause_reason: self.pause.as_ref().map(|pause| pause.reason.clone()),
            spectator_count: self.spectators.len(),
            elapsed_time,
            remaining_time: self
                .options
                .time_limit_millis()
                .map(|limit| (limit - elapsed_time).max(0)),
            last_error: self.errors.last().cloned(),
            can_continue,
        }
    }

    pub fn end_stats(&self, now: i64) -> Option<EndStats> {
        if !self.state.phase.is_complete() {
            return None;
        }
        let history = &self.state.history;
        Some(EndStats {
            final_level: self.state.level,
            winning_team: if self.state.level > MAX_LEVEL {
                self.state.dealer.map(|seat| seat.team())
            } else {
                None
            },
            rounds_played: history.len(),
            level_progression: history.iter().map(|record| record.level).collect(),
            dealer_progression: history
                .iter()
                .map(|record| self.player(record.dealer))
                .collect(),
            score_history: history.iter().map(|record| record.scores).collect(),
            total_duration: now - self.started_at,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    fn players() -> Vec<PlayerId> {
        (0..4).map(|_| PlayerId::new()).collect()
    }

    fn game(options: GameOptions) -> Game {
        Game::new_at(
            GameId::new(),
            players(),
            options,
            Seed::chosen("game tests"),
            1_000,
        )
        .unwrap()
    }

    #[test]
    fn test_new_deals_first_round() {
        let game = game(GameOptions::default());
        assert!(game.state.phase.is_bidding());
        assert_eq!(game.state.round, 1);
        assert_eq!(game.state.cards_in_play(), 108);
        assert_eq!(game.events.len(), 1);
        assert!(game.events[0].is_deal());
        for &seat in &Seat::VALUES {
            assert_eq!(game.state.hand(seat).len(), 25);
        }
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn test_player_count() {
        let seed = || Seed::chosen("count");
        let three = players()[..3].to_vec();
        assert!(matches!(
            Game::new(three, GameOptions::default(), seed()),
            Err(RulesError::WrongPlayerCount(3))
        ));
        let id = PlayerId::new();
        assert!(matches!(
            Game::new(vec![id, id, PlayerId::new(), PlayerId::new()], GameOptions::default(), seed()),
            Err(RulesError::WrongPlayerCount(3))
        ));
        let options = GameOptions {
            start_level: 1,
            ..GameOptions::default()
        };
        assert!(matches!(
            Game::new(players(), options, seed()),
            Err(RulesError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_unknown_player() {
        let mut game = game(GameOptions::default());
        let stranger = PlayerId::new();
        let err = game.bid_at(stranger, BidRequest::skip(), 2_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlayerNotFound);
        assert_eq!(game.errors.len(), 1);
        assert_eq!(game.errors[0].operation, "bid");
        assert_eq!(game.errors[0].timestamp, 2_000);
        assert_eq!(game.errors[0].round_number, 1);
        assert_eq!(game.errors[0].phase, GamePhase::Bidding);
    }

    #[test]
    fn test_bid_rules() {
        let mut game = game(GameOptions::default());
        let north = game.players[0];
        let err = game
            .bid(
                north,
                BidRequest {
                    suit: None,
                    cards: Cards::new(),
                    skip: false,
                },
            )
            .unwrap_err();
        assert!(matches!(err, RulesError::MissingBidSuit));
        let response = game.bid(north, BidRequest::skip()).unwrap();
        assert!(matches!(response, BidResponse::Bidding { ref bids, .. } if bids.len() == 1));
        let err = game.bid(north, BidRequest::skip()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBid);
        let play = game
            .play_cards(north, game.state.hand(Seat::North).clone())
            .unwrap_err();
        assert_eq!(play.kind(), ErrorKind::InvalidPhase);
        assert_eq!(game.errors.len(), 3);
    }

    #[test]
    fn test_bid_suit_must_match_cards() {
        let mut game = game(GameOptions::default());
        let north = game.players[0];
        let card = game.state.hand(Seat::North).as_slice()[0];
        let other = Suit::STANDARD
            .iter()
            .copied()
            .find(|&suit| suit != card.suit())
            .unwrap();
        let err = game
            .bid(north, BidRequest::declare(other, card.into()))
            .unwrap_err();
        assert!(matches!(err, RulesError::BidSuitMismatch(suit, _) if suit == other));
        assert_eq!(err.kind(), ErrorKind::InvalidBid);
        assert!(!game.state.has_bid(Seat::North));
        game.bid(north, BidRequest::declare(card.suit(), card.into()))
            .unwrap();
        assert!(game.state.has_bid(Seat::North));
    }

    #[test]
    fn test_bid_cards_must_be_held() {
        let mut game = game(GameOptions::default());
        let north = game.players[0];
        let held = game.state.hand(Seat::North).clone();
        let missing = crate::Deck::new()
            .as_slice()
            .iter()
            .copied()
            .find(|&card| held.count(card) == 0);
        if let Some(card) = missing {
            let err = game
                .bid(north, BidRequest::declare(card.suit(), card.into()))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalPlay);
        }
    }

    #[test]
    fn test_bidding_completes() {
        let mut game = game(GameOptions::default());
        let players = game.players;
        for &player in &players[..3] {
            game.bid(player, BidRequest::skip()).unwrap();
        }
        let response = game.bid(players[3], BidRequest::skip()).unwrap();
        assert_eq!(
            response,
            BidResponse::Complete {
                trump_suit: Suit::Diamonds,
                dealer: players[0],
                current_player: players[0],
            }
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["phase"], "PLAYING");
        assert_eq!(json["trumpSuit"], "D");
        assert!(game.state.phase.is_playing());
        assert_eq!(game.current_player(), Some(players[0]));
        let err = game.bid(players[0], BidRequest::skip()).unwrap_err();
        assert!(matches!(
            err,
            RulesError::IllegalAction("bid", GamePhase::Playing)
        ));
    }

    #[test]
    fn test_play_turn_order() {
        let mut game = game(GameOptions::default());
        let players = game.players;
        for &player in &players {
            game.bid(player, BidRequest::skip()).unwrap();
        }
        let east_card = game.state.hand(Seat::East).iter().next().unwrap();
        let err = game.play_cards(players[1], east_card.into()).unwrap_err();
        assert!(matches!(err, RulesError::NotYourTurn(p) if p == players[0]));
        let err = game.play_cards(players[0], Cards::new()).unwrap_err();
        assert!(matches!(err, RulesError::EmptyPlay));
        let north_card = game.state.hand(Seat::North).iter().next().unwrap();
        let response = game.play_cards(players[0], north_card.into()).unwrap();
        assert_eq!(response.current_player, Some(players[1]));
        assert_eq!(response.current_trick.len(), 1);
        assert_eq!(response.completed_trick, None);
        assert_eq!(game.state.hand(Seat::North).len(), 24);
    }

    #[test]
    fn test_pause_resume() {
        let mut game = game(GameOptions::default());
        assert!(game.can_continue_at(1_500));
        game.pause_at("coffee", 2_000).unwrap();
        assert!(game.is_paused());
        assert!(!game.can_continue_at(2_500));
        assert!(matches!(
            game.pause_at("again", 2_500),
            Err(RulesError::AlreadyPaused)
        ));
        // pausing does not block actions
        game.bid_at(game.players[0], BidRequest::skip(), 2_600)
            .unwrap();
        game.resume_at(5_000).unwrap();
        assert_eq!(game.started_at, 4_000);
        assert!(game.can_continue_at(5_000));
        assert!(matches!(game.resume_at(5_000), Err(RulesError::NotPaused)));
        let kinds = game.errors.iter().map(|e| e.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![ErrorKind::AlreadyPaused, ErrorKind::NotPaused]);
    }

    #[test]
    fn test_time_limit() {
        let mut game = game(GameOptions {
            time_limit: 60,
            ..GameOptions::default()
        });
        let snapshot = game.game_state_at(31_000);
        assert!(snapshot.table.can_continue);
        assert_eq!(snapshot.table.elapsed_time, 30_000);
        assert_eq!(snapshot.table.remaining_time, Some(30_000));
        assert!(game.can_continue_at(61_000));
        let snapshot = game.spectator_state_at(61_001);
        assert!(!snapshot.table.can_continue);
        assert!(snapshot.table.is_paused);
        assert_eq!(
            snapshot.table.pause_reason.as_deref(),
            Some(TIME_LIMIT_REASON)
        );
        assert_eq!(snapshot.table.remaining_time, Some(0));
    }

    #[test]
    fn test_spectators() {
        let mut game = game(GameOptions::default());
        let spectator = PlayerId::new();
        game.add_spectator(spectator).unwrap();
        game.add_spectator(spectator).unwrap();
        assert_eq!(game.spectator_state().table.spectator_count, 1);
        game.remove_spectator(spectator);
        game.remove_spectator(spectator);
        assert_eq!(game.spectators.len(), 0);

        let mut closed = self::game(GameOptions {
            allow_spectators: false,
            ..GameOptions::default()
        });
        assert!(matches!(
            closed.add_spectator(spectator),
            Err(RulesError::SpectatingDisabled)
        ));
        assert_eq!(
            closed.game_state().table.last_error.unwrap().kind,
            ErrorKind::SpectatingDisabled
        );
    }

    #[test]
    fn test_snapshots() {
        let mut game = game(GameOptions::default());
        let full = game.game_state_at(1_000);
        assert_eq!(full.players.len(), 4);
        assert_eq!(full.players[2].hand.len(), 25);
        assert_eq!(full.players[2].seat.seat, Seat::South);
        assert_eq!(full.table.bottom_cards_size, 8);
        assert!(full.bottom_cards.is_empty());
        assert_eq!(full.table.end_stats, None);
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["players"][0]["handSize"], 25);
        assert_eq!(json["players"][0]["hand"].as_array().unwrap().len(), 25);
        assert_eq!(json["phase"], "BIDDING");
        assert_eq!(json["currentLevel"], 2);

        let spectator = serde_json::to_value(&game.spectator_state_at(1_000)).unwrap();
        assert_eq!(spectator["players"][0]["handSize"], 25);
        assert!(spectator["players"][0].get("hand").is_none());
        assert!(spectator.get("bottomCards").is_none());
        assert_eq!(spectator["bottomCardsSize"], 8);
    }
}
