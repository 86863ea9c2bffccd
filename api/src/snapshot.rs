use crate::{
    Bid, Cards, ErrorRecord, GameId, GameOptions, GamePhase, PlayerId, RoundRecord, Scores, Seat,
    Suit, Team, Trick, TrickResult,
};
use serde::Serialize;

/// Everything about a game that every viewer may see.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub game_id: GameId,
    pub phase: GamePhase,
    pub current_player: Option<PlayerId>,
    pub current_level: u8,
    pub trump_suit: Option<Suit>,
    pub scores: Scores,
    pub current_trick: Trick,
    pub last_trick: Option<TrickResult>,
    pub dealer: Option<PlayerId>,
    pub bids: Vec<Bid>,
    pub bottom_cards_size: usize,
    pub round_number: u32,
    pub round_history: Vec<RoundRecord>,
    pub end_stats: Option<EndStats>,
    pub options: GameOptions,
    pub is_paused: bool,
    pub pause_reason: Option<String>,
    pub spectator_count: usize,
    pub elapsed_time: i64,
    pub remaining_time: Option<i64>,
    pub last_error: Option<ErrorRecord>,
    pub can_continue: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub id: PlayerId,
    pub seat: Seat,
    pub team: Team,
    pub hand_size: usize,
    pub is_dealer: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    #[serde(flatten)]
    pub seat: SeatView,
    pub hand: Cards,
}

/// The full state including every hand; callers redact it per viewer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(flatten)]
    pub table: TableView,
    pub players: Vec<PlayerView>,
    pub bottom_cards: Cards,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectatorSnapshot {
    #[serde(flatten)]
    pub table: TableView,
    pub players: Vec<SeatView>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndStats {
    pub final_level: u8,
    pub winning_team: Option<Team>,
    pub rounds_played: usize,
    pub level_progression: Vec<u8>,
    pub dealer_progression: Vec<PlayerId>,
    pub score_history: Vec<Scores>,
    pub total_duration: i64,
}
