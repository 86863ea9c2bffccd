mod bid;
mod card;
mod cards;
mod deck;
mod error;
mod event;
mod game;
mod game_phase;
mod game_state;
mod options;
mod pattern;
mod rank;
mod room;
mod round;
mod scores;
mod seat;
mod seed;
mod snapshot;
mod suit;
mod suits;
mod trick;
mod types;

pub use bid::*;
pub use card::*;
pub use cards::*;
pub use deck::*;
pub use error::*;
pub use event::*;
pub use game::*;
pub use game_phase::*;
pub use game_state::*;
pub use options::*;
pub use pattern::*;
pub use rank::*;
pub use room::*;
pub use round::*;
pub use scores::*;
pub use seat::*;
pub use seed::*;
pub use snapshot::*;
pub use suit::*;
pub use suits::*;
pub use trick::*;
pub use types::*;
