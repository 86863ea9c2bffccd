use crate::{now_millis, Game, GameId, GameOptions, PlayerId, RulesError, Seat, Seed};
use std::collections::HashMap;

/// Four seats waiting to be filled. Players take seats in join order.
#[derive(Debug)]
pub struct Room {
    pub id: GameId,
    players: Vec<PlayerId>,
    game: Option<Game>,
}

impl Room {
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            players: Vec::with_capacity(4),
            game: None,
        }
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn add_player(&mut self, player: PlayerId) -> Result<Seat, RulesError> {
        if self.players.contains(&player) {
            return Err(RulesError::AlreadySeated(player));
        }
        if self.is_ready() {
            return Err(RulesError::RoomFull(self.id));
        }
        self.players.push(player);
        Ok(Seat::VALUES[self.players.len() - 1])
    }

    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|&id| id != player);
        self.players.len() != before
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_ready(&self) -> bool {
        self.players.len() == 4
    }

    pub fn is_started(&self) -> bool {
        self.game.is_some()
    }

    pub fn start_game(&mut self, options: GameOptions, seed: Seed) -> Result<&mut Game, RulesError> {
        if !self.is_ready() {
            return Err(RulesError::NotEnoughPlayers(self.players.len()));
        }
        let game = Game::new_at(self.id, self.players.clone(), options, seed, now_millis())?;
        Ok(self.game.insert(game))
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }
}

#[derive(Debug, Default)]
pub struct Rooms {
    rooms: HashMap<GameId, Room>,
}

impl Rooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> GameId {
        let id = GameId::new();
        self.rooms.insert(id, Room::new(id));
        id
    }

    pub fn get(&self, id: GameId) -> Result<&Room, RulesError> {
        self.rooms.get(&id).ok_or(RulesError::RoomNotFound(id))
    }

    pub fn get_mut(&mut self, id: GameId) -> Result<&mut Room, RulesError> {
        self.rooms.get_mut(&id).ok_or(RulesError::RoomNotFound(id))
    }

    pub fn remove(&mut self, id: GameId) -> Result<Room, RulesError> {
        self.rooms.remove(&id).ok_or(RulesError::RoomNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_seats_in_join_order() {
        let mut room = Room::new(GameId::new());
        let seats = (0..4)
            .map(|_| room.add_player(PlayerId::new()).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(seats, Seat::VALUES.to_vec());
        assert!(room.is_ready());
        let err = room.add_player(PlayerId::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RoomFull);
    }

    #[test]
    fn test_already_seated() {
        let mut room = Room::new(GameId::new());
        let player = PlayerId::new();
        room.add_player(player).unwrap();
        assert!(matches!(
            room.add_player(player),
            Err(RulesError::AlreadySeated(p)) if p == player
        ));
        assert!(room.remove_player(player));
        assert!(!room.remove_player(player));
        assert_eq!(room.player_count(), 0);
    }

    #[test]
    fn test_start_game() {
        let mut room = Room::new(GameId::new());
        room.add_player(PlayerId::new()).unwrap();
        assert!(matches!(
            room.start_game(GameOptions::default(), Seed::random()),
            Err(RulesError::NotEnoughPlayers(1))
        ));
        for _ in 0..3 {
            room.add_player(PlayerId::new()).unwrap();
        }
        let id = room.id;
        let game = room
            .start_game(GameOptions::default(), Seed::chosen("room"))
            .unwrap();
        assert_eq!(game.id, id);
        assert!(game.state.phase.is_bidding());
        assert!(room.is_started());
        assert_eq!(room.game().unwrap().players.to_vec(), room.players().to_vec());
    }

    #[test]
    fn test_rooms() {
        let mut rooms = Rooms::new();
        assert!(rooms.is_empty());
        let id = rooms.create();
        rooms.get_mut(id).unwrap().add_player(PlayerId::new()).unwrap();
        assert_eq!(rooms.get(id).unwrap().player_count(), 1);
        let missing = GameId::new();
        assert_eq!(rooms.get(missing).unwrap_err().kind(), ErrorKind::RoomNotFound);
        assert_eq!(rooms.remove(id).unwrap().id, id);
        assert!(matches!(rooms.remove(id), Err(RulesError::RoomNotFound(_))));
    }
}
