use crate::Team;
use serde::{Deserialize, Serialize};

/// Points taken by each team in the current round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scores {
    scores: [i16; 2],
}

impl Scores {
    pub fn new(scores: [i16; 2]) -> Self {
        Self { scores }
    }

    pub fn score(self, team: Team) -> i16 {
        self.scores[team.idx()]
    }

    #[must_use]
    pub fn win(self, team: Team, points: i16) -> Self {
        let mut scores = self.scores;
        scores[team.idx()] += points;
        Self { scores }
    }

    pub fn total(self) -> i16 {
        self.scores[0] + self.scores[1]
    }
}
