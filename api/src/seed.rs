use crate::{Card, Shuffle};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Seed {
    Chosen { value: String },
    Random { value: String },
}

impl Seed {
    pub fn chosen<S: Into<String>>(value: S) -> Self {
        Seed::Chosen {
            value: value.into(),
        }
    }

    pub fn random() -> Self {
        Seed::Random {
            value: Uuid::new_v4().to_string(),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Seed::Chosen { value } => value,
            Seed::Random { value } => value,
        }
    }

    /// Every round of a game shuffles from its own digest of the seed.
    pub fn round_bytes(&self, round: u32) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.value().as_bytes());
        hasher.update(round.to_le_bytes());
        hasher.finalize().into()
    }
}

impl Shuffle for Seed {
    fn shuffle(&mut self, round: u32, deck: &mut [Card]) {
        let mut rng = ChaCha20Rng::from_seed(self.round_bytes(round));
        deck.shuffle(&mut rng);
    }
}
