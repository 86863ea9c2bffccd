use once_cell::sync::Lazy;
use rand::Rng;
use serde::Deserialize;
use std::{
    error::Error,
    ffi::OsString,
    fs::File,
    io::{BufReader, ErrorKind},
    path::Path,
};
use tractor_api::GameOptions;
use tractor_bot::{Bot, GreedyBot, RandomBot};

pub static CONFIG_PATH: Lazy<OsString> = Lazy::new(|| {
    std::env::args_os()
        .nth(1)
        .unwrap_or_else(|| "simulator.json".into())
});

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Greedy,
    Random,
    /// Picks one of the others per game.
    Mixed,
}

impl Strategy {
    pub fn bot(self) -> Bot {
        match self {
            Strategy::Greedy => Bot::Greedy(GreedyBot::new()),
            Strategy::Random => Bot::Random(RandomBot::new()),
            Strategy::Mixed => {
                if rand::thread_rng().gen_bool(0.5) {
                    Bot::Greedy(GreedyBot::new())
                } else {
                    Bot::Random(RandomBot::new())
                }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Games to play; zero runs until interrupted.
    pub games: u64,
    /// Seeds the deals of game `n` with `"{seed}-{n}"` when set.
    pub seed: Option<String>,
    pub data_dir: String,
    pub games_per_file: u64,
    pub max_rounds: usize,
    pub bots: [Strategy; 4],
    pub options: GameOptions,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            data_dir: "data".to_string(),
            games_per_file: 1000,
            max_rounds: 200,
            bots: [Strategy::Greedy, Strategy::Random, Strategy::Greedy, Strategy::Random],
            options: GameOptions::default(),
        }
    }
}

impl SimulatorConfig {
    /// Reads the config at `path`, falling back to the defaults when there
    /// is no such file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.options.validate()?;
        Ok(config)
    }
}
