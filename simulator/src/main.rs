mod config;

use crate::config::{SimulatorConfig, CONFIG_PATH};
use flate2::{write::GzEncoder, Compression};
use log::{info, warn};
use std::{
    error::Error,
    fs,
    fs::File,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tractor_api::{now_millis, Game, PlayerId, RoundRecord, RulesError, Seat, Seed};
use tractor_bot::Bot;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = SimulatorConfig::load(&*CONFIG_PATH)?;
    info!("simulating with {:?}", config);
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::SeqCst);
        })?;
    }
    fs::create_dir_all(&config.data_dir)?;
    let mut played = 0;
    while !stop.load(Ordering::SeqCst) && (config.games == 0 || played < config.games) {
        let timestamp = now_millis();
        let dir = Path::new(&config.data_dir);
        let partial = dir.join(format!("partial-{}.gz", timestamp));
        let mut writer = Writer::new(&partial)?;
        for _ in 0..config.games_per_file.max(1) {
            let seed = match &config.seed {
                Some(seed) => Seed::chosen(format!("{}-{}", seed, played)),
                None => Seed::random(),
            };
            let history = simulate(&config, seed, &stop)?;
            writer.write(&history)?;
            played += 1;
            if stop.load(Ordering::SeqCst) || played == config.games {
                break;
            }
        }
        let output = writer.encoder.finish()?;
        output.sync_all()?;
        drop(output);
        fs::rename(partial, dir.join(format!("complete-{}.gz", timestamp)))?;
    }
    info!("played {} games", played);
    Ok(())
}

struct Writer {
    encoder: GzEncoder<File>,
}

impl Writer {
    fn new<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let encoder = GzEncoder::new(File::create(path)?, Compression::default());
        Ok(Self { encoder })
    }

    fn write(&mut self, history: &[RoundRecord]) -> Result<(), Box<dyn Error>> {
        bincode::serialize_into(&mut self.encoder, history)?;
        Ok(())
    }
}

/// Plays one game to the end, the round cap or an interrupt, and returns
/// its round history.
fn simulate(
    config: &SimulatorConfig,
    seed: Seed,
    stop: &AtomicBool,
) -> Result<Vec<RoundRecord>, RulesError> {
    let players = (0..4).map(|_| PlayerId::new()).collect::<Vec<_>>();
    let mut game = Game::new(players, config.options.clone(), seed)?;
    let mut bots = config.bots.map(|strategy| strategy.bot());
    while !game.state.phase.is_complete()
        && game.state.history.len() < config.max_rounds
        && !stop.load(Ordering::SeqCst)
    {
        step(&mut game, &mut bots)?;
    }
    match game.end_stats(now_millis()) {
        Some(stats) => info!(
            "game {} won by {:?} after {} rounds",
            game.id, stats.winning_team, stats.rounds_played
        ),
        None => info!(
            "game {} stopped at level {} after {} rounds",
            game.id,
            game.state.level,
            game.state.history.len()
        ),
    }
    Ok(game.state.history)
}

fn step(game: &mut Game, bots: &mut [Bot; 4]) -> Result<(), RulesError> {
    if game.state.phase.is_bidding() {
        for &seat in &Seat::VALUES {
            if game.state.has_bid(seat) {
                continue;
            }
            let player = game.player(seat);
            let request = bots[seat.idx()].bid(seat, &game.state);
            game.bid(player, request)?;
        }
        return Ok(());
    }
    let seat = match game.state.next_actor {
        Some(seat) => seat,
        None => {
            warn!("game {}: nobody to act in {:?}", game.id, game.state.phase);
            return Err(RulesError::IllegalAction("play", game.state.phase));
        }
    };
    let player = game.player(seat);
    let cards = bots[seat.idx()].play(seat, &game.state);
    game.play_cards(player, cards)?;
    Ok(())
}
