mod app;
mod audio;
mod camera;
mod font;
mod input;
mod mesh;
mod renderer;

use anyhow::Context;
use app::App;
use audio::SoundBank;
use clap::Parser;
use game_core::{Config, GameEngine, GameRng, WinningScore};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Classic two-paddle Pong against a computer opponent
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Points needed to win the first match (3, 5 or 7)
    #[arg(long, default_value_t = WinningScore::default())]
    winning_score: WinningScore,

    /// Directory holding paddle_hit.wav, wall_bounce.wav and score.wav
    #[arg(long, default_value = "sounds")]
    sounds_dir: PathBuf,

    /// Run without sound
    #[arg(long)]
    mute: bool,

    /// Seed for serve directions, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(?args, "starting");

    let config = Config::new().with_winning_score(args.winning_score);
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let sounds = if args.mute {
        SoundBank::silent()
    } else {
        SoundBank::load(&args.sounds_dir)
    };

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(GameEngine::new(config, rng), sounds);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;

    if let Some(err) = app.take_error() {
        return Err(err);
    }

    info!(score = ?app.engine().score(), "goodbye");
    Ok(())
}
