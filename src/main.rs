//! Terminal driver: reads keys from stdin, ticks the simulation on a fixed period and
//! redraws the board as text whenever it changes.

use std::collections::VecDeque;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use maze_chase::constants::TICK_PERIOD;
use maze_chase::formatter::TickFormatter;
use maze_chase::game::{Game, GameConfig};
use maze_chase::input::Intent;
use maze_chase::map::render::TextRenderer;
use parking_lot::Mutex;
use tracing::{debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the ghost RNG seed.
const SEED_VAR: &str = "MAZE_CHASE_SEED";

/// Key that quits the driver. Not an intent, since quitting is outside the simulation.
const QUIT_KEY: char = 'q';

/// Intents captured by the input thread, drained at the start of each tick.
type IntentQueue = Arc<Mutex<VecDeque<Intent>>>;

fn init_tracing() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(true)
                .event_format(TickFormatter),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")?;
    Ok(())
}

fn read_seed() -> anyhow::Result<Option<u64>> {
    match env::var(SEED_VAR) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {value:?}")),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Could not read {SEED_VAR}")),
    }
}

/// Reads stdin line by line on a background thread, queueing one intent per key.
fn spawn_input_thread(intents: IntentQueue, quit: Arc<AtomicBool>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new().name("input".into()).spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Failed to read from stdin");
                    break;
                }
            };

            if line.trim().eq_ignore_ascii_case(&QUIT_KEY.to_string()) {
                break;
            }

            let mut queue = intents.lock();
            queue.extend(line.chars().map(Intent::from_key).filter(|intent| *intent != Intent::Ignored));
        }

        debug!("Input closed");
        quit.store(true, Ordering::Relaxed);
    })
}

pub fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = GameConfig {
        seed: read_seed()?,
        ..GameConfig::default()
    };
    let mut game = Game::new(config).context("Could not create game")?;

    let intents: IntentQueue = Arc::default();
    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_thread(Arc::clone(&intents), Arc::clone(&quit)).context("Could not spawn input thread")?;

    let renderer = TextRenderer;
    let mut last_frame = String::new();
    let mut stdout = io::stdout().lock();

    info!(tick_period = ?TICK_PERIOD, "Starting game loop (type keys then Enter, '{QUIT_KEY}' to quit)");

    while !quit.load(Ordering::Relaxed) {
        let start = Instant::now();

        let pending: Vec<Intent> = intents.lock().drain(..).collect();
        for intent in pending {
            game.apply_intent(intent)?;
        }

        game.tick();

        let frame = renderer.render(&game.snapshot());
        if frame != last_frame {
            write!(stdout, "\x1b[2J\x1b[H{frame}")?;
            stdout.flush()?;
            last_frame = frame;
        }

        let elapsed = start.elapsed();
        if elapsed < TICK_PERIOD {
            spin_sleep::sleep(TICK_PERIOD - elapsed);
        } else {
            warn!(behind = ?(elapsed - TICK_PERIOD), "Game loop behind schedule");
        }
    }

    info!(score = game.score(), "Exiting");
    Ok(())
}
