use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use star_catcher::display::{self, Viewport};
use star_catcher::input::{self, Signal};
use star_catcher::{Game, GameConfig};

/// Redraw pace between ticks, so pointer motion and popups stay responsive.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(author, version, about = "Catch the falling stars in your terminal", long_about = None)]
struct Cli {
    /// JSON file overriding any of the default game settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for a reproducible round sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG, default `info`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so logs go to a file or nowhere.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let rng = match cli.seed {
        Some(seed) => {
            log::info!("Seeded RNG: {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, rng)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    let result = enter_screen(&mut out).and_then(|()| play(&mut out, &mut game));

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn enter_screen<W: Write>(out: &mut W) -> Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;
    Ok(())
}

/// Spawn the input reader and run the loop until the player quits.
fn play<W: Write>(out: &mut W, game: &mut Game<StdRng>) -> Result<()> {
    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    run(out, game, &rx)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drain input, tick on the fixed schedule while playing, expire popups on
/// the wall clock, redraw. Returns when the player quits.
fn run<W: Write>(out: &mut W, game: &mut Game<StdRng>, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let interval = game.tick_interval();
    let mut next_tick: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();
        let (cols, rows) = terminal::size()?;
        let viewport = Viewport::new(cols, rows, game.config().field_width, game.config().field_height);

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            match input::translate(&event, &viewport) {
                Some(Signal::Quit) => return Ok(()),
                Some(Signal::Activate) => {
                    game.activate();
                }
                Some(Signal::PointerMoved(x)) => {
                    game.pointer_moved(x);
                }
                None => {}
            }
        }

        // ── Fixed-interval ticks, only while playing ──────────────────────────
        let now = Instant::now();
        if game.is_playing() {
            // First tick of a round runs immediately.
            let due = next_tick.get_or_insert(now);
            if now >= *due {
                game.tick(now);
                *due += interval;
                if *due < now {
                    // Fell behind (e.g. terminal stalled); resync instead of bursting.
                    *due = now + interval;
                }
            }
        }
        if !game.is_playing() {
            next_tick = None;
        }

        game.expire_popups(now);
        display::render(out, &game.snapshot(), &viewport)?;

        let wake = [
            Some(frame_start + FRAME),
            next_tick,
            game.popups().next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(frame_start + FRAME);
        let now = Instant::now();
        if wake > now {
            thread::sleep(wake - now);
        }
    }
}
