mod display;

use std::error::Error;
use std::fs::File;
use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Print,
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dino_game::compute::{init_state, jump, restart, scene, tick};
use dino_game::config::TICKS_PER_SECOND;
use dino_game::mask::Masks;
use dino_game::settings::Settings;
use dino_game::sprites::{Frame, SpriteSheet};

const FRAME: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// Commands the loop acts on.  Everything else on the keyboard is ignored.
enum Command {
    Jump,
    Restart,
    Quit,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Jump)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal owns stdout/stderr while playing, so log lines only go to a
/// file, and only when one is configured.
fn init_logging(settings: &Settings) {
    let Some(path) = &settings.log_file else {
        return;
    };
    match File::create(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!("cannot open log file {}: {}", path.display(), err),
    }
}

// ── Pacing ────────────────────────────────────────────────────────────────────

/// Time left before tick `frame` is due, measured from the start of the loop.
/// Ticks are scheduled against the tick counter rather than the previous
/// frame, so a slow frame does not push every later one back.
fn time_until_tick(elapsed: Duration, frame: u64) -> Duration {
    let due = FRAME.saturating_mul(u32::try_from(frame).unwrap_or(u32::MAX));
    due.saturating_sub(elapsed)
}

// ── Sound ─────────────────────────────────────────────────────────────────────

/// Ring the terminal bell unless muted.
fn play_cue<W: Write>(out: &mut W, muted: bool) -> std::io::Result<()> {
    if !muted {
        out.queue(Print('\x07'))?;
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Handle input → advance one tick → render, at `TICKS_PER_SECOND`.
/// Returns when the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    masks: &Masks,
    rng: &mut impl Rng,
    settings: &Settings,
) -> std::io::Result<()> {
    let mut state = init_state(rng);
    log::info!("New run, first obstacle {:?}", state.active);
    let started = Instant::now();

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            match command_for(code, modifiers) {
                Some(Command::Jump) => state = jump(&state),
                Some(Command::Restart) => state = restart(&state, rng),
                Some(Command::Quit) => return Ok(()),
                None => {}
            }
        }

        state = tick(&state, masks, rng);

        display::render(out, &scene(&state), masks, terminal::size()?)?;
        for cue in std::mem::take(&mut state.cues) {
            log::debug!("Tick {}: {:?}", state.frame, cue);
            play_cue(out, settings.muted)?;
        }
        out.flush()?;

        thread::sleep(time_until_tick(started.elapsed(), state.frame));
    }
}

// ── Terminal session ──────────────────────────────────────────────────────────

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W) {
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Raw mode, alternate screen, input thread and the game loop.  The caller
/// restores the terminal whatever this returns.
fn run_session<W: Write>(
    out: &mut W,
    masks: &Masks,
    rng: &mut impl Rng,
    settings: &Settings,
) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    enter_screen(out)?;

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

    game_loop(out, &rx, masks, rng, settings)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    let (settings, warnings) = Settings::from_env();
    init_logging(&settings);
    log::info!("Starting with {:?}", settings);
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    // A broken sheet is fatal and must surface before raw mode hides it.
    let sheet = match &settings.sheet_path {
        Some(path) => SpriteSheet::load(path)?,
        None => SpriteSheet::embedded()?,
    };
    log::info!("Sprite sheet is {}x{} pixels", sheet.width(), sheet.height());
    let masks = Masks::from_sheet(&sheet);
    for frame in Frame::ALL {
        let mask = masks.get(frame);
        log::debug!(
            "{:?} mask {}x{}, {} opaque pixels",
            frame,
            mask.width(),
            mask.height(),
            mask.count()
        );
    }

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = BufWriter::new(stdout());
    let result = run_session(&mut out, &masks, &mut rng, &settings);
    leave_screen(&mut out);

    if let Err(err) = &result {
        log::error!("Terminal session failed: {}", err);
    }
    result?;
    log::info!("Bye");
    Ok(())
}
