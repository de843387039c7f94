//! Terminal starfield runner (default binary).
//!
//! Loads the spaceship textures, takes over the terminal and runs the
//! cooperative scheduler against wall-clock time until Ctrl+C.

use std::path::Path;
use std::sync::Once;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use starfield::core::{populate, Canvas, SceneConfig, Scheduler, SimpleRng};
use starfield::input::{pump_keys, Pump};
use starfield::load_textures;
use starfield::term::TerminalRenderer;

const LOG_FILE: &str = "starfield.log";

/// Upper bound on one input wait when no task is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();

    // Read textures before touching the terminal so a failure prints normally.
    let textures = load_textures()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, textures);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => tracing::info!(target: "runtime", "shutdown"),
        Err(err) => tracing::error!(target: "runtime", error = %err, "aborted"),
    }
    result
}

fn run(term: &mut TerminalRenderer, textures: [String; 2]) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
    let seed = clock_seed();
    tracing::info!(target: "runtime", rows, cols, seed, "startup");

    let mut sched = Scheduler::new(Canvas::new(rows, cols), SimpleRng::new(seed));
    populate(&mut sched, textures, SceneConfig::default());

    let start = Instant::now();
    loop {
        sched.run_pass(start.elapsed());
        term.refresh(sched.canvas_mut())?;

        let timeout = sched
            .next_wake()
            .map(|wake| wake.saturating_sub(start.elapsed()))
            .unwrap_or(IDLE_POLL);

        let pump = pump_keys(timeout, |control| {
            sched.push_control(control);
        })?;
        if pump == Pump::Quit {
            return Ok(());
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Log to a file in the working directory; the terminal belongs to the canvas.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = crossterm::execute!(
                std::io::stdout(),
                crossterm::cursor::Show,
                crossterm::terminal::LeaveAlternateScreen
            );
            default_panic(info);
        }));
    });
}
