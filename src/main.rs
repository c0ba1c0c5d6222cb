use std::fs::{self, File};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::controller::{Control, Controller};
use grid_snake::game::GameState;
use grid_snake::renderer;
use grid_snake::score::{default_scores_path, JsonFileStore};
use grid_snake::terminal_input::poll_event;
use grid_snake::terminal_runtime::{cleanup_terminal_best_effort, TerminalSession};
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

/// Upper bound on how long the loop waits for input between frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file overriding board size, speeds and scoring.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is stored.
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Where log output is written.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Do not capture the mouse (disables drag-to-steer).
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_logger(&log_path) {
        eprintln!("Logging disabled, cannot open {}: {error}", log_path.display());
    }

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?,
        None => GameConfig::default(),
    };

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    let store = JsonFileStore::new(cli.scores_file.clone().unwrap_or_else(default_scores_path));
    info!("high score store at {}", store.path().display());
    let controller = Controller::new(state, store);

    let mouse_capture = !cli.no_mouse;
    install_panic_hook(mouse_capture);
    let mut session = TerminalSession::enter(mouse_capture)?;

    let result = run(&mut session, controller);
    if let Err(error) = &result {
        error!("game loop failed: {error}");
    }
    info!("exiting");
    result
}

fn run(session: &mut TerminalSession, mut controller: Controller<JsonFileStore>) -> io::Result<()> {
    loop {
        let now = Instant::now();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &controller.view(now)))?;

        let timeout = controller
            .time_until_tick(now)
            .map_or(FRAME_INTERVAL, |until_tick| until_tick.min(FRAME_INTERVAL));

        if let Some(event) = poll_event(timeout)? {
            if controller.handle_event(event, Instant::now()) == Control::Quit {
                return Ok(());
            }
        }

        controller.poll(Instant::now());
    }
}

fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("grid-snake");
    base.push("grid-snake.log");
    base
}

fn init_logger(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    WriteLogger::init(LevelFilter::Info, Config::default(), file)
        .map_err(|error| io::Error::new(io::ErrorKind::AlreadyExists, error))
}

fn install_panic_hook(mouse_capture: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort(mouse_capture);
        default_hook(panic_info);
    }));
}
