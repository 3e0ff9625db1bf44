use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

use taskhint::app::App;
use taskhint::config::{self, Config};
use taskhint::logging;
use taskhint::server::ServerEndpoint;
use taskhint::session::{SessionReporter, SessionTimer};
use taskhint::suggest::{SuggestClient, spawn_worker};
use taskhint::timeline::{TaskReader, Timeline};

/// How long to wait for terminal input before draining suggestions
const TICK: Duration = Duration::from_millis(50);

/// Task entry with inline autocomplete from a task server
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the task server (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file with existing tasks to show on the timeline
    #[arg(long, value_name = "PATH")]
    tasks: Option<PathBuf>,

    /// Page name reported with the session time
    #[arg(long, value_name = "NAME")]
    page: Option<String>,

    /// Do not report session time on exit
    #[arg(long)]
    no_track: bool,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Err(e) = logging::init(args.log_file.as_deref()) {
        eprintln!("Warning: could not open log file: {}", e);
    }

    // Everything that can fail on bad input happens before the terminal is taken over
    let config = load_config(&args)?;
    let server = ServerEndpoint::from_config(&config.server)?;
    let timeline = match &args.tasks {
        Some(path) => Timeline::new(TaskReader::read_tasks(path)?),
        None => Timeline::default(),
    };
    log::info!(
        "Starting against {} with {} task(s)",
        server.base(),
        timeline.entries().len()
    );

    let timer = config
        .tracking
        .enabled
        .then(|| SessionTimer::start(config.tracking.page.clone()));

    let mut app = App::new(&config, timeline);
    let worker = if config.autocomplete.enabled {
        start_worker(&server, &mut app)
    } else {
        None
    };

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let _ = execute!(stdout(), EnableBracketedPaste);

    let result = run(terminal, &mut app);

    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    app.shutdown_worker();
    if let Some(handle) = worker {
        let _ = handle.join();
    }

    if let Some(timer) = timer {
        report_session(&server, &timer);
    }

    result?;

    if let Some(title) = &app.submitted {
        println!("{}", title);
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(TICK)?;
        app.poll_suggestions();

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// An explicit `--config` must be valid; the default location falls back to defaults
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_config_file(path)?,
        None => {
            let result = config::load_config();
            if let Some(warning) = result.warning {
                log::warn!("{}", warning);
            }
            result.config
        }
    };

    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }
    if let Some(page) = &args.page {
        config.tracking.page = page.clone();
    }
    if args.no_track {
        config.tracking.enabled = false;
    }
    Ok(config)
}

/// Spawn the suggestion worker and connect it to the app
///
/// Autocomplete is simply unavailable if this fails; task entry still works.
fn start_worker(server: &ServerEndpoint, app: &mut App) -> Option<JoinHandle<()>> {
    let client = match SuggestClient::new(server) {
        Ok(client) => client,
        Err(e) => {
            log::warn!("Autocomplete disabled: {}", e);
            return None;
        }
    };

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    match spawn_worker(client, request_rx, response_tx) {
        Ok(handle) => {
            app.connect_worker(request_tx, response_rx);
            Some(handle)
        }
        Err(e) => {
            log::warn!("Autocomplete disabled, worker failed to start: {}", e);
            None
        }
    }
}

fn report_session(server: &ServerEndpoint, timer: &SessionTimer) {
    let report = timer.report();
    match SessionReporter::new(server).and_then(|reporter| reporter.send_blocking(&report)) {
        Ok(()) => log::info!("Reported {} ms on {}", report.time_spent, report.page),
        Err(e) => log::warn!("Could not report session time: {}", e),
    }
}
