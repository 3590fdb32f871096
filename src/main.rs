mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    atomic_write, ensure_garden_dir, get_garden_dir, init_local_garden, load_settings, log_file,
    save_settings, settings_file, tasks_file, FileStorage, Settings,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use store::TaskStore;
use ticker::Ticker;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "garden")]
#[command(about = "A keyboard-driven task garden for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .garden directory in the current directory
    Init,
    /// Print a markdown summary of the garden
    Report {
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let garden_dir = init_local_garden()?;
            println!("Initialized garden directory: {}", garden_dir.display());
            println!();
            println!("Garden will now use this local directory for task storage.");
            println!("Run 'garden' to start tending tasks.");
            Ok(())
        }
        Some(Commands::Report { output }) => run_report(output),
        None => run_tui(),
    }
}

fn run_report(output: Option<PathBuf>) -> Result<()> {
    let store = TaskStore::open(Box::new(FileStorage::new(tasks_file()?)));
    let report = report::generate_report(store.tasks(), chrono::Local::now());

    match output {
        Some(path) => {
            atomic_write(&path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report generated: {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    ensure_garden_dir()?;

    let garden_dir = get_garden_dir()?;
    eprintln!("Using garden directory: {}", garden_dir.display());

    if let Err(e) = log_file().and_then(|path| logging::init_logging(&path)) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let settings_path = settings_file()?;
    let settings = load_settings(&settings_path).unwrap_or_else(|e| {
        warn!(error = %e, "settings unreadable, using defaults");
        Settings::default()
    });

    let store = TaskStore::open(Box::new(FileStorage::new(tasks_file()?)));
    let mut app = AppState::new(store, &settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = save_settings(&settings_path, &app.settings()) {
        warn!(error = %e, "failed to save settings");
        eprintln!("Error saving settings: {:#}", e);
    }

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
    }

    info!("garden closed");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut ticker = Ticker::default();

    loop {
        if app.take_redraw() {
            terminal.draw(|f| ui::render(f, app))?;
        }

        if event::poll(ticker.timeout(Instant::now()))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key)? {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if ticker.is_due(Instant::now()) {
            app.tick();
        }
    }
}
