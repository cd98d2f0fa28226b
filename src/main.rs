// main.rs - Application Entry Point
mod app;
mod config;
mod error;
mod logging;
mod menu;
mod pairing;
mod signal;
mod source;
mod state;
mod ui;
mod window;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use crate::app::{pick_csv_files, App};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::menu::{show_menu, MenuChoice};
use crate::source::{DirectorySource, FileSource, UploadSource};

#[derive(Parser, Debug)]
#[command(name = "pipe-tui")]
#[command(about = "Water pipe vibration & power CSV viewer")]
#[command(version)]
struct CliArgs {
    /// Folder holding M<digits><letter>.csv and M<digits><letter>_power.csv
    #[arg(long, env = "PIPE_TUI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Initial window size in samples (added to the selector if missing)
    #[arg(short, long)]
    window: Option<usize>,

    /// TOML config file (default: ./pipe_tui.toml if present)
    #[arg(long, env = "PIPE_TUI_CONFIG")]
    config: Option<PathBuf>,

    /// Log file (default: pipe_tui.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Skip the menu and open this source directly
    #[arg(long, value_enum)]
    source: Option<SourceMode>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SourceMode {
    Directory,
    Upload,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config = ViewerConfig::load(args.config.as_deref())?
        .with_overrides(args.data_dir, args.window, args.log_file)
        .validated()?;

    logging::init_logging(&config.log_file)?;
    info!("Starting pipe-tui, data folder {}", config.data_dir.display());

    if let Some(mode) = args.source {
        return run_session(mode, &config).map_err(|e| e.into());
    }

    loop {
        // Small delay to ensure terminal is ready
        std::thread::sleep(std::time::Duration::from_millis(100));

        let choice = match show_menu(&config.data_dir) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        let mode = match choice {
            MenuChoice::BrowseDirectory => SourceMode::Directory,
            MenuChoice::UploadFiles => SourceMode::Upload,
            MenuChoice::Quit => {
                println!("Goodbye!");
                break;
            }
        };

        if let Err(e) = run_session(mode, &config) {
            error!("Session failed: {}", e);
            eprintln!("Error: {}", e);
            println!("Press Enter to continue...");
            let mut input = String::new();
            let _ = io::stdin().read_line(&mut input);
        }
    }
    Ok(())
}

/// Build the source for one session and run the viewer on it
///
/// An upload source lives only for this call; its temp folder is removed
/// when the session ends.
fn run_session(mode: SourceMode, config: &ViewerConfig) -> Result<(), ViewerError> {
    let source: Box<dyn FileSource> = match mode {
        SourceMode::Directory => Box::new(DirectorySource::new(&config.data_dir)),
        SourceMode::Upload => {
            let mut upload = UploadSource::new()?;
            match pick_csv_files() {
                Ok(paths) => {
                    upload.ingest(&paths)?;
                }
                // Start empty, U uploads later
                Err(ViewerError::NoFileSelected) => {}
                Err(e) => return Err(e),
            }
            Box::new(upload)
        }
    };

    let mut app = App::new(source, config.window_choices.clone(), config.default_window_index());
    app.refresh();

    run_viewer(&mut app).map_err(|e| ViewerError::io("terminal", e))
}

fn run_viewer(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app_loop(&mut terminal, app);

    // Cleanup - important to do in correct order!
    // تنظيف - مهم بالترتيب الصحيح!
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Clear any pending events
    // تنظيف الأحداث المعلقة
    while crossterm::event::poll(std::time::Duration::from_millis(10))? {
        let _ = crossterm::event::read();
    }

    result
}

fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, &app.state))?;
        if app.handle_events()? {
            break;
        }
    }
    Ok(())
}
