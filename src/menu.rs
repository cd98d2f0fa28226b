// ═══════════════════════════════════════════════════════════════════════════════
// 📦 menu.rs - Main Menu (Simple)
// ═══════════════════════════════════════════════════════════════════════════════
// قائمة بسيطة: تصفح مجلد البيانات أو رفع ملفات CSV
// Simple menu: browse the data folder or upload CSV files
// ═══════════════════════════════════════════════════════════════════════════════

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

/// Menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BrowseDirectory,
    UploadFiles,
    Quit,
}

/// Show main menu and get choice
pub fn show_menu(data_dir: &Path) -> io::Result<MenuChoice> {
    // Make sure terminal is in normal mode first
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();

    // Clear screen
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    // Print menu
    println!();
    println!("  ╔═══════════════════════════════════════════════════╗");
    println!("  ║                                                   ║");
    println!("  ║   💧 PIPE-TUI - Vibration & Power Viewer          ║");
    println!("  ║                                                   ║");
    println!("  ╠═══════════════════════════════════════════════════╣");
    println!("  ║                                                   ║");
    println!("  ║   [1] 📁 Browse    - Scan the data folder         ║");
    println!("  ║                                                   ║");
    println!("  ║   [2] 📤 Upload    - Pick CSV files to view       ║");
    println!("  ║                                                   ║");
    println!("  ║   [Q] 🚪 Quit                                     ║");
    println!("  ║                                                   ║");
    println!("  ╚═══════════════════════════════════════════════════╝");
    println!();

    print_dataset_help();

    println!();
    println!("  📋 Data folder: {}", data_dir.display());
    println!();
    println!("  Press 1, 2, or Q:");
    stdout.flush()?;

    // Enable raw mode for key detection
    enable_raw_mode()?;

    // Clear any pending events
    while event::poll(Duration::from_millis(100)).unwrap_or(false) {
        let _ = event::read();
    }

    // Wait for valid key
    let choice = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Ok(Event::Key(key)) = event::read() {
                // Only handle Press events (not Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('1') => break MenuChoice::BrowseDirectory,
                    KeyCode::Char('2') => break MenuChoice::UploadFiles,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break MenuChoice::Quit,
                    _ => continue,
                }
            }
        }
    };

    // Back to normal mode
    disable_raw_mode()?;

    Ok(choice)
}

/// Describe the dataset file conventions
fn print_dataset_help() {
    println!("  ─────────────────────────────────────────────────────");
    println!("  Vibration files  MXXXXL.csv");
    println!("    columns 2-4: acceleration X, Y, Z");
    println!("  Power files      MXXXXL_power.csv");
    println!("    column 2:    power (W)");
    println!("  XXXX = flow rate, L = sample letter.");
    println!("  A central window of both files is plotted.");
    println!("  ─────────────────────────────────────────────────────");
}
