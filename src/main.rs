//! cvterm - An interactive terminal-styled CV
//!
//! cvterm shows a prompt where visitors type commands to reveal sections of
//! a CV with a typewriter animation.
//!
//! # Features
//!
//! - **Sections**: One command per CV section (`about`, `experience`, ...)
//! - **Full CV**: `fullcv` walks through every section in order
//! - **Interruptible**: Ctrl+C stops a running animation
//! - **Configurable**: Prompt, commands, content and colors from TOML
//!
//! # Quick Start
//!
//! ```text
//! cvterm                      # Built-in sample CV or ~/.cvterm/config.toml
//! cvterm -c my-cv.toml        # Explicit configuration file
//! cvterm --demo               # Print help and the full CV without a TTY
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Enter | Run command |
//! | Backspace | Delete last character |
//! | Ctrl+C | Interrupt animation |
//! | Esc / Ctrl+D | Quit (when idle) |

mod config;
mod core;
mod ui;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;
use crate::core::CvTerminal;
use crate::ui::{CrosstermSurface, KeyInput, KeyMapper, MemorySurface, NamedKey, Surface};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    /// Configuration file (defaults to ~/.cvterm/config.toml)
    config: Option<PathBuf>,
    /// Headless run printing the transcript
    demo: bool,
    /// Debug-level logging
    verbose: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("cvterm {}", VERSION);
}

fn print_help() {
    eprintln!("cvterm {} - An interactive terminal-styled CV", VERSION);
    eprintln!();
    eprintln!("Usage: cvterm [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <PATH>   Configuration file");
    eprintln!("      --demo            Print help and the full CV, then exit");
    eprintln!("      --verbose         Debug logging");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Enter                 Run command");
    eprintln!("  Backspace             Delete last character");
    eprintln!("  Ctrl+C                Interrupt a running animation");
    eprintln!("  Esc, Ctrl+D           Quit (when no animation is running)");
    eprintln!();
    eprintln!("Configuration: ~/.cvterm/config.toml");
    eprintln!("Log file:      ~/.cvterm/cvterm.log (filter with CVTERM_LOG)");
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config path".to_string());
                }
                options.config = Some(PathBuf::from(&args[i]));
            }
            "--demo" => {
                options.demo = true;
            }
            "--verbose" => {
                options.verbose = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(options)
}

/// Log to a file so nothing interferes with the drawn terminal
fn init_logging(verbose: bool) {
    let log_path = config::data_dir()
        .map(|dir| dir.join("cvterm.log"))
        .unwrap_or_else(|| PathBuf::from("cvterm.log"));

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let filter = EnvFilter::try_from_env("CVTERM_LOG")
            .unwrap_or_else(|_| EnvFilter::new(level.as_str()));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging(options.verbose);
    info!("cvterm {} starting...", VERSION);

    let config = Config::load(options.config.as_deref()).context("Failed to load configuration")?;

    if options.demo {
        return run_demo(&config);
    }
    run_terminal(&config)
}

/// Esc or Ctrl+D
fn is_quit(event: &KeyEvent) -> bool {
    event.code == KeyCode::Esc
        || (event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(event.code, KeyCode::Char('d') | KeyCode::Char('D')))
}

fn run_terminal(config: &Config) -> anyhow::Result<()> {
    let surface = CrosstermSurface::new(config.terminal.clone());
    let mut terminal = CvTerminal::new(&config.cv, &config.addons, surface)
        .context("Failed to open terminal")?;

    let frame_interval = config.terminal.frame_interval();
    let mut next_frame = Instant::now() + frame_interval;

    loop {
        terminal.surface_mut().flush()?;

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    // Only process key press events
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    if !terminal.is_animating() && is_quit(&key_event) {
                        info!("Quit requested");
                        break;
                    }
                    terminal.on_key(KeyMapper::map(&key_event));
                }
                Event::Resize(cols, rows) => {
                    info!("Resize: {}x{}", cols, rows);
                    terminal.on_resize()?;
                }
                Event::FocusGained => terminal.on_focus_change(true),
                Event::FocusLost => terminal.on_focus_change(false),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_frame {
            terminal.tick();
            next_frame = now + frame_interval;
        }
    }

    terminal.surface_mut().flush()?;
    info!("cvterm exiting");
    Ok(())
}

/// Headless run: show help, then the full CV, and print the transcript
fn run_demo(config: &Config) -> anyhow::Result<()> {
    println!("{}", demo_transcript(config)?);
    Ok(())
}

/// Transcript of typing `help` then the full CV command on a memory surface
fn demo_transcript(config: &Config) -> anyhow::Result<String> {
    let mut terminal = CvTerminal::new(&config.cv, &config.addons, MemorySurface::new())?;

    for command in ["help", config.cv.full_cv_command.as_str()] {
        for ch in command.chars() {
            terminal.on_key(KeyInput::char(ch));
        }
        terminal.on_key(NamedKey::Enter.into());

        let mut frames = 0usize;
        while terminal.is_animating() {
            terminal.tick();
            frames += 1;
        }
        info!("Demo: '{}' took {} frames", command, frames);
    }

    Ok(terminal.surface().plain_text())
}
