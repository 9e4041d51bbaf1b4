//! Configuration and CV content for cvterm.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.cvterm/config.toml`
//! - A built-in sample CV used when no configuration file exists
//! - Validation of the command vocabulary against the CV content
//!
//! # Configuration File
//!
//! ```toml
//! [terminal]
//! frame_interval_ms = 16
//! cursor_blink = true
//!
//! [terminal.theme]
//! foreground = { r = 0, g = 255, b = 0 }
//! background = { r = 0, g = 0, b = 0 }
//! cursor = { r = 0, g = 255, b = 0 }
//!
//! [addons]
//! fit = true
//! auto_fit = true
//!
//! [cv]
//! prompt = "root > "
//! full_cv_command = "fullcv"
//! commands = ["about", "contact", "fullcv", "help"]
//! sections = ["about", "contact"]
//!
//! [cv.content]
//! about = ["Name: Jane Doe", "Job: Systems engineer"]
//! contact = ["GitHub: https://github.com/janedoe"]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::command::HELP_COMMAND;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("No CV content for section '{0}'")]
    MissingSection(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Upper bound for the animation frame interval
const MAX_FRAME_INTERVAL_MS: u64 = 1000;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering surface options
    pub terminal: TerminalConfig,
    /// Surface extensions
    pub addons: AddonsConfig,
    /// CV content and vocabulary
    pub cv: CvConfig,
}

/// Rendering surface options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Delay between two animation frames, 1..=1000 ms
    pub frame_interval_ms: u64,
    pub cursor_blink: bool,
    pub theme: Theme,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            cursor_blink: true,
            theme: Theme::default(),
        }
    }
}

impl TerminalConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.clamp(1, MAX_FRAME_INTERVAL_MS))
    }
}

/// Surface extensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonsConfig {
    /// Refit the surface on resize
    pub fit: bool,
    /// Fit once while installing extensions
    pub auto_fit: bool,
}

impl Default for AddonsConfig {
    fn default() -> Self {
        Self {
            fit: true,
            auto_fit: true,
        }
    }
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Terminal colors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Green phosphor
        Self {
            foreground: Color::new(0, 255, 0),
            background: Color::new(0, 0, 0),
            cursor: Color::new(0, 255, 0),
        }
    }
}

/// CV content and command vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CvConfig {
    /// Text shown before user input
    pub prompt: String,
    /// Banner printed once at startup
    pub welcome: Vec<String>,
    /// Command that walks through every section
    pub full_cv_command: String,
    /// Known commands, in help listing order
    pub commands: Vec<String>,
    /// Sections in full CV order
    pub sections: Vec<String>,
    /// Section name -> lines
    pub content: HashMap<String, Vec<String>>,
}

impl Default for CvConfig {
    fn default() -> Self {
        let content = [
            (
                "about",
                vec![
                    "Name: Jane Doe",
                    "Job: Systems engineer",
                    "I build terminal tools, parsers and network services.",
                ],
            ),
            (
                "experience",
                vec![
                    "Backend engineer | Example Corp (2021 - today)",
                    "Location: Remote",
                    "• Streaming ingestion pipeline",
                    "• On-call and release tooling",
                    "Developer | Sample Labs (2018 - 2021)",
                    "Location: Paris",
                    "• Internal CRM features",
                ],
            ),
            (
                "education",
                vec!["MSc Computer Science", "BSc Mathematics"],
            ),
            (
                "contact",
                vec![
                    "GitHub: https://github.com/janedoe",
                    "Email: jane@example.com",
                ],
            ),
        ]
        .into_iter()
        .map(|(name, lines)| {
            (
                name.to_string(),
                lines.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();

        Self {
            prompt: "root > ".to_string(),
            welcome: vec![
                "Hello There...".to_string(),
                "Type 'help' to see available commands.".to_string(),
            ],
            full_cv_command: "fullcv".to_string(),
            commands: ["about", "experience", "education", "contact", "fullcv", "help"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            sections: ["about", "experience", "education", "contact"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            content,
        }
    }
}

impl CvConfig {
    /// Lines for a section; empty if the section has no content
    pub fn lines(&self, section: &str) -> &[String] {
        self.content.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that every section key the terminal can reach has content
    pub fn validate(&self) -> Result<()> {
        if self.prompt.is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }

        let section_commands = self
            .commands
            .iter()
            .filter(|c| c.as_str() != HELP_COMMAND && **c != self.full_cv_command);

        for name in section_commands.chain(self.sections.iter()) {
            if !self.content.contains_key(name) {
                return Err(ConfigError::MissingSection(name.clone()));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location when `path` is `None`. A missing default file yields the
    /// built-in configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::get_config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.cv.validate()?;
        Ok(config)
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("config.toml"))
    }
}

/// `~/.cvterm`
pub fn data_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".cvterm"))
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
