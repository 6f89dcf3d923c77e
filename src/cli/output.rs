use std::fmt;

use colored::Colorize;

use pocket_config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color: bool,
    pub plain_mode: bool,
    pub high_contrast_mode: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.use_color(),
            plain_mode: config.accessibility.plain_output,
            high_contrast_mode: config.accessibility.high_contrast,
        }
    }
}

/// Writes styled messages to stdout according to explicit preferences.
#[derive(Clone, Copy, Debug, Default)]
pub struct Printer {
    prefs: OutputPreferences,
}

impl Printer {
    pub fn new(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn preferences(&self) -> OutputPreferences {
        self.prefs
    }

    pub fn set_preferences(&mut self, prefs: OutputPreferences) {
        self.prefs = prefs;
    }

    pub fn print(&self, kind: MessageKind, message: impl fmt::Display) {
        let formatted = self.format(kind, message);
        match kind {
            MessageKind::Section => println!("\n{formatted}"),
            _ => println!("{formatted}"),
        }
    }

    /// Writes pre-rendered text verbatim.
    pub fn raw(&self, text: &str) {
        print!("{text}");
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.print(MessageKind::Info, message);
    }

    pub fn success(&self, message: impl fmt::Display) {
        self.print(MessageKind::Success, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.print(MessageKind::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.print(MessageKind::Error, message);
    }

    pub fn section(&self, title: impl fmt::Display) {
        self.print(MessageKind::Section, title);
    }

    pub fn format(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();
        let base = match kind {
            MessageKind::Section => format!("=== {} ===", text.trim()),
            MessageKind::Info => text,
            MessageKind::Success => format!("OK: {text}"),
            MessageKind::Warning => format!("WARNING: {text}"),
            MessageKind::Error => format!("ERROR: {text}"),
        };

        if !self.prefs.color || self.prefs.plain_mode {
            return base;
        }

        if self.prefs.high_contrast_mode {
            return match kind {
                MessageKind::Info => base,
                _ => base.bold().to_string(),
            };
        }

        match kind {
            MessageKind::Success => base.bright_green().to_string(),
            MessageKind::Warning => base.bright_yellow().to_string(),
            MessageKind::Error => base.bright_red().to_string(),
            MessageKind::Section => base.bold().to_string(),
            MessageKind::Info => base,
        }
    }
}
