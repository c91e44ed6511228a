//! Line-based terminal status display.
//!
//! Renders the status region as plain lines on any writer:
//!
//! ```text
//! Building...
//! ════════════════════════════════════════════════════════════
//!   ○ Researcher  ○ Judge  ○ Builder
//!   → Researching the history of jazz
//!   ● Researcher  ○ Judge  ○ Builder
//!   ✓ Course ready: http://localhost:8080/course.html
//! ```

use std::io::{self, IsTerminal, Write};

use crossterm::style::Stylize;

use crate::stream::Phase;
use crate::traits::StatusDisplay;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const PROGRESS: &str = "→";
    pub const ACTIVE: &str = "●";
    pub const INACTIVE: &str = "○";
}

/// Status display that writes to a terminal (or any writer).
///
/// The phase strip is only redrawn when the highlighted phase changes.
/// Write errors are ignored; the display must never fail the submission.
#[derive(Debug)]
pub struct TerminalStatus<W: Write> {
    out: W,
    color: bool,
    phase: Option<Phase>,
    status: String,
    failed: bool,
}

impl TerminalStatus<io::Stdout> {
    /// Display on stdout, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalStatus<W> {
    /// Create a display writing to `out`.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            phase: None,
            status: String::new(),
            failed: false,
        }
    }

    /// The last status text shown.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The currently highlighted phase.
    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    /// Whether the status region is showing an error.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Consume the display and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn phase_strip(&self) -> String {
        Phase::ALL
            .iter()
            .map(|phase| {
                let active = self.phase == Some(*phase);
                let marker = if active { icons::ACTIVE } else { icons::INACTIVE };
                let label = format!("{} {}", marker, phase.label());
                match (self.color, active) {
                    (false, _) => label,
                    (true, true) => label.bold().green().to_string(),
                    (true, false) => label.dark_grey().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn line(&mut self, text: &str) {
        writeln!(self.out, "  {}", text).ok();
        self.out.flush().ok();
    }
}

impl<W: Write> StatusDisplay for TerminalStatus<W> {
    fn show_progress(&mut self) {
        self.failed = false;
        writeln!(self.out).ok();
        writeln!(self.out, "Building...").ok();
        writeln!(self.out, "{}", "═".repeat(LINE_WIDTH)).ok();
        let strip = self.phase_strip();
        self.line(&strip);
    }

    fn update_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.line(&format!("{} {}", icons::PROGRESS, text));
    }

    fn set_phase(&mut self, phase: Option<Phase>) {
        if self.phase == phase {
            return;
        }
        self.phase = phase;
        let strip = self.phase_strip();
        self.line(&strip);
    }

    fn show_error(&mut self, text: &str) {
        self.status = text.to_string();
        self.failed = true;
        let message = format!("{} {}", icons::FAILURE, text);
        let message = if self.color {
            message.red().to_string()
        } else {
            message
        };
        self.line(&message);
    }

    fn show_complete(&mut self, location: &str) {
        self.status = format!("Course ready: {}", location);
        let message = format!("{} {}", icons::SUCCESS, self.status);
        let message = if self.color {
            message.green().to_string()
        } else {
            message
        };
        self.line(&message);
        writeln!(self.out, "{}", "═".repeat(LINE_WIDTH)).ok();
    }
}
