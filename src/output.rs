//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One student's grade summary
#[derive(Debug, Serialize)]
pub struct GradeSummary {
    /// Student id
    pub sid: u32,
    /// "First Last"
    pub name: String,
    /// Letter grade A-F
    pub letter: char,
    /// Overall percentage, 0-100
    pub percent: u32,
    /// Study advisory text
    pub advice: String,
}

/// Roster of a class period with overall grades
#[derive(Debug, Serialize)]
pub struct RosterResult {
    /// Class period description
    pub description: String,
    /// Catalog briefs, one "label: brief" per target
    pub targets: Vec<String>,
    /// One entry per student, in roster order
    pub students: Vec<RosterLine>,
}

/// One roster entry
#[derive(Debug, Serialize)]
pub struct RosterLine {
    /// Student id
    pub sid: u32,
    /// "First Last"
    pub name: String,
    /// Letter grade A-F
    pub letter: char,
    /// Overall percentage, 0-100
    pub percent: u32,
}

/// Result of a report-writing run
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// Number of report files written
    pub written: usize,
    /// Paths of the written reports
    pub paths: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn tinted_letter(letter: char) -> ColoredString {
    let text = letter.to_string();
    match letter {
        'A' | 'B' => text.as_str().green(),
        'C' => text.as_str().yellow(),
        _ => text.as_str().red(),
    }
}

impl GradeSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{} (sid {})", self.name.as_str().bold(), self.sid);
        println!("Overall grade: {} ({}%)\n", tinted_letter(self.letter), self.percent);
        println!("{}", self.advice);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RosterResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}\n", self.description);

        if self.targets.is_empty() {
            println!("No learning targets on file.");
        } else {
            println!("Learning targets:");
            for brief in &self.targets {
                println!("  {brief}");
            }
        }

        if self.students.is_empty() {
            println!("\nNo students on file.");
            return;
        }
        println!("\nStudents:");
        for line in &self.students {
            println!(
                "  {:>4}  {:<30} {} ({}%)",
                line.sid,
                line.name,
                tinted_letter(line.letter),
                line.percent
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ReportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Wrote {} grade report(s):", self.written);
        for path in &self.paths {
            println!("  {path}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
