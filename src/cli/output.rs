//! Colored terminal output for user-facing status lines.

use colored::Colorize;
use std::io::{self, Write};

/// Writes status lines to the terminal, honoring verbose and quiet modes.
///
/// Progress, success and section lines go to stdout; warnings and errors go
/// to stderr. Quiet mode suppresses everything except errors.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Whether verbose lines are shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    /// Prints a line only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        writeln!(io::stdout(), "{}", message.dimmed())
    }

    /// Prints a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "{} {}", "→".cyan(), message)
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "{} {}", "✓".green().bold(), message)
    }

    /// Prints a warning line.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stderr(), "{} {}", "⚠".yellow().bold(), message.yellow())
    }

    /// Prints an error line, even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr(), "{} {}", "✗".red().bold(), message.red())
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "\n{}", title.bold().underline())
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "   {}", message)
    }
}
