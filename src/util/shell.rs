//! User-facing output.
//!
//! Everything the host build system should see goes to stdout, one line per
//! message: the invocation echo, the build command, the copy, and any error.
//! Log events from `tracing` go to stderr and are separate from this.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: errors only
    Quiet,
    /// Default: every status line
    #[default]
    Normal,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Invoked,
    Running,
    Copying,
    Finished,
    Error,
    Help,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Invoked => "Invoked with",
            Status::Running => "Running",
            Status::Copying => "Copying",
            Status::Finished => "Finished",
            Status::Error => "ERROR:",
            Status::Help => "help:",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            // In-progress: bold cyan
            Status::Invoked | Status::Running | Status::Copying => "\x1b[1;36m",
            // Success: bold green
            Status::Finished => "\x1b[1;32m",
            // Error: bold red
            Status::Error => "\x1b[1;31m",
            // Help: bold blue
            Status::Help => "\x1b[1;34m",
        }
    }

    /// Whether this status is still shown in quiet mode.
    fn is_error(&self) -> bool {
        matches!(self, Status::Error | Status::Help)
    }
}

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(verbosity: Verbosity, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Create a shell from CLI flags.
    pub fn from_flags(quiet: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };

        Shell::new(verbosity, color)
    }

    /// Check if shell is in quiet mode.
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Print a status message: `{status} {message}`.
    ///
    /// In quiet mode, only errors and their help lines are printed.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.is_quiet() && !status.is_error() {
            return;
        }

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", self.format_line(status, msg));
        let _ = stdout.flush();
    }

    /// Print an error message.
    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    /// Print a help line following an error.
    pub fn help(&self, msg: impl Display) {
        self.status(Status::Help, msg);
    }

    /// Format a full output line.
    fn format_line(&self, status: Status, msg: impl Display) -> String {
        format!("{} {}", self.format_status(status), msg)
    }

    /// Format a status prefix with optional color.
    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            format!("{}{}\x1b[0m", status.color_code(), text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Verbosity::default(), ColorChoice::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Shell {
        Shell::new(Verbosity::Normal, ColorChoice::Never)
    }

    #[test]
    fn test_color_choice_parse() {
        assert_eq!("auto".parse::<ColorChoice>().unwrap(), ColorChoice::Auto);
        assert_eq!("ALWAYS".parse::<ColorChoice>().unwrap(), ColorChoice::Always);
        assert_eq!("never".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
        assert!("sometimes".parse::<ColorChoice>().is_err());
    }

    #[test]
    fn test_lines_match_host_build_log() {
        let shell = plain();
        assert_eq!(
            shell.format_line(Status::Invoked, "'build_node_bridge --os-name linux'"),
            "Invoked with 'build_node_bridge --os-name linux'"
        );
        assert_eq!(
            shell.format_line(Status::Running, "'cargo build -p libsignal-node'"),
            "Running 'cargo build -p libsignal-node'"
        );
        assert_eq!(shell.format_line(Status::Error, "cargo failed"), "ERROR: cargo failed");
    }

    #[test]
    fn test_colored_status() {
        let shell = Shell::new(Verbosity::Normal, ColorChoice::Always);
        let formatted = shell.format_status(Status::Error);
        assert!(formatted.starts_with("\x1b[1;31m"));
        assert!(formatted.ends_with("\x1b[0m"));
        assert!(formatted.contains("ERROR:"));
    }

    #[test]
    fn test_from_flags() {
        assert!(!Shell::from_flags(false, ColorChoice::Never).is_quiet());
        assert!(Shell::from_flags(true, ColorChoice::Never).is_quiet());
    }

    #[test]
    fn test_quiet_keeps_errors() {
        assert!(Status::Error.is_error());
        assert!(Status::Help.is_error());
        assert!(!Status::Copying.is_error());
    }
}
