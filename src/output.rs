//! # Output Configuration
//!
//! Controls how the CLI decorates its status lines. Colour is used only when
//! the user and the terminal both allow it:
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Without colour, markers fall back to bracketed plain text such as `[OK]`.

use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether styled markers should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` are honoured as given; anything else detects
    /// support from the environment and the terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Render a status marker.
    pub fn marker(&self, marker: Marker) -> String {
        if !self.use_color {
            return marker.plain().to_string();
        }
        // Styled regardless of console's own terminal detection
        let symbol = style(marker.symbol()).force_styling(true);
        match marker {
            Marker::Ok => symbol.green().to_string(),
            Marker::Warn => symbol.yellow().to_string(),
            Marker::Err => symbol.red().bold().to_string(),
            Marker::Info | Marker::Scan => symbol.cyan().to_string(),
        }
    }

    /// A status line: marker, space, message.
    pub fn line(&self, marker: Marker, message: impl std::fmt::Display) -> String {
        format!("{} {}", self.marker(marker), message)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Ok,
    Warn,
    Err,
    Info,
    Scan,
}

impl Marker {
    fn symbol(self) -> &'static str {
        match self {
            Marker::Ok => "✔",
            Marker::Warn => "⚠",
            Marker::Err => "✘",
            Marker::Info => "ℹ",
            Marker::Scan => "🔍",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Marker::Ok => "[OK]",
            Marker::Warn => "[WARN]",
            Marker::Err => "[ERR]",
            Marker::Info => "[INFO]",
            Marker::Scan => "[SCAN]",
        }
    }
}
