//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Decoration, Style};

use crate::source_file::Location;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints a single line of source code and points at the
/// column of the given [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceLineDisplay<'a, T> {
    /// The location to point at.
    pub location: &'a Location,

    /// The full text of the line the location is on (without its line terminator).
    pub line: &'a str,

    /// The help message to be displayed under the marker.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceLineDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line_number = self.location.line.to_string();
        let gutter = " ".repeat(line_number.len());
        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        writeln!(
            f,
            "{gutter}{} {}:{}:{}",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.location.source_name,
            self.location.line,
            self.location.column
        )?;
        writeln!(f, "{gutter} {pipe}")?;

        write!(
            f,
            "{} {pipe} ",
            Style::Bold.with(Color::Cyan.with(&line_number))
        )?;
        for character in self.line.chars() {
            // tabs are expanded so the marker below stays aligned
            if character == '\t' {
                write!(f, "    ")?;
            } else if character != '\r' {
                write!(f, "{character}")?;
            }
        }
        writeln!(f)?;

        write!(f, "{gutter} {pipe} ")?;
        for character in self
            .line
            .chars()
            .take(self.location.column.saturating_sub(1))
        {
            write!(f, "{}", if character == '\t' { "    " } else { " " })?;
        }
        write!(f, "{}", Style::Bold.with(Color::Red.with("^")))?;

        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }

        writeln!(f)
    }
}
