//! Contains the ANSI escape codes used for styling console output.

use std::fmt::Display;

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
}

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

/// Is implemented by everything that can decorate a displayable object with an escape code.
pub trait Decoration: Copy {
    /// Gets the ANSI escape code that turns the decoration on.
    fn escape_code(self) -> &'static str;

    /// Applies the decoration to the given displayable object.
    fn with<T>(self, display: T) -> Decorated<Self, T> {
        Decorated {
            decoration: self,
            display,
        }
    }
}

impl Decoration for Style {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
        }
    }
}

impl Decoration for Color {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Green => "\x1B[32m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a
/// [`Decoration`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decorated<D, T> {
    /// The decoration applied to the displayable object.
    pub decoration: D,

    /// The displayable object.
    pub display: T,
}

impl<D: Decoration, T: Display> Display for Decorated<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}\x1B[0m",
            self.decoration.escape_code(),
            self.display
        )
    }
}
