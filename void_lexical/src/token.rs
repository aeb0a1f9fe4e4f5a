//! Is a module containing the [`Token`] type and all of its related types.

use std::{fmt::Display, sync::Arc};

use derive_new::new;
use strum_macros::{Display, EnumIter};
use void_base::source_file::Location;

/// Is an enumeration of every kind a [`Token`] can be classified as.
///
/// [`TokenKind::Identifier`] and [`TokenKind::Literal`] are reserved for a later classification
/// pass and are never produced by this crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter, Display,
)]
#[allow(missing_docs)]
pub enum TokenKind {
    #[default]
    Unclassified,
    Keyword,
    Operator,
    Symbol,
    Identifier,
    Literal,
    Comment,
    Whitespace,
}

/// Represents a lexeme of the source code paired with its kind and location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Token {
    /// Is the kind the token has been classified as.
    pub kind: TokenKind,

    /// Is the exact text of the lexeme.
    pub text: String,

    /// Is the location of the last character contributed to the token.
    pub location: Location,
}

impl Token {
    /// Creates an empty, unclassified token that is about to be built.
    pub(crate) fn empty(source_name: Arc<str>) -> Self {
        Self::new(
            TokenKind::Unclassified,
            String::new(),
            Location::unset(source_name),
        )
    }

    /// Checks whether the token carries no meaning for the later phases, that is, whether it is
    /// a whitespace or a comment.
    #[must_use]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{.kind={}, .text={:?}, .location={}}}",
            self.kind, self.text, self.location
        )
    }
}
