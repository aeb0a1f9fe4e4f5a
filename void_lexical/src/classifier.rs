//! Contains the classification pass run over the output of the [`scanner`](crate::scanner).

use crate::{
    tables::Table,
    token::{Token, TokenKind},
};

/// Gets the kind a lexeme is classified as by looking it up in the lexical tables.
///
/// Lexemes found in no table, including whitespace text, are [`TokenKind::Unclassified`].
#[must_use]
pub fn kind_of(text: &str) -> TokenKind {
    match Table::lookup(text) {
        Some(Table::Whitespace) | None => TokenKind::Unclassified,
        Some(table) => table.token_kind(),
    }
}

/// Classifies every token in place that is neither a whitespace nor a comment.
///
/// The sequence is never resized nor reordered; only the kinds change. Running the pass more than
/// once has no further effect.
pub fn classify(tokens: &mut [Token]) {
    for token in tokens.iter_mut().filter(|token| !token.is_trivia()) {
        token.kind = kind_of(&token.text);
    }
}
