//! Contains the [`TokenStream`] struct, the final output of the lexical analysis phase.

use std::{fmt::Display, sync::Arc};

use derive_more::Deref;
use void_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{classifier, error, scanner, token::Token};

/// Is a list of classified [`Token`]s in source order.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the content of the given source file.
    ///
    /// The tokens are located within the [`SourceFile::name`] of the file.
    #[must_use]
    pub fn tokenize(source_file: &SourceFile, handler: &dyn Handler<error::Error>) -> Self {
        Self::tokenize_text(source_file.name().clone(), source_file.content(), handler)
    }

    /// Tokenizes the given text: scans it into raw tokens and then classifies them.
    #[must_use]
    pub fn tokenize_text(
        source_name: impl Into<Arc<str>>,
        text: &str,
        handler: &dyn Handler<error::Error>,
    ) -> Self {
        let mut tokens = scanner::scan_with_handler(source_name, text, handler);
        classifier::classify(&mut tokens);

        Self { tokens }
    }

    /// Gets an iterator over the tokens that are neither whitespaces nor comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }

    /// Dissolves this struct into its list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{token}")?;
        }

        Ok(())
    }
}
