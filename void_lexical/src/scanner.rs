//! Contains the [`Scanner`]: the single pass that splits source text into raw tokens.
//!
//! Whitespace and symbol characters always become one-character tokens of their own. Every other
//! character is accumulated into the token being built, where runs of operator characters (`+=`,
//! `==`, ...) and runs of word characters (`fn`, `x1`, ...) are kept apart. Comments are resolved
//! here; accumulated lexemes are left [`TokenKind::Unclassified`] for the
//! [`classifier`](crate::classifier).

use std::{mem, sync::Arc};

use void_base::{
    diagnostic::{Dummy, Handler},
    source_file::Location,
};

use crate::{
    error::{self, UnterminatedComment},
    tables,
    token::{Token, TokenKind},
};

/// Is an enumeration of the two kinds of comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CommentKind {
    /// Starts with `//` and ends right before the next new line.
    Line,

    /// Starts with `/*` and ends with `*/`.
    Delimited,
}

/// Is an enumeration of what the token being built is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Run {
    Word,
    Operator,
    Comment(CommentKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CharacterClass {
    Whitespace,
    Symbol,
    Operator,
    Word,
}

impl CharacterClass {
    fn of(character: char) -> Self {
        if tables::is_whitespace(character) {
            Self::Whitespace
        } else if tables::is_symbol(character) {
            Self::Symbol
        } else if tables::is_operator_character(character) {
            Self::Operator
        } else {
            Self::Word
        }
    }
}

/// Splits a source text into raw tokens in a single left-to-right pass.
///
/// Every token is located at the last character it contains. Lines start at 1 and the character
/// following a new line is at column 1.
#[derive(Debug)]
pub struct Scanner<'a> {
    source_name: Arc<str>,
    text: &'a str,
    tokens: Vec<Token>,

    current: Token,
    run: Option<Run>,
    comment_start: Option<Location>,

    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given text, stamping `source_name` into every location.
    #[must_use]
    pub fn new(source_name: Arc<str>, text: &'a str) -> Self {
        Self {
            current: Token::empty(source_name.clone()),
            source_name,
            text,
            tokens: Vec::new(),
            run: None,
            comment_start: None,
            line: 1,
            column: 0,
        }
    }

    /// Scans the whole text and returns the raw tokens in source order.
    ///
    /// A `/*` comment left open at the end of the text is reported to the `handler` and emitted
    /// as a comment running to the end of the text.
    #[must_use]
    pub fn scan(mut self, handler: &dyn Handler<error::Error>) -> Vec<Token> {
        for character in self.text.chars() {
            let location = self.advance(character);
            self.step(character, location);
        }

        self.finish(handler)
    }

    /// Moves the position past the given character and returns the location of that character.
    fn advance(&mut self, character: char) -> Location {
        self.column += 1;
        let location = Location::new(self.source_name.clone(), self.line, self.column);

        if character == '\n' {
            self.line += 1;
            self.column = 0;
        }

        location
    }

    fn step(&mut self, character: char, location: Location) {
        if let Some(Run::Comment(kind)) = self.run {
            match kind {
                // the new line is not part of the comment, it is scanned as whitespace below
                CommentKind::Line if character == '\n' => self.flush(),
                CommentKind::Line => {
                    self.append(character, location);
                    return;
                }
                CommentKind::Delimited => {
                    self.append(character, location);

                    if self.closes_delimited_comment() {
                        self.flush();
                    }
                    return;
                }
            }
        }

        match CharacterClass::of(character) {
            CharacterClass::Whitespace => self.emit(TokenKind::Whitespace, character, location),
            CharacterClass::Symbol => self.emit(TokenKind::Symbol, character, location),
            CharacterClass::Operator => self.accumulate(Run::Operator, character, location),
            CharacterClass::Word => self.accumulate(Run::Word, character, location),
        }
    }

    fn append(&mut self, character: char, location: Location) {
        self.current.text.push(character);
        self.current.location = location;
    }

    /// Pushes the token being built, if any, and starts over with an empty one.
    fn flush(&mut self) {
        if !self.current.text.is_empty() {
            let token = mem::replace(&mut self.current, Token::empty(self.source_name.clone()));
            self.tokens.push(token);
        }

        self.run = None;
        self.comment_start = None;
    }

    /// Emits a single character token right after the token being built.
    fn emit(&mut self, kind: TokenKind, character: char, location: Location) {
        self.flush();
        self.tokens
            .push(Token::new(kind, character.to_string(), location));
    }

    fn accumulate(&mut self, run: Run, character: char, location: Location) {
        if self.run != Some(run) {
            self.flush();
            self.run = Some(run);
        }

        self.append(character, location);
        self.detect_comment_start();
    }

    /// Turns the token being built into a comment once it ends with `//` or `/*`.
    ///
    /// Whatever preceded the two opening characters is pushed as a token of its own.
    fn detect_comment_start(&mut self) {
        let kind = if self.current.text.ends_with("//") {
            CommentKind::Line
        } else if self.current.text.ends_with("/*") {
            CommentKind::Delimited
        } else {
            return;
        };

        let mut opening_location = self.current.location.clone();
        opening_location.column -= 1;

        let opening_index = self.current.text.len() - 2;
        if opening_index > 0 {
            let opening = self.current.text.split_off(opening_index);
            let location = self.current.location.clone();

            let mut preceding = mem::replace(
                &mut self.current,
                Token::new(TokenKind::Unclassified, opening, location),
            );

            // operator runs never span lines
            preceding.location.column -= 2;
            self.tokens.push(preceding);
        }

        self.current.kind = TokenKind::Comment;
        self.run = Some(Run::Comment(kind));
        self.comment_start = Some(opening_location);
    }

    /// Checks whether the delimited comment being built ends with a `*/` that does not overlap
    /// its opening `/*`.
    fn closes_delimited_comment(&self) -> bool {
        self.current.text.len() >= 4 && self.current.text.ends_with("*/")
    }

    fn finish(mut self, handler: &dyn Handler<error::Error>) -> Vec<Token> {
        if let (Some(Run::Comment(CommentKind::Delimited)), Some(location)) =
            (self.run, self.comment_start.take())
        {
            let line = self
                .text
                .lines()
                .nth(location.line - 1)
                .unwrap_or_default()
                .to_owned();

            handler.receive(UnterminatedComment { location, line }.into());
        }

        self.flush();
        self.tokens
    }
}

/// Scans the text into raw tokens, discarding diagnostics.
///
/// See [`Scanner::scan`].
#[must_use]
pub fn scan(source_name: impl Into<Arc<str>>, text: &str) -> Vec<Token> {
    Scanner::new(source_name.into(), text).scan(&Dummy)
}

/// Scans the text into raw tokens, reporting diagnostics to the given handler.
///
/// See [`Scanner::scan`].
#[must_use]
pub fn scan_with_handler(
    source_name: impl Into<Arc<str>>,
    text: &str,
    handler: &dyn Handler<error::Error>,
) -> Vec<Token> {
    Scanner::new(source_name.into(), text).scan(handler)
}

#[cfg(test)]
mod tests;
