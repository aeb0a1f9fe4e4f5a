//! Contains the lexical tables: the closed sets of keywords, operators, symbols and whitespace
//! characters of the Void programming language.
//!
//! Every entry belongs to exactly one table.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::token::TokenKind;

const KEYWORDS: &[&str] = &[
    "fn", "struct", "enum", "has", "loop", "in", "if", "break", "continue", "else", "interface",
    "switch", "const", "var", "import", "return", "module",
];

// `=` lives here rather than among the symbols so that it can accumulate into `==`, `+=`, ...
const OPERATORS: &[&str] = &[
    "<", ">", "?", "!", "!=", "==", "and", "or", "xor", "+", "-", "*", "/", "%", "++", "--", "=",
    "+=", "-=", "*=", "/=", "%=",
];

const SYMBOLS: &[&str] = &[";", ":", ",", ".", "{", "}", "[", "]", "(", ")", "->"];

const WHITESPACE: &[&str] = &[" ", "\t", "\n", "\r"];

/// Is an enumeration of the lexical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display)]
#[allow(missing_docs)]
pub enum Table {
    Keyword,
    Operator,
    Symbol,
    Whitespace,
}

lazy_static! {
    static ref TABLE_BY_ENTRY: HashMap<&'static str, Table> = {
        let mut map = HashMap::new();

        for table in Table::iter() {
            for entry in table.entries() {
                let previous = map.insert(*entry, table);
                debug_assert!(
                    previous.is_none(),
                    "`{}` is listed in more than one lexical table",
                    entry.escape_debug()
                );
            }
        }

        map
    };

    static ref OPERATOR_CHARACTERS: HashSet<char> = OPERATORS
        .iter()
        .flat_map(|operator| operator.chars())
        .filter(char::is_ascii_punctuation)
        .collect();
}

impl Table {
    /// Gets every entry of the table.
    #[must_use]
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            Self::Keyword => KEYWORDS,
            Self::Operator => OPERATORS,
            Self::Symbol => SYMBOLS,
            Self::Whitespace => WHITESPACE,
        }
    }

    /// Checks whether the given string is an entry of this table.
    #[must_use]
    pub fn contains(self, string: &str) -> bool { Self::lookup(string) == Some(self) }

    /// Gets the table the given string is an entry of, if any.
    #[must_use]
    pub fn lookup(string: &str) -> Option<Self> { TABLE_BY_ENTRY.get(string).copied() }

    /// Gets the [`TokenKind`] given to lexemes found in this table.
    #[must_use]
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Keyword => TokenKind::Keyword,
            Self::Operator => TokenKind::Operator,
            Self::Symbol => TokenKind::Symbol,
            Self::Whitespace => TokenKind::Whitespace,
        }
    }
}

fn contains_character(table: Table, character: char) -> bool {
    table.contains(character.encode_utf8(&mut [0; 4]))
}

/// Checks whether the character is a whitespace character.
#[must_use]
pub fn is_whitespace(character: char) -> bool { contains_character(Table::Whitespace, character) }

/// Checks whether the character on its own is a symbol.
#[must_use]
pub fn is_symbol(character: char) -> bool { contains_character(Table::Symbol, character) }

/// Checks whether the character appears in any punctuation operator, such as `+` or `=`.
///
/// Runs of these characters are scanned apart from runs of word characters.
#[must_use]
pub fn is_operator_character(character: char) -> bool { OPERATOR_CHARACTERS.contains(&character) }
