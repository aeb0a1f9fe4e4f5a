use proptest::{prop_assert, prop_assert_eq, proptest};
use void_base::{diagnostic::Storage, log::Severity};

use super::{scan, scan_with_handler};
use crate::{
    error::Error,
    token::{Token, TokenKind},
};

const SOURCE_NAME: &str = "main.void";

fn texts(tokens: &[Token]) -> Vec<&str> { tokens.iter().map(|token| token.text.as_str()).collect() }

fn kinds(tokens: &[Token]) -> Vec<TokenKind> { tokens.iter().map(|token| token.kind).collect() }

fn positions(tokens: &[Token]) -> Vec<(usize, usize)> {
    tokens
        .iter()
        .map(|token| (token.location.line, token.location.column))
        .collect()
}

#[test]
fn empty_text() {
    assert!(scan(SOURCE_NAME, "").is_empty());
}

#[test]
fn whitespace_characters_are_never_merged() {
    let tokens = scan(SOURCE_NAME, "  \t\r\n\n");

    assert_eq!(texts(&tokens), [" ", " ", "\t", "\r", "\n", "\n"]);
    assert!(tokens
        .iter()
        .all(|token| token.kind == TokenKind::Whitespace));
}

#[test]
fn symbols_are_single_character_tokens() {
    let tokens = scan(SOURCE_NAME, "f(x);");

    assert_eq!(texts(&tokens), ["f", "(", "x", ")", ";"]);
    assert_eq!(
        kinds(&tokens),
        [
            TokenKind::Unclassified,
            TokenKind::Symbol,
            TokenKind::Unclassified,
            TokenKind::Symbol,
            TokenKind::Symbol
        ]
    );
}

#[test]
fn operator_runs_are_split_from_word_runs() {
    let tokens = scan(SOURCE_NAME, "a+=1;");
    assert_eq!(texts(&tokens), ["a", "+=", "1", ";"]);

    let tokens = scan(SOURCE_NAME, "x==-y->z");
    assert_eq!(texts(&tokens), ["x", "==-", "y", "->", "z"]);
}

#[test]
fn trailing_token_is_flushed() {
    let tokens = scan(SOURCE_NAME, "return");

    assert_eq!(texts(&tokens), ["return"]);
    assert_eq!(positions(&tokens), [(1, 6)]);
}

#[test]
fn line_comment_stops_before_new_line() {
    let tokens = scan(SOURCE_NAME, "// comment\nfn");

    assert_eq!(texts(&tokens), ["// comment", "\n", "fn"]);
    assert_eq!(
        kinds(&tokens),
        [
            TokenKind::Comment,
            TokenKind::Whitespace,
            TokenKind::Unclassified
        ]
    );
    assert_eq!(positions(&tokens), [(1, 10), (1, 11), (2, 2)]);
}

#[test]
fn line_comment_absorbs_symbols_and_comment_openers() {
    let tokens = scan(SOURCE_NAME, "//a; /* b */ {c}");

    assert_eq!(texts(&tokens), ["//a; /* b */ {c}"]);
    assert_eq!(kinds(&tokens), [TokenKind::Comment]);
}

#[test]
fn delimited_comment_is_closed() {
    let tokens = scan(SOURCE_NAME, "/* a */x");

    assert_eq!(texts(&tokens), ["/* a */", "x"]);
    assert_eq!(kinds(&tokens), [TokenKind::Comment, TokenKind::Unclassified]);
}

#[test]
fn delimited_comment_spans_lines() {
    let tokens = scan(SOURCE_NAME, "/* a\n b; */ x");

    assert_eq!(texts(&tokens), ["/* a\n b; */", " ", "x"]);
    assert_eq!(positions(&tokens), [(2, 6), (2, 7), (2, 8)]);
}

#[test]
fn delimited_comment_closing_does_not_overlap_opening() {
    let tokens = scan(SOURCE_NAME, "/*/ */y");
    assert_eq!(texts(&tokens), ["/*/ */", "y"]);

    let tokens = scan(SOURCE_NAME, "/**/y");
    assert_eq!(texts(&tokens), ["/**/", "y"]);

    let tokens = scan(SOURCE_NAME, "/* a **/y");
    assert_eq!(texts(&tokens), ["/* a **/", "y"]);
}

#[test]
fn operators_preceding_a_comment_are_split_off() {
    let tokens = scan(SOURCE_NAME, "a +// note");

    assert_eq!(texts(&tokens), ["a", " ", "+", "// note"]);
    assert_eq!(
        kinds(&tokens),
        [
            TokenKind::Unclassified,
            TokenKind::Whitespace,
            TokenKind::Unclassified,
            TokenKind::Comment
        ]
    );
    assert_eq!(positions(&tokens), [(1, 1), (1, 2), (1, 3), (1, 10)]);
}

#[test]
fn unterminated_delimited_comment_runs_to_the_end() {
    let storage: Storage<Error> = Storage::new();
    let tokens = scan_with_handler(SOURCE_NAME, "x;\n  /* never\nclosed", &storage);

    assert_eq!(texts(&tokens), ["x", ";", "\n", " ", " ", "/* never\nclosed"]);
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Comment));

    let errors = storage.into_vec();
    assert_eq!(errors.len(), 1);

    let error = errors[0].as_unterminated_comment().unwrap();
    assert_eq!(error.location.line, 2);
    assert_eq!(error.location.column, 3);
    assert_eq!(&*error.location.source_name, SOURCE_NAME);
    assert_eq!(error.line, "  /* never");

    let rendered = errors[0].to_string();
    assert_eq!(errors[0].severity(), Severity::Warning);
    assert!(rendered.contains("[warning]:"));
    assert!(rendered.contains("main.void:2:3"));
    assert!(rendered.contains("  /* never"));
}

#[test]
fn closed_comments_report_nothing() {
    let storage: Storage<Error> = Storage::new();
    let _ = scan_with_handler(SOURCE_NAME, "/* a */ // b\n/**/", &storage);

    assert!(storage.as_vec().is_empty());
}

#[test]
fn locations_point_at_the_last_character() {
    let tokens = scan(SOURCE_NAME, "fn main\n  return");

    assert_eq!(texts(&tokens), ["fn", " ", "main", "\n", " ", " ", "return"]);
    assert_eq!(
        positions(&tokens),
        [(1, 2), (1, 3), (1, 7), (1, 8), (2, 1), (2, 2), (2, 8)]
    );
    assert!(tokens
        .iter()
        .all(|token| &*token.location.source_name == SOURCE_NAME));
}

#[test]
fn columns_count_characters() {
    let tokens = scan(SOURCE_NAME, "é;ü");

    assert_eq!(texts(&tokens), ["é", ";", "ü"]);
    assert_eq!(positions(&tokens), [(1, 1), (1, 2), (1, 3)]);
}

proptest! {
    #[test]
    fn scanning_is_lossless(text in "[a-z0-9 \t\r\n;:,.{}()\\[\\]+\\-*/%=<>!?\"]{0,64}") {
        let tokens = scan(SOURCE_NAME, &text);

        prop_assert_eq!(texts(&tokens).concat(), text);
        prop_assert!(tokens.iter().all(|token| !token.text.is_empty()));
    }

    #[test]
    fn scanning_any_text_is_lossless(text in proptest::prelude::any::<String>()) {
        let tokens = scan(SOURCE_NAME, &text);

        prop_assert_eq!(texts(&tokens).concat(), text);
        prop_assert!(tokens.iter().all(|token| !token.text.is_empty()));
    }

    #[test]
    fn tokens_are_located_at_their_last_character(
        text in "[a-z \t\n;(){}+\\-*/=]{0,64}"
    ) {
        let tokens = scan(SOURCE_NAME, &text);

        let (mut line, mut column) = (1, 0);
        let mut previous_line = 1;

        for token in &tokens {
            let mut last = (0, 0);

            for character in token.text.chars() {
                column += 1;
                last = (line, column);

                if character == '\n' {
                    line += 1;
                    column = 0;
                }
            }

            prop_assert_eq!((token.location.line, token.location.column), last);
            prop_assert!(token.location.line >= previous_line);
            previous_line = token.location.line;
        }
    }

    #[test]
    fn character_after_new_line_is_at_column_one(
        before in "[a-z ;+]{0,8}",
        after in "[a-z;+]"
    ) {
        let text = format!("{before}\n{after}");
        let tokens = scan(SOURCE_NAME, &text);

        let new_line = tokens.iter().position(|token| token.text == "\n").unwrap();
        let next = &tokens[new_line + 1];

        prop_assert_eq!(next.location.line, 2);
        prop_assert_eq!(next.location.column, next.text.chars().count());
    }
}
