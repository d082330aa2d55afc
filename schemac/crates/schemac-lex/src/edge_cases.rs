//! Edge case tests for schemac-lex

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use crate::{
    tokenize, ByteSource, LexErrorKind, LexState, Lexed, Lexer, SourceBuffer, Token, TokenKind,
    KEYWORDS,
};

/// A byte source that records how often it was closed.
struct TrackingSource {
    inner: SourceBuffer,
    closes: Rc<Cell<u32>>,
}

impl ByteSource for TrackingSource {
    fn read_byte(&mut self) -> Option<u8> {
        self.inner.read_byte()
    }

    fn push_back(&mut self) {
        self.inner.push_back();
    }

    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
        self.inner.close();
    }
}

fn tracking(source: &str) -> (Lexer<TrackingSource>, Rc<Cell<u32>>) {
    let closes = Rc::new(Cell::new(0));
    let source = TrackingSource {
        inner: SourceBuffer::from(source),
        closes: Rc::clone(&closes),
    };
    (Lexer::new(source), closes)
}

fn drain(lexer: &mut Lexer<impl ByteSource>) -> Vec<Lexed> {
    std::iter::from_fn(|| lexer.next_token()).collect()
}

// ==================== SCENARIOS ====================

#[test]
fn test_edge_keyword_scenario() {
    assert_eq!(
        tokenize("u8").unwrap(),
        vec![Token::new(TokenKind::U8, 1, 1), Token::end_of_file(1, 3)]
    );
}

#[test]
fn test_edge_name_scenario() {
    assert_eq!(tokenize("myfield").unwrap()[0].name_text(), Some("myfield"));
}

#[test]
fn test_edge_radix_scenarios() {
    assert_eq!(tokenize("0b1010").unwrap()[0].constant_value(), Some(10));
    assert_eq!(tokenize("0xFF").unwrap()[0].constant_value(), Some(255));
}

#[test]
fn test_edge_unknown_character_has_no_sentinel() {
    let (mut lexer, _) = tracking("$");
    let all = drain(&mut lexer);
    assert_eq!(all.len(), 1);
    assert!(matches!(
        &all[0],
        Lexed::Error(err) if err.kind == LexErrorKind::UnknownCharacter(b'$')
    ));
}

// ==================== TERMINAL STATES ====================

#[test]
fn test_edge_exactly_one_sentinel() {
    let (mut lexer, _) = tracking("<a:u8>\n");
    let all = drain(&mut lexer);
    let sentinels = all
        .iter()
        .filter(|l| matches!(l, Lexed::EndOfStream(_)))
        .count();
    assert_eq!(sentinels, 1);
    assert!(matches!(all.last(), Some(Lexed::EndOfStream(_))));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), None);
    }
    assert_eq!(lexer.location(), (2, 1));
}

#[test]
fn test_edge_nothing_after_error() {
    let (mut lexer, _) = tracking("\t u8");
    assert!(matches!(lexer.next_token(), Some(Lexed::Error(_))));
    let position = lexer.location();
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.location(), position);
    }
    assert_eq!(lexer.state(), LexState::Exhausted);
}

#[test]
fn test_edge_tab_is_unknown() {
    let err = tokenize("u8\tu16").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownCharacter(b'\t'));
    assert_eq!((err.line, err.column), (1, 3));
}

#[test]
fn test_edge_non_ascii_is_unknown() {
    let err = tokenize("<é>").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnknownCharacter(0xC3));
    assert_eq!(err.column, 2);
}

// ==================== RESOURCES ====================

#[test]
fn test_edge_drop_closes_source_once() {
    let (lexer, closes) = tracking("vec");
    assert_eq!(closes.get(), 0);
    drop(lexer);
    assert_eq!(closes.get(), 1);
}

#[test]
fn test_edge_drop_after_error_closes_once() {
    let (mut lexer, closes) = tracking("0q");
    drain(&mut lexer);
    drop(lexer);
    assert_eq!(closes.get(), 1);
}

#[test]
fn test_edge_source_open_until_drop() {
    let mut lexer = Lexer::new(SourceBuffer::from("<a:$>"));
    drain(&mut lexer);
    assert!(!lexer.source().is_closed());
    assert_eq!(lexer.source().as_bytes(), b"<a:$>");
}

// ==================== POSITIONS ====================

#[test]
fn test_edge_crlf_lines() {
    let tokens = tokenize("u8\r\nu16\r\n").unwrap();
    assert_eq!(tokens[1], Token::new(TokenKind::U16, 2, 1));
    assert_eq!(tokens[2], Token::end_of_file(3, 1));
}

#[test]
fn test_edge_newlines_in_comments_count() {
    let tokens = tokenize(";a\n;b\n\n;c\n  skip").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Skip, 5, 3));
}

#[test]
fn test_edge_error_position_on_later_line() {
    let err = tokenize("<a:u8>\n<b:0b12>").unwrap_err();
    assert_eq!((err.line, err.column), (2, 7));
}

#[test]
fn test_edge_only_whitespace() {
    assert_eq!(tokenize("  \n \r\n").unwrap(), vec![Token::end_of_file(3, 1)]);
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_decimal_constants() {
    proptest!(|(value in 1..=u64::MAX)| {
        let tokens = tokenize(value.to_string()).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].constant_value(), Some(value));
    });
}

#[test]
fn test_property_binary_constants() {
    proptest!(|(digits in "[01]{1,64}")| {
        let expected = u64::from_str_radix(&digits, 2).unwrap();
        let tokens = tokenize(format!("0b{digits}")).unwrap();
        prop_assert_eq!(tokens[0].constant_value(), Some(expected));
    });
}

#[test]
fn test_property_hex_constants() {
    proptest!(|(digits in "[0-9a-fA-F]{1,16}", upper in any::<bool>())| {
        let expected = u64::from_str_radix(&digits, 16).unwrap();
        let prefix = if upper { "0X" } else { "0x" };
        let tokens = tokenize(format!("{prefix}{digits}")).unwrap();
        prop_assert_eq!(tokens[0].constant_value(), Some(expected));
    });
}

#[test]
fn test_property_identifiers_keep_text() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,40}")| {
        let tokens = tokenize(input.as_str()).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        match KEYWORDS.iter().find(|(spelling, _)| *spelling == input) {
            Some((_, kind)) => prop_assert_eq!(tokens[0].kind(), *kind),
            None => prop_assert_eq!(tokens[0].name_text(), Some(input.as_str())),
        }
    });
}

#[test]
fn test_property_constant_never_eats_punctuation() {
    proptest!(|(value in 1..=u64::MAX, punct in prop::sample::select(vec![b'<', b'>', b':', b',', b'(', b')', b'-']))| {
        let source = format!("{value}{}", punct as char);
        let tokens = tokenize(source).unwrap();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[0].constant_value(), Some(value));
        prop_assert!(tokens[1].kind().is_punctuation());
    });
}

#[test]
fn test_property_comments_hide_content() {
    proptest!(|(comment in "[ -~]{0,60}")| {
        let tokens = tokenize(format!(";{comment}\nu64")).unwrap();
        prop_assert_eq!(&tokens[0], &Token::new(TokenKind::U64, 2, 1));
    });
}

#[test]
fn test_property_arbitrary_bytes_terminate() {
    proptest!(|(bytes in prop::collection::vec(any::<u8>(), 0..200))| {
        let mut lexer = Lexer::new(SourceBuffer::new(bytes));
        let mut steps = 0usize;
        while lexer.next_token().is_some() {
            steps += 1;
            prop_assert!(steps <= 201);
        }
        prop_assert!(lexer.is_exhausted());
        prop_assert!(lexer.next_token().is_none());
    });
}
