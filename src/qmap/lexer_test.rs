use crate::qmap;
use qmap::lexer::{TokenIterator, TokenKind};
use std::io::{self, BufReader};

struct ErroringReader {}

impl ErroringReader {
    fn new() -> Self {
        Self {}
    }
}

impl io::Read for ErroringReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "Generic test error"))
    }
}

fn lex(input: &str) -> Vec<(TokenKind, String, u64)> {
    TokenIterator::new(input.as_bytes())
        .map(|res| {
            let token = res.unwrap();
            (token.kind, token.text, u64::from(token.line_number))
        })
        .collect()
}

fn tok(kind: TokenKind, text: &str, line: u64) -> (TokenKind, String, u64) {
    (kind, String::from(text), line)
}

// Successes

#[test]
fn lex_all_kinds() {
    let input = "{\n\"classname\" \"worldspawn\"\n\n( -1.5 0 2e3 ) *water0 // x\n";

    let expected = vec![
        tok(TokenKind::Op, "{", 1),
        tok(TokenKind::Newline, "\n", 1),
        tok(TokenKind::String, "\"classname\"", 2),
        tok(TokenKind::String, "\"worldspawn\"", 2),
        tok(TokenKind::Newline, "\n", 2),
        tok(TokenKind::Nl, "\n", 3),
        tok(TokenKind::Op, "(", 4),
        tok(TokenKind::Op, "-", 4),
        tok(TokenKind::Number, "1.5", 4),
        tok(TokenKind::Number, "0", 4),
        tok(TokenKind::Number, "2e3", 4),
        tok(TokenKind::Op, ")", 4),
        tok(TokenKind::Name, "*water0", 4),
        tok(TokenKind::Op, "//", 4),
        tok(TokenKind::Name, "x", 4),
        tok(TokenKind::Newline, "\n", 4),
        tok(TokenKind::EndMarker, "", 5),
    ];

    assert_eq!(lex(input), expected);
}

#[test]
fn lex_never_signs_numbers() {
    let kinds = lex("-12.5 +0button")
        .into_iter()
        .map(|(kind, text, _)| (kind, text))
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            (TokenKind::Op, String::from("-")),
            (TokenKind::Number, String::from("12.5")),
            (TokenKind::Name, String::from("+0button")),
            (TokenKind::Newline, String::new()),
            (TokenKind::EndMarker, String::new()),
        ]
    );
}

#[test]
fn lex_blank_lines_are_soft_breaks() {
    let kinds = lex("  \t\n\r\nx\r\n")
        .into_iter()
        .map(|(kind, text, _)| (kind, text))
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            (TokenKind::Nl, String::from("\n")),
            (TokenKind::Nl, String::from("\r\n")),
            (TokenKind::Name, String::from("x")),
            (TokenKind::Newline, String::from("\r\n")),
            (TokenKind::EndMarker, String::new()),
        ]
    );
}

#[test]
fn lex_unterminated_last_line() {
    let tokens = lex("{\n}");
    assert_eq!(tokens[2], tok(TokenKind::Op, "}", 2));
    assert_eq!(tokens[3], tok(TokenKind::Newline, "", 2));
    assert_eq!(tokens[4], tok(TokenKind::EndMarker, "", 3));
    assert_eq!(tokens.len(), 5);
}

#[test]
fn lex_empty_input() {
    assert_eq!(lex(""), vec![tok(TokenKind::EndMarker, "", 1)]);
}

#[test]
fn lex_numbers_that_floats_reject() {
    let tokens = lex("0x1F 1_000");
    assert_eq!(tokens[0], tok(TokenKind::Number, "0x1F", 1));
    assert_eq!(tokens[1], tok(TokenKind::Number, "1_000", 1));
}

#[test]
fn lex_ends_after_end_marker() {
    let mut iter = TokenIterator::new(&b"x"[..]);
    assert_eq!(iter.by_ref().count(), 3);
    assert!(iter.next().is_none());
}

// Failures

#[test]
fn lex_unknown_character() {
    let tokens = lex("a $ b");
    assert_eq!(tokens[0], tok(TokenKind::Name, "a", 1));
    assert_eq!(tokens[1], tok(TokenKind::ErrorToken, "$", 1));
    assert_eq!(tokens[2], tok(TokenKind::Name, "b", 1));
}

#[test]
fn lex_io_error() {
    let reader = BufReader::new(ErroringReader::new());
    let mut iter = TokenIterator::new(reader);

    if let Some(Err(qmap::Error::Io(io_error))) = iter.next() {
        assert!(io_error.to_string().contains("Generic test error"));
    } else {
        panic!("Expected error");
    }

    assert!(iter.next().is_none());
}
