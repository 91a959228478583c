use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::num::NonZeroU64;

use logos::Logos;

use crate::qmap;

const LINE_CAPACITY: usize = 128;

/// Classification of a token, named the way diagnostics print them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Op,
    Name,
    String,
    Number,
    /// Line break ending a line that held at least one token
    Newline,
    /// Line break ending a blank line
    Nl,
    EndMarker,
    /// Text no lexer rule accepts
    ErrorToken,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Op => "OP",
            TokenKind::Name => "NAME",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Nl => "NL",
            TokenKind::EndMarker => "ENDMARKER",
            TokenKind::ErrorToken => "ERRORTOKEN",
        }
    }

    pub fn is_line_break(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Nl)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line_number: NonZeroU64,
}

impl Token {
    pub fn match_text(&self, text: &str) -> bool {
        self.text == text
    }

    pub fn match_op(&self, text: &str) -> bool {
        self.kind == TokenKind::Op && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} `{}`: line {}", self.kind, self.text, self.line_number)
    }
}

/// Character-level rules applied to a single line, terminator excluded
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\x0C]+")]
enum RawToken {
    #[token("//")]
    #[token("{")]
    #[token("}")]
    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token("-")]
    #[token("+")]
    #[token("*")]
    #[token("/")]
    #[token(",")]
    #[token(".")]
    #[token(":")]
    #[token(";")]
    #[token("=")]
    Op,

    // Special textures (liquids, animations) carry a `*` or `+` sigil
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"[*+][A-Za-z0-9_+*]+")]
    Name,

    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r"[0-9][0-9_]*(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9A-Fa-f_]+")]
    Number,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> TokenKind {
        match raw {
            RawToken::Op => TokenKind::Op,
            RawToken::Name => TokenKind::Name,
            RawToken::String => TokenKind::String,
            RawToken::Number => TokenKind::Number,
        }
    }
}

/// Pulls lines from a reader on demand and yields their tokens, each line
/// closed by a `Newline` or `Nl` token and the stream closed by one
/// `EndMarker`.
#[derive(Debug)]
pub struct TokenIterator<R: BufRead> {
    reader: R,
    line: String,
    line_number: NonZeroU64,
    pending: VecDeque<Token>,
    finished: bool,
}

impl<R: BufRead> TokenIterator<R> {
    pub fn new(reader: R) -> TokenIterator<R> {
        TokenIterator {
            reader,
            line: String::with_capacity(LINE_CAPACITY),
            line_number: NonZeroU64::MIN,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    fn lex_next_line(&mut self) -> qmap::Result<()> {
        self.line.clear();

        if self.reader.read_line(&mut self.line)? == 0 {
            self.pending.push_back(Token {
                kind: TokenKind::EndMarker,
                text: String::new(),
                line_number: self.line_number,
            });
            self.finished = true;
            return Ok(());
        }

        let line_number = self.line_number;
        self.line_number = self.line_number.saturating_add(1);

        let content = self.line.trim_end_matches(['\r', '\n']);
        let terminator = &self.line[content.len()..];
        let mut lexer = RawToken::lexer(content);
        let mut has_content = false;

        while let Some(result) = lexer.next() {
            let kind = match result {
                Ok(raw) => TokenKind::from(raw),
                Err(()) => TokenKind::ErrorToken,
            };

            has_content = true;
            self.pending.push_back(Token {
                kind,
                text: lexer.slice().to_string(),
                line_number,
            });
        }

        // A final line without terminator still ends a logical line
        if has_content || !terminator.is_empty() {
            self.pending.push_back(Token {
                kind: if has_content {
                    TokenKind::Newline
                } else {
                    TokenKind::Nl
                },
                text: terminator.to_string(),
                line_number,
            });
        }

        Ok(())
    }
}

impl<R: BufRead> Iterator for TokenIterator<R> {
    type Item = qmap::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            if self.finished {
                return None;
            }

            if let Err(e) = self.lex_next_line() {
                self.finished = true;
                return Some(Err(e));
            }
        }
    }
}
