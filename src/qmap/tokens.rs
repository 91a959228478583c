use std::mem;
use std::num::NonZeroU64;

use crate::qmap;
use qmap::lexer::{Token, TokenKind};

const COMMENT_MARKER: &str = "//";

/// Cursor over a raw token stream that hides `//` line comments and keeps
/// exactly one token buffered for lookahead.
#[derive(Debug)]
pub struct TokenCursor<I>
where
    I: Iterator<Item = qmap::Result<Token>>,
{
    tokens: I,
    current: Token,
}

impl<I> TokenCursor<I>
where
    I: Iterator<Item = qmap::Result<Token>>,
{
    pub fn new(tokens: I) -> qmap::Result<TokenCursor<I>> {
        let mut cursor = TokenCursor {
            tokens,
            current: end_marker(NonZeroU64::MIN),
        };
        cursor.advance()?;
        Ok(cursor)
    }

    /// Replaces the buffered token with the next one outside any comment
    pub fn advance(&mut self) -> qmap::Result<()> {
        self.pull()?;

        while self.current.match_op(COMMENT_MARKER) {
            log::trace!("Skipping comment on line {}", self.current.line_number);

            while !self.current.kind.is_line_break()
                && self.current.kind != TokenKind::EndMarker
            {
                self.pull()?;
            }

            if self.current.kind != TokenKind::EndMarker {
                self.pull()?;
            }
        }

        Ok(())
    }

    /// Hands out the buffered token and moves past it; at the end of the
    /// stream the end marker is returned again on every call.
    pub fn next(&mut self) -> qmap::Result<Token> {
        if self.current.kind == TokenKind::EndMarker {
            return Ok(self.current.clone());
        }

        let line_number = self.current.line_number;
        let token = mem::replace(&mut self.current, end_marker(line_number));
        self.advance()?;
        Ok(token)
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    fn pull(&mut self) -> qmap::Result<()> {
        self.current = match self.tokens.next() {
            Some(token) => token?,
            None => end_marker(self.current.line_number),
        };
        Ok(())
    }
}

fn end_marker(line_number: NonZeroU64) -> Token {
    Token {
        kind: TokenKind::EndMarker,
        text: String::new(),
        line_number,
    }
}
