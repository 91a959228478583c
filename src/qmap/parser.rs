use std::io::BufRead;
use std::str::FromStr;

use crate::qmap;
use qmap::lexer::{Token, TokenIterator, TokenKind};
use qmap::repr::{Alignment, Brush, Entity, Plane, Point};
use qmap::tokens::TokenCursor;

const MIN_BRUSH_PLANES: usize = 4;

/// Parses the first entity of a map. Anything after its closing brace is
/// left unread.
pub fn parse<R: BufRead>(reader: R) -> qmap::Result<Entity> {
    Parser::new(TokenIterator::new(reader))?.parse_entity()
}

/// Parses the first entity of a map and keeps only its brushes
pub fn parse_brushes<R: BufRead>(reader: R) -> qmap::Result<Vec<Brush>> {
    parse(reader).map(|entity| entity.brushes)
}

/// Recursive-descent reader for the entity/brush/plane grammar
#[derive(Debug)]
pub struct Parser<I>
where
    I: Iterator<Item = qmap::Result<Token>>,
{
    tokens: TokenCursor<I>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = qmap::Result<Token>>,
{
    pub fn new(tokens: I) -> qmap::Result<Parser<I>> {
        Ok(Parser {
            tokens: TokenCursor::new(tokens)?,
        })
    }

    pub fn parse_entity(&mut self) -> qmap::Result<Entity> {
        let mut entity = Entity::new();
        self.expect_text("{")?;
        self.expect_newline()?;

        while self.tokens.peek().kind == TokenKind::String {
            let (key, value) = self.parse_property()?;

            if let Some(old) = entity.edict.insert(key, value) {
                log::debug!("Duplicate key overwrote value `{}`", old);
            }
        }

        while self.tokens.peek().kind == TokenKind::Nl {
            self.expect_newline()?;
        }

        while self.tokens.peek().match_text("{") {
            entity.brushes.push(self.parse_brush()?);
        }

        self.expect_text("}")?;
        self.expect_newline()?;

        log::debug!(
            "Parsed entity with {} keys and {} brushes",
            entity.edict.len(),
            entity.brushes.len()
        );

        Ok(entity)
    }

    pub fn parse_brush(&mut self) -> qmap::Result<Brush> {
        let mut planes = Vec::with_capacity(MIN_BRUSH_PLANES);
        let line_number = self.expect_text("{")?.line_number;
        self.expect_newline()?;

        while self.tokens.peek().match_text("(") {
            planes.push(self.parse_plane()?);
            self.expect_newline()?;
        }

        self.expect_text("}")?;
        self.expect_newline()?;

        if planes.is_empty() {
            log::warn!("Brush on line {} has no planes", line_number);
        } else {
            log::debug!(
                "Parsed brush on line {} with {} planes",
                line_number,
                planes.len()
            );
        }

        Ok(Brush::new(planes))
    }

    /// Reads one plane; the line break after it belongs to the caller
    pub fn parse_plane(&mut self) -> qmap::Result<Plane> {
        let half_space = [
            self.parse_vertex()?,
            self.parse_vertex()?,
            self.parse_vertex()?,
        ];
        let texture = self.parse_name()?;
        let offset = [self.parse_float()?, self.parse_float()?];
        let rotation = self.parse_float()?;
        let scale = [self.parse_float()?, self.parse_float()?];

        Ok(Plane {
            half_space,
            texture,
            alignment: Alignment {
                offset,
                rotation,
                scale,
            },
        })
    }

    pub fn parse_vertex(&mut self) -> qmap::Result<Point> {
        self.expect_text("(")?;
        let x = self.parse_float()?;
        let y = self.parse_float()?;
        let z = self.parse_float()?;
        self.expect_text(")")?;

        Ok([x, y, z])
    }

    pub fn parse_property(&mut self) -> qmap::Result<(String, String)> {
        let key = self.parse_quoted_string()?;
        let value = self.parse_quoted_string()?;
        self.expect_newline()?;

        Ok((key, value))
    }

    /// Number with an optional leading `-` token
    pub fn parse_float(&mut self) -> qmap::Result<f64> {
        if self.tokens.peek().match_op("-") {
            self.tokens.next()?;
            Ok(-self.parse_number()?)
        } else {
            self.parse_number()
        }
    }

    pub fn parse_number(&mut self) -> qmap::Result<f64> {
        let token = self.expect_kind(TokenKind::Number)?;

        f64::from_str(&token.text).map_err(|e| {
            qmap::Error::from_number(token.text.clone(), token.line_number, e)
        })
    }

    pub fn parse_quoted_string(&mut self) -> qmap::Result<String> {
        let token = self.expect_kind(TokenKind::String)?;
        Ok(strip_quoted(&token.text).to_string())
    }

    pub fn parse_name(&mut self) -> qmap::Result<String> {
        Ok(self.expect_kind(TokenKind::Name)?.text)
    }

    pub fn expect_newline(&mut self) -> qmap::Result<Token> {
        let token = self.tokens.next()?;

        if token.kind.is_line_break() {
            Ok(token)
        } else {
            Err(qmap::Error::from_parser(
                format!("Expected newline, got {}", describe(&token)),
                token.line_number,
            ))
        }
    }

    pub fn expect_kind(&mut self, kind: TokenKind) -> qmap::Result<Token> {
        let token = self.tokens.next()?;

        if token.kind == kind {
            Ok(token)
        } else {
            Err(qmap::Error::from_parser(
                format!("Expected {}, got {}", kind, token.kind),
                token.line_number,
            ))
        }
    }

    pub fn expect_text(&mut self, text: &str) -> qmap::Result<Token> {
        let token = self.tokens.next()?;

        if token.match_text(text) {
            Ok(token)
        } else {
            Err(qmap::Error::from_parser(
                format!("Expected `{}`, got {}", text, describe(&token)),
                token.line_number,
            ))
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Newline | TokenKind::Nl | TokenKind::EndMarker => {
            token.kind.to_string()
        }
        _ => format!("`{}`", token.text),
    }
}

fn strip_quoted(quoted_text: &str) -> &str {
    &quoted_text[1..quoted_text.len() - 1]
}
