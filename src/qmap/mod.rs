pub mod emit;
pub mod lexer;
pub mod parser;
pub mod repr;
pub mod result;
pub mod tokens;

#[cfg(test)]
mod emit_test;

#[cfg(test)]
mod lexer_test;




pub use emit::{EmitConfig, GoEmitter};
pub use lexer::{Token, TokenIterator, TokenKind};
pub use parser::{parse, parse_brushes, Parser};
pub use repr::{
    Alignment, Brush, Edict, Entity, HalfSpace, Plane, Point, Vec2, Vec3,
    Writes,
};
pub use result::{Error, LineError, Result};
pub use tokens::TokenCursor;
