#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

pub mod ast;
pub mod errors;
pub mod files;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source file.
///
/// `offset` is a byte offset, `line` and `column` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Arc<str>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Arc<str>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }

    pub fn null() -> Self {
        Position::new(0, 0, 0, Arc::from("<null>"))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `self` through `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}
