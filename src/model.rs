//! Document Model
//!
//! Units of text handed to validators. Pure data, no inspection logic.

use serde::Serialize;
use std::fmt;

/// Where a sentence starts in its source document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 0-based character column within the line
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}

/// One sentence extracted from a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Raw sentence text, exactly as extracted
    pub content: String,
    pub position: Position,
}

impl Sentence {
    pub fn new(content: impl Into<String>, position: Position) -> Self {
        Self {
            content: content.into(),
            position,
        }
    }

    /// Sentence without meaningful position (first line, column zero)
    pub fn from_text(content: impl Into<String>) -> Self {
        Self::new(content, Position::new(1, 0))
    }
}
