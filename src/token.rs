//! @ai:module:intent Define the normalized lexical token consumed by rules
//! @ai:module:layer domain
//! @ai:module:public_api Token, TokenKind, Position
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Classifies a token by what the rules care about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `#` up to the end of the line
    Comment,
    /// Non-logical line break: blank line, comment-only line, break inside brackets
    Newline,
    /// End of a logical line of code
    LogicalNewline,
    Other,
}

/// @ai:intent A 1-based row and column in the source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// @ai:intent One lexical token, immutable after construction
/// @ai:invariant fields are never mutated once built
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    start: Position,
    end: Position,
}

impl Token {
    /// @ai:intent Build a token from a raw lexer tuple
    /// @ai:effects pure
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        start: impl Into<Position>,
        end: impl Into<Position>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// @ai:intent Convenience constructor for a single-line comment
    /// @ai:example (1, 3, "# TODO: x") -> Comment spanning cols 3..12
    pub fn comment(row: usize, col: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = col + text.chars().count();
        Self::new(TokenKind::Comment, text, (row, col), (row, end))
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn start_row(&self) -> usize {
        self.start.row
    }

    pub fn start_col(&self) -> usize {
        self.start.col
    }

    pub fn end_row(&self) -> usize {
        self.end.row
    }

    pub fn end_col(&self) -> usize {
        self.end.col
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    /// @ai:intent Check for either kind of line break
    pub fn is_line_break(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::LogicalNewline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_fields() {
        let token = Token::new(TokenKind::Other, "a", (1, 1), (1, 2));

        assert_eq!(token.kind(), TokenKind::Other);
        assert_eq!(token.text(), "a");
        assert_eq!(token.start_row(), 1);
        assert_eq!(token.start_col(), 1);
        assert_eq!(token.end_row(), 1);
        assert_eq!(token.end_col(), 2);
    }

    #[test]
    fn test_comment_constructor() {
        let token = Token::comment(4, 3, "# TODO: x");

        assert!(token.is_comment());
        assert!(!token.is_line_break());
        assert_eq!(token.start(), Position::new(4, 3));
        assert_eq!(token.end(), Position::new(4, 12));
    }
}
