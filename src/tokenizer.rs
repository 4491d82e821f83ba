//! @ai:module:intent Split hash-comment source text into the token stream rules consume
//! @ai:module:layer infrastructure
//! @ai:module:public_api tokenize
//! @ai:module:depends_on token, error
//! @ai:module:stateless true
//!
//! Rows and columns are 1-based; columns count characters. Indentation is not
//! tokenized. The stream always ends with an empty `Other` end marker.

use crate::error::{Error, Result};
use crate::token::{Position, Token, TokenKind};

/// @ai:intent Tokenize a whole source text
/// @ai:pre none; any text is accepted
/// @ai:post tokens are in source order and end with an empty end marker
/// @ai:example ("a = \"b\"") -> [a, =, "b", LogicalNewline, end marker]
/// @ai:effects pure
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokenizer = Tokenizer::default();
    let mut rows = 0;

    for (idx, line) in source.split_inclusive('\n').enumerate() {
        rows = idx + 1;
        tokenizer.scan_line(rows, line);
    }

    if let Some(pending) = tokenizer.pending {
        return Err(Error::Tokenize {
            row: pending.start.row,
            message: "unterminated triple-quoted string".to_string(),
        });
    }

    let mut tokens = tokenizer.tokens;
    tokens.push(Token::new(TokenKind::Other, "", (rows + 1, 1), (rows + 1, 1)));
    Ok(tokens)
}

/// Triple-quoted string still open at the end of a line.
#[derive(Debug)]
struct PendingString {
    quote: char,
    start: Position,
    text: String,
}

#[derive(Debug, Default)]
struct Tokenizer {
    tokens: Vec<Token>,
    /// Open bracket count; line breaks inside brackets are not logical.
    depth: usize,
    /// Code seen since the last logical newline.
    logical_open: bool,
    pending: Option<PendingString>,
}

impl Tokenizer {
    fn scan_line(&mut self, row: usize, line: &str) {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);
        let chars: Vec<(usize, char)> = body.char_indices().collect();
        let mut i = 0;
        let mut continued = false;

        if let Some(mut pending) = self.pending.take() {
            match find_triple_close(&chars, 0, pending.quote) {
                Some(close) => {
                    pending.text.push_str(&body[..byte_at(&chars, body, close)]);
                    self.push_other(pending.text, pending.start, Position::new(row, close + 1));
                    i = close;
                }
                None => {
                    pending.text.push_str(line);
                    self.pending = Some(pending);
                    return;
                }
            }
        }

        while i < chars.len() {
            let c = chars[i].1;

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c == '#' {
                let text = &body[chars[i].0..];
                self.tokens.push(Token::new(
                    TokenKind::Comment,
                    text,
                    (row, i + 1),
                    (row, chars.len() + 1),
                ));
                break;
            }

            if c == '\\' && i + 1 == chars.len() {
                continued = true;
                break;
            }

            if is_quote(c) {
                i = self.scan_string(row, line, body, &chars, i, i);
                continue;
            }

            if is_word(c) {
                let mut end = i;
                while end < chars.len() && is_word(chars[end].1) {
                    end += 1;
                }
                let word = &body[chars[i].0..byte_at(&chars, body, end)];
                if end < chars.len() && is_quote(chars[end].1) && is_string_prefix(word) {
                    i = self.scan_string(row, line, body, &chars, i, end);
                } else {
                    self.push_other(word, Position::new(row, i + 1), Position::new(row, end + 1));
                    i = end;
                }
                continue;
            }

            match c {
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
            let text = &body[chars[i].0..byte_at(&chars, body, i + 1)];
            self.push_other(text, Position::new(row, i + 1), Position::new(row, i + 2));
            i += 1;
        }

        // a string spanning lines or a trailing backslash joins the next line
        if self.pending.is_some() || continued {
            return;
        }

        let kind = if self.logical_open && self.depth == 0 {
            self.logical_open = false;
            TokenKind::LogicalNewline
        } else {
            TokenKind::Newline
        };
        let col = chars.len() + 1;
        self.tokens.push(Token::new(kind, &line[body.len()..], (row, col), (row, col + 1)));
    }

    /// @ai:intent Consume a string literal starting at `start` whose quote is at `quote_at`
    /// @ai:post returns the char index right after the literal on this line
    fn scan_string(
        &mut self,
        row: usize,
        line: &str,
        body: &str,
        chars: &[(usize, char)],
        start: usize,
        quote_at: usize,
    ) -> usize {
        let quote = chars[quote_at].1;
        let begin = Position::new(row, start + 1);
        let triple = quote_at + 2 < chars.len()
            && chars[quote_at + 1].1 == quote
            && chars[quote_at + 2].1 == quote;

        if triple {
            return match find_triple_close(chars, quote_at + 3, quote) {
                Some(close) => {
                    let text = &body[chars[start].0..byte_at(chars, body, close)];
                    self.push_other(text, begin, Position::new(row, close + 1));
                    close
                }
                None => {
                    self.logical_open = true;
                    self.pending = Some(PendingString {
                        quote,
                        start: begin,
                        text: line[chars[start].0..].to_string(),
                    });
                    chars.len()
                }
            };
        }

        // unterminated single-line strings stop at the end of the line
        let mut j = quote_at + 1;
        while j < chars.len() {
            let c = chars[j].1;
            j += 1;
            if c == '\\' {
                j += 1;
            } else if c == quote {
                break;
            }
        }
        let end = j.min(chars.len());
        let text = &body[chars[start].0..byte_at(chars, body, end)];
        self.push_other(text, begin, Position::new(row, end + 1));
        end
    }

    fn push_other(&mut self, text: impl Into<String>, start: Position, end: Position) {
        self.logical_open = true;
        self.tokens.push(Token::new(TokenKind::Other, text, start, end));
    }
}

fn find_triple_close(chars: &[(usize, char)], from: usize, quote: char) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        let c = chars[j].1;
        if c == '\\' {
            j += 2;
            continue;
        }
        if c == quote && j + 2 < chars.len() && chars[j + 1].1 == quote && chars[j + 2].1 == quote {
            return Some(j + 3);
        }
        j += 1;
    }
    None
}

fn byte_at(chars: &[(usize, char)], body: &str, idx: usize) -> usize {
    chars.get(idx).map(|(b, _)| *b).unwrap_or(body.len())
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_string_prefix(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "r" | "u" | "b" | "f" | "br" | "rb" | "fr" | "rf"
    )
}
