//! Tokenizer for the Jot textual format.
//!
//! Converts a character stream into a flat sequence of lexical tokens for
//! the parser, tracking the 1-based line/column of every token start for
//! diagnostics. Beyond strict JSON the lexer accepts:
//!
//! - `//` line and `/* */` block comments, surfaced as [`TokenKind::Comment`]
//! - single- or double-quoted strings, with `\"` `\'` `\\` `\t` `\n` `\r`
//!   escapes and an escaped literal newline as a line continuation
//! - the unquoted reserved words `null`, `undefined`, `true`, `false`;
//!   other identifiers pass through for the parser to reject in context

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{JotError, Result};

/// A single lexical unit together with the position of its first character.
///
/// Tokens live only for the duration of a parse and never escape the crate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Colon,
    Comma,
    SquareOpen,
    SquareClose,
    CurlyOpen,
    CurlyClose,
    Comment(String),
    Identifier(String),
    Str(String),
    Bool(bool),
    Int(i64),
    Double(f64),
    Null,
    Undefined,
    Eof,
}

impl TokenKind {
    /// Short description used in "expected X, found Y" diagnostics.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::SquareOpen => "'['".to_string(),
            TokenKind::SquareClose => "']'".to_string(),
            TokenKind::CurlyOpen => "'{'".to_string(),
            TokenKind::CurlyClose => "'}'".to_string(),
            TokenKind::Comment(_) => "a comment".to_string(),
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::Str(_) => "a string literal".to_string(),
            TokenKind::Bool(value) => format!("'{value}'"),
            TokenKind::Int(_) => "an integer literal".to_string(),
            TokenKind::Double(_) => "a floating-point literal".to_string(),
            TokenKind::Null => "'null'".to_string(),
            TokenKind::Undefined => "'undefined'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// Single-character-lookahead lexer over a borrowed input string.
pub(crate) struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Read the next token, skipping any whitespace before it. At end of
    /// input this keeps returning [`TokenKind::Eof`].
    pub(crate) fn next_token(&mut self) -> Result<Token> {
        loop {
            let line = self.line;
            let column = self.column;
            let Some(c) = self.bump() else {
                return Ok(Token {
                    line,
                    column,
                    kind: TokenKind::Eof,
                });
            };
            let kind = match c {
                ':' => TokenKind::Colon,
                ',' => TokenKind::Comma,
                '[' => TokenKind::SquareOpen,
                ']' => TokenKind::SquareClose,
                '{' => TokenKind::CurlyOpen,
                '}' => TokenKind::CurlyClose,
                '/' => TokenKind::Comment(self.read_comment(line, column)?),
                '"' | '\'' => TokenKind::Str(self.read_string(c, line, column)?),
                ' ' | '\t' | '\n' | '\r' => continue,
                c if c.is_ascii_digit() || c == '-' => self.read_number(c, line, column)?,
                c if is_identifier_start(c) => self.read_identifier(c),
                other => {
                    return Err(JotError::UnexpectedCharacter {
                        line,
                        column,
                        found: other,
                    })
                }
            };
            return Ok(Token { line, column, kind });
        }
    }

    /// Consume one character, keeping the line/column counters current.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Body of a `//` or `/* */` comment; the leading `/` is already
    /// consumed and `line`/`column` point at it.
    fn read_comment(&mut self, line: usize, column: usize) -> Result<String> {
        let mut text = String::new();
        match self.bump() {
            Some('/') => {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                    text.push(c);
                }
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            Some('*') => loop {
                let Some(c) = self.bump() else {
                    return Err(JotError::UnterminatedComment { line, column });
                };
                if c == '*' && self.peek() == Some('/') {
                    self.bump();
                    break;
                }
                text.push(c);
            },
            Some(other) => {
                return Err(JotError::UnexpectedCharacter {
                    line,
                    column,
                    found: other,
                })
            }
            None => return Err(JotError::UnterminatedComment { line, column }),
        }
        Ok(text)
    }

    /// Body of a string literal; `delimiter` is the opening quote, already
    /// consumed, and `line`/`column` point at it. Both quote characters may
    /// be escaped regardless of the active delimiter; an escaped literal
    /// newline contributes no character.
    fn read_string(&mut self, delimiter: char, line: usize, column: usize) -> Result<String> {
        let mut text = String::new();
        loop {
            let escape_line = self.line;
            let escape_column = self.column;
            let Some(c) = self.bump() else {
                return Err(JotError::UnterminatedString { line, column });
            };
            if c == delimiter {
                return Ok(text);
            }
            if c != '\\' {
                text.push(c);
                continue;
            }
            match self.bump() {
                Some('"') => text.push('"'),
                Some('\'') => text.push('\''),
                Some('\\') => text.push('\\'),
                Some('t') => text.push('\t'),
                Some('n') => text.push('\n'),
                Some('r') => text.push('\r'),
                // line continuation
                Some('\n') => {}
                Some(other) => {
                    return Err(JotError::InvalidEscape {
                        line: escape_line,
                        column: escape_column,
                        found: other,
                    })
                }
                None => return Err(JotError::UnterminatedString { line, column }),
            }
        }
    }

    /// Integer or floating-point literal; `first` is the leading digit or
    /// minus sign, already consumed. A fraction or exponent produces a
    /// Double token; plain integers produce Int, falling back to Double
    /// when the magnitude exceeds `i64`.
    fn read_number(&mut self, first: char, line: usize, column: usize) -> Result<TokenKind> {
        let mut text = String::new();
        text.push(first);
        if first == '-' && !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(JotError::UnexpectedCharacter {
                line,
                column,
                found: '-',
            });
        }
        self.read_digits(&mut text);
        let mut is_double = false;
        if self.peek() == Some('.') {
            is_double = true;
            text.push('.');
            self.bump();
            self.require_digits(&mut text)?;
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            is_double = true;
            text.push('e');
            self.bump();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                text.push(sign);
                self.bump();
            }
            self.require_digits(&mut text)?;
        }
        let kind = if is_double {
            match text.parse::<f64>() {
                Ok(value) => TokenKind::Double(value),
                Err(_) => return Err(malformed_number(line, column, text)),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => TokenKind::Int(value),
                // magnitude beyond i64
                Err(_) => match text.parse::<f64>() {
                    Ok(value) => TokenKind::Double(value),
                    Err(_) => return Err(malformed_number(line, column, text)),
                },
            }
        };
        Ok(kind)
    }

    /// Append any run of decimal digits to `text`.
    fn read_digits(&mut self, text: &mut String) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.bump();
        }
    }

    /// Append a run of decimal digits to `text`; at least one is required.
    fn require_digits(&mut self, text: &mut String) -> Result<()> {
        let line = self.line;
        let column = self.column;
        let before = text.len();
        self.read_digits(text);
        if text.len() > before {
            return Ok(());
        }
        match self.peek() {
            Some(found) => Err(JotError::UnexpectedCharacter {
                line,
                column,
                found,
            }),
            None => Err(JotError::UnexpectedToken {
                line,
                column,
                expected: "a digit",
                found: "end of input".to_string(),
            }),
        }
    }

    /// Identifier or reserved word; `first` is already consumed.
    fn read_identifier(&mut self, first: char) -> TokenKind {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.peek() {
            if !is_identifier_continue(c) {
                break;
            }
            text.push(c);
            self.bump();
        }
        match text.as_str() {
            "null" => TokenKind::Null,
            "undefined" => TokenKind::Undefined,
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            _ => TokenKind::Identifier(text),
        }
    }
}

fn malformed_number(line: usize, column: usize, text: String) -> JotError {
    JotError::UnexpectedToken {
        line,
        column,
        expected: "a number",
        found: format!("'{text}'"),
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
