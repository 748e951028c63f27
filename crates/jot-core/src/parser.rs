//! Recursive-descent parser building a [`Value`] tree from the token
//! stream.
//!
//! The grammar (entry symbol `value`):
//!
//! ```text
//! value  := 'undefined' | 'null' | bool | int | double | string
//!         | array | object | comment value
//! array  := '[' [ value (',' value)* [','] ] ']'
//! object := '{' [ member (',' member)* [','] ] '}'
//! member := string ':' value
//! ```
//!
//! Trailing commas are accepted before `]` and `}`. A comment where a value
//! is expected attaches to the value that follows it, overwriting any
//! comment that value already carries (the outermost of stacked comments
//! wins). Errors abort the parse at the first failure — callers get either
//! a complete tree or a single [`JotError`](crate::error::JotError) with
//! the 1-based position of the offending construct.

use std::io::Read;
use std::str::FromStr;

use crate::error::{JotError, Result};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::value::{Array, Null, Object, Undefined, Value};

/// Parse a complete Jot document from a string.
///
/// ```rust
/// use jot_core::parse;
///
/// let value = parse("[1, 2, 3,]").unwrap();
/// assert_eq!(value.to_string(), "[1, 2, 3]");
/// ```
pub fn parse(text: &str) -> Result<Value> {
    let mut parser = Parser::new(text)?;
    parser.parse_document()
}

/// Parse a complete Jot document from a blocking reader.
///
/// The reader is consumed to end of input before parsing starts; there is
/// no incremental mode.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

impl FromStr for Value {
    type Err = JotError;

    fn from_str(s: &str) -> Result<Value> {
        parse(s)
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    /// Consume and return the current token, pulling the next one from the
    /// lexer.
    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &'static str) -> JotError {
        JotError::UnexpectedToken {
            line: self.current.line,
            column: self.current.column,
            expected,
            found: self.current.kind.describe(),
        }
    }

    /// The `value` production plus the end-of-input check. Comments after
    /// the document value are allowed and ignored.
    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        while matches!(self.current.kind, TokenKind::Comment(_)) {
            self.advance()?;
        }
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected("end of input"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Comment(comment) => {
                let mut value = self.parse_value()?;
                value.set_comment(comment);
                Ok(value)
            }
            TokenKind::Undefined => Ok(Undefined::new().into()),
            TokenKind::Null => Ok(Null::new().into()),
            TokenKind::Bool(value) => Ok(value.into()),
            TokenKind::Int(value) => Ok(value.into()),
            TokenKind::Double(value) => Ok(value.into()),
            TokenKind::Str(value) => Ok(value.into()),
            TokenKind::SquareOpen => self.parse_array(),
            TokenKind::CurlyOpen => self.parse_object(),
            other => Err(JotError::UnexpectedToken {
                line: token.line,
                column: token.column,
                expected: "a value",
                found: other.describe(),
            }),
        }
    }

    /// `array := '[' [ value (',' value)* [','] ] ']'` — the opening
    /// bracket is already consumed.
    fn parse_array(&mut self) -> Result<Value> {
        let mut array = Array::new();
        if self.current.kind == TokenKind::SquareClose {
            self.advance()?;
            return Ok(array.into());
        }
        loop {
            array.push(self.parse_value()?);
            match self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                    // trailing comma before the closing bracket
                    if self.current.kind == TokenKind::SquareClose {
                        self.advance()?;
                        break;
                    }
                }
                TokenKind::SquareClose => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }
        Ok(array.into())
    }

    /// `object := '{' [ member (',' member)* [','] ] '}'` with
    /// `member := string ':' value` — the opening brace is already
    /// consumed. Duplicate names follow [`Object::set`]: the last value
    /// wins, the first position is kept.
    fn parse_object(&mut self) -> Result<Value> {
        let mut object = Object::new();
        if self.current.kind == TokenKind::CurlyClose {
            self.advance()?;
            return Ok(object.into());
        }
        loop {
            let token = self.advance()?;
            let name = match token.kind {
                TokenKind::Str(name) => name,
                other => {
                    return Err(JotError::UnexpectedToken {
                        line: token.line,
                        column: token.column,
                        expected: "a member name",
                        found: other.describe(),
                    })
                }
            };
            let token = self.advance()?;
            if token.kind != TokenKind::Colon {
                return Err(JotError::UnexpectedToken {
                    line: token.line,
                    column: token.column,
                    expected: "':'",
                    found: token.kind.describe(),
                });
            }
            let value = self.parse_value()?;
            object.set(name, value);
            match self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                    // trailing comma before the closing brace
                    if self.current.kind == TokenKind::CurlyClose {
                        self.advance()?;
                        break;
                    }
                }
                TokenKind::CurlyClose => {
                    self.advance()?;
                    break;
                }
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }
        Ok(object.into())
    }
}
