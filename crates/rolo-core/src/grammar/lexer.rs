//! Tokenizer for raw command lines
//!
//! Splits on whitespace outside quotes and classifies each token by its
//! first character: `/` starts an option, `+` and `-` mark an additive or
//! subtractive parameter, `"` starts a quoted string, anything else is a
//! word. Inside and outside quotes, `\"` stands for a literal quote; every
//! other backslash is kept as-is.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::errors::LexerError;

/// One lexical unit of a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    QuotedString(String),
    Option { key: String, value: Option<String> },
    Additive(String),
    Subtractive(String),
}

/// Tokenize a raw command line
///
/// Whitespace-only input yields an empty vector.
///
/// # Errors
///
/// * `UnterminatedQuote` - a `"` is never closed
/// * `DanglingEscape` - the input ends in a backslash
/// * `MissingMarkedValue` - a `+` or `-` has nothing after it
pub fn tokenize(raw: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(raw).run()
}

struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

/// Decoded text of one whitespace-delimited token
struct RawToken {
    text: String,
    /// Byte offset in `text` of the first `:` written outside quotes
    colon: Option<usize>,
    starts_quoted: bool,
    any_quoted: bool,
}

impl<'a> Lexer<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            chars: raw.char_indices().peekable(),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexerError> {
        loop {
            self.skip_whitespace();
            let Some(&(column, first)) = self.chars.peek() else {
                break;
            };

            let token = match first {
                '/' => {
                    self.chars.next();
                    let raw = self.read_raw()?;
                    match raw.colon {
                        Some(at) => Token::Option {
                            key: raw.text[..at].to_string(),
                            value: Some(raw.text[at + 1..].to_string()),
                        },
                        None => Token::Option {
                            key: raw.text,
                            value: None,
                        },
                    }
                }
                '+' | '-' => {
                    self.chars.next();
                    let raw = self.read_raw()?;
                    if raw.text.is_empty() && !raw.any_quoted {
                        return Err(LexerError::MissingMarkedValue {
                            marker: first,
                            column,
                        });
                    }
                    if first == '+' {
                        Token::Additive(raw.text)
                    } else {
                        Token::Subtractive(raw.text)
                    }
                }
                _ => {
                    let raw = self.read_raw()?;
                    if raw.starts_quoted {
                        Token::QuotedString(raw.text)
                    } else {
                        Token::Word(raw.text)
                    }
                }
            };
            self.tokens.push(token);
        }
        Ok(self.tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    /// Read up to the next unquoted whitespace, decoding quotes and escapes
    fn read_raw(&mut self) -> Result<RawToken, LexerError> {
        let mut raw = RawToken {
            text: String::new(),
            colon: None,
            starts_quoted: matches!(self.chars.peek(), Some((_, '"'))),
            any_quoted: false,
        };

        while let Some(&(column, c)) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            self.chars.next();
            match c {
                '"' => {
                    raw.any_quoted = true;
                    self.read_quoted(column, &mut raw.text)?;
                }
                '\\' => self.read_escape(column, &mut raw.text)?,
                ':' => {
                    if raw.colon.is_none() {
                        raw.colon = Some(raw.text.len());
                    }
                    raw.text.push(c);
                }
                _ => raw.text.push(c),
            }
        }
        Ok(raw)
    }

    /// Read the body of a quoted segment whose opening quote is consumed
    fn read_quoted(&mut self, column: usize, out: &mut String) -> Result<(), LexerError> {
        loop {
            match self.chars.next() {
                None => return Err(LexerError::UnterminatedQuote { column }),
                Some((_, '"')) => return Ok(()),
                Some((at, '\\')) => self.read_escape(at, out)?,
                Some((_, c)) => out.push(c),
            }
        }
    }

    /// Decode the character after a consumed backslash
    fn read_escape(&mut self, column: usize, out: &mut String) -> Result<(), LexerError> {
        match self.chars.peek() {
            None => Err(LexerError::DanglingEscape { column }),
            Some((_, '"')) => {
                self.chars.next();
                out.push('"');
                Ok(())
            }
            Some(_) => {
                out.push('\\');
                Ok(())
            }
        }
    }
}
